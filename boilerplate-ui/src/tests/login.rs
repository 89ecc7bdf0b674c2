use wasm_bindgen_test::*;

use super::mount;
use crate::error::UiError;
use crate::login::populate_email;
use crate::{dom, ids};

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn mirrors_email_into_confirmation() {
    mount(r#"<input id="email" value="Ada.Lovelace@example.com"><input id="email-confirm" value="old">"#);

    populate_email().unwrap();

    assert_eq!(dom::value(ids::EMAIL_CONFIRM).unwrap(), "Ada.Lovelace@example.com");
}

#[wasm_bindgen_test]
fn fails_without_email_field() {
    mount(r#"<input id="email-confirm">"#);

    assert!(matches!(
        populate_email(),
        Err(UiError::MissingElement(id)) if id == "email"
    ));
}
