//! Login page helpers

use wasm_bindgen::prelude::*;

use crate::dom;
use crate::error::UiResult;
use crate::ids;

/// Copy the e-mail address into the confirmation field
#[wasm_bindgen(js_name = populateEmail)]
pub fn populate_email() -> UiResult<()> {
    let email = dom::value(ids::EMAIL)?;
    dom::set_value(ids::EMAIL_CONFIRM, &email)
}
