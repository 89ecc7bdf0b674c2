//! User management form submission

use boilerplate_common::user::{can_submit_create, can_submit_update, toggle_active_action};
use leptos::{document, logging};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlFormElement, HtmlInputElement};

use crate::dom;
use crate::error::{UiError, UiResult};
use crate::ids;

/// Submit the create form once the password requirements pass
#[wasm_bindgen(js_name = submitUserForm)]
pub fn submit_user_form() -> UiResult<bool> {
    let form = dom::form(ids::CREATE_USER_FORM)?;
    let valid = form.report_validity();
    if !can_submit_create(valid, &dom::value(ids::PASSED_VALIDITY)?) {
        return Ok(false);
    }

    form.submit()?;
    Ok(true)
}

/// Submit the update form. Leaving both password fields empty keeps the
/// current password.
#[wasm_bindgen(js_name = submitUserUpdate)]
pub fn submit_user_update() -> UiResult<bool> {
    let form = dom::form(ids::UPDATE_USER_FORM)?;
    let valid = form.report_validity();

    let password = dom::optional::<HtmlInputElement>(ids::PASSWORD).map(|input| input.value());
    let confirmation =
        dom::optional::<HtmlInputElement>(ids::CONFIRM_PASSWORD).map(|input| input.value());
    let passed_validity = dom::value(ids::PASSED_VALIDITY)?;

    if !can_submit_update(
        valid,
        &passed_validity,
        password.as_deref(),
        confirmation.as_deref(),
    ) {
        return Ok(false);
    }

    form.submit()?;
    Ok(true)
}

/// POST to `/users/{uuid}/toggle-active` through a throwaway form
#[wasm_bindgen(js_name = toggleUserActive)]
pub fn toggle_user_active(user_uuid: &str) -> UiResult<()> {
    post_toggle_active(user_uuid, None).map(drop)
}

/// Build the toggle form, attach it to `<body>` and submit it into
/// `target` (the current page when `None`)
pub(crate) fn post_toggle_active(
    user_uuid: &str,
    target: Option<&str>,
) -> UiResult<HtmlFormElement> {
    let document = document();
    let form = document
        .create_element("form")?
        .dyn_into::<HtmlFormElement>()
        .map_err(|_| UiError::WrongElementType("form".to_string()))?;
    form.set_method("POST");
    form.set_action(&toggle_active_action(user_uuid));
    if let Some(target) = target {
        form.set_target(target);
    }

    let body = document
        .body()
        .ok_or_else(|| UiError::MissingElement("body".to_string()))?;
    body.append_child(&form)?;

    logging::log!("toggling active state of user {}", user_uuid);
    form.submit()?;
    Ok(form)
}
