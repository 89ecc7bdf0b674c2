//! Create/edit and delete role modals

use boilerplate_common::role::{
    delete_header, needs_replacement, CREATE_ROLE_HEADER, NEW_ROLE_ID,
};
use boilerplate_common::{DeleteConfirmation, ReplacementPlan, RoleRecord};
use leptos::logging;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlElement, HtmlFormElement, HtmlInputElement, HtmlOptionElement, HtmlSelectElement};

use crate::dom;
use crate::error::UiResult;
use crate::ids;
use crate::permissions;

/// Reset the create/edit modal to an empty "new role" form
#[wasm_bindgen(js_name = clearModal)]
pub fn clear_modal() -> UiResult<()> {
    dom::set_text(ids::CREATE_EDIT_ROLE_MODAL_HEADER, CREATE_ROLE_HEADER)?;
    dom::set_value(ids::ROLE_ID, NEW_ROLE_ID)?;

    for checkbox in dom::query_all::<HtmlInputElement>(ids::CHECKBOX_SELECTOR)? {
        checkbox.set_checked(false);
    }
    for textbox in dom::query_all::<HtmlInputElement>(ids::TEXT_INPUT_SELECTOR)? {
        textbox.set_value("");
    }

    Ok(())
}

pub(crate) fn populate_role(role: &RoleRecord) -> UiResult<()> {
    clear_modal()?;

    dom::set_text(ids::CREATE_EDIT_ROLE_MODAL_HEADER, &role.edit_header())?;
    dom::set_value(ids::ROLE_ID, &role.uuid)?;
    dom::set_value(ids::ROLE_NAME, &role.name)?;
    dom::set_value(ids::ROLE_DESCRIPTION, &role.description)?;

    // Only administrators get the hidden/system switches
    if let Some(hidden) = dom::optional::<HtmlInputElement>(ids::ROLE_HIDDEN) {
        hidden.set_checked(role.hidden);
    }
    if let Some(system) = dom::optional::<HtmlInputElement>(ids::ROLE_SYSTEM) {
        system.set_checked(role.system);
    }

    for action in &role.actions {
        match dom::optional::<HtmlInputElement>(action) {
            Some(checkbox) => checkbox.set_checked(true),
            None => logging::warn!("role {} grants {} which has no checkbox", role.name, action),
        }
    }

    permissions::warn_unmet_requirements();
    Ok(())
}

/// Fill the modal from a role object rendered into the page:
/// `editRole({ uuid, name, description, hidden, system, actions })`
#[wasm_bindgen(js_name = editRole)]
pub fn edit_role(role: JsValue) -> UiResult<()> {
    let role: RoleRecord = serde_wasm_bindgen::from_value(role)?;
    populate_role(&role)
}

/// Prepare the delete confirmation modal
#[wasm_bindgen(js_name = deleteRole)]
pub fn delete_role(role_id: &str, role_name: &str, role_count: u32) -> UiResult<()> {
    let confirm = dom::input(ids::DELETE_ROLE_CONFIRM)?;
    confirm.set_value("");
    dom::set_class(&confirm, ids::INVALID_CLASS, false)?;

    let info = dom::typed::<HtmlElement>(ids::REPLACEMENT_INFO)?;
    let display = if needs_replacement(role_count) { "block" } else { "none" };
    dom::set_display(&info, display)?;

    let select = dom::typed::<HtmlSelectElement>(ids::REPLACEMENT_ROLE_ID)?;
    let options = dom::query_all_in::<HtmlOptionElement>(&select, ids::OPTION_SELECTOR)?;
    let values: Vec<String> = options.iter().map(HtmlOptionElement::value).collect();

    let plan = ReplacementPlan::new(role_id, values.as_slice());
    for (option, disabled) in options.iter().zip(&plan.disabled) {
        option.set_disabled(*disabled);
    }
    if let Some(default) = &plan.default {
        select.set_value(default);
    }

    dom::set_text(ids::DELETE_ROLE_MODAL_HEADER, &delete_header(role_name))?;
    dom::set_value(ids::DISABLED_ROLE_NAME, role_name)?;
    dom::set_value(ids::DELETE_ROLE_ID, role_id)?;
    dom::set_value(ids::DELETE_ROLE_COUNT, &role_count.to_string())?;

    Ok(())
}

/// Submit the delete form when the typed name matches the role name
#[wasm_bindgen(js_name = confirmDeleteRole)]
pub fn confirm_delete_role() -> UiResult<bool> {
    let confirm = dom::input(ids::DELETE_ROLE_CONFIRM)?;
    let confirmation = DeleteConfirmation::new(dom::value(ids::DISABLED_ROLE_NAME)?);

    if !confirmation.accepts(&confirm.value()) {
        dom::set_class(&confirm, ids::INVALID_CLASS, true)?;
        return Ok(false);
    }

    dom::typed::<HtmlFormElement>(ids::DELETE_ROLE_FORM)?.submit()?;
    Ok(true)
}
