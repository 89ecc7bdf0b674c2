use boilerplate_common::RoleRecord;
use wasm_bindgen_test::*;
use web_sys::{HtmlOptionElement, HtmlSelectElement};

use super::{checkbox, display_of, has_class, mount};
use crate::roles::{clear_modal, confirm_delete_role, delete_role, edit_role};
use crate::{dom, ids};

wasm_bindgen_test_configure!(run_in_browser);

const EDIT_MODAL: &str = r#"
    <h5 id="create-edit-role-modal-header">Editing Role "Old"</h5>
    <input type="hidden" id="role-id" value="r-0">
    <input type="text" id="role-name" value="Old">
    <textarea id="role-description">old description</textarea>
    <input type="checkbox" id="role-hidden">
    <div class="dependent-checkboxes">
        <input type="checkbox" id="view_users" checked>
        <input type="checkbox" id="edit_users">
    </div>
"#;

const DELETE_MODAL: &str = r#"
    <h5 id="delete-role-modal-header"></h5>
    <form id="delete-role-form" target="sink" action="about:blank">
        <input type="text" id="delete-role-confirm" class="form-control is-invalid" value="typo">
        <input type="hidden" id="disabled-role-name">
        <input type="hidden" id="delete-role-id">
        <input type="hidden" id="delete-role-count">
        <div id="replacement-info">
            <select id="replacement-role-id">
                <option id="opt-admins" value="r1">Admins</option>
                <option id="opt-editors" value="r2">Editors</option>
                <option id="opt-viewers" value="r3">Viewers</option>
            </select>
        </div>
    </form>
    <iframe name="sink"></iframe>
"#;

fn option_disabled(id: &str) -> bool {
    dom::typed::<HtmlOptionElement>(id).unwrap().disabled()
}

#[wasm_bindgen_test]
fn clear_resets_to_new_role() {
    mount(EDIT_MODAL);

    clear_modal().unwrap();

    let header = dom::element(ids::CREATE_EDIT_ROLE_MODAL_HEADER).unwrap();
    assert_eq!(header.text_content().as_deref(), Some("Create New Role"));
    assert_eq!(dom::value(ids::ROLE_ID).unwrap(), "new");
    assert_eq!(dom::value(ids::ROLE_NAME).unwrap(), "");
    assert!(!checkbox("view_users").checked());
}

#[wasm_bindgen_test]
fn edit_populates_from_record() {
    mount(EDIT_MODAL);

    let role = RoleRecord {
        uuid: "r-7".to_string(),
        name: "Auditors".to_string(),
        description: "Read only access".to_string(),
        hidden: true,
        system: true,
        actions: vec!["edit_users".to_string(), "removed_action".to_string()],
    };
    edit_role(serde_wasm_bindgen::to_value(&role).unwrap()).unwrap();

    let header = dom::element(ids::CREATE_EDIT_ROLE_MODAL_HEADER).unwrap();
    assert_eq!(header.text_content().as_deref(), Some("Editing Role \"Auditors\""));
    assert_eq!(dom::value(ids::ROLE_ID).unwrap(), "r-7");
    assert_eq!(dom::value(ids::ROLE_NAME).unwrap(), "Auditors");
    assert_eq!(dom::value(ids::ROLE_DESCRIPTION).unwrap(), "Read only access");
    assert!(checkbox(ids::ROLE_HIDDEN).checked());
    assert!(checkbox("edit_users").checked());
    assert!(!checkbox("view_users").checked());
}

#[wasm_bindgen_test]
fn edit_accepts_plain_object() {
    mount(EDIT_MODAL);

    let role = js_sys::JSON::parse(r#"{"uuid": "r-8", "name": "Ops", "actions": ["view_users"]}"#)
        .unwrap();
    edit_role(role).unwrap();

    assert_eq!(dom::value(ids::ROLE_DESCRIPTION).unwrap(), "");
    assert!(!checkbox(ids::ROLE_HIDDEN).checked());
    assert!(checkbox("view_users").checked());
}

#[wasm_bindgen_test]
fn edit_rejects_malformed_record() {
    mount(EDIT_MODAL);

    let role = js_sys::JSON::parse(r#"{"name": "No id"}"#).unwrap();
    assert!(edit_role(role).is_err());
}

#[wasm_bindgen_test]
fn delete_without_members_hides_replacement() {
    mount(DELETE_MODAL);

    delete_role("r1", "Admins", 0).unwrap();

    assert_eq!(display_of(ids::REPLACEMENT_INFO), "none");
    assert!(option_disabled("opt-admins"));
    assert!(!option_disabled("opt-editors"));
    assert_eq!(dom::value(ids::DELETE_ROLE_CONFIRM).unwrap(), "");
    assert!(!has_class(ids::DELETE_ROLE_CONFIRM, ids::INVALID_CLASS));
    assert_eq!(dom::value(ids::DELETE_ROLE_COUNT).unwrap(), "0");
}

#[wasm_bindgen_test]
fn delete_with_members_offers_replacement() {
    mount(DELETE_MODAL);

    delete_role("r2", "Editors", 3).unwrap();

    assert_eq!(display_of(ids::REPLACEMENT_INFO), "block");
    assert!(option_disabled("opt-editors"));
    assert!(!option_disabled("opt-admins"));
    assert!(!option_disabled("opt-viewers"));

    let select = dom::typed::<HtmlSelectElement>(ids::REPLACEMENT_ROLE_ID).unwrap();
    assert_eq!(select.value(), "r1");

    let header = dom::element(ids::DELETE_ROLE_MODAL_HEADER).unwrap();
    assert_eq!(header.text_content().as_deref(), Some("Delete Role \"Editors\"?"));
    assert_eq!(dom::value(ids::DISABLED_ROLE_NAME).unwrap(), "Editors");
    assert_eq!(dom::value(ids::DELETE_ROLE_ID).unwrap(), "r2");
}

#[wasm_bindgen_test]
fn confirm_delete_requires_exact_name() {
    mount(DELETE_MODAL);
    delete_role("r2", "Editors", 3).unwrap();

    dom::set_value(ids::DELETE_ROLE_CONFIRM, "editors").unwrap();
    assert!(!confirm_delete_role().unwrap());
    assert!(has_class(ids::DELETE_ROLE_CONFIRM, ids::INVALID_CLASS));

    dom::set_value(ids::DELETE_ROLE_CONFIRM, "Editors").unwrap();
    assert!(confirm_delete_role().unwrap());
}
