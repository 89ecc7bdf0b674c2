//! Element ids, classes and attributes the server-rendered pages provide

// Login
pub const EMAIL: &str = "email";
pub const EMAIL_CONFIRM: &str = "email-confirm";

// Layout
pub const NAV_SELECTOR: &str = "nav";
pub const SIDENAV_CLOSE: &str = "sidenav-close";
pub const SIDENAV_OPEN_HASH: &str = "#sidenav-open";
pub const INITIAL_SHOWN_SELECTOR: &str = ".initial-shown";
pub const INITIAL_HIDDEN_SELECTOR: &str = ".initial-hidden";

// Password
pub const PASSWORD: &str = "password";
pub const CONFIRM_PASSWORD: &str = "confirm-password";
pub const PASSED_VALIDITY: &str = "passed-validity";
pub const PASSWORD_REQUIREMENTS: &str = "password-requirements";

// Permissions
pub const DEPENDENT_CHECKBOXES_SELECTOR: &str = ".dependent-checkboxes input[type=checkbox]";
pub const DATA_REQUIRES: &str = "data-requires";
pub const DATA_REQUIRED_BY: &str = "data-required-by";
pub const PERMISSIONS_FORM: &str = "permissions-form";

// Roles
pub const CREATE_EDIT_ROLE_MODAL_HEADER: &str = "create-edit-role-modal-header";
pub const ROLE_ID: &str = "role-id";
pub const ROLE_NAME: &str = "role-name";
pub const ROLE_DESCRIPTION: &str = "role-description";
pub const ROLE_HIDDEN: &str = "role-hidden";
pub const ROLE_SYSTEM: &str = "role-system";
pub const DELETE_ROLE_MODAL_HEADER: &str = "delete-role-modal-header";
pub const DELETE_ROLE_CONFIRM: &str = "delete-role-confirm";
pub const DELETE_ROLE_ID: &str = "delete-role-id";
pub const DELETE_ROLE_COUNT: &str = "delete-role-count";
pub const DELETE_ROLE_FORM: &str = "delete-role-form";
pub const DISABLED_ROLE_NAME: &str = "disabled-role-name";
pub const REPLACEMENT_ROLE_ID: &str = "replacement-role-id";
pub const REPLACEMENT_INFO: &str = "replacement-info";

// Users
pub const CREATE_USER_FORM: &str = "create-user-form";
pub const UPDATE_USER_FORM: &str = "update-user-form";

// Selectors
pub const CHECKBOX_SELECTOR: &str = "input[type=checkbox]";
pub const TEXT_INPUT_SELECTOR: &str = "input[type=text]";
pub const OPTION_SELECTOR: &str = "option";

// Classes
pub const HIDDEN_CLASS: &str = "d-none";
pub const FLASHED_CLASS: &str = "flashed";
pub const INVALID_CLASS: &str = "is-invalid";
