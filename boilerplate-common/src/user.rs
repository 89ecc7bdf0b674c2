//! User form submission rules

use crate::is_flag_set;

/// Create form: native validity plus a passing password check
pub fn can_submit_create(form_valid: bool, passed_validity: &str) -> bool {
    form_valid && is_flag_set(passed_validity)
}

/// Update form: the password may be left untouched.
///
/// Missing password fields count as empty.
pub fn can_submit_update(
    form_valid: bool,
    passed_validity: &str,
    password: Option<&str>,
    confirmation: Option<&str>,
) -> bool {
    if !form_valid {
        return false;
    }

    let unchanged = password.map_or(true, str::is_empty) && confirmation.map_or(true, str::is_empty);
    is_flag_set(passed_validity) || unchanged
}

/// Form action that flips a user's active state
pub fn toggle_active_action(user_uuid: &str) -> String {
    format!("/users/{}/toggle-active", urlencoding::encode(user_uuid))
}
