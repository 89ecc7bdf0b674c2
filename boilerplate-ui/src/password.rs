//! Password requirement feedback on the user forms

use boilerplate_common::flag_value;
use boilerplate_common::password::{render_violations, PasswordPolicy};
use leptos::logging;
use wasm_bindgen::prelude::*;

use crate::dom;
use crate::error::UiResult;
use crate::ids;

/// Check `#password` against `policy`, render the broken rules into
/// `#password-requirements` and store the outcome in `#passed-validity`.
pub(crate) fn report(policy: &PasswordPolicy) -> UiResult<bool> {
    let password = dom::value(ids::PASSWORD)?;
    let confirmation = dom::value(ids::CONFIRM_PASSWORD)?;

    let violations = policy.check(&password, &confirmation);
    dom::element(ids::PASSWORD_REQUIREMENTS)?.set_inner_html(&render_violations(&violations));

    let passed = violations.is_empty();
    dom::set_value(ids::PASSED_VALIDITY, flag_value(passed))?;
    Ok(passed)
}

/// Validate the password fields with rules passed inline by the page
#[allow(clippy::too_many_arguments)]
#[wasm_bindgen(js_name = validatePassword)]
pub fn validate_password(
    min_characters: usize,
    max_characters: usize,
    require_numerals: bool,
    require_upper_case: bool,
    require_lower_case: bool,
    require_special_characters: bool,
    allowed_special_characters: String,
) -> UiResult<bool> {
    let policy = PasswordPolicy {
        min_characters,
        max_characters,
        require_numerals,
        require_upper_case,
        require_lower_case,
        require_special_characters,
        allowed_special_characters,
    };
    report(&policy)
}

/// Validate the password fields with a policy object, e.g.
/// `validatePasswordWithPolicy({ min_characters: 12, require_numerals: true })`.
/// Keys left out use the server defaults.
#[wasm_bindgen(js_name = validatePasswordWithPolicy)]
pub fn validate_password_with_policy(policy: JsValue) -> UiResult<bool> {
    let policy: PasswordPolicy = serde_wasm_bindgen::from_value(policy)?;
    if let Err(err) = policy.validate() {
        logging::warn!("password policy: {}", err);
        return Err(err.into());
    }
    report(&policy)
}
