//! Common types and rules shared by the boilerplate admin pages
//!
//! Everything in here is free of DOM access so it can be unit tested on the
//! host. `boilerplate-ui` binds these rules to the server-rendered markup.

pub mod filter;
pub mod password;
pub mod permissions;
pub mod role;
pub mod user;
pub mod visibility;

pub use filter::RowFilter;
pub use password::{PasswordPolicy, PolicyViolation};
pub use permissions::{PermissionGraph, Propagation};
pub use role::{DeleteConfirmation, ReplacementPlan, RoleRecord};
pub use visibility::VisibilityState;

/// Errors raised by the shared page rules
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Unknown permission: {0}")]
    UnknownPermission(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Value written into hidden `"true"`/`"false"` flag fields
pub fn flag_value(flag: bool) -> &'static str {
    if flag {
        "true"
    } else {
        "false"
    }
}

/// Reads a hidden flag field. Only the exact string `"true"` counts.
pub fn is_flag_set(value: &str) -> bool {
    value == "true"
}
