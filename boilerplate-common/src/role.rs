//! Role modal rules
//!
//! The role pages embed role records in their markup and call into the
//! create/edit and delete modals with them. These helpers hold the decisions
//! that do not need the DOM.

use serde::{Deserialize, Serialize};

use crate::Result;

/// `role-id` value of the create modal
pub const NEW_ROLE_ID: &str = "new";

pub const CREATE_ROLE_HEADER: &str = "Create New Role";

/// Role as rendered into the page by the server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleRecord {
    pub uuid: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub hidden: bool,
    #[serde(default)]
    pub system: bool,
    #[serde(default)]
    pub actions: Vec<String>,
}

impl RoleRecord {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn edit_header(&self) -> String {
        format!("Editing Role \"{}\"", self.name)
    }

    pub fn grants(&self, action: &str) -> bool {
        self.actions.iter().any(|a| a == action)
    }
}

pub fn delete_header(role_name: &str) -> String {
    format!("Delete Role \"{}\"?", role_name)
}

/// Members have to be moved to another role before deletion
pub fn needs_replacement(member_count: u32) -> bool {
    member_count > 0
}

/// Which replacement options to disable and which one to preselect
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplacementPlan {
    /// One entry per option, in option order
    pub disabled: Vec<bool>,
    /// First option that is not the deleted role
    pub default: Option<String>,
}

impl ReplacementPlan {
    pub fn new<S: AsRef<str>>(deleted_role_id: &str, options: &[S]) -> Self {
        let disabled: Vec<bool> = options
            .iter()
            .map(AsRef::<str>::as_ref)
            .map(|option| option == deleted_role_id)
            .collect();
        let default = options
            .iter()
            .map(AsRef::<str>::as_ref)
            .find(|option| *option != deleted_role_id)
            .map(str::to_string);

        Self { disabled, default }
    }
}

/// Type-the-name confirmation for role deletion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteConfirmation {
    role_name: String,
}

impl DeleteConfirmation {
    pub fn new(role_name: impl Into<String>) -> Self {
        Self {
            role_name: role_name.into(),
        }
    }

    /// Exact, case-sensitive comparison
    pub fn accepts(&self, typed: &str) -> bool {
        typed == self.role_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_from_json() {
        let role = RoleRecord::from_json(
            r#"{"uuid": "r-1", "name": "Auditors", "description": "Read only",
                "hidden": true, "actions": ["view_users", "view_roles"]}"#,
        )
        .unwrap();
        assert_eq!(role.name, "Auditors");
        assert!(role.hidden);
        assert!(!role.system);
        assert!(role.grants("view_roles"));
        assert!(!role.grants("edit_roles"));
        assert_eq!(role.edit_header(), "Editing Role \"Auditors\"");
    }

    #[test]
    fn test_role_defaults() {
        let role = RoleRecord::from_json(r#"{"uuid": "r-2", "name": "Empty"}"#).unwrap();
        assert!(role.description.is_empty());
        assert!(role.actions.is_empty());
    }

    #[test]
    fn test_delete_header() {
        assert_eq!(delete_header("Editors"), "Delete Role \"Editors\"?");
    }

    #[test]
    fn test_needs_replacement() {
        assert!(!needs_replacement(0));
        assert!(needs_replacement(3));
    }

    #[test]
    fn test_replacement_plan() {
        let plan = ReplacementPlan::new("b", &["b", "a", "c"]);
        assert_eq!(plan.disabled, vec![true, false, false]);
        assert_eq!(plan.default.as_deref(), Some("a"));

        let plan = ReplacementPlan::new("a", &["a"]);
        assert_eq!(plan.disabled, vec![true]);
        assert_eq!(plan.default, None);
    }

    #[test]
    fn test_delete_confirmation() {
        let confirmation = DeleteConfirmation::new("Editors");
        assert!(confirmation.accepts("Editors"));
        assert!(!confirmation.accepts("editors"));
        assert!(!confirmation.accepts("Editors "));
        assert!(!confirmation.accepts(""));
    }
}
