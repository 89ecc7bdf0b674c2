//! Password policy feedback
//!
//! Mirrors the server's password rules so the form can list broken rules
//! while the user types. This is feedback only, the server re-checks.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

pub const DEFAULT_MIN_CHARACTERS: usize = 12;
pub const DEFAULT_MAX_CHARACTERS: usize = 255;
pub const DEFAULT_ALLOWED_SPECIAL_CHARACTERS: &str = "!#$%&()*+,-./:;<=>?@^_{|}~";

static DIGIT_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]").unwrap());

static UPPER_CASE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[A-Z]").unwrap());

static LOWER_CASE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[a-z]").unwrap());

/// Password rules as configured on the server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PasswordPolicy {
    pub min_characters: usize,
    pub max_characters: usize,
    pub require_numerals: bool,
    pub require_upper_case: bool,
    pub require_lower_case: bool,
    pub require_special_characters: bool,
    pub allowed_special_characters: String,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_characters: DEFAULT_MIN_CHARACTERS,
            max_characters: DEFAULT_MAX_CHARACTERS,
            require_numerals: true,
            require_upper_case: true,
            require_lower_case: true,
            require_special_characters: true,
            allowed_special_characters: DEFAULT_ALLOWED_SPECIAL_CHARACTERS.to_string(),
        }
    }
}

/// A broken password rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PolicyViolation {
    TooShort { min: usize },
    TooLong { max: usize },
    MissingNumeral,
    MissingUpperCase,
    MissingLowerCase,
    MissingSpecialCharacter { allowed: String },
    ConfirmationMismatch,
}

impl fmt::Display for PolicyViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooShort { min } => write!(
                f,
                "Password is too short. Passwords should contain at least {} characters.",
                min
            ),
            Self::TooLong { max } => write!(
                f,
                "Password is too long. Passwords should contain at most {} characters.",
                max
            ),
            Self::MissingNumeral => write!(f, "Password must contain at least one number."),
            Self::MissingUpperCase => {
                write!(f, "Password must contain at least one upper case letter.")
            }
            Self::MissingLowerCase => {
                write!(f, "Password must contain at least one lower case letter.")
            }
            Self::MissingSpecialCharacter { allowed } => write!(
                f,
                "Password must contain at least one special symbol of the following: {}",
                allowed
            ),
            Self::ConfirmationMismatch => {
                write!(f, "Password does not match the confirmed password.")
            }
        }
    }
}

impl PasswordPolicy {
    /// Parse a policy from JSON, e.g. a `data-` attribute rendered by the server.
    /// Missing keys fall back to the defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let policy: PasswordPolicy = serde_json::from_str(json)?;
        policy.validate()?;
        Ok(policy)
    }

    /// Reject policies no password could ever satisfy
    pub fn validate(&self) -> Result<()> {
        if self.min_characters > self.max_characters {
            return Err(Error::InvalidConfig(format!(
                "minimum password length {} exceeds maximum {}",
                self.min_characters, self.max_characters
            )));
        }

        if self.require_special_characters && self.allowed_special_characters.is_empty() {
            return Err(Error::InvalidConfig(
                "special characters are required but none are allowed".to_string(),
            ));
        }

        Ok(())
    }

    fn has_special_character(&self, password: &str) -> bool {
        password
            .chars()
            .any(|c| self.allowed_special_characters.contains(c))
    }

    /// Every broken rule, in display order
    pub fn check(&self, password: &str, confirmation: &str) -> Vec<PolicyViolation> {
        let mut violations = Vec::new();
        let length = password.chars().count();

        if length < self.min_characters {
            violations.push(PolicyViolation::TooShort { min: self.min_characters });
        }

        if length > self.max_characters {
            violations.push(PolicyViolation::TooLong { max: self.max_characters });
        }

        if self.require_numerals && !DIGIT_REGEX.is_match(password) {
            violations.push(PolicyViolation::MissingNumeral);
        }

        if self.require_upper_case && !UPPER_CASE_REGEX.is_match(password) {
            violations.push(PolicyViolation::MissingUpperCase);
        }

        if self.require_lower_case && !LOWER_CASE_REGEX.is_match(password) {
            violations.push(PolicyViolation::MissingLowerCase);
        }

        if self.require_special_characters && !self.has_special_character(password) {
            violations.push(PolicyViolation::MissingSpecialCharacter {
                allowed: self.allowed_special_characters.clone(),
            });
        }

        if password != confirmation {
            violations.push(PolicyViolation::ConfirmationMismatch);
        }

        violations
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Render violations as `<li>` items for the requirements list
pub fn render_violations(violations: &[PolicyViolation]) -> String {
    violations
        .iter()
        .map(|v| format!("<li class=\"text-danger\">{}</li>", escape_html(&v.to_string())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strict_policy() -> PasswordPolicy {
        PasswordPolicy {
            min_characters: 8,
            max_characters: 20,
            require_numerals: true,
            require_upper_case: true,
            require_lower_case: true,
            require_special_characters: true,
            allowed_special_characters: "!@#".to_string(),
        }
    }

    #[test]
    fn test_weak_password() {
        let violations = strict_policy().check("abc", "abd");
        assert_eq!(
            violations,
            vec![
                PolicyViolation::TooShort { min: 8 },
                PolicyViolation::MissingNumeral,
                PolicyViolation::MissingUpperCase,
                PolicyViolation::MissingSpecialCharacter { allowed: "!@#".to_string() },
                PolicyViolation::ConfirmationMismatch,
            ]
        );
    }

    #[test]
    fn test_valid_password() {
        assert!(strict_policy().check("Abcdef1!", "Abcdef1!").is_empty());
    }

    #[test]
    fn test_too_long() {
        let password = "Abcdefgh1!Abcdefgh1!X";
        let violations = strict_policy().check(password, password);
        assert_eq!(violations, vec![PolicyViolation::TooLong { max: 20 }]);
    }

    #[test]
    fn test_disabled_rules_are_skipped() {
        let policy = PasswordPolicy {
            min_characters: 1,
            max_characters: 10,
            require_numerals: false,
            require_upper_case: false,
            require_lower_case: false,
            require_special_characters: false,
            allowed_special_characters: String::new(),
        };
        assert!(policy.check("x", "x").is_empty());
    }

    #[test]
    fn test_metacharacters_in_allowed_set() {
        let policy = PasswordPolicy {
            allowed_special_characters: "]^-\\".to_string(),
            ..strict_policy()
        };
        assert!(policy.check("Abcdefg1-", "Abcdefg1-").is_empty());
        assert_eq!(
            policy.check("Abcdefg1!", "Abcdefg1!"),
            vec![PolicyViolation::MissingSpecialCharacter { allowed: "]^-\\".to_string() }]
        );
    }

    #[test]
    fn test_length_counts_characters() {
        let policy = PasswordPolicy { min_characters: 3, ..strict_policy() };
        let violations = policy.check("Ä1!", "Ä1!");
        assert!(!violations.contains(&PolicyViolation::TooShort { min: 3 }));
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            PolicyViolation::TooShort { min: 12 }.to_string(),
            "Password is too short. Passwords should contain at least 12 characters."
        );
        assert_eq!(
            PolicyViolation::ConfirmationMismatch.to_string(),
            "Password does not match the confirmed password."
        );
    }

    #[test]
    fn test_render_violations() {
        assert_eq!(render_violations(&[]), "");

        let html = render_violations(&[
            PolicyViolation::MissingNumeral,
            PolicyViolation::MissingSpecialCharacter { allowed: "<&>".to_string() },
        ]);
        assert_eq!(
            html,
            "<li class=\"text-danger\">Password must contain at least one number.</li>\
             <li class=\"text-danger\">Password must contain at least one special symbol of the following: &lt;&amp;&gt;</li>"
        );
    }

    #[test]
    fn test_default_policy() {
        let policy = PasswordPolicy::default();
        assert_eq!(policy.min_characters, 12);
        assert_eq!(policy.max_characters, 255);
        assert!(policy.validate().is_ok());
    }

    #[test]
    fn test_from_json() {
        let policy =
            PasswordPolicy::from_json(r#"{"min_characters": 8, "require_numerals": false}"#)
                .unwrap();
        assert_eq!(policy.min_characters, 8);
        assert!(!policy.require_numerals);
        assert_eq!(policy.max_characters, DEFAULT_MAX_CHARACTERS);

        assert!(matches!(
            PasswordPolicy::from_json(r#"{"min_characters": 30, "max_characters": 20}"#),
            Err(Error::InvalidConfig(_))
        ));
        assert!(matches!(PasswordPolicy::from_json("not json"), Err(Error::Json(_))));
    }

    #[test]
    fn test_validate_rejects_empty_special_set() {
        let policy = PasswordPolicy {
            allowed_special_characters: String::new(),
            ..PasswordPolicy::default()
        };
        assert!(policy.validate().is_err());
    }
}
