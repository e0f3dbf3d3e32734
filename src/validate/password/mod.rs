//! Password validation and strength scoring.

use serde::{Deserialize, Serialize};

mod evaluator;
mod sections;

pub use evaluator::{get_password_strength, validate_password};
pub use sections::CharacterClasses;

/// Requirements checked by [`validate_password`].
///
/// Deserializable with per-field defaults so hosts can embed it in their
/// own configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PasswordOptions {
    pub min_length: usize,
    pub require_number: bool,
    pub require_letter: bool,
    pub require_lower_case: bool,
    pub require_upper_case: bool,
    pub require_special_char: bool,
}

impl Default for PasswordOptions {
    fn default() -> Self {
        Self {
            min_length: 8,
            require_number: true,
            require_letter: true,
            require_lower_case: true,
            require_upper_case: true,
            require_special_char: true,
        }
    }
}

/// Which requirements a password satisfies, regardless of whether they
/// are enabled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PasswordDetails {
    /// At least `min_length` characters.
    pub length: bool,
    pub has_number: bool,
    pub has_letter: bool,
    pub has_lower_case: bool,
    pub has_upper_case: bool,
    pub has_special_char: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PasswordValidationResult {
    pub is_valid: bool,
    pub message: String,
    pub details: PasswordDetails,
    /// Messages of every unmet enabled requirement.
    pub requirements: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrengthLevel {
    Invalid,
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl StrengthLevel {
    /// Level for a score of a non-empty password.
    pub fn from_score(score: u32) -> Self {
        match score {
            0..=2 => StrengthLevel::Weak,
            3..=4 => StrengthLevel::Medium,
            5..=6 => StrengthLevel::Strong,
            _ => StrengthLevel::VeryStrong,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            StrengthLevel::Invalid => "请输入密码",
            StrengthLevel::Weak => "密码强度弱",
            StrengthLevel::Medium => "密码强度中等",
            StrengthLevel::Strong => "密码强度强",
            StrengthLevel::VeryStrong => "密码强度非常强",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StrengthDetails {
    /// At least 8 characters.
    pub long_enough: bool,
    pub has_number: bool,
    pub has_lower_case: bool,
    pub has_upper_case: bool,
    pub has_special_char: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PasswordStrengthResult {
    pub score: u32,
    pub level: StrengthLevel,
    pub message: String,
    pub details: StrengthDetails,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_default() {
        let options = PasswordOptions::default();
        assert_eq!(options.min_length, 8);
        assert!(options.require_number && options.require_special_char);
    }

    #[test]
    fn test_options_partial_deserialize() {
        let options: PasswordOptions =
            serde_json::from_str(r#"{"min_length": 10, "require_special_char": false}"#)
                .expect("valid options");
        assert_eq!(options.min_length, 10);
        assert!(!options.require_special_char);
        assert!(options.require_upper_case);
    }

    #[test]
    fn test_level_step_function() {
        assert_eq!(StrengthLevel::from_score(0), StrengthLevel::Weak);
        assert_eq!(StrengthLevel::from_score(2), StrengthLevel::Weak);
        assert_eq!(StrengthLevel::from_score(3), StrengthLevel::Medium);
        assert_eq!(StrengthLevel::from_score(4), StrengthLevel::Medium);
        assert_eq!(StrengthLevel::from_score(6), StrengthLevel::Strong);
        assert_eq!(StrengthLevel::from_score(7), StrengthLevel::VeryStrong);
    }

    #[test]
    fn test_level_serializes_kebab_case() {
        assert_eq!(
            serde_json::to_string(&StrengthLevel::VeryStrong).expect("serializable"),
            "\"very-strong\""
        );
    }
}
