//! Character variety section - checks for numbers, letters, case and special chars.

use super::{CharacterClasses, SectionResult};
use crate::validate::password::PasswordOptions;

pub const MSG_NUMBER: &str = "必须包含数字";
pub const MSG_LETTER: &str = "必须包含字母";
pub const MSG_LOWER: &str = "必须包含小写字母";
pub const MSG_UPPER: &str = "必须包含大写字母";
pub const MSG_SPECIAL: &str = "必须包含特殊字符";

/// Checks every enabled character-class requirement.
///
/// Missing classes are all reported, in the order number, letter, lower,
/// upper, special.
pub fn character_variety_section(
    classes: &CharacterClasses,
    options: &PasswordOptions,
) -> SectionResult {
    [
        (options.require_number, classes.has_number, MSG_NUMBER),
        (options.require_letter, classes.has_letter, MSG_LETTER),
        (options.require_lower_case, classes.has_lower_case, MSG_LOWER),
        (options.require_upper_case, classes.has_upper_case, MSG_UPPER),
        (options.require_special_char, classes.has_special_char, MSG_SPECIAL),
    ]
    .into_iter()
    .filter(|&(required, present, _)| required && !present)
    .map(|(_, _, msg)| msg.to_string())
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(pwd: &str) -> SectionResult {
        character_variety_section(&CharacterClasses::scan(pwd), &PasswordOptions::default())
    }

    #[test]
    fn test_variety_section_missing_uppercase() {
        assert_eq!(check("lowercase123!"), vec![MSG_UPPER.to_string()]);
    }

    #[test]
    fn test_variety_section_missing_lowercase() {
        assert_eq!(check("UPPERCASE123!"), vec![MSG_LOWER.to_string()]);
    }

    #[test]
    fn test_variety_section_missing_numbers() {
        assert_eq!(check("NoNumbers!"), vec![MSG_NUMBER.to_string()]);
    }

    #[test]
    fn test_variety_section_missing_special() {
        assert_eq!(check("NoSpecial123"), vec![MSG_SPECIAL.to_string()]);
    }

    #[test]
    fn test_variety_section_reports_everything_missing() {
        assert_eq!(
            check("12345678"),
            vec![
                MSG_LETTER.to_string(),
                MSG_LOWER.to_string(),
                MSG_UPPER.to_string(),
                MSG_SPECIAL.to_string(),
            ]
        );
    }

    #[test]
    fn test_variety_section_disabled_requirements() {
        let options = PasswordOptions {
            require_special_char: false,
            require_upper_case: false,
            ..PasswordOptions::default()
        };
        let result = character_variety_section(&CharacterClasses::scan("lower123"), &options);
        assert!(result.is_empty());
    }

    #[test]
    fn test_variety_section_all_categories() {
        assert!(check("HasAll123!@#").is_empty());
    }
}
