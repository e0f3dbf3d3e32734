//! Password evaluator - runs every section and scores strength.

use secrecy::{ExposeSecret, SecretString};

use super::sections::{CharacterClasses, SectionFn, character_variety_section, length_section};
use super::{
    PasswordDetails, PasswordOptions, PasswordStrengthResult, PasswordValidationResult,
    StrengthDetails, StrengthLevel,
};

const MSG_EMPTY: &str = "密码不能为空";
const MSG_VALID: &str = "密码符合要求";

/// Validates a password against `options`.
///
/// Every section runs; the result lists all unmet requirements rather than
/// stopping at the first one. An empty password is invalid with every
/// enabled requirement listed.
///
/// # Example
///
/// ```
/// use secrecy::SecretString;
/// use utilkit::validate::{validate_password, PasswordOptions};
///
/// let pwd = SecretString::new("Password123!".to_string().into());
/// assert!(validate_password(&pwd, &PasswordOptions::default()).is_valid);
/// ```
pub fn validate_password(
    password: &SecretString,
    options: &PasswordOptions,
) -> PasswordValidationResult {
    let pwd = password.expose_secret();
    let classes = CharacterClasses::scan(pwd);

    // Orchestrator: execute sections in sequence, never short-circuit
    let sections: [(&str, SectionFn); 2] = [
        ("length", length_section),
        ("variety", character_variety_section),
    ];

    let mut requirements = Vec::new();
    for (_section_name, section_fn) in sections {
        let unmet = section_fn(&classes, options);
        #[cfg(feature = "tracing")]
        if !unmet.is_empty() {
            tracing::debug!("password section {} failed: {} unmet", _section_name, unmet.len());
        }
        requirements.extend(unmet);
    }

    let details = PasswordDetails {
        length: classes.length >= options.min_length,
        has_number: classes.has_number,
        has_letter: classes.has_letter,
        has_lower_case: classes.has_lower_case,
        has_upper_case: classes.has_upper_case,
        has_special_char: classes.has_special_char,
    };

    let is_valid = requirements.is_empty();
    let message = if pwd.is_empty() {
        MSG_EMPTY.to_string()
    } else if is_valid {
        MSG_VALID.to_string()
    } else {
        format!("密码不符合要求：{}", requirements.join("，"))
    };

    PasswordValidationResult {
        is_valid,
        message,
        details,
        requirements,
    }
}

/// Scores a password.
///
/// - length: 1 point per 4 characters, at most 2
/// - 1 point each for a number, a lowercase and an uppercase letter
/// - 2 points for a special character
/// - 1 bonus point per character category beyond two
///
/// The level is a step function of the score: `<= 2` weak, `<= 4` medium,
/// `<= 6` strong, otherwise very strong. An empty password is `Invalid`.
pub fn get_password_strength(password: &SecretString) -> PasswordStrengthResult {
    let classes = CharacterClasses::scan(password.expose_secret());
    let details = StrengthDetails {
        long_enough: classes.length >= 8,
        has_number: classes.has_number,
        has_lower_case: classes.has_lower_case,
        has_upper_case: classes.has_upper_case,
        has_special_char: classes.has_special_char,
    };

    if classes.length == 0 {
        return PasswordStrengthResult {
            score: 0,
            level: StrengthLevel::Invalid,
            message: StrengthLevel::Invalid.message().to_string(),
            details,
        };
    }

    let mut score = (classes.length / 4).min(2) as u32;
    score += u32::from(classes.has_number);
    score += u32::from(classes.has_lower_case);
    score += u32::from(classes.has_upper_case);
    if classes.has_special_char {
        score += 2;
    }
    score += classes.category_count().saturating_sub(2);

    let level = StrengthLevel::from_score(score);
    PasswordStrengthResult {
        score,
        level,
        message: level.message().to_string(),
        details,
    }
}
