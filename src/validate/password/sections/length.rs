//! Length section - checks password minimum length.

use super::{CharacterClasses, SectionResult};
use crate::validate::password::PasswordOptions;

/// Checks the configured minimum length.
///
/// # Returns
/// - one message if the password is too short
/// - nothing if it has sufficient length
pub fn length_section(classes: &CharacterClasses, options: &PasswordOptions) -> SectionResult {
    if classes.length < options.min_length {
        return vec![format!("长度至少为{}位", options.min_length)];
    }
    Vec::new()
}
