//! Password validation sections
//!
//! Each section checks one aspect of a password and reports every
//! requirement it finds unmet.

mod length;
mod variety;

pub use length::length_section;
pub use variety::character_variety_section;

use super::PasswordOptions;

/// Result type for section functions: the messages of unmet requirements,
/// empty when the section passed.
pub type SectionResult = Vec<String>;

/// Signature shared by all sections.
pub type SectionFn = fn(&CharacterClasses, &PasswordOptions) -> SectionResult;

/// Character classes present in a password, scanned once and shared by the
/// sections.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CharacterClasses {
    /// Length in characters, not bytes.
    pub length: usize,
    pub has_number: bool,
    pub has_letter: bool,
    pub has_lower_case: bool,
    pub has_upper_case: bool,
    /// Anything that is neither an ASCII letter, a digit nor whitespace.
    pub has_special_char: bool,
}

impl CharacterClasses {
    pub fn scan(password: &str) -> Self {
        password.chars().fold(Self::default(), |mut acc, c| {
            acc.length += 1;
            acc.has_number |= c.is_ascii_digit();
            acc.has_lower_case |= c.is_ascii_lowercase();
            acc.has_upper_case |= c.is_ascii_uppercase();
            acc.has_letter |= c.is_ascii_alphabetic();
            acc.has_special_char |= !c.is_ascii_alphanumeric() && !c.is_whitespace();
            acc
        })
    }

    /// How many of number / lower / upper / special are present.
    pub fn category_count(&self) -> u32 {
        [
            self.has_number,
            self.has_lower_case,
            self.has_upper_case,
            self.has_special_char,
        ]
        .iter()
        .filter(|&&b| b)
        .count() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_mixed() {
        let classes = CharacterClasses::scan("Ab3!");
        assert_eq!(classes.length, 4);
        assert!(classes.has_number);
        assert!(classes.has_letter);
        assert!(classes.has_lower_case);
        assert!(classes.has_upper_case);
        assert!(classes.has_special_char);
        assert_eq!(classes.category_count(), 4);
    }

    #[test]
    fn test_scan_whitespace_is_not_special() {
        let classes = CharacterClasses::scan("ab cd");
        assert!(!classes.has_special_char);
        assert_eq!(classes.category_count(), 1);
    }

    #[test]
    fn test_scan_counts_chars() {
        assert_eq!(CharacterClasses::scan("密码").length, 2);
        assert!(CharacterClasses::scan("密码").has_special_char);
        assert_eq!(CharacterClasses::scan(""), CharacterClasses::default());
    }
}
