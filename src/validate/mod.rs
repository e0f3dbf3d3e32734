//! Validation utilities - total predicates and password checks.
//!
//! Predicates never panic and describe the property they check. The
//! composite password validators run every check and report all unmet
//! requirements at once.

mod format;
mod password;
mod types;

pub use format::{
    is_alpha, is_alphanumeric, is_chinese, is_email, is_hex_color, is_id_card, is_ipv4,
    is_phone, is_url, is_username, is_zip_code,
};
pub use password::{
    CharacterClasses, PasswordDetails, PasswordOptions, PasswordStrengthResult,
    PasswordValidationResult, StrengthDetails, StrengthLevel, get_password_strength,
    validate_password,
};
pub use types::{
    is_array, is_blank, is_boolean, is_date, is_date_str, is_empty, is_in_range, is_integer,
    is_length_between, is_negative, is_non_empty_array, is_null, is_number, is_object,
    is_positive, is_string,
};
