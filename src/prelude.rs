//! Aggregate import: the domain modules by name plus the structured types.
//!
//! ```rust
//! use utilkit::prelude::*;
//!
//! assert_eq!(array::unique(&[1, 1, 2]), vec![1, 2]);
//! assert!(validate::is_email("user@example.com"));
//! ```

pub use crate::{array, date, string, validate};

#[cfg(feature = "dom")]
pub use crate::dom;

#[cfg(feature = "async")]
pub use crate::animation::{AnimationOptions, AnimationOutcome};

pub use crate::array::{Nested, SortOrder};
pub use crate::date::{DateError, DateInput, Unit};
pub use crate::validate::{
    PasswordDetails, PasswordOptions, PasswordStrengthResult, PasswordValidationResult,
    StrengthDetails, StrengthLevel,
};
