//! Small, total helper functions for strings, slices, dates, validation and
//! the browser DOM.
//!
//! Every non-DOM function is a pure transformation that never panics on bad
//! input: it returns a documented default (empty value, `0`, `false`, or the
//! current time) instead.
//!
//! # Features
//!
//! - `async` (default): Enables the frame-driven animation engine with
//!   cancellation support
//! - `dom`: Enables the `web-sys` DOM helpers (implies `async`)
//! - `tracing`: Enables logging via tracing crate
//!
//! # Consumption styles
//!
//! The same items are reachable three ways:
//!
//! ```rust
//! // namespaced
//! assert_eq!(utilkit::array::chunk(&[1, 2, 3], 2), vec![vec![1, 2], vec![3]]);
//! // flat
//! assert_eq!(utilkit::kebab_case("fooBar"), "foo-bar");
//! // aggregate
//! use utilkit::prelude::*;
//! assert_eq!(date::format("2024-03-15", "YYYY/MM/DD"), "2024/03/15");
//! ```
//!
//! # Example
//!
//! ```rust
//! use secrecy::SecretString;
//! use utilkit::{PasswordOptions, StrengthLevel, get_password_strength, validate_password};
//!
//! let password = SecretString::new("Password123!".to_string().into());
//!
//! let result = validate_password(&password, &PasswordOptions::default());
//! assert!(result.is_valid);
//!
//! let strength = get_password_strength(&password);
//! assert_eq!(strength.level, StrengthLevel::VeryStrong);
//! ```

pub mod array;
pub mod date;
pub mod prelude;
pub mod string;
pub mod validate;

#[cfg(feature = "async")]
pub mod animation;

#[cfg(feature = "dom")]
pub mod dom;

// Flat API
pub use array::{
    Nested, SortOrder, chunk, compact, count_by, difference, first, flatten, flatten_deep, get,
    group_by, intersection, last, move_item, range, sample, sample_with, shuffle, shuffle_with,
    sort_by, sum_by, union, unique, unique_by,
};
pub use date::{
    DEFAULT_PATTERN, DateError, DateInput, Unit, add, day_of_year, diff, end_of, end_of_month,
    end_of_quarter, format, from_ymd, get_days_in_month, get_days_in_year, get_quarter, is_after,
    is_before, is_between, is_leap, is_leap_year, is_same, is_today, is_valid_date, is_weekend, now,
    parse_date, relative_time, start_of, start_of_month, start_of_quarter, subtract, to_date,
    to_date_or_now, week_of_year,
};
pub use string::{
    camel_case, capitalize, ends_with, escape_html, kebab_case, pad_end, pad_start, pascal_case,
    repeat, reverse, snake_case, starts_with, trim_chars, trim_end_chars, trim_start_chars,
    truncate, unescape_html, word_count,
};
pub use validate::{
    PasswordDetails, PasswordOptions, PasswordStrengthResult, PasswordValidationResult,
    StrengthDetails, StrengthLevel, get_password_strength, is_alpha, is_alphanumeric, is_array,
    is_blank, is_boolean, is_chinese, is_date, is_date_str, is_email, is_empty, is_hex_color,
    is_id_card, is_in_range, is_integer, is_ipv4, is_length_between, is_negative,
    is_non_empty_array, is_null, is_number, is_object, is_phone, is_positive, is_string, is_url,
    is_username, is_zip_code, validate_password,
};

#[cfg(feature = "async")]
pub use animation::{AnimationOptions, AnimationOutcome, Easing, FrameClock, animate, animate_tx};

#[cfg(feature = "dom")]
pub use dom::{
    DomError, Listener, add_class, append, by_id, children, closest, create_element, delegate,
    empty, fade_in, fade_out, form_values, get_attr, get_data, get_html, get_style, get_text,
    has_attr, has_class, hide, insert_after, on, once, parent, prepend, query, query_all,
    query_in, remove, remove_attr, remove_class, replace_class, reset_form, serialize_form,
    set_attr, set_attrs, set_data, set_html, set_style, set_styles, set_text, show, siblings,
    slide_down, slide_up, toggle_class, toggle_display, trigger,
};
