//! Type and range predicates.
//!
//! Type checks operate on `serde_json::Value`, the crate's representation of
//! loosely typed input (form payloads, decoded JSON). Range checks take
//! plain numbers and strings.

use serde_json::Value;

use crate::date::parse_date;

pub fn is_string(value: &Value) -> bool {
    value.is_string()
}

/// Any finite JSON number.
pub fn is_number(value: &Value) -> bool {
    value.as_f64().is_some_and(f64::is_finite)
}

/// A JSON number with no fractional part (`3` and `3.0` both count).
pub fn is_integer(value: &Value) -> bool {
    match value {
        Value::Number(n) if n.is_i64() || n.is_u64() => true,
        Value::Number(n) => n.as_f64().is_some_and(|f| f.is_finite() && f.fract() == 0.0),
        _ => false,
    }
}

pub fn is_boolean(value: &Value) -> bool {
    value.is_boolean()
}

pub fn is_null(value: &Value) -> bool {
    value.is_null()
}

pub fn is_object(value: &Value) -> bool {
    value.is_object()
}

pub fn is_array(value: &Value) -> bool {
    value.is_array()
}

/// An array with at least one element.
pub fn is_non_empty_array(value: &Value) -> bool {
    value.as_array().is_some_and(|a| !a.is_empty())
}

/// `null`, `""`, `[]` and `{}` are empty; numbers and booleans never are.
pub fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
        Value::Bool(_) | Value::Number(_) => false,
    }
}

/// A string holding a parseable date, or a number of epoch milliseconds.
pub fn is_date(value: &Value) -> bool {
    match value {
        Value::String(s) => is_date_str(s),
        Value::Number(n) => n.as_i64().is_some_and(|ms| parse_date(ms).is_ok()),
        _ => false,
    }
}

/// Any text [`parse_date`] accepts, e.g. `YYYY-MM-DD`, `YYYY/MM/DD`,
/// `YYYY-MM`, `YYYY-MM-DD HH:mm` or RFC 3339.
pub fn is_date_str(s: &str) -> bool {
    parse_date(s).is_ok()
}

/// `min <= n <= max`. NaN is never in range.
pub fn is_in_range(n: f64, min: f64, max: f64) -> bool {
    n >= min && n <= max
}

pub fn is_positive(n: f64) -> bool {
    n > 0.0
}

pub fn is_negative(n: f64) -> bool {
    n < 0.0
}

/// Empty or whitespace only.
pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Character count within `min..=max`.
pub fn is_length_between(s: &str, min: usize, max: usize) -> bool {
    (min..=max).contains(&s.chars().count())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_type_predicates() {
        assert!(is_string(&json!("x")));
        assert!(!is_string(&json!(1)));
        assert!(is_number(&json!(1.5)));
        assert!(!is_number(&json!("1.5")));
        assert!(is_boolean(&json!(false)));
        assert!(is_null(&Value::Null));
        assert!(is_object(&json!({"a": 1})));
        assert!(!is_object(&json!([1])));
        assert!(is_array(&json!([])));
        assert!(!is_array(&Value::Null));
    }

    #[test]
    fn test_is_integer() {
        assert!(is_integer(&json!(3)));
        assert!(is_integer(&json!(-3)));
        assert!(is_integer(&json!(3.0)));
        assert!(!is_integer(&json!(3.5)));
        assert!(!is_integer(&json!("3")));
    }

    #[test]
    fn test_is_empty() {
        assert!(is_empty(&Value::Null));
        assert!(is_empty(&json!("")));
        assert!(is_empty(&json!([])));
        assert!(is_empty(&json!({})));
        assert!(!is_empty(&json!(0)));
        assert!(!is_empty(&json!(false)));
        assert!(!is_empty(&json!(" ")));
        assert!(is_non_empty_array(&json!([null])));
        assert!(!is_non_empty_array(&json!({})));
    }

    #[test]
    fn test_is_date() {
        assert!(is_date(&json!("2024-03-15")));
        assert!(is_date(&json!("2024-03-15 10:00:00")));
        assert!(is_date(&json!("2024-03-15T10:00:00+08:00")));
        assert!(is_date(&json!(1_710_460_800_000_i64)));
        assert!(!is_date(&json!("2024-02-30")));
        assert!(!is_date(&json!(true)));
        assert!(!is_date(&Value::Null));
    }

    #[test]
    fn test_is_date_agrees_with_date_module() {
        let inputs = [
            "2024/03/15",
            "2024.03.15",
            "2024",
            "2024-03",
            "2024-03-15 10:20",
            "2024-03-15T10:20:30Z",
            "2024-02-30",
            "15/03/2024",
            "",
        ];
        for s in inputs {
            assert_eq!(
                is_date(&Value::String(s.to_string())),
                crate::date::is_valid_date(s),
                "input {:?}",
                s
            );
        }
        assert!(is_date(&json!("2024/03/15")));
    }

    #[test]
    fn test_numeric_ranges() {
        assert!(is_in_range(5.0, 1.0, 5.0));
        assert!(!is_in_range(5.1, 1.0, 5.0));
        assert!(!is_in_range(f64::NAN, 0.0, 1.0));
        assert!(is_positive(0.1));
        assert!(!is_positive(0.0));
        assert!(is_negative(-1.0));
    }

    #[test]
    fn test_string_ranges() {
        assert!(is_blank("  \t"));
        assert!(!is_blank(" a "));
        assert!(is_length_between("密码", 2, 4));
        assert!(!is_length_between("a", 2, 4));
    }
}
