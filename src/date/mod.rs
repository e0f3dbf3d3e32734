//! Date utilities - parsing, formatting, arithmetic, range and unit queries.
//!
//! Every function accepts anything convertible into [`DateInput`] (a date
//! string, epoch milliseconds, a chrono value, or [`DateInput::Now`]) and
//! normalises it through [`to_date`] before doing any work. Dates are local
//! wall-clock `NaiveDateTime`s.
//!
//! Nothing here panics on bad input. Each function documents its fallback:
//! an empty string for formatting, `0` for counts, `false` for predicates,
//! and the current time for date-valued results.

use std::str::FromStr;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::Deserialize;
use thiserror::Error;

mod calc;
mod format;
mod parse;

pub use calc::{
    add, diff, end_of, end_of_month, end_of_quarter, is_same, start_of, start_of_month,
    start_of_quarter, subtract,
};
pub use format::{DEFAULT_PATTERN, format, relative_time};
pub use parse::{DateInput, now, parse_date, to_date, to_date_or_now};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    #[error("No date given")]
    Missing,
    #[error("Empty date string")]
    Empty,
    #[error("Unrecognized date: {0}")]
    Unrecognized(String),
    #[error("Timestamp out of range: {0}ms")]
    OutOfRange(i64),
    #[error("Unknown unit: {0}")]
    UnknownUnit(String),
}

/// Calendar unit for arithmetic and range functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Year,
    Month,
    Week,
    Day,
    Hour,
    Minute,
    Second,
}

impl Unit {
    /// Fixed length in milliseconds; `None` for the calendar units.
    pub const fn millis(self) -> Option<i64> {
        match self {
            Unit::Year | Unit::Month => None,
            Unit::Week => Some(7 * 24 * 60 * 60 * 1000),
            Unit::Day => Some(24 * 60 * 60 * 1000),
            Unit::Hour => Some(60 * 60 * 1000),
            Unit::Minute => Some(60 * 1000),
            Unit::Second => Some(1000),
        }
    }
}

impl FromStr for Unit {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unit = match s.trim().to_ascii_lowercase().as_str() {
            "year" | "years" | "y" => Unit::Year,
            "month" | "months" | "m" => Unit::Month,
            "week" | "weeks" | "w" => Unit::Week,
            "day" | "days" | "d" => Unit::Day,
            "hour" | "hours" | "h" => Unit::Hour,
            "minute" | "minutes" | "min" => Unit::Minute,
            "second" | "seconds" | "s" => Unit::Second,
            _ => return Err(DateError::UnknownUnit(s.to_string())),
        };
        Ok(unit)
    }
}

/// Gregorian leap-year rule.
pub const fn is_leap(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// ```
/// assert!(utilkit::date::is_leap_year("2024"));
/// assert!(!utilkit::date::is_leap_year("2023"));
/// ```
pub fn is_leap_year<'a>(date: impl Into<DateInput<'a>>) -> bool {
    to_date(date).is_some_and(|d| is_leap(d.year()))
}

/// Days in the month containing `date`, 0 when unparseable.
pub fn get_days_in_month<'a>(date: impl Into<DateInput<'a>>) -> u32 {
    to_date(date).map_or(0, |d| days_in_month(d.year(), d.month()))
}

/// 365 or 366, 0 when unparseable.
pub fn get_days_in_year<'a>(date: impl Into<DateInput<'a>>) -> u32 {
    to_date(date).map_or(0, |d| if is_leap(d.year()) { 366 } else { 365 })
}

pub fn is_weekend<'a>(date: impl Into<DateInput<'a>>) -> bool {
    to_date(date).is_some_and(|d| matches!(d.weekday(), Weekday::Sat | Weekday::Sun))
}

pub fn is_today<'a>(date: impl Into<DateInput<'a>>) -> bool {
    to_date(date).is_some_and(|d| d.date() == now().date())
}

pub fn is_after<'a, 'b>(date: impl Into<DateInput<'a>>, other: impl Into<DateInput<'b>>) -> bool {
    matches!((to_date(date), to_date(other)), (Some(a), Some(b)) if a > b)
}

pub fn is_before<'a, 'b>(date: impl Into<DateInput<'a>>, other: impl Into<DateInput<'b>>) -> bool {
    matches!((to_date(date), to_date(other)), (Some(a), Some(b)) if a < b)
}

/// Strictly between `start` and `end`; bounds are exclusive.
pub fn is_between<'a, 'b, 'c>(
    date: impl Into<DateInput<'a>>,
    start: impl Into<DateInput<'b>>,
    end: impl Into<DateInput<'c>>,
) -> bool {
    match (to_date(date), to_date(start), to_date(end)) {
        (Some(d), Some(s), Some(e)) => s < d && d < e,
        _ => false,
    }
}

/// Quarter 1-4, 0 when unparseable.
pub fn get_quarter<'a>(date: impl Into<DateInput<'a>>) -> u32 {
    to_date(date).map_or(0, |d| d.month0() / 3 + 1)
}

/// Day of the year, 1-366. 0 when unparseable.
pub fn day_of_year<'a>(date: impl Into<DateInput<'a>>) -> u32 {
    to_date(date).map_or(0, |d| d.ordinal())
}

/// ISO 8601 week number. 0 when unparseable.
pub fn week_of_year<'a>(date: impl Into<DateInput<'a>>) -> u32 {
    to_date(date).map_or(0, |d| d.iso_week().week())
}

pub fn is_valid_date<'a>(date: impl Into<DateInput<'a>>) -> bool {
    to_date(date).is_some()
}

/// Builds a date from calendar fields, `None` if they do not exist.
///
/// The `None` converts into [`DateInput::Missing`], so passing the result
/// straight to another date function yields that function's fallback.
pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_from_str() {
        assert_eq!("day".parse::<Unit>(), Ok(Unit::Day));
        assert_eq!("Weeks".parse::<Unit>(), Ok(Unit::Week));
        assert_eq!(
            "fortnight".parse::<Unit>(),
            Err(DateError::UnknownUnit("fortnight".to_string()))
        );
    }

    #[test]
    fn test_unit_deserialize() {
        let unit: Unit = serde_json::from_str("\"minute\"").expect("valid unit");
        assert_eq!(unit, Unit::Minute);
    }

    #[test]
    fn test_is_leap_year() {
        assert!(is_leap_year("2024"));
        assert!(!is_leap_year("2023"));
        assert!(is_leap_year("2000-06-01"));
        assert!(!is_leap_year("1900-06-01"));
        assert!(!is_leap_year("garbage"));
    }

    #[test]
    fn test_days_in_month_and_year() {
        assert_eq!(get_days_in_month("2024-02"), 29);
        assert_eq!(get_days_in_month("2023-02-10"), 28);
        assert_eq!(get_days_in_month("2023-04-10"), 30);
        assert_eq!(get_days_in_month("2023-12"), 31);
        assert_eq!(get_days_in_month("garbage"), 0);
        assert_eq!(get_days_in_year("2024"), 366);
        assert_eq!(get_days_in_year("2023"), 365);
    }

    #[test]
    fn test_is_weekend() {
        assert!(is_weekend("2024-03-16"));
        assert!(is_weekend("2024-03-17"));
        assert!(!is_weekend("2024-03-15"));
        assert!(!is_weekend("garbage"));
    }

    #[test]
    fn test_is_today() {
        assert!(is_today(now()));
        assert!(is_today(DateInput::Now));
        assert!(!is_today(None::<&str>));
        assert!(!is_today("2000-01-01"));
    }

    #[test]
    fn test_comparisons() {
        assert!(is_after("2024-03-16", "2024-03-15"));
        assert!(!is_after("2024-03-15", "2024-03-15"));
        assert!(is_before("2024-03-14", "2024-03-15"));
        assert!(is_between("2024-03-15", "2024-03-01", "2024-03-31"));
        assert!(!is_between("2024-03-01", "2024-03-01", "2024-03-31"));
        assert!(!is_between("garbage", "2024-03-01", "2024-03-31"));
        assert!(!is_after("garbage", "2024-03-15"));
    }

    #[test]
    fn test_quarter_and_ordinals() {
        assert_eq!(get_quarter("2024-01-31"), 1);
        assert_eq!(get_quarter("2024-06-30"), 2);
        assert_eq!(get_quarter("2024-10-01"), 4);
        assert_eq!(get_quarter("garbage"), 0);
        assert_eq!(day_of_year("2024-12-31"), 366);
        assert_eq!(week_of_year("2024-01-01"), 1);
    }

    #[test]
    fn test_from_ymd() {
        assert!(from_ymd(2024, 2, 29).is_some());
        assert!(from_ymd(2023, 2, 29).is_none());
        assert!(is_valid_date(from_ymd(2024, 2, 29)));
    }

    #[test]
    fn test_nonexistent_day_takes_fallbacks() {
        assert!(!is_valid_date(from_ymd(2023, 2, 29)));
        assert_eq!(get_days_in_month(from_ymd(2023, 2, 30)), 0);
        assert_eq!(get_quarter(from_ymd(2024, 4, 31)), 0);
        assert!(!is_weekend(from_ymd(2024, 2, 31)));
        assert!(!is_today(from_ymd(2024, 13, 1)));
        assert_eq!(format(from_ymd(2023, 2, 29), "YYYY-MM-DD"), "");
    }
}
