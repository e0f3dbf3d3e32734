//! Token-based formatting and relative ("3天前") descriptions.

use std::sync::LazyLock;

use chrono::{Datelike, NaiveDateTime, Timelike};
use regex::{Captures, Regex};

use super::parse::{DateInput, to_date};

static TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[([^\]]*)\]|YYYY|YY|SSS|MM|M|DD|D|dd|d|HH|H|hh|h|mm|m|ss|s|A|a")
        .expect("valid regex")
});

const WEEKDAYS: [&str; 7] = ["周日", "周一", "周二", "周三", "周四", "周五", "周六"];

/// Pattern used by [`format`] callers that have no preference.
pub const DEFAULT_PATTERN: &str = "YYYY-MM-DD HH:mm:ss";

/// Formats a date with a token pattern.
///
/// | token | output                    |
/// |-------|---------------------------|
/// | `YYYY` / `YY` | year, 4 or 2 digits |
/// | `MM` / `M`    | month, padded or not |
/// | `DD` / `D`    | day of month |
/// | `HH` / `H`    | hour, 24h |
/// | `hh` / `h`    | hour, 12h |
/// | `mm` / `m`    | minute |
/// | `ss` / `s`    | second |
/// | `SSS`         | millisecond |
/// | `d` / `dd`    | weekday number (0 = Sunday) / name (`周六`) |
/// | `A` / `a`     | `AM`/`PM`, `am`/`pm` |
///
/// Text inside `[...]` is emitted literally; everything else passes through.
/// The single-letter tokens (`M D H h m s d A a`) also match inside ordinary
/// words, so any prose in a pattern must be bracketed: `"Date: YYYY"` renders
/// as `"15amte: 2024"`, `"[Date:] YYYY"` as `"Date: 2024"`.
/// Unparseable input yields an empty string.
///
/// ```
/// use utilkit::date::format;
/// assert_eq!(format("2024-03-15 09:05:00", "YYYY/MM/DD h:mm A"), "2024/03/15 9:05 AM");
/// assert_eq!(format("2024-03-15", "[Today is] dd"), "Today is 周五");
/// assert_eq!(format("nope", "YYYY"), "");
/// ```
pub fn format<'a>(date: impl Into<DateInput<'a>>, pattern: &str) -> String {
    match to_date(date) {
        Some(dt) => format_datetime(&dt, pattern),
        None => String::new(),
    }
}

fn format_datetime(dt: &NaiveDateTime, pattern: &str) -> String {
    TOKEN_RE
        .replace_all(pattern, |caps: &Captures<'_>| {
            if let Some(literal) = caps.get(1) {
                return literal.as_str().to_string();
            }
            render_token(dt, &caps[0])
        })
        .into_owned()
}

fn render_token(dt: &NaiveDateTime, token: &str) -> String {
    let hour12 = match dt.hour() % 12 {
        0 => 12,
        h => h,
    };
    match token {
        "YYYY" => format!("{:04}", dt.year()),
        "YY" => format!("{:02}", dt.year().rem_euclid(100)),
        "MM" => format!("{:02}", dt.month()),
        "M" => dt.month().to_string(),
        "DD" => format!("{:02}", dt.day()),
        "D" => dt.day().to_string(),
        "HH" => format!("{:02}", dt.hour()),
        "H" => dt.hour().to_string(),
        "hh" => format!("{:02}", hour12),
        "h" => hour12.to_string(),
        "mm" => format!("{:02}", dt.minute()),
        "m" => dt.minute().to_string(),
        "ss" => format!("{:02}", dt.second()),
        "s" => dt.second().to_string(),
        // leap-second nanos can exceed 999ms
        "SSS" => format!("{:03}", (dt.nanosecond() / 1_000_000).min(999)),
        "d" => dt.weekday().num_days_from_sunday().to_string(),
        "dd" => WEEKDAYS[dt.weekday().num_days_from_sunday() as usize].to_string(),
        "A" => (if dt.hour() < 12 { "AM" } else { "PM" }).to_string(),
        "a" => (if dt.hour() < 12 { "am" } else { "pm" }).to_string(),
        other => other.to_string(),
    }
}

const MINUTE_MS: i64 = 60 * 1000;
const HOUR_MS: i64 = 60 * MINUTE_MS;
const DAY_MS: i64 = 24 * HOUR_MS;
const WEEK_MS: i64 = 7 * DAY_MS;
const MONTH_MS: i64 = 30 * DAY_MS;
const YEAR_MS: i64 = 365 * DAY_MS;

/// Describes `date` relative to `base` (`DateInput::Now` for the current
/// time), e.g. `"刚刚"`, `"5分钟前"`, `"2周后"`.
///
/// Months are 30 days and years 365 days. Unparseable input yields an empty
/// string.
pub fn relative_time<'a, 'b>(
    date: impl Into<DateInput<'a>>,
    base: impl Into<DateInput<'b>>,
) -> String {
    let (Some(date), Some(base)) = (to_date(date), to_date(base)) else {
        return String::new();
    };

    let diff = (base - date).num_milliseconds();
    let abs = diff.abs();
    if abs < MINUTE_MS {
        return "刚刚".to_string();
    }

    let (value, unit) = if abs < HOUR_MS {
        (abs / MINUTE_MS, "分钟")
    } else if abs < DAY_MS {
        (abs / HOUR_MS, "小时")
    } else if abs < WEEK_MS {
        (abs / DAY_MS, "天")
    } else if abs < MONTH_MS {
        (abs / WEEK_MS, "周")
    } else if abs < YEAR_MS {
        (abs / MONTH_MS, "个月")
    } else {
        (abs / YEAR_MS, "年")
    };
    let suffix = if diff > 0 { "前" } else { "后" };
    format!("{value}{unit}{suffix}")
}
