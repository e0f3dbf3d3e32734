//! Date coercion - one entry point mapping every accepted input shape to a
//! local `NaiveDateTime`.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};

use super::DateError;

/// Any value the date functions accept.
///
/// `Now` resolves to the current local time and must be asked for
/// explicitly. `Missing` is what a `None` converts into, e.g. the result of
/// [`from_ymd`](super::from_ymd) for a day that does not exist; it never
/// parses. Strings and epoch milliseconds are parsed lazily by
/// [`parse_date`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateInput<'a> {
    #[default]
    Now,
    DateTime(NaiveDateTime),
    Text(&'a str),
    Millis(i64),
    Missing,
}

impl<'a> From<&'a str> for DateInput<'a> {
    fn from(s: &'a str) -> Self {
        DateInput::Text(s)
    }
}

impl<'a> From<&'a String> for DateInput<'a> {
    fn from(s: &'a String) -> Self {
        DateInput::Text(s.as_str())
    }
}

impl From<i64> for DateInput<'_> {
    fn from(ms: i64) -> Self {
        DateInput::Millis(ms)
    }
}

impl From<NaiveDateTime> for DateInput<'_> {
    fn from(dt: NaiveDateTime) -> Self {
        DateInput::DateTime(dt)
    }
}

impl From<NaiveDate> for DateInput<'_> {
    fn from(d: NaiveDate) -> Self {
        DateInput::DateTime(d.and_time(NaiveTime::MIN))
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for DateInput<'_> {
    fn from(dt: DateTime<Tz>) -> Self {
        DateInput::DateTime(dt.with_timezone(&Local).naive_local())
    }
}

impl<'a, T: Into<DateInput<'a>>> From<Option<T>> for DateInput<'a> {
    fn from(value: Option<T>) -> Self {
        value.map_or(DateInput::Missing, Into::into)
    }
}

/// Current local wall-clock time.
pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

const DATETIME_FORMATS: [&str; 6] = [
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y/%m/%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%Y/%m/%d %H:%M",
];

const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%Y.%m.%d"];

/// Parses any [`DateInput`], reporting why it failed.
///
/// Accepted text: `YYYY`, `YYYY-MM`, `YYYY-MM-DD` (also with `/` or `.`),
/// `YYYY-MM-DD HH:mm[:ss[.SSS]]` (space or `T`), and RFC 3339 with an offset,
/// which is converted to local time.
///
/// # Errors
///
/// - [`DateError::Missing`] for a `None` input
/// - [`DateError::Empty`] for blank text
/// - [`DateError::Unrecognized`] when no format matches
/// - [`DateError::OutOfRange`] for epoch milliseconds chrono cannot represent
pub fn parse_date<'a>(input: impl Into<DateInput<'a>>) -> Result<NaiveDateTime, DateError> {
    match input.into() {
        DateInput::Now => Ok(now()),
        DateInput::DateTime(dt) => Ok(dt),
        DateInput::Millis(ms) => DateTime::from_timestamp_millis(ms)
            .map(|dt| dt.with_timezone(&Local).naive_local())
            .ok_or(DateError::OutOfRange(ms)),
        DateInput::Text(text) => parse_text(text.trim()),
        DateInput::Missing => Err(DateError::Missing),
    }
}

fn parse_text(text: &str) -> Result<NaiveDateTime, DateError> {
    if text.is_empty() {
        return Err(DateError::Empty);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Ok(dt.with_timezone(&Local).naive_local());
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(text, fmt) {
            return Ok(dt);
        }
    }
    for fmt in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(text, fmt) {
            return Ok(d.and_time(NaiveTime::MIN));
        }
    }

    parse_partial(text)
        .map(|d| d.and_time(NaiveTime::MIN))
        .ok_or_else(|| DateError::Unrecognized(text.to_string()))
}

/// `YYYY` or `YYYY-MM` (`/` also accepted), anchored to the first day.
fn parse_partial(text: &str) -> Option<NaiveDate> {
    let mut parts = text.split(['-', '/']);
    let year = parts.next()?;
    if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let year: i32 = year.parse().ok()?;
    let month = match parts.next() {
        Some(m) if (1..=2).contains(&m.len()) && m.bytes().all(|b| b.is_ascii_digit()) => {
            m.parse().ok()?
        }
        Some(_) => return None,
        None => 1,
    };
    if parts.next().is_some() {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month, 1)
}

/// Lenient form of [`parse_date`]: `None` for anything unparseable.
pub fn to_date<'a>(input: impl Into<DateInput<'a>>) -> Option<NaiveDateTime> {
    match parse_date(input) {
        Ok(dt) => Some(dt),
        Err(_e) => {
            #[cfg(feature = "tracing")]
            tracing::debug!("date coercion failed: {}", _e);
            None
        }
    }
}

/// Like [`to_date`] but substitutes the current time for unparseable input.
pub fn to_date_or_now<'a>(input: impl Into<DateInput<'a>>) -> NaiveDateTime {
    to_date(input).unwrap_or_else(now)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    fn ymd_hms(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .and_then(|date| date.and_hms_opt(h, mi, s))
            .expect("valid test date")
    }

    #[test]
    fn test_parse_date_only_formats() {
        let expected = ymd_hms(2024, 3, 15, 0, 0, 0);
        assert_eq!(parse_date("2024-03-15"), Ok(expected));
        assert_eq!(parse_date("2024/03/15"), Ok(expected));
        assert_eq!(parse_date("2024.03.15"), Ok(expected));
        assert_eq!(parse_date("  2024-03-15  "), Ok(expected));
    }

    #[test]
    fn test_parse_datetime_formats() {
        assert_eq!(parse_date("2024-03-15 10:20:30"), Ok(ymd_hms(2024, 3, 15, 10, 20, 30)));
        assert_eq!(parse_date("2024-03-15T10:20"), Ok(ymd_hms(2024, 3, 15, 10, 20, 0)));
        let dt = parse_date("2024-03-15 10:20:30.250").expect("fractional seconds");
        assert_eq!(dt.nanosecond(), 250_000_000);
    }

    #[test]
    fn test_parse_partial_dates() {
        assert_eq!(parse_date("2024"), Ok(ymd_hms(2024, 1, 1, 0, 0, 0)));
        assert_eq!(parse_date("2024-02"), Ok(ymd_hms(2024, 2, 1, 0, 0, 0)));
        assert_eq!(parse_date("2024/2"), Ok(ymd_hms(2024, 2, 1, 0, 0, 0)));
        assert!(parse_date("2024-13").is_err());
        assert!(parse_date("24-02").is_err());
    }

    #[test]
    fn test_parse_rfc3339_converts_to_local() {
        let dt = parse_date("2024-03-15T10:20:30Z").expect("rfc3339");
        let expected = DateTime::parse_from_rfc3339("2024-03-15T10:20:30Z")
            .map(|d| d.with_timezone(&Local).naive_local())
            .expect("rfc3339");
        assert_eq!(dt, expected);
    }

    #[test]
    fn test_parse_millis() {
        let ms = 1_710_460_800_000_i64;
        let expected = DateTime::from_timestamp_millis(ms)
            .map(|d| d.with_timezone(&Local).naive_local())
            .expect("in range");
        assert_eq!(parse_date(ms), Ok(expected));
        assert_eq!(parse_date(i64::MAX), Err(DateError::OutOfRange(i64::MAX)));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(parse_date(""), Err(DateError::Empty));
        assert_eq!(parse_date("   "), Err(DateError::Empty));
        assert_eq!(
            parse_date("not-a-date"),
            Err(DateError::Unrecognized("not-a-date".to_string()))
        );
        assert!(parse_date("2024-02-30").is_err());
    }

    #[test]
    fn test_option_input() {
        assert_eq!(parse_date(None::<&str>), Err(DateError::Missing));
        assert_eq!(parse_date(Some("2024-01-01")).map(|d| d.year()), Ok(2024));
        assert!(to_date(None::<NaiveDate>).is_none());
    }

    #[test]
    fn test_now_is_explicit() {
        let before = now();
        assert!(parse_date(DateInput::Now).is_ok_and(|dt| dt >= before));
        assert_eq!(DateInput::default(), DateInput::Now);
    }

    #[test]
    fn test_to_date_lenient() {
        assert!(to_date("garbage").is_none());
        assert_eq!(to_date(ymd_hms(2020, 5, 6, 7, 8, 9)), Some(ymd_hms(2020, 5, 6, 7, 8, 9)));
        let d = NaiveDate::from_ymd_opt(2020, 5, 6).expect("valid");
        assert_eq!(to_date(d), Some(ymd_hms(2020, 5, 6, 0, 0, 0)));
    }

    #[test]
    fn test_to_date_or_now_substitutes() {
        let before = now();
        assert!(to_date_or_now("garbage") >= before);
    }
}
