//! Calendar arithmetic and unit boundaries.

use chrono::{Datelike, Months, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Timelike};

use super::Unit;
use super::parse::{DateInput, to_date, to_date_or_now};

/// Truncates `dt` to the start of `unit`. Weeks start on Sunday.
fn floor(dt: NaiveDateTime, unit: Unit) -> NaiveDateTime {
    let date = dt.date();
    let midnight = |d: NaiveDate| d.and_time(NaiveTime::MIN);
    match unit {
        Unit::Year => midnight(date.with_ordinal(1).unwrap_or(date)),
        Unit::Month => midnight(date.with_day(1).unwrap_or(date)),
        Unit::Week => {
            let back = TimeDelta::days(i64::from(date.weekday().num_days_from_sunday()));
            midnight(date.checked_sub_signed(back).unwrap_or(date))
        }
        Unit::Day => midnight(date),
        Unit::Hour => dt
            .with_minute(0)
            .and_then(|d| d.with_second(0))
            .and_then(|d| d.with_nanosecond(0))
            .unwrap_or(dt),
        Unit::Minute => dt
            .with_second(0)
            .and_then(|d| d.with_nanosecond(0))
            .unwrap_or(dt),
        Unit::Second => dt.with_nanosecond(0).unwrap_or(dt),
    }
}

/// Shifts `dt` by `amount` units, `None` on overflow.
///
/// Month and year steps clamp to the last day of the target month, so
/// Jan 31 + 1 month is Feb 28/29.
fn shift(dt: NaiveDateTime, amount: i64, unit: Unit) -> Option<NaiveDateTime> {
    let months = match unit {
        Unit::Year => Some(amount.checked_mul(12)?),
        Unit::Month => Some(amount),
        _ => None,
    };
    if let Some(months) = months {
        let step = Months::new(u32::try_from(months.unsigned_abs()).ok()?);
        return if months >= 0 {
            dt.checked_add_months(step)
        } else {
            dt.checked_sub_months(step)
        };
    }

    let delta = TimeDelta::try_milliseconds(amount.checked_mul(unit.millis()?)?)?;
    dt.checked_add_signed(delta)
}

fn shift_or_keep(dt: NaiveDateTime, amount: i64, unit: Unit) -> NaiveDateTime {
    shift(dt, amount, unit).unwrap_or_else(|| {
        #[cfg(feature = "tracing")]
        tracing::warn!("date arithmetic overflow: {} + {} {:?}", dt, amount, unit);
        dt
    })
}

/// First instant of `unit` containing `date`.
///
/// Unparseable input is replaced by the current time.
pub fn start_of<'a>(date: impl Into<DateInput<'a>>, unit: Unit) -> NaiveDateTime {
    floor(to_date_or_now(date), unit)
}

/// Last millisecond of `unit` containing `date`.
pub fn end_of<'a>(date: impl Into<DateInput<'a>>, unit: Unit) -> NaiveDateTime {
    let start = floor(to_date_or_now(date), unit);
    match shift(start, 1, unit) {
        Some(next) => next - TimeDelta::milliseconds(1),
        None => start,
    }
}

/// `date` moved forward by `amount` units (backward when negative).
///
/// Out-of-range results leave the date unchanged.
///
/// ```
/// use utilkit::date::{add, format, Unit};
/// assert_eq!(format(add("2024-01-31", 1, Unit::Month), "YYYY-MM-DD"), "2024-02-29");
/// ```
pub fn add<'a>(date: impl Into<DateInput<'a>>, amount: i64, unit: Unit) -> NaiveDateTime {
    shift_or_keep(to_date_or_now(date), amount, unit)
}

/// `date` moved backward by `amount` units.
pub fn subtract<'a>(date: impl Into<DateInput<'a>>, amount: i64, unit: Unit) -> NaiveDateTime {
    match amount.checked_neg() {
        Some(neg) => add(date, neg, unit),
        None => to_date_or_now(date),
    }
}

/// `a - b` in whole `unit`s.
///
/// Years and months compare calendar fields; the other units divide the
/// millisecond difference, truncating toward zero. Unparseable input yields 0.
pub fn diff<'a, 'b>(a: impl Into<DateInput<'a>>, b: impl Into<DateInput<'b>>, unit: Unit) -> i64 {
    let (Some(a), Some(b)) = (to_date(a), to_date(b)) else {
        return 0;
    };
    let years = i64::from(a.year()) - i64::from(b.year());
    match unit {
        Unit::Year => years,
        Unit::Month => years * 12 + i64::from(a.month()) - i64::from(b.month()),
        _ => {
            let ms = (a - b).num_milliseconds();
            unit.millis().map_or(0, |per| ms / per)
        }
    }
}

/// Whether `a` and `b` fall in the same `unit`. False on unparseable input.
pub fn is_same<'a, 'b>(
    a: impl Into<DateInput<'a>>,
    b: impl Into<DateInput<'b>>,
    unit: Unit,
) -> bool {
    match (to_date(a), to_date(b)) {
        (Some(a), Some(b)) => floor(a, unit) == floor(b, unit),
        _ => false,
    }
}

pub fn start_of_month<'a>(date: impl Into<DateInput<'a>>) -> NaiveDateTime {
    start_of(date, Unit::Month)
}

pub fn end_of_month<'a>(date: impl Into<DateInput<'a>>) -> NaiveDateTime {
    end_of(date, Unit::Month)
}

fn quarter_start(dt: NaiveDateTime) -> NaiveDateTime {
    let first_month = (dt.month0() / 3) * 3 + 1;
    let start = floor(dt, Unit::Year);
    start.with_month(first_month).unwrap_or(start)
}

pub fn start_of_quarter<'a>(date: impl Into<DateInput<'a>>) -> NaiveDateTime {
    quarter_start(to_date_or_now(date))
}

pub fn end_of_quarter<'a>(date: impl Into<DateInput<'a>>) -> NaiveDateTime {
    let start = quarter_start(to_date_or_now(date));
    match shift(start, 3, Unit::Month) {
        Some(next) => next - TimeDelta::milliseconds(1),
        None => start,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date::format;

    const FULL: &str = "YYYY-MM-DD HH:mm:ss.SSS";

    #[test]
    fn test_start_of_units() {
        let d = "2024-03-14 15:16:17.500";
        assert_eq!(format(start_of(d, Unit::Year), FULL), "2024-01-01 00:00:00.000");
        assert_eq!(format(start_of(d, Unit::Month), FULL), "2024-03-01 00:00:00.000");
        // 2024-03-14 is a Thursday
        assert_eq!(format(start_of(d, Unit::Week), FULL), "2024-03-10 00:00:00.000");
        assert_eq!(format(start_of(d, Unit::Day), FULL), "2024-03-14 00:00:00.000");
        assert_eq!(format(start_of(d, Unit::Hour), FULL), "2024-03-14 15:00:00.000");
        assert_eq!(format(start_of(d, Unit::Minute), FULL), "2024-03-14 15:16:00.000");
        assert_eq!(format(start_of(d, Unit::Second), FULL), "2024-03-14 15:16:17.000");
    }

    #[test]
    fn test_end_of_units() {
        let d = "2024-02-14 15:16:17";
        assert_eq!(format(end_of(d, Unit::Year), FULL), "2024-12-31 23:59:59.999");
        assert_eq!(format(end_of(d, Unit::Month), FULL), "2024-02-29 23:59:59.999");
        assert_eq!(format(end_of(d, Unit::Week), FULL), "2024-02-17 23:59:59.999");
        assert_eq!(format(end_of(d, Unit::Day), FULL), "2024-02-14 23:59:59.999");
        assert_eq!(format(end_of(d, Unit::Minute), FULL), "2024-02-14 15:16:59.999");
    }

    #[test]
    fn test_start_of_week_on_sunday_is_same_day() {
        assert_eq!(format(start_of("2024-03-17 08:00", Unit::Week), "YYYY-MM-DD"), "2024-03-17");
    }

    #[test]
    fn test_week_boundaries_at_chrono_limits() {
        let min = NaiveDateTime::MIN;
        assert!(start_of(min, Unit::Week) <= min);
        assert!(end_of(min, Unit::Week) >= min);
        assert!(is_same(min, min, Unit::Week));

        let max = NaiveDateTime::MAX;
        assert!(start_of(max, Unit::Week) <= max);
        assert_eq!(end_of(max, Unit::Week), start_of(max, Unit::Week));
    }

    #[test]
    fn test_add_and_subtract() {
        let d = "2024-03-15 10:00:00";
        assert_eq!(format(add(d, 2, Unit::Day), FULL), "2024-03-17 10:00:00.000");
        assert_eq!(format(add(d, -1, Unit::Week), FULL), "2024-03-08 10:00:00.000");
        assert_eq!(format(add(d, 90, Unit::Minute), FULL), "2024-03-15 11:30:00.000");
        assert_eq!(format(add(d, 1, Unit::Year), FULL), "2025-03-15 10:00:00.000");
        assert_eq!(format(subtract(d, 3, Unit::Month), FULL), "2023-12-15 10:00:00.000");
        assert_eq!(format(subtract(d, 30, Unit::Second), FULL), "2024-03-15 09:59:30.000");
    }

    #[test]
    fn test_add_month_clamps_to_month_end() {
        assert_eq!(format(add("2024-01-31", 1, Unit::Month), "YYYY-MM-DD"), "2024-02-29");
        assert_eq!(format(add("2023-01-31", 1, Unit::Month), "YYYY-MM-DD"), "2023-02-28");
        assert_eq!(format(add("2024-02-29", 1, Unit::Year), "YYYY-MM-DD"), "2025-02-28");
        assert_eq!(format(subtract("2024-03-31", 1, Unit::Month), "YYYY-MM-DD"), "2024-02-29");
    }

    #[test]
    fn test_add_overflow_keeps_date() {
        let d = "2024-03-15";
        assert_eq!(format(add(d, i64::MAX, Unit::Day), "YYYY-MM-DD"), "2024-03-15");
        assert_eq!(format(subtract(d, i64::MIN, Unit::Month), "YYYY-MM-DD"), "2024-03-15");
    }

    #[test]
    fn test_diff() {
        assert_eq!(diff("2024-03-15", "2023-12-31", Unit::Year), 1);
        assert_eq!(diff("2024-03-15", "2023-12-31", Unit::Month), 3);
        assert_eq!(diff("2024-03-15", "2024-03-01", Unit::Week), 2);
        assert_eq!(diff("2024-03-15", "2024-03-01", Unit::Day), 14);
        assert_eq!(diff("2024-03-15 00:00", "2024-03-15 10:30", Unit::Hour), -10);
        assert_eq!(diff("2024-03-15 00:01:30", "2024-03-15", Unit::Minute), 1);
        assert_eq!(diff("2024-03-15 00:01:30", "2024-03-15", Unit::Second), 90);
        assert_eq!(diff("garbage", "2024-03-15", Unit::Day), 0);
    }

    #[test]
    fn test_is_same() {
        assert!(is_same("2024-03-15 01:00", "2024-03-15 23:00", Unit::Day));
        assert!(!is_same("2024-03-15", "2024-03-16", Unit::Day));
        assert!(is_same("2024-03-10", "2024-03-16", Unit::Week));
        assert!(!is_same("garbage", "2024-03-16", Unit::Year));
    }

    #[test]
    fn test_month_and_quarter_boundaries() {
        assert_eq!(format(start_of_month("2024-02-14"), "YYYY-MM-DD"), "2024-02-01");
        assert_eq!(format(end_of_month("2023-02-14"), "YYYY-MM-DD"), "2023-02-28");
        assert_eq!(format(start_of_quarter("2024-05-20"), "YYYY-MM-DD"), "2024-04-01");
        assert_eq!(format(end_of_quarter("2024-05-20"), FULL), "2024-06-30 23:59:59.999");
        assert_eq!(format(end_of_quarter("2024-11-02"), "YYYY-MM-DD"), "2024-12-31");
        assert_eq!(format(start_of_quarter("2024-01-01"), "YYYY-MM-DD"), "2024-01-01");
    }
}
