//! Calendar-day arithmetic primitives.
//!
//! Everything here is pure and `Option`-returning where construction can
//! fail; the generator treats `None` as "this month contributes nothing".

use chrono::{Datelike, Months, NaiveDate};

use super::rule::Weekday;

/// Parses an ISO `yyyy-mm-dd` date, leniently.
///
/// Surrounding whitespace and a trailing `T…` time-of-day suffix are
/// ignored; occurrence dates are calendar days, never instants.
#[must_use]
pub fn parse_iso_date(s: &str) -> Option<NaiveDate> {
    let day_part = s.trim().split('T').next()?;
    NaiveDate::parse_from_str(day_part, "%Y-%m-%d").ok()
}

/// Returns the number of days in a month, or `None` for an invalid
/// year/month pair.
#[must_use]
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = first.checked_add_months(Months::new(1))?;
    Some(next.pred_opt()?.day())
}

/// Returns the first day of the month containing `date`.
#[must_use]
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Adds calendar months, clamping the day to the target month's length.
///
/// Jan 31 + 1 month lands on Feb 28 (or 29), never on a date in March.
/// For `months >= 1` the result is strictly after `date`, which is what
/// makes month-by-month iteration provably terminate.
#[must_use]
pub fn add_months_clamped(date: NaiveDate, months: u32) -> Option<NaiveDate> {
    let total = date.month0().checked_add(months)?;
    let year = date.year().checked_add(i32::try_from(total / 12).ok()?)?;
    let month = total % 12 + 1;
    let day = date.day().min(days_in_month(year, month)?);
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Returns the last occurrence of `weekday` in the given month.
///
/// Walks backward from the month's final day; at most six steps.
#[must_use]
pub fn last_weekday_of_month(year: i32, month: u32, weekday: Weekday) -> Option<NaiveDate> {
    let mut day = NaiveDate::from_ymd_opt(year, month, days_in_month(year, month)?)?;
    while day.weekday() != weekday.to_chrono() {
        day = day.pred_opt()?;
    }
    Some(day)
}

/// Returns the nth occurrence (1-indexed) of `weekday` in the given month,
/// or `None` when the month has fewer than `nth` such weekdays.
#[must_use]
pub fn nth_weekday_of_month(
    year: i32,
    month: u32,
    weekday: Weekday,
    nth: u32,
) -> Option<NaiveDate> {
    if nth == 0 {
        return None;
    }

    let mut matched = 0;
    let mut day = NaiveDate::from_ymd_opt(year, month, 1)?;
    while day.month() == month {
        if day.weekday() == weekday.to_chrono() {
            matched += 1;
            if matched == nth {
                return Some(day);
            }
        }
        day = day.succ_opt()?;
    }

    None
}
