//! Occurrence expansion.
//!
//! [`occurrences`] is a pure function over the rule: no clock, no caches,
//! no shared state, safe to call on every keystroke of the editing form.
//! Incomplete or inconsistent rules expand to an empty list rather than an
//! error; callers that need to tell "validly zero dates" from "rule not
//! finished" check [`is_complete`] as well.

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate};

use super::dates::{
    add_months_clamped, first_of_month, last_weekday_of_month, nth_weekday_of_month,
};
use super::rule::{Frequency, MonthlyRule, Recurrence, Weekday};

/// Returns whether the rule is complete enough to expand.
///
/// A disabled rule is complete (it validly produces nothing). An enabled
/// rule needs both window bounds present and ordered, and for
/// weekly/biweekly frequency at least one selected weekday. A monthly rule
/// without a pattern is structurally complete; it just yields nothing.
#[must_use]
pub fn is_complete(rule: &Recurrence) -> bool {
    if !rule.enabled {
        return true;
    }
    let (Some(start), Some(end)) = (rule.start_date, rule.end_date) else {
        return false;
    };
    if start > end {
        return false;
    }
    match rule.frequency {
        Frequency::Weekly | Frequency::Biweekly => !rule.weekly.weekdays.is_empty(),
        Frequency::Monthly => true,
    }
}

/// Expands a rule into every occurrence date inside its inclusive window.
///
/// The result is chronological, strictly increasing, and duplicate-free.
/// Disabled rules, missing or unordered window bounds, empty weekday sets,
/// and absent monthly patterns all produce an empty list.
#[must_use]
pub fn occurrences(rule: &Recurrence) -> Vec<NaiveDate> {
    if !rule.enabled {
        return Vec::new();
    }
    let (Some(start), Some(end)) = (rule.start_date, rule.end_date) else {
        return Vec::new();
    };
    if start > end {
        return Vec::new();
    }

    match rule.frequency {
        // Biweekly currently expands exactly like weekly; whether it
        // should skip alternate weeks relative to the start date is an
        // open product question (see DESIGN.md).
        Frequency::Weekly | Frequency::Biweekly => {
            weekday_scan(start, end, &rule.weekly.weekdays)
        }
        Frequency::Monthly => monthly_walk(start, end, rule.monthly),
    }
}

/// Expands a rule and renders each occurrence as an ISO `yyyy-mm-dd`
/// string, the shape the hosting application stores.
#[must_use]
pub fn occurrences_iso(rule: &Recurrence) -> Vec<String> {
    occurrences(rule).iter().map(ToString::to_string).collect()
}

/// Day-by-day walk over the window, keeping days whose weekday is
/// selected.
fn weekday_scan(start: NaiveDate, end: NaiveDate, weekdays: &BTreeSet<Weekday>) -> Vec<NaiveDate> {
    if weekdays.is_empty() {
        return Vec::new();
    }
    start
        .iter_days()
        .take_while(|day| *day <= end)
        .filter(|day| weekdays.contains(&Weekday::from_chrono(day.weekday())))
        .collect()
}

/// Month-by-month walk from the month containing `start` through the month
/// containing `end`, one candidate per month, clipped to the window.
fn monthly_walk(start: NaiveDate, end: NaiveDate, rule: Option<MonthlyRule>) -> Vec<NaiveDate> {
    let Some(rule) = rule else {
        return Vec::new();
    };

    let mut out = Vec::new();
    let mut cursor = first_of_month(start);
    let last = first_of_month(end);

    while cursor <= last {
        if let Some(date) = monthly_candidate(rule, cursor.year(), cursor.month())
            && date >= start
            && date <= end
        {
            out.push(date);
        }
        // The cursor sits on day 1, so the clamped add never clamps and
        // always lands on the next month's first day.
        let Some(next) = add_months_clamped(cursor, 1) else {
            break;
        };
        cursor = next;
    }

    out
}

/// The candidate occurrence a monthly rule contributes for one month, if
/// any.
fn monthly_candidate(rule: MonthlyRule, year: i32, month: u32) -> Option<NaiveDate> {
    match rule {
        // from_ymd_opt rejects out-of-month days outright, so a 31st in a
        // 30-day month yields nothing instead of spilling into the next
        // month.
        MonthlyRule::DayOfMonth { day } => NaiveDate::from_ymd_opt(year, month, day),
        MonthlyRule::LastWeekday { weekday } => last_weekday_of_month(year, month, weekday),
        MonthlyRule::NthWeekday { weekday, nth } => {
            nth_weekday_of_month(year, month, weekday, nth)
        }
    }
}
