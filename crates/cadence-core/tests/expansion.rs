//! End-to-end expansion tests over JSON-shaped rules, the path the hosting
//! application exercises on every rule edit.

use cadence_core::{Recurrence, is_complete, occurrences_iso};

fn expand(json: &str) -> Vec<String> {
    let rule = Recurrence::from_json_str(json).expect("valid rule JSON");
    occurrences_iso(&rule)
}

#[test_log::test]
fn weekly_rule_from_wire_form() {
    let dates = expand(
        r#"{
            "enabled": true,
            "frequency": "weekly",
            "startDate": "2024-01-01",
            "endDate": "2024-01-14",
            "weekly": { "weekdays": [1, 3] }
        }"#,
    );
    assert_eq!(dates, ["2024-01-01", "2024-01-03", "2024-01-08", "2024-01-10"]);
}

#[test_log::test]
fn monthly_day_of_month_rule_from_wire_form() {
    let dates = expand(
        r#"{
            "enabled": true,
            "frequency": "monthly",
            "startDate": "2023-01-01",
            "endDate": "2023-03-31",
            "monthly": { "type": "day_of_month", "day": 31 }
        }"#,
    );
    assert_eq!(dates, ["2023-01-31", "2023-03-31"]);
}

#[test_log::test]
fn monthly_last_weekday_rule_from_wire_form() {
    let dates = expand(
        r#"{
            "enabled": true,
            "frequency": "monthly",
            "startDate": "2024-03-01",
            "endDate": "2024-04-30",
            "monthly": { "type": "last_weekday", "weekday": 5 }
        }"#,
    );
    assert_eq!(dates, ["2024-03-29", "2024-04-26"]);
}

#[test_log::test]
fn monthly_nth_weekday_rule_from_wire_form() {
    let dates = expand(
        r#"{
            "enabled": true,
            "frequency": "monthly",
            "startDate": "2024-01-01",
            "endDate": "2024-02-29",
            "monthly": { "type": "nth_weekday", "weekday": 1, "nth": 5 }
        }"#,
    );
    assert_eq!(dates, ["2024-01-29"]);
}

#[test_log::test]
fn mid_edit_rule_with_broken_date_stays_quiet() {
    let rule = Recurrence::from_json_str(
        r#"{
            "enabled": true,
            "frequency": "weekly",
            "startDate": "2024-01-",
            "endDate": "2024-01-14",
            "weekly": { "weekdays": [2] }
        }"#,
    )
    .expect("JSON itself is well-formed");

    assert!(occurrences_iso(&rule).is_empty());
    assert!(!is_complete(&rule));
}

#[test_log::test]
fn disabled_rule_is_complete_but_empty() {
    let rule = Recurrence::from_json_str(
        r#"{
            "enabled": false,
            "frequency": "monthly",
            "startDate": "2024-01-01",
            "endDate": "2024-12-31",
            "monthly": { "type": "day_of_month", "day": 1 }
        }"#,
    )
    .expect("valid rule JSON");

    assert!(occurrences_iso(&rule).is_empty());
    assert!(is_complete(&rule));
}

#[test_log::test]
fn year_long_monthly_expansion_hits_every_eligible_month() {
    // Day 30 exists in every month but February.
    let dates = expand(
        r#"{
            "enabled": true,
            "frequency": "monthly",
            "startDate": "2023-01-01",
            "endDate": "2023-12-31",
            "monthly": { "type": "day_of_month", "day": 30 }
        }"#,
    );
    assert_eq!(dates.len(), 11);
    assert!(!dates.iter().any(|d| d.starts_with("2023-02")));
}
