mod common;

use common::cols;
use prdlog::core::normalize::{TimeRule, normalize_table};

fn rows(data: &[&[&str]]) -> Vec<Vec<String>> {
    data.iter()
        .map(|r| r.iter().map(|c| c.to_string()).collect())
        .collect()
}

#[test]
fn test_minutes_column_with_clock_text() {
    let columns = cols(&["timestamp", "time-in-phase-minutes"]);
    let data = rows(&[
        &["2025-01-01 10:00:00", "2:00:00"],
        &["2025-01-01 11:00:00", "0:45"],
        &["2025-01-01 12:00:00", "garbage"],
    ]);

    let n = normalize_table(&columns, &data);
    assert_eq!(n.rule, TimeRule::MinutesColumn("time-in-phase-minutes".into()));
    assert_eq!(n.minutes, vec![Some(120), Some(45), None]);
    assert_eq!(n.display, vec!["02:00", "00:45", ""]);
}

#[test]
fn test_minutes_column_with_bare_numbers() {
    let columns = cols(&["TIME-IN-PHASE-MINUTES"]);
    let data = rows(&[&["90"], &["12.7"], &[""], &["-5"]]);

    let n = normalize_table(&columns, &data);
    assert!(matches!(n.rule, TimeRule::MinutesColumn(_)));
    assert_eq!(n.minutes, vec![Some(90), Some(12), None, None]);
    assert_eq!(n.display[0], "01:30");
}

#[test]
fn test_other_time_column_with_clock_text() {
    let columns = cols(&["timestamp", "setup time", "phase time"]);
    let data = rows(&[
        &["2025-01-01 10:00:00", "15", "1:30"],
        &["2025-01-01 11:00:00", "20", "1000:00"],
    ]);

    let n = normalize_table(&columns, &data);
    // the timestamp is never a duration, "setup time" has no clock text
    assert_eq!(n.rule, TimeRule::ClockColumn("phase time".into()));
    assert_eq!(n.minutes, vec![Some(90), None]);
}

#[test]
fn test_hours_and_minutes_columns() {
    let columns = cols(&["Hours", "Minutes", "phase"]);
    let data = rows(&[&["2", "15", "A"], &["x", "30", "B"], &["1,5", "-3", "C"]]);

    let n = normalize_table(&columns, &data);
    assert!(matches!(n.rule, TimeRule::HoursAndMinutes { .. }));
    assert_eq!(n.minutes, vec![Some(135), Some(30), Some(60)]);
}

#[test]
fn test_nothing_usable_is_all_unknown() {
    let columns = cols(&["phase", "operator"]);
    let data = rows(&[&["A", "B"], &["C", "D"]]);

    let n = normalize_table(&columns, &data);
    assert_eq!(n.rule, TimeRule::Unknown);
    assert_eq!(n.minutes, vec![None, None]);
    assert_eq!(n.display, vec!["", ""]);
}

#[test]
fn test_empty_table_has_empty_columns() {
    let n = normalize_table(&cols(&["time-in-phase-minutes"]), &[]);
    assert!(n.minutes.is_empty());
    assert!(n.display.is_empty());
}

#[test]
fn test_huge_hours_value_saturates_instead_of_overflowing() {
    let columns = cols(&["hours", "minutes"]);
    let data = rows(&[&["1e300", "5"], &["1", "30"]]);

    let n = normalize_table(&columns, &data);
    assert_eq!(n.minutes, vec![Some(i64::MAX), Some(90)]);
    assert_eq!(n.display.len(), 2);
    assert_eq!(n.display[1], "01:30");
}
