//! Resolution of the canonical phase duration from heterogeneous columns.
//!
//! The rules are tried in a fixed order and the first one that applies wins:
//!
//! 1. [`TimeRule::MinutesColumn`]: a `time-in-phase-minutes` column. Clock
//!    text if any value holds a `:`, bare numbers otherwise.
//! 2. [`TimeRule::ClockColumn`]: the first other column whose name contains
//!    `time` (the record `timestamp` excluded) with at least one `:` value.
//! 3. [`TimeRule::HoursAndMinutes`]: separate `hours` and `minutes` columns.
//! 4. [`TimeRule::Unknown`]: nothing usable, every row is unknown.
//!
//! Column names are compared trimmed and case-insensitively.

use crate::models::columns as col;
use crate::utils::time::{hours_and_minutes, parse_clock, render};

/// Which rule produced the minutes column, with the source column(s).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeRule {
    MinutesColumn(String),
    ClockColumn(String),
    HoursAndMinutes { hours: String, minutes: String },
    Unknown,
}

/// Canonical minutes per row plus the matching display text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedTime {
    pub rule: TimeRule,
    pub minutes: Vec<Option<i64>>,
    pub display: Vec<String>,
}

fn key(name: &str) -> String {
    name.trim().to_lowercase()
}

fn find_exact(columns: &[String], wanted: &str) -> Option<usize> {
    columns.iter().position(|c| key(c) == wanted)
}

fn values(rows: &[Vec<String>], idx: usize) -> Vec<&str> {
    rows.iter()
        .map(|r| r.get(idx).map(String::as_str).unwrap_or(""))
        .collect()
}

fn any_clock_like(vals: &[&str]) -> bool {
    vals.iter().any(|v| v.contains(':'))
}

/// Bare minute count. Decimals are truncated, negatives and garbage are unknown.
fn parse_bare_minutes(v: &str) -> Option<i64> {
    match v.trim().parse::<f64>() {
        Ok(n) if n.is_finite() && n >= 0.0 => Some(n.trunc() as i64),
        _ => None,
    }
}

/// Resolve the minutes column for a table given its columns and rows.
/// Always returns one entry per row.
pub fn normalize_table(columns: &[String], rows: &[Vec<String>]) -> NormalizedTime {
    let (rule, minutes) = resolve(columns, rows);
    let display = minutes.iter().map(|m| render(*m)).collect();

    NormalizedTime {
        rule,
        minutes,
        display,
    }
}

fn resolve(columns: &[String], rows: &[Vec<String>]) -> (TimeRule, Vec<Option<i64>>) {
    // 1) explicit minutes column
    if let Some(idx) = find_exact(columns, col::TIME_IN_PHASE_MINUTES) {
        let vals = values(rows, idx);
        let minutes = if any_clock_like(&vals) {
            vals.iter().map(|v| parse_clock(v)).collect()
        } else {
            vals.iter().map(|v| parse_bare_minutes(v)).collect()
        };
        return (TimeRule::MinutesColumn(columns[idx].clone()), minutes);
    }

    // 2) any "time" column holding clock text
    for (idx, name) in columns.iter().enumerate() {
        let k = key(name);
        if !k.contains("time") || k == col::TIMESTAMP {
            continue;
        }
        let vals = values(rows, idx);
        if any_clock_like(&vals) {
            let minutes = vals.iter().map(|v| parse_clock(v)).collect();
            return (TimeRule::ClockColumn(name.clone()), minutes);
        }
    }

    // 3) hours + minutes
    if let (Some(h), Some(m)) = (
        find_exact(columns, col::HOURS),
        find_exact(columns, col::MINUTES),
    ) {
        let minutes = rows
            .iter()
            .map(|r| {
                let cell = |i: usize| r.get(i).map(String::as_str).unwrap_or("");
                Some(hours_and_minutes(cell(h), cell(m)))
            })
            .collect();
        return (
            TimeRule::HoursAndMinutes {
                hours: columns[h].clone(),
                minutes: columns[m].clone(),
            },
            minutes,
        );
    }

    (TimeRule::Unknown, vec![None; rows.len()])
}
