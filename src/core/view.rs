//! Read side: normalized, filtered and sorted view of the production table.

use crate::core::normalize::{NormalizedTime, TimeRule, normalize_table};
use crate::core::schema::Delimiter;
use crate::models::columns as col;
use crate::models::dataset::Dataset;
use crate::utils::date::parse_timestamp;
use chrono::NaiveDate;
use std::cmp::Reverse;

/// Row filter. Every criterion is optional; a criterion whose column is
/// missing from the table is ignored.
#[derive(Debug, Clone, Default)]
pub struct Filter {
    /// Exact match.
    pub operator: Option<String>,
    /// Case-insensitive "contains".
    pub material_code: Option<String>,
    /// Case-insensitive "contains".
    pub description: Option<String>,
    /// Case-insensitive "contains".
    pub machine_folder: Option<String>,
    /// Exact working day.
    pub date: Option<NaiveDate>,
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Normalized production table ready for display or export.
#[derive(Debug, Clone)]
pub struct ProductionView {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
    /// Canonical minutes, aligned with `rows`.
    pub minutes: Vec<Option<i64>>,
    pub delimiter: Delimiter,
    pub rule: TimeRule,
}

impl ProductionView {
    /// Normalize the time columns and reorder columns (known ones first).
    pub fn from_dataset(ds: Dataset) -> Self {
        let Dataset {
            columns,
            rows,
            delimiter,
        } = ds;
        let columns: Vec<String> = columns.iter().map(|c| c.trim().to_string()).collect();

        let NormalizedTime {
            rule,
            minutes,
            display,
        } = normalize_table(&columns, &rows);

        // canonical minutes replace the source column, the display text is derived
        let mut columns = columns;
        let mut rows = rows;
        for row in rows.iter_mut() {
            row.resize(columns.len(), String::new());
        }
        let min_idx = upsert_column(&mut columns, &mut rows, col::TIME_IN_PHASE_MINUTES);
        let disp_idx = upsert_column(&mut columns, &mut rows, col::TIME_IN_PHASE_DISPLAY);
        for ((row, m), d) in rows.iter_mut().zip(&minutes).zip(display) {
            row[min_idx] = m.map(|v| v.to_string()).unwrap_or_default();
            row[disp_idx] = d;
        }

        let (columns, rows) = reorder(columns, rows, &col::display_order());

        Self {
            columns,
            rows,
            minutes,
            delimiter,
            rule,
        }
    }

    fn idx(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn cell<'a>(&'a self, row: &'a [String], name: &str) -> &'a str {
        self.idx(name)
            .and_then(|i| row.get(i))
            .map(String::as_str)
            .unwrap_or("")
    }

    fn matches(&self, row: &[String], f: &Filter) -> bool {
        let check = |name: &str, pred: &dyn Fn(&str) -> bool| match self.idx(name) {
            Some(i) => pred(row.get(i).map(String::as_str).unwrap_or("")),
            None => true,
        };

        f.operator
            .as_deref()
            .is_none_or(|op| check(col::OPERATOR, &|v: &str| v == op))
            && f.material_code
                .as_deref()
                .is_none_or(|s| check(col::MATERIAL_CODE, &|v: &str| contains_ci(v, s)))
            && f.description
                .as_deref()
                .is_none_or(|s| check(col::DESCRIPTION, &|v: &str| contains_ci(v, s)))
            && f.machine_folder
                .as_deref()
                .is_none_or(|s| check(col::MACHINE_FOLDER, &|v: &str| contains_ci(v, s)))
            && f.date.is_none_or(|d| {
                let wanted = d.format("%Y-%m-%d").to_string();
                check(col::DATE, &|v: &str| v.trim() == wanted)
            })
    }

    /// Keep the rows matching `filter`, newest `timestamp` first.
    /// Rows with an unparseable timestamp go last, in their original order.
    pub fn filtered(&self, filter: &Filter) -> ProductionView {
        let ts_idx = self.idx(col::TIMESTAMP);

        let mut kept: Vec<(Vec<String>, Option<i64>)> = self
            .rows
            .iter()
            .zip(&self.minutes)
            .filter(|(row, _)| self.matches(row, filter))
            .map(|(row, m)| (row.clone(), *m))
            .collect();

        if let Some(i) = ts_idx {
            kept.sort_by_key(|(row, _)| {
                let ts = row.get(i).and_then(|v| parse_timestamp(v));
                (ts.is_none(), Reverse(ts))
            });
        }

        let (rows, minutes): (Vec<Vec<String>>, Vec<Option<i64>>) = kept.into_iter().unzip();
        ProductionView {
            columns: self.columns.clone(),
            rows,
            minutes,
            delimiter: self.delimiter,
            rule: self.rule.clone(),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Sum of the known durations, saturating at `i64::MAX`.
    pub fn total_minutes(&self) -> i64 {
        self.minutes
            .iter()
            .flatten()
            .fold(0i64, |acc, m| acc.saturating_add(*m))
    }
}

fn upsert_column(columns: &mut Vec<String>, rows: &mut [Vec<String>], name: &str) -> usize {
    // an existing column under another spelling takes the canonical name
    if let Some(i) = columns.iter().position(|c| c.eq_ignore_ascii_case(name)) {
        columns[i] = name.to_string();
        return i;
    }
    columns.push(name.to_string());
    for row in rows.iter_mut() {
        row.resize(columns.len(), String::new());
    }
    columns.len() - 1
}

fn reorder(
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
    preferred: &[String],
) -> (Vec<String>, Vec<Vec<String>>) {
    let mut order: Vec<usize> = preferred
        .iter()
        .filter_map(|p| columns.iter().position(|c| c == p))
        .collect();
    let rest: Vec<usize> = (0..columns.len()).filter(|i| !order.contains(i)).collect();
    order.extend(rest);

    let new_cols = order.iter().map(|&i| columns[i].clone()).collect();
    let new_rows = rows
        .into_iter()
        .map(|row| {
            order
                .iter()
                .map(|&i| row.get(i).cloned().unwrap_or_default())
                .collect()
        })
        .collect();
    (new_cols, new_rows)
}
