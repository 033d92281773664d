// src/export/json_csv.rs

use crate::core::view::ProductionView;
use crate::errors::{AppError, AppResult};
use crate::export::notify_export_success;
use crate::ui::messages::info;
use serde_json::{Map, Value};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Export CSV with the same delimiter as the source table.
pub(crate) fn export_csv(view: &ProductionView, path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::WriterBuilder::new()
        .delimiter(view.delimiter.as_byte())
        .terminator(csv::Terminator::Any(b'\n'))
        .from_path(path)?;

    wtr.write_record(&view.columns)?;
    for row in &view.rows {
        wtr.write_record(row)?;
    }
    wtr.flush()?;

    notify_export_success("CSV", view.len(), path);
    Ok(())
}

/// Export JSON pretty-printed: one object per row, keyed by column name.
/// The canonical minutes are written as numbers (null when unknown).
pub(crate) fn export_json(view: &ProductionView, path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let items: Vec<Value> = view
        .rows
        .iter()
        .zip(&view.minutes)
        .map(|(row, minutes)| {
            let mut obj = Map::new();
            for (col, val) in view.columns.iter().zip(row) {
                obj.insert(col.clone(), Value::String(val.clone()));
            }
            obj.insert(
                crate::models::columns::TIME_IN_PHASE_MINUTES.to_string(),
                minutes.map(Value::from).unwrap_or(Value::Null),
            );
            Value::Object(obj)
        })
        .collect();

    let json_data = serde_json::to_string_pretty(&items)?;
    let mut file = File::create(path)
        .map_err(|e| AppError::Export(format!("cannot create {}: {e}", path.display())))?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", view.len(), path);
    Ok(())
}
