// src/export/logic.rs

use crate::core::view::{Filter, ProductionView};
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::ui::messages::warning;
use std::path::Path;

/// Export of the production view to a file.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the rows of `view` matching `filter`.
    ///
    /// - `file`: absolute output path
    /// - `force`: overwrite an existing file without asking
    ///
    /// Returns the number of exported rows.
    pub fn export(
        view: &ProductionView,
        filter: &Filter,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }

        let selected = view.filtered(filter);
        if selected.is_empty() {
            warning("No records match the selected filters, nothing exported.");
            return Ok(0);
        }

        ensure_writable(path, force)?;

        match format {
            ExportFormat::Csv => export_csv(&selected, path)?,
            ExportFormat::Json => export_json(&selected, path)?,
        }

        Ok(selected.len())
    }
}
