use crate::core::schema::{Delimiter, sniff_delimiter};
use crate::errors::{AppError, AppResult};
use crate::models::dataset::Dataset;
use tracing::debug;

/// Decode a whole table. The delimiter is sniffed from the header; if parsing
/// fails with it, the other delimiter is tried once before giving up.
pub fn read_table(content: &[u8]) -> AppResult<Dataset> {
    if content.is_empty() {
        return Ok(Dataset::empty());
    }

    let sniffed = sniff_delimiter(content);
    match parse_with(content, sniffed) {
        Ok(ds) => Ok(ds),
        Err(first) => {
            debug!(error = %first, delimiter = %sniffed, "parse failed, retrying with the other delimiter");
            parse_with(content, sniffed.other())
        }
    }
}

fn parse_with(content: &[u8], delimiter: Delimiter) -> AppResult<Dataset> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(delimiter.as_byte())
        .has_headers(true)
        .flexible(true)
        .from_reader(content);

    let columns: Vec<String> = rdr
        .headers()?
        .iter()
        .map(|h| h.trim().trim_start_matches('\u{feff}').to_string())
        .collect();

    let mut rows = Vec::new();
    for (n, rec) in rdr.records().enumerate() {
        let rec = rec?;
        if rec.len() > columns.len() {
            return Err(AppError::Table(format!(
                "row {} has {} fields, header has {}",
                n + 2,
                rec.len(),
                columns.len()
            )));
        }
        let mut row: Vec<String> = rec.iter().map(str::to_string).collect();
        row.resize(columns.len(), String::new());
        rows.push(row);
    }

    Ok(Dataset {
        columns,
        rows,
        delimiter,
    })
}
