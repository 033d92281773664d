use crate::core::schema::Delimiter;
use crate::errors::AppResult;
use crate::models::record::Record;

/// Serialize one record as a single CSV line ending in `\n`.
///
/// Values follow `columns` order, missing keys become empty fields and
/// quoting is minimal (only fields holding the delimiter, a quote or a line break).
pub fn serialize(columns: &[String], record: &Record, delimiter: Delimiter) -> AppResult<String> {
    let fields: Vec<String> = columns
        .iter()
        .map(|c| record.get(c).map(|v| v.to_string()).unwrap_or_default())
        .collect();

    write_line(&fields, delimiter)
}

/// Header line for a new table, same quoting rules as the data lines.
pub fn header_line(columns: &[String], delimiter: Delimiter) -> AppResult<String> {
    write_line(columns, delimiter)
}

fn write_line<S: AsRef<[u8]>>(fields: &[S], delimiter: Delimiter) -> AppResult<String> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(delimiter.as_byte())
        .terminator(csv::Terminator::Any(b'\n'))
        .quote_style(csv::QuoteStyle::Necessary)
        .from_writer(Vec::new());

    wtr.write_record(fields)?;
    let bytes = wtr
        .into_inner()
        .map_err(|e| crate::errors::AppError::Other(format!("CSV flush error: {e}")))?;

    String::from_utf8(bytes)
        .map_err(|e| crate::errors::AppError::Other(format!("CSV encoding error: {e}")))
}
