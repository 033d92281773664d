//! Delimiter sniffing, header discovery and record/schema reconciliation.

use crate::models::record::Record;
use std::fmt;

/// Field separator of a production table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Semicolon,
    Comma,
}

impl Delimiter {
    pub fn as_char(self) -> char {
        match self {
            Delimiter::Semicolon => ';',
            Delimiter::Comma => ',',
        }
    }

    pub fn as_byte(self) -> u8 {
        self.as_char() as u8
    }

    pub fn other(self) -> Self {
        match self {
            Delimiter::Semicolon => Delimiter::Comma,
            Delimiter::Comma => Delimiter::Semicolon,
        }
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Raw bytes of the first line, without the line terminator.
pub fn first_line(content: &[u8]) -> &[u8] {
    let end = content
        .iter()
        .position(|b| *b == b'\n' || *b == b'\r')
        .unwrap_or(content.len());
    &content[..end]
}

/// `;` unless the first line holds strictly more commas than semicolons.
/// Empty content falls back to `;`.
pub fn sniff_delimiter(content: &[u8]) -> Delimiter {
    let head = first_line(content);
    let commas = head.iter().filter(|b| **b == b',').count();
    let semicolons = head.iter().filter(|b| **b == b';').count();

    if commas > semicolons {
        Delimiter::Comma
    } else {
        Delimiter::Semicolon
    }
}

/// Discover the column schema from the first line of `content`.
///
/// Names are split on `delimiter`, trimmed and unquoted. Fails with a reason
/// when the line is not UTF-8 or carries no usable column name.
pub fn parse_header(content: &[u8], delimiter: Delimiter) -> Result<Vec<String>, String> {
    let head = std::str::from_utf8(first_line(content))
        .map_err(|e| format!("first line is not valid UTF-8: {e}"))?;
    let head = head.trim_start_matches('\u{feff}');

    let columns: Vec<String> = head
        .split(delimiter.as_char())
        .map(|c| unquote(c.trim()).to_string())
        .collect();

    if columns.iter().all(|c| c.is_empty()) {
        return Err("no column names found".to_string());
    }

    Ok(columns)
}

fn unquote(s: &str) -> &str {
    if s.len() >= 2 && s.starts_with('"') && s.ends_with('"') {
        &s[1..s.len() - 1]
    } else {
        s
    }
}

/// Align `record` to the discovered schema: every missing column is added
/// with an empty value. Extra keys are kept; the serializer ignores them.
pub fn reconcile(discovered: &[String], mut record: Record) -> Record {
    for col in discovered {
        record.set_default(col, "");
    }
    record
}
