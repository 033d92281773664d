//! Safe single-row append to a shared remote table.
//!
//! Probe → (Create | Fetch → Sniff → Reconcile → Backup → Append).
//! Nothing but the best-effort backup is written before the final transmit,
//! so every abort leaves the remote table untouched.

use crate::core::backup::BackupLogic;
use crate::core::schema::{Delimiter, parse_header, reconcile, sniff_delimiter};
use crate::core::serialize::{header_line, serialize};
use crate::errors::{AppError, AppResult};
use crate::models::record::Record;
use crate::remote::RemoteStore;
use crate::utils::date;
use chrono::NaiveDateTime;
use tracing::{debug, info, warn};

/// What the engine did to the remote table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppendOutcome {
    /// The table was absent or empty and has been written as header + row.
    Created {
        columns: Vec<String>,
        delimiter: Delimiter,
    },
    /// One row was appended. `backup` names the copy taken beforehand, if any.
    Appended {
        columns: Vec<String>,
        delimiter: Delimiter,
        backup: Option<String>,
    },
}

pub struct AppendLogic;

impl AppendLogic {
    /// Append `record` to `filename` in the store's current directory.
    ///
    /// `preferred` sets the column order when the table has to be created;
    /// `None` keeps the record's own key order.
    pub fn append_row_safe(
        store: &mut dyn RemoteStore,
        filename: &str,
        record: Record,
        preferred: Option<&[String]>,
    ) -> AppResult<AppendOutcome> {
        Self::append_row_safe_at(store, filename, record, preferred, &date::now())
    }

    /// Same as [`append_row_safe`](Self::append_row_safe) with an explicit clock for the backup stamp.
    pub fn append_row_safe_at(
        store: &mut dyn RemoteStore,
        filename: &str,
        record: Record,
        preferred: Option<&[String]>,
        now: &NaiveDateTime,
    ) -> AppResult<AppendOutcome> {
        //
        // 1. Probe
        //
        let (exists, size) = store.probe_size(filename)?;
        debug!(file = filename, exists, size, "probe");

        //
        // 2. Absent or empty → create header + first row
        //
        if !exists || size == 0 {
            let columns: Vec<String> = match preferred {
                Some(cols) if !cols.is_empty() => cols.to_vec(),
                _ => record.keys(),
            };
            let delimiter = Delimiter::Semicolon;

            let mut payload = header_line(&columns, delimiter)?;
            payload.push_str(&serialize(&columns, &record, delimiter)?);
            store.upload(filename, payload.as_bytes())?;

            info!(file = filename, columns = columns.len(), "table created");
            return Ok(AppendOutcome::Created { columns, delimiter });
        }

        //
        // 3. Fetch: an existing table that cannot be read is never overwritten
        //
        let content = match store.download(filename)? {
            Some(bytes) if !bytes.is_empty() => bytes,
            _ => {
                return Err(AppError::RemoteUnreadable {
                    dir: store.current_dir(),
                    file: filename.to_string(),
                });
            }
        };

        //
        // 4. Sniff delimiter and discovered schema
        //
        let delimiter = sniff_delimiter(&content);
        let columns = parse_header(&content, delimiter).map_err(|reason| AppError::HeaderUnreadable {
            dir: store.current_dir(),
            file: filename.to_string(),
            reason,
        })?;
        debug!(file = filename, %delimiter, columns = columns.len(), "schema discovered");

        //
        // 5. Reconcile the record with the discovered header
        //
        let record = reconcile(&columns, record);

        //
        // 6. Backup (best effort: a failure is logged and discarded)
        //
        let backup = match BackupLogic::backup(store, filename, &content, now) {
            Ok(name) => Some(name),
            Err(e) => {
                warn!(file = filename, error = %e, "backup failed, appending anyway");
                None
            }
        };

        //
        // 7. Append exactly one line
        //
        let mut line = serialize(&columns, &record, delimiter)?;
        if !content.ends_with(b"\n") && !content.ends_with(b"\r") {
            line.insert(0, '\n');
        }
        store.append(filename, line.as_bytes())?;

        info!(file = filename, backup = backup.as_deref().unwrap_or("-"), "row appended");
        Ok(AppendOutcome::Appended {
            columns,
            delimiter,
            backup,
        })
    }
}
