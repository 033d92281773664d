use crate::core::read::read_table;
use crate::models::columns::CYCLE_NUMBER;
use crate::remote::RemoteStore;
use tracing::debug;

pub struct SequenceLogic;

impl SequenceLogic {
    /// Next cycle number: highest numeric `cycle-number` + 1.
    ///
    /// Every failure (transport, missing table, unreadable content, missing
    /// column, no numeric value) ends up as 1. Never returns less than 1.
    pub fn next_id(store: &mut dyn RemoteStore, filename: &str) -> u64 {
        let content = match store.download(filename) {
            Ok(Some(bytes)) if !bytes.is_empty() => bytes,
            Ok(_) => return 1,
            Err(e) => {
                debug!(error = %e, "next_id: download failed, defaulting to 1");
                return 1;
            }
        };

        let ds = match read_table(&content) {
            Ok(ds) => ds,
            Err(e) => {
                debug!(error = %e, "next_id: table unreadable, defaulting to 1");
                return 1;
            }
        };

        let Some(ids) = ds.column(CYCLE_NUMBER) else {
            return 1;
        };

        Self::next_from_values(&ids)
    }

    /// `max + 1` over the values that parse as numbers, floored at 1.
    pub fn next_from_values(values: &[&str]) -> u64 {
        let max = values
            .iter()
            .filter_map(|v| v.trim().parse::<f64>().ok())
            .filter(|v| v.is_finite())
            .map(|v| v.trunc() as i64)
            .max();

        match max {
            Some(m) if m >= 1 => (m as u64).saturating_add(1),
            _ => 1,
        }
    }
}
