use crate::errors::AppResult;
use crate::remote::RemoteStore;
use crate::utils::date::backup_stamp;
use chrono::NaiveDateTime;

/// Name of the backup copy of `filename` taken at `at`: `<name>.bak_YYYYmmddHHMMSS`.
pub fn backup_name(filename: &str, at: &NaiveDateTime) -> String {
    format!("{filename}.bak_{}", backup_stamp(at))
}

pub struct BackupLogic;

impl BackupLogic {
    /// Upload `content` as a timestamped copy of `filename`, returning the copy's name.
    ///
    /// The caller already holds the current content, so no second download is made.
    pub fn backup(
        store: &mut dyn RemoteStore,
        filename: &str,
        content: &[u8],
        at: &NaiveDateTime,
    ) -> AppResult<String> {
        let name = backup_name(filename, at);
        store.upload(&name, content)?;
        Ok(name)
    }
}
