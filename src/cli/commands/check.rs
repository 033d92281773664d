use crate::config::Config;
use crate::errors::AppResult;
use crate::remote::{LocalStore, RemoteStore};
use crate::ui::messages::success;

/// Verify that the store, the directory and the table are reachable.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut store = LocalStore::open(cfg.store_root_path())?;
    let root = store.current_dir();

    store.change_directory(&cfg.remote_dir)?;
    let here = store.current_dir();

    let (exists, size) = store.probe_size(&cfg.table_name)?;
    let state = match (exists, size) {
        (false, _) => "(not found)".to_string(),
        (true, 0) => "(empty)".to_string(),
        (true, n) => format!("(found, {n} bytes)"),
    };

    success(format!(
        "OK. Root: {root} → Dir: {here} → File: {} {state}",
        cfg.table_name
    ));
    Ok(())
}
