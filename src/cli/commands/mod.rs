pub mod add;
pub mod check;
pub mod config;
pub mod export;
pub mod init;
pub mod list;
pub mod next_id;

use crate::cli::parser::FilterArgs;
use crate::config::Config;
use crate::core::read::read_table;
use crate::core::view::{Filter, ProductionView};
use crate::errors::{AppError, AppResult};
use crate::remote::{LocalStore, RemoteStore};
use crate::utils::date::parse_date;

/// Connect to the configured store and enter the table directory.
pub(crate) fn connect(cfg: &Config) -> AppResult<LocalStore> {
    let mut store = LocalStore::open(cfg.store_root_path())?;
    store.change_directory(&cfg.remote_dir)?;
    Ok(store)
}

/// Download and normalize the table. `None` when there is nothing to show.
pub(crate) fn load_view(cfg: &Config) -> AppResult<Option<ProductionView>> {
    let mut store = connect(cfg)?;
    match store.download(&cfg.table_name)? {
        Some(bytes) if !bytes.is_empty() => {
            let ds = read_table(&bytes)?;
            Ok(Some(ProductionView::from_dataset(ds)))
        }
        _ => {
            crate::ui::messages::info(format!(
                "No data in {}/{}.",
                store.current_dir(),
                cfg.table_name
            ));
            Ok(None)
        }
    }
}

impl FilterArgs {
    pub fn to_filter(&self) -> AppResult<Filter> {
        let non_empty = |s: &Option<String>| s.as_ref().filter(|v| !v.trim().is_empty()).cloned();

        let date = match &self.date {
            Some(d) => Some(parse_date(d).ok_or_else(|| AppError::InvalidDate(d.clone()))?),
            None => None,
        };

        Ok(Filter {
            operator: non_empty(&self.operator),
            material_code: non_empty(&self.code),
            description: non_empty(&self.description),
            machine_folder: non_empty(&self.folder),
            date,
        })
    }
}
