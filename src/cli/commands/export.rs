use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        filter,
        force,
    } = cmd
    {
        let filter = filter.to_filter()?;
        if let Some(view) = super::load_view(cfg)? {
            ExportLogic::export(&view, &filter, *format, file, *force)?;
        }
    }
    Ok(())
}
