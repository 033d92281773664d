use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;

/// Handle the `init` command
///
/// This initializes:
///  - the configuration file (skipped in test mode)
///  - the store root and the table directory
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    println!("⚙️  Initializing prdlog…");
    cfg.init_all(cli.test)?;
    println!("📄 Table       : {}/{}", cfg.remote_dir, cfg.table_name);
    println!("🎉 prdlog initialization completed!");
    Ok(())
}
