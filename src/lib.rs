//! prdlog library root.
//! Exposes the CLI parser, the high-level run() function and the modules
//! behind it: safe remote append, time normalization, read view and export.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod remote;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use tracing::Level;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli, cfg),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Add { .. } => cli::commands::add::handle(&cli.command, cfg),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
        Commands::NextId => cli::commands::next_id::handle(cfg),
        Commands::Check => cli::commands::check::handle(cfg),
    }
}

/// Diagnostic level: the configured one, raised by each `-v`.
fn log_level(configured: &str, verbose: u8) -> Level {
    let base = configured.parse::<Level>().unwrap_or(Level::WARN);
    let raised = match verbose {
        0 => base,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    // Level orders TRACE as the greatest
    base.max(raised)
}

fn init_tracing(level: Level) {
    // a second init (e.g. in tests) is harmless
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load the config once
    let mut cfg = Config::load()?;

    // 3️⃣ --root overrides the configured store
    if let Some(root) = &cli.root {
        cfg.store_root = root.clone();
    }

    // 4️⃣ diagnostics, then dispatch
    init_tracing(log_level(&cfg.log_level, cli.verbose));
    dispatch(&cli, &cfg)
}
