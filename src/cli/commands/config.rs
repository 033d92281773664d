use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{error, success, warning};
use std::path::Path;
use std::process::Command;

/// $EDITOR, then $VISUAL, then the platform default.
fn default_editor() -> String {
    std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        })
}

fn open_in(editor: &str, path: &Path) -> bool {
    matches!(Command::new(editor).arg(path).status(), Ok(s) if s.success())
}

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    else {
        return Ok(());
    };

    let path = Config::config_file();

    if *print_config {
        println!("📄 Current configuration ({}):\n", path.display());
        println!("{}", serde_yaml::to_string(cfg)?);
    }

    if *edit_config {
        // the editor needs a file to open
        if !path.exists() {
            cfg.save_to(&path)?;
        }

        let fallback = default_editor();
        let chosen = editor.clone().unwrap_or_else(|| fallback.clone());

        if open_in(&chosen, &path) {
            success(format!("Configuration file edited using '{chosen}'"));
        } else if chosen != fallback && open_in(&fallback, &path) {
            warning(format!("Editor '{chosen}' not available, used '{fallback}'"));
            success(format!("Configuration file edited using '{fallback}'"));
        } else {
            error(format!("Failed to edit {} (editor: '{chosen}')", path.display()));
        }
    }

    Ok(())
}
