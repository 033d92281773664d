use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Local mount point of the shared store (`~` is expanded).
    #[serde(default = "default_store_root")]
    pub store_root: String,
    /// Directory of the production table inside the store.
    #[serde(default = "default_remote_dir")]
    pub remote_dir: String,
    #[serde(default = "default_table_name")]
    pub table_name: String,
    #[serde(default = "default_operators")]
    pub operators: Vec<String>,
    #[serde(default = "default_machines")]
    pub machines: Vec<String>,
    #[serde(default = "default_phases")]
    pub phases: Vec<String>,
    #[serde(default = "default_machine_folders")]
    pub machine_folders: Vec<String>,
    /// Diagnostic log level: error, warn, info, debug, trace.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn default_store_root() -> String {
    Config::config_dir()
        .join("store")
        .to_string_lossy()
        .to_string()
}
fn default_remote_dir() -> String {
    "/PRD".to_string()
}
fn default_table_name() -> String {
    "production_data.csv".to_string()
}
fn default_operators() -> Vec<String> {
    strings(&["ALESSIO", "ALESSANDRO", "LUCA", "MICHELE", "VALERIO"])
}
fn default_machines() -> Vec<String> {
    strings(&[
        "DMG MORI",
        "TAKISAWA",
        "QUASER",
        "MAZAK VCN",
        "MAZAK VRX",
        "MAZAK HCN",
        "HYUNDAI",
        "HURCO",
    ])
}
fn default_phases() -> Vec<String> {
    strings(&[
        "Phase 1",
        "Phase 2",
        "Phase 3",
        "Phase 4",
        "Phase 5",
        "Phase 6",
        "Setup",
        "Programming",
    ])
}
fn default_machine_folders() -> Vec<String> {
    strings(&["WASS", "EL.EN", "DUMAREY", "VARIE"])
}
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_root: default_store_root(),
            remote_dir: default_remote_dir(),
            table_name: default_table_name(),
            operators: default_operators(),
            machines: default_machines(),
            phases: default_phases(),
            machine_folders: default_machine_folders(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".prdlog")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("prdlog.conf")
    }

    /// Store root with `~` expanded.
    pub fn store_root_path(&self) -> PathBuf {
        expand_tilde(&self.store_root)
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;
        Ok(serde_yaml::from_str(&content)?)
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let yaml = serde_yaml::to_string(self)?;
        let mut file = fs::File::create(path)?;
        file.write_all(yaml.as_bytes())?;
        Ok(())
    }

    /// Initialize the configuration file and the store layout.
    ///
    /// With `is_test` the config file is left untouched.
    pub fn init_all(&self, is_test: bool) -> AppResult<()> {
        if !is_test {
            self.save_to(&Self::config_file())?;
            println!("✅ Config file: {}", Self::config_file().display());
        }

        let table_dir = self
            .store_root_path()
            .join(self.remote_dir.trim_start_matches('/'));
        fs::create_dir_all(&table_dir)?;
        println!("✅ Store dir:   {}", table_dir.display());

        Ok(())
    }
}
