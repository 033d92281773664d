//! Unified application error type.
//! All modules (remote, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Table parse error: {0}")]
    Table(String),

    // ---------------------------
    // Remote store
    // ---------------------------
    #[error("Remote transport error: {0}")]
    Transport(String),

    /// The table exists (positive size) but its content could not be fetched.
    #[error(
        "Remote file {dir}/{file} exists but is not readable (empty download). Append aborted to protect existing data."
    )]
    RemoteUnreadable { dir: String, file: String },

    /// The first line of an existing table cannot be decoded into columns.
    #[error("Header of {dir}/{file} is not readable ({reason}). Append aborted to avoid corruption.")]
    HeaderUnreadable {
        dir: String,
        file: String,
        reason: String,
    },

    // ---------------------------
    // Input validation
    // ---------------------------
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<String>),

    #[error("Invalid value '{value}' for {field}. Allowed: {allowed}")]
    InvalidChoice {
        field: String,
        value: String,
        allowed: String,
    },

    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration parse error: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
