use std::io;
use std::path::PathBuf;
use thiserror::Error;

// Bring in specific errors from our own modules we want to wrap
use crate::config::ConfigError;
use crate::wrap::LayoutError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Layout error: {0}")]
    Layout(#[from] LayoutError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Serialization error (JSON): {0}")]
    Json(#[from] serde_json::Error),

    #[error("Cannot open log file {path}: {source}")]
    LogFile { path: PathBuf, source: io::Error },
}

pub type AppResult<T> = Result<T, AppError>;
