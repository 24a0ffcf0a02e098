use crate::config::AppConfig;
use crate::errors::{AppError, AppResult};
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

const DEFAULT_DIRECTIVE: &str = "typesphere=info";

/// Install a subscriber appending to `path`.
///
/// The terminal UI owns stdout and stderr, so logs only go to a file. With no
/// file configured nothing is installed and the `tracing` macros are no-ops.
pub fn init(path: Option<&Path>) -> AppResult<bool> {
    let Some(path) = path else {
        return Ok(false);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| AppError::LogFile {
            path: path.to_path_buf(),
            source,
        })?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

    // A subscriber may already be installed (tests, embedding); keep it.
    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .is_ok();

    Ok(installed)
}

/// Startup summary of the resolved configuration.
pub fn log_config(config: &AppConfig) {
    tracing::info!(
        words = config.paragraph.split_whitespace().count(),
        font_size = config.font_size,
        text_width_ratio = config.text_width_ratio,
        orbit_radius = config.orbit_radius,
        orbit_speed = config.orbit_speed,
        fps = config.fps,
        log_file = ?config.log_file,
        "configuration loaded"
    );
    tracing::debug!(?config, "full configuration");
}
