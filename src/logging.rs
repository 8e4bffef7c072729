//! Tracing setup.
//!
//! Logs are written to the configured file without ANSI colours, filtered by
//! the configured `EnvFilter` directive.

use std::fs::{self, File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;

fn open_log_file(path: &Path) -> std::io::Result<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Install the global subscriber. An invalid filter falls back to `info`.
pub fn init_logging(config: &AppConfig) -> color_eyre::Result<()> {
    let file = open_log_file(&config.log_file)?;
    let filter =
        EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| color_eyre::eyre::eyre!("failed to install tracing subscriber: {}", e))?;

    tracing::info!(log_file = %config.log_file.display(), "Logging initialised");
    Ok(())
}
