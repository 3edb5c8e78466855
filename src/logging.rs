//! File logging through `tracing`.
//!
//! The TUI owns the terminal, so log lines always go to a file: either
//! `[logging] file` from the config or `blogdash.log` in the local data dir.

use anyhow::{Context, Result, anyhow};
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::Level;

use crate::config::LoggingConfig;

/// Parse a level name, falling back to INFO for anything unrecognized
pub fn parse_level(name: &str) -> Level {
    if cfg!(feature = "dev-logging") {
        return Level::TRACE;
    }

    name.trim().parse::<Level>().unwrap_or(Level::INFO)
}

/// Default log location when the config doesn't name one
pub fn default_log_path() -> Result<PathBuf> {
    Ok(dirs::data_local_dir()
        .context("Could not determine local data directory")?
        .join("blogdash")
        .join("blogdash.log"))
}

/// Install the global subscriber. Returns the file being written.
pub fn init(config: &LoggingConfig) -> Result<PathBuf> {
    let path = match &config.file {
        Some(path) => path.clone(),
        None => default_log_path()?,
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .with_max_level(parse_level(&config.level))
        .try_init()
        .map_err(|e| anyhow!("Failed to install log subscriber: {e}"))?;

    Ok(path)
}
