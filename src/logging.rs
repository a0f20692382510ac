//! File-backed logging.
//!
//! The game owns the terminal's alternate screen, so log records can never go
//! to stderr. They are only written when a log file is configured.

use std::fs::{File, OpenOptions};
use std::path::Path;

use anyhow::{Context, Result};

use crate::config::Config;

/// Open (creating or appending) the log file.
pub fn open_log_file(path: &Path) -> Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open log file {}", path.display()))
}

/// Install the global logger if `config.log_file` is set.
///
/// Returns `true` when a logger was installed.
pub fn init(config: &Config) -> Result<bool> {
    let Some(path) = config.log_file.as_deref() else {
        return Ok(false);
    };
    let file = open_log_file(path)?;

    env_logger::Builder::new()
        .parse_filters(&config.log_level)
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()
        .context("install logger")?;
    Ok(true)
}
