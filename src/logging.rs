//! File-backed logger. Stdout belongs to the terminal UI, so records go to a log file.

use std::fs::{self, OpenOptions};

use anyhow::{Context, Result};
use env_logger::{Builder, Target};

use crate::config::Config;

pub fn init(cfg: &Config) -> Result<()> {
    let path = cfg.log_file();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory '{}'", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file '{}'", path.display()))?;

    Builder::new()
        .parse_filters(&cfg.log_filter())
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()
        .context("Logger already initialised")?;

    log::debug!("logging to {}", path.display());
    Ok(())
}
