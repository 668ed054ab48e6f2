//! Log file setup
//!
//! stdout belongs to the terminal UI, so records go to
//! `<config_dir>/tracker-hub/tracker-hub.log`. `log` records from the
//! library crates are bridged into the same subscriber.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::backend::AppConfig;

const LOG_FILE: &str = "tracker-hub.log";

/// Installs the global subscriber and returns the log file path.
pub fn init_logging(config: &AppConfig) -> Result<PathBuf> {
    let dir = dirs::config_dir()
        .context("no config directory for this platform")?
        .join("tracker-hub");
    fs::create_dir_all(&dir).with_context(|| format!("failed to create {}", dir.display()))?;
    let path = dir.join(LOG_FILE);
    let file = open_log_file(&path)?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false),
        )
        .with(filter_for(&config.log_level))
        .try_init()
        .context("failed to install log subscriber")?;

    Ok(path)
}

fn open_log_file(path: &Path) -> Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open {}", path.display()))
}

/// Filter from the configured level; `info` when it does not parse.
fn filter_for(level: &str) -> EnvFilter {
    EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"))
}
