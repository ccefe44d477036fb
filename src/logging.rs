//! Log output setup.
//!
//! The terminal belongs to the UI, so logs only ever go to a file.

use std::fs::OpenOptions;
use std::path::Path;

use anyhow::Context;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::cli::LogLevel;

/// Installs the global subscriber writing to `log_file` in append mode.
///
/// Without a file nothing is installed and every event is discarded.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or a global subscriber is
/// already set.
pub fn init(log_file: Option<&Path>, level: LogLevel) -> anyhow::Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    let level = tracing::Level::from(level);
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(file)
        .with_ansi(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("failed to install log subscriber")?;
    Ok(())
}
