//! CLI argument parsing using clap.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Maximum level written to the log file.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => Self::ERROR,
            LogLevel::Warn => Self::WARN,
            LogLevel::Info => Self::INFO,
            LogLevel::Debug => Self::DEBUG,
            LogLevel::Trace => Self::TRACE,
        }
    }
}

/// `Taskpad` - terminal task-list manager
///
/// Tasks and the theme choice are stored in the data directory and
/// reloaded on the next start.
#[derive(Parser, Debug)]
#[command(name = "taskpad", version, about, long_about = None)]
pub struct Args {
    /// Directory holding the persisted tasks and theme (default: ./.taskpad)
    #[arg(long, value_name = "PATH")]
    pub data_dir: Option<PathBuf>,

    /// Append logs to this file (no logging without it)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Log level; `RUST_LOG` overrides it when set
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,
}
