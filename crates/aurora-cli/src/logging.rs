//! Logging setup with file rotation.
//!
//! The terminal belongs to the UI, so everything goes to
//! `<data_dir>/logs/aurora.<date>.log`.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::types::LogLevel;

pub const LOG_DIR_NAME: &str = "logs";
const LOG_FILE_PREFIX: &str = "aurora";
const MAX_LOG_FILES: usize = 7;

/// Install the global subscriber. `RUST_LOG` overrides `level`.
pub fn init(data_dir: &Path, level: LogLevel) -> Result<PathBuf> {
    let logs_dir = data_dir.join(LOG_DIR_NAME);
    std::fs::create_dir_all(&logs_dir)
        .with_context(|| format!("Failed to create {}", logs_dir.display()))?;

    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .max_log_files(MAX_LOG_FILES)
        .filename_prefix(LOG_FILE_PREFIX)
        .filename_suffix("log")
        .build(&logs_dir)
        .context("Failed to open log file")?;

    let file_layer = fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_ansi(false)
        .with_writer(file_appender);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init()
        .context("Failed to install log subscriber")?;

    Ok(logs_dir)
}

fn filter_directive(level: LogLevel) -> String {
    format!("warn,aurora={level},aurora_cli={level},aurora_store={level},aurora_types={level}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_scopes_level_to_own_crates() {
        let directive = filter_directive(LogLevel::Debug);
        assert_eq!(
            directive,
            "warn,aurora=debug,aurora_cli=debug,aurora_store=debug,aurora_types=debug"
        );
        assert!(EnvFilter::try_new(directive).is_ok());
    }
}
