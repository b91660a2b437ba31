use std::fs;
use tracing::warn;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::LoggingConfig;

/// Build the daily-rolling appender for the configured log directory
pub fn build_file_appender(directory: &str, file_prefix: &str) -> Result<RollingFileAppender, String> {
    fs::create_dir_all(directory)
        .map_err(|e| format!("Failed to create log directory '{}': {}", directory, e))?;

    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(file_prefix)
        .build(directory)
        .map_err(|e| format!("Failed to open log file in '{}': {}", directory, e))
}

/// Initializes console logging, plus a daily-rolling JSON file when a log
/// directory is configured. If the file cannot be opened, logging stays
/// console-only and a warning is emitted. Hold the returned guard until exit
/// so buffered file output is flushed.
pub fn init_logging(config: &LoggingConfig) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.default_directive));

    // Console output goes to stderr so stdout stays clean for JSON results
    let console_layer = fmt::layer().with_writer(std::io::stderr);

    let mut file_error = None;
    let (file_layer, guard) = match config
        .directory
        .as_deref()
        .map(|directory| build_file_appender(directory, &config.file_prefix))
    {
        Some(Ok(file_appender)) => {
            let (non_blocking_writer, guard) = tracing_appender::non_blocking(file_appender);
            let layer = fmt::layer().json().with_writer(non_blocking_writer);
            (Some(layer), Some(guard))
        }
        Some(Err(e)) => {
            file_error = Some(e);
            (None, None)
        }
        None => (None, None),
    };

    // try_init so repeated initialization (tests, embedding) is harmless
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(console_layer)
        .try_init();

    if let Some(e) = file_error {
        warn!("{}; logging to console only", e);
    }

    guard
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_build_file_appender_creates_directory() {
        let temp_dir = tempdir().unwrap();
        let directory = temp_dir.path().join("logs");

        let result = build_file_appender(directory.to_str().unwrap(), "metadata_import.log");

        assert!(result.is_ok());
        assert!(directory.is_dir());
    }

    #[test]
    fn test_build_file_appender_reports_unusable_directory() {
        let temp_dir = tempdir().unwrap();
        // A regular file where the log directory should be
        let blocker = temp_dir.path().join("not_a_dir");
        fs::write(&blocker, b"x").unwrap();

        let result = build_file_appender(blocker.to_str().unwrap(), "metadata_import.log");

        assert!(result.is_err());
    }

    #[test]
    fn test_init_logging_survives_unusable_directory() {
        let temp_dir = tempdir().unwrap();
        let blocker = temp_dir.path().join("not_a_dir");
        fs::write(&blocker, b"x").unwrap();

        let config = LoggingConfig {
            directory: Some(blocker.to_str().unwrap().to_string()),
            ..LoggingConfig::default()
        };

        assert!(init_logging(&config).is_none());
    }
}
