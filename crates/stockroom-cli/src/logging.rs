// Rust guideline compliant 2026-10-15

//! Tracing setup for the Stockroom CLI.
//!
//! Logs go to stderr so they never mix with shell output on stdout. With a
//! log file, events are written as JSON through a non-blocking appender.

use std::fs::OpenOptions;
use std::path::Path;
use thiserror::Error;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt;

/// Logging setup errors.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// The log file could not be opened.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// Invalid log level provided.
    #[error("Invalid log level: {0}")]
    InvalidLogLevel(String),
}

/// Installs the global tracing subscriber.
///
/// # Arguments
///
/// * `level` - Maximum level (error, warn, info, debug, trace)
/// * `log_file` - Optional file to append JSON events to
///
/// # Returns
///
/// The appender guard when logging to a file; it must be kept alive until
/// the program exits so buffered events are flushed.
///
/// # Errors
///
/// Returns an error if the level is unknown or the file cannot be opened.
pub fn init_tracing(
    level: &str,
    log_file: Option<&Path>,
) -> Result<Option<WorkerGuard>, LoggingError> {
    let level = parse_log_level(level)?;

    if let Some(path) = log_file {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        let (writer, guard) = tracing_appender::non_blocking(file);
        let subscriber = fmt()
            .with_max_level(level)
            .with_target(false)
            .json()
            .with_writer(writer)
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
        return Ok(Some(guard));
    }

    let subscriber = fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
    Ok(None)
}

/// Parses a log level name, ignoring case.
///
/// # Errors
///
/// Returns an error for unknown names.
pub fn parse_log_level(level: &str) -> Result<Level, LoggingError> {
    match level.to_lowercase().as_str() {
        "error" => Ok(Level::ERROR),
        "warn" => Ok(Level::WARN),
        "info" => Ok(Level::INFO),
        "debug" => Ok(Level::DEBUG),
        "trace" => Ok(Level::TRACE),
        other => Err(LoggingError::InvalidLogLevel(other.to_string())),
    }
}
