//! Run log error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by log sinks.
#[derive(Debug, Error)]
pub enum LogError {
    /// Failed to open the log file.
    #[error("failed to open log file '{path}': {source}")]
    Open {
        /// Path of the log file.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Writing or flushing a line failed.
    #[error("log write failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for log operations.
pub type LogResult<T> = Result<T, LogError>;
