//! Configuration error types.

use thiserror::Error;

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A field holds a value the bench cannot run with.
    #[error("invalid value for field '{field}': {message}")]
    InvalidValue {
        /// Name of the field.
        field: String,
        /// Error message.
        message: String,
    },
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
