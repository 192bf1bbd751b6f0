//! # Configuration System
//!
//! Typed configuration for the evaluation bench. The configuration is fixed
//! at startup (no command-line flags, no configuration file) but is validated
//! before any harness runs so that invalid trial counts or sequence sizes are
//! rejected up front instead of faulting mid-run.

mod error;
mod types;
mod validation;

pub use error::{ConfigError, ConfigResult};
pub use types::BenchConfig;
pub use validation::validate;
