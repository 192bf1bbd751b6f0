//! Evaluation error types.

use crate::runlog::LogError;
use thiserror::Error;

/// Errors raised while running an evaluation.
#[derive(Debug, Error)]
pub enum EvalError {
    /// The run log rejected a line.
    #[error(transparent)]
    Log(#[from] LogError),

    /// A metric series had no samples to summarise. Cannot occur when the
    /// configuration was validated (trials >= 1).
    #[error("no samples recorded for metric '{metric}'")]
    EmptySeries {
        /// Name of the metric.
        metric: String,
    },
}

/// Result type for evaluation operations.
pub type EvalResult<T> = Result<T, EvalError>;
