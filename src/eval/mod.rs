//! # Evaluation Harnesses
//!
//! Repeats trials across the configured sizes, timing strategy invocations
//! and aggregating operation counters, then reduces every tracked metric to
//! its per-size mean and population standard deviation.
//!
//! Both harnesses follow the same shape: the trial loop is outermost, every
//! trial generates a fresh clock-seeded sequence per size, the measured call
//! is bracketed by a monotonic [`std::time::Instant`], and every detail and
//! summary line goes through the supplied [`crate::runlog::LogSink`]. There
//! are no retries: a sink failure ends the run.

mod accumulator;
mod error;
mod search_eval;
mod sort_eval;

pub use accumulator::{SearchSeries, SortSeries};
pub use error::{EvalError, EvalResult};
pub use search_eval::{SearchEvaluator, SearchSummary};
pub use sort_eval::{SortEvaluator, SortSummary};

use crate::stats;
use serde::Serialize;

/// Mean and population standard deviation of one tracked metric.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricSummary {
    /// Arithmetic mean of the samples.
    pub mean: f64,
    /// Population standard deviation of the samples.
    pub std_dev: f64,
}

impl MetricSummary {
    /// Reduce `samples` for the metric named `metric`.
    fn from_samples(metric: &str, samples: &[f64]) -> EvalResult<Self> {
        let mean = stats::mean(samples).ok_or_else(|| EvalError::EmptySeries {
            metric: metric.to_string(),
        })?;
        let std_dev = stats::std_dev(samples, mean).ok_or_else(|| EvalError::EmptySeries {
            metric: metric.to_string(),
        })?;
        Ok(Self { mean, std_dev })
    }
}

/// First elements of a sequence, for trial detail lines.
fn preview(sequence: &[u32]) -> String {
    let head = &sequence[..sequence.len().min(10)];
    format!("{head:?}")
}
