//! Configuration type definitions.

use crate::strategy::{SearchStrategy, SortStrategy};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration for an evaluation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchConfig {
    /// Sequence sizes to evaluate, in the order they are visited per trial.
    pub sizes: Vec<usize>,

    /// Number of trials per strategy and size.
    pub trials: usize,

    /// Sorting strategies under test.
    pub sort_strategies: Vec<SortStrategy>,

    /// Search strategies under test.
    pub search_strategies: Vec<SearchStrategy>,

    /// Path of the append-only run log.
    pub log_path: PathBuf,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            sizes: vec![50, 500, 5000, 10_000, 11_000, 12_000],
            trials: 2,
            sort_strategies: vec![SortStrategy::Selection, SortStrategy::Partition],
            search_strategies: vec![SearchStrategy::Linear, SearchStrategy::Binary],
            log_path: PathBuf::from("sort_search_eval.log"),
        }
    }
}
