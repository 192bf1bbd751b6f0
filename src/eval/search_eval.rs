//! Search evaluation harness.

use super::accumulator::SearchSeries;
use super::{EvalResult, MetricSummary};
use crate::config::BenchConfig;
use crate::generator;
use crate::runlog::LogSink;
use crate::strategy::SearchStrategy;
use serde::Serialize;
use std::collections::BTreeMap;
use std::time::Instant;
use tracing::{debug, info};

/// Per-size summary of a search evaluation.
#[derive(Debug, Clone, Serialize)]
pub struct SearchSummary {
    /// Sequence size.
    pub size: usize,
    /// Elapsed seconds against the unsorted sequence.
    pub unsorted_time: MetricSummary,
    /// Elapsed seconds against the sorted sequence.
    pub sorted_time: MetricSummary,
    /// Found positions per trial, unsorted sequence (`-1` = not found).
    pub unsorted_positions: Vec<i64>,
    /// Found positions per trial, sorted sequence (`-1` = not found).
    pub sorted_positions: Vec<i64>,
}

/// Runs search trials against unsorted and sorted variants of the same
/// sequence.
///
/// The target is taken from the middle of the unsorted sequence, so it is
/// always present. The strategy runs against the unsorted vector first and
/// the sorted counterpart second. That deliberately includes binary search
/// on unsorted input, whose silently wrong position is recorded as measured.
pub struct SearchEvaluator<'a> {
    config: &'a BenchConfig,
    log: &'a mut dyn LogSink,
}

impl<'a> SearchEvaluator<'a> {
    /// Create an evaluator writing to `log`.
    pub fn new(config: &'a BenchConfig, log: &'a mut dyn LogSink) -> Self {
        Self { config, log }
    }

    /// Run every configured trial for `strategy`, logging trial detail and
    /// per-size summaries.
    ///
    /// # Errors
    ///
    /// Propagates sink failures; summarising fails only if a size ends up
    /// with an empty series, which a validated configuration rules out.
    pub fn run(&mut self, strategy: SearchStrategy) -> EvalResult<Vec<SearchSummary>> {
        info!(strategy = strategy.name(), "starting search evaluation");
        self.log
            .record(&format!("evaluating search strategy: {strategy}"))?;

        let mut series: BTreeMap<usize, SearchSeries> = BTreeMap::new();

        for trial in 0..self.config.trials {
            self.log
                .record(&format!("trial {} of {}", trial + 1, self.config.trials))?;

            for &size in &self.config.sizes {
                let unsorted = generator::generate(generator::clock_seed(), size);
                // Middle element: guaranteed present in both variants.
                let target = unsorted[size / 2];
                let mut sorted = unsorted.clone();
                sorted.sort_unstable();

                self.log.record(&format!("search target: {target}"))?;

                let (unsorted_secs, unsorted_pos) = timed_search(strategy, &unsorted, target);
                self.log.record(&format!(
                    "search in unsorted vector of size {size}: elapsed: {unsorted_secs:.10}, \
                     position: {unsorted_pos}"
                ))?;

                let (sorted_secs, sorted_pos) = timed_search(strategy, &sorted, target);
                self.log.record(&format!(
                    "search in sorted vector of size {size}: elapsed: {sorted_secs:.10}, \
                     position: {sorted_pos}"
                ))?;

                debug!(size, target, unsorted_pos, sorted_pos, "search trial complete");
                series
                    .entry(size)
                    .or_default()
                    .push(unsorted_secs, unsorted_pos, sorted_secs, sorted_pos);
            }
        }

        let mut summaries = Vec::with_capacity(series.len());
        for (&size, series) in &series {
            let summary = SearchSummary {
                size,
                unsorted_time: MetricSummary::from_samples("unsorted time", &series.unsorted_times)?,
                sorted_time: MetricSummary::from_samples("sorted time", &series.sorted_times)?,
                unsorted_positions: series.unsorted_positions.clone(),
                sorted_positions: series.sorted_positions.clone(),
            };
            self.log.record(&format!(
                "search strategy: {strategy}, size: {size}, \
                 mean unsorted time: {:.10}, std dev unsorted time: {:.10}, \
                 mean sorted time: {:.10}, std dev sorted time: {:.10}, \
                 unsorted positions: {:?}, sorted positions: {:?}",
                summary.unsorted_time.mean,
                summary.unsorted_time.std_dev,
                summary.sorted_time.mean,
                summary.sorted_time.std_dev,
                summary.unsorted_positions,
                summary.sorted_positions,
            ))?;
            summaries.push(summary);
        }

        self.log.flush()?;
        info!(strategy = strategy.name(), "search evaluation complete");
        Ok(summaries)
    }
}

/// Time one strategy call, rendering `None` as the `-1` sentinel.
fn timed_search(strategy: SearchStrategy, data: &[u32], target: u32) -> (f64, i64) {
    let started = Instant::now();
    let position = strategy.search(data, target);
    let elapsed = started.elapsed().as_secs_f64();
    (elapsed, position.map_or(-1, |p| p as i64))
}
