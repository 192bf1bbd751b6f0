//! Sorting evaluation harness.

use super::accumulator::SortSeries;
use super::{preview, EvalResult, MetricSummary};
use crate::config::BenchConfig;
use crate::generator;
use crate::runlog::LogSink;
use crate::strategy::SortStrategy;
use serde::Serialize;
use std::collections::BTreeMap;
use std::time::Instant;
use tracing::{debug, info};

/// Per-size summary of a sorting evaluation.
#[derive(Debug, Clone, Serialize)]
pub struct SortSummary {
    /// Sequence size.
    pub size: usize,
    /// Elapsed seconds.
    pub time: MetricSummary,
    /// Swap counts.
    pub swaps: MetricSummary,
    /// Comparison counts.
    pub comparisons: MetricSummary,
}

/// Runs sorting trials and reduces them to per-size summaries.
///
/// Each trial generates a fresh clock-seeded sequence per size and hands the
/// strategy its own copy, so no trial observes mutation from a prior run.
/// Only the strategy call itself is timed.
pub struct SortEvaluator<'a> {
    config: &'a BenchConfig,
    log: &'a mut dyn LogSink,
}

impl<'a> SortEvaluator<'a> {
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
    pub fn run(&mut self, strategy: SortStrategy) -> EvalResult<Vec<SortSummary>> {
        info!(strategy = strategy.name(), "starting sort evaluation");
        self.log
            .record(&format!("evaluating sort strategy: {strategy}"))?;

        let mut series: BTreeMap<usize, SortSeries> = BTreeMap::new();

        for trial in 0..self.config.trials {
            self.log
                .record(&format!("trial {} of {}", trial + 1, self.config.trials))?;

            for &size in &self.config.sizes {
                let sequence = generator::generate(generator::clock_seed(), size);
                self.log.record(&format!(
                    "generated vector of size {size}: {}...",
                    preview(&sequence)
                ))?;

                let mut working = sequence.clone();
                let started = Instant::now();
                let counters = strategy.sort(&mut working);
                let elapsed = started.elapsed().as_secs_f64();

                debug!(
                    size,
                    elapsed,
                    swaps = counters.swaps,
                    comparisons = counters.comparisons,
                    "sort trial complete"
                );
                self.log.record(&format!(
                    "elapsed: {elapsed:.10}, swaps: {}, comparisons: {}",
                    counters.swaps, counters.comparisons
                ))?;

                series.entry(size).or_default().push(elapsed, counters);
            }
        }

        let mut summaries = Vec::with_capacity(series.len());
        for (&size, series) in &series {
            let summary = SortSummary {
                size,
                time: MetricSummary::from_samples("time", &series.times)?,
                swaps: MetricSummary::from_samples("swaps", &series.swaps)?,
                comparisons: MetricSummary::from_samples("comparisons", &series.comparisons)?,
            };
            self.log.record(&format!(
                "sort strategy: {strategy}, size: {size}, \
                 mean time: {:.10}, std dev time: {:.10}, \
                 mean swaps: {:.2}, std dev swaps: {:.2}, \
                 mean comparisons: {:.2}, std dev comparisons: {:.2}",
                summary.time.mean,
                summary.time.std_dev,
                summary.swaps.mean,
                summary.swaps.std_dev,
                summary.comparisons.mean,
                summary.comparisons.std_dev,
            ))?;
            summaries.push(summary);
        }

        self.log.flush()?;
        info!(strategy = strategy.name(), "sort evaluation complete");
        Ok(summaries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runlog::MemorySink;

    fn small_config() -> BenchConfig {
        BenchConfig {
            sizes: vec![8, 16],
            trials: 3,
            ..Default::default()
        }
    }

    #[test]
    fn test_run_covers_every_size() {
        let config = small_config();
        let mut sink = MemorySink::new();
        let summaries = SortEvaluator::new(&config, &mut sink)
            .run(SortStrategy::Selection)
            .unwrap();

        let sizes: Vec<usize> = summaries.iter().map(|s| s.size).collect();
        assert_eq!(sizes, vec![8, 16]);
    }

    #[test]
    fn test_selection_comparisons_are_deterministic_across_trials() {
        let config = small_config();
        let mut sink = MemorySink::new();
        let summaries = SortEvaluator::new(&config, &mut sink)
            .run(SortStrategy::Selection)
            .unwrap();

        // n(n-1)/2 comparisons regardless of input, so the spread is zero.
        assert_eq!(summaries[0].comparisons.mean, 28.0);
        assert_eq!(summaries[0].comparisons.std_dev, 0.0);
        assert_eq!(summaries[1].comparisons.mean, 120.0);
    }

    #[test]
    fn test_swap_means_respect_selection_bound() {
        let config = small_config();
        let mut sink = MemorySink::new();
        let summaries = SortEvaluator::new(&config, &mut sink)
            .run(SortStrategy::Selection)
            .unwrap();

        for summary in &summaries {
            assert!(summary.swaps.mean <= (summary.size - 1) as f64);
        }
    }

    #[test]
    fn test_log_lines_recorded() {
        let config = small_config();
        let mut sink = MemorySink::new();
        SortEvaluator::new(&config, &mut sink)
            .run(SortStrategy::Partition)
            .unwrap();

        assert!(sink.contains("evaluating sort strategy: partition"));
        assert!(sink.contains("trial 1 of 3"));
        assert!(sink.contains("trial 3 of 3"));
        assert!(sink.contains("generated vector of size 8"));
        assert!(sink.contains("sort strategy: partition, size: 16"));
        // detail lines: one preview + one measurement per size per trial,
        // plus header, trial markers, and one summary per size.
        assert_eq!(sink.lines().len(), 1 + 3 + 3 * 2 * 2 + 2);
    }
}
