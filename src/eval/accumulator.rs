//! Per-size measurement accumulators.
//!
//! Each series grows monotonically during a harness run and is discarded
//! once its summary is logged. Invariant: within one series, every metric
//! vector has the same length, equal to the number of completed trials.
//! Pushing a whole trial at once is the only way to append, which keeps the
//! invariant structural.

use crate::strategy::SortCounters;

/// Measurement series for one sequence size of a sorting evaluation.
#[derive(Debug, Default)]
pub struct SortSeries {
    /// Elapsed seconds per trial.
    pub times: Vec<f64>,
    /// Swap count per trial.
    pub swaps: Vec<f64>,
    /// Comparison count per trial.
    pub comparisons: Vec<f64>,
}

impl SortSeries {
    /// Append one completed trial.
    pub fn push(&mut self, elapsed_secs: f64, counters: SortCounters) {
        self.times.push(elapsed_secs);
        self.swaps.push(counters.swaps as f64);
        self.comparisons.push(counters.comparisons as f64);
    }

    /// Number of completed trials.
    #[must_use]
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Whether no trials have completed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }
}

/// Measurement series for one sequence size of a search evaluation.
///
/// Every trial records the same search against the unsorted sequence and its
/// sorted counterpart. Positions use `-1` as the not-found sentinel, the
/// form they take in the log.
#[derive(Debug, Default)]
pub struct SearchSeries {
    /// Elapsed seconds per trial, unsorted sequence.
    pub unsorted_times: Vec<f64>,
    /// Elapsed seconds per trial, sorted sequence.
    pub sorted_times: Vec<f64>,
    /// Found position per trial, unsorted sequence.
    pub unsorted_positions: Vec<i64>,
    /// Found position per trial, sorted sequence.
    pub sorted_positions: Vec<i64>,
}

impl SearchSeries {
    /// Append one completed trial.
    pub fn push(
        &mut self,
        unsorted_secs: f64,
        unsorted_position: i64,
        sorted_secs: f64,
        sorted_position: i64,
    ) {
        self.unsorted_times.push(unsorted_secs);
        self.unsorted_positions.push(unsorted_position);
        self.sorted_times.push(sorted_secs);
        self.sorted_positions.push(sorted_position);
    }

    /// Number of completed trials.
    #[must_use]
    pub fn len(&self) -> usize {
        self.unsorted_times.len()
    }

    /// Whether no trials have completed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.unsorted_times.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_series_lengths_stay_equal() {
        let mut series = SortSeries::default();
        assert!(series.is_empty());

        series.push(
            0.5,
            SortCounters {
                swaps: 3,
                comparisons: 6,
            },
        );
        series.push(
            0.7,
            SortCounters {
                swaps: 1,
                comparisons: 6,
            },
        );

        assert_eq!(series.len(), 2);
        assert_eq!(series.times.len(), series.swaps.len());
        assert_eq!(series.swaps.len(), series.comparisons.len());
        assert_eq!(series.swaps, vec![3.0, 1.0]);
    }

    #[test]
    fn test_search_series_lengths_stay_equal() {
        let mut series = SearchSeries::default();
        series.push(0.1, 4, 0.2, -1);

        assert_eq!(series.len(), 1);
        assert_eq!(series.unsorted_positions, vec![4]);
        assert_eq!(series.sorted_positions, vec![-1]);
        assert_eq!(series.unsorted_times.len(), series.sorted_times.len());
    }
}
