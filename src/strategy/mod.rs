//! # Algorithm Strategies
//!
//! The closed set of sorting and search strategies under evaluation. Each
//! family is a small enumeration with a uniform entry point ([`SortStrategy::sort`],
//! [`SearchStrategy::search`]) so harnesses select algorithms by name rather
//! than by passing function values around.

mod search;
mod sort;

pub use search::{binary_search, linear_search};
pub use sort::{partition_sort, selection_sort, SortCounters};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sorting strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortStrategy {
    /// Selection sort: scan the remainder for the minimum, at most one swap
    /// per position.
    Selection,
    /// Recursive partition sort with a fixed last-element pivot.
    Partition,
}

impl SortStrategy {
    /// All sorting strategies, in evaluation order.
    pub const ALL: [Self; 2] = [Self::Selection, Self::Partition];

    /// Strategy name as it appears in the run log.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Selection => "selection",
            Self::Partition => "partition",
        }
    }

    /// Sort `data` ascending in place, returning the operation counters.
    pub fn sort(&self, data: &mut [u32]) -> SortCounters {
        match self {
            Self::Selection => sort::selection_sort(data),
            Self::Partition => sort::partition_sort(data),
        }
    }
}

impl fmt::Display for SortStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Search strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchStrategy {
    /// Linear scan from the first element; works on any ordering.
    Linear,
    /// Binary search over a closed `[low, high]` window; requires
    /// ascending-sorted input.
    Binary,
}

impl SearchStrategy {
    /// All search strategies, in evaluation order.
    pub const ALL: [Self; 2] = [Self::Linear, Self::Binary];

    /// Strategy name as it appears in the run log.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Binary => "binary",
        }
    }

    /// Search `data` for `target`, returning the found index.
    ///
    /// The binary strategy assumes `data` is ascending-sorted; the result on
    /// unsorted input is silently incorrect. That precondition belongs to the
    /// caller and is not validated here.
    #[must_use]
    pub fn search(&self, data: &[u32], target: u32) -> Option<usize> {
        match self {
            Self::Linear => search::linear_search(data, target),
            Self::Binary => search::binary_search(data, target),
        }
    }
}

impl fmt::Display for SearchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_names() {
        assert_eq!(SortStrategy::Selection.name(), "selection");
        assert_eq!(SortStrategy::Partition.name(), "partition");
        assert_eq!(SearchStrategy::Linear.name(), "linear");
        assert_eq!(SearchStrategy::Binary.name(), "binary");
    }

    #[test]
    fn test_sort_dispatch() {
        for strategy in SortStrategy::ALL {
            let mut data = vec![5, 3, 8, 1];
            strategy.sort(&mut data);
            assert_eq!(data, vec![1, 3, 5, 8], "strategy {strategy}");
        }
    }

    #[test]
    fn test_search_dispatch() {
        let data = vec![1, 3, 5, 8];
        for strategy in SearchStrategy::ALL {
            assert_eq!(strategy.search(&data, 8), Some(3), "strategy {strategy}");
            assert_eq!(strategy.search(&data, 99), None, "strategy {strategy}");
        }
    }
}
