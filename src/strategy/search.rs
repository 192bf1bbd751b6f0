//! Search algorithms.

/// Linear scan from the first element.
///
/// Returns the lowest index whose element equals `target`, or `None`.
/// Order-insensitive: works on any sequence.
#[must_use]
pub fn linear_search(data: &[u32], target: u32) -> Option<usize> {
    for (i, &value) in data.iter().enumerate() {
        if value == target {
            return Some(i);
        }
    }
    None
}

/// Binary search over an ascending-sorted sequence.
///
/// Maintains a shrinking closed `[low, high]` window with
/// `mid = (low + high) / 2`. Returns `Some` index holding `target` (not
/// necessarily the first of a duplicate run) or `None` once the window is
/// empty.
///
/// The input must be ascending-sorted. On unsorted input the result is
/// silently incorrect; the precondition is the caller's responsibility and
/// is not validated here.
#[must_use]
pub fn binary_search(data: &[u32], target: u32) -> Option<usize> {
    let mut low: i64 = 0;
    let mut high: i64 = data.len() as i64 - 1;

    while low <= high {
        let mid = (low + high) / 2;
        let value = data[mid as usize];
        if value < target {
            low = mid + 1;
        } else if value > target {
            high = mid - 1;
        } else {
            return Some(mid as usize);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_finds_first_match() {
        let data = vec![4, 2, 7, 2, 9];
        assert_eq!(linear_search(&data, 2), Some(1));
        assert_eq!(linear_search(&data, 9), Some(4));
        assert_eq!(linear_search(&data, 4), Some(0));
    }

    #[test]
    fn test_linear_absent() {
        assert_eq!(linear_search(&[4, 2, 7], 5), None);
        assert_eq!(linear_search(&[], 5), None);
    }

    #[test]
    fn test_binary_known_vector() {
        let data = vec![1, 3, 5, 8];
        assert_eq!(binary_search(&data, 8), Some(3));
        assert_eq!(binary_search(&data, 1), Some(0));
        assert_eq!(binary_search(&data, 5), Some(2));
        assert_eq!(binary_search(&data, 99), None);
        assert_eq!(binary_search(&data, 2), None);
    }

    #[test]
    fn test_binary_empty_and_single() {
        assert_eq!(binary_search(&[], 1), None);
        assert_eq!(binary_search(&[7], 7), Some(0));
        assert_eq!(binary_search(&[7], 8), None);
    }

    #[test]
    fn test_binary_duplicates_find_some_match() {
        let data = vec![1, 3, 3, 3, 9];
        let idx = binary_search(&data, 3).unwrap();
        assert_eq!(data[idx], 3);
    }

    #[test]
    fn test_binary_every_present_value() {
        let data: Vec<u32> = (0..64).map(|v| v * 3).collect();
        for (i, &value) in data.iter().enumerate() {
            assert_eq!(binary_search(&data, value), Some(i));
        }
        assert_eq!(binary_search(&data, 1), None);
    }
}
