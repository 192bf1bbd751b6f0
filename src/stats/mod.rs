//! # Descriptive Statistics
//!
//! Mean and population standard deviation over `f64` samples. Both helpers
//! return `None` for an empty sample set; callers decide whether that is an
//! error (the evaluation harnesses guarantee at least one trial and treat it
//! as one).

/// Arithmetic mean of `samples`, or `None` when empty.
#[must_use]
pub fn mean(samples: &[f64]) -> Option<f64> {
    if samples.is_empty() {
        return None;
    }
    Some(samples.iter().sum::<f64>() / samples.len() as f64)
}

/// Population standard deviation of `samples` around `mean`, or `None` when
/// empty. No Bessel correction is applied.
#[must_use]
pub fn std_dev(samples: &[f64], mean: f64) -> Option<f64> {
    if samples.is_empty() {
        return None;
    }
    let variance = samples
        .iter()
        .map(|x| {
            let diff = x - mean;
            diff * diff
        })
        .sum::<f64>()
        / samples.len() as f64;
    Some(variance.sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: [f64; 8] = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];

    #[test]
    fn test_mean_known_samples() {
        assert_eq!(mean(&SAMPLES), Some(5.0));
    }

    #[test]
    fn test_std_dev_known_samples() {
        let m = mean(&SAMPLES).unwrap();
        assert_eq!(std_dev(&SAMPLES, m), Some(2.0));
    }

    #[test]
    fn test_single_sample() {
        assert_eq!(mean(&[3.5]), Some(3.5));
        assert_eq!(std_dev(&[3.5], 3.5), Some(0.0));
    }

    #[test]
    fn test_empty_samples() {
        assert_eq!(mean(&[]), None);
        assert_eq!(std_dev(&[], 0.0), None);
    }

    #[test]
    fn test_constant_samples_have_zero_spread() {
        let samples = [4.0; 10];
        let m = mean(&samples).unwrap();
        assert_eq!(std_dev(&samples, m), Some(0.0));
    }
}
