//! Configuration validation.

use super::error::{ConfigError, ConfigResult};
use super::types::BenchConfig;

/// Validate a configuration before the harnesses run.
///
/// # Errors
///
/// Returns an error if:
/// - `trials` is zero (the statistics helpers require at least one sample)
/// - `sizes` is empty
/// - any size is zero (the search harness picks its target at `size / 2`)
pub fn validate(config: &BenchConfig) -> ConfigResult<()> {
    if config.trials == 0 {
        return Err(ConfigError::InvalidValue {
            field: "trials".to_string(),
            message: "at least one trial is required".to_string(),
        });
    }

    if config.sizes.is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "sizes".to_string(),
            message: "at least one sequence size is required".to_string(),
        });
    }

    if let Some(idx) = config.sizes.iter().position(|&s| s == 0) {
        return Err(ConfigError::InvalidValue {
            field: format!("sizes[{idx}]"),
            message: "sequence sizes must be non-zero".to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate(&BenchConfig::default()).is_ok());
    }

    #[test]
    fn test_zero_trials_rejected() {
        let config = BenchConfig {
            trials: 0,
            ..Default::default()
        };
        let err = validate(&config).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "trials"));
    }

    #[test]
    fn test_empty_sizes_rejected() {
        let config = BenchConfig {
            sizes: Vec::new(),
            ..Default::default()
        };
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_zero_size_rejected() {
        let config = BenchConfig {
            sizes: vec![50, 0, 500],
            ..Default::default()
        };
        let err = validate(&config).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "sizes[1]"));
    }
}
