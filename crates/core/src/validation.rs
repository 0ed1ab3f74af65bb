//! Configuration validation support

use config::ConfigError;
use serde::{Deserialize, Serialize};

/// Trait for validating configuration values
pub trait ValidateConfig: Serialize + for<'de> Deserialize<'de> {
    /// Validate the configuration
    ///
    /// Returns Ok(()) if valid, or an error describing what's wrong
    fn validate(&self) -> Result<(), ConfigError>;
}

/// Common validation helpers
pub mod validators {
    use config::ConfigError;

    /// Validate that a count is at least `min`
    pub fn validate_min(value: usize, min: usize, field: &str) -> Result<(), ConfigError> {
        if value < min {
            return Err(ConfigError::Message(format!(
                "{field}: must be at least {min}"
            )));
        }
        Ok(())
    }

    /// Validate that `low <= high`
    pub fn validate_ordered(
        low: usize,
        high: usize,
        low_field: &str,
        high_field: &str,
    ) -> Result<(), ConfigError> {
        if low > high {
            return Err(ConfigError::Message(format!(
                "{low_field} ({low}) must not exceed {high_field} ({high})"
            )));
        }
        Ok(())
    }

    /// Validate that a value is within range
    pub fn validate_range<T: PartialOrd + std::fmt::Display>(
        value: T,
        min: T,
        max: T,
        field: &str,
    ) -> Result<(), ConfigError> {
        if value < min || value > max {
            return Err(ConfigError::Message(format!(
                "{field}: must be between {min} and {max}"
            )));
        }
        Ok(())
    }

    /// Validate that a probability lies in [0, 1]
    pub fn validate_probability(value: f64, field: &str) -> Result<(), ConfigError> {
        if value.is_nan() {
            return Err(ConfigError::Message(format!("{field}: must be a number")));
        }
        validate_range(value, 0.0, 1.0, field)
    }
}
