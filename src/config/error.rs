//! Configuration-time error types.

use thiserror::Error;

/// Errors raised while loading or validating configuration.
///
/// Every failure in this crate happens before the first tick: once a
/// controller exists, stepping and control input cannot fail.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A control range whose lower bound is not strictly below its upper bound
    #[error("control '{name}' has an empty range [{min}, {max}]")]
    InvalidRange { name: String, min: f64, max: f64 },

    /// A quantity that must be strictly positive (yield, Ks, dt, rates)
    #[error("'{name}' must be positive, got {value}")]
    NonPositive { name: String, value: f64 },

    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ConfigError {
    pub fn invalid_range(name: impl Into<String>, min: f64, max: f64) -> Self {
        ConfigError::InvalidRange {
            name: name.into(),
            min,
            max,
        }
    }

    pub fn non_positive(name: impl Into<String>, value: f64) -> Self {
        ConfigError::NonPositive {
            name: name.into(),
            value,
        }
    }
}

/// Reject zero, negative and NaN values.
pub(crate) fn require_positive(name: &str, value: f64) -> Result<(), ConfigError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::non_positive(name, value))
    }
}
