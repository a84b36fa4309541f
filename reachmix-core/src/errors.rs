use crate::FloatValue;
use chrono::NaiveDate;
use thiserror::Error;

/// Error type for invalid simulation inputs.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ReachMixError {
    #[error("Invalid configuration: {0}")]
    Configuration(String),
    #[error("Forcing records must be in chronological order. Record {} is dated {date}, which is before the preceding record ({previous})", .index + 1)]
    ForcingOutOfOrder {
        /// Zero-based position in the series. Messages count from one.
        index: usize,
        date: NaiveDate,
        previous: NaiveDate,
    },
    #[error("Invalid value for {name}: {value}. Expected {expected}")]
    InvalidParameter {
        name: String,
        value: FloatValue,
        expected: String,
    },
}

impl ReachMixError {
    pub(crate) fn invalid(name: impl Into<String>, value: FloatValue, expected: &str) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            value,
            expected: expected.to_string(),
        }
    }
}

/// Convenience type for `Result<T, ReachMixError>`.
pub type ReachMixResult<T> = Result<T, ReachMixError>;

/// Checks that a value is finite and not negative.
pub(crate) fn ensure_non_negative(name: &str, value: FloatValue) -> ReachMixResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ReachMixError::invalid(name, value, "a finite value >= 0"))
    }
}
