//! Error types for geonav-rs.

use thiserror::Error;

/// The main error type for geonav-rs operations.
#[derive(Error, Debug)]
pub enum GeonavError {
    /// A setter received a non-finite value or one violating a hard constraint.
    /// The target state is left unchanged.
    #[error("invalid {name}: {value} ({reason})")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// Configuration values are inconsistent.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl GeonavError {
    /// Builds an [`GeonavError::InvalidParameter`] and logs the rejection.
    #[must_use]
    pub fn invalid_parameter(name: &'static str, value: f64, reason: &'static str) -> Self {
        log::debug!("rejected {name} = {value}: {reason}");
        Self::InvalidParameter {
            name,
            value,
            reason,
        }
    }

    /// Returns true if this is an [`GeonavError::InvalidParameter`].
    #[must_use]
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, Self::InvalidParameter { .. })
    }
}

/// A specialized Result type for geonav-rs operations.
pub type Result<T> = std::result::Result<T, GeonavError>;

/// Returns `value` if it is finite, otherwise an `InvalidParameter` error.
pub fn ensure_finite(name: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(GeonavError::invalid_parameter(name, value, "must be finite"))
    }
}
