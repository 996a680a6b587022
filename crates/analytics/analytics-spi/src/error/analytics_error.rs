//! Sensor analytics error types.

use thiserror::Error;

/// Sensor analytics errors.
///
/// Series analysis itself never fails; these cover configuration and the
/// conversion of an insufficient-input outcome into an error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalyticsError {
    #[error("Insufficient data: required {required}, got {got}")]
    InsufficientData { required: usize, got: usize },

    #[error("Insufficient overlap: required {required} shared timestamps, got {got}")]
    InsufficientOverlap { required: usize, got: usize },

    #[error("Invalid parameter: {name} - {reason}")]
    InvalidParameter { name: String, reason: String },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl AnalyticsError {
    /// Shorthand for an [`AnalyticsError::InvalidParameter`].
    pub fn invalid_parameter(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for sensor analytics operations.
pub type Result<T> = std::result::Result<T, AnalyticsError>;
