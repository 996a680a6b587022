//! Analysis outcome wrapper.

use serde::{Deserialize, Serialize};

use crate::error::{AnalyticsError, Result};

/// Outcome of an analyzer with a minimum-size precondition.
///
/// The insufficient variants are distinct from a complete result that found
/// nothing: "ten points, zero anomalies" is `Complete` with an empty anomaly
/// set, "four points" is `InsufficientData`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "result", rename_all = "snake_case")]
pub enum Analysis<T> {
    /// The analyzer ran to completion.
    Complete(T),
    /// The series was shorter than the analyzer's minimum.
    InsufficientData { required: usize, actual: usize },
    /// Two series shared fewer timestamps than the minimum.
    InsufficientOverlap { required: usize, actual: usize },
}

impl<T> Analysis<T> {
    /// Whether the analyzer ran to completion.
    pub fn is_complete(&self) -> bool {
        matches!(self, Analysis::Complete(_))
    }

    /// The complete result, if any.
    pub fn complete(self) -> Option<T> {
        match self {
            Analysis::Complete(value) => Some(value),
            _ => None,
        }
    }

    /// Borrow the contents.
    pub fn as_ref(&self) -> Analysis<&T> {
        match self {
            Analysis::Complete(value) => Analysis::Complete(value),
            Analysis::InsufficientData { required, actual } => Analysis::InsufficientData {
                required: *required,
                actual: *actual,
            },
            Analysis::InsufficientOverlap { required, actual } => Analysis::InsufficientOverlap {
                required: *required,
                actual: *actual,
            },
        }
    }

    /// Map the complete result, passing sentinels through.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Analysis<U> {
        match self {
            Analysis::Complete(value) => Analysis::Complete(f(value)),
            Analysis::InsufficientData { required, actual } => {
                Analysis::InsufficientData { required, actual }
            }
            Analysis::InsufficientOverlap { required, actual } => {
                Analysis::InsufficientOverlap { required, actual }
            }
        }
    }

    /// Convert into a `Result`, turning sentinels into errors.
    pub fn into_result(self) -> Result<T> {
        match self {
            Analysis::Complete(value) => Ok(value),
            Analysis::InsufficientData { required, actual } => {
                Err(AnalyticsError::InsufficientData {
                    required,
                    got: actual,
                })
            }
            Analysis::InsufficientOverlap { required, actual } => {
                Err(AnalyticsError::InsufficientOverlap {
                    required,
                    got: actual,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_accessors() {
        let analysis = Analysis::Complete(7);
        assert!(analysis.is_complete());
        assert_eq!(analysis.as_ref().complete(), Some(&7));
        assert_eq!(analysis.map(|v| v * 2).complete(), Some(14));
    }

    #[test]
    fn test_insufficient_data_into_result() {
        let analysis: Analysis<u8> = Analysis::InsufficientData {
            required: 10,
            actual: 3,
        };
        assert!(!analysis.is_complete());
        assert_eq!(
            analysis.into_result(),
            Err(AnalyticsError::InsufficientData {
                required: 10,
                got: 3
            })
        );
    }

    #[test]
    fn test_insufficient_overlap_survives_map() {
        let analysis: Analysis<u8> = Analysis::InsufficientOverlap {
            required: 10,
            actual: 2,
        };
        let mapped = analysis.map(|v| v as u32);
        assert_eq!(
            mapped,
            Analysis::InsufficientOverlap {
                required: 10,
                actual: 2
            }
        );
    }

    #[test]
    fn test_serde_tagging() {
        let analysis: Analysis<u8> = Analysis::InsufficientData {
            required: 2,
            actual: 1,
        };
        let json = serde_json::to_value(&analysis).unwrap();
        assert_eq!(json["status"], "insufficient_data");
        assert_eq!(json["result"]["required"], 2);

        let back: Analysis<u8> = serde_json::from_value(json).unwrap();
        assert_eq!(back, analysis);
    }
}
