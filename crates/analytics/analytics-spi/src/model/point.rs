//! Sensor reading types.

use serde::{Deserialize, Serialize};

/// Milliseconds in one day, the unit regression slopes are expressed in.
pub const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// A single sensor reading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    /// Epoch milliseconds.
    pub timestamp: i64,
    pub value: f64,
}

impl DataPoint {
    /// Create a new data point.
    pub fn new(timestamp: i64, value: f64) -> Self {
        Self { timestamp, value }
    }
}

/// A reading as delivered by a feed, before numeric coercion.
///
/// The value may be a JSON number, a numeric string, a boolean or garbage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawPoint {
    pub timestamp: i64,
    pub value: serde_json::Value,
}

impl RawPoint {
    /// Create a new raw point.
    pub fn new(timestamp: i64, value: impl Into<serde_json::Value>) -> Self {
        Self {
            timestamp,
            value: value.into(),
        }
    }
}

impl From<DataPoint> for RawPoint {
    fn from(point: DataPoint) -> Self {
        // Non-finite floats have no JSON representation and become null.
        Self::new(point.timestamp, point.value)
    }
}
