//! Outlier detection result types.

use serde::{Deserialize, Serialize};

use super::point::DataPoint;

/// A point outside the IQR fence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OutlierPoint {
    pub timestamp: i64,
    pub value: f64,
    /// Above the upper fence.
    pub is_high: bool,
    /// Below the lower fence.
    pub is_low: bool,
}

impl OutlierPoint {
    /// The underlying reading.
    pub fn point(&self) -> DataPoint {
        DataPoint::new(self.timestamp, self.value)
    }
}

/// IQR fence and the points outside it, in series order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OutlierReport {
    pub outliers: Vec<OutlierPoint>,
    pub q1: f64,
    pub q3: f64,
    pub iqr: f64,
    pub lower_bound: f64,
    pub upper_bound: f64,
}

impl OutlierReport {
    /// Number of outliers.
    pub fn count(&self) -> usize {
        self.outliers.len()
    }

    /// Whether no point fell outside the fence.
    pub fn is_empty(&self) -> bool {
        self.outliers.is_empty()
    }

    /// Outliers above the upper fence.
    pub fn high(&self) -> impl Iterator<Item = &OutlierPoint> {
        self.outliers.iter().filter(|p| p.is_high)
    }

    /// Outliers below the lower fence.
    pub fn low(&self) -> impl Iterator<Item = &OutlierPoint> {
        self.outliers.iter().filter(|p| p.is_low)
    }
}
