//! Trend analysis result types.

use serde::{Deserialize, Serialize};

use super::point::DataPoint;
use super::statistics::Direction;

/// A chunk whose local slope diverges from the global slope.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChangeSegment {
    /// Timestamp of the chunk's first point.
    pub start: i64,
    /// Timestamp of the chunk's last point.
    pub end: i64,
    /// Local slope in value units per day.
    pub slope: f64,
    pub direction: Direction,
}

/// Moving average, regression and segmentation of a series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendResult {
    /// Trailing moving average, one point per input point. Empty when disabled.
    pub moving_average: Vec<DataPoint>,
    /// Regression line evaluated at the first and last timestamps.
    pub regression_line: [DataPoint; 2],
    /// Value units per day.
    pub slope: f64,
    /// Fitted value at the first timestamp.
    pub intercept: f64,
    pub r_squared: f64,
    pub direction: Direction,
    /// Empty when disabled.
    pub segments: Vec<ChangeSegment>,
}
