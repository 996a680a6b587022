//! Correlation result types.

use serde::{Deserialize, Serialize};

/// A plain `(x, y)` coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Readings of two series sharing a timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PairedPoint {
    pub timestamp: i64,
    /// Primary series value.
    pub x: f64,
    /// Secondary series value.
    pub y: f64,
}

/// Autocorrelation coefficient at one lag.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LagCorrelation {
    /// Lag in samples.
    pub lag: usize,
    pub correlation: f64,
}

/// Pearson correlation of two aligned series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrossCorrelation {
    pub points: Vec<PairedPoint>,
    /// Pearson r; 0 when either series is constant over the overlap.
    pub correlation: f64,
    /// OLS slope of secondary on primary.
    pub slope: f64,
    pub intercept: f64,
    /// Regression line across the primary's range.
    pub trendline: [Point; 2],
}

/// Autocorrelation function of a single series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AutoCorrelation {
    /// Lags from 0 upwards; lag 0 is exactly 1.
    pub lags: Vec<LagCorrelation>,
    /// Non-zero lags above the significance level, strongest first.
    pub significant_lags: Vec<LagCorrelation>,
}

/// Result of the correlation analyzer.
///
/// Cross mode when a second series was supplied, auto mode otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CorrelationResult {
    Cross(CrossCorrelation),
    Auto(AutoCorrelation),
}

impl CorrelationResult {
    /// The cross-correlation, if this is one.
    pub fn as_cross(&self) -> Option<&CrossCorrelation> {
        match self {
            CorrelationResult::Cross(cross) => Some(cross),
            CorrelationResult::Auto(_) => None,
        }
    }

    /// The autocorrelation, if this is one.
    pub fn as_auto(&self) -> Option<&AutoCorrelation> {
        match self {
            CorrelationResult::Auto(auto) => Some(auto),
            CorrelationResult::Cross(_) => None,
        }
    }
}
