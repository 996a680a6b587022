//! Analyzer configuration types.

use analytics_spi::{AnalyticsError, Result};
use serde::{Deserialize, Serialize};

// ============================================================================
// Per-analyzer configuration
// ============================================================================

/// Descriptive statistics configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatisticsConfig {
    /// Relative change between half-series means that counts as a trend (default: 0.05).
    pub trend_change_ratio: f64,
}

impl Default for StatisticsConfig {
    fn default() -> Self {
        Self {
            trend_change_ratio: 0.05,
        }
    }
}

impl StatisticsConfig {
    pub fn new(trend_change_ratio: f64) -> Self {
        Self { trend_change_ratio }
    }
}

/// IQR outlier detector configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutlierConfig {
    /// IQR multiplier for the fence (default: 1.5).
    pub iqr_multiplier: f64,
}

impl Default for OutlierConfig {
    fn default() -> Self {
        Self {
            iqr_multiplier: 1.5,
        }
    }
}

impl OutlierConfig {
    pub fn new(iqr_multiplier: f64) -> Self {
        Self { iqr_multiplier }
    }
}

/// Z-score anomaly detector configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnomalyConfig {
    /// Z-score above which a reading is anomalous (default: 2.5).
    pub z_score_threshold: f64,
    /// Minimum sanitized points (default: 10).
    pub min_points: usize,
}

impl Default for AnomalyConfig {
    fn default() -> Self {
        Self {
            z_score_threshold: 2.5,
            min_points: 10,
        }
    }
}

impl AnomalyConfig {
    pub fn new(z_score_threshold: f64) -> Self {
        Self {
            z_score_threshold,
            ..Self::default()
        }
    }
}

/// Trend analyzer configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrendConfig {
    /// Minimum sanitized points (default: 2).
    pub min_points: usize,
    /// Smallest moving-average window (default: 5).
    pub moving_average_min_window: usize,
    /// Window grows as `n / moving_average_divisor` (default: 20).
    pub moving_average_divisor: usize,
    /// Smallest segmentation chunk (default: 5).
    pub segment_min_chunk: usize,
    /// Chunk grows as `n / segment_divisor` (default: 10).
    pub segment_divisor: usize,
    /// Chunk is flagged when `|local - global| > ratio * |global|` (default: 0.5).
    pub segment_deviation_ratio: f64,
}

impl Default for TrendConfig {
    fn default() -> Self {
        Self {
            min_points: 2,
            moving_average_min_window: 5,
            moving_average_divisor: 20,
            segment_min_chunk: 5,
            segment_divisor: 10,
            segment_deviation_ratio: 0.5,
        }
    }
}

impl TrendConfig {
    /// Moving-average window for a series of `n` points. Never 0.
    pub fn moving_average_window(&self, n: usize) -> usize {
        self.moving_average_min_window
            .max(n / self.moving_average_divisor.max(1))
            .max(1)
    }

    /// Segmentation chunk size for a series of `n` points. Never 0.
    pub fn segment_chunk_size(&self, n: usize) -> usize {
        self.segment_min_chunk
            .max(n / self.segment_divisor.max(1))
            .max(1)
    }
}

/// Per-call switches for the trend analyzer.
///
/// Regression, R² and direction are always computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrendOptions {
    /// Compute the moving average (default: true).
    pub moving_average: bool,
    /// Run change-point segmentation (default: true).
    pub segments: bool,
}

impl Default for TrendOptions {
    fn default() -> Self {
        Self {
            moving_average: true,
            segments: true,
        }
    }
}

impl TrendOptions {
    /// Regression only.
    pub fn regression_only() -> Self {
        Self {
            moving_average: false,
            segments: false,
        }
    }
}

/// Correlation analyzer configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorrelationConfig {
    /// Minimum points, or shared timestamps in cross mode (default: 10).
    pub min_points: usize,
    /// Largest autocorrelation lag (default: 20).
    pub max_lag: usize,
    /// Lag is also capped at `n / lag_divisor` (default: 3).
    pub lag_divisor: usize,
    /// `|r|` above which a lag is significant (default: 0.2).
    pub significance: f64,
}

impl Default for CorrelationConfig {
    fn default() -> Self {
        Self {
            min_points: 10,
            max_lag: 20,
            lag_divisor: 3,
            significance: 0.2,
        }
    }
}

impl CorrelationConfig {
    /// Largest lag evaluated for a series of `n` points.
    pub fn lag_limit(&self, n: usize) -> usize {
        self.max_lag.min(n / self.lag_divisor.max(1))
    }
}

/// Live monitor configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitorConfig {
    /// Readings kept in the live window (default: 500).
    pub buffer_size: usize,
    /// Z-score above which an alert is critical (default: 5.0).
    pub critical_z_score: f64,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            buffer_size: 500,
            critical_z_score: 5.0,
        }
    }
}

impl MonitorConfig {
    pub fn new(buffer_size: usize) -> Self {
        Self {
            buffer_size,
            ..Self::default()
        }
    }
}

// ============================================================================
// Engine configuration
// ============================================================================

/// Complete engine configuration.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    pub statistics: StatisticsConfig,
    pub outliers: OutlierConfig,
    pub anomaly: AnomalyConfig,
    pub trend: TrendConfig,
    pub correlation: CorrelationConfig,
    pub monitor: MonitorConfig,
}

impl AnalyticsConfig {
    /// Start a builder from the defaults.
    pub fn builder() -> crate::AnalyticsConfigBuilder {
        crate::AnalyticsConfigBuilder::new()
    }

    /// Parse a JSON document; missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| AnalyticsError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check every threshold and size.
    pub fn validate(&self) -> Result<()> {
        non_negative("statistics.trend_change_ratio", self.statistics.trend_change_ratio)?;
        positive("outliers.iqr_multiplier", self.outliers.iqr_multiplier)?;

        positive("anomaly.z_score_threshold", self.anomaly.z_score_threshold)?;
        at_least("anomaly.min_points", self.anomaly.min_points, 2)?;

        at_least("trend.min_points", self.trend.min_points, 2)?;
        at_least(
            "trend.moving_average_min_window",
            self.trend.moving_average_min_window,
            1,
        )?;
        at_least(
            "trend.moving_average_divisor",
            self.trend.moving_average_divisor,
            1,
        )?;
        at_least("trend.segment_min_chunk", self.trend.segment_min_chunk, 2)?;
        at_least("trend.segment_divisor", self.trend.segment_divisor, 1)?;
        non_negative(
            "trend.segment_deviation_ratio",
            self.trend.segment_deviation_ratio,
        )?;

        at_least("correlation.min_points", self.correlation.min_points, 2)?;
        at_least("correlation.max_lag", self.correlation.max_lag, 1)?;
        at_least("correlation.lag_divisor", self.correlation.lag_divisor, 1)?;
        let significance = self.correlation.significance;
        if !(0.0..1.0).contains(&significance) {
            return Err(AnalyticsError::invalid_parameter(
                "correlation.significance",
                "must be in [0, 1)",
            ));
        }

        at_least("monitor.buffer_size", self.monitor.buffer_size, 1)?;
        positive("monitor.critical_z_score", self.monitor.critical_z_score)?;
        Ok(())
    }
}

fn positive(name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(AnalyticsError::invalid_parameter(name, "must be positive"));
    }
    Ok(())
}

fn non_negative(name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(AnalyticsError::invalid_parameter(
            name,
            "must be a non-negative number",
        ));
    }
    Ok(())
}

fn at_least(name: &str, value: usize, min: usize) -> Result<()> {
    if value < min {
        return Err(AnalyticsError::invalid_parameter(
            name,
            format!("must be at least {min}"),
        ));
    }
    Ok(())
}
