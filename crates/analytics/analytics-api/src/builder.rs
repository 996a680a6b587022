//! Builder for [`AnalyticsConfig`].

use analytics_spi::Result;

use crate::config::{
    AnalyticsConfig, AnomalyConfig, CorrelationConfig, MonitorConfig, OutlierConfig,
    StatisticsConfig, TrendConfig,
};

/// Builder for AnalyticsConfig.
///
/// Starts from the defaults; `build` validates the result.
#[derive(Debug, Default)]
pub struct AnalyticsConfigBuilder {
    config: AnalyticsConfig,
}

impl AnalyticsConfigBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the statistics configuration.
    pub fn statistics(mut self, statistics: StatisticsConfig) -> Self {
        self.config.statistics = statistics;
        self
    }

    /// Set the outlier configuration.
    pub fn outliers(mut self, outliers: OutlierConfig) -> Self {
        self.config.outliers = outliers;
        self
    }

    /// Set the anomaly configuration.
    pub fn anomaly(mut self, anomaly: AnomalyConfig) -> Self {
        self.config.anomaly = anomaly;
        self
    }

    /// Set the trend configuration.
    pub fn trend(mut self, trend: TrendConfig) -> Self {
        self.config.trend = trend;
        self
    }

    /// Set the correlation configuration.
    pub fn correlation(mut self, correlation: CorrelationConfig) -> Self {
        self.config.correlation = correlation;
        self
    }

    /// Set the monitor configuration.
    pub fn monitor(mut self, monitor: MonitorConfig) -> Self {
        self.config.monitor = monitor;
        self
    }

    /// Set the half-series change ratio for the statistics trend.
    pub fn trend_change_ratio(mut self, ratio: f64) -> Self {
        self.config.statistics.trend_change_ratio = ratio;
        self
    }

    /// Set the IQR fence multiplier.
    pub fn iqr_multiplier(mut self, multiplier: f64) -> Self {
        self.config.outliers.iqr_multiplier = multiplier;
        self
    }

    /// Set the Z-score threshold.
    pub fn z_score_threshold(mut self, threshold: f64) -> Self {
        self.config.anomaly.z_score_threshold = threshold;
        self
    }

    /// Set the segment deviation ratio.
    pub fn segment_deviation_ratio(mut self, ratio: f64) -> Self {
        self.config.trend.segment_deviation_ratio = ratio;
        self
    }

    /// Set the autocorrelation significance level.
    pub fn autocorrelation_significance(mut self, significance: f64) -> Self {
        self.config.correlation.significance = significance;
        self
    }

    /// Set the largest autocorrelation lag.
    pub fn max_lag(mut self, max_lag: usize) -> Self {
        self.config.correlation.max_lag = max_lag;
        self
    }

    /// Set the live window size.
    pub fn buffer_size(mut self, buffer_size: usize) -> Self {
        self.config.monitor.buffer_size = buffer_size;
        self
    }

    /// Build the configuration.
    pub fn build(self) -> Result<AnalyticsConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use analytics_spi::AnalyticsError;

    #[test]
    fn test_builder_defaults() {
        let config = AnalyticsConfigBuilder::new().build().unwrap();
        assert_eq!(config, AnalyticsConfig::default());
    }

    #[test]
    fn test_builder_overrides() {
        let config = AnalyticsConfig::builder()
            .z_score_threshold(3.0)
            .iqr_multiplier(3.0)
            .autocorrelation_significance(0.3)
            .max_lag(5)
            .buffer_size(64)
            .build()
            .unwrap();

        assert_eq!(config.anomaly.z_score_threshold, 3.0);
        assert_eq!(config.outliers.iqr_multiplier, 3.0);
        assert_eq!(config.correlation.significance, 0.3);
        assert_eq!(config.correlation.max_lag, 5);
        assert_eq!(config.monitor.buffer_size, 64);
    }

    #[test]
    fn test_builder_sub_config() {
        let config = AnalyticsConfig::builder()
            .anomaly(AnomalyConfig::new(2.0))
            .monitor(MonitorConfig::new(10))
            .build()
            .unwrap();
        assert_eq!(config.anomaly.z_score_threshold, 2.0);
        assert_eq!(config.anomaly.min_points, 10);
        assert_eq!(config.monitor.buffer_size, 10);
    }

    #[test]
    fn test_builder_rejects_invalid() {
        let result = AnalyticsConfig::builder().buffer_size(0).build();
        assert!(matches!(
            result,
            Err(AnalyticsError::InvalidParameter { .. })
        ));
    }
}
