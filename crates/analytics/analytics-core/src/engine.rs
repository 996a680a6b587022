//! The analytics engine: one entry point over all analyzers.

use analytics_api::{AnalyticsConfig, TrendOptions};
use analytics_spi::{
    Analysis, AnomalyReport, CorrelationResult, DataPoint, OutlierReport, PercentileSet, Result,
    SanitizedSeries, SensorReport, SensorSeries, SeriesAnalyzer, StatisticsSummary, TrendResult,
};
use rayon::prelude::*;
use tracing::{debug, instrument};

use crate::anomaly::ZScoreDetector;
use crate::correlation::CorrelationAnalyzer;
use crate::outliers::OutlierDetector;
use crate::percentiles::PercentileEstimator;
use crate::sanitizer::sanitize;
use crate::statistics::StatisticsAnalyzer;
use crate::trend::TrendAnalyzer;

/// Sanitizes raw series and dispatches them to the configured analyzers.
///
/// The engine owns configuration only. Every call sanitizes its input and
/// computes from scratch, so an engine can be shared across threads or moved
/// onto a worker without coordination.
#[derive(Debug, Clone, Default)]
pub struct AnalyticsEngine {
    config: AnalyticsConfig,
    statistics: StatisticsAnalyzer,
    percentiles: PercentileEstimator,
    outliers: OutlierDetector,
    anomalies: ZScoreDetector,
    trend: TrendAnalyzer,
    correlation: CorrelationAnalyzer,
}

impl AnalyticsEngine {
    /// Create an engine from a validated configuration.
    pub fn new(config: AnalyticsConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            statistics: StatisticsAnalyzer::new(config.statistics),
            percentiles: PercentileEstimator::new(),
            outliers: OutlierDetector::new(config.outliers),
            anomalies: ZScoreDetector::new(config.anomaly),
            trend: TrendAnalyzer::new(config.trend),
            correlation: CorrelationAnalyzer::new(config.correlation),
        })
    }

    /// Get the configuration.
    pub fn config(&self) -> &AnalyticsConfig {
        &self.config
    }

    /// Get the anomaly detector.
    pub fn anomaly_detector(&self) -> &ZScoreDetector {
        &self.anomalies
    }

    /// Drop non-finite readings and sort by timestamp.
    pub fn sanitize(&self, points: &[DataPoint]) -> SanitizedSeries {
        sanitize(points)
    }

    /// Descriptive statistics.
    pub fn statistics(&self, points: &[DataPoint]) -> StatisticsSummary {
        self.statistics.analyze(&sanitize(points))
    }

    /// Nearest-rank percentiles.
    pub fn percentiles(&self, points: &[DataPoint]) -> PercentileSet {
        self.percentiles.analyze(&sanitize(points))
    }

    /// IQR outliers.
    pub fn outliers(&self, points: &[DataPoint]) -> OutlierReport {
        self.outliers.analyze(&sanitize(points))
    }

    /// Z-score anomalies.
    pub fn anomalies(&self, points: &[DataPoint]) -> Analysis<AnomalyReport> {
        self.anomalies.analyze(&sanitize(points))
    }

    /// Trend with per-call options.
    pub fn trend(&self, points: &[DataPoint], options: TrendOptions) -> Analysis<TrendResult> {
        self.trend.with_options(options).analyze(&sanitize(points))
    }

    /// Cross-correlation when `secondary` is given, autocorrelation otherwise.
    #[instrument(skip_all, fields(primary = primary.len(), cross = secondary.is_some()))]
    pub fn correlate(
        &self,
        primary: &[DataPoint],
        secondary: Option<&[DataPoint]>,
    ) -> Analysis<CorrelationResult> {
        let primary = sanitize(primary);
        match secondary {
            Some(secondary) => self.correlation.cross(&primary, &sanitize(secondary)),
            None => self.correlation.auto(&primary),
        }
    }

    /// Every single-series analysis of one window.
    #[instrument(skip_all, fields(points = points.len()))]
    pub fn analyze(&self, points: &[DataPoint]) -> SensorReport {
        let series = sanitize(points);
        let report = self.analyze_sanitized(&series, points.len() - series.len());
        debug!(
            sanitized = report.sanitized_points,
            outliers = report.outliers.count(),
            anomalies = report.anomalies.is_complete(),
            trend = report.trend.is_complete(),
            "analysis complete"
        );
        report
    }

    /// Every single-series analysis of an already sanitized series.
    pub fn analyze_sanitized(&self, series: &SanitizedSeries, dropped_points: usize) -> SensorReport {
        SensorReport {
            sanitized_points: series.len(),
            dropped_points,
            statistics: self.statistics.analyze(series),
            percentiles: self.percentiles.analyze(series),
            outliers: self.outliers.analyze(series),
            anomalies: self.anomalies.analyze(series),
            trend: self.trend.analyze(series),
            autocorrelation: self.correlation.analyze(series),
        }
    }

    /// Analyze several sensors in parallel, preserving input order.
    #[instrument(skip_all, fields(sensors = sensors.len()))]
    pub fn analyze_batch(&self, sensors: &[SensorSeries]) -> Vec<(String, SensorReport)> {
        sensors
            .par_iter()
            .map(|sensor| (sensor.name.clone(), self.analyze(&sensor.points)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use analytics_spi::{AnalyticsError, Direction};

    fn points(values: &[f64]) -> Vec<DataPoint> {
        values
            .iter()
            .enumerate()
            .map(|(i, &v)| DataPoint::new(i as i64 * 1000, v))
            .collect()
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let mut config = AnalyticsConfig::default();
        config.outliers.iqr_multiplier = -1.0;
        assert!(matches!(
            AnalyticsEngine::new(config),
            Err(AnalyticsError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_analyze_empty_series() {
        let report = AnalyticsEngine::default().analyze(&[]);
        assert_eq!(report.sanitized_points, 0);
        assert_eq!(report.statistics, StatisticsSummary::default());
        assert_eq!(report.percentiles, PercentileSet::default());
        assert!(report.outliers.is_empty());
        assert!(matches!(report.anomalies, Analysis::InsufficientData { required: 10, actual: 0 }));
        assert!(matches!(report.trend, Analysis::InsufficientData { required: 2, actual: 0 }));
        assert!(matches!(
            report.autocorrelation,
            Analysis::InsufficientData { required: 10, actual: 0 }
        ));
    }

    #[test]
    fn test_analyze_counts_dropped_points() {
        let mut input = points(&[1.0, 2.0, 3.0]);
        input.push(DataPoint::new(5000, f64::NAN));
        let report = AnalyticsEngine::default().analyze(&input);
        assert_eq!(report.sanitized_points, 3);
        assert_eq!(report.dropped_points, 1);
    }

    #[test]
    fn test_unsorted_input_is_sorted_before_trend() {
        let mut input = points(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        input.reverse();
        let trend = AnalyticsEngine::default()
            .trend(&input, TrendOptions::default())
            .complete()
            .unwrap();
        assert_eq!(trend.direction, Direction::Up);
    }

    #[test]
    fn test_correlate_modes() {
        let engine = AnalyticsEngine::default();
        let a = points(&(0..15).map(|i| i as f64).collect::<Vec<_>>());
        assert!(matches!(
            engine.correlate(&a, None),
            Analysis::Complete(CorrelationResult::Auto(_))
        ));
        assert!(matches!(
            engine.correlate(&a, Some(&a[..5])),
            Analysis::InsufficientOverlap { required: 10, actual: 5 }
        ));
    }

    #[test]
    fn test_batch_preserves_order_and_matches_sequential() {
        let engine = AnalyticsEngine::default();
        let sensors: Vec<SensorSeries> = (0..8)
            .map(|s| {
                let values: Vec<f64> = (0..50).map(|i| (i * (s + 1)) as f64 % 17.0).collect();
                SensorSeries::new(format!("sensor-{s}"), points(&values))
            })
            .collect();

        let reports = engine.analyze_batch(&sensors);
        assert_eq!(reports.len(), 8);
        for (sensor, (name, report)) in sensors.iter().zip(&reports) {
            assert_eq!(&sensor.name, name);
            assert_eq!(report, &engine.analyze(&sensor.points));
        }
    }
}
