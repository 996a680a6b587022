//! Real-time monitoring over a bounded window.

use analytics_api::{AnalyticsConfig, MonitorConfig};
use analytics_spi::{
    Alert, Analysis, DataPoint, MonitoringStream, Result, SanitizedSeries, SensorReport,
    SeriesAnalyzer,
};
use tracing::{trace, warn};

use crate::alerting::create_alert;
use crate::engine::AnalyticsEngine;

/// Real-time monitor for streaming sensor readings.
///
/// Keeps the most recent `buffer_size` finite readings in arrival order.
/// Each push re-runs the Z-score detector over the whole window from scratch.
#[derive(Debug, Clone)]
pub struct LiveMonitor {
    engine: AnalyticsEngine,
    config: MonitorConfig,
    buffer: Vec<DataPoint>,
}

impl LiveMonitor {
    /// Create a new monitor.
    pub fn new(config: AnalyticsConfig) -> Result<Self> {
        Ok(Self::with_engine(AnalyticsEngine::new(config)?))
    }

    /// Create a monitor around an existing engine, using its monitor settings.
    pub fn with_engine(engine: AnalyticsEngine) -> Self {
        let config = engine.config().monitor;
        Self {
            engine,
            config,
            buffer: Vec::with_capacity(config.buffer_size),
        }
    }

    /// Get the underlying engine.
    pub fn engine(&self) -> &AnalyticsEngine {
        &self.engine
    }

    /// Window contents as a sanitized series.
    pub fn window(&self) -> SanitizedSeries {
        SanitizedSeries::from_points(self.buffer.iter().copied())
    }

    /// Full pipeline over the current window.
    pub fn report(&self) -> SensorReport {
        self.engine.analyze(&self.buffer)
    }
}

impl MonitoringStream for LiveMonitor {
    fn push(&mut self, point: DataPoint) -> Option<Alert> {
        if !point.value.is_finite() {
            trace!(timestamp = point.timestamp, "skipping non-finite reading");
            return None;
        }

        self.buffer.push(point);
        if self.buffer.len() > self.config.buffer_size {
            self.buffer.remove(0);
        }

        let report = match self.engine.anomaly_detector().analyze(&self.window()) {
            Analysis::Complete(report) => report,
            _ => return None,
        };

        let scored = report
            .points
            .iter()
            .find(|p| p.timestamp == point.timestamp && p.value == point.value)?;
        if !scored.is_anomaly {
            return None;
        }

        let alert = create_alert(scored, self.config.critical_z_score);
        warn!(
            timestamp = alert.timestamp,
            value = alert.value,
            z_score = alert.z_score,
            severity = ?alert.severity,
            "anomalous reading"
        );
        Some(alert)
    }

    fn buffer(&self) -> &[DataPoint] {
        &self.buffer
    }

    fn reset(&mut self) {
        self.buffer.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use analytics_spi::AlertSeverity;

    fn monitor(buffer_size: usize) -> LiveMonitor {
        let config = AnalyticsConfig::builder()
            .buffer_size(buffer_size)
            .build()
            .unwrap();
        LiveMonitor::new(config).unwrap()
    }

    fn baseline(monitor: &mut LiveMonitor, n: i64) {
        for i in 0..n {
            let value = 20.0 + if i % 2 == 0 { 0.5 } else { -0.5 };
            assert!(monitor.push(DataPoint::new(i * 1000, value)).is_none());
        }
    }

    #[test]
    fn test_no_alert_before_minimum() {
        let mut monitor = monitor(100);
        for i in 0..9 {
            assert!(monitor.push(DataPoint::new(i * 1000, 1_000.0 * i as f64)).is_none());
        }
    }

    #[test]
    fn test_spike_raises_alert() {
        let mut monitor = monitor(100);
        baseline(&mut monitor, 40);

        let alert = monitor
            .push(DataPoint::new(40_000, 80.0))
            .expect("spike should alert");
        assert_eq!(alert.timestamp, 40_000);
        assert_eq!(alert.value, 80.0);
        assert!(alert.z_score > 2.5);
        assert_eq!(alert.severity, AlertSeverity::Critical);
    }

    #[test]
    fn test_buffer_is_bounded() {
        let mut monitor = monitor(16);
        baseline(&mut monitor, 40);
        assert_eq!(monitor.buffer().len(), 16);
        assert_eq!(monitor.buffer()[0].timestamp, 24_000);
    }

    #[test]
    fn test_non_finite_reading_is_ignored() {
        let mut monitor = monitor(100);
        baseline(&mut monitor, 20);
        assert!(monitor.push(DataPoint::new(20_000, f64::NAN)).is_none());
        assert!(monitor.push(DataPoint::new(21_000, f64::INFINITY)).is_none());
        assert_eq!(monitor.buffer().len(), 20);
        assert_eq!(monitor.window().len(), 20);
    }

    #[test]
    fn test_non_finite_reading_does_not_take_a_slot() {
        let mut monitor = monitor(16);
        baseline(&mut monitor, 16);
        assert!(monitor.push(DataPoint::new(16_000, f64::NAN)).is_none());

        // the full window of finite readings survives
        assert_eq!(monitor.buffer().len(), 16);
        assert_eq!(monitor.buffer()[0].timestamp, 0);
        assert!(monitor.buffer().iter().all(|p| p.value.is_finite()));
    }

    #[test]
    fn test_reset_and_report() {
        let mut monitor = monitor(100);
        baseline(&mut monitor, 20);
        let report = monitor.report();
        assert_eq!(report.sanitized_points, 20);
        assert!(report.anomalies.is_complete());

        monitor.reset();
        assert!(monitor.buffer().is_empty());
        assert_eq!(monitor.report().statistics.count, 0);
    }
}
