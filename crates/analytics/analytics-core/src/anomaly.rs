//! Z-score anomaly detection.

use analytics_api::AnomalyConfig;
use analytics_spi::{
    Analysis, AnomalyPoint, AnomalyReport, AnomalyType, SanitizedSeries, SeriesAnalyzer,
};
use tracing::debug;

use crate::math::{finite, mean, population_std_dev, z_score};

/// Z-Score based anomaly detector.
///
/// Scores every reading by its absolute distance from the population mean in
/// population standard deviations. A constant series has no spread, so every
/// score is 0 and nothing is flagged.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZScoreDetector {
    config: AnomalyConfig,
}

impl ZScoreDetector {
    /// Create a new detector.
    pub fn new(config: AnomalyConfig) -> Self {
        Self { config }
    }

    /// Get the threshold.
    pub fn threshold(&self) -> f64 {
        self.config.z_score_threshold
    }

    /// Minimum points required.
    pub fn min_points(&self) -> usize {
        self.config.min_points
    }
}

impl SeriesAnalyzer for ZScoreDetector {
    type Output = Analysis<AnomalyReport>;

    fn name(&self) -> &'static str {
        "anomalies"
    }

    fn analyze(&self, series: &SanitizedSeries) -> Analysis<AnomalyReport> {
        let n = series.len();
        if n < self.config.min_points {
            debug!(
                analyzer = self.name(),
                required = self.config.min_points,
                actual = n,
                "insufficient data"
            );
            return Analysis::InsufficientData {
                required: self.config.min_points,
                actual: n,
            };
        }

        let values = series.values();
        let mean = mean(&values);
        let std_dev = population_std_dev(&values, mean);
        let threshold = self.config.z_score_threshold;

        let points: Vec<AnomalyPoint> = series
            .iter()
            .map(|p| {
                let z_score = z_score(p.value, mean, std_dev);
                AnomalyPoint {
                    timestamp: p.timestamp,
                    value: p.value,
                    z_score,
                    is_anomaly: z_score > threshold,
                    anomaly_type: if p.value > mean {
                        AnomalyType::High
                    } else {
                        AnomalyType::Low
                    },
                }
            })
            .collect();

        let anomaly_count = points.iter().filter(|p| p.is_anomaly).count();

        Analysis::Complete(AnomalyReport {
            points,
            anomaly_count,
            anomaly_percentage: 100.0 * anomaly_count as f64 / n as f64,
            mean,
            std_dev,
            threshold,
            upper_bound: finite(mean + threshold * std_dev),
            lower_bound: finite(mean - threshold * std_dev),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use analytics_spi::DataPoint;

    fn series(values: &[f64]) -> SanitizedSeries {
        SanitizedSeries::from_points(
            values
                .iter()
                .enumerate()
                .map(|(i, &v)| DataPoint::new(i as i64 * 1000, v)),
        )
    }

    #[test]
    fn test_insufficient_data_sentinel() {
        let result = ZScoreDetector::default().analyze(&series(&[1.0; 9]));
        assert_eq!(
            result,
            Analysis::InsufficientData {
                required: 10,
                actual: 9
            }
        );
    }

    #[test]
    fn test_readings_near_f64_max_stay_finite() {
        let mut values = vec![1e308, 1e308, -1e308, 1.7e308, 0.0];
        values.extend([1e308; 6]);
        let report = ZScoreDetector::default()
            .analyze(&series(&values))
            .complete()
            .unwrap();

        assert!(report.mean.is_finite());
        assert!(report.std_dev.is_finite() && report.std_dev > 0.0);
        assert!(report.upper_bound.is_finite());
        assert!(report.lower_bound.is_finite());
        assert!(report.points.iter().all(|p| p.z_score.is_finite()));
    }

    #[test]
    fn test_constant_series_has_no_anomalies() {
        let report = ZScoreDetector::default()
            .analyze(&series(&[4.2; 25]))
            .complete()
            .unwrap();
        assert_eq!(report.anomaly_count, 0);
        assert_eq!(report.anomaly_percentage, 0.0);
        assert_eq!(report.std_dev, 0.0);
        assert!(report.points.iter().all(|p| p.z_score == 0.0));
        assert_eq!(report.upper_bound, report.lower_bound);
    }

    #[test]
    fn test_spike_is_isolated() {
        let mut values = vec![10.0; 9];
        values.push(100.0);
        let report = ZScoreDetector::default()
            .analyze(&series(&values))
            .complete()
            .unwrap();

        // mean 19, std 27 -> z(100) = 3, z(10) = 1/3
        assert!((report.mean - 19.0).abs() < 1e-10);
        assert!((report.std_dev - 27.0).abs() < 1e-10);
        assert_eq!(report.anomaly_count, 1);
        assert_eq!(report.anomaly_indices(), vec![9]);

        let spike = report.anomalies().next().unwrap();
        assert_eq!(spike.value, 100.0);
        assert_eq!(spike.anomaly_type, AnomalyType::High);
        assert!((spike.z_score - 3.0).abs() < 1e-10);
        assert!((report.anomaly_percentage - 10.0).abs() < 1e-10);
    }

    #[test]
    fn test_bounds_and_low_type() {
        let mut values = vec![50.0; 19];
        values.push(-50.0);
        let report = ZScoreDetector::default()
            .analyze(&series(&values))
            .complete()
            .unwrap();

        assert!((report.upper_bound - (report.mean + 2.5 * report.std_dev)).abs() < 1e-10);
        assert!((report.lower_bound - (report.mean - 2.5 * report.std_dev)).abs() < 1e-10);
        let dip = report.anomalies().next().unwrap();
        assert_eq!(dip.value, -50.0);
        assert_eq!(dip.anomaly_type, AnomalyType::Low);
    }

    #[test]
    fn test_normal_data_yields_complete_empty_set() {
        let values: Vec<f64> = (0..40).map(|i| 20.0 + (i % 4) as f64 * 0.5).collect();
        let result = ZScoreDetector::default().analyze(&series(&values));
        assert!(result.is_complete());
        assert_eq!(result.complete().unwrap().anomaly_count, 0);
    }

    #[test]
    fn test_custom_threshold() {
        let mut values = vec![10.0; 9];
        values.push(100.0);
        let strict = ZScoreDetector::new(AnomalyConfig::new(3.5));
        let report = strict.analyze(&series(&values)).complete().unwrap();
        assert_eq!(report.anomaly_count, 0);
        assert_eq!(strict.threshold(), 3.5);
    }
}
