//! IQR-fence outlier detection.

use analytics_api::OutlierConfig;
use analytics_spi::{OutlierPoint, OutlierReport, SanitizedSeries, SeriesAnalyzer};

use crate::math::finite;

/// Interquartile range (IQR) based outlier detector.
///
/// Q1 and Q3 are read directly at sorted indices `floor(n/4)` and
/// `floor(3n/4)`, without interpolation. A reading is an outlier when it lies
/// strictly outside `[Q1 - k·IQR, Q3 + k·IQR]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutlierDetector {
    config: OutlierConfig,
}

impl OutlierDetector {
    /// Create a new detector.
    pub fn new(config: OutlierConfig) -> Self {
        Self { config }
    }

    /// Get the multiplier.
    pub fn multiplier(&self) -> f64 {
        self.config.iqr_multiplier
    }
}

impl SeriesAnalyzer for OutlierDetector {
    type Output = OutlierReport;

    fn name(&self) -> &'static str {
        "outliers"
    }

    fn analyze(&self, series: &SanitizedSeries) -> OutlierReport {
        if series.is_empty() {
            return OutlierReport::default();
        }

        let sorted = series.sorted_values();
        let n = sorted.len();
        let q1 = sorted[n / 4];
        let q3 = sorted[3 * n / 4];
        let iqr = finite(q3 - q1);
        let lower_bound = finite(q1 - self.config.iqr_multiplier * iqr);
        let upper_bound = finite(q3 + self.config.iqr_multiplier * iqr);

        let outliers = series
            .iter()
            .filter(|p| p.value < lower_bound || p.value > upper_bound)
            .map(|p| OutlierPoint {
                timestamp: p.timestamp,
                value: p.value,
                is_high: p.value > upper_bound,
                is_low: p.value < lower_bound,
            })
            .collect();

        OutlierReport {
            outliers,
            q1,
            q3,
            iqr,
            lower_bound,
            upper_bound,
        }
    }
}
