//! Nearest-rank percentile estimation.

use analytics_spi::{PercentileSet, SanitizedSeries, SeriesAnalyzer};

/// Nearest-rank value for percentile `p` of an ascending slice.
///
/// Index `ceil(p / 100 * n) - 1`, clamped to the slice. No interpolation.
/// 0 for an empty slice.
pub fn nearest_rank(sorted: &[f64], p: f64) -> f64 {
    let n = sorted.len();
    if n == 0 {
        return 0.0;
    }
    // p * n first keeps integer ranks exact
    let rank = (p * n as f64 / 100.0).ceil();
    let index = if rank < 1.0 {
        0
    } else {
        ((rank as usize) - 1).min(n - 1)
    };
    sorted[index]
}

/// Percentiles 25, 50, 75, 90, 95 and 99 by nearest rank.
#[derive(Debug, Clone, Copy, Default)]
pub struct PercentileEstimator;

impl PercentileEstimator {
    /// Create a new estimator.
    pub fn new() -> Self {
        Self
    }
}

impl SeriesAnalyzer for PercentileEstimator {
    type Output = PercentileSet;

    fn name(&self) -> &'static str {
        "percentiles"
    }

    fn analyze(&self, series: &SanitizedSeries) -> PercentileSet {
        let sorted = series.sorted_values();
        PercentileSet {
            p25: nearest_rank(&sorted, 25.0),
            p50: nearest_rank(&sorted, 50.0),
            p75: nearest_rank(&sorted, 75.0),
            p90: nearest_rank(&sorted, 90.0),
            p95: nearest_rank(&sorted, 95.0),
            p99: nearest_rank(&sorted, 99.0),
        }
    }
}
