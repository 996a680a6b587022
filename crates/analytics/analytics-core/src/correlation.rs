//! Cross-correlation and autocorrelation.

use std::collections::HashMap;

use analytics_api::CorrelationConfig;
use analytics_spi::{
    Analysis, AutoCorrelation, CorrelationResult, CrossCorrelation, LagCorrelation, PairedPoint,
    Point, SanitizedSeries, SeriesAnalyzer,
};
use tracing::debug;

use crate::math::{least_squares, magnitude_scale, mean, pearson};

/// Pearson cross-correlation of two series, or autocorrelation of one.
///
/// As a [`SeriesAnalyzer`] it runs in autocorrelation mode; use
/// [`CorrelationAnalyzer::correlate`] to pick the mode from an optional
/// second series.
#[derive(Debug, Clone, Copy, Default)]
pub struct CorrelationAnalyzer {
    config: CorrelationConfig,
}

impl CorrelationAnalyzer {
    /// Create a new analyzer.
    pub fn new(config: CorrelationConfig) -> Self {
        Self { config }
    }

    /// Cross mode when `secondary` is present, auto mode otherwise.
    pub fn correlate(
        &self,
        primary: &SanitizedSeries,
        secondary: Option<&SanitizedSeries>,
    ) -> Analysis<CorrelationResult> {
        match secondary {
            Some(secondary) => self.cross(primary, secondary),
            None => self.auto(primary),
        }
    }

    /// Readings of both series at timestamps present in both, in primary order.
    ///
    /// Timestamps must match exactly. When the secondary repeats a timestamp
    /// its first reading is used.
    pub fn align(primary: &SanitizedSeries, secondary: &SanitizedSeries) -> Vec<PairedPoint> {
        let mut lookup: HashMap<i64, f64> = HashMap::with_capacity(secondary.len());
        for point in secondary {
            lookup.entry(point.timestamp).or_insert(point.value);
        }

        primary
            .iter()
            .filter_map(|p| {
                lookup.get(&p.timestamp).map(|&y| PairedPoint {
                    timestamp: p.timestamp,
                    x: p.value,
                    y,
                })
            })
            .collect()
    }

    /// Pearson correlation of two series aligned by timestamp, with the OLS
    /// line of secondary on primary.
    pub fn cross(
        &self,
        primary: &SanitizedSeries,
        secondary: &SanitizedSeries,
    ) -> Analysis<CorrelationResult> {
        let points = Self::align(primary, secondary);
        if points.len() < self.config.min_points {
            debug!(
                required = self.config.min_points,
                actual = points.len(),
                "insufficient overlap"
            );
            return Analysis::InsufficientOverlap {
                required: self.config.min_points,
                actual: points.len(),
            };
        }

        let (xs, ys): (Vec<f64>, Vec<f64>) = points.iter().map(|p| (p.x, p.y)).unzip();
        let fit = least_squares(&xs, &ys);
        let min_x = xs.iter().copied().fold(f64::INFINITY, f64::min);
        let max_x = xs.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        Analysis::Complete(CorrelationResult::Cross(CrossCorrelation {
            correlation: pearson(&xs, &ys),
            slope: fit.slope,
            intercept: fit.intercept,
            trendline: [
                Point::new(min_x, fit.at(min_x)),
                Point::new(max_x, fit.at(max_x)),
            ],
            points,
        }))
    }

    /// Autocorrelation at lags `0..=min(max_lag, n / lag_divisor)`.
    pub fn auto(&self, series: &SanitizedSeries) -> Analysis<CorrelationResult> {
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
        let max_lag = self.config.lag_limit(n).min(n - 1);
        let lags: Vec<LagCorrelation> = (0..=max_lag)
            .map(|lag| LagCorrelation {
                lag,
                correlation: autocorrelation(&values, lag),
            })
            .collect();

        let mut significant_lags: Vec<LagCorrelation> = lags
            .iter()
            .filter(|l| l.lag > 0 && l.correlation.abs() > self.config.significance)
            .copied()
            .collect();
        significant_lags.sort_by(|a, b| b.correlation.abs().total_cmp(&a.correlation.abs()));

        Analysis::Complete(CorrelationResult::Auto(AutoCorrelation {
            lags,
            significant_lags,
        }))
    }
}

impl SeriesAnalyzer for CorrelationAnalyzer {
    type Output = Analysis<CorrelationResult>;

    fn name(&self) -> &'static str {
        "autocorrelation"
    }

    fn analyze(&self, series: &SanitizedSeries) -> Analysis<CorrelationResult> {
        self.auto(series)
    }
}

/// Autocorrelation of `values` at `lag`, normalized by the lag-0 sum of squares.
///
/// Lag 0 is exactly 1; a constant series gives 0 at every other lag.
pub fn autocorrelation(values: &[f64], lag: usize) -> f64 {
    if lag == 0 {
        return 1.0;
    }
    let n = values.len();
    if lag >= n {
        return 0.0;
    }
    let scale = magnitude_scale(values);
    let m = mean(values) / scale;
    let centred: Vec<f64> = values.iter().map(|x| x / scale - m).collect();
    let denominator: f64 = centred.iter().map(|d| d * d).sum();
    if denominator == 0.0 {
        return 0.0;
    }
    let numerator: f64 = centred[..n - lag]
        .iter()
        .zip(&centred[lag..])
        .map(|(a, b)| a * b)
        .sum();
    numerator / denominator
}
