//! Trend analysis: moving average, linear regression and drift segmentation.
//!
//! Regression runs on `(days since first point, value)` pairs so slopes are
//! expressed in value units per day and the x values stay small.
//!
//! The segmentation is a heuristic drift detector, not a formal change-point
//! algorithm: the series is cut into fixed-size chunks and a chunk is flagged
//! when its own OLS slope departs from the global slope by more than a fixed
//! fraction of the global slope. Neither the chunk size nor the fraction has a
//! statistical basis, and a flagged chunk carries no significance level.

use analytics_api::{TrendConfig, TrendOptions};
use analytics_spi::{
    Analysis, ChangeSegment, DataPoint, Direction, SanitizedSeries, SeriesAnalyzer, TrendResult,
    MILLIS_PER_DAY,
};
use tracing::debug;

use crate::math::{least_squares, mean, r_squared, LinearFit};

/// Moving average, OLS trend line, R² and change segments.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrendAnalyzer {
    config: TrendConfig,
    options: TrendOptions,
}

impl TrendAnalyzer {
    /// Create a new analyzer with default options.
    pub fn new(config: TrendConfig) -> Self {
        Self {
            config,
            options: TrendOptions::default(),
        }
    }

    /// Replace the per-call options.
    pub fn with_options(mut self, options: TrendOptions) -> Self {
        self.options = options;
        self
    }

    /// Current options.
    pub fn options(&self) -> TrendOptions {
        self.options
    }

    /// Trailing simple moving average, one output point per input point.
    ///
    /// The window is clamped at the start of the series. Each window is
    /// averaged on its own rather than by a running sum, so a large reading
    /// leaving the window cannot take the precision of later averages with it.
    pub fn moving_average(&self, points: &[DataPoint]) -> Vec<DataPoint> {
        let window = self.config.moving_average_window(points.len());
        let values: Vec<f64> = points.iter().map(|p| p.value).collect();

        points
            .iter()
            .enumerate()
            .map(|(i, point)| {
                let start = (i + 1).saturating_sub(window);
                DataPoint::new(point.timestamp, mean(&values[start..=i]))
            })
            .collect()
    }

    /// OLS fit of value against days since the first point of `points`.
    pub fn fit(points: &[DataPoint]) -> LinearFit {
        let (xs, ys) = day_offsets(points);
        least_squares(&xs, &ys)
    }

    /// Chunks whose local slope diverges from `global_slope`.
    pub fn segments(&self, points: &[DataPoint], global_slope: f64) -> Vec<ChangeSegment> {
        let chunk_size = self.config.segment_chunk_size(points.len());
        let tolerance = self.config.segment_deviation_ratio * global_slope.abs();

        points
            .chunks(chunk_size)
            .filter(|chunk| chunk.len() >= 2)
            .filter_map(|chunk| {
                let local = Self::fit(chunk).slope;
                if (local - global_slope).abs() > tolerance {
                    Some(ChangeSegment {
                        start: chunk[0].timestamp,
                        end: chunk[chunk.len() - 1].timestamp,
                        slope: local,
                        direction: Direction::from_slope(local),
                    })
                } else {
                    None
                }
            })
            .collect()
    }
}

impl SeriesAnalyzer for TrendAnalyzer {
    type Output = Analysis<TrendResult>;

    fn name(&self) -> &'static str {
        "trend"
    }

    fn analyze(&self, series: &SanitizedSeries) -> Analysis<TrendResult> {
        let required = self.config.min_points.max(2);
        let n = series.len();
        if n < required {
            debug!(analyzer = self.name(), required, actual = n, "insufficient data");
            return Analysis::InsufficientData {
                required,
                actual: n,
            };
        }

        let points = series.points();
        let (xs, ys) = day_offsets(points);
        let fit = least_squares(&xs, &ys);
        let first = points[0];
        let last = points[n - 1];

        let moving_average = if self.options.moving_average {
            self.moving_average(points)
        } else {
            Vec::new()
        };
        let segments = if self.options.segments {
            self.segments(points, fit.slope)
        } else {
            Vec::new()
        };

        Analysis::Complete(TrendResult {
            moving_average,
            regression_line: [
                DataPoint::new(first.timestamp, fit.at(0.0)),
                DataPoint::new(last.timestamp, fit.at(xs[n - 1])),
            ],
            slope: fit.slope,
            intercept: fit.intercept,
            r_squared: r_squared(&xs, &ys, &fit),
            direction: Direction::from_slope(fit.slope),
            segments,
        })
    }
}

/// `(days since first point, value)` columns.
///
/// The offset is taken in `f64`: any two `i64` timestamps are at most
/// `2^64` ms apart, which the subtraction of `i64` values cannot hold.
fn day_offsets(points: &[DataPoint]) -> (Vec<f64>, Vec<f64>) {
    let origin = points.first().map_or(0.0, |p| p.timestamp as f64);
    points
        .iter()
        .map(|p| ((p.timestamp as f64 - origin) / MILLIS_PER_DAY, p.value))
        .unzip()
}
