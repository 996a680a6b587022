//! Descriptive statistics.

use analytics_api::StatisticsConfig;
use analytics_spi::{Direction, SanitizedSeries, SeriesAnalyzer, StatisticsSummary};

use crate::math::{mean, median_of_sorted, population_std_dev};

/// Min, max, mean, median, population standard deviation and a coarse trend.
#[derive(Debug, Clone, Copy, Default)]
pub struct StatisticsAnalyzer {
    config: StatisticsConfig,
}

impl StatisticsAnalyzer {
    /// Create a new analyzer.
    pub fn new(config: StatisticsConfig) -> Self {
        Self { config }
    }

    /// Compare the mean of the second half (by index) with the first half.
    ///
    /// The change must exceed `trend_change_ratio * |first half mean|`.
    pub fn half_trend(&self, values: &[f64]) -> Direction {
        let n = values.len();
        if n < 2 {
            return Direction::Neutral;
        }
        let first = mean(&values[..n / 2]);
        let second = mean(&values[n / 2..]);
        let band = self.config.trend_change_ratio * first.abs();

        if second - first > band {
            Direction::Up
        } else if first - second > band {
            Direction::Down
        } else {
            Direction::Neutral
        }
    }
}

impl SeriesAnalyzer for StatisticsAnalyzer {
    type Output = StatisticsSummary;

    fn name(&self) -> &'static str {
        "statistics"
    }

    fn analyze(&self, series: &SanitizedSeries) -> StatisticsSummary {
        if series.is_empty() {
            return StatisticsSummary::default();
        }

        let values = series.values();
        let sorted = series.sorted_values();
        let avg = mean(&values);

        StatisticsSummary {
            min: sorted[0],
            max: sorted[sorted.len() - 1],
            avg,
            median: median_of_sorted(&sorted),
            std_dev: population_std_dev(&values, avg),
            count: values.len(),
            trend: self.half_trend(&values),
        }
    }
}
