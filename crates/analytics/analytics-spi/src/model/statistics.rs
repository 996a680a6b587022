//! Descriptive statistics and percentile types.

use serde::{Deserialize, Serialize};

/// Ranks reported in a [`PercentileSet`].
pub const PERCENTILE_RANKS: [u32; 6] = [25, 50, 75, 90, 95, 99];

/// Direction of a trend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    #[default]
    Neutral,
}

impl Direction {
    /// Direction from the sign of a slope.
    pub fn from_slope(slope: f64) -> Self {
        if slope > 0.0 {
            Direction::Up
        } else if slope < 0.0 {
            Direction::Down
        } else {
            Direction::Neutral
        }
    }
}

/// Descriptive statistics of a series.
///
/// All fields are zero and the trend is neutral for an empty series.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct StatisticsSummary {
    pub min: f64,
    pub max: f64,
    pub avg: f64,
    pub median: f64,
    /// Population standard deviation.
    pub std_dev: f64,
    pub count: usize,
    /// Second-half mean against first-half mean.
    pub trend: Direction,
}

/// Nearest-rank percentiles.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PercentileSet {
    pub p25: f64,
    pub p50: f64,
    pub p75: f64,
    pub p90: f64,
    pub p95: f64,
    pub p99: f64,
}

impl PercentileSet {
    /// Value for one of the [`PERCENTILE_RANKS`].
    pub fn get(&self, rank: u32) -> Option<f64> {
        match rank {
            25 => Some(self.p25),
            50 => Some(self.p50),
            75 => Some(self.p75),
            90 => Some(self.p90),
            95 => Some(self.p95),
            99 => Some(self.p99),
            _ => None,
        }
    }

    /// `(rank, value)` pairs in ascending rank order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, f64)> + '_ {
        PERCENTILE_RANKS
            .iter()
            .filter_map(move |&rank| self.get(rank).map(|value| (rank, value)))
    }
}
