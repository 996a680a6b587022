//! Z-score anomaly result types.

use serde::{Deserialize, Serialize};

use super::point::DataPoint;

/// Side of the mean a reading lies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnomalyType {
    High,
    Low,
}

/// A reading with its Z-score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnomalyPoint {
    pub timestamp: i64,
    pub value: f64,
    /// Absolute distance from the mean in standard deviations.
    pub z_score: f64,
    pub is_anomaly: bool,
    pub anomaly_type: AnomalyType,
}

impl AnomalyPoint {
    /// The underlying reading.
    pub fn point(&self) -> DataPoint {
        DataPoint::new(self.timestamp, self.value)
    }
}

/// Z-score classification of every point in a series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnomalyReport {
    /// Every point, scored, in series order.
    pub points: Vec<AnomalyPoint>,
    pub anomaly_count: usize,
    /// `100 * anomaly_count / n`.
    pub anomaly_percentage: f64,
    pub mean: f64,
    /// Population standard deviation.
    pub std_dev: f64,
    pub threshold: f64,
    pub upper_bound: f64,
    pub lower_bound: f64,
}

impl AnomalyReport {
    /// Points flagged as anomalous.
    pub fn anomalies(&self) -> impl Iterator<Item = &AnomalyPoint> {
        self.points.iter().filter(|p| p.is_anomaly)
    }

    /// Series indices of the flagged points.
    pub fn anomaly_indices(&self) -> Vec<usize> {
        self.points
            .iter()
            .enumerate()
            .filter_map(|(i, p)| if p.is_anomaly { Some(i) } else { None })
            .collect()
    }
}
