//! Sanitized series.

use serde::{Deserialize, Serialize};

use super::point::DataPoint;

/// A series with every non-finite value removed, sorted ascending by timestamp.
///
/// The only way to build one is [`SanitizedSeries::from_points`], so every
/// analyzer receiving a `SanitizedSeries` can rely on both invariants.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SanitizedSeries {
    points: Vec<DataPoint>,
}

impl SanitizedSeries {
    /// Drop non-finite values and sort by timestamp.
    ///
    /// The sort is stable: readings sharing a timestamp keep their input order.
    pub fn from_points(points: impl IntoIterator<Item = DataPoint>) -> Self {
        let mut points: Vec<DataPoint> = points
            .into_iter()
            .filter(|p| p.value.is_finite())
            .collect();
        points.sort_by_key(|p| p.timestamp);
        Self { points }
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the series is empty.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Points in timestamp order.
    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    /// Values in timestamp order.
    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.value).collect()
    }

    /// Values sorted ascending.
    pub fn sorted_values(&self) -> Vec<f64> {
        let mut values = self.values();
        values.sort_by(f64::total_cmp);
        values
    }

    /// First point, if any.
    pub fn first(&self) -> Option<&DataPoint> {
        self.points.first()
    }

    /// Last point, if any.
    pub fn last(&self) -> Option<&DataPoint> {
        self.points.last()
    }

    /// Iterate over the points.
    pub fn iter(&self) -> std::slice::Iter<'_, DataPoint> {
        self.points.iter()
    }

    /// Consume the series, returning its points.
    pub fn into_points(self) -> Vec<DataPoint> {
        self.points
    }
}

impl<'a> IntoIterator for &'a SanitizedSeries {
    type Item = &'a DataPoint;
    type IntoIter = std::slice::Iter<'a, DataPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// A named sensor series for batch analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorSeries {
    /// Sensor name (e.g. "boiler-temperature").
    pub name: String,
    pub points: Vec<DataPoint>,
}

impl SensorSeries {
    /// Create a new named series.
    pub fn new(name: impl Into<String>, points: Vec<DataPoint>) -> Self {
        Self {
            name: name.into(),
            points,
        }
    }
}
