//! Data models for sensor analytics.
//!
//! This module contains the input points, the sanitized series and every
//! derived result type produced by the analyzers.

mod alert;
mod analysis;
mod anomaly;
mod correlation;
mod outlier;
mod point;
mod report;
mod series;
mod statistics;
mod trend;

pub use alert::{Alert, AlertSeverity};
pub use analysis::Analysis;
pub use anomaly::{AnomalyPoint, AnomalyReport, AnomalyType};
pub use correlation::{
    AutoCorrelation, CorrelationResult, CrossCorrelation, LagCorrelation, PairedPoint, Point,
};
pub use outlier::{OutlierPoint, OutlierReport};
pub use point::{DataPoint, RawPoint, MILLIS_PER_DAY};
pub use report::SensorReport;
pub use series::{SanitizedSeries, SensorSeries};
pub use statistics::{Direction, PercentileSet, StatisticsSummary, PERCENTILE_RANKS};
pub use trend::{ChangeSegment, TrendResult};
