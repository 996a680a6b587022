//! Sensor Analytics Service Provider Interface
//!
//! Defines the data model, result types, errors and analyzer contracts
//! shared by the analytics engine and its callers.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::{MonitoringStream, SeriesAnalyzer};
pub use error::{AnalyticsError, Result};
pub use model::{
    Alert, AlertSeverity, Analysis, AnomalyPoint, AnomalyReport, AnomalyType, AutoCorrelation,
    ChangeSegment, CorrelationResult, CrossCorrelation, DataPoint, Direction, LagCorrelation,
    OutlierPoint, OutlierReport, PairedPoint, PercentileSet, Point, RawPoint, SanitizedSeries,
    SensorReport, SensorSeries, StatisticsSummary, TrendResult, MILLIS_PER_DAY, PERCENTILE_RANKS,
};
