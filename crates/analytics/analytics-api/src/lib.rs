//! Sensor Analytics API
//!
//! Configuration types and builders for the analytics engine.
//!
//! Every threshold the analyzers use lives here as a named field, so it can
//! be tuned, serialized and tested on its own.

mod builder;
mod config;

pub use builder::AnalyticsConfigBuilder;
pub use config::{
    AnalyticsConfig, AnomalyConfig, CorrelationConfig, MonitorConfig, OutlierConfig,
    StatisticsConfig, TrendConfig, TrendOptions,
};

// Re-export SPI types
pub use analytics_spi::{
    Alert, AlertSeverity, Analysis, AnalyticsError, AnomalyPoint, AnomalyReport, AnomalyType,
    AutoCorrelation, ChangeSegment, CorrelationResult, CrossCorrelation, DataPoint, Direction,
    LagCorrelation, MonitoringStream, OutlierPoint, OutlierReport, PairedPoint, PercentileSet,
    Point, RawPoint, Result, SanitizedSeries, SensorReport, SensorSeries, SeriesAnalyzer,
    StatisticsSummary, TrendResult, MILLIS_PER_DAY, PERCENTILE_RANKS,
};
