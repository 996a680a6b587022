//! Sensor Analytics Facade
//!
//! Unified re-exports for the sensor analytics engine.
//!
//! This facade provides a single entry point to all analytics functionality:
//! - Data model, `Analysis` outcomes, errors and contracts from SPI
//! - Configuration types and builder from API
//! - The sanitizer, analyzers, `AnalyticsEngine` and `LiveMonitor` from Core
//!
//! ```rust
//! use analytics_facade::prelude::*;
//!
//! let readings: Vec<DataPoint> = (0..30)
//!     .map(|day| DataPoint::new(day * 86_400_000, 2.0 * day as f64 + 5.0))
//!     .collect();
//!
//! let engine = AnalyticsEngine::default();
//! let report = engine.analyze(&readings);
//! assert_eq!(report.statistics.count, 30);
//!
//! let trend = report.trend.complete().unwrap();
//! assert_eq!(trend.direction, Direction::Up);
//! ```

// Re-export everything from SPI
pub use analytics_spi::*;

// Re-export everything from API
pub use analytics_api::*;

// Re-export everything from Core
pub use analytics_core::*;

/// Prelude module for convenient imports
pub mod prelude {
    pub use analytics_api::{AnalyticsConfig, TrendOptions};
    pub use analytics_core::{AnalyticsEngine, LiveMonitor};
    pub use analytics_spi::{
        Analysis, AnalyticsError, CorrelationResult, DataPoint, Direction, MonitoringStream,
        RawPoint, Result, SanitizedSeries, SensorReport, SensorSeries, SeriesAnalyzer,
    };
}
