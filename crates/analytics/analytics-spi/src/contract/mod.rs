//! Contract definitions for sensor analytics.
//!
//! This module contains trait definitions that analyzers must implement.

mod monitoring_stream;
mod series_analyzer;

pub use monitoring_stream::MonitoringStream;
pub use series_analyzer::SeriesAnalyzer;
