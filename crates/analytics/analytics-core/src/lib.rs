//! Sensor Analytics Core
//!
//! Implementations of the sanitizer, the six analyzers, the engine that
//! composes them, and live monitoring with alerting.
//!
//! Every analyzer is a pure function of its configuration and a
//! [`SanitizedSeries`](analytics_spi::SanitizedSeries); nothing is cached
//! between calls.

mod alerting;
mod anomaly;
mod correlation;
mod engine;
pub mod math;
mod monitoring;
mod outliers;
mod percentiles;
pub mod sanitizer;
mod statistics;
mod trend;

pub use alerting::*;
pub use anomaly::*;
pub use correlation::*;
pub use engine::*;
pub use monitoring::*;
pub use outliers::*;
pub use percentiles::*;
pub use sanitizer::{coerce_value, sanitize, sanitize_raw};
pub use statistics::*;
pub use trend::*;
