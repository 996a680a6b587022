//! Error types for sensor analytics.
//!
//! This module contains error types and the Result alias.

mod analytics_error;

pub use analytics_error::{AnalyticsError, Result};
