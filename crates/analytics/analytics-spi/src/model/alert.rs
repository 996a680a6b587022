//! Alert types for live monitoring.

use serde::{Deserialize, Serialize};

/// Alert severity levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlertSeverity {
    Warning,
    Critical,
}

/// An alert raised when a live reading is anomalous.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    /// Timestamp of the offending reading.
    pub timestamp: i64,
    pub value: f64,
    pub z_score: f64,
    pub severity: AlertSeverity,
    pub message: String,
}
