//! Alert construction for anomalous live readings.

use analytics_spi::{Alert, AlertSeverity, AnomalyPoint};

/// Create an alert for an anomalous reading.
///
/// Severity is critical when the Z-score exceeds `critical_z_score`.
pub fn create_alert(point: &AnomalyPoint, critical_z_score: f64) -> Alert {
    AlertBuilder::new(point)
        .critical_z_score(critical_z_score)
        .build()
}

fn default_message(point: &AnomalyPoint) -> String {
    format!(
        "Anomaly detected: value={:.4}, z_score={:.4}",
        point.value, point.z_score
    )
}

/// Alert builder for custom alert creation.
#[derive(Debug, Clone)]
pub struct AlertBuilder {
    point: AnomalyPoint,
    critical_z_score: f64,
    severity: Option<AlertSeverity>,
    message: Option<String>,
}

impl AlertBuilder {
    /// Create a new alert builder.
    pub fn new(point: &AnomalyPoint) -> Self {
        Self {
            point: *point,
            critical_z_score: 5.0,
            severity: None,
            message: None,
        }
    }

    /// Z-score above which the derived severity is critical.
    pub fn critical_z_score(mut self, critical_z_score: f64) -> Self {
        self.critical_z_score = critical_z_score;
        self
    }

    /// Set custom severity.
    pub fn severity(mut self, severity: AlertSeverity) -> Self {
        self.severity = Some(severity);
        self
    }

    /// Set custom message.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Build the alert.
    pub fn build(self) -> Alert {
        let severity = self.severity.unwrap_or_else(|| {
            if self.point.z_score > self.critical_z_score {
                AlertSeverity::Critical
            } else {
                AlertSeverity::Warning
            }
        });
        let message = self
            .message
            .unwrap_or_else(|| default_message(&self.point));

        Alert {
            timestamp: self.point.timestamp,
            value: self.point.value,
            z_score: self.point.z_score,
            severity,
            message,
        }
    }
}
