//! Live monitoring trait definition.

use crate::model::{Alert, DataPoint};

/// Real-time monitoring over a bounded window of readings.
pub trait MonitoringStream: Send + Sync {
    /// Push a new reading and check it for anomalies.
    fn push(&mut self, point: DataPoint) -> Option<Alert>;

    /// Current window contents in arrival order.
    fn buffer(&self) -> &[DataPoint];

    /// Reset the monitor state.
    fn reset(&mut self);
}
