//! Input sanitization.
//!
//! Every analyzer runs on a [`SanitizedSeries`]: finite values only, sorted
//! ascending by timestamp.

use analytics_spi::{DataPoint, RawPoint, SanitizedSeries};
use serde_json::Value;
use tracing::debug;

/// Drop non-finite readings and sort by timestamp.
pub fn sanitize(points: &[DataPoint]) -> SanitizedSeries {
    let series = SanitizedSeries::from_points(points.iter().copied());
    log_dropped(points.len(), series.len());
    series
}

/// Coerce raw readings to numbers, then sanitize.
pub fn sanitize_raw(points: &[RawPoint]) -> SanitizedSeries {
    let coerced = points.iter().filter_map(|p| {
        coerce_value(&p.value).map(|value| DataPoint::new(p.timestamp, value))
    });
    let series = SanitizedSeries::from_points(coerced);
    log_dropped(points.len(), series.len());
    series
}

/// Numeric value of a raw reading.
///
/// Numbers pass through, strings are trimmed and parsed, booleans become 1
/// or 0. Null, arrays, objects, unparseable strings and non-finite results
/// yield `None`.
pub fn coerce_value(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }?;
    number.is_finite().then_some(number)
}

fn log_dropped(received: usize, kept: usize) {
    if kept < received {
        debug!(received, kept, dropped = received - kept, "dropped non-finite readings");
    }
}
