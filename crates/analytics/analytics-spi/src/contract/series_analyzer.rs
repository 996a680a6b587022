//! Series analyzer trait definition.

use crate::model::SanitizedSeries;

/// A pure analysis over one sanitized series.
///
/// Implementations hold only configuration, so one instance can serve any
/// number of series from any thread. Analysis never fails: inputs below an
/// analyzer's minimum size produce a sentinel inside `Output`.
pub trait SeriesAnalyzer: Send + Sync {
    /// Result type.
    type Output;

    /// Analyzer name, used in log fields.
    fn name(&self) -> &'static str;

    /// Analyze a sanitized series.
    fn analyze(&self, series: &SanitizedSeries) -> Self::Output;
}
