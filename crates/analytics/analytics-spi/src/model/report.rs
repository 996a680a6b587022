//! Full pipeline report.

use serde::{Deserialize, Serialize};

use super::analysis::Analysis;
use super::anomaly::AnomalyReport;
use super::correlation::CorrelationResult;
use super::outlier::OutlierReport;
use super::statistics::{PercentileSet, StatisticsSummary};
use super::trend::TrendResult;

/// Every single-series analysis of one sensor window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorReport {
    /// Points that survived sanitization.
    pub sanitized_points: usize,
    /// Points dropped for non-finite values.
    pub dropped_points: usize,
    pub statistics: StatisticsSummary,
    pub percentiles: PercentileSet,
    pub outliers: OutlierReport,
    pub anomalies: Analysis<AnomalyReport>,
    pub trend: Analysis<TrendResult>,
    pub autocorrelation: Analysis<CorrelationResult>,
}
