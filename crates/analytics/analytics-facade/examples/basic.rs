//! Basic example: analyze one sensor window and watch a live feed
//!
//! Run with: cargo run --example basic -p analytics-facade
//! Set RUST_LOG=analytics_core=debug for per-analyzer logging.

use analytics_facade::prelude::*;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const HOUR: i64 = 3_600_000;

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "analytics_core=info".into()),
        )
        .init();

    println!("=== Sensor Analytics Basic Example ===\n");

    // Two weeks of hourly humidity readings with a daily cycle
    let mut readings: Vec<DataPoint> = (0..336)
        .map(|h| {
            let daily = ((h % 24) as f64 / 24.0 * std::f64::consts::TAU).sin() * 4.0;
            DataPoint::new(1_700_000_000_000 + h * HOUR, 55.0 + h as f64 * 0.01 + daily)
        })
        .collect();
    readings[90].value = 92.0;
    readings[200].value = f64::NAN;

    let engine = AnalyticsEngine::new(AnalyticsConfig::default())?;
    let report = engine.analyze(&readings);

    println!("1. Descriptive statistics");
    println!(
        "   n={} dropped={} avg={:.2} std={:.2} trend={:?}\n",
        report.statistics.count,
        report.dropped_points,
        report.statistics.avg,
        report.statistics.std_dev,
        report.statistics.trend
    );

    println!("2. Percentiles");
    for (rank, value) in report.percentiles.iter() {
        println!("   p{rank:<2} = {value:.2}");
    }

    println!("\n3. IQR outliers: {}", report.outliers.count());
    for outlier in &report.outliers.outliers {
        println!("   t={} value={:.2} high={}", outlier.timestamp, outlier.value, outlier.is_high);
    }

    println!("\n4. Z-score anomalies");
    match &report.anomalies {
        Analysis::Complete(anomalies) => println!(
            "   {} anomalies ({:.2}%) at indices {:?}",
            anomalies.anomaly_count,
            anomalies.anomaly_percentage,
            anomalies.anomaly_indices()
        ),
        other => println!("   skipped: {other:?}"),
    }

    println!("\n5. Trend");
    if let Analysis::Complete(trend) = &report.trend {
        println!(
            "   slope={:.4}/day r2={:.4} direction={:?} segments={}",
            trend.slope,
            trend.r_squared,
            trend.direction,
            trend.segments.len()
        );
    }

    println!("\n6. Autocorrelation");
    if let Analysis::Complete(CorrelationResult::Auto(auto)) = &report.autocorrelation {
        for lag in auto.significant_lags.iter().take(3) {
            println!("   lag {:>2}: {:.3}", lag.lag, lag.correlation);
        }
    }

    println!("\n7. Live monitoring");
    let mut monitor = LiveMonitor::with_engine(engine);
    for point in &readings {
        if let Some(alert) = monitor.push(*point) {
            println!("   [{:?}] {}", alert.severity, alert.message);
        }
    }

    Ok(())
}
