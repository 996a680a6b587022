//! Performance benchmarks for the analytics engine

use std::hint::black_box;
use std::time::Instant;

use analytics_facade::prelude::*;

fn generate_data(n: usize) -> Vec<DataPoint> {
    (0..n)
        .map(|i| {
            let t = i as f64;
            DataPoint::new(i as i64 * 60_000, 100.0 + (t * 0.1).sin() * 10.0)
        })
        .collect()
}

fn bench<F, R>(name: &str, iterations: u32, mut f: F)
where
    F: FnMut() -> R,
{
    // Warmup
    for _ in 0..3 {
        black_box(f());
    }

    let start = Instant::now();
    for _ in 0..iterations {
        black_box(f());
    }
    let elapsed = start.elapsed();
    let per_iter = elapsed / iterations;

    println!(
        "{:30} {:>10.2?} total, {:>10.2?}/iter ({} iters)",
        name, elapsed, per_iter, iterations
    );
}

fn main() {
    println!("=== Analytics Performance Benchmarks ===\n");

    let engine = AnalyticsEngine::default();
    let data_1k = generate_data(1_000);
    let data_10k = generate_data(10_000);
    let data_100k = generate_data(100_000);

    println!("--- Single analyzers (10K) ---");
    bench("sanitize", 1000, || engine.sanitize(&data_10k));
    bench("statistics", 1000, || engine.statistics(&data_10k));
    bench("percentiles", 1000, || engine.percentiles(&data_10k));
    bench("outliers", 1000, || engine.outliers(&data_10k));
    bench("anomalies", 1000, || engine.anomalies(&data_10k));
    bench("trend", 100, || engine.trend(&data_10k, TrendOptions::default()));
    bench("trend (regression only)", 100, || {
        engine.trend(&data_10k, TrendOptions::regression_only())
    });
    bench("autocorrelation", 100, || engine.correlate(&data_10k, None));
    bench("cross-correlation", 100, || {
        engine.correlate(&data_10k, Some(&data_10k))
    });

    println!("\n--- Full report ---");
    bench("analyze (1K)", 1000, || engine.analyze(&data_1k));
    bench("analyze (10K)", 100, || engine.analyze(&data_10k));
    bench("analyze (100K)", 3, || engine.analyze(&data_100k));

    println!("\n--- Batch ---");
    let sensors: Vec<SensorSeries> = (0..32)
        .map(|s| SensorSeries::new(format!("sensor-{s}"), data_10k.clone()))
        .collect();
    bench("analyze_batch (32 x 10K)", 10, || engine.analyze_batch(&sensors));

    println!("\n--- Live monitor ---");
    bench("push 1K into 500 window", 10, || {
        let mut monitor = LiveMonitor::with_engine(engine.clone());
        for point in &data_1k {
            black_box(monitor.push(*point));
        }
        monitor
    });
}
