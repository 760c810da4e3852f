//! Quickstart example demonstrating basic usage of anofox-outliers.
//!
//! Run with: cargo run --example quickstart
//! Set RUST_LOG=warn to see each outlier as a log event.

use anofox_outliers::core::{Observation, TimeSeries};
use anofox_outliers::detection::{OutlierConfig, OutlierDetector};
use anofox_outliers::report::{emit, render_table, to_json};
use chrono::{Duration, NaiveDate};
use tracing_subscriber::EnvFilter;

fn main() -> anofox_outliers::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== anofox-outliers Quickstart ===\n");

    // 1. Daily series with a weekly pattern and a few injected anomalies
    let start = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
    let series: TimeSeries = (0..120)
        .map(|i| {
            let weekly = 5.0 * (2.0 * std::f64::consts::PI * i as f64 / 7.0).sin();
            let anomaly = match i {
                33 => 40.0,
                64 => -35.0,
                101 => 30.0,
                _ => 0.0,
            };
            Observation::new(start + Duration::days(i), 100.0 + weekly + anomaly)
        })
        .collect();
    println!("Created series with {} observations", series.len());

    // 2. Four-week window, 1.5 sigma band, report February onwards
    let config = OutlierConfig::default().start_date("2020-02-01");
    let detector = OutlierDetector::new(series, &config)?;

    let range = detector.date_range();
    println!(
        "Window: {}, sigma: {}, reporting {} to {}",
        detector.window_size(),
        detector.sigma(),
        range.start,
        range.end
    );

    // 3. Moving-average curve
    println!("\n--- Moving average (last 5 points) ---");
    let curve = detector.rolling_mean();
    let dates = detector.series().dates();
    for (date, mean) in dates.iter().zip(&curve).skip(curve.len() - 5) {
        if let Some(mean) = mean {
            println!("  {}: {:.4}", date, mean);
        }
    }

    // 4. All outliers, ignoring the date range
    println!("\n--- Whole series ---");
    for r in detector.find_outliers() {
        println!("  {} {:>10.4} (excess {:.4})", r.date, r.value, r.excess());
    }

    // 5. Tagged result restricted to the date range
    println!("\n--- Outliers in date range ---");
    let outcome = detector.get_outliers();
    print!("{}", render_table(&outcome));
    emit(&outcome);

    println!("\n--- JSON ---");
    println!("{}", to_json(&outcome)?);

    Ok(())
}
