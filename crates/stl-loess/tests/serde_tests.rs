#![cfg(all(feature = "dev", feature = "serde"))]
//! Tests for serialization of configuration and output types.

use stl_loess::internals::api::{LoessConfig, PolynomialDegree, StlBuilder as Stl};
use stl_loess::internals::engine::output::Decomposition;
use stl_loess::internals::evaluation::stats::FitStats;

/// Test a decomposition survives a JSON round trip.
#[test]
fn test_decomposition_json() {
    let data: Vec<f64> = (0..24).map(|i| (i % 4) as f64 + 0.25 * i as f64).collect();
    let d = Stl::new()
        .period(4)
        .seasonal_width(7)
        .build()
        .unwrap()
        .decompose(&data)
        .unwrap();

    let json = serde_json::to_string(&d).unwrap();
    assert!(json.contains("\"seasonal\""));

    let back: Decomposition<f64> = serde_json::from_str(&json).unwrap();
    assert_eq!(back.data(), d.data());
    assert_eq!(back.weights(), d.weights());
    assert_eq!(back.len(), d.len());
}

/// Test the LOESS configuration and degree serialization.
#[test]
fn test_config_json() {
    let config = LoessConfig::new(8, 2, Some(3)).unwrap();
    let json = serde_json::to_string(&config).unwrap();
    let back: LoessConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, config);

    assert_eq!(
        serde_json::to_string(&PolynomialDegree::Constant).unwrap(),
        "\"Constant\""
    );
}

/// Test that summary statistics serialize.
#[test]
fn test_stats_json() {
    let data = [1.0, 3.0, 2.0, 4.0];
    let trend = [1.5, 2.0, 2.5, 3.0];
    let seasonal = [-0.5, 0.5, -0.5, 0.5];
    let residual = [0.0, 0.5, 0.0, 0.5];
    let stats = FitStats::compute(&data, &trend, &seasonal, &residual);

    let value = serde_json::to_value(&stats).unwrap();
    assert_eq!(value["sample_size"], 4);
}
