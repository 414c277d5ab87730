#![cfg(feature = "dev")]
//! Tests for the prelude module.
//!
//! These tests verify that the prelude provides a one-stop import for
//! common STL usage.

use stl_loess::prelude::*;

/// Test a complete workflow with prelude imports only.
#[test]
fn test_prelude_workflow() {
    let data: Vec<f64> = (0..48).map(|i| (i % 12) as f64 + 0.1 * i as f64).collect();

    let stl = Stl::new().period(12).seasonal_width(7).robust().build().unwrap();
    let decomposition: Decomposition<f64> = stl.decompose(&data).unwrap();
    assert_eq!(decomposition.len(), 48);

    let stats: FitStats<f64> = decomposition.fit_stats();
    assert_eq!(stats.sample_size, 48);
}

/// Test that degree variants are importable unqualified.
#[test]
fn test_prelude_degrees() {
    let config = LoessConfig::new(7, 2, None).unwrap();
    assert_eq!(config.degree(), Quadratic);
    assert_ne!(Constant, Linear);

    let built: Result<LoessConfig, StlError> = LoessConfigBuilder::new().width(5).build();
    assert!(built.is_ok());
}

/// Test the low-level smoothers through the prelude.
#[test]
fn test_prelude_smoothers() {
    let data: Vec<f64> = (0..20).map(|i| i as f64).collect();
    let config = LoessConfig::new(5, 1, None).unwrap();

    let smoothed = WindowedSmoother::new(&data, &config, None).smooth();
    assert_eq!(smoothed.len(), 20);

    let mut interp = LocalRegressionInterpolator::from_config(&data, &config, None);
    assert!(interp.smooth_one_point(3.0, 1, 5).is_some());

    let mut cyclic = CyclicSubSeriesSmoother::<f64>::new(config, 4);
    let mut extended = vec![0.0; cyclic.extended_len(data.len())];
    cyclic.smooth_seasonal(&data, &mut extended, None);

    let periodic = periodic_decomposition(&data, 4).unwrap();
    let robust = robust_periodic_decomposition(&data, 4).unwrap();
    assert_eq!(periodic.len(), robust.len());
    assert_eq!(StlError::EmptyInput.kind(), ErrorKind::Dimension);
}
