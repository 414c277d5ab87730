#![cfg(feature = "dev")]
//! Tests for bisquare robustness weights.
//!
//! ## Test Organization
//!
//! 1. **Bisquare Weight** - Thresholds and shape
//! 2. **Residual Weights** - Scale estimation from components
//! 3. **Edge Cases** - Zero scale

use approx::assert_relative_eq;

use stl_loess::internals::algorithms::robustness::{bisquare_weight, compute_robustness_weights};

// ============================================================================
// Bisquare Weight Tests
// ============================================================================

/// Test the bisquare weight at and around its cutoffs.
#[test]
fn test_bisquare_thresholds() {
    let scale = 6.0f64;

    assert_eq!(bisquare_weight(0.0, scale), 1.0);
    assert_eq!(bisquare_weight(0.005, scale), 1.0);
    assert_relative_eq!(bisquare_weight(3.0, scale), 0.5625);
    assert!(bisquare_weight(5.99, scale) > 0.0);
    assert_eq!(bisquare_weight(5.995, scale), 0.0);
    assert_eq!(bisquare_weight(100.0, scale), 0.0);
}

/// Test that the weight depends only on the residual magnitude.
#[test]
fn test_bisquare_symmetric() {
    for r in [0.5f64, 1.0, 2.5, 4.0] {
        assert_eq!(bisquare_weight(r, 6.0), bisquare_weight(-r, 6.0));
    }
}

/// Test that weights decrease with the residual magnitude.
#[test]
fn test_bisquare_monotone() {
    let mut prev = 1.0f64;
    for k in 0..60 {
        let w = bisquare_weight(k as f64 * 0.1, 6.0);
        assert!(w <= prev);
        assert!((0.0..=1.0).contains(&w));
        prev = w;
    }
}

// ============================================================================
// Residual Weight Tests
// ============================================================================

/// Test weights computed from data, trend and seasonal components.
///
/// Residuals are 1, 2, 3, 4 and 100, so the scale is `6 * 3 = 18`.
#[test]
fn test_compute_robustness_weights() {
    let data = vec![1.0f64, 2.0, 3.0, 4.0, 100.0];
    let trend = vec![0.0f64; 5];
    let seasonal = vec![0.0f64; 5];
    let mut weights = vec![1.0f64; 5];
    let mut scratch = vec![0.0f64; 5];

    let scale = compute_robustness_weights(&data, &trend, &seasonal, &mut weights, &mut scratch);

    assert_relative_eq!(scale, 18.0);
    assert_eq!(weights[4], 0.0);
    assert_relative_eq!(weights[2], (35.0f64 / 36.0).powi(2), epsilon = 1e-12);
    assert!(weights[0] > weights[1] && weights[1] > weights[2] && weights[2] > weights[3]);
}

/// Test that residuals are taken after removing both components.
#[test]
fn test_weights_use_both_components() {
    let data = vec![5.0f64, 7.0, 5.0, 7.0, 5.0, 7.0];
    let trend = vec![6.0f64; 6];
    let seasonal = vec![-1.0f64, 1.0, -1.0, 1.0, -1.0, 1.0];
    let mut weights = vec![0.5f64; 6];
    let mut scratch = vec![0.0f64; 6];

    let scale = compute_robustness_weights(&data, &trend, &seasonal, &mut weights, &mut scratch);

    assert_eq!(scale, 0.0);
    assert!(weights.iter().all(|&w| w == 1.0));
}

// ============================================================================
// Edge Case Tests
// ============================================================================

/// Test that a zero scale keeps weight only for exact fits.
#[test]
fn test_zero_scale() {
    assert_eq!(bisquare_weight(0.0f64, 0.0), 1.0);
    assert_eq!(bisquare_weight(1e-9f64, 0.0), 0.0);

    // Median residual is zero, so the single nonzero residual is rejected
    let data = vec![0.0f64, 0.0, 0.0, 0.0, 3.0];
    let zeros = vec![0.0f64; 5];
    let mut weights = vec![1.0f64; 5];
    let mut scratch = vec![0.0f64; 5];
    let scale = compute_robustness_weights(&data, &zeros, &zeros, &mut weights, &mut scratch);

    assert_eq!(scale, 0.0);
    assert_eq!(weights, vec![1.0, 1.0, 1.0, 1.0, 0.0]);
}
