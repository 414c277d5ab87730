#![cfg(feature = "dev")]
//! Tests for whole-series LOESS smoothing.
//!
//! These tests verify the windowed smoother used for the trend, low-pass
//! and cycle-subseries stages:
//! - Layout selection (global, sliding, strided)
//! - Knot placement and window bounds
//! - Linear interpolation between strided fits
//! - Fallback to raw values when a fit fails
//!
//! ## Test Organization
//!
//! 1. **Layout Selection**
//! 2. **Knot Windows**
//! 3. **Smoothing Results**
//! 4. **Edge Cases**

use approx::assert_relative_eq;

use stl_loess::internals::algorithms::smoother::{WindowLayout, WindowedSmoother, knot_windows};
use stl_loess::internals::api::LoessConfig;
use stl_loess::internals::primitives::window::Window;

fn config(width: usize, degree: usize, jump: Option<usize>) -> LoessConfig {
    LoessConfig::new(width, degree, jump).unwrap()
}

// ============================================================================
// Layout Selection Tests
// ============================================================================

/// Test layout selection for each regime.
#[test]
fn test_layout_selection() {
    assert_eq!(WindowLayout::select(1, 3, 1), WindowLayout::Single);
    assert_eq!(WindowLayout::select(10, 11, 1), WindowLayout::Global);
    assert_eq!(WindowLayout::select(10, 10, 3), WindowLayout::Global);
    assert_eq!(WindowLayout::select(10, 3, 1), WindowLayout::Sliding);
    assert_eq!(WindowLayout::select(10, 3, 2), WindowLayout::Strided);
}

/// Test that a jump beyond the series length is clamped.
#[test]
fn test_layout_large_jump_clamped() {
    assert_eq!(WindowLayout::select(10, 3, 50), WindowLayout::Strided);
    assert_eq!(WindowLayout::select(2, 1, 50), WindowLayout::Sliding);
}

// ============================================================================
// Knot Window Tests
// ============================================================================

/// Test sliding windows: fixed at the start, centred inside, fixed at the end.
#[test]
fn test_sliding_knot_windows() {
    let knots = knot_windows(20, 5, 1);
    assert_eq!(knots.len(), 20);

    assert_eq!(knots[0], (0, Window::new(0, 4)));
    assert_eq!(knots[2], (2, Window::new(0, 4)));
    assert_eq!(knots[3], (3, Window::new(1, 5)));
    assert_eq!(knots[10], (10, Window::new(8, 12)));
    assert_eq!(knots[17], (17, Window::new(15, 19)));
    assert_eq!(knots[19], (19, Window::new(15, 19)));

    for (_, window) in &knots {
        assert_eq!(window.len(), 5);
    }
}

/// Test strided windows at every jump-th index.
#[test]
fn test_strided_knot_windows() {
    let knots = knot_windows(20, 5, 3);
    let indices: Vec<usize> = knots.iter().map(|&(i, _)| i).collect();
    assert_eq!(indices, vec![0, 3, 6, 9, 12, 15, 18]);

    assert_eq!(knots[0].1, Window::new(0, 4));
    assert_eq!(knots[3].1, Window::new(7, 11));
    assert_eq!(knots[6].1, Window::new(15, 19));
}

/// Test global windows cover the whole series.
#[test]
fn test_global_knot_windows() {
    let knots = knot_windows(8, 15, 2);
    let indices: Vec<usize> = knots.iter().map(|&(i, _)| i).collect();
    assert_eq!(indices, vec![0, 2, 4, 6]);
    for (_, window) in &knots {
        assert_eq!(*window, Window::new(0, 7));
    }
}

/// Test that a single point has no knots.
#[test]
fn test_single_point_knots() {
    assert!(knot_windows(1, 3, 1).is_empty());
}

// ============================================================================
// Smoothing Result Tests
// ============================================================================

/// Test that linear data survives strided smoothing unchanged.
///
/// Verifies both the interpolated points and the separately fitted final point.
#[test]
fn test_strided_linear_data() {
    let data: Vec<f64> = (0..50).map(|i| 2.0 + 0.5 * i as f64).collect();

    for jump in [2, 3, 4, 7] {
        let cfg = config(7, 1, Some(jump));
        let mut smoother = WindowedSmoother::new(&data, &cfg, None);
        assert_eq!(smoother.layout(), WindowLayout::Strided);

        let smoothed = smoother.smooth();
        assert_eq!(smoothed.len(), data.len());
        for (i, (&s, &d)) in smoothed.iter().zip(&data).enumerate() {
            assert!((s - d).abs() < 1e-9, "jump {}, index {}: {} vs {}", jump, i, s, d);
        }
    }
}

/// Test that linear data survives sliding smoothing unchanged.
#[test]
fn test_sliding_linear_data() {
    let data: Vec<f64> = (0..30).map(|i| -1.0 + 0.3 * i as f64).collect();
    let cfg = config(5, 1, Some(1));
    let smoothed = WindowedSmoother::new(&data, &cfg, None).smooth();

    for (&s, &d) in smoothed.iter().zip(&data) {
        assert_relative_eq!(s, d, epsilon = 1e-9);
    }
}

/// Test that a global linear fit of linear data is exact.
#[test]
fn test_global_linear_data() {
    let data: Vec<f64> = (0..25).map(|i| 4.0 - 0.1 * i as f64).collect();
    let cfg = config(101, 1, None);
    let mut smoother = WindowedSmoother::new(&data, &cfg, None);
    assert_eq!(smoother.layout(), WindowLayout::Global);

    let smoothed = smoother.smooth();
    for (&s, &d) in smoothed.iter().zip(&data) {
        assert_relative_eq!(s, d, epsilon = 1e-9);
    }
}

/// Test that smoothing reduces the spread of noisy data.
#[test]
fn test_smoothing_reduces_noise() {
    let data: Vec<f64> = (0..60)
        .map(|i| if i % 2 == 0 { 1.0 } else { -1.0 })
        .collect();
    let cfg = config(9, 1, Some(1));
    let smoothed = WindowedSmoother::new(&data, &cfg, None).smooth();

    for &s in &smoothed[5..55] {
        assert!(s.abs() < 0.5, "smoothed value {} should be near zero", s);
    }
}

/// Test that `smooth_into` writes the same values as `smooth`.
#[test]
fn test_smooth_into_matches_smooth() {
    let data: Vec<f64> = (0..40).map(|i| (i as f64 * 0.4).sin()).collect();
    let cfg = config(7, 2, Some(2));

    let expected = WindowedSmoother::new(&data, &cfg, None).smooth();
    let mut output = vec![0.0; data.len()];
    WindowedSmoother::new(&data, &cfg, None).smooth_into(&mut output);

    assert_eq!(output, expected);
}

// ============================================================================
// Edge Case Tests
// ============================================================================

/// Test that zero external weights leave the raw data in place.
#[test]
fn test_failed_fits_keep_raw_values() {
    let data = vec![3.0f64, -1.0, 4.0, 1.0, -5.0, 9.0, 2.0, 6.0];
    let weights = vec![0.0f64; data.len()];
    let cfg = config(3, 1, Some(1));

    let smoothed = WindowedSmoother::new(&data, &cfg, Some(&weights)).smooth();
    assert_eq!(smoothed, data);
}

/// Test that a single point is returned unchanged.
#[test]
fn test_single_point_series() {
    let data = vec![42.0f64];
    let cfg = config(7, 1, None);
    let mut smoother = WindowedSmoother::new(&data, &cfg, None);

    assert_eq!(smoother.layout(), WindowLayout::Single);
    assert_eq!(smoother.smooth(), vec![42.0]);
}

/// Test that unit external weights do not change the result.
#[test]
fn test_unit_weights_match_unweighted() {
    let data: Vec<f64> = (0..30).map(|i| (i as f64 * 0.7).cos() * 3.0).collect();
    let ones = vec![1.0f64; data.len()];
    let cfg = config(7, 1, Some(1));

    let plain = WindowedSmoother::new(&data, &cfg, None).smooth();
    let weighted = WindowedSmoother::new(&data, &cfg, Some(&ones)).smooth();

    assert_eq!(plain, weighted);
}

/// Test that a successful fit of exactly zero is kept.
///
/// The centre point carries no weight and its neighbours cancel, so the
/// constant fit at index 2 is exactly zero even though the raw value is not.
#[test]
fn test_zero_fit_is_not_a_failure() {
    let data = vec![-3.0f64, -1.0, 7.0, 1.0, 3.0];
    let weights = vec![1.0f64, 1.0, 0.0, 1.0, 1.0];
    let cfg = config(5, 0, Some(1));

    let smoothed = WindowedSmoother::new(&data, &cfg, Some(&weights)).smooth();
    assert_eq!(smoothed[2], 0.0);
    assert_ne!(smoothed[2], data[2]);
}
