#![cfg(feature = "dev")]
//! Tests for the local regression interpolator.
//!
//! These tests verify the weighted local polynomial fit used by every LOESS
//! smoother in STL:
//! - Exact reproduction of constant, linear and quadratic data
//! - Extrapolation outside the window
//! - Width widening when the width exceeds the series length
//! - Fit failures and external weights
//!
//! ## Test Organization
//!
//! 1. **Constant Data** - All degrees reproduce a constant
//! 2. **Linear Data** - Degrees 1 and 2 reproduce a line
//! 3. **Quadratic Data** - Degree 2 reproduces a parabola
//! 4. **Fit Failures** - Zero radius and zero weights
//! 5. **Polynomial Degree** - Conversions and display

use approx::assert_relative_eq;

use stl_loess::internals::algorithms::interpolation::{
    LocalRegressionInterpolator, PolynomialDegree,
};
use stl_loess::internals::primitives::errors::StlError;
use stl_loess::internals::primitives::window::Window;

const DEGREES: [PolynomialDegree; 3] = [
    PolynomialDegree::Constant,
    PolynomialDegree::Linear,
    PolynomialDegree::Quadratic,
];

// Window `[i - half, i + half]` clipped to `[0, n - 1]`.
fn centred(i: usize, half: usize, n: usize) -> (usize, usize) {
    (i.saturating_sub(half), (i + half).min(n - 1))
}

// ============================================================================
// Constant Data Tests
// ============================================================================

/// Test that every degree reproduces constant data at the nodes.
#[test]
fn test_constant_data_at_nodes() {
    let data = vec![2016.0f64; 100];

    for degree in DEGREES {
        let mut interp = LocalRegressionInterpolator::new(&data, 7, degree, None);
        for i in 0..100 {
            let (left, right) = centred(i, 3, 100);
            let y = interp
                .smooth_one_point(i as f64, left, right)
                .expect("fit should succeed");
            assert_relative_eq!(y, 2016.0, max_relative = 1e-9);
        }
    }
}

/// Test that every degree reproduces constant data between the nodes.
#[test]
fn test_constant_data_between_nodes() {
    let data = vec![2016.0f64; 100];

    for degree in DEGREES {
        let mut interp = LocalRegressionInterpolator::new(&data, 7, degree, None);
        for i in 0..99 {
            let (left, right) = centred(i, 3, 100);
            let y = interp
                .smooth_one_point(i as f64 + 0.5, left, right)
                .expect("fit should succeed");
            assert_relative_eq!(y, 2016.0, max_relative = 1e-9);
        }
    }
}

/// Test that every degree extrapolates constant data far outside the window.
#[test]
fn test_constant_data_extrapolation() {
    let data = vec![2016.0f64; 100];

    for degree in DEGREES {
        let mut interp = LocalRegressionInterpolator::new(&data, 7, degree, None);

        let left = interp.smooth_one_point(-100.0, 0, 6).expect("left fit");
        assert_relative_eq!(left, 2016.0, max_relative = 1e-6);

        let right = interp.smooth_one_point(1000.0, 93, 99).expect("right fit");
        assert_relative_eq!(right, 2016.0, max_relative = 1e-6);
    }
}

// ============================================================================
// Linear Data Tests
// ============================================================================

/// Test that a linear fit reproduces linear data with a narrow width.
///
/// Verifies the clipped windows at both ends, where only two points carry
/// weight, as well as interior windows.
#[test]
fn test_linear_data_narrow_width() {
    let data: Vec<f64> = (0..100).map(|i| 3.7 - 0.25 * i as f64).collect();
    let mut interp = LocalRegressionInterpolator::new(&data, 5, PolynomialDegree::Linear, None);

    for i in 0..100 {
        let (left, right) = centred(i, 2, 100);
        let y = interp
            .smooth_one_point(i as f64, left, right)
            .expect("fit should succeed");
        assert!(
            (y - data[i]).abs() < 1e-5,
            "index {}: got {}, expected {}",
            i,
            y,
            data[i]
        );
    }
}

/// Test that degrees 1 and 2 reproduce linear data when the width exceeds
/// the series length.
#[test]
fn test_linear_data_wide_width() {
    let data: Vec<f64> = (0..100).map(|i| 3.7 - 0.25 * i as f64).collect();

    for degree in [PolynomialDegree::Linear, PolynomialDegree::Quadratic] {
        let mut interp = LocalRegressionInterpolator::new(&data, 5000, degree, None);
        for i in 0..100 {
            let y = interp
                .smooth_one_point(i as f64, 0, 99)
                .expect("fit should succeed");
            assert!(
                (y - data[i]).abs() < 1e-6,
                "degree {}, index {}: got {}, expected {}",
                degree,
                i,
                y,
                data[i]
            );
        }
    }
}

/// Test linear extrapolation far outside the data range.
#[test]
fn test_linear_extrapolation() {
    let data: Vec<f64> = (0..100).map(|i| -0.25 * i as f64).collect();
    let mut interp = LocalRegressionInterpolator::new(&data, 7, PolynomialDegree::Linear, None);

    let left = interp.smooth_one_point(-100.0, 0, 99).expect("left fit");
    assert_relative_eq!(left, 25.0, max_relative = 1e-8);

    let right = interp.smooth_one_point(1000.0, 0, 99).expect("right fit");
    assert_relative_eq!(right, -250.0, max_relative = 1e-8);
}

/// Test that a constant fit of linear data returns a weighted mean.
///
/// With a symmetric window the weighted mean equals the centre value.
#[test]
fn test_constant_fit_symmetric_window() {
    let data: Vec<f64> = (0..21).map(|i| 1.0 + 2.0 * i as f64).collect();
    let mut interp = LocalRegressionInterpolator::new(&data, 7, PolynomialDegree::Constant, None);

    let y = interp.smooth_one_point(10.0, 7, 13).expect("fit");
    assert_relative_eq!(y, data[10], max_relative = 1e-12);

    // Asymmetric window pulls the mean towards the window
    let y = interp.smooth_one_point(0.0, 0, 6).expect("fit");
    assert!(y > data[0]);
}

// ============================================================================
// Quadratic Data Tests
// ============================================================================

/// Test that a quadratic fit reproduces quadratic data inside and outside
/// the data range.
#[test]
fn test_quadratic_data_and_extrapolation() {
    let f = |x: f64| 3.7 - 0.25 * x + 0.7 * x * x;
    let data: Vec<f64> = (0..100).map(|i| f(i as f64)).collect();
    let mut interp =
        LocalRegressionInterpolator::new(&data, 500_000, PolynomialDegree::Quadratic, None);

    for i in -100..200 {
        let x = i as f64;
        let y = interp.smooth_one_point(x, 0, 99).expect("fit should succeed");
        assert_relative_eq!(y, f(x), max_relative = 1e-5);
    }
}

/// Test that a quadratic fit with a narrow window reproduces a parabola.
#[test]
fn test_quadratic_data_narrow_window() {
    let f = |x: f64| 1.0 + 0.5 * x - 0.1 * x * x;
    let data: Vec<f64> = (0..40).map(|i| f(i as f64)).collect();
    let mut interp = LocalRegressionInterpolator::new(&data, 9, PolynomialDegree::Quadratic, None);

    for i in 4..36 {
        let y = interp
            .smooth_one_point(i as f64, i - 4, i + 4)
            .expect("fit should succeed");
        assert!((y - f(i as f64)).abs() < 1e-8, "index {}", i);
    }
}

// ============================================================================
// Fit Failure Tests
// ============================================================================

/// Test that a zero neighborhood radius is a fit failure.
#[test]
fn test_zero_radius_fails() {
    let data = vec![1.0f64, 2.0, 3.0, 4.0, 5.0];
    let mut interp = LocalRegressionInterpolator::new(&data, 1, PolynomialDegree::Linear, None);

    assert_eq!(interp.smooth_one_point(2.0, 2, 2), None);
}

/// Test that an all-zero weight window is a fit failure.
#[test]
fn test_zero_external_weights_fail() {
    let data = vec![1.0f64, 2.0, 3.0, 4.0, 5.0];
    let weights = vec![0.0f64; 5];
    let mut interp =
        LocalRegressionInterpolator::new(&data, 5, PolynomialDegree::Linear, Some(&weights));

    assert_eq!(interp.smooth_one_point(2.0, 0, 4), None);
}

/// Test that an external weight of zero removes a point from the fit.
#[test]
fn test_external_weights_exclude_outlier() {
    let data = vec![1.0f64, 1.0, 1.0, 100.0, 1.0, 1.0, 1.0];
    let weights = vec![1.0f64, 1.0, 1.0, 0.0, 1.0, 1.0, 1.0];
    let mut interp =
        LocalRegressionInterpolator::new(&data, 7, PolynomialDegree::Constant, Some(&weights));

    let y = interp.smooth_in_window(3.0, Window::new(0, 6)).expect("fit");
    assert_relative_eq!(y, 1.0, max_relative = 1e-12);

    // Without the weights the outlier pulls the fit up
    let mut plain = LocalRegressionInterpolator::new(&data, 7, PolynomialDegree::Constant, None);
    let y = plain.smooth_in_window(3.0, Window::new(0, 6)).expect("fit");
    assert!(y > 10.0);
}

/// Test that the interpolator reports the series length.
#[test]
fn test_interpolator_len() {
    let data = vec![0.0f64; 12];
    let interp = LocalRegressionInterpolator::new(&data, 5, PolynomialDegree::Linear, None);
    assert_eq!(interp.len(), 12);
    assert!(!interp.is_empty());
}

// ============================================================================
// Polynomial Degree Tests
// ============================================================================

/// Test conversion from numeric degrees.
#[test]
fn test_degree_from_usize() {
    assert_eq!(
        PolynomialDegree::try_from(0usize),
        Ok(PolynomialDegree::Constant)
    );
    assert_eq!(PolynomialDegree::try_from(1usize), Ok(PolynomialDegree::Linear));
    assert_eq!(
        PolynomialDegree::try_from(2usize),
        Ok(PolynomialDegree::Quadratic)
    );
    assert_eq!(
        PolynomialDegree::try_from(3usize),
        Err(StlError::InvalidDegree(3))
    );
}

/// Test the numeric value, default and display of a degree.
#[test]
fn test_degree_value_and_display() {
    assert_eq!(PolynomialDegree::default(), PolynomialDegree::Linear);
    assert_eq!(PolynomialDegree::Quadratic.value(), 2);
    assert_eq!(format!("{}", PolynomialDegree::Constant), "0");
}
