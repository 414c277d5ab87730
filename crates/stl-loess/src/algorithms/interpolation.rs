//! Local regression at a single query position.
//!
//! ## Purpose
//!
//! This module provides the LOESS configuration value and the
//! [`LocalRegressionInterpolator`], which evaluates a weighted local
//! polynomial fit of degree 0, 1 or 2 at one position against a window of an
//! equally spaced series.
//!
//! ## Design notes
//!
//! * **Index positions**: The abscissa of `data[j]` is `j`; the query position
//!   is real-valued and may lie outside the window for extrapolation.
//! * **Closed form**: Linear and quadratic fits are applied as corrections to
//!   the normalized neighborhood weights, so the fitted value is a single dot
//!   product with the data.
//! * **Soft degradation**: An ill-conditioned linear or quadratic system keeps
//!   the plain weighted average.
//!
//! ## Key concepts
//!
//! * **lambda**: Neighborhood radius, the larger distance from the query to
//!   either window bound. When the configured width exceeds the series
//!   length it is widened by `(width - n) / 2`.
//! * **Fit failure**: A zero radius or an all-zero weight window yields
//!   `None`. Callers choose the fallback value.
//!
//! ## Invariants
//!
//! * After a call, weight-buffer entries outside `[left, right]` are stale.
//! * The interpolator never mutates the data or the external weights.
//!
//! ## Non-goals
//!
//! * This module does not choose windows; see the smoother.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Display, Formatter, Result as FmtResult};
use num_traits::Float;

// Internal dependencies
use crate::math::kernel::compute_window_weights;
use crate::primitives::errors::StlError;
use crate::primitives::window::Window;

// ============================================================================
// Polynomial Degree
// ============================================================================

/// Degree of the local polynomial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PolynomialDegree {
    /// Degree 0: weighted local mean.
    Constant,

    /// Degree 1: weighted local line (default).
    #[default]
    Linear,

    /// Degree 2: weighted local parabola.
    Quadratic,
}

impl PolynomialDegree {
    /// Numeric degree (0, 1 or 2).
    #[inline]
    pub const fn value(self) -> usize {
        match self {
            Self::Constant => 0,
            Self::Linear => 1,
            Self::Quadratic => 2,
        }
    }
}

impl TryFrom<usize> for PolynomialDegree {
    type Error = StlError;

    fn try_from(degree: usize) -> Result<Self, Self::Error> {
        match degree {
            0 => Ok(Self::Constant),
            1 => Ok(Self::Linear),
            2 => Ok(Self::Quadratic),
            other => Err(StlError::InvalidDegree(other)),
        }
    }
}

impl Display for PolynomialDegree {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.value())
    }
}

// ============================================================================
// LOESS Configuration
// ============================================================================

/// Validated LOESS smoother settings.
///
/// The width is always odd and at least 3; the jump is at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LoessConfig {
    width: usize,
    degree: PolynomialDegree,
    jump: usize,
}

impl LoessConfig {
    /// Build a configuration from an accepted width, correcting it and
    /// defaulting the jump when absent.
    ///
    /// Callers validate that `width > 0` and `jump != Some(0)`.
    pub(crate) fn resolved(width: usize, degree: PolynomialDegree, jump: Option<usize>) -> Self {
        let width = corrected_width(width);
        let jump = jump.unwrap_or_else(|| default_jump(width));
        Self {
            width,
            degree,
            jump,
        }
    }

    /// Window width in points (odd, at least 3).
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Local polynomial degree.
    #[inline]
    pub fn degree(&self) -> PolynomialDegree {
        self.degree
    }

    /// Stride between explicitly fitted points.
    #[inline]
    pub fn jump(&self) -> usize {
        self.jump
    }
}

impl Display for LoessConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "width={}, degree={}, jump={}",
            self.width, self.degree, self.jump
        )
    }
}

/// Round a width up to the nearest odd value of at least 3.
#[inline]
pub fn corrected_width(width: usize) -> usize {
    let width = width.max(3);
    if width.is_multiple_of(2) {
        width + 1
    } else {
        width
    }
}

/// Default jump for a corrected width: `max(1, floor(0.1 * width + 0.9))`.
#[inline]
pub fn default_jump(width: usize) -> usize {
    ((0.1 * width as f64 + 0.9) as usize).max(1)
}

// ============================================================================
// Local Regression Interpolator
// ============================================================================

/// Weighted local polynomial fit over a borrowed series.
#[derive(Debug, Clone)]
pub struct LocalRegressionInterpolator<'a, T> {
    data: &'a [T],
    external_weights: Option<&'a [T]>,
    width: usize,
    degree: PolynomialDegree,
    weights: Vec<T>,
}

impl<'a, T: Float> LocalRegressionInterpolator<'a, T> {
    /// Create an interpolator for `data` with the given width and degree.
    ///
    /// `external_weights`, when provided, must have the same length as `data`.
    pub fn new(
        data: &'a [T],
        width: usize,
        degree: PolynomialDegree,
        external_weights: Option<&'a [T]>,
    ) -> Self {
        debug_assert!(
            external_weights.is_none_or(|w| w.len() == data.len()),
            "LocalRegressionInterpolator::new: weights length must match data"
        );

        Self {
            data,
            external_weights,
            width,
            degree,
            weights: vec![T::zero(); data.len()],
        }
    }

    /// Create an interpolator using the width and degree of `config`.
    pub fn from_config(
        data: &'a [T],
        config: &LoessConfig,
        external_weights: Option<&'a [T]>,
    ) -> Self {
        Self::new(data, config.width(), config.degree(), external_weights)
    }

    /// Length of the underlying series.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check whether the underlying series is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Fit at position `x` using the points `left..=right`.
    ///
    /// Returns `None` when the fit fails: the neighborhood radius is zero or
    /// every point in the window has zero weight.
    pub fn smooth_one_point(&mut self, x: T, left: usize, right: usize) -> Option<T> {
        self.smooth_in_window(x, Window::new(left, right))
    }

    /// Fit at position `x` using the points of `window`.
    pub fn smooth_in_window(&mut self, x: T, window: Window) -> Option<T> {
        let n = self.data.len();
        debug_assert!(window.right < n, "smooth_in_window: window out of bounds");

        let mut lambda = window.max_distance(x);
        if self.width > n {
            lambda = lambda + T::from((self.width - n) / 2)?;
        }
        if lambda <= T::zero() {
            return None;
        }

        let total =
            compute_window_weights(x, window, lambda, self.external_weights, &mut self.weights);
        if total <= T::zero() {
            return None;
        }

        let weights = &mut self.weights[window.left..=window.right];
        for w in weights.iter_mut() {
            *w = *w / total;
        }

        let range = T::from(n.saturating_sub(1))?;
        let threshold = T::from(1e-6)? * range * range;

        match self.degree {
            PolynomialDegree::Constant => {}
            PolynomialDegree::Linear => apply_linear(weights, window.left, x, threshold),
            PolynomialDegree::Quadratic => apply_quadratic(weights, window.left, x, threshold),
        }

        let fitted = weights
            .iter()
            .zip(&self.data[window.left..=window.right])
            .fold(T::zero(), |acc, (&w, &y)| acc + w * y);

        Some(fitted)
    }
}

// ============================================================================
// Degree Corrections
// ============================================================================

// Turn normalized weights into local-linear equivalent weights.
fn apply_linear<T: Float>(weights: &mut [T], offset: usize, x: T, threshold: T) {
    let mut x_mean = T::zero();
    for (k, &w) in weights.iter().enumerate() {
        x_mean = x_mean + w * position(offset + k);
    }

    let mut x2_mean = T::zero();
    for (k, &w) in weights.iter().enumerate() {
        let d = position::<T>(offset + k) - x_mean;
        x2_mean = x2_mean + w * d * d;
    }

    if x2_mean > threshold {
        let beta = (x - x_mean) / x2_mean;
        for (k, w) in weights.iter_mut().enumerate() {
            *w = *w * (T::one() + beta * (position::<T>(offset + k) - x_mean));
        }
    }
}

// Turn normalized weights into local-quadratic equivalent weights.
fn apply_quadratic<T: Float>(weights: &mut [T], offset: usize, x: T, threshold: T) {
    let mut x1_mean = T::zero();
    let mut x2_mean = T::zero();
    let mut x3_mean = T::zero();
    let mut x4_mean = T::zero();

    for (k, &w) in weights.iter().enumerate() {
        let j = position::<T>(offset + k);
        let j2 = j * j;
        x1_mean = x1_mean + w * j;
        x2_mean = x2_mean + w * j2;
        x3_mean = x3_mean + w * j2 * j;
        x4_mean = x4_mean + w * j2 * j2;
    }

    let m2 = x2_mean - x1_mean * x1_mean;
    let m3 = x3_mean - x2_mean * x1_mean;
    let m4 = x4_mean - x2_mean * x2_mean;
    let den = m2 * m4 - m3 * m3;

    if den > threshold {
        let beta2 = m4 / den;
        let beta3 = m3 / den;
        let beta4 = m2 / den;

        let x1_d = x - x1_mean;
        let x2_d = x * x - x2_mean;

        let a1 = beta2 * x1_d - beta3 * x2_d;
        let a2 = beta4 * x2_d - beta3 * x1_d;

        for (k, w) in weights.iter_mut().enumerate() {
            let j = position::<T>(offset + k);
            *w = *w * (T::one() + a1 * (j - x1_mean) + a2 * (j * j - x2_mean));
        }
    }
}

#[inline]
fn position<T: Float>(index: usize) -> T {
    T::from(index).unwrap_or_else(T::zero)
}
