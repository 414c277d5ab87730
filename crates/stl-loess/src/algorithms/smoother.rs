//! LOESS smoothing of a whole series.
//!
//! ## Purpose
//!
//! This module applies the local regression interpolator across every index
//! of a series, choosing one of three window layouts up front.
//!
//! ## Design notes
//!
//! * **Global**: When the width covers the series, every fit uses `[0, n - 1]`.
//! * **Sliding**: With a jump of 1 the window keeps `width` points and moves
//!   right only once the index passes the half-width mark, and only while
//!   there is room on the right.
//! * **Strided**: With a larger jump only every `jump`-th index is fitted;
//!   points in between are linearly interpolated from the bracketing fits.
//!   The final index is always fitted.
//!
//! ## Invariants
//!
//! * Output length equals input length.
//! * A failed fit at an index is replaced by the raw input value there.
//! * A single-point series is returned unchanged.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::interpolation::{LocalRegressionInterpolator, LoessConfig};
use crate::primitives::window::{Window, half_width};

// ============================================================================
// Window Layout
// ============================================================================

/// How windows are laid out across the series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowLayout {
    /// Single point; nothing to fit.
    Single,

    /// Width covers the series: one window `[0, n - 1]`.
    Global,

    /// Jump of 1: a `width`-point window slides with the index.
    Sliding,

    /// Jump above 1: clamped windows at every `jump`-th index.
    Strided,
}

impl WindowLayout {
    /// Select the layout for a series of `n` points.
    pub fn select(n: usize, width: usize, jump: usize) -> Self {
        if n <= 1 {
            Self::Single
        } else if width >= n {
            Self::Global
        } else if effective_jump(jump, n) == 1 {
            Self::Sliding
        } else {
            Self::Strided
        }
    }
}

// Jump clamped to the series length.
#[inline]
fn effective_jump(jump: usize, n: usize) -> usize {
    jump.min(n.saturating_sub(1)).max(1)
}

/// Indices that are fitted directly, each paired with its window.
///
/// The final index is not included unless it falls on the jump grid.
pub fn knot_windows(n: usize, width: usize, jump: usize) -> Vec<(usize, Window)> {
    let jump = effective_jump(jump, n);

    match WindowLayout::select(n, width, jump) {
        WindowLayout::Single => Vec::new(),
        WindowLayout::Global => {
            let window = Window::full(n);
            (0..n).step_by(jump).map(|i| (i, window)).collect()
        }
        WindowLayout::Sliding => {
            let half = half_width(width);
            let mut window = Window::leading(width, n);
            let mut knots = Vec::with_capacity(n);
            for i in 0..n {
                if i >= half && window.right != n - 1 {
                    window.slide();
                }
                knots.push((i, window));
            }
            knots
        }
        WindowLayout::Strided => (0..n)
            .step_by(jump)
            .map(|i| (i, Window::strided(i, width, n)))
            .collect(),
    }
}

// ============================================================================
// Windowed Smoother
// ============================================================================

/// Applies LOESS at every index of a series.
#[derive(Debug, Clone)]
pub struct WindowedSmoother<'a, T> {
    data: &'a [T],
    interpolator: LocalRegressionInterpolator<'a, T>,
    width: usize,
    jump: usize,
}

impl<'a, T: Float> WindowedSmoother<'a, T> {
    /// Create a smoother for `data` with optional per-point external weights.
    pub fn new(data: &'a [T], config: &LoessConfig, external_weights: Option<&'a [T]>) -> Self {
        Self {
            data,
            interpolator: LocalRegressionInterpolator::from_config(data, config, external_weights),
            width: config.width(),
            jump: config.jump(),
        }
    }

    /// Interpolator shared by every fit of this smoother.
    #[inline]
    pub fn interpolator_mut(&mut self) -> &mut LocalRegressionInterpolator<'a, T> {
        &mut self.interpolator
    }

    /// Layout used for this series.
    #[inline]
    pub fn layout(&self) -> WindowLayout {
        WindowLayout::select(self.data.len(), self.width, self.jump)
    }

    /// Smooth the series into a new vector.
    pub fn smooth(&mut self) -> Vec<T> {
        let mut output = vec![T::zero(); self.data.len()];
        self.smooth_into(&mut output);
        output
    }

    /// Smooth the series into `output`, which must have the series length.
    pub fn smooth_into(&mut self, output: &mut [T]) {
        let n = self.data.len();
        debug_assert_eq!(output.len(), n, "smooth_into: output length mismatch");

        if n == 0 {
            return;
        }
        if n == 1 {
            output[0] = self.data[0];
            return;
        }

        let jump = effective_jump(self.jump, n);
        let knots = knot_windows(n, self.width, jump);

        for &(i, window) in &knots {
            output[i] = self.fit_or_raw(i, window);
        }

        if jump == 1 {
            return;
        }

        // Fill between knots
        for i in (0..n - jump).step_by(jump) {
            interpolate_segment(output, i, i + jump);
        }

        let last = n - 1;
        let last_knot = (last / jump) * jump;
        if last_knot != last {
            let window = knots
                .last()
                .map(|&(_, w)| w)
                .unwrap_or_else(|| Window::full(n));
            output[last] = self.fit_or_raw(last, window);

            if last_knot != last - 1 {
                interpolate_segment(output, last_knot, last);
            }
        }
    }

    // Fit at index `i`, falling back to the raw value on failure.
    #[inline]
    fn fit_or_raw(&mut self, i: usize, window: Window) -> T {
        let x = T::from(i).unwrap_or_else(T::zero);
        self.interpolator
            .smooth_in_window(x, window)
            .unwrap_or(self.data[i])
    }
}

// Linearly interpolate `values` strictly between indices `from` and `to`.
#[inline]
fn interpolate_segment<T: Float>(values: &mut [T], from: usize, to: usize) {
    let span = T::from(to - from).unwrap_or_else(T::one);
    let slope = (values[to] - values[from]) / span;
    let base = values[from];
    for (step, j) in (from + 1..to).enumerate() {
        let offset = T::from(step + 1).unwrap_or_else(T::zero);
        values[j] = base + slope * offset;
    }
}
