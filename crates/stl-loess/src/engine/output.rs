//! Output record of a seasonal-trend decomposition.
//!
//! ## Purpose
//!
//! This module defines [`Decomposition`], which holds the input series
//! together with its trend, seasonal and residual components and the
//! per-point robustness weights from the last outer pass.
//!
//! ## Design notes
//!
//! * **Parallel arrays**: Every series has the length of the input.
//! * **Ergonomics**: Implements `Display` for a human-readable summary.
//! * **Serialization**: Derives `serde` traits behind the `serde` feature.
//!
//! ## Invariants
//!
//! * After [`Decomposition::update_residuals`],
//!   `residual[i] = data[i] - seasonal[i] - trend[i]` for every `i`.
//! * Robustness weights are in [0, 1] and start at 1.
//!
//! ## Non-goals
//!
//! * This module does not run the decomposition loop (see the executor).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Debug, Display, Formatter, Result};
use num_traits::Float;

// Internal dependencies
use crate::algorithms::interpolation::{LoessConfig, PolynomialDegree};
use crate::algorithms::robustness::compute_robustness_weights;
use crate::algorithms::smoother::WindowedSmoother;
use crate::evaluation::stats::FitStats;

// ============================================================================
// Decomposition
// ============================================================================

/// Trend, seasonal and residual components of a series.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Decomposition<T> {
    data: Vec<T>,
    trend: Vec<T>,
    seasonal: Vec<T>,
    residual: Vec<T>,
    weights: Vec<T>,
}

impl<T: Float> Decomposition<T> {
    /// Start a decomposition of `data` with zero components and unit weights.
    pub fn new(data: Vec<T>) -> Self {
        let n = data.len();
        Self {
            data,
            trend: vec![T::zero(); n],
            seasonal: vec![T::zero(); n],
            residual: vec![T::zero(); n],
            weights: vec![T::one(); n],
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The input series.
    #[inline]
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// The trend component.
    #[inline]
    pub fn trend(&self) -> &[T] {
        &self.trend
    }

    /// The seasonal component.
    #[inline]
    pub fn seasonal(&self) -> &[T] {
        &self.seasonal
    }

    /// The residual component.
    #[inline]
    pub fn residual(&self) -> &[T] {
        &self.residual
    }

    /// Robustness weights from the last reweighting (all 1 without robust passes).
    #[inline]
    pub fn weights(&self) -> &[T] {
        &self.weights
    }

    /// Number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check whether the decomposition is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Consume the decomposition, returning `(trend, seasonal, residual)`.
    pub fn into_components(self) -> (Vec<T>, Vec<T>, Vec<T>) {
        (self.trend, self.seasonal, self.residual)
    }

    // Mutable views used by the executor.
    pub(crate) fn parts_mut(&mut self) -> ComponentsMut<'_, T> {
        ComponentsMut {
            data: &self.data,
            trend: &mut self.trend,
            seasonal: &mut self.seasonal,
            weights: &mut self.weights,
        }
    }

    // ========================================================================
    // Component Updates
    // ========================================================================

    /// Recompute `residual = data - seasonal - trend`.
    pub fn update_residuals(&mut self) {
        for (i, r) in self.residual.iter_mut().enumerate() {
            *r = self.data[i] - self.seasonal[i] - self.trend[i];
        }
    }

    /// Recompute bisquare robustness weights from the current residuals.
    ///
    /// Returns the tuned scale `6 * median(|r|)`.
    pub fn compute_residual_weights(&mut self) -> T {
        let mut scratch = vec![T::zero(); self.data.len()];
        compute_robustness_weights(
            &self.data,
            &self.trend,
            &self.seasonal,
            &mut self.weights,
            &mut scratch,
        )
    }

    /// Smooth the seasonal component with a quadratic LOESS of the given width.
    ///
    /// The width is corrected to an odd value of at least 3 and every point is
    /// fitted. With `restore_end_points` the first and last seasonal values
    /// are kept. Residuals are recomputed afterwards.
    pub fn smooth_seasonal(&mut self, width: usize, restore_end_points: bool) {
        let n = self.seasonal.len();
        if n == 0 {
            return;
        }

        let config = LoessConfig::resolved(width, PolynomialDegree::Quadratic, Some(1));
        let smoothed = WindowedSmoother::new(&self.seasonal, &config, None).smooth();

        let first = self.seasonal[0];
        let last = self.seasonal[n - 1];
        self.seasonal = smoothed;

        if restore_end_points {
            self.seasonal[0] = first;
            self.seasonal[n - 1] = last;
        }

        self.update_residuals();
    }

    /// Summary statistics of the components.
    pub fn fit_stats(&self) -> FitStats<T> {
        FitStats::compute(&self.data, &self.trend, &self.seasonal, &self.residual)
    }
}

// Disjoint borrows of the component arrays.
pub(crate) struct ComponentsMut<'a, T> {
    pub data: &'a [T],
    pub trend: &'a mut Vec<T>,
    pub seasonal: &'a mut Vec<T>,
    pub weights: &'a mut Vec<T>,
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display + Debug> Display for Decomposition<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Data points: {}", self.data.len())?;
        writeln!(f)?;

        writeln!(f, "Components:")?;
        writeln!(
            f,
            "{:>8} {:>12} {:>12} {:>12} {:>12} {:>10}",
            "Index", "Data", "Trend", "Seasonal", "Residual", "Weight"
        )?;
        writeln!(f, "{:-<71}", "")?;

        // Data rows (show first 10 and last 10 if more than 20 points)
        let n = self.data.len();
        let rows_to_show: Vec<usize> = if n <= 20 {
            (0..n).collect()
        } else {
            (0..10).chain(n - 10..n).collect()
        };

        let mut prev_idx = 0;
        for (i, &idx) in rows_to_show.iter().enumerate() {
            if i > 0 && idx != prev_idx + 1 {
                writeln!(f, "{:>8}", "...")?;
            }
            prev_idx = idx;

            writeln!(
                f,
                "{:>8} {:>12.6} {:>12.6} {:>12.6} {:>12.6} {:>10.4}",
                idx,
                self.data[idx],
                self.trend[idx],
                self.seasonal[idx],
                self.residual[idx],
                self.weights[idx]
            )?;
        }

        Ok(())
    }
}
