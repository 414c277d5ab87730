//! Cycle-subseries smoothing.
//!
//! ## Purpose
//!
//! This module splits a detrended series into one sub-series per phase of
//! the seasonal cycle, smooths each independently and scatters the results
//! back into an extended seasonal buffer that carries extrapolated cycles
//! before and after the data.
//!
//! ## Design notes
//!
//! * **Independence**: Each phase is smoothed in its own buffers, so phases
//!   may run in parallel (feature `parallel`) with identical results.
//! * **Extrapolation**: Positions before the first and after the last
//!   sub-series value are fitted against the nearest `width`-point boundary
//!   window.
//!
//! ## Key concepts
//!
//! * **Phase**: Index modulo the period. Phase `p` holds
//!   `detrended[p], detrended[p + period], ...`, which is
//!   `ceil((n - p) / period)` values.
//! * **Extended buffer**: Length `n + (backward + forward) * period`. With
//!   counts (1, 1) position `period + i` corresponds to series index `i`.
//!
//! ## Invariants
//!
//! * A failed extrapolated fit falls back to the nearest smoothed boundary value.
//! * External weights are used only when provided for the whole series.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::interpolation::LoessConfig;
use crate::algorithms::smoother::WindowedSmoother;
use crate::primitives::buffer::{Slot, VecExt};
use crate::primitives::window::Window;

// ============================================================================
// Float Bound
// ============================================================================

/// Float types the decomposition can run on.
///
/// With the `parallel` feature the phases are smoothed on the rayon thread
/// pool, so the type must also be `Send + Sync`. Without it any `Float` works.
#[cfg(feature = "parallel")]
pub trait StlFloat: Float + Send + Sync {}

#[cfg(feature = "parallel")]
impl<T: Float + Send + Sync> StlFloat for T {}

/// Float types the decomposition can run on.
#[cfg(not(feature = "parallel"))]
pub trait StlFloat: Float {}

#[cfg(not(feature = "parallel"))]
impl<T: Float> StlFloat for T {}

// ============================================================================
// Sub-series Buffers
// ============================================================================

// Working memory for one phase of the cycle.
#[derive(Debug, Clone)]
struct SubSeries<T> {
    // Values of this phase, in time order.
    values: Slot<T>,

    // Matching external weights (empty when unweighted).
    weights: Slot<T>,

    // Smoothed values padded with the extrapolated points.
    smoothed: Slot<T>,
}

impl<T> Default for SubSeries<T> {
    fn default() -> Self {
        Self {
            values: Slot::default(),
            weights: Slot::default(),
            smoothed: Slot::default(),
        }
    }
}

// ============================================================================
// Cyclic Sub-series Smoother
// ============================================================================

/// Smooths each phase of a seasonal cycle independently.
#[derive(Debug, Clone)]
pub struct CyclicSubSeriesSmoother<T> {
    config: LoessConfig,
    period: usize,
    backward: usize,
    forward: usize,
    phases: Vec<SubSeries<T>>,
}

impl<T: StlFloat> CyclicSubSeriesSmoother<T> {
    /// Create a smoother extrapolating one cycle on each side.
    pub fn new(config: LoessConfig, period: usize) -> Self {
        Self::with_extrapolation(config, period, 1, 1)
    }

    /// Create a smoother with explicit backward and forward extrapolation counts.
    pub fn with_extrapolation(
        config: LoessConfig,
        period: usize,
        backward: usize,
        forward: usize,
    ) -> Self {
        debug_assert!(period >= 1, "CyclicSubSeriesSmoother: period must be positive");

        let mut phases = Vec::with_capacity(period);
        phases.resize_with(period, SubSeries::default);

        Self {
            config,
            period,
            backward,
            forward,
            phases,
        }
    }

    /// Length of the extended buffer for a series of `n` points.
    #[inline]
    pub fn extended_len(&self, n: usize) -> usize {
        n + (self.backward + self.forward) * self.period
    }

    /// Smooth `detrended` phase by phase into `extended`.
    ///
    /// `extended` must have length [`Self::extended_len`] and `weights`, when
    /// given, the same length as `detrended`.
    pub fn smooth_seasonal(&mut self, detrended: &[T], extended: &mut [T], weights: Option<&[T]>) {
        let n = detrended.len();
        let period = self.period;
        debug_assert_eq!(extended.len(), self.extended_len(n));
        debug_assert!(weights.is_none_or(|w| w.len() == n));

        // Extract
        for (phase, sub) in self.phases.iter_mut().enumerate() {
            sub.values.clear();
            sub.values
                .extend(detrended.iter().skip(phase).step_by(period).copied());

            sub.weights.clear();
            if let Some(w) = weights {
                sub.weights.extend(w.iter().skip(phase).step_by(period).copied());
            }
        }

        // Smooth
        let config = self.config;
        let (backward, forward) = (self.backward, self.forward);

        #[cfg(feature = "parallel")]
        self.phases
            .par_iter_mut()
            .for_each(|sub| smooth_subseries(sub, &config, backward, forward));

        #[cfg(not(feature = "parallel"))]
        self.phases
            .iter_mut()
            .for_each(|sub| smooth_subseries(sub, &config, backward, forward));

        // Reassemble
        for (phase, sub) in self.phases.iter().enumerate() {
            for (i, &v) in sub.smoothed.iter().enumerate() {
                extended[i * period + phase] = v;
            }
        }
    }
}

// Smooth one phase and pad it with extrapolated points.
fn smooth_subseries<T: Float>(
    sub: &mut SubSeries<T>,
    config: &LoessConfig,
    backward: usize,
    forward: usize,
) {
    let SubSeries {
        values,
        weights,
        smoothed,
    } = sub;

    let len = values.len();
    smoothed.as_vec_mut().assign(backward + len + forward, T::zero());
    if len == 0 {
        return;
    }

    let external = if weights.is_empty() {
        None
    } else {
        Some(weights.as_slice())
    };

    let mut smoother = WindowedSmoother::new(values.as_slice(), config, external);
    smoother.smooth_into(&mut smoothed[backward..backward + len]);

    let width = config.width();
    let interpolator = smoother.interpolator_mut();

    // Backward extrapolation against the leading window
    let leading = Window::leading(width, len);
    let first = smoothed[backward];
    for i in 1..=backward {
        let x = -T::from(i).unwrap_or_else(T::zero);
        smoothed[backward - i] = interpolator.smooth_in_window(x, leading).unwrap_or(first);
    }

    // Forward extrapolation against the trailing window
    let trailing = Window::trailing(width, len);
    let right = len - 1;
    let last = smoothed[backward + right];
    for i in 1..=forward {
        let x = T::from(right + i).unwrap_or_else(T::zero);
        smoothed[backward + right + i] =
            interpolator.smooth_in_window(x, trailing).unwrap_or(last);
    }
}
