//! Working memory for the decomposition loop.
//!
//! ## Purpose
//!
//! This module provides reusable scratch space so the inner and outer STL
//! loops do not allocate on every pass. Buffers are sized once from the
//! series length and period and then overwritten in place.
//!
//! ## Design notes
//!
//! * **Centralized Ownership**: One [`DecompositionBuffer`] holds every
//!   intermediate series the executor needs.
//! * **Lazy Expansion**: Slots grow on demand through [`VecExt::assign`] and are
//!   never shrunk.
//!
//! ## Key concepts
//!
//! * **Slot**: A reusable vector wrapper with automatic capacity management.
//! * **DecompositionBuffer**: Detrended series, the extended cycle-subseries
//!   result, low-pass and trend scratch, and the robustness scratch.
//!
//! ## Invariants
//!
//! * After [`DecompositionBuffer::prepare`] every slot has the length the
//!   executor indexes it with.

// Feature-gated dependencies
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::ops::{Deref, DerefMut};
use num_traits::Zero;

// ============================================================================
// Slot - Unified Vector Abstraction
// ============================================================================

/// A reusable vector slot with automatic capacity management.
#[derive(Debug, Clone)]
pub struct Slot<T>(Vec<T>);

impl<T> Slot<T> {
    /// Create a new slot with the given initial capacity.
    #[inline]
    pub fn new(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    /// Get a mutable reference to the underlying vector.
    #[inline]
    pub fn as_vec_mut(&mut self) -> &mut Vec<T> {
        &mut self.0
    }
}

impl<T> Default for Slot<T> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<T> Deref for Slot<T> {
    type Target = Vec<T>;
    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> DerefMut for Slot<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

/// Helper trait to simplify resizing and filling vectors.
pub trait VecExt<T> {
    /// Resize the vector to `n` and fill with `val`.
    fn assign(&mut self, n: usize, val: T);
}

impl<T: Clone> VecExt<T> for Vec<T> {
    fn assign(&mut self, n: usize, val: T) {
        if self.len() != n {
            self.clear();
            self.resize(n, val);
        } else {
            self.fill(val);
        }
    }
}

// ============================================================================
// DecompositionBuffer - Working Memory for the STL Executor
// ============================================================================

/// Scratch series reused across every inner and outer pass.
#[derive(Debug, Clone)]
pub struct DecompositionBuffer<T> {
    /// `data - trend` for the current pass.
    pub detrended: Slot<T>,

    /// Cycle-subseries smoothing result, extended one period on each side.
    pub extended_seasonal: Slot<T>,

    /// First moving-average output (length `n + period + 1`).
    pub average_a: Slot<T>,

    /// Second moving-average output (length `n + 2`).
    pub average_b: Slot<T>,

    /// Third moving-average output (length `n`).
    pub average_c: Slot<T>,

    /// Low-pass filtered cycle-subseries result (length `n`).
    pub low_pass: Slot<T>,

    /// Copy of the trend fed to the trend smoother.
    pub trend_input: Slot<T>,

    /// Absolute residuals used to find the robustness scale.
    pub abs_residuals: Slot<T>,
}

impl<T> Default for DecompositionBuffer<T> {
    fn default() -> Self {
        Self {
            detrended: Slot::default(),
            extended_seasonal: Slot::default(),
            average_a: Slot::default(),
            average_b: Slot::default(),
            average_c: Slot::default(),
            low_pass: Slot::default(),
            trend_input: Slot::default(),
            abs_residuals: Slot::default(),
        }
    }
}

impl<T: Zero + Clone> DecompositionBuffer<T> {
    /// Create a buffer pre-allocated for a series of `n` points with the given period.
    pub fn with_capacity(n: usize, period: usize) -> Self {
        Self {
            detrended: Slot::new(n),
            extended_seasonal: Slot::new(n + 2 * period),
            average_a: Slot::new(n + period + 1),
            average_b: Slot::new(n + 2),
            average_c: Slot::new(n),
            low_pass: Slot::new(n),
            trend_input: Slot::new(n),
            abs_residuals: Slot::new(n),
        }
    }

    /// Size every slot for a series of `n` points with the given period.
    pub fn prepare(&mut self, n: usize, period: usize) {
        self.detrended.as_vec_mut().assign(n, T::zero());
        self.extended_seasonal
            .as_vec_mut()
            .assign(n + 2 * period, T::zero());
        self.average_a
            .as_vec_mut()
            .assign(n + period + 1, T::zero());
        self.average_b.as_vec_mut().assign(n + 2, T::zero());
        self.average_c.as_vec_mut().assign(n, T::zero());
        self.low_pass.as_vec_mut().assign(n, T::zero());
        self.trend_input.as_vec_mut().assign(n, T::zero());
        self.abs_residuals.as_vec_mut().assign(n, T::zero());
    }
}
