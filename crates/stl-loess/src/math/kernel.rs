//! Tri-cube neighborhood weights for LOESS smoothing.
//!
//! ## Purpose
//!
//! This module maps the distance between a query position and each index of
//! a window to a local-regression weight, optionally scaled by an external
//! (robustness) weight.
//!
//! ## Design notes
//!
//! * **Normalization**: Distances are measured relative to the neighborhood
//!   radius `lambda`, so u = |x - j| / lambda.
//! * **Cut-offs**: Points within 0.1% of `lambda` get full weight and points
//!   beyond 99.9% get none, which keeps the kernel evaluation away from its
//!   numerically flat ends.
//!
//! ## Invariants
//!
//! * Weights are in [0, 1] before external weighting.
//! * Only the entries `[left, right]` of the output buffer are written.
//!
//! ## Non-goals
//!
//! * This module does not normalize weights.
//! * Other kernels are not supported; STL is defined with the tri-cube.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::window::Window;

// ============================================================================
// Constants
// ============================================================================

/// Fraction of `lambda` below which a point gets full weight.
const NEAR_CUTOFF: f64 = 0.001;

/// Fraction of `lambda` beyond which a point gets zero weight.
const FAR_CUTOFF: f64 = 0.999;

// ============================================================================
// Weight Computation
// ============================================================================

/// Tri-cube kernel: K(u) = (1 - |u|^3)^3 for |u| < 1, else 0.
#[inline]
pub fn tricube<T: Float>(u: T) -> T {
    let abs_u = u.abs();
    if abs_u >= T::one() {
        return T::zero();
    }
    let tmp = T::one() - abs_u * abs_u * abs_u;
    tmp * tmp * tmp
}

/// Neighborhood weight of a point at `distance` from the query for radius `lambda`.
#[inline]
pub fn neighborhood_weight<T: Float>(distance: T, lambda: T) -> T {
    let near = T::from(NEAR_CUTOFF).unwrap() * lambda;
    let far = T::from(FAR_CUTOFF).unwrap() * lambda;

    if distance <= near {
        T::one()
    } else if distance <= far {
        tricube(distance / lambda)
    } else {
        T::zero()
    }
}

/// Fill `weights[left..=right]` with neighborhood weights around `x`.
///
/// When `external` is provided, each in-band weight is multiplied by the
/// external weight at the same index. Returns the sum of the written weights.
pub fn compute_window_weights<T: Float>(
    x: T,
    window: Window,
    lambda: T,
    external: Option<&[T]>,
    weights: &mut [T],
) -> T {
    let mut sum = T::zero();

    for j in window.left..=window.right {
        let position = T::from(j).unwrap();
        let mut w = neighborhood_weight((x - position).abs(), lambda);
        if w > T::zero() {
            if let Some(ext) = external {
                w = w * ext[j];
            }
        }
        weights[j] = w;
        sum = sum + w;
    }

    sum
}
