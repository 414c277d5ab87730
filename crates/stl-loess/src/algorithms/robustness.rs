//! Robustness weight computation for outlier downweighting.
//!
//! ## Purpose
//!
//! Between outer passes of the decomposition, residuals
//! `data - seasonal - trend` are turned into per-point weights so that the
//! next pass of seasonal and trend smoothing downweights outliers.
//!
//! ## Design notes
//!
//! * **Scale**: `6 * median(|r|)`, computed with quickselect on a scratch copy.
//! * **Bisquare**: Smooth downweighting with complete rejection.
//!
//! ## Key concepts
//!
//! * **Thresholds**: With `h = |r| / (6 * median|r|)`, the weight is 1 for
//!   `h <= 0.001`, `(1 - h^2)^2` for `h <= 0.999` and 0 beyond.
//!
//! ## Invariants
//!
//! * Robustness weights are in [0, 1].
//! * A zero scale leaves weight 1 only on exactly fitted points.
//!
//! ## Non-goals
//!
//! * This module does not decide the number of robustness iterations.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::scaling::median_absolute;

// ============================================================================
// Constants
// ============================================================================

/// Bisquare tuning constant applied to the median absolute residual.
const BISQUARE_C: f64 = 6.0;

/// Fraction of the tuned scale below which a residual keeps full weight.
const LOWER_CUTOFF: f64 = 0.001;

/// Fraction of the tuned scale beyond which a residual is rejected.
const UPPER_CUTOFF: f64 = 0.999;

// ============================================================================
// Main API
// ============================================================================

/// Recompute bisquare robustness weights from the current components.
///
/// `scratch` must be at least as long as `data`; its contents are
/// overwritten. Returns the tuned scale `6 * median(|r|)`.
pub fn compute_robustness_weights<T: Float>(
    data: &[T],
    trend: &[T],
    seasonal: &[T],
    weights: &mut [T],
    scratch: &mut [T],
) -> T {
    let n = data.len();
    if n == 0 {
        return T::zero();
    }

    for i in 0..n {
        weights[i] = (data[i] - seasonal[i] - trend[i]).abs();
    }

    let scratch = &mut scratch[..n];
    scratch.copy_from_slice(&weights[..n]);
    let scale = T::from(BISQUARE_C).unwrap() * median_absolute(scratch);

    if scale <= T::zero() {
        tracing::warn!(
            n,
            "robustness scale is zero; only exactly fitted points keep their weight"
        );
    }

    for w in weights[..n].iter_mut() {
        *w = bisquare_weight(*w, scale);
    }

    scale
}

/// Compute the bisquare weight of an absolute residual for a tuned scale.
///
/// # Formula
///
/// c1 = 0.001 * scale
/// c9 = 0.999 * scale
///
/// w = 1.0                     if |r| <= c1
/// w = (1 - (r/scale)^2)^2     if c1 < |r| <= c9
/// w = 0.0                     if |r| > c9
#[inline]
pub fn bisquare_weight<T: Float>(residual: T, scale: T) -> T {
    let r = residual.abs();
    let c1 = T::from(LOWER_CUTOFF).unwrap() * scale;
    let c9 = T::from(UPPER_CUTOFF).unwrap() * scale;

    if r <= c1 {
        T::one()
    } else if r <= c9 {
        let h = r / scale;
        let tmp = T::one() - h * h;
        tmp * tmp
    } else {
        T::zero()
    }
}
