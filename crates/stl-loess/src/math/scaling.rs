//! Robust scale estimation for STL residuals.
//!
//! The robustness step scales residuals by the median of their absolute
//! values (MAR). The median is found with quickselect, so the input slice is
//! reordered in place.

// External dependencies
use core::cmp::Ordering::Equal;
use num_traits::Float;

// Compute the Median Absolute Residual `median(|r|)`, overwriting `vals`.
#[inline]
pub fn median_absolute<T: Float>(vals: &mut [T]) -> T {
    if vals.is_empty() {
        return T::zero();
    }

    for val in vals.iter_mut() {
        *val = val.abs();
    }

    median_inplace(vals)
}

// Compute the median in place using Quickselect.
#[inline]
pub fn median_inplace<T: Float>(vals: &mut [T]) -> T {
    let n = vals.len();
    if n == 0 {
        return T::zero();
    }

    let mid = n / 2;
    vals.select_nth_unstable_by(mid, |a, b| a.partial_cmp(b).unwrap_or(Equal));
    let upper = vals[mid];

    if n.is_multiple_of(2) {
        // Even length: average with the largest value of the lower half
        let mut lower = vals[0];
        for &v in &vals[1..mid] {
            if v > lower {
                lower = v;
            }
        }
        (lower + upper) / (T::one() + T::one())
    } else {
        upper
    }
}
