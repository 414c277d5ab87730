//! Running-sum moving averages.
//!
//! ## Purpose
//!
//! STL removes the remaining seasonality from the cycle-subseries result by
//! applying moving averages of length `period`, `period` and 3 in sequence.
//! Each pass shortens the series by `window - 1` points.
//!
//! ## Invariants
//!
//! * For an input of length `len` and `window <= len`, exactly
//!   `len - window + 1` output values are produced.
//! * Output `i` is the mean of `input[i..i + window]`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

/// Number of values produced by a moving average of `window` over `len` points.
#[inline]
pub fn output_len(len: usize, window: usize) -> usize {
    if window == 0 || window > len {
        0
    } else {
        len - window + 1
    }
}

/// Write the moving average of `input` over `window` points into `output`.
///
/// `output` must hold at least [`output_len`] values; any extra entries are
/// left untouched. Returns the number of values written.
pub fn moving_average_into<T: Float>(input: &[T], window: usize, output: &mut [T]) -> usize {
    let count = output_len(input.len(), window);
    if count == 0 {
        return 0;
    }
    debug_assert!(output.len() >= count, "moving_average_into: output too short");

    let w = T::from(window).unwrap();
    let mut sum = input[..window]
        .iter()
        .fold(T::zero(), |acc, &v| acc + v);
    output[0] = sum / w;

    for i in 1..count {
        sum = sum + input[i + window - 1] - input[i - 1];
        output[i] = sum / w;
    }

    count
}

/// Moving average of `input` over `window` points as a new vector.
pub fn moving_average<T: Float>(input: &[T], window: usize) -> Vec<T> {
    let mut output = Vec::new();
    output.resize(output_len(input.len(), window), T::zero());
    moving_average_into(input, window, &mut output);
    output
}
