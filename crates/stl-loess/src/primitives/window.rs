//! Windowing primitives for LOESS smoothing over equally spaced series.
//!
//! Positions are series indices, so a window is fully described by its
//! inclusive bounds `[left, right]`.

// External dependencies
use num_traits::Float;

// Inclusive window bounds `[left, right]` for a local fit.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Window {
    // Left boundary index (inclusive).
    pub left: usize,

    // Right boundary index (inclusive).
    pub right: usize,
}

impl Window {
    // Create a window from explicit bounds.
    #[inline]
    pub fn new(left: usize, right: usize) -> Self {
        debug_assert!(left <= right, "Window::new: left must not exceed right");
        Self { left, right }
    }

    // The whole series `[0, n - 1]`.
    #[inline]
    pub fn full(n: usize) -> Self {
        Self {
            left: 0,
            right: n.saturating_sub(1),
        }
    }

    // The first `width` points, truncated to the series length.
    #[inline]
    pub fn leading(width: usize, n: usize) -> Self {
        Self {
            left: 0,
            right: width.saturating_sub(1).min(n.saturating_sub(1)),
        }
    }

    // The last `width` points, truncated to the series length.
    #[inline]
    pub fn trailing(width: usize, n: usize) -> Self {
        let right = n.saturating_sub(1);
        Self {
            left: (right + 1).saturating_sub(width),
            right,
        }
    }

    // Window of `width` points used for the fit at index `i` when only every
    // `jump`-th point is evaluated. Requires `width < n`.
    #[inline]
    pub fn strided(i: usize, width: usize, n: usize) -> Self {
        debug_assert!(width < n, "strided: width must be smaller than n");

        let half = half_width(width);
        let left = if i + 1 < half {
            0
        } else if i >= n - half {
            n - width
        } else {
            i + 1 - half
        };

        Self {
            left,
            right: left + width - 1,
        }
    }

    // Shift the window one position to the right.
    #[inline]
    pub fn slide(&mut self) {
        self.left += 1;
        self.right += 1;
    }

    // Largest distance from `x` to either boundary.
    #[inline]
    pub fn max_distance<T: Float>(&self, x: T) -> T {
        let left = T::from(self.left).unwrap_or_else(T::zero);
        let right = T::from(self.right).unwrap_or_else(T::zero);
        (x - left).max(right - x)
    }

    // Check if the window is empty.
    #[allow(dead_code)]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // Get the number of points in the window.
    #[inline]
    pub fn len(&self) -> usize {
        self.right - self.left + 1
    }
}

// Number of points from a window's left edge up to and including its centre.
#[inline]
pub fn half_width(width: usize) -> usize {
    width.div_ceil(2)
}
