//! Input validation for STL configuration and data.
//!
//! ## Purpose
//!
//! This module checks smoother parameters, iteration counts, flag
//! combinations and input series before any smoothing work starts.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Configuration checks**: Width, degree, jump, period, iteration bounds
//!   and mutually exclusive settings.
//! * **Dimension checks**: At least two full periods of finite data.
//!
//! ## Invariants
//!
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not apply defaults or width correction.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::interpolation::PolynomialDegree;
use crate::primitives::errors::StlError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for STL configuration and input data.
///
/// All methods fail fast upon identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Constants
    // ========================================================================

    /// Upper bound on inner and robust iteration counts.
    pub const MAX_ITERATIONS: usize = 1000;

    // ========================================================================
    // Core Input Validation
    // ========================================================================

    /// Validate a series against a seasonal period.
    pub fn validate_series<T: Float>(data: &[T], period: usize) -> Result<(), StlError> {
        // Check 1: Non-empty input
        if data.is_empty() {
            return Err(StlError::EmptyInput);
        }

        // Check 2: At least two full periods
        let min = 2 * period;
        if data.len() < min {
            return Err(StlError::TooFewPoints {
                got: data.len(),
                min,
            });
        }

        // Check 3: All values finite
        for (i, v) in data.iter().enumerate() {
            if !v.is_finite() {
                return Err(StlError::InvalidNumericValue(format!(
                    "data[{}]={}",
                    i,
                    v.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }

        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate a LOESS width that must be present and positive.
    pub fn validate_width(width: Option<usize>) -> Result<usize, StlError> {
        match width {
            None => Err(StlError::MissingWidth),
            Some(0) => Err(StlError::InvalidWidth(0)),
            Some(w) => Ok(w),
        }
    }

    /// Validate an optional LOESS width.
    pub fn validate_optional_width(width: Option<usize>) -> Result<(), StlError> {
        match width {
            Some(0) => Err(StlError::InvalidWidth(0)),
            _ => Ok(()),
        }
    }

    /// Validate a polynomial degree.
    pub fn validate_degree(degree: usize) -> Result<PolynomialDegree, StlError> {
        PolynomialDegree::try_from(degree)
    }

    /// Validate an optional jump.
    pub fn validate_jump(jump: Option<usize>) -> Result<(), StlError> {
        match jump {
            Some(0) => Err(StlError::InvalidJump(0)),
            _ => Ok(()),
        }
    }

    /// Validate the seasonal period.
    pub fn validate_period(period: Option<usize>) -> Result<usize, StlError> {
        match period {
            None => Err(StlError::MissingPeriod),
            Some(p) if p < 2 => Err(StlError::InvalidPeriod(p)),
            Some(p) => Ok(p),
        }
    }

    /// Validate an iteration count against `[min, MAX_ITERATIONS]`.
    pub fn validate_iterations(
        parameter: &'static str,
        iterations: usize,
        min: usize,
    ) -> Result<(), StlError> {
        if iterations < min || iterations > Self::MAX_ITERATIONS {
            return Err(StlError::InvalidIterations {
                parameter,
                got: iterations,
                min,
                max: Self::MAX_ITERATIONS,
            });
        }
        Ok(())
    }

    /// Reject an explicit setting that a selected mode overrides.
    pub fn validate_no_conflict(
        is_set: bool,
        parameter: &'static str,
        mode_enabled: bool,
        mode: &'static str,
    ) -> Result<(), StlError> {
        if is_set && mode_enabled {
            return Err(StlError::ConflictingParameters {
                parameter,
                conflicts_with: mode,
            });
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), StlError> {
        if let Some(param) = duplicate_param {
            return Err(StlError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
