//! Error types for STL decomposition.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur while configuring
//! LOESS smoothers or running a seasonal-trend decomposition.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the offending values (e.g., actual vs. required lengths).
//! * **Fail-fast**: Every variant is raised before any smoothing work begins.
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Configuration errors**: Invalid width, degree, jump, period, iteration
//!    counts, or mutually inconsistent builder flags.
//! 2. **Dimension errors**: The input series is too short for the requested period.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Error messages are consistent in tone and formatting.
//!
//! ## Non-goals
//!
//! * Local fit failures are not errors; they are reported as `None` by the
//!   interpolator and resolved by the caller's fallback policy.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Kind
// ============================================================================

/// Coarse classification of an [`StlError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Invalid or inconsistent configuration.
    Configuration,

    /// Input data does not fit the requested configuration.
    Dimension,
}

// ============================================================================
// Error Type
// ============================================================================

/// Error type for STL operations.
#[derive(Debug, Clone, PartialEq)]
pub enum StlError {
    /// Input series is empty.
    EmptyInput,

    /// Input series contains NaN or infinite values.
    InvalidNumericValue(String),

    /// Input series is shorter than the configuration requires.
    TooFewPoints {
        /// Number of points provided.
        got: usize,
        /// Minimum required points.
        min: usize,
    },

    /// A LOESS width was required but never set.
    MissingWidth,

    /// LOESS width must be positive.
    InvalidWidth(usize),

    /// LOESS degree must be 0, 1 or 2.
    InvalidDegree(usize),

    /// LOESS jump must be at least 1.
    InvalidJump(usize),

    /// The seasonal period was never set.
    MissingPeriod,

    /// The seasonal period must be at least 2.
    InvalidPeriod(usize),

    /// Neither a seasonal width nor periodic mode was requested.
    MissingSeasonalWidth,

    /// Iteration count is out of range.
    InvalidIterations {
        /// Which iteration count (e.g., "inner_iterations").
        parameter: &'static str,
        /// The value provided.
        got: usize,
        /// Smallest accepted value.
        min: usize,
        /// Largest accepted value.
        max: usize,
    },

    /// Two settings cannot be combined.
    ConflictingParameters {
        /// The setting that was explicitly provided.
        parameter: &'static str,
        /// The mode or flag it conflicts with.
        conflicts_with: &'static str,
    },

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

impl StlError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyInput | Self::InvalidNumericValue(_) | Self::TooFewPoints { .. } => {
                ErrorKind::Dimension
            }
            _ => ErrorKind::Configuration,
        }
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for StlError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptyInput => write!(f, "Input series is empty"),
            Self::InvalidNumericValue(s) => write!(f, "Invalid numeric value: {s}"),
            Self::TooFewPoints { got, min } => {
                write!(f, "Too few points: got {got}, need at least {min}")
            }
            Self::MissingWidth => write!(f, "Missing width: width must be set before use"),
            Self::InvalidWidth(width) => write!(f, "Invalid width: {width} (must be > 0)"),
            Self::InvalidDegree(degree) => {
                write!(f, "Invalid degree: {degree} (must be 0, 1 or 2)")
            }
            Self::InvalidJump(jump) => write!(f, "Invalid jump: {jump} (must be >= 1)"),
            Self::MissingPeriod => write!(f, "Missing period: period must be set before use"),
            Self::InvalidPeriod(period) => {
                write!(f, "Invalid period: {period} (must be at least 2)")
            }
            Self::MissingSeasonalWidth => {
                write!(f, "Missing seasonal width: set seasonal_width or enable periodic")
            }
            Self::InvalidIterations {
                parameter,
                got,
                min,
                max,
            } => {
                write!(f, "Invalid {parameter}: {got} (must be in [{min}, {max}])")
            }
            Self::ConflictingParameters {
                parameter,
                conflicts_with,
            } => {
                write!(f, "Parameter '{parameter}' cannot be combined with '{conflicts_with}'")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for StlError {}
