//! High-level API for STL decomposition.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry points: a fluent builder for a
//! single LOESS smoother configuration, a fluent builder for the full
//! seasonal-trend decomposition, and one-call convenience functions.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builders with defaults for every optional parameter.
//! * **Validated**: Configuration-only checks run in `build()`; checks that
//!   need the series run in `decompose()` before any smoothing.
//! * **Type-Safe**: Generic over `StlFloat` types for flexible precision.
//!
//! ## Key concepts
//!
//! ### Configuration Flow
//!
//! 1. Create a [`StlBuilder`] via `Stl::new()`.
//! 2. Chain configuration methods (`.period()`, `.seasonal_width()`, etc.).
//! 3. Call `.build()` to obtain a [`SeasonalTrendLoess`].
//! 4. Call `.decompose(&data)` for each series.

// Internal dependencies
use crate::engine::executor::StlExecutor;
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::algorithms::cyclic::{CyclicSubSeriesSmoother, StlFloat};
pub use crate::algorithms::interpolation::{
    LocalRegressionInterpolator, LoessConfig, PolynomialDegree,
};
pub use crate::algorithms::smoother::{WindowLayout, WindowedSmoother};
pub use crate::engine::executor::{
    ExecutorConfig, SeasonalMode, SmootherSettings, StlSettings, TrendMode,
};
pub use crate::engine::output::Decomposition;
pub use crate::evaluation::stats::FitStats;
pub use crate::primitives::errors::{ErrorKind, StlError};

// ============================================================================
// LOESS Configuration Builder
// ============================================================================

impl LoessConfig {
    /// Start building a configuration.
    pub fn builder() -> LoessConfigBuilder {
        LoessConfigBuilder::new()
    }

    /// Build a configuration in one call.
    ///
    /// The width is corrected to an odd value of at least 3; an absent jump
    /// defaults to `max(1, floor(0.1 * width + 0.9))`.
    pub fn new(width: usize, degree: usize, jump: Option<usize>) -> Result<Self, StlError> {
        let width = Validator::validate_width(Some(width))?;
        let degree = Validator::validate_degree(degree)?;
        Validator::validate_jump(jump)?;
        Ok(Self::resolved(width, degree, jump))
    }
}

/// Fluent builder for [`LoessConfig`].
#[derive(Debug, Clone, Default)]
pub struct LoessConfigBuilder {
    /// Window width in points.
    pub width: Option<usize>,

    /// Local polynomial degree (0, 1 or 2).
    pub degree: Option<usize>,

    /// Stride between explicitly fitted points.
    pub jump: Option<usize>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl LoessConfigBuilder {
    /// Create a new builder with nothing set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the window width.
    pub fn width(mut self, width: usize) -> Self {
        if self.width.is_some() {
            self.duplicate_param = Some("width");
        }
        self.width = Some(width);
        self
    }

    /// Set the local polynomial degree.
    pub fn degree(mut self, degree: usize) -> Self {
        if self.degree.is_some() {
            self.duplicate_param = Some("degree");
        }
        self.degree = Some(degree);
        self
    }

    /// Set the jump between explicitly fitted points.
    pub fn jump(mut self, jump: usize) -> Self {
        if self.jump.is_some() {
            self.duplicate_param = Some("jump");
        }
        self.jump = Some(jump);
        self
    }

    /// Validate and build the configuration.
    pub fn build(self) -> Result<LoessConfig, StlError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;
        let width = Validator::validate_width(self.width)?;
        let degree = match self.degree {
            Some(d) => Validator::validate_degree(d)?,
            None => PolynomialDegree::default(),
        };
        Validator::validate_jump(self.jump)?;
        Ok(LoessConfig::resolved(width, degree, self.jump))
    }
}

// ============================================================================
// STL Builder
// ============================================================================

/// Fluent builder for a seasonal-trend decomposition.
#[derive(Debug, Clone, Default)]
pub struct StlBuilder {
    /// Seasonal period (observations per cycle).
    pub period: Option<usize>,

    /// Seasonal smoother width.
    pub seasonal_width: Option<usize>,

    /// Seasonal smoother degree.
    pub seasonal_degree: Option<usize>,

    /// Seasonal smoother jump.
    pub seasonal_jump: Option<usize>,

    /// Trend smoother width.
    pub trend_width: Option<usize>,

    /// Trend smoother degree.
    pub trend_degree: Option<usize>,

    /// Trend smoother jump.
    pub trend_jump: Option<usize>,

    /// Low-pass smoother width.
    pub low_pass_width: Option<usize>,

    /// Low-pass smoother degree.
    pub low_pass_degree: Option<usize>,

    /// Low-pass smoother jump.
    pub low_pass_jump: Option<usize>,

    /// Inner iterations per outer pass.
    pub inner_iterations: Option<usize>,

    /// Robustness iterations (outer passes after the first).
    pub robust_iterations: Option<usize>,

    /// Treat the seasonal pattern as identical across cycles.
    pub periodic: Option<bool>,

    /// Force a global constant trend.
    pub flat_trend: Option<bool>,

    /// Force a global linear trend.
    pub linear_trend: Option<bool>,

    /// Use the robust iteration defaults.
    pub robust: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

// Record a setter call, flagging repeats.
macro_rules! set_once {
    ($self:ident, $field:ident, $value:expr) => {{
        if $self.$field.is_some() {
            $self.duplicate_param = Some(stringify!($field));
        }
        $self.$field = Some($value);
        $self
    }};
}

impl StlBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the seasonal period.
    pub fn period(mut self, period: usize) -> Self {
        set_once!(self, period, period)
    }

    /// Set the seasonal smoother width.
    pub fn seasonal_width(mut self, width: usize) -> Self {
        set_once!(self, seasonal_width, width)
    }

    /// Set the seasonal smoother degree (0, 1 or 2).
    pub fn seasonal_degree(mut self, degree: usize) -> Self {
        set_once!(self, seasonal_degree, degree)
    }

    /// Set the seasonal smoother jump.
    pub fn seasonal_jump(mut self, jump: usize) -> Self {
        set_once!(self, seasonal_jump, jump)
    }

    /// Set the trend smoother width.
    pub fn trend_width(mut self, width: usize) -> Self {
        set_once!(self, trend_width, width)
    }

    /// Set the trend smoother degree (0, 1 or 2).
    pub fn trend_degree(mut self, degree: usize) -> Self {
        set_once!(self, trend_degree, degree)
    }

    /// Set the trend smoother jump.
    pub fn trend_jump(mut self, jump: usize) -> Self {
        set_once!(self, trend_jump, jump)
    }

    /// Set the low-pass smoother width.
    pub fn low_pass_width(mut self, width: usize) -> Self {
        set_once!(self, low_pass_width, width)
    }

    /// Set the low-pass smoother degree (0, 1 or 2).
    pub fn low_pass_degree(mut self, degree: usize) -> Self {
        set_once!(self, low_pass_degree, degree)
    }

    /// Set the low-pass smoother jump.
    pub fn low_pass_jump(mut self, jump: usize) -> Self {
        set_once!(self, low_pass_jump, jump)
    }

    /// Set the number of inner iterations per outer pass.
    pub fn inner_iterations(mut self, iterations: usize) -> Self {
        set_once!(self, inner_iterations, iterations)
    }

    /// Set the number of robustness iterations.
    pub fn robust_iterations(mut self, iterations: usize) -> Self {
        set_once!(self, robust_iterations, iterations)
    }

    /// Assume an identical seasonal pattern in every cycle.
    pub fn periodic(mut self) -> Self {
        set_once!(self, periodic, true)
    }

    /// Fit a global constant trend.
    pub fn flat_trend(mut self) -> Self {
        set_once!(self, flat_trend, true)
    }

    /// Fit a global linear trend.
    pub fn linear_trend(mut self) -> Self {
        set_once!(self, linear_trend, true)
    }

    /// Use 1 inner and 15 robustness iterations.
    pub fn robust(mut self) -> Self {
        set_once!(self, robust, true)
    }

    /// Validate the configuration and build a decomposer.
    pub fn build(self) -> Result<SeasonalTrendLoess, StlError> {
        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let period = Validator::validate_period(self.period)?;

        let periodic = self.periodic.unwrap_or(false);
        let flat = self.flat_trend.unwrap_or(false);
        let linear = self.linear_trend.unwrap_or(false);
        let robust = self.robust.unwrap_or(false);

        // Mutually exclusive settings
        Validator::validate_no_conflict(flat, "flat_trend", linear, "linear_trend")?;
        for (is_set, parameter) in [
            (self.seasonal_width.is_some(), "seasonal_width"),
            (self.seasonal_degree.is_some(), "seasonal_degree"),
            (self.seasonal_jump.is_some(), "seasonal_jump"),
        ] {
            Validator::validate_no_conflict(is_set, parameter, periodic, "periodic")?;
        }
        for (is_set, parameter) in [
            (self.trend_width.is_some(), "trend_width"),
            (self.trend_degree.is_some(), "trend_degree"),
            (self.trend_jump.is_some(), "trend_jump"),
        ] {
            Validator::validate_no_conflict(is_set, parameter, flat, "flat_trend")?;
            Validator::validate_no_conflict(is_set, parameter, linear, "linear_trend")?;
        }
        Validator::validate_no_conflict(
            self.inner_iterations.is_some(),
            "inner_iterations",
            robust,
            "robust",
        )?;
        Validator::validate_no_conflict(
            self.robust_iterations.is_some(),
            "robust_iterations",
            robust,
            "robust",
        )?;

        if !periodic && self.seasonal_width.is_none() {
            return Err(StlError::MissingSeasonalWidth);
        }

        let seasonal = smoother_settings(
            self.seasonal_width,
            self.seasonal_degree,
            self.seasonal_jump,
        )?;
        let trend = smoother_settings(self.trend_width, self.trend_degree, self.trend_jump)?;
        let low_pass = smoother_settings(
            self.low_pass_width,
            self.low_pass_degree,
            self.low_pass_jump,
        )?;

        if let Some(inner) = self.inner_iterations {
            Validator::validate_iterations("inner_iterations", inner, 1)?;
        }
        if let Some(outer) = self.robust_iterations {
            Validator::validate_iterations("robust_iterations", outer, 0)?;
        }

        Ok(SeasonalTrendLoess {
            settings: StlSettings {
                period,
                seasonal,
                trend,
                low_pass,
                seasonal_mode: if periodic {
                    SeasonalMode::Periodic
                } else {
                    SeasonalMode::Windowed
                },
                trend_mode: if flat {
                    TrendMode::Flat
                } else if linear {
                    TrendMode::Linear
                } else {
                    TrendMode::Windowed
                },
                inner_iterations: self.inner_iterations,
                robust_iterations: self.robust_iterations,
                robust,
            },
        })
    }
}

// Validate the optional values of one smoother.
fn smoother_settings(
    width: Option<usize>,
    degree: Option<usize>,
    jump: Option<usize>,
) -> Result<SmootherSettings, StlError> {
    Validator::validate_optional_width(width)?;
    Validator::validate_jump(jump)?;
    let degree = degree.map(Validator::validate_degree).transpose()?;
    Ok(SmootherSettings {
        width,
        degree,
        jump,
    })
}

// ============================================================================
// Decomposer
// ============================================================================

/// A validated seasonal-trend decomposition configuration.
///
/// Reusable across series; defaults that depend on the series length are
/// resolved per call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeasonalTrendLoess {
    settings: StlSettings,
}

impl SeasonalTrendLoess {
    /// The validated settings.
    #[inline]
    pub fn settings(&self) -> &StlSettings {
        &self.settings
    }

    /// Resolve defaults for a series of `n` points without running anything.
    pub fn resolve(&self, n: usize) -> Result<ExecutorConfig, StlError> {
        self.settings.resolve(n)
    }

    /// Decompose `data` into trend, seasonal and residual components.
    pub fn decompose<T: StlFloat>(
        &self,
        data: &[T],
    ) -> Result<Decomposition<T>, StlError> {
        Validator::validate_series(data, self.settings.period)?;
        let config = self.settings.resolve(data.len())?;
        Ok(StlExecutor::new(config).run(data))
    }
}

// ============================================================================
// Convenience Entry Points
// ============================================================================

/// Periodic decomposition with one inner pass and no robustness passes.
pub fn periodic_decomposition<T: StlFloat>(
    data: &[T],
    period: usize,
) -> Result<Decomposition<T>, StlError> {
    StlBuilder::new()
        .period(period)
        .periodic()
        .inner_iterations(1)
        .robust_iterations(0)
        .build()?
        .decompose(data)
}

/// Periodic decomposition with one inner pass and one robustness pass.
pub fn robust_periodic_decomposition<T: StlFloat>(
    data: &[T],
    period: usize,
) -> Result<Decomposition<T>, StlError> {
    StlBuilder::new()
        .period(period)
        .periodic()
        .inner_iterations(1)
        .robust_iterations(1)
        .build()?
        .decompose(data)
}
