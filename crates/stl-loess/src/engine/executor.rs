//! Execution engine for seasonal-trend decomposition.
//!
//! ## Purpose
//!
//! This module resolves data-dependent defaults into a complete
//! configuration and runs the STL inner/outer iteration loop over a
//! [`Decomposition`].
//!
//! ## Design notes
//!
//! * Each stage of an inner pass is a free function over the arrays it
//!   touches, so stages can be exercised in isolation.
//! * Working buffers are owned by the executor and reused across passes.
//! * Generic over `Float` types to support f32 and f64.
//!
//! ## Key concepts
//!
//! * **Inner pass**: detrend, cycle-subseries smoothing, low-pass removal of
//!   the remaining seasonality, seasonal and trend update, trend smoothing.
//! * **Outer pass**: `inner_iterations` inner passes. Between outer passes the
//!   robustness weights are recomputed; passes after the first use them.
//!
//! ## Invariants
//!
//! * Robustness weights are read-only during an inner pass.
//! * The returned decomposition satisfies `data = trend + seasonal + residual`.
//!
//! ## Non-goals
//!
//! * This module does not validate input data (handled by `validator`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;
use tracing::{debug, trace};

// Internal dependencies
use crate::algorithms::cyclic::{CyclicSubSeriesSmoother, StlFloat};
use crate::algorithms::interpolation::{LoessConfig, PolynomialDegree};
use crate::algorithms::robustness::compute_robustness_weights;
use crate::algorithms::smoother::WindowedSmoother;
use crate::engine::output::Decomposition;
use crate::math::moving_average::moving_average_into;
use crate::primitives::buffer::DecompositionBuffer;
use crate::primitives::errors::StlError;

// ============================================================================
// Settings
// ============================================================================

/// Partially specified LOESS settings; unset values are resolved per series.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SmootherSettings {
    /// Requested width (before odd correction).
    pub width: Option<usize>,

    /// Requested degree.
    pub degree: Option<PolynomialDegree>,

    /// Requested jump.
    pub jump: Option<usize>,
}

impl SmootherSettings {
    /// Check whether any value was set explicitly.
    #[inline]
    pub fn is_set(&self) -> bool {
        self.width.is_some() || self.degree.is_some() || self.jump.is_some()
    }
}

/// How the seasonal component is smoothed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SeasonalMode {
    /// LOESS across cycles with the configured seasonal width.
    #[default]
    Windowed,

    /// Identical cycles: a constant fit over each whole sub-series.
    Periodic,
}

/// How the trend is smoothed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TrendMode {
    /// LOESS with the configured or default trend width.
    #[default]
    Windowed,

    /// Global constant trend.
    Flat,

    /// Global linear trend.
    Linear,
}

/// Validated decomposition settings prior to per-series resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StlSettings {
    /// Seasonal period.
    pub period: usize,

    /// Seasonal smoother settings.
    pub seasonal: SmootherSettings,

    /// Trend smoother settings.
    pub trend: SmootherSettings,

    /// Low-pass smoother settings.
    pub low_pass: SmootherSettings,

    /// Seasonal smoothing mode.
    pub seasonal_mode: SeasonalMode,

    /// Trend smoothing mode.
    pub trend_mode: TrendMode,

    /// Explicit inner iteration count.
    pub inner_iterations: Option<usize>,

    /// Explicit robust iteration count.
    pub robust_iterations: Option<usize>,

    /// Use the robust iteration defaults.
    pub robust: bool,
}

impl StlSettings {
    // ========================================================================
    // Constants
    // ========================================================================

    /// Default inner iterations for a non-robust decomposition.
    pub const DEFAULT_INNER_ITERATIONS: usize = 2;

    /// Default robust iterations for a non-robust decomposition.
    pub const DEFAULT_ROBUST_ITERATIONS: usize = 0;

    /// Inner iterations used when `robust` is requested.
    pub const ROBUST_INNER_ITERATIONS: usize = 1;

    /// Robust iterations used when `robust` is requested.
    pub const ROBUST_ROBUST_ITERATIONS: usize = 15;

    /// Width multiplier making a smoother effectively global.
    const GLOBAL_WIDTH_FACTOR: usize = 100;

    // ========================================================================
    // Resolution
    // ========================================================================

    /// Resolve every unset value for a series of `n` points.
    pub fn resolve(&self, n: usize) -> Result<ExecutorConfig, StlError> {
        let period = self.period;

        // Seasonal
        let (seasonal_width, seasonal_degree) = match self.seasonal_mode {
            SeasonalMode::Periodic => {
                (Self::GLOBAL_WIDTH_FACTOR * n, PolynomialDegree::Constant)
            }
            SeasonalMode::Windowed => (
                self.seasonal.width.ok_or(StlError::MissingSeasonalWidth)?,
                self.seasonal.degree.unwrap_or_default(),
            ),
        };
        let seasonal = LoessConfig::resolved(seasonal_width, seasonal_degree, self.seasonal.jump);

        // Trend
        let global_trend_width = Self::GLOBAL_WIDTH_FACTOR * period * n;
        let (trend_width, trend_degree) = match self.trend_mode {
            TrendMode::Flat => (global_trend_width, PolynomialDegree::Constant),
            TrendMode::Linear => (global_trend_width, PolynomialDegree::Linear),
            TrendMode::Windowed => (
                self.trend
                    .width
                    .unwrap_or_else(|| default_trend_width(period, seasonal_width)),
                self.trend.degree.unwrap_or_default(),
            ),
        };
        let trend = LoessConfig::resolved(trend_width, trend_degree, self.trend.jump);

        // Low-pass
        let low_pass = LoessConfig::resolved(
            self.low_pass.width.unwrap_or(period),
            self.low_pass.degree.unwrap_or_default(),
            self.low_pass.jump,
        );

        let (inner_iterations, robust_iterations) = if self.robust {
            (Self::ROBUST_INNER_ITERATIONS, Self::ROBUST_ROBUST_ITERATIONS)
        } else {
            (
                self.inner_iterations
                    .unwrap_or(Self::DEFAULT_INNER_ITERATIONS),
                self.robust_iterations
                    .unwrap_or(Self::DEFAULT_ROBUST_ITERATIONS),
            )
        };

        Ok(ExecutorConfig {
            period,
            seasonal,
            trend,
            low_pass,
            inner_iterations,
            robust_iterations,
        })
    }
}

/// Default trend width: `floor(1.5 * period / (1 - 1.5 / seasonal_width) + 0.5)`.
pub fn default_trend_width(period: usize, seasonal_width: usize) -> usize {
    let p = period as f64;
    let s = seasonal_width as f64;
    (1.5 * p / (1.0 - 1.5 / s) + 0.5) as usize
}

/// Fully resolved decomposition configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecutorConfig {
    /// Seasonal period.
    pub period: usize,

    /// Cycle-subseries smoother.
    pub seasonal: LoessConfig,

    /// Trend smoother.
    pub trend: LoessConfig,

    /// Low-pass smoother.
    pub low_pass: LoessConfig,

    /// Inner passes per outer pass.
    pub inner_iterations: usize,

    /// Outer passes after the first.
    pub robust_iterations: usize,
}

// ============================================================================
// Executor
// ============================================================================

/// Runs the STL iteration loop with reusable working memory.
#[derive(Debug, Clone)]
pub struct StlExecutor<T> {
    config: ExecutorConfig,
    cyclic: CyclicSubSeriesSmoother<T>,
    buffer: DecompositionBuffer<T>,
}

impl<T: StlFloat> StlExecutor<T> {
    /// Create an executor for a resolved configuration.
    pub fn new(config: ExecutorConfig) -> Self {
        Self {
            config,
            cyclic: CyclicSubSeriesSmoother::new(config.seasonal, config.period),
            buffer: DecompositionBuffer::default(),
        }
    }

    /// The resolved configuration.
    #[inline]
    pub fn config(&self) -> &ExecutorConfig {
        &self.config
    }

    /// Decompose `data` into trend, seasonal and residual components.
    ///
    /// `data` must already be validated against the period.
    pub fn run(&mut self, data: &[T]) -> Decomposition<T> {
        let n = data.len();
        let config = self.config;
        let period = config.period;

        debug!(
            n,
            period,
            seasonal = %config.seasonal,
            trend = %config.trend,
            low_pass = %config.low_pass,
            inner = config.inner_iterations,
            robust = config.robust_iterations,
            "starting decomposition"
        );

        self.buffer.prepare(n, period);
        let mut decomposition = Decomposition::new(data.to_vec());

        let mut outer = 0;
        loop {
            let use_weights = outer > 0;
            debug!(pass = outer, weighted = use_weights, "outer pass");

            for inner in 0..config.inner_iterations {
                trace!(pass = outer, inner, "inner pass");

                let parts = decomposition.parts_mut();
                let weights = if use_weights {
                    Some(parts.weights.as_slice())
                } else {
                    None
                };

                detrend(
                    parts.data,
                    parts.trend.as_slice(),
                    self.buffer.detrended.as_mut_slice(),
                );
                self.cyclic.smooth_seasonal(
                    self.buffer.detrended.as_slice(),
                    self.buffer.extended_seasonal.as_mut_slice(),
                    weights,
                );
                remove_seasonality(&mut self.buffer, period, &config.low_pass);
                update_seasonal_and_trend(
                    parts.data,
                    self.buffer.extended_seasonal.as_slice(),
                    self.buffer.low_pass.as_slice(),
                    period,
                    parts.seasonal.as_mut_slice(),
                    parts.trend.as_mut_slice(),
                );
                smooth_trend(
                    parts.trend.as_mut_slice(),
                    self.buffer.trend_input.as_vec_mut(),
                    &config.trend,
                    weights,
                );
            }

            outer += 1;
            if outer > config.robust_iterations {
                break;
            }

            let parts = decomposition.parts_mut();
            let scale = compute_robustness_weights(
                parts.data,
                parts.trend.as_slice(),
                parts.seasonal.as_slice(),
                parts.weights.as_mut_slice(),
                self.buffer.abs_residuals.as_mut_slice(),
            );
            trace!(
                pass = outer,
                scale = scale.to_f64().unwrap_or(f64::NAN),
                "recomputed robustness weights"
            );
        }

        decomposition.update_residuals();
        decomposition
    }
}

// ============================================================================
// Inner Pass Stages
// ============================================================================

/// `detrended = data - trend`.
pub fn detrend<T: Float>(data: &[T], trend: &[T], detrended: &mut [T]) {
    for ((out, &d), &t) in detrended.iter_mut().zip(data).zip(trend) {
        *out = d - t;
    }
}

/// Low-pass filter the extended cycle-subseries result into `buffer.low_pass`.
///
/// Applies moving averages of length `period`, `period` and 3, then the
/// low-pass LOESS smoother.
pub fn remove_seasonality<T: Float>(
    buffer: &mut DecompositionBuffer<T>,
    period: usize,
    low_pass: &LoessConfig,
) {
    let DecompositionBuffer {
        extended_seasonal,
        average_a,
        average_b,
        average_c,
        low_pass: output,
        ..
    } = buffer;

    moving_average_into(extended_seasonal.as_slice(), period, average_a.as_mut_slice());
    moving_average_into(average_a.as_slice(), period, average_b.as_mut_slice());
    moving_average_into(average_b.as_slice(), 3, average_c.as_mut_slice());

    WindowedSmoother::new(average_c.as_slice(), low_pass, None)
        .smooth_into(output.as_mut_slice());
}

/// `seasonal = extended[period + i] - low_pass`, then `trend = data - seasonal`.
pub fn update_seasonal_and_trend<T: Float>(
    data: &[T],
    extended_seasonal: &[T],
    low_pass: &[T],
    period: usize,
    seasonal: &mut [T],
    trend: &mut [T],
) {
    for i in 0..data.len() {
        seasonal[i] = extended_seasonal[period + i] - low_pass[i];
        trend[i] = data[i] - seasonal[i];
    }
}

/// Smooth `trend` in place with the trend LOESS configuration.
pub fn smooth_trend<T: Float>(
    trend: &mut [T],
    scratch: &mut Vec<T>,
    config: &LoessConfig,
    weights: Option<&[T]>,
) {
    scratch.clear();
    scratch.extend_from_slice(trend);
    WindowedSmoother::new(scratch.as_slice(), config, weights).smooth_into(trend);
}
