//! Summary statistics of a seasonal-trend decomposition.
//!
//! ## Purpose
//!
//! This module summarizes the components of a decomposition: means,
//! variances and ranges of each component, a Gaussian log-likelihood of the
//! residuals, and z-scores indicating whether the trend and seasonal
//! components explain more variance than the residual noise.
//!
//! ## Design notes
//!
//! * **Single pass**: All sums are accumulated in one loop over the series.
//! * **Bessel-corrected**: Variances divide by `n - 1`.
//!
//! ## Key concepts
//!
//! * **De-seasonalized**: `data - seasonal`.
//! * **De-trended**: `data - trend`.
//! * **Trendiness z-score**: `(Var(de-seasonalized) - Var(residual)) / sd(Var(residual))`,
//!   where the sample-variance variance is estimated as `2 v^2 / (n - 1)`.
//!
//! ## Invariants
//!
//! * All component slices have the same length, at least 2.
//!
//! ## Non-goals
//!
//! * This module does not provide p-values or formal hypothesis tests.

// External dependencies
use core::f64::consts::PI;
use core::fmt::{Display, Formatter, Result};
use num_traits::Float;

// ============================================================================
// Fit Statistics
// ============================================================================

/// Summary statistics of a decomposition.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FitStats<T> {
    /// Number of points.
    pub sample_size: usize,

    /// Mean of the input series.
    pub data_mean: T,

    /// Variance of the input series.
    pub data_variance: T,

    /// Mean of the trend.
    pub trend_mean: T,

    /// `max(trend) - min(trend)`.
    pub trend_range: T,

    /// Mean of the seasonal component.
    pub seasonal_mean: T,

    /// Variance of the seasonal component.
    pub seasonal_variance: T,

    /// `max(seasonal) - min(seasonal)`.
    pub seasonal_range: T,

    /// Mean of the residuals.
    pub residual_mean: T,

    /// Variance of the residuals.
    pub residual_variance: T,

    /// Maximum-likelihood residual variance (divides by `n`).
    pub residual_variance_mle: T,

    /// Gaussian log-likelihood of the residuals at the MLE variance.
    pub residual_log_likelihood: T,

    /// Mean of `data - seasonal`.
    pub deseasonal_mean: T,

    /// Variance of `data - seasonal`.
    pub deseasonal_variance: T,

    /// Mean of `data - trend`.
    pub detrend_mean: T,

    /// Variance of `data - trend`.
    pub detrend_variance: T,
}

impl<T: Float> FitStats<T> {
    // ========================================================================
    // Constants
    // ========================================================================

    /// Floor applied to the variance of the residual variance in z-scores.
    const MIN_VARIANCE: f64 = 1e-12;

    // ========================================================================
    // Main Computation
    // ========================================================================

    /// Compute statistics from the four component series.
    pub fn compute(data: &[T], trend: &[T], seasonal: &[T], residual: &[T]) -> Self {
        let n = data.len();
        debug_assert!(n >= 2, "FitStats::compute: at least two points are required");

        let mut data_acc = Moments::default();
        let mut seasonal_acc = Moments::default();
        let mut residual_acc = Moments::default();
        let mut deseasonal_acc = Moments::default();
        let mut detrend_acc = Moments::default();
        let mut trend_sum = T::zero();
        let mut trend_min = T::infinity();
        let mut trend_max = T::neg_infinity();
        let mut seasonal_min = T::infinity();
        let mut seasonal_max = T::neg_infinity();

        for i in 0..n {
            let (d, t, s, r) = (data[i], trend[i], seasonal[i], residual[i]);

            data_acc.push(d);
            seasonal_acc.push(s);
            residual_acc.push(r);
            deseasonal_acc.push(d - s);
            detrend_acc.push(d - t);

            trend_sum = trend_sum + t;
            trend_min = trend_min.min(t);
            trend_max = trend_max.max(t);
            seasonal_min = seasonal_min.min(s);
            seasonal_max = seasonal_max.max(s);
        }

        let n_t = T::from(n).unwrap();
        let residual_variance_mle = residual_acc.sum_sq / n_t;
        let two_pi = T::from(2.0 * PI).unwrap();
        let half = T::from(0.5).unwrap();
        let residual_log_likelihood =
            -half * n_t * (T::one() + (two_pi * residual_variance_mle).ln());

        Self {
            sample_size: n,
            data_mean: data_acc.mean(n_t),
            data_variance: data_acc.variance(n_t),
            trend_mean: trend_sum / n_t,
            trend_range: trend_max - trend_min,
            seasonal_mean: seasonal_acc.mean(n_t),
            seasonal_variance: seasonal_acc.variance(n_t),
            seasonal_range: seasonal_max - seasonal_min,
            residual_mean: residual_acc.mean(n_t),
            residual_variance: residual_acc.variance(n_t),
            residual_variance_mle,
            residual_log_likelihood,
            deseasonal_mean: deseasonal_acc.mean(n_t),
            deseasonal_variance: deseasonal_acc.variance(n_t),
            detrend_mean: detrend_acc.mean(n_t),
            detrend_variance: detrend_acc.variance(n_t),
        }
    }

    // ========================================================================
    // Derived Metrics
    // ========================================================================

    /// Standard deviation of the input series.
    pub fn data_std_dev(&self) -> T {
        self.data_variance.sqrt()
    }

    /// Standard deviation of the seasonal component.
    pub fn seasonal_std_dev(&self) -> T {
        self.seasonal_variance.sqrt()
    }

    /// Standard deviation of the residuals.
    pub fn residual_std_dev(&self) -> T {
        self.residual_variance.sqrt()
    }

    /// Gaussian log-likelihood of the residuals for a given noise level.
    pub fn residual_log_likelihood_at(&self, sigma: T) -> T {
        let var = sigma * sigma;
        let n_t = T::from(self.sample_size).unwrap();
        let two_pi = T::from(2.0 * PI).unwrap();
        -T::from(0.5).unwrap() * n_t * (self.residual_variance_mle / var + (two_pi * var).ln())
    }

    /// Estimated variance of the residual sample variance, `2 v^2 / (n - 1)`.
    pub fn residual_variance_variance(&self) -> T {
        let v = self.residual_variance;
        let dof = T::from(self.sample_size - 1).unwrap();
        (v + v) * v / dof
    }

    /// How much more variance the de-seasonalized series carries than the residuals.
    pub fn trendiness_z_score(&self) -> T {
        (self.deseasonal_variance - self.residual_variance) / self.variance_scale()
    }

    /// How much more variance the de-trended series carries than the residuals.
    pub fn seasonal_z_score(&self) -> T {
        (self.detrend_variance - self.residual_variance) / self.variance_scale()
    }

    fn variance_scale(&self) -> T {
        let floor = T::from(Self::MIN_VARIANCE).unwrap();
        self.residual_variance_variance().max(floor).sqrt()
    }
}

// ============================================================================
// Accumulator
// ============================================================================

// Running first and second moments of one series.
#[derive(Clone, Copy)]
struct Moments<T> {
    sum: T,
    sum_sq: T,
}

impl<T: Float> Default for Moments<T> {
    fn default() -> Self {
        Self {
            sum: T::zero(),
            sum_sq: T::zero(),
        }
    }
}

impl<T: Float> Moments<T> {
    #[inline]
    fn push(&mut self, v: T) {
        self.sum = self.sum + v;
        self.sum_sq = self.sum_sq + v * v;
    }

    #[inline]
    fn mean(&self, n: T) -> T {
        self.sum / n
    }

    // Bessel-corrected variance
    #[inline]
    fn variance(&self, n: T) -> T {
        let mean = self.mean(n);
        let dof = n - T::one();
        (self.sum_sq / dof - mean * mean * n / dof).max(T::zero())
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display> Display for FitStats<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "STL Fit Statistics:")?;
        writeln!(f, "  Data Mean:            {:.6}", self.data_mean)?;
        writeln!(f, "  Data Variance:        {:.6}", self.data_variance)?;
        writeln!(f, "  Trend Mean:           {:.6}", self.trend_mean)?;
        writeln!(f, "  Trend Range:          {:.6}", self.trend_range)?;
        writeln!(f, "  Seasonal Mean:        {:.6}", self.seasonal_mean)?;
        writeln!(f, "  Seasonal Variance:    {:.6}", self.seasonal_variance)?;
        writeln!(f, "  Seasonal Range:       {:.6}", self.seasonal_range)?;
        writeln!(f, "  De-Seasonal Mean:     {:.6}", self.deseasonal_mean)?;
        writeln!(f, "  De-Seasonal Variance: {:.6}", self.deseasonal_variance)?;
        writeln!(f, "  De-Trend Mean:        {:.6}", self.detrend_mean)?;
        writeln!(f, "  De-Trend Variance:    {:.6}", self.detrend_variance)?;
        writeln!(f, "  Residual Mean:        {:.6}", self.residual_mean)?;
        writeln!(f, "  Residual Variance:    {:.6}", self.residual_variance)?;
        writeln!(
            f,
            "  Var(ResSampleVar):    {:.6}",
            self.residual_variance_variance()
        )?;
        writeln!(f, "  Trend Z-Score:        {:.4}", self.trendiness_z_score())?;
        writeln!(f, "  Seasonal Z-Score:     {:.4}", self.seasonal_z_score())?;
        Ok(())
    }
}
