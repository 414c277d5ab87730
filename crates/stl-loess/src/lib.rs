//! # STL — Seasonal-Trend decomposition using LOESS for Rust
//!
//! Splits an equally spaced time series into trend, seasonal and residual
//! components with the iterative STL procedure of Cleveland et al. (1990).
//!
//! ## What is STL?
//!
//! STL alternates two smoothing steps. The seasonal step smooths every phase
//! of the cycle (all Januaries, all Februaries, ...) across cycles with
//! LOESS and removes any low-frequency leakage with moving averages. The
//! trend step smooths the de-seasonalized series with LOESS. Optional outer
//! robustness passes downweight outliers with bisquare weights computed from
//! the residuals.
//!
//! ## Quick Start
//!
//! ```rust
//! use stl_loess::prelude::*;
//!
//! // Three years of monthly data
//! let data: Vec<f64> = (0..36)
//!     .map(|i| 10.0 + 0.5 * i as f64 + [3.0, 1.0, -1.0, -3.0][i % 4])
//!     .collect();
//!
//! let stl = Stl::new()
//!     .period(4)
//!     .seasonal_width(7)
//!     .build()?;
//!
//! let decomposition = stl.decompose(&data)?;
//!
//! for i in 0..data.len() {
//!     let sum = decomposition.trend()[i]
//!         + decomposition.seasonal()[i]
//!         + decomposition.residual()[i];
//!     assert!((sum - data[i]).abs() < 1e-9);
//! }
//! # Result::<(), StlError>::Ok(())
//! ```
//!
//! ### Robust and Periodic Variants
//!
//! ```rust
//! use stl_loess::prelude::*;
//! # let data: Vec<f64> = (0..48).map(|i| (i % 12) as f64 + 0.1 * i as f64).collect();
//!
//! // Identical seasonal pattern in every cycle, robust to outliers
//! let stl = Stl::new().period(12).periodic().robust().build()?;
//! let decomposition = stl.decompose(&data)?;
//!
//! println!("{}", decomposition);
//! println!("{}", decomposition.fit_stats());
//! # Result::<(), StlError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! Configuration mistakes are reported by `build()`; problems with the
//! series itself (too short for the period, non-finite values) are reported
//! by `decompose()` before any smoothing takes place. Both return
//! [`StlError`](prelude::StlError), whose `kind()` separates the two.
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! Disable default features to remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! stl-loess = { version = "0.1", default-features = false }
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): standard library support.
//! - `parallel`: smooth the phases of the cycle on the rayon thread pool.
//! - `serde`: `Serialize`/`Deserialize` for the output and configuration types.
//! - `dev`: exposes the internal layers under `internals` for testing.
//!
//! ## References
//!
//! - Cleveland, R. B., Cleveland, W. S., McRae, J. E., Terpenning, I. (1990).
//!   "STL: A Seasonal-Trend Decomposition Procedure Based on Loess"

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - data structures and basic utilities.
mod primitives;

// Layer 2: Math - pure mathematical functions.
mod math;

// Layer 3: Algorithms - core LOESS and STL algorithms.
mod algorithms;

// Layer 4: Evaluation - post-processing statistics.
mod evaluation;

// Layer 5: Engine - orchestration and execution control.
mod engine;

// High-level fluent API for STL decomposition.
mod api;

pub use api::{periodic_decomposition, robust_periodic_decomposition};

// Standard STL prelude.
pub mod prelude {
    pub use crate::api::{
        CyclicSubSeriesSmoother, Decomposition, ErrorKind, FitStats, LocalRegressionInterpolator,
        LoessConfig, LoessConfigBuilder, PolynomialDegree, PolynomialDegree::Constant,
        PolynomialDegree::Linear, PolynomialDegree::Quadratic, SeasonalTrendLoess,
        StlBuilder as Stl, StlError, StlFloat, WindowedSmoother, periodic_decomposition,
        robust_periodic_decomposition,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
