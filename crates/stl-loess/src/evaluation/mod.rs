//! Layer 4: Evaluation
//!
//! # Purpose
//!
//! This layer calculates summary statistics from a finished decomposition:
//! - Component means, variances and ranges
//! - Residual log-likelihood
//! - Trendiness and seasonality z-scores
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Decomposition fit statistics.
pub mod stats;
