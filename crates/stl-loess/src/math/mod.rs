//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure mathematical functions used throughout STL:
//! - Tri-cube neighborhood weights for local regression
//! - Robust scale (median of absolute residuals)
//! - Running-sum moving averages for the low-pass filter
//!
//! These are reusable mathematical building blocks with no algorithm-specific logic.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Tri-cube neighborhood weights.
pub mod kernel;

/// Robust scale estimation (median of absolute residuals).
pub mod scaling;

/// Running-sum moving averages.
pub mod moving_average;
