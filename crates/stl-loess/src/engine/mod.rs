//! Layer 5: Engine
//!
//! # Purpose
//!
//! This layer orchestrates the decomposition by coordinating the
//! algorithms (interpolation, smoothing, cycle-subseries smoothing,
//! robustness). It provides the inner/outer iteration loop, input
//! validation and the output record.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine ← You are here
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Decomposition loop and default resolution.
pub mod executor;

/// Validation utilities.
pub mod validator;

/// Output types for STL operations.
pub mod output;
