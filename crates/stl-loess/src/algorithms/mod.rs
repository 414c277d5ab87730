//! Layer 3: Algorithms
//!
//! This layer implements local regression, whole-series LOESS smoothing,
//! cycle-subseries smoothing and robustness reweighting. It contains the
//! numerical core of STL but is orchestrated by the engine layer.

// Local regression at one position and the LOESS configuration value.
pub mod interpolation;

// Whole-series LOESS smoothing.
pub mod smoother;

// Per-phase smoothing of the seasonal cycle.
pub mod cyclic;

// Robustness weight updates for outlier downweighting.
pub mod robustness;
