//! Mathematical utilities for the blur stage

/// Gaussian density evaluation
pub mod gaussian;
