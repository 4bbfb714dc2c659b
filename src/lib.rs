//! Grayscale noise image generation by random patch carving and Gaussian blur
//!
//! A uniform white field is carved with randomly placed square holes drawn
//! from a seeded stream, smoothed with a normalized Gaussian kernel, and
//! rasterized to an 8-bit grayscale PNG.

#![forbid(unsafe_code)]

/// Patch carving, blur kernel, convolution and pipeline orchestration
pub mod algorithm;
/// Configuration, error handling, rasterization and progress display
pub mod io;
/// Mathematical utilities for kernel evaluation
pub mod math;
/// Square intensity field
pub mod spatial;

pub use algorithm::generator::{NoiseGenerator, NoiseImage, generate_noise_image};
pub use io::configuration::NoiseConfig;
pub use io::error::{NoiseError, Result};
