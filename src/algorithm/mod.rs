/// Random patch carving
pub mod carve;
/// Border-truncated convolution
pub mod convolve;
/// Pipeline orchestration and the public entry point
pub mod generator;
/// Normalized Gaussian blur kernel
pub mod kernel;
/// Entropy sources and seeded random streams
pub mod seed;
