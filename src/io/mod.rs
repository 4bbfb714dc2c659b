//! Input/output: configuration, errors, rasterization and progress display

/// Generation constants and the validated parameter set
pub mod configuration;
/// Error types and constructors
pub mod error;
/// Rasterization and PNG export
pub mod image;
/// Terminal progress display
pub mod progress;
