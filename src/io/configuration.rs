//! Generation constants and the validated parameter set

use crate::io::error::{Result, invalid_parameter};
use std::path::PathBuf;

/// Intensity every cell starts with
pub const FULL_INTENSITY: f32 = 1.0;

/// Intensity written into carved cells
pub const CARVED_INTENSITY: f32 = 0.0;

/// Exclusive upper bound for drawn seeds
pub const SEED_BOUND: u64 = 1_000_000_000;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed field side length
pub const MAX_FIELD_SIZE: usize = 10_000;

// Default values used by the binary
/// Default field side length in pixels
pub const DEFAULT_SIZE: usize = 512;
/// Default number of carved patches
pub const DEFAULT_RUNS: usize = 200;
/// Default exclusive bound on patch half-width, also the blur sigma
pub const DEFAULT_MAX_PATCH_SIZE: usize = 12;

// Output settings
/// Relative path the generated PNG is written to
pub const DEFAULT_OUTPUT_PATH: &str = "output/image.png";
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

/// Parameters for a single generation run
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NoiseConfig {
    /// Side length of the square field
    pub size: usize,
    /// Number of patches carved into the field
    pub runs: usize,
    /// Exclusive upper bound on a patch half-width
    pub max_patch_size: usize,
    /// Destination of the encoded PNG
    pub output_path: PathBuf,
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SIZE, DEFAULT_RUNS, DEFAULT_MAX_PATCH_SIZE)
    }
}

impl NoiseConfig {
    /// Create a configuration writing to [`DEFAULT_OUTPUT_PATH`]
    pub fn new(size: usize, runs: usize, max_patch_size: usize) -> Self {
        Self {
            size,
            runs,
            max_patch_size,
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }

    /// Replace the output path
    #[must_use]
    pub fn with_output_path(mut self, output_path: impl Into<PathBuf>) -> Self {
        self.output_path = output_path.into();
        self
    }

    /// Check the parameters before any buffer is allocated
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `size` is zero or larger than [`MAX_FIELD_SIZE`]
    /// - `max_patch_size` is zero, which would leave the blur without a sigma
    pub fn validate(&self) -> Result<()> {
        if self.size == 0 {
            return Err(invalid_parameter(
                "size",
                &self.size,
                &"field must be at least one pixel wide",
            ));
        }
        if self.size > MAX_FIELD_SIZE {
            return Err(invalid_parameter(
                "size",
                &self.size,
                &format!("field side length is limited to {MAX_FIELD_SIZE}"),
            ));
        }
        if self.max_patch_size == 0 {
            return Err(invalid_parameter(
                "max_patch_size",
                &self.max_patch_size,
                &"must be positive; it doubles as the blur sigma",
            ));
        }
        Ok(())
    }

    /// Blur radius parameter, coupled to the patch-size bound
    pub const fn blur_sigma(&self) -> f32 {
        self.max_patch_size as f32
    }

    /// Side length of the blur kernel for this field
    pub fn kernel_size(&self) -> usize {
        kernel_size_for(self.size)
    }
}

/// Kernel side length for a field of `size` pixels
///
/// Grows with the square root of the field size and is rounded up to the
/// next odd number so the kernel always has a center cell.
pub fn kernel_size_for(size: usize) -> usize {
    let base = size.isqrt() + 1;
    if base % 2 == 0 { base + 1 } else { base }
}
