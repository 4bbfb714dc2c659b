//! Normalized Gaussian blur kernel

use ndarray::Array2;

use crate::io::error::{Result, computation_error};
use crate::math::gaussian::gaussian_density;

/// Square matrix of blur weights summing to one
#[derive(Debug, Clone, PartialEq)]
pub struct BlurKernel {
    weights: Array2<f32>,
    sigma: f32,
}

impl BlurKernel {
    /// Build a normalized Gaussian kernel
    ///
    /// Raw weights are evaluated only for an odd `kernel_size` and a positive
    /// `sigma`; otherwise every raw weight stays zero. Weights are then scaled
    /// by the reciprocal of their sum.
    ///
    /// # Errors
    ///
    /// Returns an error if the raw weights sum to zero or to a non-finite
    /// value, which happens for an even or empty kernel and for a sigma that
    /// is not positive
    pub fn gaussian(kernel_size: usize, sigma: f32) -> Result<Self> {
        let center = kernel_size / 2;
        let mut weights = Array2::<f32>::zeros((kernel_size, kernel_size));
        let mut sum = 0.0_f32;

        if kernel_size % 2 == 1 && sigma > 0.0 {
            for ((x, y), weight) in weights.indexed_iter_mut() {
                let density =
                    gaussian_density(x.abs_diff(center), y.abs_diff(center), f64::from(sigma));
                let value = density as f32;
                *weight = value;
                sum += value;
            }
        }

        if sum == 0.0 || !sum.is_finite() {
            return Err(computation_error(
                "gaussian kernel normalization",
                &format!("raw weights sum to {sum} (kernel size {kernel_size}, sigma {sigma})"),
            ));
        }

        let scale = 1.0 / sum;
        weights.mapv_inplace(|weight| weight * scale);

        Ok(Self { weights, sigma })
    }

    /// Side length of the kernel
    pub fn size(&self) -> usize {
        self.weights.nrows()
    }

    /// Offset of the center cell along each axis
    pub fn radius(&self) -> usize {
        self.size() / 2
    }

    /// Standard deviation the kernel was built with
    pub const fn sigma(&self) -> f32 {
        self.sigma
    }

    /// Weight at kernel position `[x, y]`
    pub fn weight(&self, x: usize, y: usize) -> Option<f32> {
        self.weights.get([x, y]).copied()
    }

    /// Borrow the weight matrix
    pub const fn weights(&self) -> &Array2<f32> {
        &self.weights
    }

    /// Sum of all weights, one up to rounding
    pub fn total(&self) -> f32 {
        self.weights.sum()
    }
}
