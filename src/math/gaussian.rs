use num_traits::{Float, FloatConst};

/// Isotropic two-dimensional Gaussian density
///
/// Evaluates `1 / (2 pi sigma^2) * exp(-(dx^2 + dy^2) / (2 sigma^2))` for
/// integer offsets from the center. Callers must ensure `sigma` is positive;
/// a zero sigma yields a non-finite result.
pub fn gaussian_density<T: Float + FloatConst>(dx: usize, dy: usize, sigma: T) -> T {
    let two = T::one() + T::one();
    let dx = T::from(dx).unwrap_or_else(T::zero);
    let dy = T::from(dy).unwrap_or_else(T::zero);
    let variance = sigma.powi(2);

    let normalization = T::one() / (two * T::PI() * variance);
    normalization * (-(dx.powi(2) + dy.powi(2)) / (two * variance)).exp()
}
