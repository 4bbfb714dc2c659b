//! Border-truncated convolution of a field with a blur kernel
//!
//! Samples that fall on index 0 or outside the field are dropped rather than
//! padded, and the remaining weights are not renormalized. Cells near the
//! border therefore darken even in a uniform field.

use crate::algorithm::kernel::BlurKernel;
use crate::spatial::Field;

/// Convolve the field with the kernel
///
/// Consumes the input and returns a freshly allocated field, so no output
/// cell can observe another cell's blurred value.
pub fn convolve(field: Field, kernel: &BlurKernel) -> Field {
    convolve_observed(field, kernel, |_| {})
}

/// Convolve the field, reporting each completed row index to `on_row`
pub fn convolve_observed(
    field: Field,
    kernel: &BlurKernel,
    mut on_row: impl FnMut(usize),
) -> Field {
    let size = field.size();
    let mut blurred = Field::zeros(size);

    for x in 0..size {
        for y in 0..size {
            blurred.set(x, y, blur_cell(&field, kernel, x, y));
        }
        on_row(x);
    }

    blurred
}

/// Weighted sum of the interior samples under the kernel centered at `[x, y]`
pub fn blur_cell(field: &Field, kernel: &BlurKernel, x: usize, y: usize) -> f32 {
    let radius = kernel.radius() as i64;
    let mut accumulated = 0.0_f32;

    for ((pos_x, pos_y), &weight) in kernel.weights().indexed_iter() {
        let sample_x = x as i64 + pos_x as i64 - radius;
        let sample_y = y as i64 + pos_y as i64 - radius;
        if let Some(value) = field.interior_value(sample_x, sample_y) {
            accumulated += value * weight;
        }
    }

    accumulated
}
