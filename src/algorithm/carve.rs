//! Random patch carving
//!
//! Each run draws a half-width and a center, then zeroes the square around
//! the center. The square spans `[center - half_width, center + half_width)`
//! on both axes: the lower bound is inclusive and the upper bound exclusive,
//! so patches extend one cell further up-left than down-right. Cells outside
//! the field interior are left untouched.

use rand::Rng;
use tracing::debug;

use crate::io::configuration::CARVED_INTENSITY;
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::Field;

/// One drawn patch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Patch {
    /// Center coordinate `[x, y]`
    pub center: [usize; 2],
    /// Half-width of the square, drawn from `[0, max_patch_size)`
    pub half_width: usize,
}

impl Patch {
    /// Half-open coordinate range covered along one axis
    pub const fn span(&self, axis: usize) -> std::ops::Range<i64> {
        let [x, y] = self.center;
        let center = if axis == 0 { x as i64 } else { y as i64 };
        let half_width = self.half_width as i64;
        (center - half_width)..(center + half_width)
    }

    /// Whether the patch covers a coordinate, ignoring field borders
    pub fn covers(&self, x: i64, y: i64) -> bool {
        self.span(0).contains(&x) && self.span(1).contains(&y)
    }

    /// Zero every interior cell the patch covers, returning how many were written
    pub fn stamp(&self, field: &mut Field) -> usize {
        let mut written = 0;
        for x in self.span(0) {
            for y in self.span(1) {
                if field.is_interior(x)
                    && field.is_interior(y)
                    && field.set(x as usize, y as usize, CARVED_INTENSITY)
                {
                    written += 1;
                }
            }
        }
        written
    }
}

/// Draw a single patch from the stream
///
/// Consumes three draws in a fixed order: half-width, then `x`, then `y`.
pub fn draw_patch<R: Rng>(rng: &mut R, size: usize, max_patch_size: usize) -> Patch {
    let half_width = rng.random_range(0..max_patch_size);
    let x = rng.random_range(0..size);
    let y = rng.random_range(0..size);
    Patch {
        center: [x, y],
        half_width,
    }
}

/// Carve `runs` patches into the field, returning them in draw order
///
/// The stream is consumed sequentially and never reset between patches.
///
/// # Errors
///
/// Returns an error if `runs` is positive and either the field is empty or
/// `max_patch_size` is zero, since no value can be drawn from an empty range
pub fn carve_patches<R: Rng>(
    field: &mut Field,
    runs: usize,
    max_patch_size: usize,
    rng: &mut R,
) -> Result<Vec<Patch>> {
    if runs == 0 {
        return Ok(Vec::new());
    }
    if max_patch_size == 0 {
        return Err(invalid_parameter(
            "max_patch_size",
            &max_patch_size,
            &"patch half-width is drawn from an empty range",
        ));
    }
    if field.size() == 0 {
        return Err(invalid_parameter(
            "size",
            &0,
            &"patch centers are drawn from an empty range",
        ));
    }

    let size = field.size();
    let mut patches = Vec::with_capacity(runs);
    for run in 0..runs {
        let patch = draw_patch(rng, size, max_patch_size);
        let written = patch.stamp(field);
        debug!(
            run,
            x = patch.center[0],
            y = patch.center[1],
            half_width = patch.half_width,
            written,
            "carved patch"
        );
        patches.push(patch);
    }
    Ok(patches)
}
