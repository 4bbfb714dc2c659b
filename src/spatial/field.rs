//! Square intensity field shared by every pipeline stage
//!
//! Cells are addressed as `[x, y]`, with `x` mapping to the image column. The
//! field never clamps: values may leave `[0, 1]` until rasterization.

use ndarray::Array2;

use crate::io::configuration::FULL_INTENSITY;
use crate::io::error::{Result, invalid_parameter};

/// Owned `size x size` matrix of intensity values
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    values: Array2<f32>,
}

impl Field {
    /// Create a field with every cell set to `value`
    pub fn uniform(size: usize, value: f32) -> Self {
        Self {
            values: Array2::from_elem((size, size), value),
        }
    }

    /// Create a field at full brightness
    pub fn blank(size: usize) -> Self {
        Self::uniform(size, FULL_INTENSITY)
    }

    /// Create a field with every cell set to zero
    pub fn zeros(size: usize) -> Self {
        Self {
            values: Array2::zeros((size, size)),
        }
    }

    /// Wrap an existing array
    ///
    /// # Errors
    ///
    /// Returns an error if the array is not square
    pub fn from_array(values: Array2<f32>) -> Result<Self> {
        let (rows, cols) = values.dim();
        if rows != cols {
            return Err(invalid_parameter(
                "values",
                &format!("{rows}x{cols}"),
                &"field must be square",
            ));
        }
        Ok(Self { values })
    }

    /// Side length of the field
    pub fn size(&self) -> usize {
        self.values.nrows()
    }

    /// Whether a signed coordinate lies strictly inside `(0, size)`
    ///
    /// Carving and convolution both skip index 0 and anything outside the
    /// field through this predicate.
    pub fn is_interior(&self, coordinate: i64) -> bool {
        coordinate > 0 && coordinate < self.size() as i64
    }

    /// Read a cell
    pub fn get(&self, x: usize, y: usize) -> Option<f32> {
        self.values.get([x, y]).copied()
    }

    /// Read a cell using signed coordinates, `None` outside the interior
    pub fn interior_value(&self, x: i64, y: i64) -> Option<f32> {
        if self.is_interior(x) && self.is_interior(y) {
            self.get(x as usize, y as usize)
        } else {
            None
        }
    }

    /// Overwrite a cell, returning whether it exists
    pub fn set(&mut self, x: usize, y: usize, value: f32) -> bool {
        if let Some(cell) = self.values.get_mut([x, y]) {
            *cell = value;
            true
        } else {
            false
        }
    }

    /// Borrow the underlying array
    pub const fn values(&self) -> &Array2<f32> {
        &self.values
    }

    /// Consume the field and return the underlying array
    pub fn into_values(self) -> Array2<f32> {
        self.values
    }

    /// Count cells holding exactly `value`
    pub fn count_equal(&self, value: f32) -> usize {
        self.values.iter().filter(|&&cell| cell == value).count()
    }

    /// Smallest and largest cell values, `None` for an empty field
    pub fn min_max(&self) -> Option<(f32, f32)> {
        let mut iter = self.values.iter().copied();
        let first = iter.next()?;
        Some(iter.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v))))
    }
}
