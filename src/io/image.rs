//! Rasterization of intensity fields and PNG export

use crate::io::error::{NoiseError, Result};
use crate::spatial::Field;
use image::{ImageFormat, Rgb, RgbImage};
use std::path::Path;
use tracing::warn;

/// Rendered image plus the pixels that could not be represented
#[derive(Debug, Clone)]
pub struct Raster {
    /// Grayscale image with equal red, green and blue channels
    pub image: RgbImage,
    /// Coordinates `[x, y]` of skipped out-of-gamut pixels
    pub skipped: Vec<[usize; 2]>,
}

/// Convert an intensity to an 8-bit channel value
///
/// Values above 1.0 saturate to white. There is no lower clamp.
///
/// # Errors
///
/// Returns an error if the value is negative or NaN
pub fn channel_from_intensity(x: usize, y: usize, value: f32) -> Result<u8> {
    let clamped = if value > 1.0 { 1.0 } else { value };
    if clamped.is_nan() || clamped < 0.0 {
        return Err(NoiseError::PixelOutOfGamut {
            x,
            y,
            value: clamped,
        });
    }
    Ok(clamped.mul_add(255.0, 0.5) as u8)
}

/// Map every field cell to a gray pixel
///
/// Out-of-gamut cells are logged and skipped, leaving the pixel black.
pub fn rasterize_field(field: &Field) -> Raster {
    let size = field.size() as u32;
    let mut image = RgbImage::new(size, size);
    let mut skipped = Vec::new();

    for ((x, y), &value) in field.values().indexed_iter() {
        match channel_from_intensity(x, y, value) {
            Ok(channel) => image.put_pixel(x as u32, y as u32, Rgb([channel, channel, channel])),
            Err(err) => {
                warn!("skipping pixel: {err}");
                skipped.push([x, y]);
            }
        }
    }

    Raster { image, skipped }
}

/// Save a raster as PNG, creating the parent directory when missing
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or written to the path
pub fn export_raster_as_png(image: &RgbImage, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| NoiseError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }
    }

    image
        .save_with_format(output_path, ImageFormat::Png)
        .map_err(|e| NoiseError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
