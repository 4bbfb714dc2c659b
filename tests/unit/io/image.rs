//! Tests for rasterization, gamut handling and PNG export

#[cfg(test)]
mod tests {
    use ndarray::Array2;
    use patchnoise::NoiseError;
    use patchnoise::io::image::{channel_from_intensity, export_raster_as_png, rasterize_field};
    use patchnoise::spatial::Field;

    // Tests channel conversion with rounding and the upper clamp
    // Verified by truncating instead of rounding
    #[test]
    fn test_channel_from_intensity() {
        assert_eq!(channel_from_intensity(0, 0, 0.0).unwrap(), 0);
        assert_eq!(channel_from_intensity(0, 0, 1.0).unwrap(), 255);
        assert_eq!(channel_from_intensity(0, 0, 0.5).unwrap(), 128);
        assert_eq!(channel_from_intensity(0, 0, 0.2).unwrap(), 51);
        assert_eq!(channel_from_intensity(0, 0, 3.5).unwrap(), 255);
    }

    // Tests that negative and NaN intensities are out of gamut
    // Verified by clamping the lower bound
    #[test]
    fn test_negative_intensity_is_rejected() {
        assert!(matches!(
            channel_from_intensity(2, 5, -0.01),
            Err(NoiseError::PixelOutOfGamut { x: 2, y: 5, .. })
        ));
        assert!(channel_from_intensity(0, 0, f32::NAN).is_err());
    }

    // Tests that pixels map column-major from the field with equal channels
    // Verified by transposing the coordinates
    #[test]
    fn test_rasterize_field_gray_pixels() {
        let mut field = Field::blank(3);
        field.set(2, 0, 0.0);

        let raster = rasterize_field(&field);

        assert!(raster.skipped.is_empty());
        assert_eq!(raster.image.get_pixel(2, 0).0, [0, 0, 0]);
        assert_eq!(raster.image.get_pixel(0, 2).0, [255, 255, 255]);
        for pixel in raster.image.pixels() {
            assert_eq!(pixel.0[0], pixel.0[1]);
            assert_eq!(pixel.0[1], pixel.0[2]);
        }
    }

    // Tests that an out-of-gamut cell is skipped while the rest is rendered
    // Verified by aborting on the first bad pixel
    #[test]
    fn test_rasterize_skips_out_of_gamut_cells() {
        let mut values = Array2::from_elem((2, 2), 0.5_f32);
        values[[1, 0]] = -1.0;
        let field = Field::from_array(values).unwrap();

        let raster = rasterize_field(&field);

        assert_eq!(raster.skipped, vec![[1, 0]]);
        assert_eq!(raster.image.get_pixel(1, 0).0, [0, 0, 0]);
        assert_eq!(raster.image.get_pixel(0, 0).0, [128, 128, 128]);
    }

    // Tests that export creates the parent directory and a readable PNG
    // Verified by disabling directory creation
    #[test]
    fn test_export_creates_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("output").join("image.png");
        let raster = rasterize_field(&Field::uniform(5, 0.25));

        export_raster_as_png(&raster.image, &path).unwrap();

        let decoded = image::open(&path).unwrap().to_rgb8();
        assert_eq!(decoded.dimensions(), (5, 5));
        assert_eq!(decoded.get_pixel(4, 4).0, [64, 64, 64]);
    }

    // Tests export failure when the parent path is a file
    // Verified by ignoring directory creation errors
    #[test]
    fn test_export_reports_filesystem_error() {
        let blocker = tempfile::NamedTempFile::new().unwrap();
        let path = blocker.path().join("image.png");
        let raster = rasterize_field(&Field::blank(2));

        let result = export_raster_as_png(&raster.image, &path);

        assert!(matches!(result, Err(NoiseError::FileSystem { .. })));
    }
}
