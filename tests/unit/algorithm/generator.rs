//! Tests for pipeline orchestration, seeding and best-effort persistence

#[cfg(test)]
mod tests {
    use patchnoise::algorithm::generator::NoiseGenerator;
    use patchnoise::algorithm::seed::{EntropySource, FixedSeed, RngEntropy};
    use patchnoise::spatial::Field;
    use patchnoise::{NoiseConfig, NoiseError};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    // Tests that invalid parameters are rejected at construction
    // Verified by skipping validation
    #[test]
    fn test_construction_validates_parameters() {
        assert!(matches!(
            NoiseGenerator::with_seed(NoiseConfig::new(0, 1, 3), 1),
            Err(NoiseError::InvalidParameter {
                parameter: "size",
                ..
            })
        ));
        assert!(matches!(
            NoiseGenerator::with_seed(NoiseConfig::new(8, 1, 0), 1),
            Err(NoiseError::InvalidParameter {
                parameter: "max_patch_size",
                ..
            })
        ));
        assert!(NoiseGenerator::new(8, 1, 3).is_ok());
    }

    // Tests that the entropy source supplies the stored seed
    // Verified by drawing the seed twice
    #[test]
    fn test_seed_comes_from_entropy_source() {
        let generator =
            NoiseGenerator::from_config(NoiseConfig::new(8, 2, 2), &mut FixedSeed(77)).unwrap();
        assert_eq!(generator.seed(), 77);
        assert_eq!(generator.config().size, 8);

        let expected = RngEntropy(StdRng::seed_from_u64(0)).draw_seed();
        let seeded = NoiseGenerator::from_config(
            NoiseConfig::new(8, 2, 2),
            &mut RngEntropy(StdRng::seed_from_u64(0)),
        )
        .unwrap();
        assert_eq!(seeded.seed(), expected);
    }

    // Tests that zero runs yield a uniform carved field
    // Verified by carving a default patch
    #[test]
    fn test_zero_runs_carve_nothing() {
        let generator = NoiseGenerator::with_seed(NoiseConfig::new(12, 0, 4), 5).unwrap();
        let carved = generator.carve().unwrap();

        assert!(carved.patches.is_empty());
        assert_eq!(carved.field, Field::blank(12));
    }

    // Tests that two generators with the same seed carve identical fields
    // Verified by drawing a fresh seed per carve
    #[test]
    fn test_same_seed_carves_identical_fields() {
        let config = NoiseConfig::new(40, 30, 6);
        let first = NoiseGenerator::with_seed(config.clone(), 2_718).unwrap();
        let second = NoiseGenerator::with_seed(config, 2_718).unwrap();

        let a = first.carve().unwrap();
        let b = second.carve().unwrap();

        assert_eq!(a.patches, b.patches);
        assert_eq!(a.field, b.field);
        assert_eq!(first.carve().unwrap().field, a.field, "carve is replayable");
    }

    // Tests that rendering produces an image matching the field dimensions
    // Verified by swapping width and height
    #[test]
    fn test_render_dimensions() {
        let generator = NoiseGenerator::with_seed(NoiseConfig::new(17, 10, 3), 9).unwrap();
        let noise = generator.render().unwrap();

        assert_eq!(noise.seed, 9);
        assert_eq!(noise.field.size(), 17);
        assert_eq!(noise.raster.image.dimensions(), (17, 17));
        assert!(noise.raster.skipped.is_empty());
        assert!(!noise.persisted);
    }

    // Tests that a single-pixel run neither carves nor panics
    // Verified by using an inclusive interior bound
    #[test]
    fn test_single_pixel_run() {
        let generator = NoiseGenerator::with_seed(NoiseConfig::new(1, 5, 2), 3).unwrap();

        let carved = generator.carve().unwrap();
        assert_eq!(carved.field.get(0, 0), Some(1.0));

        let noise = generator.render().unwrap();
        assert_eq!(noise.raster.image.dimensions(), (1, 1));
    }

    // Tests that the PNG is written to the configured path
    // Verified by skipping the export call
    #[test]
    fn test_generate_persists_image() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("image.png");
        let config = NoiseConfig::new(16, 8, 3).with_output_path(&path);

        let noise = NoiseGenerator::with_seed(config, 4)
            .unwrap()
            .generate()
            .unwrap();

        assert!(noise.persisted);
        assert!(path.exists());
    }

    // Tests that a failed write is reported without failing generation
    // Verified by propagating the export error
    #[test]
    fn test_generate_survives_write_failure() {
        let blocker = tempfile::NamedTempFile::new().unwrap();
        let path = blocker.path().join("image.png");
        let config = NoiseConfig::new(8, 2, 2).with_output_path(&path);

        let noise = NoiseGenerator::with_seed(config, 4)
            .unwrap()
            .generate()
            .unwrap();

        assert!(!noise.persisted);
        assert_eq!(noise.raster.image.dimensions(), (8, 8));
    }

    // Tests that progress reporting does not change results
    // Verified by advancing the stream inside the progress callback
    #[test]
    fn test_progress_does_not_affect_output() {
        let config = NoiseConfig::new(10, 4, 3);
        let plain = NoiseGenerator::with_seed(config.clone(), 21).unwrap();
        let tracked = NoiseGenerator::with_seed(config, 21)
            .unwrap()
            .with_progress(true);

        assert_eq!(plain.render().unwrap().field, tracked.render().unwrap().field);
    }
}
