//! Entry point generating one noise image with the default parameters

use patchnoise::algorithm::seed::ThreadEntropy;
use patchnoise::{NoiseConfig, NoiseGenerator};

fn main() -> patchnoise::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let generator = NoiseGenerator::from_config(NoiseConfig::default(), &mut ThreadEntropy)?
        .with_progress(true);
    let noise = generator.generate()?;

    tracing::info!(
        seed = noise.seed,
        patches = noise.patches.len(),
        skipped_pixels = noise.raster.skipped.len(),
        persisted = noise.persisted,
        "generation finished"
    );
    Ok(())
}
