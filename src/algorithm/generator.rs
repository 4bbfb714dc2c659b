//! Pipeline orchestration: seed, carve, blur, rasterize and persist

use crate::{
    algorithm::carve::{Patch, carve_patches},
    algorithm::convolve::convolve_observed,
    algorithm::kernel::BlurKernel,
    algorithm::seed::{EntropySource, ThreadEntropy, seeded_stream},
    io::configuration::NoiseConfig,
    io::error::Result,
    io::image::{Raster, export_raster_as_png, rasterize_field},
    io::progress::ProgressManager,
    spatial::Field,
};
use tracing::{debug, error, info};

/// Field after the carve stage together with the patches that shaped it
#[derive(Debug, Clone)]
pub struct CarvedField {
    /// Carved, unblurred field
    pub field: Field,
    /// Patches in draw order
    pub patches: Vec<Patch>,
}

/// Everything produced by one generation run
#[derive(Debug, Clone)]
pub struct NoiseImage {
    /// Seed the carve stream was built from
    pub seed: u64,
    /// Patches in draw order
    pub patches: Vec<Patch>,
    /// Blurred field before clamping
    pub field: Field,
    /// Rasterized output
    pub raster: Raster,
    /// Whether the PNG reached the output path
    pub persisted: bool,
}

/// Seeded patch-carve-then-blur noise generator
///
/// The seed is drawn once at construction; every call to [`Self::render`]
/// or [`Self::generate`] replays the same carve sequence.
pub struct NoiseGenerator {
    config: NoiseConfig,
    seed: u64,
    progress: Option<ProgressManager>,
}

impl NoiseGenerator {
    /// Create a generator with a non-deterministic seed and the default output path
    ///
    /// # Errors
    ///
    /// Returns an error if `size` or `max_patch_size` fail validation
    pub fn new(size: usize, runs: usize, max_patch_size: usize) -> Result<Self> {
        Self::from_config(NoiseConfig::new(size, runs, max_patch_size), &mut ThreadEntropy)
    }

    /// Create a generator drawing its seed from `entropy`
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails validation
    pub fn from_config(config: NoiseConfig, entropy: &mut impl EntropySource) -> Result<Self> {
        let seed = entropy.draw_seed();
        Self::with_seed(config, seed)
    }

    /// Create a generator replaying a known seed
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails validation
    pub fn with_seed(config: NoiseConfig, seed: u64) -> Result<Self> {
        config.validate()?;
        info!(
            seed,
            size = config.size,
            runs = config.runs,
            max_patch_size = config.max_patch_size,
            "noise generator seeded"
        );
        Ok(Self {
            config,
            seed,
            progress: None,
        })
    }

    /// Enable or disable the terminal progress bar
    #[must_use]
    pub fn with_progress(mut self, show: bool) -> Self {
        self.progress = show.then(ProgressManager::new);
        self
    }

    /// Seed driving the carve stream
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Parameters of this generator
    pub const fn config(&self) -> &NoiseConfig {
        &self.config
    }

    /// Build the uniform field and carve the configured patches into it
    ///
    /// # Errors
    ///
    /// Returns an error if a patch cannot be drawn
    pub fn carve(&self) -> Result<CarvedField> {
        let mut field = Field::blank(self.config.size);
        let mut rng = seeded_stream(self.seed);

        if let Some(ref pm) = self.progress {
            pm.start_stage("carve", self.config.runs);
        }
        let patches = carve_patches(
            &mut field,
            self.config.runs,
            self.config.max_patch_size,
            &mut rng,
        )?;
        if let Some(ref pm) = self.progress {
            pm.finish_stage("done");
        }

        debug!(
            patches = patches.len(),
            carved_cells = field.count_equal(0.0),
            "carve stage complete"
        );
        Ok(CarvedField { field, patches })
    }

    /// Blur a carved field with the kernel derived from the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the kernel cannot be normalized
    pub fn blur(&self, field: Field) -> Result<Field> {
        let kernel = BlurKernel::gaussian(self.config.kernel_size(), self.config.blur_sigma())?;
        debug!(
            kernel_size = kernel.size(),
            sigma = kernel.sigma(),
            "blur kernel built"
        );

        if let Some(ref pm) = self.progress {
            pm.start_stage("blur", field.size());
        }
        let blurred = convolve_observed(field, &kernel, |_| {
            if let Some(ref pm) = self.progress {
                pm.advance();
            }
        });
        if let Some(ref pm) = self.progress {
            pm.finish_stage("done");
        }

        if let Some((lo, hi)) = blurred.min_max() {
            debug!(min = lo, max = hi, "blur stage complete");
        }
        Ok(blurred)
    }

    /// Run carve, blur and rasterization without touching the filesystem
    ///
    /// # Errors
    ///
    /// Returns an error if carving or kernel construction fails
    pub fn render(&self) -> Result<NoiseImage> {
        let CarvedField { field, patches } = self.carve()?;
        let blurred = self.blur(field)?;
        let raster = rasterize_field(&blurred);

        if let Some(ref pm) = self.progress {
            pm.finish();
        }
        if !raster.skipped.is_empty() {
            debug!(skipped = raster.skipped.len(), "rasterized with skipped pixels");
        }

        Ok(NoiseImage {
            seed: self.seed,
            patches,
            field: blurred,
            raster,
            persisted: false,
        })
    }

    /// Run the whole pipeline and write the PNG to the configured path
    ///
    /// Persistence is best-effort: a failed write is logged and reported
    /// through [`NoiseImage::persisted`] while the rendered image is still
    /// returned.
    ///
    /// # Errors
    ///
    /// Returns an error if carving or kernel construction fails
    pub fn generate(&self) -> Result<NoiseImage> {
        let mut noise = self.render()?;

        match export_raster_as_png(&noise.raster.image, &self.config.output_path) {
            Ok(()) => {
                info!(path = %self.config.output_path.display(), "noise image written");
                noise.persisted = true;
            }
            Err(err) => {
                error!("failed to persist noise image: {err}");
            }
        }

        Ok(noise)
    }
}

/// Generate a noise image at the default output path with a fresh seed
///
/// # Errors
///
/// Returns an error if the parameters fail validation
pub fn generate_noise_image(
    size: usize,
    runs: usize,
    max_patch_size: usize,
) -> Result<NoiseImage> {
    NoiseGenerator::new(size, runs, max_patch_size)?.generate()
}
