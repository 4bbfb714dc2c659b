//! Two-stage random stream construction
//!
//! An [`EntropySource`] produces the seed, and the working stream is a
//! deterministic [`StdRng`] built from it. Keeping the stages apart lets the
//! seed be logged, stored, or injected to replay a run.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::io::configuration::SEED_BOUND;

/// Supplier of generation seeds in `[0, SEED_BOUND)`
pub trait EntropySource {
    /// Draw the next seed
    fn draw_seed(&mut self) -> u64;
}

/// Non-deterministic seeds from the thread-local OS-seeded generator
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadEntropy;

impl EntropySource for ThreadEntropy {
    fn draw_seed(&mut self) -> u64 {
        rand::rng().random_range(0..SEED_BOUND)
    }
}

/// Always yields the same seed, for replaying a recorded run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedSeed(pub u64);

impl EntropySource for FixedSeed {
    fn draw_seed(&mut self) -> u64 {
        self.0
    }
}

/// Draws seeds from any caller-provided generator
#[derive(Debug, Clone)]
pub struct RngEntropy<R>(pub R);

impl<R: Rng> EntropySource for RngEntropy<R> {
    fn draw_seed(&mut self) -> u64 {
        self.0.random_range(0..SEED_BOUND)
    }
}

/// Build the deterministic working stream for a seed
pub fn seeded_stream(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
