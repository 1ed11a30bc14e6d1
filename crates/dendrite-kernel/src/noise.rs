//! Injected noise sources for the thermal driving force.
//!
//! The random source is an explicit dependency of the sweep rather
//! than a shared ambient generator, so reproducibility is a
//! configuration choice. [`SeededNoise`] honours the determinism
//! contract: the RNG is reseeded from `seed XOR step` at every sweep
//! and the engine draws in row-major cell order, so two runs with the
//! same parameters produce bit-identical fields.

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Source of uniform draws for the per-cell thermal noise.
pub trait NoiseSource {
    /// Called once at the start of each sweep with the step number
    /// about to be computed.
    fn begin_sweep(&mut self, step: u64);

    /// Next uniform draw in `[0, 1)`.
    fn next_uniform(&mut self) -> f64;
}

/// Deterministic ChaCha8-backed noise source.
#[derive(Debug)]
pub struct SeededNoise {
    seed: u64,
    rng: ChaCha8Rng,
}

impl SeededNoise {
    /// Create a source for the given run seed.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl NoiseSource for SeededNoise {
    fn begin_sweep(&mut self, step: u64) {
        self.rng = ChaCha8Rng::seed_from_u64(self.seed ^ step);
    }

    fn next_uniform(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}

/// Noise source that always yields 0.5, making the noise term
/// `A·(U − 0.5)` exactly zero. Used for analytic tests and noiseless
/// runs.
#[derive(Clone, Copy, Debug, Default)]
pub struct ZeroNoise;

impl NoiseSource for ZeroNoise {
    fn begin_sweep(&mut self, _step: u64) {}

    fn next_uniform(&mut self) -> f64 {
        0.5
    }
}
