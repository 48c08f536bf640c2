use std::ops::RangeInclusive;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of the random draws made when boids are created.
///
/// Nothing after construction consumes randomness, so a fixed source gives a
/// fully reproducible run.
pub trait RandomSource {
    /// Uniform float in `[0, 1)`.
    fn next_unit(&mut self) -> f32;

    /// Uniform integer in the inclusive `range`.
    fn next_in_range(&mut self, range: RangeInclusive<u32>) -> u32;
}

/// Seeded ChaCha8 generator.
pub struct SimRng(ChaCha8Rng);

impl SimRng {
    pub fn seeded(seed: u64) -> Self {
        SimRng(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl RandomSource for SimRng {
    #[inline]
    fn next_unit(&mut self) -> f32 {
        self.0.gen::<f32>()
    }

    #[inline]
    fn next_in_range(&mut self, range: RangeInclusive<u32>) -> u32 {
        self.0.gen_range(range)
    }
}
