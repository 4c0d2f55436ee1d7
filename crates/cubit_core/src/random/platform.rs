//! General-purpose backend over `rand::rngs::StdRng`

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::random::RandomProvider;

/// Non-reproducible provider seeded from OS entropy.
///
/// This is the default ambient provider. [`with_seed`](Self::with_seed)
/// exists for tests, but the stream is only stable for a given `rand`
/// release; use [`SequenceRandom`](crate::random::SequenceRandom) when
/// output must be reproducible across builds.
#[derive(Debug, Clone)]
pub struct PlatformRandom {
    rng: StdRng,
}

impl PlatformRandom {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for PlatformRandom {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl RandomProvider for PlatformRandom {
    fn next_f64(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    fn range_i32(&mut self, min: i32, max: i32) -> i32 {
        if max <= min {
            return min;
        }
        self.rng.gen_range(min..max)
    }

    fn range_i32_inclusive(&mut self, min: i32, max: i32) -> i32 {
        if max < min {
            return min;
        }
        self.rng.gen_range(min..=max)
    }
}
