//! Reproducible backend over the bit engine

use crate::random::{scale, RandomProvider};
use crate::rng::SequenceGenerator;

/// 2^-53, spacing of the 53-bit doubles in [0, 1).
const F64_UNIT: f64 = 1.0 / (1u64 << 53) as f64;

/// Provider whose every sample is determined by its seed.
#[derive(Debug, Clone)]
pub struct SequenceRandom {
    generator: SequenceGenerator,
}

impl SequenceRandom {
    pub fn new(seed: u64) -> Self {
        Self::from_generator(SequenceGenerator::new(seed))
    }

    pub fn from_text(seed: &str) -> Self {
        Self::from_generator(SequenceGenerator::from_text(seed))
    }

    pub fn from_generator(generator: SequenceGenerator) -> Self {
        Self { generator }
    }

    /// Direct access to the word stream, e.g. for packed byte fills.
    pub fn generator_mut(&mut self) -> &mut SequenceGenerator {
        &mut self.generator
    }

    pub fn into_generator(self) -> SequenceGenerator {
        self.generator
    }
}

impl RandomProvider for SequenceRandom {
    fn next_f64(&mut self) -> f64 {
        (self.generator.next_u64() >> 11) as f64 * F64_UNIT
    }

    fn range_i32(&mut self, min: i32, max: i32) -> i32 {
        if max <= min {
            return min;
        }
        let span = i64::from(max) - i64::from(min);
        (i64::from(min) + scale(self.next_f64(), span)) as i32
    }
}
