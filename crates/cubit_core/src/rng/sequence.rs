//! xoshiro256+ sequence generator

use std::fmt;

use rand::RngCore;

use crate::error::RandomError;
use crate::rng::hash_text;

/// SplitMix64 increment (golden ratio).
const GOLDEN_GAMMA: u64 = 0x9e37_79b9_7f4a_7c15;

/// Reproducible 64-bit word generator.
///
/// The same seed yields the same sequence of words on every platform and
/// build. Cloning forks the stream: both copies continue identically.
#[derive(Clone, PartialEq, Eq)]
pub struct SequenceGenerator {
    state: [u64; 4],
}

impl SequenceGenerator {
    /// Seed from a 64-bit integer.
    ///
    /// Sequential or low-entropy seeds (0, 1, 2, ...) still produce
    /// well-mixed, never all-zero state.
    pub fn new(seed: u64) -> Self {
        let mut acc = seed;
        let state = [
            splitmix64(&mut acc),
            splitmix64(&mut acc),
            splitmix64(&mut acc),
            splitmix64(&mut acc),
        ];
        tracing::trace!(seed, "seeded sequence generator");
        Self { state }
    }

    /// Seed from text via [`hash_text`].
    pub fn from_text(seed: &str) -> Self {
        Self::new(hash_text(seed))
    }

    /// Advance the state and return the next word.
    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        let s = &mut self.state;
        let result = s[0].wrapping_add(s[3]);
        let t = s[1] << 17;

        s[2] ^= s[0];
        s[3] ^= s[1];
        s[1] ^= s[2];
        s[0] ^= s[3];

        s[2] ^= t;
        s[3] = s[3].rotate_left(45);

        result
    }

    /// Upper 32 bits of the next word (the low bits of xoshiro256+ are weaker).
    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    /// Fill `dest` with the byte stream, little-endian per word.
    ///
    /// A trailing partial word is truncated: its remaining bytes are
    /// discarded, not carried into the next call. An empty `dest` does not
    /// advance the generator.
    pub fn fill(&mut self, dest: &mut [u8]) {
        let mut i = 0;
        while i < dest.len() {
            let word = self.next_u64();
            let take = (dest.len() - i).min(8);
            for b in 0..take {
                dest[i + b] = (word >> (8 * b)) as u8;
            }
            i += take;
        }
    }

    /// Whole-word variant of [`fill`](Self::fill), fastest when the length
    /// is a multiple of 8. Output is byte-identical to `fill` for every
    /// length; a trailing partial word goes through the per-byte path.
    pub fn fill_aligned(&mut self, dest: &mut [u8]) {
        let mut chunks = dest.chunks_exact_mut(8);
        for chunk in &mut chunks {
            chunk.copy_from_slice(&self.next_u64().to_le_bytes());
        }
        let tail = chunks.into_remainder();
        if !tail.is_empty() {
            self.fill(tail);
        }
    }

    /// Fill `length` bytes of `buffer` starting at `offset`.
    pub fn fill_range(
        &mut self,
        buffer: &mut [u8],
        offset: usize,
        length: usize,
    ) -> Result<(), RandomError> {
        let end = offset
            .checked_add(length)
            .filter(|end| *end <= buffer.len())
            .ok_or(RandomError::OutOfBounds {
                offset,
                length,
                len: buffer.len(),
            })?;
        self.fill(&mut buffer[offset..end]);
        Ok(())
    }

    /// Fill with floats in [0, 1), one word per element.
    ///
    /// The top 23 bits become the mantissa of a float in [1, 2), then 1.0 is
    /// subtracted.
    pub fn fill_f32(&mut self, dest: &mut [f32]) {
        for slot in dest {
            let mantissa = (self.next_u64() >> 41) as u32;
            *slot = f32::from_bits(0x3f80_0000 | mantissa) - 1.0;
        }
    }

    /// Fill with doubles in [0, 1), one word per element.
    pub fn fill_f64(&mut self, dest: &mut [f64]) {
        for slot in dest {
            let mantissa = self.next_u64() >> 12;
            *slot = f64::from_bits(0x3ff0_0000_0000_0000 | mantissa) - 1.0;
        }
    }
}

impl fmt::Debug for SequenceGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SequenceGenerator").finish_non_exhaustive()
    }
}

impl RngCore for SequenceGenerator {
    fn next_u32(&mut self) -> u32 {
        SequenceGenerator::next_u32(self)
    }

    fn next_u64(&mut self) -> u64 {
        SequenceGenerator::next_u64(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.fill(dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill(dest);
        Ok(())
    }
}

fn splitmix64(acc: &mut u64) -> u64 {
    *acc = acc.wrapping_add(GOLDEN_GAMMA);
    let mut z = *acc;
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}
