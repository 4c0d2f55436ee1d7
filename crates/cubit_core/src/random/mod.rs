//! Random provider facade
//!
//! [`RandomProvider`] is the capability every consumer (dice, sampling
//! helpers, buffer randomization) is written against. Two backends exist:
//!
//! - [`PlatformRandom`]: the `rand` crate's `StdRng`, entropy-seeded by default
//! - [`SequenceRandom`]: the reproducible [`SequenceGenerator`](crate::rng::SequenceGenerator)
//!
//! Backends supply two native samples (a `[0, 1)` double and a half-open
//! `i32` range); everything else is derived from those by default methods.

mod platform;
mod sequence;

pub use platform::PlatformRandom;
pub use sequence::SequenceRandom;

/// 2^24, the number of evenly spaced `f32` values in [0, 1).
const F32_STEPS: f64 = 16_777_216.0;

/// Range-aware sampling over some underlying bit source.
///
/// Object safe; use `&mut dyn RandomProvider` or `Box<dyn RandomProvider>`
/// where the backend is chosen at runtime. Instances are not synchronized
/// and belong to a single thread.
pub trait RandomProvider {
    /// Uniform double in [0, 1).
    fn next_f64(&mut self) -> f64;

    /// Uniform integer in [min, max). Returns `min` when `max <= min`.
    fn range_i32(&mut self, min: i32, max: i32) -> i32;

    /// Uniform integer in [min, max]. Returns `min` when `max < min`.
    fn range_i32_inclusive(&mut self, min: i32, max: i32) -> i32 {
        if max < min {
            return min;
        }
        let span = i64::from(max) - i64::from(min) + 1;
        (i64::from(min) + scale(self.next_f64(), span)) as i32
    }

    /// `true` iff [`next_f32`](Self::next_f32) lands above one half.
    fn next_bool(&mut self) -> bool {
        self.next_f32() > 0.5
    }

    /// Uniform float in [0, 1).
    fn next_f32(&mut self) -> f32 {
        // Quantize to 24 bits so the narrowing cast can never round up to 1.0.
        ((self.next_f64() * F32_STEPS).floor() / F32_STEPS) as f32
    }

    fn next_f32_max(&mut self, max: f32) -> f32 {
        self.next_f32() * max
    }

    fn next_f64_max(&mut self, max: f64) -> f64 {
        self.next_f64() * max
    }

    /// Uniform float in [min, max). Returns `min` unless `min < max`.
    fn range_f32(&mut self, min: f32, max: f32) -> f32 {
        if !(min < max) {
            return min;
        }
        // f32 extremes are finite in f64, so the width cannot overflow.
        let (lo, hi) = (f64::from(min), f64::from(max));
        for _ in 0..RANGE_RETRIES {
            let v = (lo + self.next_f64() * (hi - lo)) as f32;
            if !v.is_finite() {
                return min;
            }
            // Narrowing can round up onto `max`.
            if v < max {
                return v;
            }
        }
        step_below_f32(max).max(min)
    }

    /// Uniform double in [min, max). Returns `min` unless `min < max`.
    fn range_f64(&mut self, min: f64, max: f64) -> f64 {
        if !(min < max) {
            return min;
        }
        for _ in 0..RANGE_RETRIES {
            let s = self.next_f64();
            // Weighted form: neither term can overflow, unlike `max - min`.
            let v = (1.0 - s) * min + s * max;
            if !v.is_finite() {
                return min;
            }
            if v < max {
                return v;
            }
        }
        step_below_f64(max).max(min)
    }

    /// Uniform unsigned integer in [min, max). Returns `min` when `max <= min`.
    fn range_u32(&mut self, min: u32, max: u32) -> u32 {
        if max <= min {
            return min;
        }
        let span = i64::from(max - min);
        min + scale(self.next_f64(), span) as u32
    }

    /// Uniform byte, via `range_i32(0, 256)`.
    fn next_byte(&mut self) -> u8 {
        self.range_i32(0, 256) as u8
    }

    /// `count` independently sampled bytes.
    fn next_bytes(&mut self, count: usize) -> Vec<u8> {
        (0..count).map(|_| self.next_byte()).collect()
    }

    /// Overwrite `dest` with independently sampled bytes.
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for byte in dest {
            *byte = self.next_byte();
        }
    }

    /// Unsigned integer in [0, u32::MAX).
    fn next_u32(&mut self) -> u32 {
        scale(self.next_f64(), i64::from(u32::MAX)) as u32
    }

    /// Unsigned integer in [0, max). Returns 0 when `max == 0`.
    fn next_u32_max(&mut self, max: u32) -> u32 {
        self.range_u32(0, max)
    }
}

/// Resamples allowed before a float range falls back to the value just
/// below `max`.
const RANGE_RETRIES: usize = 8;

/// Largest finite `f32` strictly below finite `x`.
fn step_below_f32(x: f32) -> f32 {
    if x == 0.0 {
        -f32::from_bits(1)
    } else if x > 0.0 {
        f32::from_bits(x.to_bits() - 1)
    } else {
        f32::from_bits(x.to_bits() + 1)
    }
}

/// Largest finite `f64` strictly below finite `x`.
fn step_below_f64(x: f64) -> f64 {
    if x == 0.0 {
        -f64::from_bits(1)
    } else if x > 0.0 {
        f64::from_bits(x.to_bits() - 1)
    } else {
        f64::from_bits(x.to_bits() + 1)
    }
}

/// Map a [0, 1) sample onto `0..span`, clamped so float rounding never
/// yields `span` itself.
#[inline]
pub(crate) fn scale(sample: f64, span: i64) -> i64 {
    debug_assert!(span > 0);
    ((sample * span as f64) as i64).min(span - 1)
}
