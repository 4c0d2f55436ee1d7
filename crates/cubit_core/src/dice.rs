//! Dice term rolling
//!
//! A term is `repeat` dice of `die_size` sides plus a flat `constant`
//! (`3d6+2`). Parsing expressions into terms lives with the caller.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ambient::with_random;
use crate::error::RandomError;
use crate::random::RandomProvider;

/// Largest die [`DiceTerm::new`] accepts; rolls are sampled as `i32`.
pub const MAX_SIDES: u32 = i32::MAX as u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiceTerm {
    pub repeat: u32,
    pub die_size: u32,
    #[serde(default)]
    pub constant: i32,
}

impl DiceTerm {
    pub fn new(repeat: u32, die_size: u32, constant: i32) -> Result<Self, RandomError> {
        if die_size == 0 || die_size > MAX_SIDES {
            return Err(RandomError::InvalidDie { die_size });
        }
        Ok(Self {
            repeat,
            die_size,
            constant,
        })
    }

    /// Sum of `repeat` inclusive `1..=die_size` rolls plus `constant`.
    ///
    /// Hand-built or deserialized terms bypass `new`: a zero-sided die
    /// contributes nothing and dice above [`MAX_SIDES`] roll as `MAX_SIDES`.
    pub fn roll<R>(&self, rng: &mut R) -> i64
    where
        R: RandomProvider + ?Sized,
    {
        let mut total = i64::from(self.constant);
        if self.die_size == 0 {
            return total;
        }
        let sides = self.sides() as i32;
        for _ in 0..self.repeat {
            total += i64::from(rng.range_i32_inclusive(1, sides));
        }
        total
    }

    /// [`roll`](Self::roll) against the current thread's ambient provider.
    pub fn roll_ambient(&self) -> i64 {
        with_random(|rng| self.roll(rng))
    }

    pub fn min_total(&self) -> i64 {
        let per_die = if self.die_size == 0 { 0 } else { 1 };
        i64::from(self.repeat) * per_die + i64::from(self.constant)
    }

    pub fn max_total(&self) -> i64 {
        i64::from(self.repeat)
            .saturating_mul(i64::from(self.sides()))
            .saturating_add(i64::from(self.constant))
    }

    fn sides(&self) -> u32 {
        self.die_size.min(MAX_SIDES)
    }
}

impl fmt::Display for DiceTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d{}", self.repeat, self.die_size)?;
        match self.constant {
            0 => Ok(()),
            c if c > 0 => write!(f, "+{c}"),
            c => write!(f, "{c}"),
        }
    }
}
