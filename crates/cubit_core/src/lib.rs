//! Cubit Core
//!
//! Contains the randomness layer of the toolkit:
//! - Deterministic bit engine (xoshiro256+ seeded through SplitMix64)
//! - Random provider facade with platform and sequence backends
//! - Per-thread ambient provider
//! - Dice rolling and sampling helpers built on the facade

pub mod ambient;
pub mod dice;
pub mod error;
pub mod random;
pub mod rng;
pub mod sample;

pub use glam;

pub use ambient::{
    replace_thread_random, reset_thread_random, set_factory, with_random, RandomFactory,
};
pub use dice::{DiceTerm, MAX_SIDES};
pub use error::RandomError;
pub use random::{PlatformRandom, RandomProvider, SequenceRandom};
pub use rng::{hash_text, SequenceGenerator};

/// Toolkit version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
