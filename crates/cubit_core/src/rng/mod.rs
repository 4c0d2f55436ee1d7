//! Deterministic bit engine
//!
//! xoshiro256+ over a 256-bit state, expanded from a single 64-bit seed with
//! SplitMix64. Text seeds are reduced to 64 bits with MurmurHash64A first.
//!
//! Not cryptographically secure. One generator belongs to one thread of
//! control; share by cloning (forking) the stream, never by reference across
//! threads.

mod hash;
mod sequence;

pub use hash::hash_text;
pub use sequence::SequenceGenerator;
