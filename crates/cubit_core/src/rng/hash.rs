//! MurmurHash64A, used to turn text seeds into 64-bit seeds.

const MULTIPLIER: u64 = 0xc6a4_a793_5bd1_e995;
const SHIFT: u32 = 47;

/// Hash the UTF-8 bytes of `text` with MurmurHash64A (hash seed 0).
///
/// Stable across platforms and releases: changing this function changes the
/// stream of every text-seeded generator.
pub fn hash_text(text: &str) -> u64 {
    murmur64a(text.as_bytes(), 0)
}

fn murmur64a(data: &[u8], seed: u64) -> u64 {
    let mut h = seed ^ (data.len() as u64).wrapping_mul(MULTIPLIER);

    let mut blocks = data.chunks_exact(8);
    for block in &mut blocks {
        let mut word = [0u8; 8];
        word.copy_from_slice(block);
        let mut k = u64::from_le_bytes(word);
        k = k.wrapping_mul(MULTIPLIER);
        k ^= k >> SHIFT;
        k = k.wrapping_mul(MULTIPLIER);

        h ^= k;
        h = h.wrapping_mul(MULTIPLIER);
    }

    let tail = blocks.remainder();
    if !tail.is_empty() {
        for (i, byte) in tail.iter().enumerate() {
            h ^= u64::from(*byte) << (8 * i);
        }
        h = h.wrapping_mul(MULTIPLIER);
    }

    h ^= h >> SHIFT;
    h = h.wrapping_mul(MULTIPLIER);
    h ^= h >> SHIFT;
    h
}
