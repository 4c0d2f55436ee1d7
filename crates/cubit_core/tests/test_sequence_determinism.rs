//! Bit engine determinism and byte layout
//!
//! These pin the exact stream produced for a seed. If any of them breaks,
//! every saved seed in the wild replays differently.

use cubit_core::{hash_text, SequenceGenerator};

/// First word for seed 1. Changing the algorithm must change this literal.
const SEED_ONE_FIRST_WORD: u64 = 0x02cb_b47d_7745_25cc;

#[test]
fn seed_one_first_word_is_pinned() {
    let mut rng = SequenceGenerator::new(1);
    assert_eq!(rng.next_u64(), SEED_ONE_FIRST_WORD);
}

#[test]
fn same_seed_same_ten_thousand_words() {
    for seed in [0u64, 1, 42, u64::MAX, 0xdead_beef] {
        let mut a = SequenceGenerator::new(seed);
        let mut b = SequenceGenerator::new(seed);
        for i in 0..10_000 {
            assert_eq!(a.next_u64(), b.next_u64(), "seed {seed} diverged at word {i}");
        }
    }
}

#[test]
fn adjacent_seeds_diverge_on_first_word() {
    for seed in 0u64..100 {
        let mut a = SequenceGenerator::new(seed);
        let mut b = SequenceGenerator::new(seed + 1);
        assert_ne!(a.next_u64(), b.next_u64(), "seeds {seed} and {} collide", seed + 1);
    }
}

#[test]
fn text_seed_matches_hashed_integer_seed() {
    let mut by_text = SequenceGenerator::from_text("level-03");
    let mut by_hash = SequenceGenerator::new(hash_text("level-03"));
    for _ in 0..100 {
        assert_eq!(by_text.next_u64(), by_hash.next_u64());
    }
}

#[test]
fn fill_sixteen_bytes_is_two_little_endian_words() {
    let mut filler = SequenceGenerator::new(123);
    let mut words = SequenceGenerator::new(123);

    let mut buf = [0u8; 16];
    filler.fill(&mut buf);

    let mut lo = [0u8; 8];
    let mut hi = [0u8; 8];
    lo.copy_from_slice(&buf[..8]);
    hi.copy_from_slice(&buf[8..]);
    assert_eq!(u64::from_le_bytes(lo), words.next_u64());
    assert_eq!(u64::from_le_bytes(hi), words.next_u64());
}

#[test]
fn aligned_fill_is_byte_identical() {
    for len in (0..=256).step_by(8) {
        let mut a = SequenceGenerator::from_text("aligned");
        let mut b = SequenceGenerator::from_text("aligned");
        let mut slow = vec![0u8; len];
        let mut fast = vec![0u8; len];
        a.fill(&mut slow);
        b.fill_aligned(&mut fast);
        assert_eq!(slow, fast, "length {len}");
    }
}

#[test]
fn offset_fill_matches_slice_fill() {
    let mut a = SequenceGenerator::new(77);
    let mut b = SequenceGenerator::new(77);
    let mut via_range = [0u8; 32];
    let mut via_slice = [0u8; 32];
    a.fill_range(&mut via_range, 5, 19).unwrap();
    b.fill(&mut via_slice[5..24]);
    assert_eq!(via_range, via_slice);
}
