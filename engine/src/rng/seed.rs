//! Seeder: folds an arbitrary byte string into a fresh mixing state
//!
//! # Seed packing
//!
//! The seed fills the 256-word seed buffer four bytes at a time,
//! little-endian within each word. Bytes are taken as unsigned 0..=255.
//! A short seed is zero padded. Only the first [`SEED_BYTES`] bytes are
//! used; anything after that has no effect on the stream.
//!
//! # Folding
//!
//! Eight registers start at the golden ratio and are scrambled four times.
//! The seed words are then added in, eight at a time, with a scramble after
//! each group, and the registers are written over `mm`. A second pass does the
//! same with `mm` itself so every seed word reaches every slot.

use super::state::{MixingState, RAND_SIZE};

/// Seed bytes that can influence the stream (256 words of 4 bytes)
pub const SEED_BYTES: usize = RAND_SIZE * 4;

const GOLDEN_RATIO: u32 = 0x9e37_79b9;

/// Pack seed bytes into 256 little-endian words
///
/// Returns the packed words and whether any input bytes were dropped.
pub fn pack_seed(seed: &[u8]) -> ([u32; RAND_SIZE], bool) {
    let mut words = [0u32; RAND_SIZE];
    let used = &seed[..seed.len().min(SEED_BYTES)];

    for (word, chunk) in words.iter_mut().zip(used.chunks(4)) {
        let mut bytes = [0u8; 4];
        bytes[..chunk.len()].copy_from_slice(chunk);
        *word = u32::from_le_bytes(bytes);
    }

    (words, seed.len() > SEED_BYTES)
}

/// Build the seeded mixing state from packed seed words
///
/// No generator step has run yet; the caller does the warm-up.
pub fn fold_seed(seed_words: &[u32; RAND_SIZE]) -> MixingState {
    let mut state = MixingState::zeroed();
    let mut regs = [GOLDEN_RATIO; 8];

    for _ in 0..4 {
        scramble(&mut regs);
    }

    fold_pass(&mut regs, seed_words, &mut state.mm);
    let first_pass = state.mm;
    fold_pass(&mut regs, &first_pass, &mut state.mm);

    state
}

fn fold_pass(regs: &mut [u32; 8], source: &[u32; RAND_SIZE], mm: &mut [u32; RAND_SIZE]) {
    for (src, dst) in source.chunks_exact(8).zip(mm.chunks_exact_mut(8)) {
        for (reg, &word) in regs.iter_mut().zip(src) {
            *reg = reg.wrapping_add(word);
        }
        scramble(regs);
        dst.copy_from_slice(&regs[..]);
    }
}

/// Bob Jenkins' eight-register mix
fn scramble(r: &mut [u32; 8]) {
    let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *r;

    a ^= b << 11;
    d = d.wrapping_add(a);
    b = b.wrapping_add(c);

    b ^= c >> 2;
    e = e.wrapping_add(b);
    c = c.wrapping_add(d);

    c ^= d << 8;
    f = f.wrapping_add(c);
    d = d.wrapping_add(e);

    d ^= e >> 16;
    g = g.wrapping_add(d);
    e = e.wrapping_add(f);

    e ^= f << 10;
    h = h.wrapping_add(e);
    f = f.wrapping_add(g);

    f ^= g >> 4;
    a = a.wrapping_add(f);
    g = g.wrapping_add(h);

    g ^= h << 8;
    b = b.wrapping_add(g);
    h = h.wrapping_add(a);

    h ^= a >> 9;
    c = c.wrapping_add(h);
    a = a.wrapping_add(b);

    *r = [a, b, c, d, e, f, g, h];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_seed_little_endian() {
        let (words, truncated) = pack_seed(&[0x01, 0x02, 0x03, 0x04, 0x05]);
        assert_eq!(words[0], 0x0403_0201);
        assert_eq!(words[1], 0x0000_0005);
        assert!(words[2..].iter().all(|&w| w == 0));
        assert!(!truncated);
    }

    #[test]
    fn test_pack_seed_high_bytes_not_sign_extended() {
        let (words, _) = pack_seed(&[0xff, 0x80]);
        assert_eq!(words[0], 0x0000_80ff);
    }

    #[test]
    fn test_pack_seed_empty_is_all_zero() {
        let (words, truncated) = pack_seed(&[]);
        assert!(words.iter().all(|&w| w == 0));
        assert!(!truncated);
    }

    #[test]
    fn test_pack_seed_truncates_after_1024_bytes() {
        let mut long = vec![0xabu8; SEED_BYTES];
        let (exact, exact_truncated) = pack_seed(&long);
        long.extend_from_slice(&[1, 2, 3]);
        let (over, over_truncated) = pack_seed(&long);

        assert_eq!(exact, over);
        assert!(!exact_truncated);
        assert!(over_truncated);
        assert_eq!(over[RAND_SIZE - 1], 0xabab_abab);
    }

    #[test]
    fn test_scramble_of_golden_ratio_is_seed_independent() {
        let mut first = [GOLDEN_RATIO; 8];
        let mut second = [GOLDEN_RATIO; 8];
        for _ in 0..4 {
            scramble(&mut first);
            scramble(&mut second);
        }
        assert_eq!(first, second);
        assert_ne!(first, [GOLDEN_RATIO; 8]);
    }

    #[test]
    fn test_fold_seed_leaves_accumulators_zero() {
        let (words, _) = pack_seed(b"accumulators");
        let state = fold_seed(&words);
        assert_eq!(state.accumulators(), (0, 0, 0));
    }

    #[test]
    fn test_fold_seed_last_word_reaches_first_slot() {
        let mut a = [0u32; RAND_SIZE];
        let b = a;
        a[RAND_SIZE - 1] = 1;

        // Second pass carries the final registers back to slot 0
        assert_ne!(fold_seed(&a).mm[0], fold_seed(&b).mm[0]);
    }
}
