//! ISAAC generator: seeding, cursor and extraction
//!
//! # Extraction order
//!
//! Words are served from the top of the output block down: the first read
//! after a refill returns `randrsl[255]`, the last returns `randrsl[0]`.
//! When the block is exhausted the next read runs one generator step.
//!
//! # Byte tails
//!
//! [`Generator::next_bytes`] emits whole words most significant byte first.
//! A tail of 2 or 3 bytes takes the low 16 bits of one extra word, and a
//! final single byte takes the low 8 bits of another. The discarded high
//! bits are part of the recorded stream format and must stay discarded.

use std::fmt;

use log::{debug, trace};

use super::config::SeedConfig;
use super::seed::{fold_seed, pack_seed};
use super::state::{MixingState, RAND_SIZE};
use crate::error::IsaacError;

/// Widest value `next_bits` can return
pub const MAX_BITS: u32 = 128;

/// Deterministic ISAAC generator
///
/// Owns its mixing state, output block and cursor outright. It is not
/// `Clone`: copying a generator duplicates its whole future stream, so that
/// has to go through [`Generator::snapshot`] and [`Generator::restore`].
///
/// # Example
/// ```
/// use isaac_engine_rs::Generator;
///
/// let mut rng = Generator::new(b"my seed");
/// let word = rng.next_word();
/// let bytes = rng.next_bytes(16).unwrap();
/// assert_eq!(bytes.len(), 16);
/// # let _ = word;
/// ```
pub struct Generator {
    pub(crate) state: MixingState,
    pub(crate) randrsl: [u32; RAND_SIZE],
    pub(crate) randcnt: usize,
    pub(crate) blocks: u64,
}

impl Generator {
    /// Create a generator from seed bytes with the default configuration
    ///
    /// Never fails. The empty seed is valid and always gives the same
    /// stream.
    pub fn new(seed: &[u8]) -> Self {
        Self::build(seed, SeedConfig::default())
    }

    /// Create a generator with an explicit seeding configuration
    ///
    /// # Errors
    /// Returns `InvalidArgument` if the configuration is out of range.
    pub fn with_config(seed: &[u8], config: &SeedConfig) -> Result<Self, IsaacError> {
        config.validate()?;
        Ok(Self::build(seed, *config))
    }

    fn build(seed: &[u8], config: SeedConfig) -> Self {
        let (randrsl, truncated) = pack_seed(seed);
        let state = fold_seed(&randrsl);

        let mut generator = Self {
            state,
            randrsl,
            randcnt: 0,
            blocks: 0,
        };
        for _ in 0..config.warmup_blocks {
            generator.step();
        }
        generator.randcnt = RAND_SIZE;

        debug!(
            "ISAAC seeded: {} seed bytes (truncated: {}), {} warm-up blocks",
            seed.len(),
            truncated,
            config.warmup_blocks
        );
        generator
    }

    fn step(&mut self) {
        self.state.generate(&mut self.randrsl);
        self.blocks += 1;
        trace!("ISAAC block {} generated", self.blocks);
    }

    /// Next 32-bit word
    pub fn next_word(&mut self) -> u32 {
        if self.randcnt == 0 {
            self.step();
            self.randcnt = RAND_SIZE;
        }
        self.randcnt -= 1;
        self.randrsl[self.randcnt]
    }

    /// Fill `dest` from the word stream
    ///
    /// Same bytes as `next_bytes(dest.len())`, including the tail rules.
    pub fn fill_bytes(&mut self, dest: &mut [u8]) {
        let mut words = dest.chunks_exact_mut(4);
        for chunk in &mut words {
            chunk.copy_from_slice(&self.next_word().to_be_bytes());
        }

        let mut tail = words.into_remainder();
        if tail.len() >= 2 {
            let (pair, rest) = std::mem::take(&mut tail).split_at_mut(2);
            pair.copy_from_slice(&(self.next_word() as u16).to_be_bytes());
            tail = rest;
        }
        if let [last] = tail {
            *last = self.next_word() as u8;
        }
    }

    /// Exactly `count` bytes from the word stream
    ///
    /// `count == 0` returns an empty vector and consumes nothing.
    ///
    /// # Errors
    /// Returns `InvalidArgument` for a negative count. State is untouched.
    pub fn next_bytes(&mut self, count: i64) -> Result<Vec<u8>, IsaacError> {
        let len = checked_len("count", count)?;
        let mut out = vec![0u8; len];
        self.fill_bytes(&mut out);
        Ok(out)
    }

    /// Value of `bits` random bits, assembled from whole words
    ///
    /// Full words are shifted in 32 bits at a time. Any remainder is built
    /// from widths 16, 8, 4, 2 and 1, each taking the low bits of a fresh
    /// word.
    ///
    /// # Errors
    /// Returns `InvalidArgument` if `bits` exceeds [`MAX_BITS`].
    pub fn next_bits(&mut self, bits: u32) -> Result<u128, IsaacError> {
        if bits > MAX_BITS {
            return Err(IsaacError::invalid_argument(
                "bits",
                format!("must be at most {}, got {}", MAX_BITS, bits),
            ));
        }

        let mut remaining = bits;
        let mut value: u128 = 0;
        while remaining >= 32 {
            value = (value << 32) | u128::from(self.next_word());
            remaining -= 32;
        }
        for width in [16u32, 8, 4, 2, 1] {
            if remaining >= width {
                let mask = (1u32 << width) - 1;
                value = (value << width) | u128::from(self.next_word() & mask);
                remaining -= width;
            }
        }
        Ok(value)
    }

    /// `count` bytes drawn from `alphabet`, one word per byte
    ///
    /// # Errors
    /// Returns `InvalidArgument` for a negative count or an empty alphabet.
    pub fn next_chars(&mut self, count: i64, alphabet: &[u8]) -> Result<Vec<u8>, IsaacError> {
        let len = checked_len("count", count)?;
        if alphabet.is_empty() {
            return Err(IsaacError::invalid_argument(
                "alphabet",
                "must contain at least one byte",
            ));
        }

        let modulus = alphabet.len() as u64;
        Ok((0..len)
            .map(|_| alphabet[(u64::from(self.next_word()) % modulus) as usize])
            .collect())
    }

    /// Unread words left in the current block
    pub fn remaining(&self) -> usize {
        self.randcnt
    }

    /// Generator steps run so far, warm-up included
    pub fn blocks_generated(&self) -> u64 {
        self.blocks
    }

    /// Current output block
    pub fn output_block(&self) -> &[u32; RAND_SIZE] {
        &self.randrsl
    }

    /// Current mixing state
    pub fn mixing_state(&self) -> &MixingState {
        &self.state
    }
}

impl fmt::Debug for Generator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Generator")
            .field("remaining", &self.randcnt)
            .field("blocks_generated", &self.blocks)
            .finish_non_exhaustive()
    }
}

fn checked_len(argument: &'static str, count: i64) -> Result<usize, IsaacError> {
    usize::try_from(count).map_err(|_| {
        IsaacError::invalid_argument(argument, format!("must be non-negative, got {}", count))
    })
}
