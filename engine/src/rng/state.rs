//! Mixing state and the ISAAC generator step
//!
//! The mixing state is 256 words of working memory plus three accumulators.
//! One call to [`MixingState::generate`] turns it over once and writes a fresh
//! block of 256 output words.
//!
//! # Algorithm
//!
//! For slot `i` the accumulator `aa` is first stirred by one of four shifts,
//! chosen by `i % 4`: `<< 13`, `>> 6`, `<< 2`, `>> 16`. It then absorbs the
//! word half an array away. Two indirect lookups into `mm`, keyed by bits of
//! the old slot value and of the freshly written one, produce the new slot
//! value and the output word.
//!
//! The shift amounts, the lookup bit ranges and the order of reads and writes
//! are those of the published ISAAC reference. Changing any of them yields a
//! different stream.

/// log2 of the block size
pub const RAND_SIZE_LOG2: u32 = 8;

/// Words per block (and per working array)
pub const RAND_SIZE: usize = 1 << RAND_SIZE_LOG2;

const HALF: usize = RAND_SIZE / 2;

/// Working memory and accumulators of one generator
///
/// Cloning a `MixingState` is allowed (tests use it to recompute a block
/// from a known state), but the [`crate::Generator`] that owns it is not
/// `Clone`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MixingState {
    pub(crate) mm: [u32; RAND_SIZE],
    pub(crate) aa: u32,
    pub(crate) bb: u32,
    pub(crate) cc: u32,
}

impl MixingState {
    /// All-zero state, before seeding
    pub fn zeroed() -> Self {
        Self {
            mm: [0; RAND_SIZE],
            aa: 0,
            bb: 0,
            cc: 0,
        }
    }

    /// Working memory
    pub fn memory(&self) -> &[u32; RAND_SIZE] {
        &self.mm
    }

    /// Accumulators as `(aa, bb, cc)`
    pub fn accumulators(&self) -> (u32, u32, u32) {
        (self.aa, self.bb, self.cc)
    }

    /// Run one generator step, writing 256 new words into `out`
    ///
    /// Mutates the state in place, so two consecutive calls never produce
    /// the same block.
    pub fn generate(&mut self, out: &mut [u32; RAND_SIZE]) {
        self.cc = self.cc.wrapping_add(1);
        self.bb = self.bb.wrapping_add(self.cc);

        for i in 0..RAND_SIZE {
            let x = self.mm[i];
            self.aa ^= match i % 4 {
                0 => self.aa << 13,
                1 => self.aa >> 6,
                2 => self.aa << 2,
                _ => self.aa >> 16,
            };
            self.aa = self.mm[(i + HALF) % RAND_SIZE].wrapping_add(self.aa);

            let y = self.mm[word_index(x)]
                .wrapping_add(self.aa)
                .wrapping_add(self.bb);
            self.mm[i] = y;

            self.bb = self.mm[word_index(y >> RAND_SIZE_LOG2)].wrapping_add(x);
            out[i] = self.bb;
        }
    }
}

/// Bits 2..10 of `x` as an index into the working array
#[inline]
fn word_index(x: u32) -> usize {
    ((x >> 2) as usize) & (RAND_SIZE - 1)
}
