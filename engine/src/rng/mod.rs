//! ISAAC pseudo-random number generation
//!
//! Bob Jenkins' ISAAC ("Indirection, Shift, Accumulate, Add, and Count"):
//! 256 words of mixing state turned over once per block of 256 outputs.
//! Same seed → same stream, on every platform.
//!
//! NOTE: ISAAC has no formal security proof. Do not treat this as an audited
//! CSPRNG.

mod config;
mod isaac;
mod seed;
mod snapshot;
mod state;

pub use config::{SeedConfig, DEFAULT_WARMUP_BLOCKS, MAX_WARMUP_BLOCKS};
pub use isaac::{Generator, MAX_BITS};
pub use seed::{fold_seed, pack_seed, SEED_BYTES};
pub use snapshot::GeneratorSnapshot;
pub use state::{MixingState, RAND_SIZE, RAND_SIZE_LOG2};
