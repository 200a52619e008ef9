//! ISAAC Engine - Rust core
//!
//! Deterministic ISAAC pseudo-random number generator with a thin optional
//! Python binding.
//!
//! # Architecture
//!
//! - **rng**: Mixing state, seeder, generator step and extraction API
//! - **error**: Error type shared by every fallible operation
//! - **ffi**: PyO3 wrapper (behind the `pyo3` feature)
//!
//! # Critical Invariants
//!
//! 1. Same seed bytes → same word stream, forever
//! 2. Only the first 1024 seed bytes matter
//! 3. Errors are raised before any state is mutated

// Module declarations
pub mod error;
pub mod rng;

// Re-exports for convenience
pub use error::IsaacError;
pub use rng::{Generator, GeneratorSnapshot, MixingState, SeedConfig, RAND_SIZE, SEED_BYTES};

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn isaac_engine_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<ffi::isaac::PyIsaac>()?;
    Ok(())
}
