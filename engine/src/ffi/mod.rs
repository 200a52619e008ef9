//! FFI layer for Python integration via PyO3
//!
//! Keeps the boundary minimal: seed bytes in, words and byte strings out.

pub mod isaac;
pub mod types;
