//! Error types for the ISAAC engine
//!
//! Seeding never fails. Errors only come from bad arguments handed in by a
//! host binding, bad configuration, or a corrupted checkpoint. In every case
//! the check happens before any generator state is touched.

use thiserror::Error;

/// Errors returned by the engine
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IsaacError {
    #[error("Invalid argument '{argument}': {reason}")]
    InvalidArgument {
        argument: &'static str,
        reason: String,
    },

    #[error("Invalid snapshot: {0}")]
    InvalidSnapshot(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl IsaacError {
    pub(crate) fn invalid_argument(argument: &'static str, reason: impl Into<String>) -> Self {
        IsaacError::InvalidArgument {
            argument,
            reason: reason.into(),
        }
    }
}
