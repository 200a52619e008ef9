//! Checkpoint - save and restore a generator mid-stream
//!
//! A snapshot holds every piece of generator state verbatim plus a SHA-256
//! digest of it. Restoring checks shapes, cursor range and digest before
//! building anything, so a restored generator continues the exact stream
//! the original would have produced.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use super::isaac::Generator;
use super::state::{MixingState, RAND_SIZE};
use crate::error::IsaacError;

/// Complete generator state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorSnapshot {
    /// Working memory `mm` (256 words)
    pub memory: Vec<u32>,

    /// Output block `randrsl` (256 words)
    pub output: Vec<u32>,

    pub aa: u32,
    pub bb: u32,
    pub cc: u32,

    /// Unread words in `output`
    pub remaining: usize,

    pub blocks_generated: u64,

    /// Lowercase hex SHA-256 over all fields above
    pub digest: String,
}

impl GeneratorSnapshot {
    /// Serialize to a JSON string
    pub fn to_json(&self) -> Result<String, IsaacError> {
        serde_json::to_string(self)
            .map_err(|e| IsaacError::Serialization(format!("Snapshot serialization failed: {}", e)))
    }

    /// Parse from a JSON string
    ///
    /// Only the JSON shape is checked here; [`Generator::restore`] validates
    /// the contents.
    pub fn from_json(json: &str) -> Result<Self, IsaacError> {
        serde_json::from_str(json)
            .map_err(|e| IsaacError::Serialization(format!("Snapshot parse failed: {}", e)))
    }

    fn compute_digest(&self) -> String {
        state_digest(
            &self.memory,
            &self.output,
            (self.aa, self.bb, self.cc),
            self.remaining,
            self.blocks_generated,
        )
    }
}

fn state_digest(
    memory: &[u32],
    output: &[u32],
    (aa, bb, cc): (u32, u32, u32),
    remaining: usize,
    blocks_generated: u64,
) -> String {
    let mut hasher = Sha256::new();
    for word in memory.iter().chain(output) {
        hasher.update(word.to_le_bytes());
    }
    for acc in [aa, bb, cc] {
        hasher.update(acc.to_le_bytes());
    }
    hasher.update((remaining as u64).to_le_bytes());
    hasher.update(blocks_generated.to_le_bytes());
    format!("{:x}", hasher.finalize())
}

fn to_block(words: &[u32], field: &str) -> Result<[u32; RAND_SIZE], IsaacError> {
    words.try_into().map_err(|_| {
        IsaacError::InvalidSnapshot(format!(
            "{} must hold {} words, found {}",
            field,
            RAND_SIZE,
            words.len()
        ))
    })
}

impl Generator {
    /// Capture the full generator state
    pub fn snapshot(&self) -> GeneratorSnapshot {
        let mut snapshot = GeneratorSnapshot {
            memory: self.state.mm.to_vec(),
            output: self.randrsl.to_vec(),
            aa: self.state.aa,
            bb: self.state.bb,
            cc: self.state.cc,
            remaining: self.randcnt,
            blocks_generated: self.blocks,
            digest: String::new(),
        };
        snapshot.digest = snapshot.compute_digest();
        snapshot
    }

    /// Rebuild a generator from a snapshot
    ///
    /// # Errors
    /// Returns `InvalidSnapshot` if an array has the wrong length, the cursor
    /// is past the end of the block, or the digest does not match.
    pub fn restore(snapshot: &GeneratorSnapshot) -> Result<Self, IsaacError> {
        let mm = to_block(&snapshot.memory, "memory")?;
        let randrsl = to_block(&snapshot.output, "output")?;

        if snapshot.remaining > RAND_SIZE {
            return Err(IsaacError::InvalidSnapshot(format!(
                "remaining must be at most {}, found {}",
                RAND_SIZE, snapshot.remaining
            )));
        }

        let expected = snapshot.compute_digest();
        if snapshot.digest != expected {
            return Err(IsaacError::InvalidSnapshot(format!(
                "digest mismatch: expected {}, found {}",
                expected, snapshot.digest
            )));
        }

        Ok(Self {
            state: MixingState {
                mm,
                aa: snapshot.aa,
                bb: snapshot.bb,
                cc: snapshot.cc,
            },
            randrsl,
            randcnt: snapshot.remaining,
            blocks: snapshot.blocks_generated,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_digest_is_sha256_hex() {
        let snapshot = Generator::new(b"digest").snapshot();
        assert_eq!(snapshot.digest.len(), 64);
        assert!(snapshot.digest.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_snapshot_digest_changes_as_stream_advances() {
        let mut rng = Generator::new(b"digest");
        let before = rng.snapshot().digest;
        rng.next_word();
        assert_ne!(before, rng.snapshot().digest);
    }

    #[test]
    fn test_restore_rejects_short_memory() {
        let mut snapshot = Generator::new(b"short").snapshot();
        snapshot.memory.pop();
        let err = Generator::restore(&snapshot).unwrap_err();
        assert!(matches!(err, IsaacError::InvalidSnapshot(msg) if msg.contains("memory")));
    }

    #[test]
    fn test_restore_rejects_cursor_past_block() {
        let mut snapshot = Generator::new(b"cursor").snapshot();
        snapshot.remaining = RAND_SIZE + 1;
        snapshot.digest = snapshot.compute_digest();
        let err = Generator::restore(&snapshot).unwrap_err();
        assert!(matches!(err, IsaacError::InvalidSnapshot(msg) if msg.contains("remaining")));
    }

    #[test]
    fn test_restore_rejects_tampered_state() {
        let mut snapshot = Generator::new(b"tamper").snapshot();
        snapshot.output[0] ^= 1;
        let err = Generator::restore(&snapshot).unwrap_err();
        assert!(matches!(err, IsaacError::InvalidSnapshot(msg) if msg.contains("digest")));
    }
}
