//! Seeding configuration

use serde::{Deserialize, Serialize};

use crate::error::IsaacError;

/// Default number of generator steps run at the end of seeding
pub const DEFAULT_WARMUP_BLOCKS: u32 = 2;

/// Upper bound accepted for `warmup_blocks`
pub const MAX_WARMUP_BLOCKS: u32 = 16;

/// Controls how a generator is built from its seed
///
/// # Example
/// ```
/// use isaac_engine_rs::SeedConfig;
///
/// let config = SeedConfig::from_json(r#"{"warmup_blocks": 1}"#).unwrap();
/// assert_eq!(config.warmup_blocks, 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    /// Generator steps run after the seed is folded in. The last one leaves
    /// the first readable block in place.
    ///
    /// `2` (default) makes the all-zero seed's first block equal to the
    /// published `randvect.txt` block. `1` matches the C `randinit` routine.
    pub warmup_blocks: u32,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            warmup_blocks: DEFAULT_WARMUP_BLOCKS,
        }
    }
}

impl SeedConfig {
    /// Parse from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, IsaacError> {
        let config: SeedConfig = serde_json::from_str(json)
            .map_err(|e| IsaacError::Serialization(format!("Seed config parse failed: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Check that all values are in range
    pub fn validate(&self) -> Result<(), IsaacError> {
        if self.warmup_blocks == 0 || self.warmup_blocks > MAX_WARMUP_BLOCKS {
            return Err(IsaacError::invalid_argument(
                "warmup_blocks",
                format!(
                    "must be in 1..={}, got {}",
                    MAX_WARMUP_BLOCKS, self.warmup_blocks
                ),
            ));
        }
        Ok(())
    }
}
