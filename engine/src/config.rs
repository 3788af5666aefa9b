//! Advisory tuning knobs for the on-disk engine. None of these affect
//! correctness; they're forwarded to the underlying log-structured
//! backend's compaction and cache behavior.

use serde_derive::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Bytes of recently read values to keep cached in memory.
    pub block_cache_bytes: u64,
    /// Target size of a single compacted log segment.
    pub block_size_bytes: u64,
    /// Garbage ratio (reclaimable / total disk size) above which
    /// `LogCask::compact` is worth running.
    pub compaction_garbage_ratio: f64,
    /// Bits of bloom filter per key, for a future point-lookup filter
    /// in front of the keydir scan.
    pub bloom_bits_per_key: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            block_cache_bytes: 8 * 1024 * 1024,
            block_size_bytes: 4 * 1024 * 1024,
            compaction_garbage_ratio: 0.5,
            bloom_bits_per_key: 64,
        }
    }
}
