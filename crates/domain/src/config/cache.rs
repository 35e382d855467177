use serde::{Deserialize, Serialize};

/// Settings for the in-memory root response cache.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    #[serde(default = "default_max_entries")]
    pub max_entries: usize,

    /// Upper bound, in seconds, on how long any response stays cached.
    #[serde(default = "default_max_ttl")]
    pub max_ttl: u32,

    #[serde(default)]
    pub min_ttl: u32,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_entries: default_max_entries(),
            max_ttl: default_max_ttl(),
            min_ttl: 0,
        }
    }
}

fn default_max_entries() -> usize {
    10_000
}

fn default_max_ttl() -> u32 {
    21_600
}
