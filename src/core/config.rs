//! Blot rule configuration with documented constants
//!
//! All tunable values are collected here with explanations of their purpose
//! and how they interact with each other.

use serde::{Deserialize, Serialize};

/// Configuration for the blot affliction rule
///
/// These values control how quickly hits convert into blots and how many
/// blots an entity survives. Changing them will affect pacing and
/// difficulty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlotConfig {
    /// Number of hits that produce one blot
    ///
    /// At the default (3), the first blot appears quickly enough to read
    /// as feedback, while a full hit counter is still survivable.
    pub hits_per_blot: u32,

    /// Blot count at which the active entity is eliminated
    ///
    /// Evaluated only at the moment a blot-producing hit reaches this
    /// count, and again on every later blot. Never re-evaluated on reads.
    pub lethal_blot_count: u32,
}

impl Default for BlotConfig {
    fn default() -> Self {
        Self {
            hits_per_blot: 3,
            lethal_blot_count: 2,
        }
    }
}

impl BlotConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.hits_per_blot == 0 {
            return Err("hits_per_blot must be at least 1".into());
        }
        if self.lethal_blot_count == 0 {
            return Err("lethal_blot_count must be at least 1".into());
        }
        Ok(())
    }
}

// === GLOBAL CONFIG ACCESS ===

use std::sync::OnceLock;

static CONFIG: OnceLock<BlotConfig> = OnceLock::new();

/// Get the global blot config (initializes with defaults if not set)
pub fn config() -> &'static BlotConfig {
    CONFIG.get_or_init(BlotConfig::default)
}

/// Set the global blot config (can only be called once)
///
/// Returns Err if config was already set.
pub fn set_config(config: BlotConfig) -> Result<(), BlotConfig> {
    CONFIG.set(config)
}
