//! Blot affliction: hits accumulate into blots, blots accumulate toward death
//!
//! Every recorded hit increments a per-entity counter. A full counter
//! converts into one blot and resets. When the blot produced by a hit
//! lifts the count to the lethal threshold and the entity is the session's
//! active one, the session is told to eliminate it.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::core::config::{self, BlotConfig};
use crate::core::types::EntityId;
use crate::rules::session::GameSession;

/// Per-entity affliction counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlotRecord {
    /// Hits since the last blot; stays below hits_per_blot after processing
    pub hit_count: u32,
    /// Accumulated blots; only 0, 1, and 2+ are visually distinct
    pub blot_count: u32,
}

/// Tracks blot affliction for every entity in one session
///
/// Exclusively owns the entity-keyed table. Entries appear on first hit
/// and disappear only on `reset`; callers reset on respawn or entity
/// removal to keep the table from growing without bound.
#[derive(Debug, Clone)]
pub struct BlotTracker {
    config: BlotConfig,
    records: AHashMap<EntityId, BlotRecord>,
}

impl Default for BlotTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl BlotTracker {
    /// Create a tracker using the global config
    pub fn new() -> Self {
        Self::with_config(config::config().clone())
    }

    /// Create a tracker with an explicit config
    ///
    /// Used for independent sessions and test isolation.
    pub fn with_config(config: BlotConfig) -> Self {
        Self {
            config,
            records: AHashMap::new(),
        }
    }

    /// Record one damaging hit against `entity`
    ///
    /// A full hit counter converts into a blot. If that blot lifts the
    /// count to the lethal threshold and `entity` is the session's active
    /// entity, the session eliminates it. Safe to call unconditionally
    /// from event handlers; `None` is a no-op.
    pub fn record_hit(&mut self, entity: Option<EntityId>, session: &mut dyn GameSession) {
        let Some(entity) = entity else { return };

        let record = self.records.entry(entity).or_default();
        record.hit_count += 1;
        if record.hit_count < self.config.hits_per_blot {
            return;
        }
        record.hit_count = 0; // start the next cycle

        self.add_blot(Some(entity));

        // Read back the count add_blot just produced. Death is evaluated
        // only here, at the blot-producing hit, never on later reads.
        let blots = self.blot_count(Some(entity));
        if blots >= self.config.lethal_blot_count && session.active_entity() == Some(entity) {
            session.eliminate(entity);
        }
    }

    /// Add one blot directly, bypassing the hit counter
    ///
    /// Does not evaluate death; the hit path owns that.
    pub fn add_blot(&mut self, entity: Option<EntityId>) {
        let Some(entity) = entity else { return };
        self.records.entry(entity).or_default().blot_count += 1;
    }

    /// Current blot count for `entity` (0 for `None` or unknown entities)
    pub fn blot_count(&self, entity: Option<EntityId>) -> u32 {
        entity
            .and_then(|e| self.records.get(&e))
            .map_or(0, |r| r.blot_count)
    }

    /// Forget the entity entirely (respawn / round reset)
    ///
    /// Removes the record rather than zeroing it, so the next hit starts
    /// a fresh one.
    pub fn reset(&mut self, entity: Option<EntityId>) {
        let Some(entity) = entity else { return };
        self.records.remove(&entity);
    }
}
