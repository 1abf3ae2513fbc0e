//! Game session seam: active-entity identity and elimination
//!
//! The session owns what death means. The blot rule only reports lethal
//! threshold crossings, and only for the entity the session marks active.

use crate::core::types::EntityId;

/// Hooks into the owning game session
pub trait GameSession {
    /// Entity currently controlled by the player, if any
    fn active_entity(&self) -> Option<EntityId>;

    /// Mark the entity as dead/removed
    ///
    /// Called at every blot-producing hit that reaches the lethal count,
    /// so implementations must tolerate repeated calls for the same
    /// entity.
    fn eliminate(&mut self, entity: EntityId);
}
