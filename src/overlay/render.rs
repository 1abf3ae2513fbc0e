//! Overlay read path: select and draw the blot sprite for an entity
//!
//! Pure per-frame read. One draw call at a fixed offset from the entity
//! origin; nothing is drawn for a clean entity or a missing asset.

use crate::core::types::{EntityId, Vec2};
use crate::overlay::assets::{OverlayAssets, SpriteHandle};
use crate::rules::blot::BlotTracker;

/// Fixed displacement from the entity render origin
///
/// Centers the overlay above the entity sprite. Presentation only.
pub const OVERLAY_OFFSET: Vec2 = Vec2 { x: -8.0, y: -16.0 };

/// Screen or surface abstraction the overlay draws against
pub trait RenderSurface {
    /// Draw a registered sprite with its origin at (x, y)
    fn draw(&mut self, x: f32, y: f32, sprite: SpriteHandle);
}

/// Draws blot overlays for afflicted entities
pub struct OverlayRenderer<'a> {
    assets: &'a OverlayAssets,
    tracker: &'a BlotTracker,
}

impl<'a> OverlayRenderer<'a> {
    pub fn new(assets: &'a OverlayAssets, tracker: &'a BlotTracker) -> Self {
        Self { assets, tracker }
    }

    /// Render the overlay for one entity, if it has any blots
    ///
    /// Safe to call every frame for every live entity; holds no state
    /// beyond the draw call itself. `None` is a no-op.
    pub fn render(&self, surface: &mut dyn RenderSurface, entity: Option<(EntityId, Vec2)>) {
        let Some((id, position)) = entity else { return };

        let blot_count = self.tracker.blot_count(Some(id));
        if blot_count == 0 {
            return;
        }
        let Some(sprite) = self.assets.overlay_for(blot_count) else {
            return;
        };

        let at = position + OVERLAY_OFFSET;
        surface.draw(at.x, at.y, sprite);
    }
}
