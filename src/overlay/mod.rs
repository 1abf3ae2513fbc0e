//! Blot overlay rendering: asset registry and draw path

pub mod assets;
pub mod render;

pub use assets::{
    init_overlay_assets, overlay_assets, FsImageSource, ImageSource, OverlayAssets, SpriteHandle,
    SpriteLinker, BLOT1_KEY, BLOT1_PATH, BLOT2_KEY, BLOT2_PATH,
};
pub use render::{OverlayRenderer, RenderSurface, OVERLAY_OFFSET};
