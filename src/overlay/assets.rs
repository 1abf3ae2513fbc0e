//! Overlay asset registry: decode, register, and select blot sprites
//!
//! The two overlay images load once per process and register with the
//! sprite surface. A missing second image silently reuses the first
//! image's pixels; a failed first image leaves overlays disabled for the
//! process lifetime. Nothing here ever disturbs the affliction counters.

use std::io;
use std::path::PathBuf;
use std::sync::OnceLock;

use image::RgbaImage;

use crate::core::error::Result;

/// Resource locations for the overlay images
pub const BLOT1_PATH: &str = "assets/rules/blueblot_1.png";
pub const BLOT2_PATH: &str = "assets/rules/blueblot_2.png";

/// Registration keys on the sprite surface
pub const BLOT1_KEY: &str = "blueblot_1";
pub const BLOT2_KEY: &str = "blueblot_2";

/// Opaque drawable handle issued by the sprite surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpriteHandle(pub u32);

/// Source of raw image bytes
pub trait ImageSource {
    /// Read the raw bytes at a resource path
    fn read(&self, path: &str) -> io::Result<Vec<u8>>;
}

/// Reads image bytes relative to a directory on disk
pub struct FsImageSource {
    root: PathBuf,
}

impl FsImageSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl ImageSource for FsImageSource {
    fn read(&self, path: &str) -> io::Result<Vec<u8>> {
        std::fs::read(self.root.join(path))
    }
}

/// Sprite registration surface
///
/// May be globally unavailable; the registry then registers nothing and
/// overlay rendering stays disabled for the process lifetime.
pub trait SpriteLinker {
    /// Register decoded pixels under a stable key, returning a drawable handle
    fn set_sprite(&mut self, key: &str, image: RgbaImage) -> SpriteHandle;
}

/// The two overlay sprites, each either registered or absent
///
/// Read-only after initialization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OverlayAssets {
    blot1: Option<SpriteHandle>,
    blot2: Option<SpriteHandle>,
}

impl OverlayAssets {
    /// An asset set with nothing loaded (overlay rendering disabled)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Assemble a set from handles registered elsewhere
    pub fn from_handles(blot1: Option<SpriteHandle>, blot2: Option<SpriteHandle>) -> Self {
        Self { blot1, blot2 }
    }

    /// Decode the overlay images and register them with the sprite surface
    ///
    /// Ordered attempts: decode the one-blot image (an error here aborts,
    /// leaving overlays disabled), decode the two-blot image with silent
    /// fallback to the one-blot pixels, then register both. Without a
    /// sprite surface both handles stay absent.
    pub fn initialize(
        source: &dyn ImageSource,
        linker: Option<&mut dyn SpriteLinker>,
    ) -> Result<Self> {
        let blot1_image = decode(source, BLOT1_PATH)?;

        // A missing second image must render identically to the first:
        // the same pixels, registered under the second key.
        let blot2_image = match decode(source, BLOT2_PATH) {
            Ok(img) => img,
            Err(_) => blot1_image.clone(),
        };

        let Some(linker) = linker else {
            tracing::warn!("Sprite surface unavailable - blot overlays disabled");
            return Ok(Self::empty());
        };

        let blot1 = linker.set_sprite(BLOT1_KEY, blot1_image);
        let blot2 = linker.set_sprite(BLOT2_KEY, blot2_image);

        Ok(Self {
            blot1: Some(blot1),
            blot2: Some(blot2),
        })
    }

    /// Select the overlay sprite for a blot count
    ///
    /// The two-blot sprite covers counts of 2 or more, the one-blot sprite
    /// covers 1 (and stands in when the two-blot sprite is absent).
    /// Nothing for a count of 0 or an empty registry.
    pub fn overlay_for(&self, blot_count: u32) -> Option<SpriteHandle> {
        if blot_count >= 2 {
            if let Some(handle) = self.blot2 {
                return Some(handle);
            }
        }
        if blot_count >= 1 {
            return self.blot1;
        }
        None
    }
}

fn decode(source: &dyn ImageSource, path: &str) -> Result<RgbaImage> {
    let bytes = source.read(path)?;
    Ok(image::load_from_memory(&bytes)?.to_rgba8())
}

// === GLOBAL ASSET ACCESS ===

static ASSETS: OnceLock<OverlayAssets> = OnceLock::new();
static EMPTY_ASSETS: OverlayAssets = OverlayAssets {
    blot1: None,
    blot2: None,
};

/// Initialize the process-wide asset set (first call wins)
///
/// The decode-and-register sequence runs exactly once even when first
/// calls race; every caller observes a fully-initialized or fully-failed
/// set. A failed initialization degrades to an empty set with a logged
/// diagnostic instead of propagating.
pub fn init_overlay_assets(
    source: &dyn ImageSource,
    linker: Option<&mut dyn SpriteLinker>,
) -> &'static OverlayAssets {
    ASSETS.get_or_init(|| match OverlayAssets::initialize(source, linker) {
        Ok(assets) => assets,
        Err(e) => {
            tracing::warn!("Could not load blot overlay textures: {}", e);
            OverlayAssets::empty()
        }
    })
}

/// The process-wide asset set (empty until initialized)
pub fn overlay_assets() -> &'static OverlayAssets {
    ASSETS.get().unwrap_or(&EMPTY_ASSETS)
}
