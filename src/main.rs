//! Blue Blot - Demo Entry Point
//!
//! Runs a short scripted skirmish: two tracked entities take hits, blots
//! accumulate, overlays render against a logging surface, and the active
//! entity is eliminated at the lethal threshold.

use blue_blot::core::config::{self, BlotConfig};
use blue_blot::core::types::{EntityId, Vec2};
use blue_blot::overlay::{
    init_overlay_assets, ImageSource, OverlayRenderer, RenderSurface, SpriteHandle, SpriteLinker,
    BLOT1_PATH,
};
use blue_blot::rules::{load_config, BlotTracker, GameSession};

use image::RgbaImage;
use rand::Rng;
use std::collections::HashMap;
use std::io;
use std::path::Path;

/// Minimal session: one player-controlled entity
struct DemoSession {
    player: EntityId,
    player_alive: bool,
}

impl GameSession for DemoSession {
    fn active_entity(&self) -> Option<EntityId> {
        self.player_alive.then_some(self.player)
    }

    fn eliminate(&mut self, entity: EntityId) {
        if entity == self.player && self.player_alive {
            self.player_alive = false;
            tracing::info!("Player {:?} eliminated", entity);
        }
    }
}

/// Hands out sequential handles and logs registrations
#[derive(Default)]
struct DemoLinker {
    next: u32,
}

impl SpriteLinker for DemoLinker {
    fn set_sprite(&mut self, key: &str, image: RgbaImage) -> SpriteHandle {
        let handle = SpriteHandle(self.next);
        self.next += 1;
        tracing::info!(
            "Registered sprite '{}' ({}x{}) as {:?}",
            key,
            image.width(),
            image.height(),
            handle
        );
        handle
    }
}

/// Logs draw calls instead of drawing
struct LogSurface;

impl RenderSurface for LogSurface {
    fn draw(&mut self, x: f32, y: f32, sprite: SpriteHandle) {
        tracing::debug!("draw {:?} at ({:.0}, {:.0})", sprite, x, y);
    }
}

/// In-memory byte store standing in for the game's packed assets
struct MemoryImageSource(HashMap<String, Vec<u8>>);

impl ImageSource for MemoryImageSource {
    fn read(&self, path: &str) -> io::Result<Vec<u8>> {
        self.0
            .get(path)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, path.to_string()))
    }
}

fn png_bytes(color: [u8; 4]) -> Vec<u8> {
    let img = RgbaImage::from_pixel(8, 8, image::Rgba(color));
    let mut bytes = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(
            &mut io::Cursor::new(&mut bytes),
            image::ImageOutputFormat::Png,
        )
        .expect("PNG encode");
    bytes
}

fn main() {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter("blue_blot=debug")
        .init();

    tracing::info!("Blue Blot demo starting...");

    // Rule config: data file when present, defaults otherwise
    let rule_config = load_config(Path::new("data/blot.toml")).unwrap_or_else(|e| {
        tracing::warn!("Config rejected, using defaults: {}", e);
        BlotConfig::default()
    });
    config::set_config(rule_config).ok();

    // One generated overlay image; the second registration falls back to
    // the same pixels, as it would with a missing texture on disk.
    let source = MemoryImageSource(HashMap::from([(
        BLOT1_PATH.to_string(),
        png_bytes([60, 120, 255, 255]),
    )]));
    let mut linker = DemoLinker::default();
    let assets = init_overlay_assets(&source, Some(&mut linker));

    let player = EntityId::new();
    let raider = EntityId::new();
    let player_pos = Vec2::new(64.0, 48.0);
    let raider_pos = Vec2::new(128.0, 48.0);

    let mut session = DemoSession {
        player,
        player_alive: true,
    };
    let mut tracker = BlotTracker::new();
    let mut surface = LogSurface;
    let mut rng = rand::thread_rng();

    println!("\n=== BLUE BLOT ===");
    println!("Hits accumulate into blots; two blots end the run.\n");

    for round in 1..=20 {
        if rng.gen_bool(0.6) {
            tracker.record_hit(Some(player), &mut session);
        }
        if rng.gen_bool(0.4) {
            tracker.record_hit(Some(raider), &mut session);
        }

        let renderer = OverlayRenderer::new(assets, &tracker);
        renderer.render(&mut surface, Some((player, player_pos)));
        renderer.render(&mut surface, Some((raider, raider_pos)));

        tracing::info!(
            "Round {}: player blots {}, raider blots {}",
            round,
            tracker.blot_count(Some(player)),
            tracker.blot_count(Some(raider))
        );

        if !session.player_alive {
            break;
        }
    }

    if session.player_alive {
        println!("Player survived the skirmish.");
    } else {
        println!("Player succumbed to the blots. Game over.");
        tracker.reset(Some(player));
        tracing::info!("Player record cleared for respawn");
    }
}
