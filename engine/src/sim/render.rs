use std::time::Duration;

use super::store::SpriteStore;
use crate::gfx::{Canvas, Rgba};

pub const HUD_X: i32 = 10;
pub const HUD_Y: i32 = 10;
pub const HUD_FONT_SIZE: u16 = 20;
pub const HUD_COLOR: Rgba = Rgba::MAROON;

/// Frame timing shown in the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HudStats {
    pub fps: u32,
    pub frame_time: Duration,
}

/// The overlay text for `live` sprites.
pub fn hud_line(live: usize, stats: &HudStats) -> String {
    format!(
        "{} bunnies | {} fps | {:.2} ms",
        live,
        stats.fps,
        stats.frame_time.as_secs_f64() * 1000.0
    )
}

/// Draw every live sprite with the shared `texture`, then the overlay.
///
/// One `draw_texture` per sprite, all against the same texture, so the backend
/// is free to fold them into a single batch. Only reads the store.
pub fn draw<C: Canvas + ?Sized>(
    canvas: &mut C,
    texture: &C::Texture,
    store: &SpriteStore,
    stats: &HudStats,
) {
    for sprite in store.live() {
        canvas.draw_texture(texture, sprite.x, sprite.y, sprite.tint);
    }
    canvas.draw_text(
        &hud_line(store.count(), stats),
        HUD_X,
        HUD_Y,
        HUD_FONT_SIZE,
        HUD_COLOR,
    );
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::gfx::{DrawCommand, HeadlessBackend, Texture, TextureLoader};
    use crate::sim::population;
    use crate::sim::random::SeededRandom;

    #[test]
    fn hud_formatting() {
        let stats = HudStats {
            fps: 59,
            frame_time: Duration::from_micros(16_667),
        };
        assert_eq!(hud_line(1234, &stats), "1234 bunnies | 59 fps | 16.67 ms");
    }

    #[test]
    fn one_draw_per_live_sprite_then_overlay() {
        let mut backend = HeadlessBackend::new(800, 450);
        let texture = backend.load_texture(Path::new("bunny")).unwrap();
        let mut store = SpriteStore::with_capacity(16);
        population::add(&mut store, 10, &mut SeededRandom::new(1));
        population::remove(&mut store, 3);

        draw(&mut backend, &texture, &store, &HudStats::default());
        let commands = backend.take_commands();

        assert_eq!(commands.len(), 8);
        for (command, sprite) in commands.iter().zip(store.live()) {
            assert_eq!(
                command,
                &DrawCommand::Texture {
                    texture: texture.id(),
                    x: sprite.x,
                    y: sprite.y,
                    tint: sprite.tint,
                }
            );
        }
        assert!(matches!(
            &commands[7],
            DrawCommand::Text { text, x: HUD_X, y: HUD_Y, font_size: HUD_FONT_SIZE, .. }
                if text.starts_with("7 bunnies")
        ));
    }

    #[test]
    fn empty_store_draws_only_overlay() {
        let mut backend = HeadlessBackend::new(800, 450);
        let texture = backend.load_texture(Path::new("bunny")).unwrap();
        let store = SpriteStore::with_capacity(4);

        draw(&mut backend, &texture, &store, &HudStats::default());
        assert_eq!(backend.take_commands().len(), 1);
    }
}
