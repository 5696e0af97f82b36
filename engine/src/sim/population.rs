//! Batch insertion and removal of sprites.
//!
//! Both operations clamp instead of failing: asking for more sprites than fit
//! adds as many as fit, asking to remove more than exist empties the store.
//! Callers learn what actually happened from the returned count.

use log::debug;

use super::random::RandomSource;
use super::store::{Sprite, SpriteStore};
use crate::gfx::Rgba;

/// Spawn velocity ranges, pixels per frame.
pub const SPAWN_SPEED_X: (f32, f32) = (0.0, 8.0);
pub const SPAWN_SPEED_Y: (f32, f32) = (-2.5, 2.5);

/// Tint ranges. Hue is drawn as whole degrees in `[0, 360)`.
pub const SPAWN_SATURATION: (f32, f32) = (0.65, 1.0);
pub const SPAWN_VALUE: f32 = 0.90;

/// Build a fresh sprite at the origin with a random velocity and tint.
///
/// Draw order is fixed (x speed, y speed, hue, saturation) so a seeded source
/// always produces the same sprite.
pub fn spawn<R: RandomSource + ?Sized>(rng: &mut R) -> Sprite {
    let speed_x = rng.float_in(SPAWN_SPEED_X.0, SPAWN_SPEED_X.1);
    let speed_y = rng.float_in(SPAWN_SPEED_Y.0, SPAWN_SPEED_Y.1);
    let hue = rng.int_in(0, 359) as f32;
    let saturation = rng.float_in(SPAWN_SATURATION.0, SPAWN_SATURATION.1);

    Sprite {
        x: 0.0,
        y: 0.0,
        speed_x,
        speed_y,
        tint: Rgba::from_hsv(hue, saturation, SPAWN_VALUE),
    }
}

/// Append up to `n` freshly spawned sprites. Returns the number added, which
/// is `min(n, remaining capacity)`.
pub fn add<R: RandomSource + ?Sized>(store: &mut SpriteStore, n: usize, rng: &mut R) -> usize {
    if store.is_full() {
        return 0;
    }
    let added = n.min(store.remaining());
    for _ in 0..added {
        store.push(spawn(rng));
    }
    debug!("added {} of {} requested sprites, {} live", added, n, store.count());
    added
}

/// Retire up to `n` sprites from the end of the live range. O(1) in `n`.
/// Returns the number removed.
pub fn remove(store: &mut SpriteStore, n: usize) -> usize {
    if n == 0 || store.is_empty() {
        return 0;
    }
    let removed = store.truncate_by(n);
    debug!("removed {} of {} requested sprites, {} live", removed, n, store.count());
    removed
}
