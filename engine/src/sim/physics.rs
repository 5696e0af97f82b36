//! Per-frame integration.
//!
//! Units are pixels per frame, not per second: the simulation runs faster or
//! slower with the achieved frame rate.

use super::bounds::WorldBounds;
use super::random::RandomSource;
use super::store::Sprite;

/// Integration constants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicsParams {
    /// Added to `speed_y` every frame.
    pub gravity: f32,
    /// Fraction of vertical speed kept (and reversed) on a floor hit.
    pub floor_bounce: f32,
    /// Chance of an extra upward kick on a floor hit.
    pub jump_chance: f32,
    /// Range of the extra upward kick.
    pub jump_impulse: (f32, f32),
}

impl Default for PhysicsParams {
    fn default() -> Self {
        Self {
            gravity: 0.5,
            floor_bounce: 0.8,
            jump_chance: 0.5,
            jump_impulse: (3.0, 7.0),
        }
    }
}

/// Advance every sprite in `sprites` by one frame, in slice order.
///
/// Random draws happen only on floor hits, in sprite order, so a seeded source
/// replays the same trajectories.
pub fn step<R: RandomSource + ?Sized>(
    sprites: &mut [Sprite],
    bounds: &WorldBounds,
    params: &PhysicsParams,
    rng: &mut R,
) {
    for sprite in sprites.iter_mut() {
        integrate(sprite, bounds, params, rng);
    }
}

/// Advance one sprite by one frame.
#[inline]
pub fn integrate<R: RandomSource + ?Sized>(
    sprite: &mut Sprite,
    bounds: &WorldBounds,
    params: &PhysicsParams,
    rng: &mut R,
) {
    sprite.x += sprite.speed_x;
    sprite.y += sprite.speed_y;
    sprite.speed_y += params.gravity;

    if sprite.x > bounds.max_x() {
        sprite.speed_x = -sprite.speed_x;
        sprite.x = bounds.max_x();
    } else if sprite.x < bounds.min_x() {
        sprite.speed_x = -sprite.speed_x;
        sprite.x = bounds.min_x();
    }

    // A sprite resting exactly on the floor still counts as touching it.
    if sprite.y >= bounds.max_y() {
        sprite.speed_y *= -params.floor_bounce;
        sprite.y = bounds.max_y();
        if rng.float_in(0.0, 1.0) < params.jump_chance {
            sprite.speed_y -= rng.float_in(params.jump_impulse.0, params.jump_impulse.1);
        }
    } else if sprite.y < bounds.min_y() {
        sprite.speed_y = 0.0;
        sprite.y = bounds.min_y();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::random::{Pinned, SeededRandom};

    fn bounds() -> WorldBounds {
        WorldBounds::new(0.0, 1000.0, 0.0, 600.0)
    }

    fn sprite(x: f32, y: f32, speed_x: f32, speed_y: f32) -> Sprite {
        Sprite {
            x,
            y,
            speed_x,
            speed_y,
            ..Default::default()
        }
    }

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn free_flight() {
        let mut s = sprite(10.0, 10.0, 2.0, -1.0);
        integrate(&mut s, &bounds(), &PhysicsParams::default(), &mut Pinned::High);
        assert_eq!((s.x, s.y), (12.0, 9.0));
        assert_eq!(s.speed_x, 2.0);
        assert_eq!(s.speed_y, -0.5);
    }

    #[test]
    fn right_wall_reflects_and_clamps() {
        let mut s = sprite(998.0, 100.0, 5.0, 0.0);
        integrate(&mut s, &bounds(), &PhysicsParams::default(), &mut Pinned::High);
        assert_eq!(s.x, 1000.0);
        assert_eq!(s.speed_x, -5.0);
    }

    #[test]
    fn left_wall_reflects_and_clamps() {
        let mut s = sprite(1.0, 100.0, -3.0, 0.0);
        integrate(&mut s, &bounds(), &PhysicsParams::default(), &mut Pinned::High);
        assert_eq!(s.x, 0.0);
        assert_eq!(s.speed_x, 3.0);
    }

    #[test]
    fn landing_exactly_on_a_wall_does_not_reflect() {
        let mut s = sprite(995.0, 100.0, 5.0, 0.0);
        integrate(&mut s, &bounds(), &PhysicsParams::default(), &mut Pinned::High);
        assert_eq!(s.x, 1000.0);
        assert_eq!(s.speed_x, 5.0);
    }

    #[test]
    fn resting_on_floor_bounces_by_gravity_only() {
        let params = PhysicsParams::default();
        let mut s = sprite(50.0, 600.0, 0.0, 0.0);
        integrate(&mut s, &bounds(), &params, &mut Pinned::High);
        assert_eq!(s.y, 600.0);
        assert!(approx(s.speed_y, -0.8 * params.gravity), "{}", s.speed_y);
    }

    #[test]
    fn floor_hit_with_jump() {
        let params = PhysicsParams::default();
        let mut s = sprite(50.0, 598.0, 0.0, 4.0);
        integrate(&mut s, &bounds(), &params, &mut Pinned::Low);
        // (4 + 0.5) * -0.8 - 3.0
        assert_eq!(s.y, 600.0);
        assert!(approx(s.speed_y, -6.6), "{}", s.speed_y);
    }

    #[test]
    fn ceiling_stops_without_bounce() {
        let mut s = sprite(50.0, 1.0, 0.0, -5.0);
        integrate(&mut s, &bounds(), &PhysicsParams::default(), &mut Pinned::Low);
        assert_eq!(s.y, 0.0);
        assert_eq!(s.speed_y, 0.0);
    }

    #[test]
    fn step_reflects_every_sprite_crossing_max_x() {
        let bounds = bounds();
        let params = PhysicsParams::default();
        let mut rng = SeededRandom::new(9);
        let mut sprites: Vec<Sprite> = (0..64)
            .map(|i| sprite(990.0 + i as f32 * 0.25, 300.0, (i % 8) as f32, 0.0))
            .collect();
        let before = sprites.clone();

        step(&mut sprites, &bounds, &params, &mut rng);

        for (pre, post) in before.iter().zip(&sprites) {
            if pre.x + pre.speed_x > bounds.max_x() {
                assert_eq!(post.x, bounds.max_x());
                assert_eq!(post.speed_x, -pre.speed_x);
            } else {
                assert_eq!(post.x, pre.x + pre.speed_x);
                assert_eq!(post.speed_x, pre.speed_x);
            }
        }
    }

    #[test]
    fn step_is_deterministic_for_a_seed() {
        let params = PhysicsParams::default();
        let start: Vec<Sprite> = (0..32)
            .map(|i| sprite(i as f32, 590.0, 1.0, i as f32 * 0.1))
            .collect();

        let mut a = start.clone();
        let mut b = start;
        let mut rng_a = SeededRandom::new(21);
        let mut rng_b = SeededRandom::new(21);
        for _ in 0..30 {
            step(&mut a, &bounds(), &params, &mut rng_a);
            step(&mut b, &bounds(), &params, &mut rng_b);
        }
        assert_eq!(a, b);
    }
}
