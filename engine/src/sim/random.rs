use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Number of evenly spaced steps [`RandomSource::float_in`] can land on.
pub const FLOAT_RESOLUTION: i32 = 10_000;

/// Source of uniform random numbers for spawning and the floor bounce.
///
/// Only integer draws are required; float draws are derived from them so a
/// source that pins the integer draw also pins every float draw.
pub trait RandomSource {
    /// Uniform integer in the inclusive range `[min, max]`.
    fn int_in(&mut self, min: i32, max: i32) -> i32;

    /// Uniform float in the half-open range `[min, max)`.
    fn float_in(&mut self, min: f32, max: f32) -> f32 {
        let step = self.int_in(0, FLOAT_RESOLUTION - 1) as f32 / FLOAT_RESOLUTION as f32;
        min + (max - min) * step
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn int_in(&mut self, min: i32, max: i32) -> i32 {
        (**self).int_in(min, max)
    }
}

/// ChaCha8 backed source. Seeded runs replay identically.
#[derive(Debug, Clone)]
pub struct SeededRandom(ChaCha8Rng);

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Seed from the operating system.
    pub fn from_entropy() -> Self {
        Self(ChaCha8Rng::from_entropy())
    }
}

impl RandomSource for SeededRandom {
    fn int_in(&mut self, min: i32, max: i32) -> i32 {
        if max <= min {
            return min;
        }
        self.0.gen_range(min..=max)
    }
}

/// A source that always answers with one end of the requested range.
///
/// `Low` makes every float draw return `min`, which takes every random branch
/// guarded by `draw < p`; `High` returns the largest step below `max` and
/// skips them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pinned {
    Low,
    High,
}

impl RandomSource for Pinned {
    fn int_in(&mut self, min: i32, max: i32) -> i32 {
        match self {
            Pinned::Low => min,
            Pinned::High => max.max(min),
        }
    }
}
