use super::physics::PhysicsParams;
use super::store::DEFAULT_CAPACITY;

/// Configuration for a bunnymark simulation.
#[derive(Debug, Clone, PartialEq)]
pub struct SimConfig {
    /// Maximum number of live sprites.
    pub capacity: usize,
    pub physics: PhysicsParams,
    /// Sprites added or removed per click.
    pub spawn_batch: usize,
    /// Batch multiplier while Shift is held.
    pub boost_factor: usize,
    /// Random seed. `None` seeds from the operating system.
    pub seed: Option<u64>,
}

impl SimConfig {
    /// Batch size for a click, depending on whether the boost modifier is held.
    pub fn batch(&self, boosted: bool) -> usize {
        if boosted {
            self.spawn_batch.saturating_mul(self.boost_factor)
        } else {
            self.spawn_batch
        }
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            physics: PhysicsParams::default(),
            spawn_batch: 10_000,
            boost_factor: 10,
            seed: None,
        }
    }
}
