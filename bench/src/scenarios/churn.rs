//! Population churn scenario.
//!
//! Every frame adds a batch of bunnies, steps physics and removes the same
//! batch again, which is what a user hammering both mouse buttons does. The
//! population stays at `base` while spawn (four random draws per sprite) and
//! truncation run at full rate.

use std::path::Path;

use bunny_engine::gfx::{FilterMode, HeadlessBackend, HeadlessTexture};
use bunny_engine::{BackendError, Bunnymark, SimConfig, StartupError};

use crate::scenarios::Scenario;

#[derive(Debug, Clone)]
pub struct ChurnConfig {
    /// Population kept between frames.
    pub base: usize,
    /// Sprites added and removed each frame.
    pub batch: usize,
    pub capacity: usize,
    pub seed: u64,
}

impl Default for ChurnConfig {
    fn default() -> Self {
        Self {
            base: 50_000,
            batch: 10_000,
            capacity: bunny_engine::sim::DEFAULT_CAPACITY,
            seed: 12345,
        }
    }
}

pub struct ChurnScenario {
    config: ChurnConfig,
    backend: HeadlessBackend,
    sim: Option<Bunnymark<HeadlessTexture>>,
    added: usize,
    removed: usize,
}

impl ChurnScenario {
    pub fn with_config(config: ChurnConfig) -> Self {
        Self {
            config,
            backend: HeadlessBackend::new(800, 450).record_commands(false),
            sim: None,
            added: 0,
            removed: 0,
        }
    }

    /// Sprites added and removed by `update` so far.
    pub fn turnover(&self) -> (usize, usize) {
        (self.added, self.removed)
    }
}

impl Default for ChurnScenario {
    fn default() -> Self {
        Self::with_config(ChurnConfig::default())
    }
}

impl Scenario for ChurnScenario {
    fn name(&self) -> &'static str {
        "churn"
    }

    fn description(&self) -> &'static str {
        "Add and remove a batch of sprites every frame"
    }

    fn sprite_count(&self) -> usize {
        self.sim.as_ref().map_or(0, Bunnymark::count)
    }

    fn setup(&mut self) -> Result<(), StartupError> {
        let config = SimConfig {
            capacity: self.config.capacity,
            spawn_batch: self.config.batch,
            seed: Some(self.config.seed),
            ..Default::default()
        };
        let mut sim = Bunnymark::load(
            &mut self.backend,
            &config,
            Path::new("bunny"),
            FilterMode::Point,
        )?;
        sim.add(self.config.base);
        self.sim = Some(sim);
        Ok(())
    }

    fn update(&mut self) -> Result<(), BackendError> {
        if let Some(sim) = self.sim.as_mut() {
            self.added += sim.add(self.config.batch);
            sim.update();
            self.removed += sim.remove(self.config.batch);
        }
        Ok(())
    }

    fn teardown(&mut self) {
        self.sim = None;
        self.added = 0;
        self.removed = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn population_returns_to_base_every_frame() {
        let mut scenario = ChurnScenario::with_config(ChurnConfig {
            base: 1_000,
            batch: 250,
            capacity: 2_000,
            seed: 3,
        });
        scenario.setup().unwrap();

        for _ in 0..5 {
            scenario.update().unwrap();
            assert_eq!(scenario.sprite_count(), 1_000);
        }
        assert_eq!(scenario.turnover(), (1_250, 1_250));
    }

    #[test]
    fn a_full_store_only_removes() {
        let mut scenario = ChurnScenario::with_config(ChurnConfig {
            base: 1_000,
            batch: 250,
            capacity: 1_000,
            seed: 3,
        });
        scenario.setup().unwrap();

        scenario.update().unwrap();
        assert_eq!(scenario.turnover(), (0, 250));
        assert_eq!(scenario.sprite_count(), 750);

        scenario.update().unwrap();
        assert_eq!(scenario.turnover(), (250, 500));
        assert_eq!(scenario.sprite_count(), 750);
    }
}
