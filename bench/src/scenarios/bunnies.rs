//! Steady-population scenario.
//!
//! Spawns `sprite_count` bunnies and then runs complete frames against a
//! headless backend that counts draw calls without recording them, so a frame
//! costs what the core costs: physics over every live sprite, one texture draw
//! per sprite and the HUD line.

use std::path::Path;

use bunny_engine::core::runner::FrameLoop;
use bunny_engine::gfx::{FilterMode, HeadlessBackend, HeadlessTexture};
use bunny_engine::{BackendError, Bunnymark, SimConfig, StartupError};

use crate::scenarios::Scenario;

#[derive(Debug, Clone)]
pub struct BunnyConfig {
    pub sprite_count: usize,
    pub capacity: usize,
    pub surface: (u32, u32),
    pub seed: u64,
}

impl Default for BunnyConfig {
    fn default() -> Self {
        Self {
            sprite_count: 100_000,
            capacity: bunny_engine::sim::DEFAULT_CAPACITY,
            surface: (800, 450),
            seed: 12345,
        }
    }
}

pub struct BunnyScenario {
    config: BunnyConfig,
    backend: HeadlessBackend,
    frame_loop: FrameLoop,
    sim: Option<Bunnymark<HeadlessTexture>>,
}

impl BunnyScenario {
    pub fn new() -> Self {
        Self::with_config(BunnyConfig::default())
    }

    pub fn with_config(config: BunnyConfig) -> Self {
        let (width, height) = config.surface;
        Self {
            backend: HeadlessBackend::new(width, height).record_commands(false),
            frame_loop: FrameLoop::default(),
            sim: None,
            config,
        }
    }

    pub fn backend(&self) -> &HeadlessBackend {
        &self.backend
    }

    pub fn sim(&self) -> Option<&Bunnymark<HeadlessTexture>> {
        self.sim.as_ref()
    }
}

impl Default for BunnyScenario {
    fn default() -> Self {
        Self::new()
    }
}

impl Scenario for BunnyScenario {
    fn name(&self) -> &'static str {
        "bunnies"
    }

    fn description(&self) -> &'static str {
        "Fixed population of bouncing sprites, full frames"
    }

    fn sprite_count(&self) -> usize {
        self.sim.as_ref().map_or(0, Bunnymark::count)
    }

    fn setup(&mut self) -> Result<(), StartupError> {
        let config = SimConfig {
            capacity: self.config.capacity,
            seed: Some(self.config.seed),
            ..Default::default()
        };
        let mut sim = Bunnymark::load(
            &mut self.backend,
            &config,
            Path::new("bunny"),
            FilterMode::Point,
        )?;
        sim.add(self.config.sprite_count);
        self.sim = Some(sim);
        Ok(())
    }

    fn update(&mut self) -> Result<(), BackendError> {
        match self.sim.as_mut() {
            Some(sim) => self.frame_loop.step(&mut self.backend, sim),
            None => Ok(()),
        }
    }

    fn teardown(&mut self) {
        self.sim = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small() -> BunnyScenario {
        BunnyScenario::with_config(BunnyConfig {
            sprite_count: 500,
            capacity: 1_000,
            ..Default::default()
        })
    }

    #[test]
    fn setup_spawns_the_population() {
        let mut scenario = small();
        assert_eq!(scenario.sprite_count(), 0);

        scenario.setup().unwrap();
        assert_eq!(scenario.sprite_count(), 500);

        scenario.teardown();
        assert_eq!(scenario.sprite_count(), 0);
        assert_eq!(scenario.backend().textures_released(), 1);
    }

    #[test]
    fn population_is_clamped_to_capacity() {
        let mut scenario = BunnyScenario::with_config(BunnyConfig {
            sprite_count: 5_000,
            capacity: 1_000,
            ..Default::default()
        });
        scenario.setup().unwrap();
        assert_eq!(scenario.sprite_count(), 1_000);
    }

    #[test]
    fn every_frame_draws_every_sprite_and_the_hud() {
        let mut scenario = small();
        scenario.setup().unwrap();

        for _ in 0..10 {
            scenario.update().unwrap();
        }

        assert_eq!(scenario.backend().frames_presented(), 10);
        assert_eq!(scenario.backend().last_draw_calls(), 501);
        assert!(scenario.backend().last_frame().is_empty());
        assert_eq!(scenario.sprite_count(), 500);
    }

    #[test]
    fn update_before_setup_is_a_no_op() {
        let mut scenario = small();
        scenario.update().unwrap();
        assert_eq!(scenario.backend().frames_presented(), 0);
    }
}
