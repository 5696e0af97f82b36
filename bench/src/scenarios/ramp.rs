//! Budget ramp: the classic bunnymark score.
//!
//! Starts at `start` sprites and adds `step` more after every measured level,
//! until the median frame time exceeds `budget` or the store is full. The
//! score is the largest population that still fit the budget.

use std::time::Duration;

use bunny_engine::core::runner::FrameLoop;
use bunny_engine::sim::RandomSource;
use bunny_engine::{Backend, BackendError, Bunnymark};
use log::info;

use crate::frame_timer::{FrameStats, FrameTimer, SIXTY_FPS_BUDGET};

#[derive(Debug, Clone)]
pub struct RampConfig {
    pub start: usize,
    pub step: usize,
    /// Frames measured at each population level.
    pub frames_per_step: usize,
    pub budget: Duration,
}

impl Default for RampConfig {
    fn default() -> Self {
        Self {
            start: 10_000,
            step: 10_000,
            frames_per_step: 30,
            budget: SIXTY_FPS_BUDGET,
        }
    }
}

/// One measured population level.
#[derive(Debug, Clone)]
pub struct RampStep {
    pub sprites: usize,
    pub stats: FrameStats,
}

#[derive(Debug, Clone, Default)]
pub struct RampReport {
    pub steps: Vec<RampStep>,
}

impl RampReport {
    /// Largest population whose median frame fit `budget`.
    pub fn sustained(&self, budget: Duration) -> Option<usize> {
        self.steps
            .iter()
            .filter(|step| step.stats.median() <= budget)
            .map(|step| step.sprites)
            .max()
    }
}

/// Ramp the population of `sim` on `backend`. Sprites already alive count
/// towards `start`.
pub fn ramp<B, R>(
    backend: &mut B,
    sim: &mut Bunnymark<B::Texture, R>,
    config: &RampConfig,
) -> Result<RampReport, BackendError>
where
    B: Backend,
    R: RandomSource,
{
    let mut frame_loop = FrameLoop::default();
    let mut report = RampReport::default();
    sim.add(config.start.saturating_sub(sim.count()));

    loop {
        let mut timer = FrameTimer::new(config.frames_per_step);
        for _ in 0..config.frames_per_step {
            timer.begin_frame();
            frame_loop.step(backend, sim)?;
            timer.end_frame();
        }
        let stats = timer.stats();
        let over = stats.median() > config.budget;
        info!("ramp at {} sprites: {}", sim.count(), stats);
        report.steps.push(RampStep {
            sprites: sim.count(),
            stats,
        });

        if over || config.step == 0 || sim.add(config.step) == 0 {
            return Ok(report);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use bunny_engine::SimConfig;
    use bunny_engine::gfx::{FilterMode, HeadlessBackend};

    use super::*;

    fn setup(capacity: usize) -> (HeadlessBackend, SimConfig) {
        let config = SimConfig {
            capacity,
            seed: Some(11),
            ..Default::default()
        };
        (HeadlessBackend::new(800, 450).record_commands(false), config)
    }

    #[test]
    fn climbs_until_the_store_is_full() {
        let (mut backend, config) = setup(500);
        let mut sim =
            Bunnymark::load(&mut backend, &config, Path::new("bunny"), FilterMode::Point).unwrap();
        let budget = Duration::from_secs(1);

        let report = ramp(
            &mut backend,
            &mut sim,
            &RampConfig {
                start: 100,
                step: 100,
                frames_per_step: 2,
                budget,
            },
        )
        .unwrap();

        let levels: Vec<_> = report.steps.iter().map(|step| step.sprites).collect();
        assert_eq!(levels, [100, 200, 300, 400, 500]);
        assert_eq!(report.sustained(budget), Some(500));
        assert_eq!(backend.frames_presented(), 10);
    }

    #[test]
    fn stops_at_the_first_level_over_budget() {
        let (mut backend, config) = setup(500);
        let mut sim =
            Bunnymark::load(&mut backend, &config, Path::new("bunny"), FilterMode::Point).unwrap();

        let report = ramp(
            &mut backend,
            &mut sim,
            &RampConfig {
                start: 100,
                step: 100,
                frames_per_step: 2,
                budget: Duration::ZERO,
            },
        )
        .unwrap();

        assert_eq!(report.steps.len(), 1);
        assert_eq!(report.sustained(Duration::ZERO), None);
    }

    #[test]
    fn present_failures_abort_the_ramp() {
        let (backend, config) = setup(500);
        let mut backend = backend.with_present_failure(1);
        let mut sim =
            Bunnymark::load(&mut backend, &config, Path::new("bunny"), FilterMode::Point).unwrap();

        let result = ramp(&mut backend, &mut sim, &RampConfig::default());
        assert!(matches!(result, Err(BackendError::Io(_))));
    }
}
