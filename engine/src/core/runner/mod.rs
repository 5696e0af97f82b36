//! Frame loop drivers.
//!
//! A frame is: input, population change, physics, render, present. The close
//! request is checked once before each frame; there is no way to abandon a
//! frame half way.

use log::info;

use crate::core::time::FrameClock;
use crate::gfx::{Backend, BackendError, Rgba};
use crate::sim::{Bunnymark, RandomSource};

mod bounded;
mod looped;
mod once;

pub use bounded::bounded;
pub use looped::looped;
pub use once::once;

/// What a finished run looked like.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Frames presented during this run.
    pub frames: u64,
    /// Live sprites when the run ended.
    pub live: usize,
}

pub type RunResult = Result<RunSummary, BackendError>;

/// Per-run loop state: the frame clock and the clear color.
#[derive(Debug, Clone)]
pub struct FrameLoop {
    clock: FrameClock,
    background: Rgba,
}

impl FrameLoop {
    pub fn new(background: Rgba) -> Self {
        Self {
            clock: FrameClock::new(),
            background,
        }
    }

    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }

    /// Run one full frame against `backend`.
    pub fn step<B, R>(
        &mut self,
        backend: &mut B,
        sim: &mut Bunnymark<B::Texture, R>,
    ) -> Result<(), BackendError>
    where
        B: Backend,
        R: RandomSource,
    {
        sim.handle_input(&*backend);
        sim.update();

        backend.begin_drawing();
        backend.clear_background(self.background);
        sim.render(backend, &self.clock.hud());
        backend.end_drawing()?;

        self.clock.tick();
        Ok(())
    }

    /// Run frames until the backend asks to close or `limit` frames have been
    /// presented.
    fn run<B, R>(
        &mut self,
        backend: &mut B,
        sim: &mut Bunnymark<B::Texture, R>,
        limit: Option<u64>,
    ) -> RunResult
    where
        B: Backend,
        R: RandomSource,
    {
        let mut frames = 0;
        self.clock.reset_now();
        while limit.is_none_or(|limit| frames < limit) {
            if backend.close_requested() {
                info!("close requested after {} frames", frames);
                break;
            }
            self.step(backend, sim)?;
            frames += 1;
        }
        Ok(RunSummary {
            frames,
            live: sim.count(),
        })
    }
}

impl Default for FrameLoop {
    fn default() -> Self {
        Self::new(Rgba::RAY_WHITE)
    }
}
