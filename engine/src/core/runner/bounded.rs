use crate::core::runner::{FrameLoop, RunResult};
use crate::gfx::Backend;
use crate::sim::{Bunnymark, RandomSource};

/// Run at most `frames` frames, stopping early on a close request.
pub fn bounded<B: Backend, R: RandomSource>(
    frame_loop: &mut FrameLoop,
    backend: &mut B,
    sim: &mut Bunnymark<B::Texture, R>,
    frames: u64,
) -> RunResult {
    frame_loop.run(backend, sim, Some(frames))
}
