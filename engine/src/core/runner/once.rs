use crate::core::runner::{FrameLoop, RunResult};
use crate::gfx::Backend;
use crate::sim::{Bunnymark, RandomSource};

/// Run a single frame, unless a close is already pending.
pub fn once<B: Backend, R: RandomSource>(
    frame_loop: &mut FrameLoop,
    backend: &mut B,
    sim: &mut Bunnymark<B::Texture, R>,
) -> RunResult {
    frame_loop.run(backend, sim, Some(1))
}
