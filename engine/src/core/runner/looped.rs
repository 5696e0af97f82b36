use crate::core::runner::{FrameLoop, RunResult};
use crate::gfx::Backend;
use crate::sim::{Bunnymark, RandomSource};

/// Run until the backend requests a close.
pub fn looped<B: Backend, R: RandomSource>(
    frame_loop: &mut FrameLoop,
    backend: &mut B,
    sim: &mut Bunnymark<B::Texture, R>,
) -> RunResult {
    frame_loop.run(backend, sim, None)
}
