use thiserror::Error;

use crate::gfx::BackendError;

/// Failures that stop the benchmark before its first frame.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("could not open the presentation surface")]
    Surface(#[source] BackendError),

    #[error("could not load the sprite texture")]
    Texture(#[source] BackendError),
}
