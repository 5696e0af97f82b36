use std::path::PathBuf;

use thiserror::Error;

/// Failures reported by a presentation backend.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("surface i/o failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to load texture {}: {reason}", .path.display())]
    TextureLoad { path: PathBuf, reason: String },

    #[error("texture {} has no visible pixels", .path.display())]
    EmptyTexture { path: PathBuf },

    #[error("surface of {width}x{height} px is too small to hold a {min_width}x{min_height} px sprite")]
    SurfaceTooSmall {
        width: u32,
        height: u32,
        min_width: u32,
        min_height: u32,
    },
}
