//! Core of the bunnymark sprite stress test.
//!
//! The crate is split into three layers:
//!
//! - [`sim`]: the fixed-capacity sprite store, the population controller, the
//!   per-frame physics pass and the batch renderer, tied together by the
//!   [`Bunnymark`](sim::Bunnymark) simulation context.
//! - [`gfx`]: the traits a presentation backend implements (surface, input,
//!   textures, draw primitives) plus a recording [`HeadlessBackend`](gfx::HeadlessBackend).
//! - [`core`]: frame timing, the frame loop runners, startup errors and the
//!   channel logger.
//!
//! A frame is strictly sequential: input, population change, physics, render,
//! present. Nothing in here spawns threads.

pub mod core;
pub mod gfx;
pub mod sim;

pub use crate::core::{FrameClock, FrameLoop, RunResult, RunSummary, StartupError};
pub use crate::gfx::{Backend, BackendError, Rgba};
pub use crate::sim::{Bunnymark, SimConfig, Sprite, SpriteStore};
