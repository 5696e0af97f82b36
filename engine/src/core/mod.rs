pub mod error;
pub mod log;
pub mod runner;
pub mod time;

pub use error::StartupError;
pub use runner::{FrameLoop, RunResult, RunSummary};
pub use time::FrameClock;
