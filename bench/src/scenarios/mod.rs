//! Headless bunnymark workloads.
//!
//! - **Bunnies**: a fixed population running full frames (input, physics,
//!   batch render, present)
//! - **Churn**: add and remove a batch every frame on top of physics
//! - **Ramp**: grow the population until frames miss a time budget

pub mod bunnies;
pub mod churn;
pub mod ramp;

pub use bunnies::{BunnyConfig, BunnyScenario};
pub use churn::{ChurnConfig, ChurnScenario};
pub use ramp::{RampConfig, RampReport, RampStep, ramp};

use bunny_engine::{BackendError, StartupError};

/// Common shape of a benchmark workload.
pub trait Scenario {
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    /// Live sprites right now.
    fn sprite_count(&self) -> usize;

    /// Build the simulation and spawn the starting population.
    fn setup(&mut self) -> Result<(), StartupError>;

    /// Run one frame.
    fn update(&mut self) -> Result<(), BackendError>;

    /// Drop the simulation and release its texture.
    fn teardown(&mut self);
}
