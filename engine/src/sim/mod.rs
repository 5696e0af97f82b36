//! The bunnymark simulation: sprite storage, population control, physics and
//! batch rendering.

pub mod bounds;
pub mod bunnymark;
pub mod config;
pub mod physics;
pub mod population;
pub mod random;
pub mod render;
pub mod store;

pub use bounds::WorldBounds;
pub use bunnymark::Bunnymark;
pub use config::SimConfig;
pub use physics::PhysicsParams;
pub use random::{Pinned, RandomSource, SeededRandom};
pub use render::HudStats;
pub use store::{DEFAULT_CAPACITY, Sprite, SpriteStore};
