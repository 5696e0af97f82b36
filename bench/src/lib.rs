//! Benchmark harness for the bunnymark.
//!
//! Everything here drives the simulation through the headless backend, so
//! numbers measure the core (physics, population control, batch rendering)
//! and not a terminal or GPU:
//!
//! - **Scenarios**: a steady population, add/remove churn, and a ramp that
//!   grows the population until frames blow the 60 fps budget
//! - **Frame timing**: per-frame statistics and sprite throughput
//! - **Memory tracking**: heap allocation profiling via dhat
//!
//! # Running Benchmarks
//!
//! ```bash
//! cargo bench -p bunny_bench
//!
//! # Only the physics group
//! cargo bench -p bunny_bench -- physics
//!
//! # With heap profiling (slower)
//! cargo bench -p bunny_bench --features memory_profiling
//! ```
//!
//! Criterion writes reports to `target/criterion/`. Heap profiles land in
//! `dhat-heap.json`.

pub mod frame_timer;
pub mod memory;
pub mod scenarios;
