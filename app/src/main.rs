use std::path::PathBuf;

use anyhow::{Context, Result};
use bunny_cli::TerminalBackend;
use bunny_engine::core::log::ChannelLogger;
use bunny_engine::core::runner::{self, FrameLoop};
use bunny_engine::gfx::{FilterMode, WindowConfig};
use bunny_engine::sim::DEFAULT_CAPACITY;
use bunny_engine::{Bunnymark, SimConfig, StartupError};
use clap::{Parser, ValueEnum};
use log::{LevelFilter, info};

#[derive(Parser, Debug)]
#[command(
    name = "bunnymark",
    version,
    about = "Sprite stress test: left click adds bunnies, right click removes them, Shift multiplies"
)]
struct Cli {
    /// Requested surface width in pixels. Shrunk to fit the terminal.
    #[arg(long, default_value_t = 800)]
    width: u32,
    /// Requested surface height in pixels. Shrunk to fit the terminal.
    #[arg(long, default_value_t = 450)]
    height: u32,
    /// Maximum number of live bunnies.
    #[arg(long, default_value_t = DEFAULT_CAPACITY)]
    capacity: usize,
    /// Bunnies added or removed per click.
    #[arg(long, default_value_t = 10_000)]
    batch: usize,
    /// Batch multiplier while Shift is held.
    #[arg(long, default_value_t = 10)]
    boost: usize,
    /// Bunnies spawned before the first frame.
    #[arg(long, default_value_t = 0)]
    initial: usize,
    /// Target frames per second. 0 runs unpaced.
    #[arg(long, default_value_t = 60)]
    fps: u32,
    /// Random seed; omit to seed from the OS.
    #[arg(long)]
    seed: Option<u64>,
    /// Glyph art used as the bunny texture.
    #[arg(long, value_name = "PATH", default_value = concat!(env!("CARGO_MANIFEST_DIR"), "/assets/bunny.txt"))]
    texture: PathBuf,
    #[arg(long, value_enum, default_value_t = Filter::Point)]
    filter: Filter,
    /// Most verbose log level printed on exit.
    #[arg(long, default_value_t = LevelFilter::Info)]
    log_level: LevelFilter,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Filter {
    Point,
    Bilinear,
}

impl From<Filter> for FilterMode {
    fn from(filter: Filter) -> Self {
        match filter {
            Filter::Point => FilterMode::Point,
            Filter::Bilinear => FilterMode::Bilinear,
        }
    }
}

impl Cli {
    fn window(&self) -> WindowConfig {
        WindowConfig {
            width: self.width,
            height: self.height,
            target_fps: self.fps,
            ..Default::default()
        }
    }

    fn sim(&self) -> SimConfig {
        SimConfig {
            capacity: self.capacity,
            spawn_batch: self.batch,
            boost_factor: self.boost,
            seed: self.seed,
            ..Default::default()
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let logs = ChannelLogger::install(cli.log_level).context("failed to install logger")?;

    let result = run(&cli);

    // The terminal is restored by now.
    for message in logs.try_iter() {
        eprintln!("[{:<5} {}] {}", message.level, message.target, message.message);
    }
    result
}

fn run(cli: &Cli) -> Result<()> {
    let window = cli.window();
    let mut backend = TerminalBackend::open(&window).map_err(StartupError::Surface)?;
    let mut sim = Bunnymark::load(&mut backend, &cli.sim(), &cli.texture, cli.filter.into())
        .with_context(|| format!("failed to start with texture {}", cli.texture.display()))?;
    sim.add(cli.initial);

    let mut frame_loop = FrameLoop::new(window.background);
    let summary = runner::looped(&mut frame_loop, &mut backend, &mut sim)?;
    info!(
        "ran {} frames, {} bunnies at exit, {} fps at exit",
        summary.frames,
        summary.live,
        frame_loop.clock().fps()
    );
    Ok(())
}
