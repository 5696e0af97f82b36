use std::time::{Duration, Instant};

use crate::sim::HudStats;

pub const ONE_SECOND: Duration = Duration::from_secs(1);

/// Wall-clock bookkeeping for the frame loop.
///
/// Every call to [`FrameClock::tick`] closes a frame: it records the delta
/// since the previous tick and the running total. The frame rate is averaged
/// over a one second window and only changes when a window closes, which keeps
/// the overlay readable.
#[derive(Debug, Copy, Clone)]
pub struct FrameClock {
    // The instant the current frame started
    instant: Instant,
    /// Duration of the last completed frame
    pub delta: Duration,
    /// Total elapsed time over all completed frames
    pub time: Duration,
    /// Completed frames
    pub frames: u64,
    window_start: Duration,
    window_frames: u32,
    fps: u32,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            instant: Instant::now(),
            delta: Duration::ZERO,
            time: Duration::ZERO,
            frames: 0,
            window_start: Duration::ZERO,
            window_frames: 0,
            fps: 0,
        }
    }

    /// Close the current frame using the wall clock.
    pub fn tick(&mut self) {
        let now = Instant::now();
        let delta = now.duration_since(self.instant);
        self.instant = now;
        self.advance(delta);
    }

    /// Close the current frame as if `delta` had elapsed.
    pub fn advance(&mut self, delta: Duration) {
        self.delta = delta;
        self.time += delta;
        self.frames += 1;
        self.window_frames += 1;

        let window = self.time - self.window_start;
        if window >= ONE_SECOND {
            self.fps = (self.window_frames as f64 / window.as_secs_f64()).round() as u32;
            self.window_start = self.time;
            self.window_frames = 0;
        }
    }

    /// Frames per second over the last completed one second window.
    pub fn fps(&self) -> u32 {
        self.fps
    }

    /// Duration of the last completed frame.
    pub fn frame_time(&self) -> Duration {
        self.delta
    }

    /// Restart the current frame from now, e.g. after a long startup.
    pub fn reset_now(&mut self) {
        self.instant = Instant::now();
    }

    /// Snapshot for the overlay.
    pub fn hud(&self) -> HudStats {
        HudStats {
            fps: self.fps,
            frame_time: self.delta,
        }
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
