//! Frame timing for bunnymark runs.
//!
//! A bunnymark is judged by how many sprites it keeps moving inside one frame
//! budget, so besides the usual distribution numbers `FrameStats` reports how
//! many frames missed a budget and the sprite throughput.

use std::fmt;
use std::time::{Duration, Instant};

/// One frame at 60 fps.
pub const SIXTY_FPS_BUDGET: Duration = Duration::from_nanos(16_666_667);

/// Statistics over a run of frame times.
#[derive(Debug, Clone)]
pub struct FrameStats {
    pub frame_count: usize,
    pub total_duration: Duration,
    pub min_frame_time: Duration,
    pub max_frame_time: Duration,
    /// Sorted ascending.
    sorted_times: Vec<Duration>,
}

impl FrameStats {
    pub fn from_times(mut times: Vec<Duration>) -> Self {
        times.sort_unstable();
        Self {
            frame_count: times.len(),
            total_duration: times.iter().sum(),
            min_frame_time: times.first().copied().unwrap_or_default(),
            max_frame_time: times.last().copied().unwrap_or_default(),
            sorted_times: times,
        }
    }

    pub fn average(&self) -> Duration {
        match u32::try_from(self.frame_count) {
            Ok(0) | Err(_) => Duration::ZERO,
            Ok(count) => self.total_duration / count,
        }
    }

    pub fn median(&self) -> Duration {
        self.percentile(50)
    }

    /// Nearest-rank percentile, `p` clamped to 0..=100.
    pub fn percentile(&self, p: usize) -> Duration {
        let Some(last) = self.sorted_times.len().checked_sub(1) else {
            return Duration::ZERO;
        };
        let index = (self.sorted_times.len() * p.min(100) / 100).min(last);
        self.sorted_times[index]
    }

    pub fn p99(&self) -> Duration {
        self.percentile(99)
    }

    /// Frames slower than `budget`.
    pub fn frames_over(&self, budget: Duration) -> usize {
        self.sorted_times.len() - self.sorted_times.partition_point(|time| *time <= budget)
    }

    /// Average frames per second.
    pub fn fps(&self) -> f64 {
        let average = self.average();
        if average.is_zero() {
            0.0
        } else {
            1.0 / average.as_secs_f64()
        }
    }

    /// Sprite updates per second with `live` sprites on screen every frame.
    pub fn sprites_per_second(&self, live: usize) -> f64 {
        if self.total_duration.is_zero() {
            0.0
        } else {
            (live * self.frame_count) as f64 / self.total_duration.as_secs_f64()
        }
    }
}

impl fmt::Display for FrameStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ms = |duration: Duration| duration.as_secs_f64() * 1000.0;
        write!(
            f,
            "{} frames, avg {:.2}ms ({:.1} fps), median {:.2}ms, p99 {:.2}ms, max {:.2}ms, {} over budget",
            self.frame_count,
            ms(self.average()),
            self.fps(),
            ms(self.median()),
            ms(self.p99()),
            ms(self.max_frame_time),
            self.frames_over(SIXTY_FPS_BUDGET),
        )
    }
}

/// Records the duration of each frame in a loop.
pub struct FrameTimer {
    frame_times: Vec<Duration>,
    frame_start: Option<Instant>,
}

impl FrameTimer {
    pub fn new(expected_frames: usize) -> Self {
        Self {
            frame_times: Vec::with_capacity(expected_frames),
            frame_start: None,
        }
    }

    pub fn begin_frame(&mut self) {
        self.frame_start = Some(Instant::now());
    }

    /// Record the frame started by the last `begin_frame`. Does nothing if no
    /// frame is open.
    pub fn end_frame(&mut self) {
        if let Some(start) = self.frame_start.take() {
            self.frame_times.push(start.elapsed());
        }
    }

    pub fn frame_count(&self) -> usize {
        self.frame_times.len()
    }

    pub fn stats(self) -> FrameStats {
        FrameStats::from_times(self.frame_times)
    }
}

/// Time `frame_count` calls of `frame_fn`, which receives the frame number.
pub fn measure_frames<F>(frame_count: usize, mut frame_fn: F) -> FrameStats
where
    F: FnMut(usize),
{
    let mut timer = FrameTimer::new(frame_count);
    for frame in 0..frame_count {
        timer.begin_frame();
        frame_fn(frame);
        timer.end_frame();
    }
    timer.stats()
}
