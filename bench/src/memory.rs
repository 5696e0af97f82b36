//! Heap profiling with dhat.
//!
//! The sprite store allocates its whole capacity once, so a steady run should
//! show one large block and nothing per frame. Profiling adds overhead and is
//! only compiled in with the `memory_profiling` feature:
//!
//! ```bash
//! cargo bench -p bunny_bench --features memory_profiling
//! ```
//!
//! Load the resulting `dhat-heap.json` into
//! <https://nnethercote.github.io/dh_view/dh_view.html>.

use std::fmt;
use std::mem;

use bunny_engine::Sprite;

/// Bytes one sprite slot occupies in the store.
pub const fn bytes_per_sprite() -> usize {
    mem::size_of::<Sprite>()
}

/// Bytes a store of `capacity` slots allocates up front.
pub const fn store_bytes(capacity: usize) -> usize {
    capacity * bytes_per_sprite()
}

/// Heap statistics for one measurement.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStats {
    pub bytes_allocated: u64,
    pub allocation_count: u64,
    pub peak_bytes: u64,
}

impl MemoryStats {
    /// Allocations per frame over a run of `frames` frames.
    pub fn allocations_per_frame(&self, frames: u64) -> f64 {
        if frames == 0 {
            0.0
        } else {
            self.allocation_count as f64 / frames as f64
        }
    }
}

impl fmt::Display for MemoryStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "allocated: {} bytes ({} allocs), peak: {} bytes",
            self.bytes_allocated, self.allocation_count, self.peak_bytes
        )
    }
}

/// Active heap profiler. Only one may exist at a time.
#[cfg(feature = "memory_profiling")]
pub struct MemoryProfiler {
    _profiler: dhat::Profiler,
}

#[cfg(feature = "memory_profiling")]
impl MemoryProfiler {
    pub fn start() -> Self {
        Self {
            _profiler: dhat::Profiler::new_heap(),
        }
    }

    /// Stop profiling. Writes `dhat-heap.json` as the profiler drops.
    pub fn finish(self) -> MemoryStats {
        let stats = dhat::HeapStats::get();
        MemoryStats {
            bytes_allocated: stats.total_bytes as u64,
            allocation_count: stats.total_blocks as u64,
            peak_bytes: stats.max_bytes as u64,
        }
    }
}

#[cfg(not(feature = "memory_profiling"))]
pub struct MemoryProfiler;

#[cfg(not(feature = "memory_profiling"))]
impl MemoryProfiler {
    pub fn start() -> Self {
        Self
    }

    pub fn finish(self) -> MemoryStats {
        MemoryStats::default()
    }
}

/// Run `f` under the profiler. Stats are empty without `memory_profiling`.
pub fn measure_memory<F, R>(f: F) -> (R, MemoryStats)
where
    F: FnOnce() -> R,
{
    let profiler = MemoryProfiler::start();
    let result = f();
    (result, profiler.finish())
}
