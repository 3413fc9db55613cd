//! Batch scheduler: fetches segment indices in fixed-size windows until the
//! stream ends.
//!
//! Each batch dispatches `concurrent_downloads` fetches to a worker pool of
//! the same size and waits for all of them before the next batch starts, so
//! no more than one batch is ever in flight. Results are collected on the
//! calling thread in completion order; ordering for output is restored later
//! by the assembler.

mod heuristic;
mod pool;
mod run;

pub use heuristic::MissTracker;
pub use run::run_batches;

/// Scheduling parameters for one job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchPolicy {
    /// First index of the first batch.
    pub start_part: u64,
    /// No batch starts at or beyond this index. A batch that starts below it
    /// is still dispatched in full.
    pub max_parts: u64,
    /// Batch size and worker count.
    pub concurrent_downloads: usize,
    /// Miss count that ends the stream when a batch comes back empty.
    pub stop_after_misses: u32,
}

impl Default for BatchPolicy {
    fn default() -> Self {
        Self {
            start_part: 0,
            max_parts: 10_000,
            concurrent_downloads: 3,
            stop_after_misses: 3,
        }
    }
}

/// Why scheduling stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// An empty batch brought the miss counter to the threshold.
    MissThreshold { misses: u32 },
    /// The next batch would start at or past `max_parts`.
    MaxParts,
}

/// Everything a job's fetch phase produced.
#[derive(Debug)]
pub struct ScheduleOutcome {
    /// Present segments as `(index, bytes)`, in completion order.
    pub segments: Vec<(u64, Vec<u8>)>,
    pub stop: StopReason,
    pub batches: u64,
}
