//! Stream-end detection by counting missed segments.
//!
//! The counter resets on any present segment and grows by one per absent
//! segment, across batch boundaries. It is only consulted at the end of a
//! batch in which nothing was present. A long run of misses interleaved
//! with at least one hit per batch therefore never stops the stream, while a
//! batch with one hit resets whatever had accumulated.

#[derive(Debug, Clone)]
pub struct MissTracker {
    threshold: u32,
    misses: u32,
    batch_hit: bool,
}

impl MissTracker {
    pub fn new(threshold: u32) -> Self {
        Self {
            threshold,
            misses: 0,
            batch_hit: false,
        }
    }

    pub fn begin_batch(&mut self) {
        self.batch_hit = false;
    }

    pub fn record(&mut self, present: bool) {
        if present {
            self.misses = 0;
            self.batch_hit = true;
        } else {
            self.misses = self.misses.saturating_add(1);
        }
    }

    /// Consecutive misses since the last present segment.
    pub fn misses(&self) -> u32 {
        self.misses
    }

    /// True when the batch just finished had no hits and the threshold is reached.
    pub fn should_stop(&self) -> bool {
        !self.batch_hit && self.misses >= self.threshold
    }
}
