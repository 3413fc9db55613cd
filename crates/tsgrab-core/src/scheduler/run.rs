use super::heuristic::MissTracker;
use super::pool::FetchPool;
use super::{BatchPolicy, ScheduleOutcome, StopReason};
use crate::events::{emit, EventSender, JobEvent};
use crate::fetch::{SegmentFetcher, SegmentOutcome};
use crate::template::SegmentTemplate;

/// Fetches batches of segments for `template` until the miss heuristic fires
/// or `policy.max_parts` is reached.
///
/// Blocks the calling thread. Per-segment progress goes to `events` (if any)
/// and to the log.
pub fn run_batches(
    template: &SegmentTemplate,
    fetcher: &dyn SegmentFetcher,
    policy: &BatchPolicy,
    events: Option<&EventSender>,
) -> ScheduleOutcome {
    let batch_size = policy.concurrent_downloads.max(1);
    let mut segments = Vec::new();
    let mut tracker = MissTracker::new(policy.stop_after_misses);
    let mut batches = 0u64;

    let stop = std::thread::scope(|scope| {
        let pool = FetchPool::start(scope, fetcher, batch_size);
        let mut i = policy.start_part;
        while i < policy.max_parts {
            tracker.begin_batch();

            let mut dispatched = 0usize;
            for index in (i..).take(batch_size) {
                if !pool.submit(index, template.segment_url(index)) {
                    break;
                }
                dispatched += 1;
            }

            for _ in 0..dispatched {
                let Some(segment) = pool.recv() else {
                    break;
                };
                let name = template.segment_name(segment.index);
                match segment.outcome {
                    SegmentOutcome::Present(bytes) => {
                        tracing::info!("Downloaded: {}", name);
                        emit(
                            events,
                            JobEvent::SegmentDownloaded {
                                index: segment.index,
                                name,
                            },
                        );
                        tracker.record(true);
                        segments.push((segment.index, bytes));
                    }
                    SegmentOutcome::Absent => {
                        tracing::info!("Missing: {}", name);
                        emit(
                            events,
                            JobEvent::SegmentMissing {
                                index: segment.index,
                                name,
                            },
                        );
                        tracker.record(false);
                    }
                }
            }
            batches += 1;

            if tracker.should_stop() {
                let misses = tracker.misses();
                tracing::info!(
                    misses,
                    "Stopped after {} consecutive missing parts.",
                    policy.stop_after_misses
                );
                emit(
                    events,
                    JobEvent::StreamEnded {
                        threshold: policy.stop_after_misses,
                        misses,
                    },
                );
                return StopReason::MissThreshold { misses };
            }

            i = i.saturating_add(batch_size as u64);
        }
        tracing::debug!(max_parts = policy.max_parts, "reached segment index limit");
        StopReason::MaxParts
    });

    ScheduleOutcome {
        segments,
        stop,
        batches,
    }
}
