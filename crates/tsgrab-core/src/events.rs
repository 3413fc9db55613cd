//! Progress events sent from the blocking pipeline to whoever renders them.

use std::path::PathBuf;

/// One line-worthy thing that happened during a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobEvent {
    JobStarted {
        folder_index: usize,
        video_index: i64,
        output_dir: PathBuf,
    },
    SegmentDownloaded {
        index: u64,
        name: String,
    },
    SegmentMissing {
        index: u64,
        name: String,
    },
    /// Fetching stopped because the miss threshold was reached on an empty batch.
    /// `misses` may exceed `threshold` when misses carry over from an
    /// earlier batch that also had a hit.
    StreamEnded {
        threshold: u32,
        misses: u32,
    },
    Merging {
        segments: usize,
    },
    Merged {
        output: PathBuf,
    },
    JobSkipped {
        folder_index: usize,
        reason: String,
    },
}

pub type EventSender = tokio::sync::mpsc::Sender<JobEvent>;

/// Sends `event` if a receiver is attached. Blocks while the channel is full.
///
/// Must be called from a non-async thread (the pipeline runs on a blocking thread).
pub(crate) fn emit(tx: Option<&EventSender>, event: JobEvent) {
    if let Some(tx) = tx {
        let _ = tx.blocking_send(event);
    }
}
