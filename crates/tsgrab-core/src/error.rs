//! Job-level failure taxonomy.
//!
//! Every variant is local to one job: the orchestrator records it in the
//! job's report and moves on to the next link. A segment that could not be
//! fetched is not an error at all; it is `SegmentOutcome::Absent`.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum JobError {
    /// The example URL's filename is not `<prefix><digits>.ts`.
    #[error("invalid URL format: {url}")]
    InvalidUrlFormat { url: String },

    /// The scheduler finished without a single present segment.
    #[error("no parts downloaded to merge")]
    NoSegmentsDownloaded,

    /// The remux process could not be spawned, rejected a write, or exited non-zero.
    #[error("mux failed for {}: {message}", .output.display())]
    MuxFailure { output: PathBuf, message: String },

    /// The per-job output directory could not be created.
    #[error("output directory {}: {source}", .path.display())]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
