//! Single-segment fetch.
//!
//! A fetch either yields the segment body or nothing. HTTP errors, timeouts
//! and transport failures all collapse into [`SegmentOutcome::Absent`]: the
//! stream-end heuristic treats a missing segment and a network blip the same
//! way, so the distinction is only kept for debug logging.

mod http;
mod error;

pub use http::CurlFetcher;
pub use error::FetchError;

/// Result of one fetch attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SegmentOutcome {
    Present(Vec<u8>),
    Absent,
}

impl SegmentOutcome {
    /// Collapses a detailed fetch result into presence/absence.
    pub fn from_result(res: Result<Vec<u8>, FetchError>) -> Self {
        match res {
            Ok(body) => SegmentOutcome::Present(body),
            Err(_) => SegmentOutcome::Absent,
        }
    }
}

/// A fetch attempt for one segment index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub index: u64,
    pub outcome: SegmentOutcome,
}

/// Source of segment bodies. Shared by all workers of a batch, so it must be `Sync`.
pub trait SegmentFetcher: Send + Sync {
    fn fetch(&self, url: &str) -> SegmentOutcome;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_error_is_absent() {
        assert_eq!(
            SegmentOutcome::from_result(Err(FetchError::Http(404))),
            SegmentOutcome::Absent
        );
        assert_eq!(
            SegmentOutcome::from_result(Err(FetchError::Http(500))),
            SegmentOutcome::Absent
        );
        assert_eq!(
            SegmentOutcome::from_result(Err(FetchError::EmptyBody)),
            SegmentOutcome::Absent
        );
    }

    #[test]
    fn body_is_present() {
        assert_eq!(
            SegmentOutcome::from_result(Ok(b"ts".to_vec())),
            SegmentOutcome::Present(b"ts".to_vec())
        );
    }
}
