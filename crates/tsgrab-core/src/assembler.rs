//! Ordered assembly of collected segments into a sink.

use crate::error::JobError;
use std::convert::Infallible;

/// Destination for the ordered segment byte stream.
pub trait SegmentSink {
    type Error;

    fn write_segment(&mut self, bytes: &[u8]) -> Result<(), Self::Error>;
}

/// In-memory sink, mostly useful for tests and dry runs.
impl SegmentSink for Vec<u8> {
    type Error = Infallible;

    fn write_segment(&mut self, bytes: &[u8]) -> Result<(), Infallible> {
        self.extend_from_slice(bytes);
        Ok(())
    }
}

/// Present segments sorted by ascending index. Never empty.
#[derive(Debug)]
pub struct OrderedSegments {
    segments: Vec<(u64, Vec<u8>)>,
}

impl OrderedSegments {
    /// Sorts `segments` by index. An empty collection means the job has
    /// nothing to mux: [`JobError::NoSegmentsDownloaded`].
    pub fn new(mut segments: Vec<(u64, Vec<u8>)>) -> Result<Self, JobError> {
        if segments.is_empty() {
            return Err(JobError::NoSegmentsDownloaded);
        }
        segments.sort_by_key(|(index, _)| *index);
        Ok(Self { segments })
    }

    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    pub fn indices(&self) -> impl Iterator<Item = u64> + '_ {
        self.segments.iter().map(|(index, _)| *index)
    }

    /// Writes every segment to `sink` in index order, releasing each buffer
    /// once written. Stops at the first write error. Returns bytes written.
    pub fn write_to<S>(self, sink: &mut S) -> Result<u64, S::Error>
    where
        S: SegmentSink + ?Sized,
    {
        let mut written = 0u64;
        for (_, bytes) in self.segments {
            sink.write_segment(&bytes)?;
            written += bytes.len() as u64;
        }
        Ok(written)
    }
}
