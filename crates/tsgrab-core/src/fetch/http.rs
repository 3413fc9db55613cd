//! Segment GET over libcurl.

use super::{FetchError, SegmentFetcher, SegmentOutcome};
use std::time::Duration;

/// Production fetcher: one blocking curl Easy handle per request.
#[derive(Debug, Clone, Copy)]
pub struct CurlFetcher {
    timeout: Duration,
}

impl CurlFetcher {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    /// GETs `url` and returns the body only for a non-empty 200 response.
    pub fn fetch_body(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let mut body = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(url)?;
        easy.follow_location(true)?;
        easy.max_redirections(10)?;
        easy.connect_timeout(self.timeout)?;
        // Stall timeout rather than wall clock: a segment that keeps
        // trickling in is not cut off, one that goes silent is.
        easy.low_speed_limit(1)?;
        easy.low_speed_time(self.timeout)?;

        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let code = easy.response_code()?;
        if code != 200 {
            return Err(FetchError::Http(code));
        }
        if body.is_empty() {
            return Err(FetchError::EmptyBody);
        }
        Ok(body)
    }
}

impl SegmentFetcher for CurlFetcher {
    fn fetch(&self, url: &str) -> SegmentOutcome {
        let res = self.fetch_body(url);
        if let Err(e) = &res {
            tracing::debug!(url, error = %e, "segment fetch failed");
        }
        SegmentOutcome::from_result(res)
    }
}
