//! Segment URL template inferred from one example segment URL.
//!
//! Given `https://cdn.example.com/v/abc/seg0005.ts?token=x`, the template
//! captures everything needed to address any other segment of the same
//! stream: `https://cdn.example.com/v/abc/seg{index:04}.ts?token=x`.

mod parse;

pub use parse::{split_segment_filename, SEGMENT_EXT};

use crate::error::JobError;
use url::{Position, Url};

/// Addressing pattern for all segments of one link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentTemplate {
    /// Literal text before the segment number in each filename.
    pub prefix: String,
    /// Zero-padding width of the segment number.
    pub number_width: usize,
    /// Path up to (not including) the final `/`. Empty when segments live at the root.
    pub base_path: String,
    pub scheme: String,
    /// Authority as written in the example (userinfo, host and port).
    pub host: String,
    /// Query string without the leading `?`, reused verbatim for every segment.
    pub query: Option<String>,
}

impl SegmentTemplate {
    /// Parses an example segment URL.
    ///
    /// Fails with [`JobError::InvalidUrlFormat`] if the URL does not parse, has
    /// no host, or its last path segment is not `<prefix><digits>.ts`.
    pub fn from_url(example: &str) -> Result<Self, JobError> {
        let invalid = || JobError::InvalidUrlFormat {
            url: example.to_string(),
        };
        let parsed = Url::parse(example).map_err(|_| invalid())?;
        if parsed.host_str().is_none() {
            return Err(invalid());
        }
        let (base_path, filename) = parsed.path().rsplit_once('/').ok_or_else(invalid)?;
        let (prefix, digits) = split_segment_filename(filename).ok_or_else(invalid)?;

        Ok(Self {
            prefix: prefix.to_string(),
            number_width: digits.len(),
            base_path: base_path.to_string(),
            scheme: parsed.scheme().to_string(),
            host: parsed[Position::BeforeUsername..Position::AfterPort].to_string(),
            query: parsed.query().filter(|q| !q.is_empty()).map(str::to_string),
        })
    }

    /// Filename of segment `index`, e.g. `seg0042.ts`.
    pub fn segment_name(&self, index: u64) -> String {
        format!(
            "{}{:0width$}{}",
            self.prefix,
            index,
            SEGMENT_EXT,
            width = self.number_width
        )
    }

    /// Fully-qualified URL of segment `index`.
    pub fn segment_url(&self, index: u64) -> String {
        let mut url = format!(
            "{}://{}{}/{}",
            self.scheme,
            self.host,
            self.base_path,
            self.segment_name(index)
        );
        if let Some(q) = &self.query {
            url.push('?');
            url.push_str(q);
        }
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn extracts_all_components() {
        let t = SegmentTemplate::from_url("https://cdn.example.com/v/abc/seg0005.ts?token=x&e=1")
            .unwrap();
        assert_eq!(t.prefix, "seg");
        assert_eq!(t.number_width, 4);
        assert_eq!(t.base_path, "/v/abc");
        assert_eq!(t.scheme, "https");
        assert_eq!(t.host, "cdn.example.com");
        assert_eq!(t.query.as_deref(), Some("token=x&e=1"));
    }

    #[test]
    fn reconstructs_example_filename() {
        for (url, name, n) in [
            ("https://host/path/seg0005.ts", "seg0005.ts", 5),
            ("http://host/a/b/c/720p_000123.ts", "720p_000123.ts", 123),
            ("https://host/x/7.ts", "7.ts", 7),
            ("https://host/x/data00.ts", "data00.ts", 0),
        ] {
            let t = SegmentTemplate::from_url(url).unwrap();
            assert_eq!(t.segment_name(n), name, "{url}");
            assert_eq!(t.segment_url(n), url, "{url}");
        }
    }

    proptest::proptest! {
        #![proptest_config(proptest::prelude::ProptestConfig::with_cases(256))]

        #[test]
        fn any_valid_example_round_trips(
            prefix in "([a-z0-9_-]{0,6}[a-z_-])?",
            dirs in proptest::collection::vec("[a-z0-9]{1,6}", 0..4),
            query in "([a-z]{1,5}=[a-z0-9]{1,5})?",
            (width, index) in (1usize..=8).prop_flat_map(|w| (Just(w), 0u64..10u64.pow(w as u32))),
        ) {
            let name = format!("{prefix}{index:0width$}.ts");
            let mut url = String::from("https://host.example");
            for d in &dirs {
                url.push('/');
                url.push_str(d);
            }
            url.push('/');
            url.push_str(&name);
            if !query.is_empty() {
                url.push('?');
                url.push_str(&query);
            }

            let t = SegmentTemplate::from_url(&url).unwrap();
            prop_assert_eq!(t.segment_name(index), name);
            prop_assert_eq!(t.segment_url(index), url);
        }
    }

    #[test]
    fn index_wider_than_template_is_not_truncated() {
        let t = SegmentTemplate::from_url("https://host/path/seg05.ts").unwrap();
        assert_eq!(t.segment_name(3), "seg03.ts");
        assert_eq!(t.segment_name(123), "seg123.ts");
    }

    #[test]
    fn keeps_port_and_query() {
        let t = SegmentTemplate::from_url("http://127.0.0.1:8080/live/s1.ts?sig=abc").unwrap();
        assert_eq!(t.host, "127.0.0.1:8080");
        assert_eq!(t.segment_url(2), "http://127.0.0.1:8080/live/s2.ts?sig=abc");
    }

    #[test]
    fn root_level_segments_and_empty_query() {
        let t = SegmentTemplate::from_url("https://host/chunk9.ts?").unwrap();
        assert_eq!(t.base_path, "");
        assert_eq!(t.query, None);
        assert_eq!(t.segment_url(10), "https://host/chunk10.ts");
    }

    #[test]
    fn fragment_is_dropped() {
        let t = SegmentTemplate::from_url("https://host/p/seg1.ts#t=10").unwrap();
        assert_eq!(t.segment_url(1), "https://host/p/seg1.ts");
    }

    #[test]
    fn rejects_invalid_links() {
        for url in [
            "https://host/path/index.m3u8",
            "https://host/path/",
            "not a url",
            "seg0001.ts",
            "mailto:seg1.ts",
        ] {
            assert!(
                matches!(
                    SegmentTemplate::from_url(url),
                    Err(JobError::InvalidUrlFormat { .. })
                ),
                "{url}"
            );
        }
    }
}
