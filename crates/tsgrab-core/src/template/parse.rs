//! Segment filename matching.

/// Extension every segment filename carries.
pub const SEGMENT_EXT: &str = ".ts";

/// Splits `<prefix><digits>.ts` into `(prefix, digits)`.
///
/// The digit run is the longest run of ASCII digits immediately before the
/// extension, so the prefix may itself contain digits (`v2_0005.ts` gives
/// `("v2_", "0005")`). Returns `None` when the name does not end in `.ts` or
/// no digits precede it.
pub fn split_segment_filename(filename: &str) -> Option<(&str, &str)> {
    let stem = filename.strip_suffix(SEGMENT_EXT)?;
    let prefix = stem.trim_end_matches(|c: char| c.is_ascii_digit());
    let digits = &stem[prefix.len()..];
    if digits.is_empty() {
        return None;
    }
    Some((prefix, digits))
}
