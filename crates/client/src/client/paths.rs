//! Percent-encoding for caller-supplied path segments.
//!
//! Resource names are interpolated into request paths; without encoding a
//! name like `qa/../prod` or `a?b` would change which resource is addressed.

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

use crate::error::{ClientError, Result};

/// Characters that must be percent-encoded in a single path segment.
const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'|')
    .add(b'\\')
    .add(b'^')
    .add(b'%')
    .add(b'/')
    .add(b'?')
    .add(b'#')
    .add(b'[')
    .add(b']');

/// Encode `segment` so it stays a single path segment.
///
/// Empty, `.` and `..` segments are rejected: URL resolution collapses dot
/// segments even when percent-encoded.
pub(crate) fn encode_path_segment(segment: &str) -> Result<String> {
    match segment {
        "" | "." | ".." => Err(ClientError::InvalidUrl(format!(
            "'{segment}' is not a valid resource name"
        ))),
        _ => Ok(utf8_percent_encode(segment, PATH_SEGMENT_ENCODE_SET).to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_names_unchanged() {
        assert_eq!(encode_path_segment("build-linux_64").unwrap(), "build-linux_64");
        assert_eq!(encode_path_segment("v1.2").unwrap(), "v1.2");
    }

    #[test]
    fn test_reserved_characters_encoded() {
        assert_eq!(encode_path_segment("qa/prod").unwrap(), "qa%2Fprod");
        assert_eq!(encode_path_segment("a b").unwrap(), "a%20b");
        assert_eq!(encode_path_segment("a?b#c").unwrap(), "a%3Fb%23c");
        assert_eq!(encode_path_segment("50%").unwrap(), "50%25");
    }

    #[test]
    fn test_dot_and_empty_segments_rejected() {
        for segment in ["", ".", ".."] {
            assert!(matches!(
                encode_path_segment(segment),
                Err(ClientError::InvalidUrl(_))
            ));
        }
    }
}
