//! Read request and byte range types.

use serde::{Deserialize, Serialize};
use strum::Display;

/// Describes one read operation and how its bytes are decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum ReadRequest {
    /// Entire content as raw bytes.
    #[strum(serialize = "full-binary")]
    Full,

    /// Only the given byte slice, as raw bytes.
    #[strum(serialize = "byte-range")]
    Range(ByteRange),

    /// Entire content re-encoded as a base64 data URL.
    #[strum(serialize = "data-url")]
    DataUrl,
}

/// An inclusive byte range within a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ByteRange {
    /// First byte offset (inclusive).
    pub start: u64,

    /// Last byte offset (inclusive).
    pub stop: u64,
}

impl ByteRange {
    /// The range covering an entire file of the given size.
    pub fn full(size: u64) -> Self {
        Self {
            start: 0,
            stop: size.saturating_sub(1),
        }
    }

    /// Sanitize raw offset strings against a file size.
    ///
    /// Offsets arrive as free-form metadata (range buttons, CLI flags).
    /// A value that does not parse falls back to the start or end of the
    /// file respectively; both ends are clamped to `[0, size - 1]`.
    pub fn parse(start: &str, stop: &str, size: u64) -> Self {
        let last = size.saturating_sub(1);
        let start = start.trim().parse::<u64>().unwrap_or(0).min(last);
        let stop = stop.trim().parse::<u64>().unwrap_or(last).min(last);
        Self { start, stop }
    }

    /// Number of bytes the range covers within a file of `size` bytes.
    pub fn len_within(&self, size: u64) -> u64 {
        if self.start > self.stop || self.start >= size {
            return 0;
        }
        (self.stop - self.start + 1).min(size - self.start)
    }

    /// Human-facing summary with 1-based inclusive offsets.
    pub fn summary(&self, file_size: u64) -> String {
        format!(
            "Read bytes: {} - {} of {} byte file.",
            self.start + 1,
            self.stop + 1,
            file_size
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_numeric() {
        let range = ByteRange::parse("10", "19", 1000);
        assert_eq!(range.start, 10);
        assert_eq!(range.stop, 19);
        assert_eq!(range.len_within(1000), 10);
    }

    #[test]
    fn test_parse_defaults_to_whole_file() {
        let range = ByteRange::parse("", "", 1000);
        assert_eq!(range, ByteRange { start: 0, stop: 999 });

        let range = ByteRange::parse("abc", "xyz", 500);
        assert_eq!(range, ByteRange { start: 0, stop: 499 });
    }

    #[test]
    fn test_parse_clamps_to_file() {
        let range = ByteRange::parse("5000", "9000", 100);
        assert_eq!(range, ByteRange { start: 99, stop: 99 });
    }

    #[test]
    fn test_empty_file() {
        let range = ByteRange::full(0);
        assert_eq!(range.len_within(0), 0);
    }

    #[test]
    fn test_inverted_range_is_empty() {
        let range = ByteRange { start: 20, stop: 10 };
        assert_eq!(range.len_within(100), 0);
    }

    #[test]
    fn test_summary_is_one_based() {
        let range = ByteRange::parse("10", "19", 1000);
        assert_eq!(range.summary(1000), "Read bytes: 11 - 20 of 1000 byte file.");
    }

    #[test]
    fn test_request_display() {
        assert_eq!(ReadRequest::Full.to_string(), "full-binary");
        assert_eq!(ReadRequest::DataUrl.to_string(), "data-url");
        let range = ReadRequest::Range(ByteRange { start: 0, stop: 4 });
        assert_eq!(range.to_string(), "byte-range");
    }
}
