//! Range header parsing
//!
//! Single-range `bytes=` parsing per RFC 7233. Multi-range requests and
//! non-byte units are treated as if no Range header was sent.

/// An inclusive byte range resolved against a known file length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteRange {
    pub start: u64,
    pub end: u64,
}

impl ByteRange {
    /// Number of bytes this range covers.
    #[inline]
    pub const fn len(&self) -> u64 {
        self.end - self.start + 1
    }
}

/// How a request's Range header should be answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeOutcome {
    /// No usable Range header, send the whole body with 200.
    Full,
    /// A satisfiable single range, send 206 Partial Content.
    Partial(ByteRange),
    /// Syntactically valid but unsatisfiable, send 416.
    Unsatisfiable,
}

/// Evaluate a Range header against a file of `file_len` bytes.
///
/// Accepted forms: `bytes=start-end`, `bytes=start-`, `bytes=-suffix`.
pub fn evaluate_range(header: Option<&str>, file_len: u64) -> RangeOutcome {
    let Some(range_spec) = header.and_then(|h| h.strip_prefix("bytes=")) else {
        return RangeOutcome::Full;
    };
    if range_spec.contains(',') {
        // Multi-range is not supported, fall back to the full body.
        return RangeOutcome::Full;
    }
    let Some((start_str, end_str)) = range_spec.split_once('-') else {
        return RangeOutcome::Full;
    };
    let (start_str, end_str) = (start_str.trim(), end_str.trim());

    if start_str.is_empty() {
        return suffix_range(end_str, file_len);
    }

    let Ok(start) = start_str.parse::<u64>() else {
        return RangeOutcome::Full;
    };
    if start >= file_len {
        return RangeOutcome::Unsatisfiable;
    }

    let end = if end_str.is_empty() {
        file_len - 1
    } else {
        match end_str.parse::<u64>() {
            // An end past the last byte is clamped, not rejected.
            Ok(end) => end.min(file_len - 1),
            Err(_) => return RangeOutcome::Full,
        }
    };

    if start > end {
        return RangeOutcome::Unsatisfiable;
    }
    RangeOutcome::Partial(ByteRange { start, end })
}

/// `bytes=-N`: the final N bytes of the file.
fn suffix_range(suffix_str: &str, file_len: u64) -> RangeOutcome {
    let Ok(suffix) = suffix_str.parse::<u64>() else {
        return RangeOutcome::Full;
    };
    if suffix == 0 || file_len == 0 {
        return RangeOutcome::Unsatisfiable;
    }
    RangeOutcome::Partial(ByteRange {
        start: file_len.saturating_sub(suffix),
        end: file_len - 1,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_header_means_full_body() {
        assert_eq!(evaluate_range(None, 100), RangeOutcome::Full);
        assert_eq!(evaluate_range(Some("items=0-1"), 100), RangeOutcome::Full);
    }

    #[test]
    fn bounded_range() {
        let RangeOutcome::Partial(range) = evaluate_range(Some("bytes=10-19"), 100) else {
            panic!("expected partial");
        };
        assert_eq!(range, ByteRange { start: 10, end: 19 });
        assert_eq!(range.len(), 10);
    }

    #[test]
    fn open_ended_range_runs_to_eof() {
        let RangeOutcome::Partial(range) = evaluate_range(Some("bytes=90-"), 100) else {
            panic!("expected partial");
        };
        assert_eq!(range, ByteRange { start: 90, end: 99 });
    }

    #[test]
    fn suffix_range_takes_tail() {
        let RangeOutcome::Partial(range) = evaluate_range(Some("bytes=-25"), 100) else {
            panic!("expected partial");
        };
        assert_eq!(range, ByteRange { start: 75, end: 99 });
    }

    #[test]
    fn oversized_suffix_covers_whole_file() {
        let RangeOutcome::Partial(range) = evaluate_range(Some("bytes=-500"), 100) else {
            panic!("expected partial");
        };
        assert_eq!(range, ByteRange { start: 0, end: 99 });
    }

    #[test]
    fn end_is_clamped_to_file_length() {
        let RangeOutcome::Partial(range) = evaluate_range(Some("bytes=50-5000"), 100) else {
            panic!("expected partial");
        };
        assert_eq!(range.end, 99);
    }

    #[test]
    fn start_past_eof_is_unsatisfiable() {
        assert_eq!(
            evaluate_range(Some("bytes=100-"), 100),
            RangeOutcome::Unsatisfiable
        );
        assert_eq!(
            evaluate_range(Some("bytes=-0"), 100),
            RangeOutcome::Unsatisfiable
        );
    }

    #[test]
    fn garbage_and_multirange_fall_back_to_full() {
        assert_eq!(evaluate_range(Some("bytes=a-b"), 100), RangeOutcome::Full);
        assert_eq!(
            evaluate_range(Some("bytes=0-9,20-29"), 100),
            RangeOutcome::Full
        );
    }
}
