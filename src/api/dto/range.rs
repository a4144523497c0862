//! Pagination range parsing and `Content-Range` descriptors.
//!
//! Listing requests carry an optional `range=[start,end]` query parameter
//! with inclusive bounds. Absent, unparsable, or out-of-order ranges all fall
//! back to "no range requested" and the caller serves the full listing.

use serde::Deserialize;

/// Query parameters for `GET /api/links`.
#[derive(Debug, Default, Deserialize)]
pub struct ListLinksParams {
    pub range: Option<String>,
}

impl ListLinksParams {
    /// Returns the validated inclusive window, if one was requested.
    pub fn window(&self) -> Option<(i64, i64)> {
        self.range.as_deref().and_then(parse_range)
    }
}

/// Parses a `[start,end]` descriptor into inclusive bounds.
///
/// The contract: strip a single leading `[` and trailing `]`, split on the
/// first comma, trim whitespace, parse both parts as integers, and require
/// `start >= 0` and `end >= start`. Anything else yields `None`.
pub fn parse_range(raw: &str) -> Option<(i64, i64)> {
    let inner = raw.trim().strip_prefix('[')?.strip_suffix(']')?;
    let (start, end) = inner.split_once(',')?;

    let start: i64 = start.trim().parse().ok()?;
    let end: i64 = end.trim().parse().ok()?;

    (start >= 0 && end >= start).then_some((start, end))
}

/// Formats the `Content-Range` style descriptor for a returned page.
///
/// Non-empty pages report the actual inclusive window; empty pages report
/// `links */{total}` so an empty store reads `links */0`.
pub fn content_range(start: i64, returned: usize, total: i64) -> String {
    if returned == 0 {
        return format!("links */{total}");
    }

    format!("links {}-{}/{}", start, start + returned as i64 - 1, total)
}
