//! Conditional request support
//!
//! `ETag` generation and `If-None-Match` evaluation for 304 responses.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Compute a weak-ish validator for a body.
///
/// Hash of the content plus its length, rendered as a quoted hex string.
/// Good enough for a development server; not a content digest.
pub fn etag_for(content: &[u8]) -> String {
    let mut hasher = DefaultHasher::new();
    content.hash(&mut hasher);
    format!("\"{:x}-{:x}\"", content.len(), hasher.finish())
}

/// Whether the client's `If-None-Match` header matches `etag`.
///
/// Handles comma-separated candidate lists and the `*` wildcard.
/// A match means the handler should answer 304 Not Modified.
pub fn none_match_hits(if_none_match: Option<&str>, etag: &str) -> bool {
    if_none_match.is_some_and(|candidates| {
        candidates
            .split(',')
            .map(str::trim)
            .any(|candidate| candidate == "*" || candidate == etag)
    })
}
