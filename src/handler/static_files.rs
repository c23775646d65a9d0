//! Static file serving
//!
//! Maps a decoded request path onto the served root, with index-file
//! fallback, trailing-slash redirects for directories, and a canonicalized
//! containment check against traversal.

use crate::handler::listing::ListingEntry;
use crate::handler::router::RequestContext;
use crate::http::{self, cache, mime, RangeOutcome};
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Where a request path landed in the filesystem.
#[derive(Debug, PartialEq, Eq)]
pub enum Resolved {
    /// A regular file to serve.
    File(PathBuf),
    /// A directory with no index file; render a listing.
    Listing(PathBuf),
    /// A directory requested without a trailing slash; redirect to it.
    RedirectToSlash,
    NotFound,
}

/// Resolve a decoded request path against the served root.
///
/// The resolved target is canonicalized and must stay inside the
/// canonicalized root; anything that escapes (via `..` or a symlink)
/// resolves to `NotFound`.
pub async fn resolve(root: &Path, request_path: &str, index_files: &[String]) -> Resolved {
    let root = match fs::canonicalize(root).await {
        Ok(p) => p,
        Err(e) => {
            logger::log_warning(&format!(
                "Served root '{}' is not accessible: {e}",
                root.display()
            ));
            return Resolved::NotFound;
        }
    };

    let relative = request_path.trim_start_matches('/');
    if relative.split('/').any(|segment| segment == "..") {
        logger::log_warning(&format!("Rejected traversal path: {request_path}"));
        return Resolved::NotFound;
    }

    let candidate = root.join(relative);
    let Ok(metadata) = fs::metadata(&candidate).await else {
        return Resolved::NotFound;
    };
    // Symlinks may still point outside the root; canonicalize and check.
    let Ok(canonical) = fs::canonicalize(&candidate).await else {
        return Resolved::NotFound;
    };
    if !canonical.starts_with(&root) {
        logger::log_warning(&format!(
            "Blocked path escaping the served root: {request_path} -> {}",
            canonical.display()
        ));
        return Resolved::NotFound;
    }

    if metadata.is_file() {
        return Resolved::File(canonical);
    }

    if !request_path.ends_with('/') {
        return Resolved::RedirectToSlash;
    }
    for index in index_files {
        let index_path = canonical.join(index);
        if fs::metadata(&index_path).await.is_ok_and(|m| m.is_file()) {
            return Resolved::File(index_path);
        }
    }
    Resolved::Listing(canonical)
}

/// Serve a resolved regular file, honoring `If-None-Match` and `Range`.
pub async fn serve_file(ctx: &RequestContext, path: &Path) -> Response<Full<Bytes>> {
    let content = match fs::read(path).await {
        Ok(c) => c,
        Err(e) => {
            logger::log_error(&format!("Failed to read '{}': {e}", path.display()));
            return http::not_found();
        }
    };

    let content_type = mime::content_type_for(path);
    let etag = cache::etag_for(&content);

    if cache::none_match_hits(ctx.if_none_match.as_deref(), &etag) {
        return http::not_modified(&etag);
    }

    let total_len = content.len() as u64;
    match http::evaluate_range(ctx.range.as_deref(), total_len) {
        RangeOutcome::Partial(range) => {
            let start = usize::try_from(range.start).unwrap_or(usize::MAX);
            let end = usize::try_from(range.end).unwrap_or(usize::MAX);
            let body = Bytes::from(content[start..=end].to_vec());
            http::partial_response(body, content_type, &etag, range, total_len, ctx.is_head)
        }
        RangeOutcome::Unsatisfiable => http::range_not_satisfiable(total_len),
        RangeOutcome::Full => {
            http::file_response(Bytes::from(content), content_type, &etag, ctx.is_head)
        }
    }
}

/// Collect the entries of a directory for listing.
///
/// Unreadable entries are skipped; an unreadable directory yields an empty
/// listing rather than an error page.
pub async fn read_listing_entries(dir: &Path) -> Vec<ListingEntry> {
    let mut entries = Vec::new();
    let Ok(mut reader) = fs::read_dir(dir).await else {
        logger::log_warning(&format!("Could not read directory '{}'", dir.display()));
        return entries;
    };
    while let Ok(Some(entry)) = reader.next_entry().await {
        let name = entry.file_name().to_string_lossy().into_owned();
        let is_dir = entry.file_type().await.is_ok_and(|t| t.is_dir());
        entries.push(ListingEntry { name, is_dir });
    }
    entries
}
