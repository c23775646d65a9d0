//! Response builders
//!
//! Shared constructors for every status the file server can answer with.
//! Builders never panic; a failed build is logged and degrades to an empty
//! response.

use super::range::ByteRange;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{header, Response, StatusCode};

/// 200 OK with the full file body and caching headers.
pub fn file_response(
    data: Bytes,
    content_type: &str,
    etag: &str,
    is_head: bool,
) -> Response<Full<Bytes>> {
    let len = data.len();
    let body = if is_head { Bytes::new() } else { data };

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, content_type)
        .header(header::CONTENT_LENGTH, len)
        .header(header::ACCEPT_RANGES, "bytes")
        .header(header::ETAG, etag)
        .body(Full::new(body))
        .unwrap_or_else(|e| fallback("200", &e))
}

/// 206 Partial Content for a satisfiable byte range.
pub fn partial_response(
    data: Bytes,
    content_type: &str,
    etag: &str,
    range: ByteRange,
    total_len: u64,
    is_head: bool,
) -> Response<Full<Bytes>> {
    let body = if is_head { Bytes::new() } else { data };

    Response::builder()
        .status(StatusCode::PARTIAL_CONTENT)
        .header(header::CONTENT_TYPE, content_type)
        .header(header::CONTENT_LENGTH, range.len())
        .header(
            header::CONTENT_RANGE,
            format!("bytes {}-{}/{}", range.start, range.end, total_len),
        )
        .header(header::ACCEPT_RANGES, "bytes")
        .header(header::ETAG, etag)
        .body(Full::new(body))
        .unwrap_or_else(|e| fallback("206", &e))
}

/// 200 OK for generated HTML (directory listings).
pub fn html_response(content: String, is_head: bool) -> Response<Full<Bytes>> {
    let len = content.len();
    let body = if is_head {
        Bytes::new()
    } else {
        Bytes::from(content)
    };

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "text/html; charset=utf-8")
        .header(header::CONTENT_LENGTH, len)
        .body(Full::new(body))
        .unwrap_or_else(|e| fallback("200", &e))
}

/// 301 Moved Permanently, used to append the trailing slash on directories.
pub fn moved_permanently(location: &str) -> Response<Full<Bytes>> {
    Response::builder()
        .status(StatusCode::MOVED_PERMANENTLY)
        .header(header::LOCATION, location)
        .header(header::CONTENT_TYPE, "text/plain")
        .body(Full::new(Bytes::from(format!("Moved to {location}"))))
        .unwrap_or_else(|e| fallback("301", &e))
}

/// 304 Not Modified for an `If-None-Match` hit.
pub fn not_modified(etag: &str) -> Response<Full<Bytes>> {
    Response::builder()
        .status(StatusCode::NOT_MODIFIED)
        .header(header::ETAG, etag)
        .body(Full::new(Bytes::new()))
        .unwrap_or_else(|e| fallback("304", &e))
}

/// 404 Not Found.
pub fn not_found() -> Response<Full<Bytes>> {
    Response::builder()
        .status(StatusCode::NOT_FOUND)
        .header(header::CONTENT_TYPE, "text/plain")
        .body(Full::new(Bytes::from_static(b"404 Not Found")))
        .unwrap_or_else(|e| fallback("404", &e))
}

/// 405 Method Not Allowed, advertising the supported verbs.
pub fn method_not_allowed() -> Response<Full<Bytes>> {
    Response::builder()
        .status(StatusCode::METHOD_NOT_ALLOWED)
        .header(header::CONTENT_TYPE, "text/plain")
        .header(header::ALLOW, "GET, HEAD, OPTIONS")
        .body(Full::new(Bytes::from_static(b"405 Method Not Allowed")))
        .unwrap_or_else(|e| fallback("405", &e))
}

/// 204 answer to an OPTIONS request.
pub fn options_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(StatusCode::NO_CONTENT)
        .header(header::ALLOW, "GET, HEAD, OPTIONS")
        .body(Full::new(Bytes::new()))
        .unwrap_or_else(|e| fallback("204", &e))
}

/// 416 Range Not Satisfiable with the required `Content-Range: bytes */len`.
pub fn range_not_satisfiable(file_len: u64) -> Response<Full<Bytes>> {
    Response::builder()
        .status(StatusCode::RANGE_NOT_SATISFIABLE)
        .header(header::CONTENT_TYPE, "text/plain")
        .header(header::CONTENT_RANGE, format!("bytes */{file_len}"))
        .body(Full::new(Bytes::from_static(b"Range Not Satisfiable")))
        .unwrap_or_else(|e| fallback("416", &e))
}

fn fallback(status: &str, error: &hyper::http::Error) -> Response<Full<Bytes>> {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
    Response::new(Full::new(Bytes::new()))
}
