//! Request dispatch
//!
//! Entry point for HTTP request processing: method validation, path
//! decoding, static file dispatch, and access logging.

use crate::config::Config;
use crate::handler::{listing, static_files};
use crate::http;
use crate::logger::{self, AccessLogEntry};
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{header, Method, Request, Response};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;

/// Per-request header state the file handlers need.
pub struct RequestContext {
    pub is_head: bool,
    pub if_none_match: Option<String>,
    pub range: Option<String>,
}

/// Main entry point for HTTP request handling.
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    peer_addr: SocketAddr,
    config: Arc<Config>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method().clone();
    let raw_path = req.uri().path().to_string();
    let query = req.uri().query().map(ToString::to_string);

    let mut entry = AccessLogEntry::new(
        peer_addr.ip().to_string(),
        method.to_string(),
        raw_path.clone(),
    );
    entry.query = query.clone();
    entry.referer = header_value(&req, header::REFERER);
    entry.user_agent = header_value(&req, header::USER_AGENT);

    let response = match check_method(&method) {
        Some(resp) => resp,
        None => {
            let ctx = RequestContext {
                is_head: method == Method::HEAD,
                if_none_match: header_value(&req, header::IF_NONE_MATCH),
                range: header_value(&req, header::RANGE),
            };
            dispatch(&ctx, &raw_path, query.as_deref(), &config).await
        }
    };

    if config.logging.access_log {
        entry.status = response.status().as_u16();
        entry.body_bytes = response
            .headers()
            .get(header::CONTENT_LENGTH)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse().ok())
            .unwrap_or(0);
        logger::log_access(&entry, &config.logging.access_log_format);
    }

    Ok(response)
}

/// GET and HEAD are served, OPTIONS is answered, everything else is 405.
fn check_method(method: &Method) -> Option<Response<Full<Bytes>>> {
    match *method {
        Method::GET | Method::HEAD => None,
        Method::OPTIONS => Some(http::options_response()),
        _ => {
            logger::log_warning(&format!("Method not allowed: {method}"));
            Some(http::method_not_allowed())
        }
    }
}

/// Resolve the path under the served root and produce the response.
async fn dispatch(
    ctx: &RequestContext,
    raw_path: &str,
    query: Option<&str>,
    config: &Config,
) -> Response<Full<Bytes>> {
    let decoded = decode_path(raw_path);
    let root = config.root_dir();

    match static_files::resolve(&root, &decoded, &config.content.index_files).await {
        static_files::Resolved::File(path) => static_files::serve_file(ctx, &path).await,
        static_files::Resolved::RedirectToSlash => {
            // Redirect with the original (still encoded) path, keeping the
            // query string.
            let location = match query {
                Some(q) => format!("{raw_path}/?{q}"),
                None => format!("{raw_path}/"),
            };
            http::moved_permanently(&location)
        }
        static_files::Resolved::Listing(dir) => {
            if config.content.directory_listing {
                let mut entries = static_files::read_listing_entries(&dir).await;
                let html = listing::render_listing(&decoded, &mut entries);
                http::html_response(html, ctx.is_head)
            } else {
                http::not_found()
            }
        }
        static_files::Resolved::NotFound => http::not_found(),
    }
}

fn header_value(
    req: &Request<hyper::body::Incoming>,
    name: header::HeaderName,
) -> Option<String> {
    req.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string)
}

/// Percent-decode a URL path. Invalid escape sequences are kept literally;
/// non-UTF-8 decodes are replaced lossily.
pub fn decode_path(path: &str) -> String {
    let bytes = path.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            if let (Some(hi), Some(lo)) = (hex_value(bytes[i + 1]), hex_value(bytes[i + 2])) {
                out.push(hi * 16 + lo);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}

const fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_percent_sequences() {
        assert_eq!(decode_path("/my%20file.txt"), "/my file.txt");
        assert_eq!(decode_path("/a%2Fb"), "/a/b");
    }

    #[test]
    fn plain_paths_pass_through() {
        assert_eq!(decode_path("/index.html"), "/index.html");
        assert_eq!(decode_path("/"), "/");
    }

    #[test]
    fn invalid_escapes_stay_literal() {
        assert_eq!(decode_path("/100%"), "/100%");
        assert_eq!(decode_path("/a%zz"), "/a%zz");
    }

    fn config_for_root(root: &std::path::Path) -> Config {
        let mut cfg = Config::load_from("does-not-exist").expect("defaults should load");
        cfg.content.root = root.to_string_lossy().into_owned();
        cfg
    }

    fn plain_ctx() -> RequestContext {
        RequestContext {
            is_head: false,
            if_none_match: None,
            range: None,
        }
    }

    #[tokio::test]
    async fn directory_redirect_keeps_query_string() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("docs")).unwrap();
        let cfg = config_for_root(dir.path());

        let resp = dispatch(&plain_ctx(), "/docs", Some("page=2"), &cfg).await;
        assert_eq!(resp.status(), 301);
        assert_eq!(resp.headers()["location"], "/docs/?page=2");
    }

    #[tokio::test]
    async fn directory_redirect_without_query() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("docs")).unwrap();
        let cfg = config_for_root(dir.path());

        let resp = dispatch(&plain_ctx(), "/docs", None, &cfg).await;
        assert_eq!(resp.status(), 301);
        assert_eq!(resp.headers()["location"], "/docs/");
    }

    #[test]
    fn method_gate() {
        assert!(check_method(&Method::GET).is_none());
        assert!(check_method(&Method::HEAD).is_none());
        let options = check_method(&Method::OPTIONS).expect("options handled");
        assert_eq!(options.status(), 204);
        let post = check_method(&Method::POST).expect("post rejected");
        assert_eq!(post.status(), 405);
    }
}
