//! Directory listing rendering
//!
//! Generates the HTML index page shown when a requested directory has no
//! index file. Entries are sorted by name, directories carry a trailing
//! slash, names are HTML-escaped and hrefs percent-encoded.

/// One row of a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingEntry {
    pub name: String,
    pub is_dir: bool,
}

/// Render the listing page for `request_path` (the decoded URL path, with
/// trailing slash).
pub fn render_listing(request_path: &str, entries: &mut Vec<ListingEntry>) -> String {
    entries.sort_by(|a, b| a.name.cmp(&b.name));

    let title = format!("Directory listing for {}", escape_html(request_path));
    let mut items = String::new();
    for entry in entries.iter() {
        let suffix = if entry.is_dir { "/" } else { "" };
        items.push_str(&format!(
            "<li><a href=\"{href}{suffix}\">{label}{suffix}</a></li>\n",
            href = encode_href(&entry.name),
            label = escape_html(&entry.name),
        ));
    }

    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title}</title>\n</head>\n<body>\n<h1>{title}</h1>\n<hr>\n\
         <ul>\n{items}</ul>\n<hr>\n</body>\n</html>\n"
    )
}

/// Escape text for embedding in HTML content.
fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Percent-encode a single path segment for use in an href.
fn encode_href(segment: &str) -> String {
    let mut out = String::with_capacity(segment.len());
    for byte in segment.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char);
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}
