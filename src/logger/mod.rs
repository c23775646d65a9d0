//! Console logging
//!
//! Lifecycle banners, per-request access lines, and warning/error output.
//! Everything goes to stdout/stderr; this is a console tool, there are no
//! log files.

mod format;

pub use format::AccessLogEntry;

use crate::config::Config;
use std::net::SocketAddr;
use std::path::Path;

pub fn log_server_start(addr: &SocketAddr, browse_url: &str, root: &Path, config: &Config) {
    println!("======================================");
    println!("quickserve is ready");
    println!("Serving {} on http://{addr}", root.display());
    println!("Browse to {browse_url}");
    if config.launcher.enabled {
        println!("Opening your browser in {} ms", config.launcher.delay_ms);
    }
    println!("Press Ctrl+C to stop");
    println!("======================================\n");
}

pub fn log_shutdown() {
    println!("\nServer stopped.");
}

pub fn log_signal(name: &str) {
    println!("\n[SIGNAL] {name} received, shutting down");
}

pub fn log_browser_opened(url: &str) {
    println!("[LAUNCH] Opened browser at {url}");
}

pub fn log_access(entry: &AccessLogEntry, style: &str) {
    println!("{}", entry.render(style));
}

pub fn log_warning(message: &str) {
    eprintln!("[WARN] {message}");
}

pub fn log_error(message: &str) {
    eprintln!("[ERROR] {message}");
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    eprintln!("[ERROR] Failed to serve connection: {err:?}");
}
