// Configuration types
// Typed view of the layered configuration sources.

use serde::Deserialize;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub launcher: LauncherConfig,
    pub content: ContentConfig,
    pub logging: LoggingConfig,
}

/// Listener configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Tokio worker threads; defaults to the CPU count when unset.
    pub workers: Option<usize>,
}

/// Deferred browser-open configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LauncherConfig {
    pub enabled: bool,
    pub delay_ms: u64,
}

/// Served content configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ContentConfig {
    /// Directory to serve, resolved against the working directory.
    pub root: String,
    /// Filenames tried, in order, when a directory is requested.
    pub index_files: Vec<String>,
    /// Render an HTML listing when no index file exists.
    pub directory_listing: bool,
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub access_log: bool,
    /// `combined` or `common`.
    pub access_log_format: String,
}
