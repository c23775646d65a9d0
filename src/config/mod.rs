// Configuration module entry point
// Layered sources: built-in defaults, optional quickserve.toml, QUICKSERVE_*
// env (double underscore for nesting, e.g. QUICKSERVE_SERVER__PORT).
// The defaults alone give the canonical zero-config behavior: serve the
// working directory on 0.0.0.0:3000 and open the browser after one second.

mod types;

use std::net::SocketAddr;
use std::path::PathBuf;

pub use types::{Config, ContentConfig, LauncherConfig, LoggingConfig, ServerConfig};

impl Config {
    /// Load configuration from the default file name (`quickserve.toml`).
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("quickserve")
    }

    /// Load configuration from the given file path (extension omitted).
    /// The file is optional; defaults apply when it is absent.
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(config::Environment::with_prefix("QUICKSERVE").separator("__"))
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("launcher.enabled", true)?
            .set_default("launcher.delay_ms", 1000)?
            .set_default("content.root", ".")?
            .set_default(
                "content.index_files",
                vec!["index.html".to_string(), "index.htm".to_string()],
            )?
            .set_default("content.directory_listing", true)?
            .set_default("logging.access_log", true)?
            .set_default("logging.access_log_format", "combined")?
            .build()?;

        settings.try_deserialize()
    }

    /// The address the listener binds. Bare IPv6 hosts are bracketed so
    /// `"::"` becomes `[::]:port` rather than an unparseable `:::port`.
    pub fn socket_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        let host = &self.server.host;
        if host.contains(':') && !host.starts_with('[') {
            format!("[{host}]:{}", self.server.port).parse()
        } else {
            format!("{host}:{}", self.server.port).parse()
        }
    }

    /// URL the browser is pointed at. Wildcard bind addresses are not
    /// reachable in a browser, so they map to localhost.
    pub fn browse_url(&self) -> String {
        let host = match self.server.host.as_str() {
            "0.0.0.0" | "::" | "[::]" => "localhost",
            other => other,
        };
        format!("http://{}:{}/", host, self.server.port)
    }

    /// Directory the files are served from.
    pub fn root_dir(&self) -> PathBuf {
        PathBuf::from(&self.content.root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_zero_config_behavior() {
        let cfg = Config::load_from("does-not-exist").expect("defaults should load");
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.server.port, 3000);
        assert!(cfg.launcher.enabled);
        assert_eq!(cfg.launcher.delay_ms, 1000);
        assert_eq!(cfg.content.root, ".");
        assert_eq!(cfg.content.index_files, vec!["index.html", "index.htm"]);
        assert!(cfg.content.directory_listing);
        assert!(cfg.logging.access_log);
        assert_eq!(cfg.logging.access_log_format, "combined");
    }

    #[test]
    fn socket_addr_parses_default_host() {
        let cfg = Config::load_from("does-not-exist").expect("defaults should load");
        let addr = cfg.socket_addr().expect("valid address");
        assert_eq!(addr.port(), 3000);
        assert!(addr.ip().is_unspecified());
    }

    #[test]
    fn env_override_reaches_nested_keys() {
        // workers is not asserted by the defaults test, so this cannot race
        // with it under the parallel test runner.
        std::env::set_var("QUICKSERVE_SERVER__WORKERS", "7");
        let cfg = Config::load_from("does-not-exist").expect("defaults should load");
        std::env::remove_var("QUICKSERVE_SERVER__WORKERS");
        assert_eq!(cfg.server.workers, Some(7));
    }

    #[test]
    fn socket_addr_brackets_bare_ipv6_host() {
        let mut cfg = Config::load_from("does-not-exist").expect("defaults should load");
        cfg.server.host = "::".to_string();
        let addr = cfg.socket_addr().expect("ipv6 bind address");
        assert!(addr.is_ipv6());
        assert!(addr.ip().is_unspecified());
        assert_eq!(addr.port(), 3000);
    }

    #[test]
    fn browse_url_substitutes_localhost_for_wildcard() {
        let mut cfg = Config::load_from("does-not-exist").expect("defaults should load");
        assert_eq!(cfg.browse_url(), "http://localhost:3000/");

        cfg.server.host = "127.0.0.1".to_string();
        cfg.server.port = 8080;
        assert_eq!(cfg.browse_url(), "http://127.0.0.1:8080/");
    }
}
