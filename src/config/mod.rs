// Configuration module entry point
// Loads layered configuration and holds the shared application state

mod state;
mod types;

use std::net::SocketAddr;

use crate::error::{Result, SiteError};

pub use state::AppState;
pub use types::{Config, SiteConfig};

/// Default config file name (without extension)
pub const DEFAULT_CONFIG_PATH: &str = "config";

impl Config {
    /// Load configuration from specified file path (without extension)
    ///
    /// The file is optional; `SITE_*` environment variables override it,
    /// e.g. `SITE_SERVER__PORT=9000`.
    pub fn load_from(config_path: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(
                config::Environment::with_prefix("SITE")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080)?
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", true)?
            .set_default("performance.keep_alive_timeout", 75)?
            .set_default("performance.read_timeout", 30)?
            .set_default("performance.write_timeout", 30)?
            .set_default("http.server_name", "homepage")?
            .set_default("http.max_body_size", 1_048_576)?
            .set_default("site.static_dir", "static")?
            .set_default("site.static_prefix", "/static/")?
            .set_default("site.reload_templates", false)?
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr> {
        let addr = format!("{}:{}", self.server.host, self.server.port);
        addr.parse()
            .map_err(|source| SiteError::Addr { addr, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_file() {
        let cfg = Config::load_from("does-not-exist-config").unwrap();
        assert_eq!(cfg.server.port, 8080);
        assert_eq!(cfg.logging.access_log_format, "combined");
        assert!(cfg.health.enabled);
        assert_eq!(cfg.health.path, "/healthz");
        assert_eq!(cfg.site.static_prefix, "/static/");
        assert!(!cfg.site.reload_templates);
    }

    #[test]
    fn test_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site.toml");
        std::fs::write(
            &path,
            "[server]\nport = 9090\n\n[site]\nstatic_dir = \"public\"\n",
        )
        .unwrap();

        let cfg = Config::load_from(path.to_str().unwrap()).unwrap();
        assert_eq!(cfg.server.port, 9090);
        assert_eq!(cfg.site.json_dir(), std::path::Path::new("public/json"));
        assert_eq!(
            cfg.site.template_dir(),
            std::path::Path::new("public/templates")
        );
    }

    #[test]
    fn test_socket_addr() {
        let mut cfg = Config::load_from("does-not-exist-config").unwrap();
        assert_eq!(cfg.get_socket_addr().unwrap().port(), 8080);

        cfg.server.host = "not an address".to_string();
        assert!(matches!(
            cfg.get_socket_addr(),
            Err(SiteError::Addr { .. })
        ));
    }

    #[test]
    fn test_asset_url() {
        let cfg = Config::load_from("does-not-exist-config").unwrap();
        assert_eq!(cfg.site.asset_url("css/style.css"), "/static/css/style.css");
    }
}
