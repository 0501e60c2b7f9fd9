//! Error types
//!
//! Startup failures (configuration, data files, templates, binding) are
//! reported through [`SiteError`] and propagate to `main`.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("invalid listen address '{addr}': {source}")]
    Addr {
        addr: String,
        source: std::net::AddrParseError,
    },

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: std::net::SocketAddr,
        source: std::io::Error,
    },

    #[error("failed to open log files: {0}")]
    LogInit(#[source] std::io::Error),

    #[error("failed to start async runtime: {0}")]
    Runtime(#[source] std::io::Error),

    #[error("malformed JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("blog post '{title}' has invalid slug '{slug}': must be lowercase kebab-case")]
    InvalidSlug { title: String, slug: String },

    #[error("template error: {0}")]
    Template(#[from] tera::Error),
}

pub type Result<T> = std::result::Result<T, SiteError>;
