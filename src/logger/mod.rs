//! Logger module
//!
//! Provides logging utilities for the site server:
//! - Server lifecycle logging
//! - Access logging with multiple formats
//! - Leveled error/warning/info/debug logging
//! - File-based logging support

mod format;
pub mod writer;

pub use format::AccessLogEntry;

use std::net::SocketAddr;
use std::sync::atomic::{AtomicU8, Ordering};

use crate::config::Config;
use crate::site::SiteData;

/// Severity threshold for server log lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum Level {
    Error = 0,
    Warn = 1,
    Info = 2,
    Debug = 3,
}

impl Level {
    /// Parse a level name; unknown names fall back to `Info`
    pub fn parse(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "error" => Self::Error,
            "warn" | "warning" => Self::Warn,
            "debug" | "trace" => Self::Debug,
            _ => Self::Info,
        }
    }

    const fn from_u8(v: u8) -> Self {
        match v {
            0 => Self::Error,
            1 => Self::Warn,
            3 => Self::Debug,
            _ => Self::Info,
        }
    }
}

static LEVEL: AtomicU8 = AtomicU8::new(Level::Info as u8);

fn enabled(level: Level) -> bool {
    level <= Level::from_u8(LEVEL.load(Ordering::Relaxed))
}

/// Initialize the logger with configuration
///
/// Should be called once at application startup.
pub fn init(config: &Config) -> std::io::Result<()> {
    LEVEL.store(Level::parse(&config.logging.level) as u8, Ordering::Relaxed);
    writer::init(
        config.logging.access_log_file.as_deref(),
        config.logging.error_log_file.as_deref(),
    )
}

fn write_info(message: &str) {
    match writer::get() {
        Some(w) => w.write_access(message),
        None => println!("{message}"),
    }
}

fn write_error(message: &str) {
    match writer::get() {
        Some(w) => w.write_error(message),
        None => eprintln!("{message}"),
    }
}

pub fn log_server_start(addr: &SocketAddr, config: &Config) {
    if !enabled(Level::Info) {
        return;
    }
    let workers = config
        .server
        .workers
        .map_or_else(|| "auto".to_string(), |n| n.to_string());
    let access = config.logging.access_log_file.as_deref().unwrap_or("stdout");
    let errors = config.logging.error_log_file.as_deref().unwrap_or("stderr");

    write_info(&format!("[Server] Serving site on http://{addr}"));
    write_info(&format!(
        "[Server] static_dir={} prefix={} level={} workers={workers}",
        config.site.static_dir.display(),
        config.site.static_prefix,
        config.logging.level,
    ));
    write_info(&format!("[Server] access_log={access} error_log={errors}"));
    if config.site.reload_templates {
        write_info("[Server] Template reload enabled, templates are parsed per render");
    }
}

pub fn log_site_loaded(site: &SiteData) {
    log_info(&format!(
        "[Site] Loaded {} nav links, {} social links, {} posts in {} categories",
        site.nav_links.nav.len(),
        site.nav_links.socials.len(),
        site.blog_posts.len(),
        site.blog_categories.len()
    ));
}

pub fn log_shutdown(reason: &str) {
    log_info(&format!("[Shutdown] {reason}, no longer accepting connections"));
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    log_debug(&format!("[Connection] Accepted from: {peer_addr}"));
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    log_error(&format!("Failed to serve connection: {err:?}"));
}

pub fn log_error(message: &str) {
    if enabled(Level::Error) {
        write_error(&format!("[ERROR] {message}"));
    }
}

pub fn log_warning(message: &str) {
    if enabled(Level::Warn) {
        write_error(&format!("[WARN] {message}"));
    }
}

pub fn log_info(message: &str) {
    if enabled(Level::Info) {
        write_info(&format!("[INFO] {message}"));
    }
}

pub fn log_debug(message: &str) {
    if enabled(Level::Debug) {
        write_info(&format!("[DEBUG] {message}"));
    }
}

/// Log formatted access log entry
pub fn log_access(entry: &AccessLogEntry, format: &str) {
    match writer::get() {
        Some(w) => w.write_access(&entry.format(format)),
        None => println!("{}", entry.format(format)),
    }
}
