//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: method validation, route
//! matching, dispatching and access logging.

use hyper::body::Body as _;
use hyper::header::{HeaderMap, HeaderValue, SERVER};
use hyper::{Method, Request};
use std::borrow::Cow;
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use crate::config::AppState;
use crate::handler::{pages, static_files};
use crate::http::{self, HttpResponse};
use crate::logger::{self, AccessLogEntry};

/// Request context encapsulating information needed for request processing
pub struct RequestContext<'a> {
    pub path: &'a str,
    pub is_head: bool,
    pub if_none_match: Option<String>,
}

/// Where a request path leads
#[derive(Debug, PartialEq, Eq)]
pub enum Route<'a> {
    Page(&'static pages::Page),
    Category(Cow<'a, str>),
    Post(Cow<'a, str>),
}

impl<'a> Route<'a> {
    /// Match a request path; path parameters are percent-decoded and must be
    /// a single non-empty segment
    pub fn parse(path: &'a str) -> Option<Self> {
        if let Some(page) = pages::find_page(path) {
            return Some(Self::Page(page));
        }
        if let Some(raw) = path.strip_prefix("/blog/category/") {
            return path_param(raw).map(Self::Category);
        }
        if let Some(raw) = path.strip_prefix("/blog/post/") {
            return path_param(raw).map(Self::Post);
        }
        None
    }
}

fn path_param(raw: &str) -> Option<Cow<'_, str>> {
    if raw.is_empty() || raw.contains('/') {
        return None;
    }
    urlencoding::decode(raw).ok()
}

/// Main entry point for HTTP request handling
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    state: Arc<AppState>,
    peer_addr: SocketAddr,
) -> Result<HttpResponse, Infallible> {
    let started = Instant::now();
    // Requests carry no meaningful body; only the head is kept.
    let (parts, _body) = req.into_parts();
    let headers = &parts.headers;

    let mut response = if let Some(resp) = check_http_method(&parts.method) {
        resp
    } else if let Some(resp) = check_body_size(headers, state.config.http.max_body_size) {
        resp
    } else {
        let ctx = RequestContext {
            path: parts.uri.path(),
            is_head: parts.method == Method::HEAD,
            if_none_match: header_string(headers, "if-none-match"),
        };
        dispatch(&ctx, &state).await
    };

    if let Ok(server) = HeaderValue::from_str(&state.config.http.server_name) {
        response.headers_mut().insert(SERVER, server);
    }

    if state.config.logging.access_log {
        let mut entry = AccessLogEntry::new(
            peer_addr.ip().to_string(),
            parts.method.to_string(),
            parts.uri.path().to_string(),
        );
        entry.query = parts.uri.query().map(ToString::to_string);
        entry.http_version = format!("{:?}", parts.version)
            .trim_start_matches("HTTP/")
            .to_string();
        entry.status = response.status().as_u16();
        entry.body_bytes = response
            .body()
            .size_hint()
            .exact()
            .and_then(|n| usize::try_from(n).ok())
            .unwrap_or(0);
        entry.referer = header_string(headers, "referer");
        entry.user_agent = header_string(headers, "user-agent");
        entry.request_time_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
        logger::log_access(&entry, &state.config.logging.access_log_format);
    }

    Ok(response)
}

/// Route a validated request to the health check, static files or a page
pub async fn dispatch(ctx: &RequestContext<'_>, state: &AppState) -> HttpResponse {
    let health = &state.config.health;
    if health.enabled && ctx.path == health.path {
        return http::build_health_response();
    }

    if let Some(relative) = ctx.path.strip_prefix(state.config.site.static_prefix.as_str()) {
        return static_files::serve(ctx, &state.config.site.static_dir, relative).await;
    }

    match Route::parse(ctx.path) {
        Some(Route::Page(page)) => pages::render_page(ctx, state, page),
        Some(Route::Category(category)) => pages::render_category(ctx, state, &category),
        Some(Route::Post(id)) => pages::render_post(ctx, state, &id),
        None => http::build_404_response(),
    }
}

fn header_string(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string)
}

/// Check HTTP method and return appropriate response for non-GET/HEAD methods
fn check_http_method(method: &Method) -> Option<HttpResponse> {
    match *method {
        Method::GET | Method::HEAD => None,
        Method::OPTIONS => Some(http::build_options_response()),
        _ => {
            logger::log_warning(&format!("Method not allowed: {method}"));
            Some(http::build_405_response())
        }
    }
}

/// Validate Content-Length header and return 413 if exceeded
fn check_body_size(headers: &HeaderMap, max_body_size: u64) -> Option<HttpResponse> {
    let size_str = header_string(headers, "content-length")?;
    match size_str.parse::<u64>() {
        Ok(size) if size > max_body_size => {
            logger::log_warning(&format!(
                "Request body too large: {size} bytes (max: {max_body_size})"
            ));
            Some(http::build_413_response())
        }
        Ok(_) => None,
        Err(_) => {
            logger::log_warning(&format!(
                "Invalid Content-Length value: '{size_str}', skipping size check"
            ));
            None
        }
    }
}
