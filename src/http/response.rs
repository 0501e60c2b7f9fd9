//! HTTP response building module
//!
//! Builders for the responses the site sends. Builder failures are logged
//! and replaced by an empty response rather than propagated.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::http::response::Builder;
use hyper::{Response, StatusCode};

pub type HttpResponse = Response<Full<Bytes>>;

fn finish(builder: Builder, body: Bytes, what: &str) -> HttpResponse {
    builder.body(Full::new(body)).unwrap_or_else(|e| {
        crate::logger::log_error(&format!("Failed to build {what} response: {e}"));
        Response::new(Full::new(Bytes::new()))
    })
}

fn text(status: StatusCode, message: &'static str) -> HttpResponse {
    finish(
        Response::builder()
            .status(status)
            .header("Content-Type", "text/plain; charset=utf-8")
            .header("Content-Length", message.len()),
        Bytes::from_static(message.as_bytes()),
        status.as_str(),
    )
}

/// Rendered page; `HEAD` requests get the headers without the body
pub fn build_html_response(status: StatusCode, html: String, is_head: bool) -> HttpResponse {
    let len = html.len();
    let body = if is_head { Bytes::new() } else { Bytes::from(html) };
    finish(
        Response::builder()
            .status(status)
            .header("Content-Type", "text/html; charset=utf-8")
            .header("Content-Length", len)
            .header("Cache-Control", "no-cache"),
        body,
        "HTML",
    )
}

/// Static asset with validator and cache lifetime
pub fn build_asset_response(
    data: Vec<u8>,
    content_type: &str,
    etag: &str,
    is_head: bool,
) -> HttpResponse {
    let len = data.len();
    let body = if is_head { Bytes::new() } else { Bytes::from(data) };
    finish(
        Response::builder()
            .status(StatusCode::OK)
            .header("Content-Type", content_type)
            .header("Content-Length", len)
            .header("ETag", etag)
            .header("Cache-Control", "public, max-age=3600"),
        body,
        "asset",
    )
}

pub fn build_304_response(etag: &str) -> HttpResponse {
    finish(
        Response::builder()
            .status(StatusCode::NOT_MODIFIED)
            .header("ETag", etag)
            .header("Cache-Control", "public, max-age=3600"),
        Bytes::new(),
        "304",
    )
}

pub fn build_404_response() -> HttpResponse {
    text(StatusCode::NOT_FOUND, "404 Not Found")
}

pub fn build_405_response() -> HttpResponse {
    let mut resp = text(StatusCode::METHOD_NOT_ALLOWED, "405 Method Not Allowed");
    resp.headers_mut().insert(
        hyper::header::ALLOW,
        hyper::header::HeaderValue::from_static("GET, HEAD, OPTIONS"),
    );
    resp
}

pub fn build_413_response() -> HttpResponse {
    text(StatusCode::PAYLOAD_TOO_LARGE, "413 Payload Too Large")
}

pub fn build_500_response() -> HttpResponse {
    text(StatusCode::INTERNAL_SERVER_ERROR, "500 Internal Server Error")
}

/// Response to `OPTIONS`
pub fn build_options_response() -> HttpResponse {
    finish(
        Response::builder()
            .status(StatusCode::NO_CONTENT)
            .header("Allow", "GET, HEAD, OPTIONS"),
        Bytes::new(),
        "OPTIONS",
    )
}

pub fn build_health_response() -> HttpResponse {
    text(StatusCode::OK, "ok")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_head_keeps_length() {
        let resp = build_html_response(StatusCode::OK, "<p>hi</p>".to_string(), true);
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers()["Content-Length"], "9");
    }

    #[test]
    fn test_405_allow_header() {
        let resp = build_405_response();
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(resp.headers()["Allow"], "GET, HEAD, OPTIONS");
    }

    #[test]
    fn test_asset_headers() {
        let resp = build_asset_response(b"abc".to_vec(), "text/css", "\"e\"", false);
        assert_eq!(resp.headers()["ETag"], "\"e\"");
        assert_eq!(resp.headers()["Content-Type"], "text/css");
        assert_eq!(resp.headers()["Content-Length"], "3");
    }
}
