//! HTTP protocol layer module
//!
//! Response builders, MIME detection and cache validation, kept apart from
//! the page handlers.

pub mod cache;
pub mod mime;
pub mod response;

pub use response::{
    build_304_response, build_404_response, build_405_response, build_413_response,
    build_500_response, build_asset_response, build_health_response, build_html_response,
    build_options_response, HttpResponse,
};
