//! Request handler module
//!
//! Routes requests to the site's pages, the static asset tree and the
//! health check.

pub mod pages;
pub mod router;
pub mod static_files;

// Re-export main entry point
pub use router::handle_request;
