//! Static file serving module
//!
//! Maps `<static_prefix><path>` to `<static_dir>/<path>` and serves it with
//! MIME type and `ETag`.

use std::path::{Path, PathBuf};
use tokio::fs;

use crate::handler::router::RequestContext;
use crate::http::{self, cache, mime, HttpResponse};
use crate::logger;

/// Serve `relative` (the request path with the static prefix removed)
pub async fn serve(ctx: &RequestContext<'_>, static_dir: &Path, relative: &str) -> HttpResponse {
    let Some(file_path) = resolve(static_dir, relative) else {
        return http::build_404_response();
    };

    let content = match fs::read(&file_path).await {
        Ok(c) => c,
        Err(e) => {
            logger::log_error(&format!(
                "Failed to read file '{}': {e}",
                file_path.display()
            ));
            return http::build_404_response();
        }
    };

    let etag = cache::etag_for(&content);
    if cache::is_not_modified(ctx.if_none_match.as_deref(), &etag) {
        return http::build_304_response(&etag);
    }

    http::build_asset_response(
        content,
        mime::content_type_for(&file_path),
        &etag,
        ctx.is_head,
    )
}

/// Locate the file for a percent-encoded relative path, refusing anything
/// that resolves outside `static_dir` and anything that is not a file
pub fn resolve(static_dir: &Path, relative: &str) -> Option<PathBuf> {
    let decoded = urlencoding::decode(relative).ok()?;
    if decoded.is_empty() {
        return None;
    }

    let root = match static_dir.canonicalize() {
        Ok(p) => p,
        Err(e) => {
            logger::log_warning(&format!(
                "Static directory not found or inaccessible '{}': {e}",
                static_dir.display()
            ));
            return None;
        }
    };

    // Not found is the common case and not worth a log line.
    let candidate = root.join(decoded.trim_start_matches('/')).canonicalize().ok()?;
    if !candidate.starts_with(&root) {
        logger::log_warning(&format!(
            "Path traversal attempt blocked: {relative} -> {}",
            candidate.display()
        ));
        return None;
    }

    candidate.is_file().then_some(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs as stdfs;

    fn static_tree() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        stdfs::create_dir_all(dir.path().join("css")).unwrap();
        stdfs::write(dir.path().join("css/style.css"), "body {}").unwrap();
        stdfs::create_dir_all(dir.path().join("images")).unwrap();
        stdfs::write(dir.path().join("images/my photo.webp"), [0u8, 1, 2]).unwrap();
        dir
    }

    #[test]
    fn test_resolve_existing_file() {
        let dir = static_tree();
        let path = resolve(dir.path(), "css/style.css").unwrap();
        assert!(path.ends_with("css/style.css"));
    }

    #[test]
    fn test_resolve_percent_encoded() {
        let dir = static_tree();
        assert!(resolve(dir.path(), "images/my%20photo.webp").is_some());
    }

    #[test]
    fn test_resolve_rejects_directories_and_missing() {
        let dir = static_tree();
        assert!(resolve(dir.path(), "css").is_none());
        assert!(resolve(dir.path(), "").is_none());
        assert!(resolve(dir.path(), "css/missing.css").is_none());
    }

    #[test]
    fn test_resolve_blocks_traversal() {
        let outer = tempfile::tempdir().unwrap();
        let root = outer.path().join("static");
        stdfs::create_dir_all(&root).unwrap();
        stdfs::write(outer.path().join("secret.txt"), "nope").unwrap();

        assert!(resolve(&root, "../secret.txt").is_none());
        assert!(resolve(&root, "%2e%2e/secret.txt").is_none());
    }

    #[test]
    fn test_bundled_site_assets_exist() {
        let mut config = crate::config::Config::load_from("does-not-exist-config").unwrap();
        config.site.static_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("static");
        let site = crate::site::SiteData::default();
        let view = crate::render::PageView::new("Home", &site, &config.site);

        for url in [
            &view.css_file,
            &view.header_image,
            &view.nav_image,
            &view.aside_image,
        ] {
            let relative = url.strip_prefix(&config.site.static_prefix).unwrap();
            assert!(
                resolve(&config.site.static_dir, relative).is_some(),
                "{url} is not served"
            );
        }
    }
}
