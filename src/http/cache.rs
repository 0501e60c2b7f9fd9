//! HTTP cache validation module
//!
//! Content-hash `ETag`s and `If-None-Match` handling for static assets.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Strong `ETag` for `content`, quoted: `"<len>-<hash>"`
pub fn etag_for(content: &[u8]) -> String {
    let mut hasher = DefaultHasher::new();
    content.hash(&mut hasher);
    format!("\"{:x}-{:x}\"", content.len(), hasher.finish())
}

/// Whether the client's `If-None-Match` value already covers `etag`
///
/// Handles lists (`"a", "b"`), weak validators (`W/"a"`) and `*`.
pub fn is_not_modified(if_none_match: Option<&str>, etag: &str) -> bool {
    let Some(header) = if_none_match else {
        return false;
    };
    header.split(',').map(str::trim).any(|candidate| {
        candidate == "*" || candidate.strip_prefix("W/").unwrap_or(candidate) == etag
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_etag_is_quoted_and_stable() {
        let etag = etag_for(b"body { color: red }");
        assert!(etag.starts_with('"') && etag.ends_with('"'));
        assert_eq!(etag, etag_for(b"body { color: red }"));
        assert_ne!(etag, etag_for(b"body { color: blue }"));
    }

    #[test]
    fn test_not_modified() {
        let etag = "\"13-abc\"";
        assert!(is_not_modified(Some("\"13-abc\""), etag));
        assert!(is_not_modified(Some("\"x\", \"13-abc\""), etag));
        assert!(is_not_modified(Some("W/\"13-abc\""), etag));
        assert!(is_not_modified(Some("*"), etag));
        assert!(!is_not_modified(Some("\"other\""), etag));
        assert!(!is_not_modified(None, etag));
    }
}
