//! MIME type detection module
//!
//! Maps the extension of a static asset to its Content-Type.

use std::path::Path;

/// Content-Type for a file under the static directory
pub fn content_type_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    match ext.as_deref() {
        Some("html" | "htm") => "text/html; charset=utf-8",
        Some("css") => "text/css; charset=utf-8",
        Some("txt" | "md") => "text/plain; charset=utf-8",
        Some("xml") => "application/xml",
        Some("js" | "mjs") => "text/javascript; charset=utf-8",
        Some("json") => "application/json",
        Some("webmanifest") => "application/manifest+json",

        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        Some("webp") => "image/webp",
        Some("avif") => "image/avif",

        Some("mp4") => "video/mp4",
        Some("webm") => "video/webm",
        Some("mp3") => "audio/mpeg",

        Some("woff") => "font/woff",
        Some("woff2") => "font/woff2",
        Some("ttf") => "font/ttf",
        Some("otf") => "font/otf",

        Some("pdf") => "application/pdf",

        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_site_assets() {
        assert_eq!(
            content_type_for(Path::new("css/style.css")),
            "text/css; charset=utf-8"
        );
        assert_eq!(
            content_type_for(Path::new("images/graphics/header.webp")),
            "image/webp"
        );
        assert_eq!(content_type_for(Path::new("json/blog.json")), "application/json");
    }

    #[test]
    fn test_extension_case_insensitive() {
        assert_eq!(content_type_for(Path::new("photo.JPG")), "image/jpeg");
    }

    #[test]
    fn test_unknown_extension() {
        assert_eq!(
            content_type_for(Path::new("archive.xyz")),
            "application/octet-stream"
        );
        assert_eq!(
            content_type_for(Path::new("README")),
            "application/octet-stream"
        );
    }
}
