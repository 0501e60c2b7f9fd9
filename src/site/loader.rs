//! Reads `links.json` and `blog.json` from disk.
//!
//! A file that is missing or cannot be read is not fatal: it is logged and
//! the empty value is used, so a site without a blog still starts. A file
//! that is read but cannot be decoded is an error.

use serde::de::DeserializeOwned;
use std::path::Path;

use super::model::{BlogPost, NavLinks};
use super::slug::is_valid_slug;
use crate::error::{Result, SiteError};
use crate::logger;

pub const LINKS_FILE: &str = "links.json";
pub const BLOG_FILE: &str = "blog.json";

pub fn load_nav_links(path: &Path) -> Result<NavLinks> {
    load_json(path)
}

pub fn load_blog_posts(path: &Path) -> Result<Vec<BlogPost>> {
    let posts: Vec<BlogPost> = load_json(path)?;

    if let Some(post) = posts
        .iter()
        .find(|p| p.slug.as_deref().is_some_and(|s| !is_valid_slug(s)))
    {
        return Err(SiteError::InvalidSlug {
            title: post.title.clone(),
            slug: post.slug.clone().unwrap_or_default(),
        });
    }

    Ok(posts)
}

fn load_json<T: DeserializeOwned + Default>(path: &Path) -> Result<T> {
    let bytes = match std::fs::read(path) {
        Ok(b) => b,
        Err(e) => {
            logger::log_warning(&format!(
                "Cannot read data file '{}' ({e}), continuing with empty data",
                path.display()
            ));
            return Ok(T::default());
        }
    };

    serde_json::from_slice(&bytes).map_err(|source| SiteError::Json {
        path: path.to_path_buf(),
        source,
    })
}
