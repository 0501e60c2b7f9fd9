//! Site content module
//!
//! Navigation links and blog posts loaded from JSON at startup, plus the
//! category index derived from them. Immutable once loaded.

pub mod index;
pub mod loader;
pub mod model;
pub mod slug;

use std::path::Path;

pub use index::{derive_categories, find_post, posts_in_category};
pub use model::{BlogPost, NavLinks};

use crate::error::Result;

/// Content shared read-only by all requests
#[derive(Debug, Clone, Default)]
pub struct SiteData {
    pub nav_links: NavLinks,
    pub blog_posts: Vec<BlogPost>,
    pub blog_categories: Vec<String>,
}

impl SiteData {
    /// Load `links.json` and `blog.json` from `json_dir`
    pub fn load(json_dir: &Path) -> Result<Self> {
        let nav_links = loader::load_nav_links(&json_dir.join(loader::LINKS_FILE))?;
        let blog_posts = loader::load_blog_posts(&json_dir.join(loader::BLOG_FILE))?;
        Ok(Self::new(nav_links, blog_posts))
    }

    pub fn new(nav_links: NavLinks, blog_posts: Vec<BlogPost>) -> Self {
        let blog_categories = derive_categories(&blog_posts);
        Self {
            nav_links,
            blog_posts,
            blog_categories,
        }
    }

    pub fn has_category(&self, category: &str) -> bool {
        self.blog_categories.iter().any(|c| c == category)
    }
}
