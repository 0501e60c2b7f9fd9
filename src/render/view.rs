// Request-scoped page view
// Built fresh for every request from the shared site data

use serde::Serialize;

use crate::config::SiteConfig;
use crate::site::{BlogPost, NavLinks, SiteData};

/// Everything a template can see while rendering one page
#[derive(Debug, Serialize)]
pub struct PageView<'a> {
    pub page_title: &'a str,
    pub css_file: String,
    pub header_image: String,
    pub nav_image: String,
    pub aside_image: String,
    pub nav_links: &'a NavLinks,
    pub blog_posts: &'a [BlogPost],
    pub blog_categories: &'a [String],
    pub selected_post: Option<&'a BlogPost>,
    pub selected_category: Option<&'a str>,
    pub posts_in_category: Vec<&'a BlogPost>,
}

impl<'a> PageView<'a> {
    /// A view with no post or category selected
    pub fn new(page_title: &'a str, site: &'a SiteData, site_config: &SiteConfig) -> Self {
        Self {
            page_title,
            css_file: site_config.asset_url("css/style.css"),
            header_image: site_config.asset_url("images/graphics/header.webp"),
            nav_image: site_config.asset_url("images/graphics/nav-image.webp"),
            aside_image: site_config.asset_url("images/graphics/aside-image.webp"),
            nav_links: &site.nav_links,
            blog_posts: &site.blog_posts,
            blog_categories: &site.blog_categories,
            selected_post: None,
            selected_category: None,
            posts_in_category: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_category(mut self, category: &'a str, posts: Vec<&'a BlogPost>) -> Self {
        self.selected_category = Some(category);
        self.posts_in_category = posts;
        self
    }

    #[must_use]
    pub fn with_post(mut self, post: Option<&'a BlogPost>) -> Self {
        self.selected_post = post;
        self
    }
}
