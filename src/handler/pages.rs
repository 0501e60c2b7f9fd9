//! Page handlers
//!
//! Each handler builds a fresh [`PageView`] over the shared site data, adds
//! the selection for this request (if any) and renders it.

use hyper::StatusCode;

use crate::config::AppState;
use crate::handler::router::RequestContext;
use crate::http::{self, HttpResponse};
use crate::logger;
use crate::render::PageView;
use crate::site::{find_post, posts_in_category};

/// A page with a fixed path, title and template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub path: &'static str,
    pub title: &'static str,
    pub template: &'static str,
}

#[rustfmt::skip]
pub const PAGES: &[Page] = &[
    Page { path: "/", title: "Welcome...", template: "home.html" },
    Page { path: "/about", title: "About Me...", template: "about.html" },
    Page { path: "/bookmarks", title: "Bookmarks...", template: "bookmarks.html" },
    Page { path: "/technology", title: "Technology...", template: "technology.html" },
    Page { path: "/services", title: "Services...", template: "services.html" },
    Page { path: "/blog", title: "Blog...", template: "blog.html" },
    Page { path: "/gallery", title: "Art Gallery...", template: "gallery.html" },
];

const BLOG_TITLE: &str = "Blog...";
const BLOG_TEMPLATE: &str = "blog.html";
const POST_TEMPLATE: &str = "blog-post.html";

pub fn find_page(path: &str) -> Option<&'static Page> {
    PAGES.iter().find(|p| p.path == path)
}

pub fn render_page(ctx: &RequestContext<'_>, state: &AppState, page: &Page) -> HttpResponse {
    let view = PageView::new(page.title, &state.site, &state.config.site);
    respond(ctx, state, StatusCode::OK, page.template, &view)
}

/// Blog listing filtered to `category`
///
/// An unknown category renders the unfiltered listing with status 404.
pub fn render_category(ctx: &RequestContext<'_>, state: &AppState, category: &str) -> HttpResponse {
    let site = &state.site;
    let view = PageView::new(BLOG_TITLE, site, &state.config.site);

    if !site.has_category(category) {
        logger::log_debug(&format!("Unknown blog category: {category}"));
        return respond(ctx, state, StatusCode::NOT_FOUND, BLOG_TEMPLATE, &view);
    }

    let view = view.with_category(category, posts_in_category(&site.blog_posts, category));
    respond(ctx, state, StatusCode::OK, BLOG_TEMPLATE, &view)
}

/// Single post page
///
/// When no post matches, the template is rendered with no selected post
/// and status 404.
pub fn render_post(ctx: &RequestContext<'_>, state: &AppState, id: &str) -> HttpResponse {
    let post = find_post(&state.site.blog_posts, id);
    let status = if post.is_some() {
        StatusCode::OK
    } else {
        logger::log_debug(&format!("No blog post matches: {id}"));
        StatusCode::NOT_FOUND
    };

    let view = PageView::new("", &state.site, &state.config.site).with_post(post);
    respond(ctx, state, status, POST_TEMPLATE, &view)
}

fn respond(
    ctx: &RequestContext<'_>,
    state: &AppState,
    status: StatusCode,
    template: &str,
    view: &PageView<'_>,
) -> HttpResponse {
    match state.renderer.render(template, view) {
        Ok(html) => http::build_html_response(status, html, ctx.is_head),
        Err(e) => {
            logger::log_error(&format!("Failed to render {template} for {}: {e}", ctx.path));
            http::build_500_response()
        }
    }
}
