//! Template rendering module
//!
//! Pages are Tera templates under the template directory. Every page
//! template extends `base.html`, so rendering `blog.html` produces the
//! base layout with the blog blocks filled in.

mod view;

pub use view::PageView;

use std::path::PathBuf;
use tera::{Context, Tera};

use crate::error::Result;

pub struct Renderer {
    template_dir: PathBuf,
    reload: bool,
    tera: Tera,
}

impl Renderer {
    /// Parse every `*.html` template under `template_dir`
    ///
    /// With `reload` set, templates are parsed again on each render so
    /// edits show up without a restart.
    pub fn new(template_dir: PathBuf, reload: bool) -> Result<Self> {
        let tera = load_templates(&template_dir)?;
        Ok(Self {
            template_dir,
            reload,
            tera,
        })
    }

    pub fn render(&self, template: &str, view: &PageView<'_>) -> Result<String> {
        let context = Context::from_serialize(view)?;
        if self.reload {
            let tera = load_templates(&self.template_dir)?;
            return Ok(tera.render(template, &context)?);
        }
        Ok(self.tera.render(template, &context)?)
    }
}

fn load_templates(template_dir: &std::path::Path) -> Result<Tera> {
    let glob = template_dir.join("**").join("*.html");
    Ok(Tera::new(&glob.to_string_lossy())?)
}
