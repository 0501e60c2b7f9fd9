// Application state module
// Everything here is built once at startup and only read afterwards

use super::types::Config;
use crate::error::Result;
use crate::logger;
use crate::render::Renderer;
use crate::site::SiteData;

/// Application state shared by every connection task
pub struct AppState {
    pub config: Config,
    pub site: SiteData,
    pub renderer: Renderer,
}

impl AppState {
    /// Load site data and templates as described by `config`
    pub fn load(config: &Config) -> Result<Self> {
        let site = SiteData::load(&config.site.json_dir())?;
        logger::log_site_loaded(&site);

        let renderer = Renderer::new(config.site.template_dir(), config.site.reload_templates)?;

        Ok(Self {
            config: config.clone(),
            site,
            renderer,
        })
    }
}
