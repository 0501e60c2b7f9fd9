use std::sync::Arc;

mod config;
mod error;
mod handler;
mod http;
mod logger;
mod render;
mod server;
mod site;

use crate::error::{Result, SiteError};

fn main() {
    if let Err(e) = run() {
        logger::log_error(&e.to_string());
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| config::DEFAULT_CONFIG_PATH.to_string());
    let cfg = config::Config::load_from(&config_path)?;

    logger::init(&cfg).map_err(SiteError::LogInit)?;

    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();
    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
    }
    let runtime = runtime_builder.build().map_err(SiteError::Runtime)?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: config::Config) -> Result<()> {
    let addr = cfg.get_socket_addr()?;
    let state = Arc::new(config::AppState::load(&cfg)?);

    let listener =
        server::bind_listener(addr).map_err(|source| SiteError::Bind { addr, source })?;

    logger::log_server_start(&addr, &cfg);
    server::serve(listener, state, server::shutdown_signal()).await;
    Ok(())
}
