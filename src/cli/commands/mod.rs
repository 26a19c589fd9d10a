pub mod config;
pub mod history;
pub mod init;
pub mod plan;
pub mod shell;
pub mod show;
pub mod watch;

use crate::api::HttpTripApi;
use crate::cli::parser::ViewArgs;
use crate::config::Config;
use crate::core::planner::Planner;
use crate::errors::AppResult;
use crate::ui::render::RenderOptions;
use std::sync::Arc;

/// HTTP client for the configured planning service.
pub fn http_api(cfg: &Config) -> AppResult<HttpTripApi> {
    let api = HttpTripApi::new(&cfg.api_base_url, cfg.timeout())?;
    tracing::debug!(base_url = %api.base_url(), "using planning service");
    Ok(api)
}

/// Planner talking to the configured service, with a fresh store.
pub fn planner_for(cfg: &Config) -> AppResult<Planner> {
    Ok(Planner::with_new_store(Arc::new(http_api(cfg)?)))
}

pub fn render_options(cfg: &Config, view: Option<&ViewArgs>) -> RenderOptions {
    let mut opts = RenderOptions::from_config(cfg);
    if view.is_some_and(|v| v.rest_row) {
        opts.include_rest_row = true;
    }
    opts
}
