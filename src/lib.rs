//! rTripPlanner library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod api;
pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub async fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init { .. } => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(cli, cfg),
        Commands::Plan { .. } => cli::commands::plan::handle(&cli.command, cfg).await,
        Commands::History { .. } => cli::commands::history::handle(&cli.command, cfg).await,
        Commands::Show { .. } => cli::commands::show::handle(&cli.command, cfg).await,
        Commands::Shell => cli::commands::shell::handle(cfg).await,
    }
}

/// Entry point used by main.rs
pub async fn run() -> AppResult<()> {
    let cli = Cli::parse();
    let no_color = cli.no_color || std::env::var_os("NO_COLOR").is_some();
    utils::logging::init(cli.verbose, !no_color);

    // load the configuration once, then apply command-line overrides
    let path = utils::path::config_path(cli.config_file.as_deref());
    let mut cfg = Config::load_from(&path)?;

    if let Some(url) = &cli.api_url {
        cfg.api_base_url = url.clone();
    }
    if no_color {
        cfg.color = false;
    }
    ui::messages::set_color(cfg.color);

    dispatch(&cli, &cfg).await
}
