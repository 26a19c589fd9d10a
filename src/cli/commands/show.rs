use super::watch::watch_live_marker;
use super::{planner_for, render_options};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::render::view::render_trip;
use crate::utils::date;

/// Print a stored trip.
pub async fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { id, view } = cmd {
        let planner = planner_for(cfg)?;
        let trip = planner.trip(*id).await?;

        if view.json {
            println!("{}", serde_json::to_string_pretty(&trip)?);
            return Ok(());
        }

        let opts = render_options(cfg, Some(view));
        println!("{}", render_trip(&trip, &opts, date::now_local()));

        if view.watch {
            watch_live_marker(&trip, cfg, &opts).await?;
        }
    }
    Ok(())
}
