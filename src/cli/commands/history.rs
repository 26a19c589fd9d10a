use super::{planner_for, render_options};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages;
use crate::ui::render::history::render_history;

/// List recent trips, newest first.
pub async fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::History { limit, json } = cmd {
        let planner = planner_for(cfg)?;
        let limit = limit.unwrap_or(cfg.history_limit);

        let trips = match planner.recent_trips(limit).await {
            Ok(trips) => trips,
            Err(e) => {
                messages::error("Could not load history.");
                return Err(e);
            }
        };

        if *json {
            println!("{}", serde_json::to_string_pretty(&trips)?);
        } else {
            print!("{}", render_history(&trips, &render_options(cfg, None)));
        }
    }
    Ok(())
}
