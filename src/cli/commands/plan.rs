use super::{http_api, render_options};
use super::watch::watch_live_marker;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::planner::{Planner, SubmitOutcome};
use crate::core::store::PlannerStore;
use crate::errors::{AppError, AppResult};
use crate::models::trip::TripInput;
use crate::ui::messages;
use crate::ui::render::error_panel::render_error;
use crate::ui::render::view::render_trip;
use crate::utils::date;
use std::sync::Arc;

/// Plan a trip in one shot.
pub async fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Plan {
        current,
        pickup,
        dropoff,
        cycle_hours,
        view,
    } = cmd
    {
        let input = TripInput {
            current_location: current.clone(),
            pickup_location: pickup.clone(),
            dropoff_location: dropoff.clone(),
            current_cycle_hours: *cycle_hours,
        };
        let opts = render_options(cfg, Some(view));

        let api = http_api(cfg)?;
        let planner = Planner::new(Arc::new(api), PlannerStore::with_input(input).shared());

        if !view.json {
            messages::loading("Planning your route...");
        }

        match planner.submit().await {
            SubmitOutcome::Planned(trip) => {
                if view.json {
                    println!("{}", serde_json::to_string_pretty(&*trip)?);
                    return Ok(());
                }
                messages::success("Trip planned!");
                println!();
                println!("{}", render_trip(&trip, &opts, date::now_local()));

                if view.watch {
                    watch_live_marker(&trip, cfg, &opts).await?;
                }
            }
            SubmitOutcome::Failed(report) => {
                messages::error(report.kind.notice());
                eprintln!("{}", render_error(&report, &opts, false));
                return Err(AppError::Api(report));
            }
            SubmitOutcome::Invalid(errs) => {
                for (_, msg) in errs.iter() {
                    messages::error(msg);
                }
                return Err(AppError::InvalidInput(errs.to_string()));
            }
            SubmitOutcome::AlreadyPending | SubmitOutcome::Superseded => {
                return Err(AppError::Other(
                    "planning request was superseded".to_string(),
                ));
            }
        }
    }

    Ok(())
}
