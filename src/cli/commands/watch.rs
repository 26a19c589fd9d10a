use crate::config::Config;
use crate::core::calculator::timeline::build_timeline;
use crate::core::now_marker::{NowMarkerTask, SystemClock};
use crate::errors::AppResult;
use crate::models::duty_status::DutyStatus;
use crate::models::trip::TripResult;
use crate::ui::messages;
use crate::ui::render::RenderOptions;
use crate::ui::render::log_sheet::render_day;
use crate::utils::date;
use std::sync::Arc;

/// Redraw today's log sheet whenever the now marker moves, until Ctrl+C.
pub async fn watch_live_marker(
    trip: &TripResult,
    cfg: &Config,
    opts: &RenderOptions,
) -> AppResult<()> {
    let today = date::today();
    let Some(log) = trip.logs.iter().find(|l| l.date == today) else {
        messages::info("No log sheet for today: live marker not shown.");
        return Ok(());
    };

    let task = NowMarkerTask::spawn(log.date, Arc::new(SystemClock), cfg.now_marker_interval());
    let mut rx = task.subscribe();
    let rows = DutyStatus::timeline_rows(opts.include_rest_row);
    messages::info("Live marker on. Press Ctrl+C to stop.");

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        tokio::select! {
            _ = &mut ctrl_c => break,
            changed = rx.changed() => {
                if changed.is_err() {
                    break;
                }
                let timeline = build_timeline(log, rows, date::now_local());
                println!("{}", render_day(&timeline, &log.totals(), opts));
            }
        }
    }

    task.stop().await;
    Ok(())
}
