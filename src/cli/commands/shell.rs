use super::{planner_for, render_options};
use crate::config::Config;
use crate::core::planner::{Planner, SubmitOutcome};
use crate::errors::AppResult;
use crate::models::trip::{TripInputPatch, TripResult};
use crate::ui::messages;
use crate::ui::render::RenderOptions;
use crate::ui::render::history::render_history;
use crate::ui::render::view::render_state;
use crate::utils::date;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::{Context, Editor, Helper, Highlighter, Hinter, Validator};

const COMMANDS: [&str; 11] = [
    "set", "show", "plan", "retry", "dismiss", "new", "history", "load", "help", "exit", "quit",
];

#[derive(Helper, Hinter, Highlighter, Validator)]
pub struct CompleteHelper {
    pub commands: Vec<String>,
}

impl Completer for CompleteHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        _pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let candidates = self
            .commands
            .iter()
            .filter(|cmd| cmd.starts_with(line))
            .map(|cmd| Pair {
                display: cmd.clone(),
                replacement: format!("{cmd} "),
            })
            .collect();

        Ok((0, candidates))
    }
}

fn print_help() {
    println!("\nAvailable Commands:");
    println!("  set current <text>  - Set the current location");
    println!("  set pickup <text>   - Set the pickup location");
    println!("  set dropoff <text>  - Set the dropoff location");
    println!("  set cycle <hours>   - Set hours used in the current cycle (0-70)");
    println!("  show                - Show the planning form or the planned trip");
    println!("  plan                - Send the trip to the planning service");
    println!("  retry / dismiss     - Retry or close the last planning error");
    println!("  new                 - Plan another trip (clears the form)");
    println!("  history             - List recent trips");
    println!("  load <#>            - Open a trip from the last history list");
    println!("  help / ?            - Show this help menu");
    println!("  exit / quit         - Leave the shell\n");
}

async fn show(planner: &Planner, opts: &RenderOptions) {
    let state = planner.store().read().await.state().clone();
    println!("{}", render_state(&state, opts, date::now_local()));
}

async fn report(planner: &Planner, outcome: SubmitOutcome, opts: &RenderOptions) {
    match outcome {
        SubmitOutcome::Planned(_) => messages::success("Trip planned!"),
        SubmitOutcome::Failed(report) => messages::error(report.kind.notice()),
        SubmitOutcome::Invalid(errs) => {
            messages::warning(format!("{} field(s) need attention.", errs.len()))
        }
        SubmitOutcome::AlreadyPending => messages::warning("A trip is already being planned."),
        SubmitOutcome::Superseded => return,
    }
    show(planner, opts).await;
}

fn set_field(args: &[&str]) -> Result<TripInputPatch, String> {
    let Some((field, rest)) = args.split_first() else {
        return Err("Usage: set <current|pickup|dropoff|cycle> <value>".to_string());
    };
    let value = rest.join(" ");
    let mut patch = TripInputPatch::default();

    match *field {
        "current" => patch.current_location = Some(value),
        "pickup" => patch.pickup_location = Some(value),
        "dropoff" => patch.dropoff_location = Some(value),
        "cycle" => {
            let hours = value
                .parse::<f64>()
                .map_err(|_| format!("Invalid number of hours: '{value}'"))?;
            patch.current_cycle_hours = Some(hours);
        }
        other => return Err(format!("Unknown field: {other}")),
    }
    Ok(patch)
}

/// Interactive session on one long-lived planner store.
pub async fn handle(cfg: &Config) -> AppResult<()> {
    let planner = planner_for(cfg)?;
    let opts = render_options(cfg, None);
    let mut last_history: Vec<TripResult> = Vec::new();

    let config = rustyline::Config::builder()
        .history_ignore_space(true)
        .completion_type(rustyline::CompletionType::List)
        .build();

    let mut rl = Editor::with_config(config)?;
    rl.set_helper(Some(CompleteHelper {
        commands: COMMANDS.iter().map(|c| c.to_string()).collect(),
    }));

    messages::header("rTripPlanner shell");
    print_help();

    loop {
        let readline = tokio::task::block_in_place(|| rl.readline(">> "));
        let line = match readline {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        };

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        rl.add_history_entry(trimmed)?;

        let parts: Vec<&str> = trimmed.split_whitespace().collect();
        match parts[0] {
            "set" => match set_field(&parts[1..]) {
                Ok(patch) => planner.set_input(patch).await,
                Err(msg) => messages::warning(msg),
            },
            "show" => show(&planner, &opts).await,
            "plan" => {
                messages::loading("Planning your route...");
                let outcome = planner.submit().await;
                report(&planner, outcome, &opts).await;
            }
            "retry" => {
                messages::loading("Planning your route...");
                let outcome = planner.retry().await;
                report(&planner, outcome, &opts).await;
            }
            "dismiss" => {
                planner.dismiss_error().await;
                show(&planner, &opts).await;
            }
            "new" => {
                planner.plan_another().await;
                show(&planner, &opts).await;
            }
            "history" => match planner.recent_trips(cfg.history_limit).await {
                Ok(trips) => {
                    print!("{}", render_history(&trips, &opts));
                    last_history = trips;
                }
                Err(e) => {
                    tracing::debug!("history failed: {e}");
                    messages::error("Could not load history.");
                }
            },
            "load" => {
                let picked = parts
                    .get(1)
                    .and_then(|n| n.parse::<usize>().ok())
                    .and_then(|n| n.checked_sub(1))
                    .and_then(|i| last_history.get(i));
                match picked {
                    Some(trip) => {
                        planner.load_from_history(trip.clone()).await;
                        show(&planner, &opts).await;
                    }
                    None => messages::warning("Usage: load <#> (run `history` first)"),
                }
            }
            "help" | "?" => print_help(),
            "exit" | "quit" => break,
            other => messages::warning(format!("Unknown command: {other}")),
        }
    }

    Ok(())
}
