use super::error_panel::render_error;
use super::log_sheet::render_log_sheets;
use super::stops::render_stops;
use super::summary::render_summary;
use super::RenderOptions;
use crate::core::store::{LayoutMode, PlannerState};
use crate::models::trip::TripResult;
use crate::utils::colors;
use crate::utils::formatting::pad_right;
use chrono::NaiveDateTime;

fn form_line(label: &str, value: &str, error: Option<&str>, color: bool) -> String {
    let shown = if value.is_empty() {
        colors::dim("(empty)", color)
    } else {
        value.to_string()
    };
    let mut line = format!("  {} {}\n", pad_right(label, 20), shown);
    if let Some(msg) = error {
        line.push_str(&format!(
            "  {} {}\n",
            " ".repeat(20),
            colors::paint(&format!("✗ {msg}"), ansi_term::Colour::Red, color)
        ));
    }
    line
}

/// Summary, stops and log sheets of one trip.
pub fn render_trip(trip: &TripResult, opts: &RenderOptions, now: NaiveDateTime) -> String {
    let mut out = render_summary(trip, opts);
    let stops = render_stops(trip, opts);
    if !stops.is_empty() {
        out.push('\n');
        out.push_str(&stops);
    }
    let sheets = render_log_sheets(trip, opts, now);
    if !sheets.is_empty() {
        out.push('\n');
        out.push_str(&sheets);
    }
    out
}

/// Whole screen for the current layout mode.
pub fn render_state(state: &PlannerState, opts: &RenderOptions, now: NaiveDateTime) -> String {
    let mut out = String::new();

    if let Some(report) = &state.api_error {
        out.push_str(&render_error(report, opts, true));
        out.push('\n');
    }

    if state.layout_mode == LayoutMode::Result
        && let Some(trip) = &state.trip_result
    {
        out.push_str(&colors::bold_colour(
            "✓ Trip Planned Successfully!",
            ansi_term::Colour::Green,
            opts.color,
        ));
        out.push_str("  Ready to plan another trip? Type `new`.\n\n");
        out.push_str(&render_trip(trip, opts, now));
        return out;
    }

    let input = &state.trip_input;
    let errors = &state.field_errors;
    out.push_str(&colors::bold("Plan Your Trip", opts.color));
    out.push('\n');
    out.push_str(&form_line(
        "Current Location",
        &input.current_location,
        errors.get("current_location"),
        opts.color,
    ));
    out.push_str(&form_line(
        "Pickup Location",
        &input.pickup_location,
        errors.get("pickup_location"),
        opts.color,
    ));
    out.push_str(&form_line(
        "Dropoff Location",
        &input.dropoff_location,
        errors.get("dropoff_location"),
        opts.color,
    ));
    out.push_str(&form_line(
        "Cycle Used (hours)",
        &input.current_cycle_hours.to_string(),
        errors.get("current_cycle_hours"),
        opts.color,
    ));

    if state.loading {
        out.push_str("\n⏳ Planning your route...\n");
    }
    out
}
