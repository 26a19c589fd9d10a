use super::RenderOptions;
use crate::models::trip::{MAX_CYCLE_HOURS, TripResult};
use crate::utils::colors;
use crate::utils::formatting::{format_days, format_distance, pad_right};

const BAR_CELLS: usize = 20;

fn cycle_bar(hours: f64, color: bool) -> String {
    let ratio = (hours / MAX_CYCLE_HOURS).clamp(0.0, 1.0);
    let filled = (ratio * BAR_CELLS as f64).round() as usize;
    format!(
        "[{}{}]",
        colors::paint(&"█".repeat(filled), ansi_term::Colour::Blue, color),
        "░".repeat(BAR_CELLS - filled)
    )
}

fn field(label: &str, value: &str) -> String {
    format!("  {} {}\n", pad_right(label, 10), value)
}

pub fn render_summary(trip: &TripResult, opts: &RenderOptions) -> String {
    let mut out = colors::bold("Trip Summary", opts.color);
    out.push('\n');

    out.push_str(&field(
        "Route",
        &format!(
            "{} → {} → {}",
            trip.current_location, trip.pickup_location, trip.dropoff_location
        ),
    ));

    let distance = match trip.distance_miles {
        Some(d) => format!("{} mi", format_distance(d)),
        None => colors::dim("--", opts.color),
    };
    out.push_str(&field("Distance", &distance));

    let days = match trip.estimated_days {
        Some(d) => format_days(d),
        None => colors::dim("--", opts.color),
    };
    out.push_str(&field("Duration", &days));

    let status = trip.status.to_string();
    out.push_str(&field(
        "Status",
        &colors::paint(&status, colors::trip_status_colour(&trip.status), opts.color),
    ));

    if trip.current_cycle_hours > 0.0 {
        out.push_str(&field(
            "Cycle",
            &format!(
                "{} / 70 hours {}",
                trip.current_cycle_hours,
                cycle_bar(trip.current_cycle_hours, opts.color)
            ),
        ));
    }

    if let Some(msg) = trip.error_message.as_deref().filter(|m| !m.is_empty()) {
        out.push_str(&field("Note", msg));
    }

    out
}
