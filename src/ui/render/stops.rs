use super::RenderOptions;
use crate::models::trip::TripResult;
use crate::utils::colors;
use crate::utils::table::Table;

/// Ordered stop list; stands in for the route map.
pub fn render_stops(trip: &TripResult, opts: &RenderOptions) -> String {
    let stops = trip.ordered_stops();
    if stops.is_empty() {
        return String::new();
    }

    let mut table = Table::new(["#", "Type", "Description", "Lat, Lng"]);
    for stop in stops {
        table.add_row(vec![
            stop.order.to_string(),
            stop.stop_type.label().to_string(),
            if stop.description.is_empty() {
                colors::dim("--", opts.color)
            } else {
                stop.description.clone()
            },
            format!("{:.4}, {:.4}", stop.lat, stop.lng),
        ]);
    }

    let mut out = colors::bold("Route", opts.color);
    out.push('\n');
    out.push_str(&table.render(opts.color));
    if let Some(points) = trip.geometry.as_ref().filter(|g| !g.is_empty()) {
        out.push_str(&colors::dim(
            &format!("Route geometry: {} points\n", points.len()),
            opts.color,
        ));
    }
    out
}
