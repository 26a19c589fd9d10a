use super::RenderOptions;
use crate::models::trip::TripResult;
use crate::utils::colors;
use crate::utils::formatting::{format_distance, truncate};
use crate::utils::table::Table;

/// "Recent Trips" table. The `#` column is the index used by `load`.
pub fn render_history(trips: &[TripResult], opts: &RenderOptions) -> String {
    if trips.is_empty() {
        return "No trips planned yet.\n".to_string();
    }

    let mut table = Table::new(["#", "ID", "Route", "Date", "Miles", "Status"]);
    for (i, trip) in trips.iter().enumerate() {
        let miles = trip
            .distance_miles
            .map(|d| format_distance(d.round()))
            .unwrap_or_else(|| "--".to_string());
        table.add_row(vec![
            (i + 1).to_string(),
            trip.id.to_string(),
            truncate(
                &format!("{} → {}", trip.pickup_location, trip.dropoff_location),
                48,
            ),
            trip.created_date().to_string(),
            miles,
            colors::paint(
                &trip.status.to_string(),
                colors::trip_status_colour(&trip.status),
                opts.color,
            ),
        ]);
    }

    let mut out = colors::bold("Recent Trips", opts.color);
    out.push('\n');
    out.push_str(&table.render(opts.color));
    out
}
