//! Colour helpers for terminal output. Every helper is a no-op when colours
//! are disabled so the same renderers serve plain and styled output.

use crate::models::trip::TripStatus;
use ansi_term::{Colour, Style};

/// Colour of the live "now" cursor on log sheets.
pub const NOW_MARKER: Colour = Colour::Cyan;

pub fn paint(text: &str, colour: Colour, enabled: bool) -> String {
    if enabled {
        colour.paint(text).to_string()
    } else {
        text.to_string()
    }
}

pub fn bold(text: &str, enabled: bool) -> String {
    if enabled {
        Style::new().bold().paint(text).to_string()
    } else {
        text.to_string()
    }
}

pub fn bold_colour(text: &str, colour: Colour, enabled: bool) -> String {
    if enabled {
        colour.bold().paint(text).to_string()
    } else {
        text.to_string()
    }
}

/// Grey for placeholders such as "--".
pub fn dim(text: &str, enabled: bool) -> String {
    paint(text, Colour::Fixed(244), enabled)
}

/// completed → green, pending → yellow, failed → red, anything else → grey.
pub fn trip_status_colour(status: &TripStatus) -> Colour {
    match status {
        TripStatus::Completed => Colour::Green,
        TripStatus::Pending => Colour::Yellow,
        TripStatus::Failed => Colour::Red,
        TripStatus::Unknown(_) => Colour::Fixed(244),
    }
}
