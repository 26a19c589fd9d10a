use crate::utils::colors;
use ansi_term::Colour;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

/// Icons
const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";
const ICON_WAIT: &str = "⏳";

static COLOR: AtomicBool = AtomicBool::new(true);

/// Turn ANSI styling of status lines on or off for the whole process.
pub fn set_color(enabled: bool) {
    COLOR.store(enabled, Ordering::Relaxed);
}

pub fn color_enabled() -> bool {
    COLOR.load(Ordering::Relaxed)
}

fn line(colour: Colour, icon: &str, msg: impl fmt::Display) -> String {
    format!("{} {}", colors::bold_colour(icon, colour, color_enabled()), msg)
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}", line(Colour::Blue, ICON_INFO, msg));
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}", line(Colour::Green, ICON_OK, msg));
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}", line(Colour::Yellow, ICON_WARN, msg));
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}", line(Colour::Red, ICON_ERR, msg));
}

/// Loading affordance shown while a request is in flight.
pub fn loading<T: fmt::Display>(msg: T) {
    println!("{}", line(Colour::Cyan, ICON_WAIT, msg));
}

/// Section header
pub fn header<T: fmt::Display>(msg: T) {
    let text = format!("====================== {msg}\n");
    println!("{}", colors::bold_colour(&text, Colour::Blue, color_enabled()));
}
