//! Plain-text views of the planner state. Every renderer returns a `String`
//! so commands, the interactive shell and tests share them.

pub mod error_panel;
pub mod history;
pub mod log_sheet;
pub mod stops;
pub mod summary;
pub mod view;

use crate::config::Config;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub color: bool,
    /// Grid columns for the 24h axis.
    pub width: usize,
    pub include_rest_row: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            color: false,
            width: 48,
            include_rest_row: false,
        }
    }
}

impl RenderOptions {
    pub fn from_config(cfg: &Config) -> Self {
        Self {
            color: cfg.color,
            width: cfg.grid_width(),
            include_rest_row: cfg.show_rest_break_row,
        }
    }
}
