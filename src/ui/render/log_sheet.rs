//! Text rendering of daily duty logs on a 24-hour grid.

use super::RenderOptions;
use crate::core::calculator::timeline::{DayTimeline, TimelinePosition, build_timeline};
use crate::models::clock_time::MINUTES_PER_DAY;
use crate::models::duty_status::DutyStatus;
use crate::models::trip::TripResult;
use crate::utils::colors::{self, NOW_MARKER};
use crate::utils::formatting::{mins2readable, pad_left};
use chrono::NaiveDateTime;

const LABEL_WIDTH: usize = 22;

/// Grid columns `[start, end)` covered by a bar. Every bar gets at least one
/// column so short segments stay visible.
pub fn column_span(pos: &TimelinePosition, width: usize) -> (usize, usize) {
    let scale = width as f64 / 100.0;
    let start = ((pos.left_percent * scale).floor() as usize).min(width.saturating_sub(1));
    let end = ((pos.right_percent() * scale).ceil() as usize).clamp(start + 1, width);
    (start, end)
}

pub fn marker_column(percent: f64, width: usize) -> usize {
    ((percent / 100.0 * width as f64).floor() as usize).min(width.saturating_sub(1))
}

fn marker_label(percent: f64) -> String {
    let minutes = (percent / 100.0 * MINUTES_PER_DAY as f64).round() as u32;
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

// first column of each 2h block
fn is_grid_column(col: usize, width: usize) -> bool {
    (col * 12) % width < 12
}

fn hour_labels(width: usize) -> String {
    let mut line = vec![' '; LABEL_WIDTH + 2 + width + 3];
    for h in (0..=24).step_by(2) {
        let at = LABEL_WIDTH + 2 + h * width / 24;
        for (i, ch) in h.to_string().chars().enumerate() {
            if let Some(slot) = line.get_mut(at + i) {
                *slot = ch;
            }
        }
    }
    line.into_iter().collect::<String>().trim_end().to_string()
}

fn cell(status: Option<DutyStatus>, col: usize, opts: &RenderOptions) -> String {
    match status {
        Some(s) if opts.color => colors::paint("█", s.colour(), true),
        Some(s) => s.glyph().to_string(),
        None if is_grid_column(col, opts.width) => colors::dim("┊", opts.color),
        None => " ".to_string(),
    }
}

/// One day: hour ruler, one row per status, optional now cursor, totals.
pub fn render_day(
    timeline: &DayTimeline,
    totals: &[(DutyStatus, u32)],
    opts: &RenderOptions,
) -> String {
    let width = opts.width;
    let mut out = String::new();

    out.push_str(&colors::bold(&format!("📅 {}", timeline.date.format("%Y-%m-%d")), opts.color));
    out.push('\n');
    out.push_str(&colors::dim(&hour_labels(width), opts.color));
    out.push('\n');

    let marker_col = timeline.now_marker.map(|p| marker_column(p, width));

    for row in &timeline.rows {
        let mut cells: Vec<Option<DutyStatus>> = vec![None; width];
        for bar in &row.bars {
            let (start, end) = column_span(&bar.position, width);
            for slot in &mut cells[start..end] {
                *slot = Some(row.status);
            }
        }

        let mut line = pad_left(row.status.label(), LABEL_WIDTH);
        line.push_str(" │");
        for (col, status) in cells.into_iter().enumerate() {
            if Some(col) == marker_col {
                line.push_str(&colors::bold_colour("│", NOW_MARKER, opts.color));
            } else {
                line.push_str(&cell(status, col, opts));
            }
        }
        line.push('│');
        out.push_str(&line);
        out.push('\n');
    }

    if let (Some(col), Some(percent)) = (marker_col, timeline.now_marker) {
        let caret = format!(
            "{}▲ now {}",
            " ".repeat(LABEL_WIDTH + 2 + col),
            marker_label(percent)
        );
        out.push_str(&colors::paint(&caret, NOW_MARKER, opts.color));
        out.push('\n');
    }

    if !timeline.skipped.is_empty() {
        out.push_str(&format!(
            "⚠️  {} segment(s) not drawn: end is before start\n",
            timeline.skipped.len()
        ));
    }

    let totals: Vec<String> = totals
        .iter()
        .filter(|(_, mins)| *mins > 0)
        .map(|(status, mins)| format!("{} {}", status.label(), mins2readable(*mins)))
        .collect();
    if !totals.is_empty() {
        out.push_str(&format!("Totals: {}\n", totals.join(" · ")));
    }

    out
}

/// Every status with its colour sample, rest/fuel included.
pub fn render_legend(color: bool) -> String {
    DutyStatus::ALL
        .iter()
        .map(|s| {
            let sample = if color {
                colors::paint("██", s.colour(), true)
            } else {
                s.glyph().to_string().repeat(2)
            };
            format!("{sample} {}", s.label())
        })
        .collect::<Vec<_>>()
        .join("   ")
}

pub fn render_log_sheets(trip: &TripResult, opts: &RenderOptions, now: NaiveDateTime) -> String {
    if trip.logs.is_empty() {
        return String::new();
    }

    let rows = DutyStatus::timeline_rows(opts.include_rest_row);
    let mut out = colors::bold("ELD Log Sheets", opts.color);
    out.push_str("\n\n");

    for log in &trip.logs {
        let timeline = build_timeline(log, rows, now);
        out.push_str(&render_day(&timeline, &log.totals(), opts));
        out.push('\n');
    }

    out.push_str(&render_legend(opts.color));
    out.push('\n');
    out
}
