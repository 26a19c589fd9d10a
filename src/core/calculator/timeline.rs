use crate::errors::{AppError, AppResult};
use crate::models::clock_time::{ClockTime, MINUTES_PER_DAY};
use crate::models::duty_status::DutyStatus;
use crate::models::segment::{DailyLog, DutySegment};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};

pub const HOURS_PER_DAY: f64 = 24.0;

/// Horizontal placement of a segment on a 00:00–24:00 axis, in percent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimelinePosition {
    pub left_percent: f64,
    pub width_percent: f64,
}

impl TimelinePosition {
    pub fn right_percent(&self) -> f64 {
        self.left_percent + self.width_percent
    }
}

#[derive(Debug, Clone)]
pub struct TimelineBar<'a> {
    pub segment: &'a DutySegment,
    pub position: TimelinePosition,
}

#[derive(Debug, Clone)]
pub struct TimelineRow<'a> {
    pub status: DutyStatus,
    pub bars: Vec<TimelineBar<'a>>,
}

/// A daily log laid out for drawing: one row per displayed status.
#[derive(Debug, Clone)]
pub struct DayTimeline<'a> {
    pub date: NaiveDate,
    pub rows: Vec<TimelineRow<'a>>,
    /// Segments that could not be placed (end before start).
    pub skipped: Vec<&'a DutySegment>,
    /// Present only when the log is for the viewer's current day.
    pub now_marker: Option<f64>,
}

/// `hour + minute / 60`, in `[0, 24)` for times of day and `24` for end of day.
pub fn time_to_fraction(t: ClockTime) -> f64 {
    t.hour() as f64 + t.minute() as f64 / 60.0
}

/// Place a same-day segment on the 24h axis.
///
/// Overnight segments (`end < start`) would produce a negative width and are
/// rejected; callers must split them at midnight. A zero-length segment gets
/// a zero width and is drawn as a sliver by the renderer.
pub fn layout_segment(segment: &DutySegment) -> AppResult<TimelinePosition> {
    if segment.ends_before_start() {
        return Err(AppError::Timeline(format!(
            "{} segment {}-{} ends before it starts",
            segment.status.as_str(),
            segment.start,
            segment.end
        )));
    }

    let start = time_to_fraction(segment.start);
    let end = time_to_fraction(segment.end);

    Ok(TimelinePosition {
        left_percent: start / HOURS_PER_DAY * 100.0,
        width_percent: (end - start) / HOURS_PER_DAY * 100.0,
    })
}

/// Split `segments` into one group per status of `status_order`, keeping the
/// input order inside each group. Statuses outside `status_order` are dropped.
pub fn group_by_status<'a>(
    segments: &'a [DutySegment],
    status_order: &[DutyStatus],
) -> Vec<(DutyStatus, Vec<&'a DutySegment>)> {
    status_order
        .iter()
        .map(|status| {
            let group = segments.iter().filter(|s| s.status == *status).collect();
            (*status, group)
        })
        .collect()
}

/// Position of a wall-clock time on the 24h axis, minute resolution.
pub fn now_marker_percent(clock: NaiveTime) -> f64 {
    let minutes = clock.hour() * 60 + clock.minute();
    minutes as f64 / MINUTES_PER_DAY as f64 * 100.0
}

/// The marker is drawn only on the log of the viewer's current local day.
pub fn shows_now_marker(log_date: NaiveDate, today: NaiveDate) -> bool {
    log_date == today
}

pub fn build_timeline<'a>(
    log: &'a DailyLog,
    status_order: &[DutyStatus],
    now: NaiveDateTime,
) -> DayTimeline<'a> {
    let mut skipped = Vec::new();

    let rows = group_by_status(&log.segments, status_order)
        .into_iter()
        .map(|(status, group)| {
            let mut bars = Vec::with_capacity(group.len());
            for segment in group {
                match layout_segment(segment) {
                    Ok(position) => bars.push(TimelineBar { segment, position }),
                    Err(e) => {
                        tracing::warn!(date = %log.date, "skipping segment: {e}");
                        skipped.push(segment);
                    }
                }
            }
            TimelineRow { status, bars }
        })
        .collect();

    let now_marker =
        shows_now_marker(log.date, now.date()).then(|| now_marker_percent(now.time()));

    DayTimeline {
        date: log.date,
        rows,
        skipped,
        now_marker,
    }
}
