use super::{clock_time::ClockTime, duty_status::DutyStatus};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One duty-status interval inside a daily log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DutySegment {
    pub start: ClockTime, // ⇔ log_data[].start ("H:M")
    pub end: ClockTime,   // ⇔ log_data[].end   ("H:M", "24:00" allowed)
    pub status: DutyStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl DutySegment {
    pub fn new(start: ClockTime, end: ClockTime, status: DutyStatus) -> Self {
        Self {
            start,
            end,
            status,
            note: None,
        }
    }

    /// Minutes covered by the segment; zero when it does not move forward.
    pub fn duration_minutes(&self) -> u16 {
        self.end
            .minutes_since_midnight()
            .saturating_sub(self.start.minutes_since_midnight())
    }

    /// True when `end` is before `start`, i.e. the segment runs past
    /// midnight. Zero-length segments (`end == start`) are not overnight.
    pub fn ends_before_start(&self) -> bool {
        self.end < self.start
    }
}

/// The duty segments of one calendar day of a trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyLog {
    #[serde(default)]
    pub id: u64,
    pub date: NaiveDate, // "YYYY-MM-DD"
    #[serde(rename = "log_data", default)]
    pub segments: Vec<DutySegment>,
}

impl DailyLog {
    /// Total minutes per status, in `DutyStatus::ALL` order.
    pub fn totals(&self) -> Vec<(DutyStatus, u32)> {
        DutyStatus::ALL
            .iter()
            .map(|status| {
                let total = self
                    .segments
                    .iter()
                    .filter(|s| s.status == *status)
                    .map(|s| s.duration_minutes() as u32)
                    .sum();
                (*status, total)
            })
            .collect()
    }
}
