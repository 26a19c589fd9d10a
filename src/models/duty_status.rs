use ansi_term::Colour;
use serde::{Deserialize, Serialize};

/// Driver duty status, as reported in the log segments of a planned trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum DutyStatus {
    OffDuty,
    SleeperBerth,
    Driving,
    OnDuty,
    RestBreak,
}

impl DutyStatus {
    /// Every status, in legend order.
    pub const ALL: [DutyStatus; 5] = [
        DutyStatus::OffDuty,
        DutyStatus::Driving,
        DutyStatus::OnDuty,
        DutyStatus::SleeperBerth,
        DutyStatus::RestBreak,
    ];

    /// Rows drawn on a log sheet grid, top to bottom.
    pub const TIMELINE_ROWS: [DutyStatus; 4] = [
        DutyStatus::OffDuty,
        DutyStatus::SleeperBerth,
        DutyStatus::Driving,
        DutyStatus::OnDuty,
    ];

    /// Same as `TIMELINE_ROWS` with a trailing rest/fuel row.
    pub const TIMELINE_ROWS_WITH_REST: [DutyStatus; 5] = [
        DutyStatus::OffDuty,
        DutyStatus::SleeperBerth,
        DutyStatus::Driving,
        DutyStatus::OnDuty,
        DutyStatus::RestBreak,
    ];

    pub fn timeline_rows(include_rest: bool) -> &'static [DutyStatus] {
        if include_rest {
            &Self::TIMELINE_ROWS_WITH_REST
        } else {
            &Self::TIMELINE_ROWS
        }
    }

    /// Wire name used by the planning service.
    pub fn as_str(&self) -> &'static str {
        match self {
            DutyStatus::OffDuty => "off_duty",
            DutyStatus::SleeperBerth => "sleeper_berth",
            DutyStatus::Driving => "driving",
            DutyStatus::OnDuty => "on_duty",
            DutyStatus::RestBreak => "rest_break",
        }
    }

    /// Lenient parse of a wire status: case and surrounding blanks are ignored.
    pub fn from_wire(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "off_duty" => Some(DutyStatus::OffDuty),
            "sleeper_berth" => Some(DutyStatus::SleeperBerth),
            "driving" => Some(DutyStatus::Driving),
            "on_duty" => Some(DutyStatus::OnDuty),
            "rest_break" => Some(DutyStatus::RestBreak),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DutyStatus::OffDuty => "Off Duty",
            DutyStatus::SleeperBerth => "Sleeper Berth",
            DutyStatus::Driving => "Driving",
            DutyStatus::OnDuty => "On Duty (Not Driving)",
            DutyStatus::RestBreak => "Rest/Fuel",
        }
    }

    pub fn colour(&self) -> Colour {
        match self {
            DutyStatus::OffDuty => Colour::Green,
            DutyStatus::SleeperBerth => Colour::Purple,
            DutyStatus::Driving => Colour::Blue,
            DutyStatus::OnDuty => Colour::Yellow,
            DutyStatus::RestBreak => Colour::RGB(236, 72, 153), // pink
        }
    }

    /// Cell glyph used when colours are disabled.
    pub fn glyph(&self) -> char {
        match self {
            DutyStatus::OffDuty => '░',
            DutyStatus::SleeperBerth => '▒',
            DutyStatus::Driving => '█',
            DutyStatus::OnDuty => '▓',
            DutyStatus::RestBreak => '▚',
        }
    }
}

impl TryFrom<String> for DutyStatus {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        DutyStatus::from_wire(&s).ok_or_else(|| format!("unknown duty status: {s}"))
    }
}
