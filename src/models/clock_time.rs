use crate::errors::{AppError, AppResult};
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::sync::LazyLock;

static CLOCK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(\d{1,2}):(\d{1,2})\s*$").expect("static regex"));

pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// Wall-clock time of day as sent by the planning service ("H:M", 24h).
///
/// Unlike `chrono::NaiveTime` this also represents `24:00`, which the service uses
/// as the end of a segment that runs until midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime {
    minutes: u16, // minutes since midnight, 0..=1440
}

impl ClockTime {
    pub const END_OF_DAY: ClockTime = ClockTime {
        minutes: MINUTES_PER_DAY,
    };

    /// Build from hour/minute. Hour 24 is accepted only as `24:00`.
    pub fn new(hour: u8, minute: u8) -> AppResult<Self> {
        if minute > 59 || hour > 24 || (hour == 24 && minute != 0) {
            return Err(AppError::InvalidTime(format!("{hour}:{minute:02}")));
        }
        Ok(Self {
            minutes: hour as u16 * 60 + minute as u16,
        })
    }

    /// Parse "H:M" / "HH:MM".
    pub fn parse(s: &str) -> AppResult<Self> {
        let caps = CLOCK_RE
            .captures(s)
            .ok_or_else(|| AppError::InvalidTime(s.to_string()))?;

        let hour: u8 = caps[1]
            .parse()
            .map_err(|_| AppError::InvalidTime(s.to_string()))?;
        let minute: u8 = caps[2]
            .parse()
            .map_err(|_| AppError::InvalidTime(s.to_string()))?;

        Self::new(hour, minute).map_err(|_| AppError::InvalidTime(s.to_string()))
    }

    pub fn hour(&self) -> u8 {
        (self.minutes / 60) as u8
    }

    pub fn minute(&self) -> u8 {
        (self.minutes % 60) as u8
    }

    pub fn minutes_since_midnight(&self) -> u16 {
        self.minutes
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl std::str::FromStr for ClockTime {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ClockTime::parse(s)
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        ClockTime::parse(&raw).map_err(serde::de::Error::custom)
    }
}
