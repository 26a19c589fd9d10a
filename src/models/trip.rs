use super::api_error::ApiErrorPayload;
use super::segment::DailyLog;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum cycle hours accepted by the planner (70h / 8-day rule).
pub const MAX_CYCLE_HOURS: f64 = 70.0;

/// Trip request as entered by the user.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TripInput {
    pub current_location: String,
    pub pickup_location: String,
    pub dropoff_location: String,
    pub current_cycle_hours: f64,
}

/// Partial update of a `TripInput`; `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TripInputPatch {
    pub current_location: Option<String>,
    pub pickup_location: Option<String>,
    pub dropoff_location: Option<String>,
    pub current_cycle_hours: Option<f64>,
}

impl TripInput {
    pub fn apply(&self, patch: &TripInputPatch) -> TripInput {
        TripInput {
            current_location: patch
                .current_location
                .clone()
                .unwrap_or_else(|| self.current_location.clone()),
            pickup_location: patch
                .pickup_location
                .clone()
                .unwrap_or_else(|| self.pickup_location.clone()),
            dropoff_location: patch
                .dropoff_location
                .clone()
                .unwrap_or_else(|| self.dropoff_location.clone()),
            current_cycle_hours: patch
                .current_cycle_hours
                .unwrap_or(self.current_cycle_hours),
        }
    }
}

impl From<TripInput> for TripInputPatch {
    fn from(input: TripInput) -> Self {
        Self {
            current_location: Some(input.current_location),
            pickup_location: Some(input.pickup_location),
            dropoff_location: Some(input.dropoff_location),
            current_cycle_hours: Some(input.current_cycle_hours),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopType {
    Pickup,
    Dropoff,
    RestBreak,
    FuelStop,
    Start,
    End,
    #[serde(other)]
    Other,
}

impl StopType {
    pub fn label(&self) -> &'static str {
        match self {
            StopType::Pickup => "Pickup",
            StopType::Dropoff => "Dropoff",
            StopType::RestBreak => "Rest Break",
            StopType::FuelStop => "Fuel Stop",
            StopType::Start => "Start",
            StopType::End => "End",
            StopType::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteStop {
    #[serde(default)]
    pub id: u64,
    pub stop_type: StopType,
    pub order: u32,
    pub lat: f64,
    pub lng: f64,
    #[serde(default)]
    pub description: String,
}

/// Lifecycle status of a planned trip on the service side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TripStatus {
    Pending,
    Completed,
    Failed,
    Unknown(String),
}

impl From<String> for TripStatus {
    fn from(s: String) -> Self {
        match s.to_lowercase().as_str() {
            "pending" => TripStatus::Pending,
            "completed" => TripStatus::Completed,
            "failed" => TripStatus::Failed,
            _ => TripStatus::Unknown(s),
        }
    }
}

impl From<TripStatus> for String {
    fn from(s: TripStatus) -> Self {
        s.to_string()
    }
}

impl fmt::Display for TripStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TripStatus::Pending => write!(f, "pending"),
            TripStatus::Completed => write!(f, "completed"),
            TripStatus::Failed => write!(f, "failed"),
            TripStatus::Unknown(s) => write!(f, "{s}"),
        }
    }
}

/// A planned trip as returned by the planning service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripResult {
    pub id: u64,
    pub created_at: String,
    pub current_location: String,
    pub pickup_location: String,
    pub dropoff_location: String,
    pub current_cycle_hours: f64,
    #[serde(default)]
    pub distance_miles: Option<f64>,
    #[serde(default)]
    pub estimated_days: Option<u32>,
    pub status: TripStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    #[serde(default)]
    pub logs: Vec<DailyLog>,
    #[serde(default)]
    pub stops: Vec<RouteStop>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geometry: Option<Vec<[f64; 2]>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiErrorPayload>,
}

impl TripResult {
    /// "YYYY-MM-DD" part of `created_at`.
    pub fn created_date(&self) -> &str {
        self.created_at.get(..10).unwrap_or(&self.created_at)
    }

    /// Stops sorted by their route order.
    pub fn ordered_stops(&self) -> Vec<&RouteStop> {
        let mut stops: Vec<&RouteStop> = self.stops.iter().collect();
        stops.sort_by_key(|s| s.order);
        stops
    }

    pub fn input(&self) -> TripInput {
        TripInput {
            current_location: self.current_location.clone(),
            pickup_location: self.pickup_location.clone(),
            dropoff_location: self.dropoff_location.clone(),
            current_cycle_hours: self.current_cycle_hours,
        }
    }
}
