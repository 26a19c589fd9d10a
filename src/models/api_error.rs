//! Error shapes returned by the planning service and their user-facing
//! presentation (title, icon, remediation suggestions).

use ansi_term::Colour;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const NETWORK_ERROR_MESSAGE: &str = "Unable to connect to the trip planning service. \
     Please check your internet connection and try again.";

/// `error` object as sent by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorPayload {
    #[serde(rename = "type", default)]
    pub error_type: Option<String>,
    pub message: String,
    #[serde(default)]
    pub user_friendly: bool,
}

/// Envelope used by the service on failed requests: `{ "error": { ... } }`.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorEnvelope {
    pub error: ApiErrorPayload,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    DistanceLimitExceeded,
    Geocoding,
    RouteCalculation,
    Network,
    /// Any other type name sent by the service (or none at all).
    Other(Option<String>),
}

impl ErrorKind {
    pub fn from_type(t: Option<&str>) -> Self {
        match t {
            Some("DistanceLimitExceededError") => ErrorKind::DistanceLimitExceeded,
            Some("GeocodingError") => ErrorKind::Geocoding,
            Some("RouteCalculationError") => ErrorKind::RouteCalculation,
            Some("NetworkError") => ErrorKind::Network,
            other => ErrorKind::Other(other.map(str::to_string)),
        }
    }

    pub fn type_name(&self) -> &str {
        match self {
            ErrorKind::DistanceLimitExceeded => "DistanceLimitExceededError",
            ErrorKind::Geocoding => "GeocodingError",
            ErrorKind::RouteCalculation => "RouteCalculationError",
            ErrorKind::Network => "NetworkError",
            ErrorKind::Other(Some(t)) => t,
            ErrorKind::Other(None) => "Error",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ErrorKind::DistanceLimitExceeded => "Route Too Long",
            ErrorKind::Geocoding => "Location Not Found",
            ErrorKind::RouteCalculation => "Route Calculation Failed",
            ErrorKind::Network => "Connection Problem",
            ErrorKind::Other(_) => "Planning Error",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ErrorKind::DistanceLimitExceeded => "📏",
            ErrorKind::Geocoding => "📍",
            ErrorKind::RouteCalculation => "🛣️",
            ErrorKind::Network => "📡",
            ErrorKind::Other(_) => "⚠️",
        }
    }

    pub fn colour(&self) -> Colour {
        match self {
            ErrorKind::DistanceLimitExceeded => Colour::Yellow,
            ErrorKind::Geocoding => Colour::RGB(249, 115, 22), // orange
            ErrorKind::RouteCalculation | ErrorKind::Network | ErrorKind::Other(_) => Colour::Red,
        }
    }

    pub fn suggestions(&self) -> [&'static str; 3] {
        match self {
            ErrorKind::DistanceLimitExceeded => [
                "Try planning shorter routes (under 3,500 miles)",
                "Break your trip into multiple segments",
                "Consider intermediate stops to split the journey",
            ],
            ErrorKind::Geocoding => [
                "Check spelling of addresses",
                "Try using more specific addresses (include city and state)",
                "Use well-known landmarks or complete street addresses",
            ],
            ErrorKind::RouteCalculation => [
                "Verify that all locations are accessible by road",
                "Try using different nearby addresses",
                "Check if locations are in supported regions",
            ],
            ErrorKind::Network | ErrorKind::Other(_) => [
                "Please try again in a few moments",
                "Check your internet connection",
                "Contact support if the problem persists",
            ],
        }
    }

    /// One-line notice shown right after a failed submission.
    pub fn notice(&self) -> &'static str {
        match self {
            ErrorKind::DistanceLimitExceeded => "Route too long - please plan shorter segments",
            ErrorKind::Geocoding => "Unable to find one or more locations",
            ErrorKind::RouteCalculation => "Unable to calculate route",
            ErrorKind::Network => "Connection error - please try again",
            ErrorKind::Other(_) => "Error planning trip - please try again",
        }
    }
}

/// An error ready to be shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorReport {
    pub kind: ErrorKind,
    pub message: String,
    pub user_friendly: bool,
}

impl ErrorReport {
    /// Synthesized locally when the service gave no structured answer.
    pub fn network() -> Self {
        Self {
            kind: ErrorKind::Network,
            message: NETWORK_ERROR_MESSAGE.to_string(),
            user_friendly: true,
        }
    }
}

impl From<ApiErrorPayload> for ErrorReport {
    fn from(p: ApiErrorPayload) -> Self {
        Self {
            kind: ErrorKind::from_type(p.error_type.as_deref()),
            message: p.message,
            user_friendly: p.user_friendly,
        }
    }
}

impl fmt::Display for ErrorReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind.title(), self.message)
    }
}
