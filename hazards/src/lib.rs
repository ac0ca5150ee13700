//! Shared hazard DTOs for the client/server boundary.
//!
//! This crate owns the JSON shapes exchanged over `/api/report`,
//! `/api/hazards` and `/api/predict`. Both `server` and `client` depend on it
//! so a field rename breaks the build on both sides at once.

#[cfg(test)]
#[path = "lib_test.rs"]
mod lib_test;

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Report intake endpoint.
pub const REPORT_PATH: &str = "/api/report";
/// Recent-hazards lookup endpoint. Takes a `location` query parameter.
pub const HAZARDS_PATH: &str = "/api/hazards";
/// Avoidance prediction endpoint. Takes a `location` query parameter.
pub const PREDICT_PATH: &str = "/api/predict";
/// Name of the query parameter carrying the searched location.
pub const LOCATION_PARAM: &str = "location";

/// Inclusive range of valid accessibility ratings.
pub const ACCESSIBILITY_MIN: i64 = 1;
pub const ACCESSIBILITY_MAX: i64 = 5;

/// Outbound report built from the report form.
///
/// `accessibility` stays a string here because it comes straight from a
/// `<select>`; the server parses it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HazardReport {
    pub location_name: String,
    pub hazard_type: String,
    pub accessibility: String,
    pub user_type: String,
    pub temporary: bool,
    pub description: String,
}

/// Accessibility rating as it appears on a stored record.
///
/// Records written by the server always carry a number, but the field is
/// accepted as free text too so older or hand-edited data still renders.
/// A missing value reads as an empty label.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Accessibility {
    Level(i64),
    Label(String),
}

impl Default for Accessibility {
    fn default() -> Self {
        Self::Label(String::new())
    }
}

impl fmt::Display for Accessibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Level(level) => write!(f, "{level}"),
            Self::Label(label) => f.write_str(label),
        }
    }
}

/// A stored hazard as returned by the server.
///
/// Display fields default to empty so a record missing one of them still
/// decodes alongside its neighbours.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HazardRecord {
    /// Full weekday name at the time of the report (`"Monday"`).
    #[serde(default)]
    pub day: String,
    /// Local time, `YYYY-MM-DD HH:MM:SS`. Sorts lexically.
    #[serde(default)]
    pub timestamp: String,
    #[serde(default)]
    pub location_name: String,
    #[serde(default)]
    pub hazard_type: String,
    #[serde(default)]
    pub accessibility: Accessibility,
    #[serde(default)]
    pub user_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temporary: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub media_url: Option<String>,
}

/// Body of `GET /api/hazards`. A missing or `null` array reads as empty.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HazardsResponse {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub hazards: Vec<HazardRecord>,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Error payload returned with any non-2xx status.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ErrorBody {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self { error: Some(message.into()) }
    }
}

/// Body of a successful `POST /api/report`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportAccepted {
    pub status: String,
    pub report: HazardRecord,
}

/// Body of `GET /api/predict`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prediction {
    pub location: String,
    pub day: String,
    pub score: u32,
    pub should_avoid: bool,
}
