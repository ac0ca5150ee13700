//! Hazard service: report validation, recent lookup, and risk prediction.
//!
//! DESIGN
//! ======
//! Everything here is pure over `HazardRecord` slices so the same logic runs
//! against the file store, the Postgres store, and test fixtures. Routes
//! load records from a `HazardStore` and hand them to these functions.
//!
//! The risk model is a frequency table keyed by lower-cased location and
//! weekday name, rebuilt from the full record set on every prediction.

#[cfg(test)]
#[path = "hazard_test.rs"]
mod hazard_test;

use std::collections::HashMap;

use hazards::{ACCESSIBILITY_MAX, ACCESSIBILITY_MIN, Accessibility, HazardRecord, Prediction};
use serde_json::Value;
use time::OffsetDateTime;
use time::macros::format_description;

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum HazardError {
    /// Body missing a required field, or a field has the wrong type.
    #[error("Invalid data")]
    InvalidData,
    #[error("accessibility must be between 1 and 5")]
    AccessibilityOutOfRange(i64),
    #[error("timestamp formatting failed: {0}")]
    Timestamp(#[from] time::error::Format),
}

/// A validated-shape report body, before range checks and stamping.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewHazard {
    pub location_name: String,
    pub hazard_type: String,
    pub accessibility: i64,
    pub user_type: String,
    pub temporary: bool,
    pub description: String,
    pub media_url: Option<String>,
}

// =============================================================================
// INTAKE
// =============================================================================

/// Extract a [`NewHazard`] from a raw JSON request body.
///
/// `accessibility` is accepted as an integer, a whole-valued float such as
/// `4.0`, or an integer-valued string, since HTML selects submit strings. `temporary` defaults to `true` when
/// absent and otherwise follows JSON truthiness.
///
/// # Errors
///
/// Returns [`HazardError::InvalidData`] if the body is not an object, a
/// required field is missing, or a field has an unusable type.
pub fn parse_report_body(body: &Value) -> Result<NewHazard, HazardError> {
    let obj = body.as_object().ok_or(HazardError::InvalidData)?;

    let required_str = |key: &str| -> Result<String, HazardError> {
        obj.get(key)
            .and_then(Value::as_str)
            .map(str::to_owned)
            .ok_or(HazardError::InvalidData)
    };

    let accessibility = match obj.get("accessibility") {
        Some(Value::Number(n)) => integral(n).ok_or(HazardError::InvalidData)?,
        Some(Value::String(s)) => s.trim().parse::<i64>().map_err(|_| HazardError::InvalidData)?,
        _ => return Err(HazardError::InvalidData),
    };

    let description = match obj.get("description") {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(_) => return Err(HazardError::InvalidData),
    };

    let media_url = match obj.get("media_url") {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => return Err(HazardError::InvalidData),
    };

    Ok(NewHazard {
        location_name: required_str("location_name")?,
        hazard_type: required_str("hazard_type")?,
        accessibility,
        user_type: required_str("user_type")?,
        temporary: obj.get("temporary").map_or(true, truthy),
        description,
        media_url,
    })
}

#[allow(clippy::cast_possible_truncation, clippy::float_cmp)]
fn integral(n: &serde_json::Number) -> Option<i64> {
    n.as_i64().or_else(|| {
        n.as_f64()
            .filter(|f| f.fract() == 0.0 && f.abs() < 9.0e15)
            .map(|f| f as i64)
    })
}

fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// Validate a report and stamp it with the time it was received.
///
/// # Errors
///
/// Returns [`HazardError::AccessibilityOutOfRange`] if the rating falls
/// outside `1..=5`.
pub fn collect_hazard_report(new: NewHazard, now: OffsetDateTime) -> Result<HazardRecord, HazardError> {
    if !(ACCESSIBILITY_MIN..=ACCESSIBILITY_MAX).contains(&new.accessibility) {
        return Err(HazardError::AccessibilityOutOfRange(new.accessibility));
    }

    let timestamp = now.format(format_description!("[year]-[month]-[day] [hour]:[minute]:[second]"))?;

    Ok(HazardRecord {
        day: now.weekday().to_string(),
        timestamp,
        location_name: new.location_name,
        hazard_type: new.hazard_type.to_lowercase(),
        accessibility: Accessibility::Level(new.accessibility),
        user_type: new.user_type.to_lowercase(),
        temporary: Some(new.temporary),
        description: Some(new.description),
        media_url: new.media_url,
    })
}

/// Current wall-clock time in the server's local offset, falling back to UTC
/// when the offset cannot be determined (multi-threaded processes on some
/// platforms).
#[must_use]
pub fn local_now() -> OffsetDateTime {
    OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
}

// =============================================================================
// LOOKUP
// =============================================================================

/// Whether `record` matches a case-insensitive substring query.
#[must_use]
pub fn matches_location(record: &HazardRecord, query: &str) -> bool {
    record
        .location_name
        .to_lowercase()
        .contains(&query.to_lowercase())
}

/// Most recent records whose location contains `query`, newest first.
#[must_use]
pub fn recent_hazards(records: Vec<HazardRecord>, query: &str, limit: usize) -> Vec<HazardRecord> {
    let mut matches: Vec<HazardRecord> = records
        .into_iter()
        .filter(|r| matches_location(r, query))
        .collect();
    matches.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    matches.truncate(limit);
    matches
}

// =============================================================================
// RISK MODEL
// =============================================================================

/// Report counts per `(lower-cased location, weekday)`.
#[derive(Clone, Debug, Default)]
pub struct RiskModel {
    counts: HashMap<(String, String), u32>,
}

impl RiskModel {
    #[must_use]
    pub fn build(records: &[HazardRecord]) -> Self {
        let mut counts: HashMap<(String, String), u32> = HashMap::new();
        for r in records {
            *counts
                .entry((r.location_name.to_lowercase(), r.day.clone()))
                .or_default() += 1;
        }
        Self { counts }
    }

    /// Number of reports for an exact location (case-insensitive) on `day`.
    #[must_use]
    pub fn score(&self, location: &str, day: &str) -> u32 {
        self.counts
            .get(&(location.to_lowercase(), day.to_owned()))
            .copied()
            .unwrap_or(0)
    }
}

/// Predict whether `location` should be avoided on `day`.
#[must_use]
pub fn predict_should_avoid(model: &RiskModel, location: &str, day: &str, threshold: u32) -> Prediction {
    let score = model.score(location, day);
    Prediction {
        location: location.to_owned(),
        day: day.to_owned(),
        score,
        should_avoid: score >= threshold,
    }
}
