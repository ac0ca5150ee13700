#[cfg(test)]
#[path = "recent_test.rs"]
mod recent_test;

use hazards::{HazardRecord, HazardsResponse};

use crate::net::api::ApiError;
use crate::util::hazard_summary::HazardSummary;

const PROMPT_MESSAGE: &str = "Please enter a location.";
const PENDING_MESSAGE: &str = "Loading...";
const EMPTY_MESSAGE: &str = "No recent hazards reported for this location.";
const FAILED_MESSAGE: &str = "Error fetching hazards. Please try again.";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LookupStatus {
    #[default]
    Idle,
    /// Submitted with a blank location; no request was sent.
    MissingLocation,
    Pending,
    Loaded(Vec<HazardRecord>),
    Empty,
    Failed,
}

/// Recent-hazards panel state.
#[derive(Clone, Debug, Default)]
pub struct RecentState {
    /// Raw value of the `check-location` input.
    pub location: String,
    pub status: LookupStatus,
}

impl RecentState {
    /// Validate the location and enter `pending`.
    ///
    /// Returns the trimmed query to send, or `None` when the location is
    /// blank, in which case no request must be made.
    pub fn begin_lookup(&mut self) -> Option<String> {
        let query = self.location.trim();
        if query.is_empty() {
            self.status = LookupStatus::MissingLocation;
            return None;
        }
        let query = query.to_owned();
        self.status = LookupStatus::Pending;
        Some(query)
    }

    /// Apply the outcome of a lookup.
    pub fn finish_lookup(&mut self, outcome: Result<HazardsResponse, ApiError>) {
        self.status = match outcome {
            Ok(resp) if resp.hazards.is_empty() => LookupStatus::Empty,
            Ok(resp) => LookupStatus::Loaded(resp.hazards),
            Err(_) => LookupStatus::Failed,
        };
    }

    /// Fallback text shown instead of the list, if any.
    #[must_use]
    pub fn message(&self) -> Option<&'static str> {
        match self.status {
            LookupStatus::Idle | LookupStatus::Loaded(_) => None,
            LookupStatus::MissingLocation => Some(PROMPT_MESSAGE),
            LookupStatus::Pending => Some(PENDING_MESSAGE),
            LookupStatus::Empty => Some(EMPTY_MESSAGE),
            LookupStatus::Failed => Some(FAILED_MESSAGE),
        }
    }

    /// One summary per list item, in server order.
    #[must_use]
    pub fn items(&self) -> Vec<HazardSummary> {
        match &self.status {
            LookupStatus::Loaded(records) => records.iter().map(HazardSummary::from_record).collect(),
            _ => Vec::new(),
        }
    }
}
