//! Display text for one hazard record in the results list.
//!
//! Every string here ends up in a text node, never in `inner_html`, so
//! server-supplied values are escaped by the renderer.

#[cfg(test)]
#[path = "hazard_summary_test.rs"]
mod hazard_summary_test;

use hazards::HazardRecord;

/// Pre-formatted pieces of a hazard list item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HazardSummary {
    /// Day and time badge, e.g. `Monday · 2024-03-04 09:15:30`.
    pub pill: String,
    pub location: String,
    pub hazard_type: String,
    pub accessibility: String,
    pub user_type: String,
    /// `None` when the record has no description or it is blank.
    pub description: Option<String>,
}

impl HazardSummary {
    #[must_use]
    pub fn from_record(record: &HazardRecord) -> Self {
        Self {
            pill: format!("{} \u{b7} {}", record.day, record.timestamp),
            location: record.location_name.clone(),
            hazard_type: humanize(&record.hazard_type),
            accessibility: format!("Accessibility: {}", record.accessibility),
            user_type: format!("Reported by: {}", humanize(&record.user_type)),
            description: record
                .description
                .as_deref()
                .map(str::trim)
                .filter(|d| !d.is_empty())
                .map(str::to_owned),
        }
    }

    /// Single-line text used for the item's accessible label.
    #[must_use]
    pub fn plain_text(&self) -> String {
        let mut parts = vec![
            self.pill.clone(),
            self.location.clone(),
            self.hazard_type.clone(),
            self.accessibility.clone(),
            self.user_type.clone(),
        ];
        if let Some(description) = &self.description {
            parts.push(description.clone());
        }
        parts.join(" | ")
    }
}

/// `blocked_sidewalk` -> `blocked sidewalk`.
fn humanize(value: &str) -> String {
    value.replace('_', " ")
}
