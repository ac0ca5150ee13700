//! Report form state and its submit state machine.
//!
//! `idle -> pending -> (submitted | rejected | network_error)`. Each
//! submission is independent; a second submit while one is pending simply
//! moves the status back to pending and the last response to arrive wins.

#[cfg(test)]
#[path = "report_test.rs"]
mod report_test;

use hazards::HazardReport;

use crate::net::api::ApiError;

pub const HAZARD_TYPES: [(&str, &str); 6] = [
    ("pothole", "Pothole"),
    ("construction", "Construction"),
    ("blocked_sidewalk", "Blocked sidewalk"),
    ("broken_curb_ramp", "Broken curb ramp"),
    ("flooding", "Flooding / ice"),
    ("other", "Other"),
];

pub const USER_TYPES: [(&str, &str); 5] = [
    ("pedestrian", "Pedestrian"),
    ("wheelchair", "Wheelchair user"),
    ("visually_impaired", "Visually impaired"),
    ("stroller", "Stroller"),
    ("cyclist", "Cyclist"),
];

/// Accessibility options, 1 = impassable, 5 = no impact.
pub const ACCESSIBILITY_LEVELS: [(&str, &str); 5] = [
    ("1", "1 - Impassable"),
    ("2", "2 - Very difficult"),
    ("3", "3 - Difficult"),
    ("4", "4 - Minor obstacle"),
    ("5", "5 - No impact"),
];

const PENDING_MESSAGE: &str = "Submitting...";
const SUBMITTED_MESSAGE: &str = "Report submitted! Thanks, this will help train the model.";
const GENERIC_REJECTION: &str = "could not submit report.";
const NETWORK_MESSAGE: &str = "Network error. Please try again.";

/// Current values of the six report fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportDraft {
    pub location_name: String,
    pub hazard_type: String,
    pub accessibility: String,
    pub user_type: String,
    pub temporary: bool,
    pub description: String,
}

impl Default for ReportDraft {
    fn default() -> Self {
        Self {
            location_name: String::new(),
            hazard_type: HAZARD_TYPES[0].0.to_owned(),
            accessibility: "3".to_owned(),
            user_type: USER_TYPES[0].0.to_owned(),
            temporary: true,
            description: String::new(),
        }
    }
}

impl ReportDraft {
    #[must_use]
    pub fn to_report(&self) -> HazardReport {
        HazardReport {
            location_name: self.location_name.clone(),
            hazard_type: self.hazard_type.clone(),
            accessibility: self.accessibility.clone(),
            user_type: self.user_type.clone(),
            temporary: self.temporary,
            description: self.description.clone(),
        }
    }

    /// Restore markup defaults; `temporary` goes back to checked.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Pending,
    Submitted,
    /// Server refused the report; holds the text shown after `Error: `.
    Rejected(String),
    NetworkError,
}

impl SubmitStatus {
    /// Text for the `submit-status` element.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Idle => String::new(),
            Self::Pending => PENDING_MESSAGE.to_owned(),
            Self::Submitted => SUBMITTED_MESSAGE.to_owned(),
            Self::Rejected(msg) => format!("Error: {msg}"),
            Self::NetworkError => NETWORK_MESSAGE.to_owned(),
        }
    }

    /// BEM modifier class for the status element.
    #[must_use]
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Idle => "status",
            Self::Pending => "status status--pending",
            Self::Submitted => "status status--success",
            Self::Rejected(_) | Self::NetworkError => "status status--error",
        }
    }
}

/// Report panel state: the form draft and the last submission status.
#[derive(Clone, Debug, Default)]
pub struct ReportState {
    pub draft: ReportDraft,
    pub status: SubmitStatus,
}

impl ReportState {
    /// Enter `pending` and snapshot the form into an outbound report.
    pub fn begin_submit(&mut self) -> HazardReport {
        self.status = SubmitStatus::Pending;
        self.draft.to_report()
    }

    /// Apply the outcome of a submission.
    pub fn finish_submit(&mut self, outcome: Result<(), ApiError>) {
        self.status = match outcome {
            Ok(()) => {
                self.draft.reset();
                SubmitStatus::Submitted
            }
            Err(ApiError::Rejected { message, .. }) => {
                SubmitStatus::Rejected(message.unwrap_or_else(|| GENERIC_REJECTION.to_owned()))
            }
            Err(ApiError::Network(_) | ApiError::Decode(_) | ApiError::Unavailable) => SubmitStatus::NetworkError,
        };
    }
}
