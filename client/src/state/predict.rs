#[cfg(test)]
#[path = "predict_test.rs"]
mod predict_test;

use hazards::Prediction;

use crate::net::api::ApiError;

const PROMPT_MESSAGE: &str = "Please enter a location.";
const NETWORK_MESSAGE: &str = "Network error. Please try again.";
const GENERIC_REJECTION: &str = "could not get a prediction.";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum PredictStatus {
    #[default]
    Idle,
    MissingLocation,
    Pending,
    Ready(Prediction),
    Rejected(String),
    NetworkError,
}

/// Prediction panel state.
#[derive(Clone, Debug, Default)]
pub struct PredictState {
    pub location: String,
    pub status: PredictStatus,
}

impl PredictState {
    /// Same contract as the recent lookup: `None` means do not send.
    pub fn begin_predict(&mut self) -> Option<String> {
        let query = self.location.trim();
        if query.is_empty() {
            self.status = PredictStatus::MissingLocation;
            return None;
        }
        let query = query.to_owned();
        self.status = PredictStatus::Pending;
        Some(query)
    }

    pub fn finish_predict(&mut self, outcome: Result<Prediction, ApiError>) {
        self.status = match outcome {
            Ok(prediction) => PredictStatus::Ready(prediction),
            Err(ApiError::Rejected { message, .. }) => {
                PredictStatus::Rejected(message.unwrap_or_else(|| GENERIC_REJECTION.to_owned()))
            }
            Err(_) => PredictStatus::NetworkError,
        };
    }

    /// Text for the `predict-result` element.
    #[must_use]
    pub fn message(&self) -> String {
        match &self.status {
            PredictStatus::Idle => String::new(),
            PredictStatus::MissingLocation => PROMPT_MESSAGE.to_owned(),
            PredictStatus::Pending => "Checking...".to_owned(),
            PredictStatus::Ready(p) => verdict(p),
            PredictStatus::Rejected(msg) => format!("Error: {msg}"),
            PredictStatus::NetworkError => NETWORK_MESSAGE.to_owned(),
        }
    }

    #[must_use]
    pub fn should_avoid(&self) -> bool {
        matches!(&self.status, PredictStatus::Ready(p) if p.should_avoid)
    }
}

fn verdict(p: &Prediction) -> String {
    let reports = if p.score == 1 { "report" } else { "reports" };
    if p.should_avoid {
        format!("Avoid {} today. {} {reports} on {}s.", p.location, p.score, p.day)
    } else {
        format!("{} looks clear today. {} {reports} on {}s.", p.location, p.score, p.day)
    }
}
