//! Hazard report, lookup, and prediction routes.
//!
//! ERROR HANDLING
//! ==============
//! Every non-2xx response carries an `ErrorBody` so the client can show the
//! server's message verbatim. Validation failures are 400s with the domain
//! error text; storage failures are logged and surfaced as a generic 500.

#[cfg(test)]
#[path = "hazard_test.rs"]
mod hazard_test;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use hazards::{ErrorBody, HazardsResponse, Prediction, ReportAccepted};
use serde::Deserialize;
use tracing::{error, info};

use crate::services::hazard::{self, HazardError, RiskModel};
use crate::services::store::StoreError;
use crate::state::AppState;

const LOCATION_REQUIRED: &str = "location query parameter is required";

pub type ApiError = (StatusCode, Json<ErrorBody>);

fn api_error(status: StatusCode, message: impl Into<String>) -> ApiError {
    (status, Json(ErrorBody::new(message)))
}

pub(crate) fn hazard_error_to_response(err: HazardError) -> ApiError {
    match err {
        HazardError::InvalidData | HazardError::AccessibilityOutOfRange(_) => {
            api_error(StatusCode::BAD_REQUEST, err.to_string())
        }
        HazardError::Timestamp(_) => {
            error!(error = %err, "report timestamp failed");
            api_error(StatusCode::INTERNAL_SERVER_ERROR, "failed to save report")
        }
    }
}

fn store_error_to_response(err: StoreError, message: &'static str) -> ApiError {
    error!(error = %err, "{message}");
    api_error(StatusCode::INTERNAL_SERVER_ERROR, message)
}

#[derive(Debug, Default, Deserialize)]
pub struct LocationQuery {
    pub location: Option<String>,
}

impl LocationQuery {
    /// The queried location, or `None` when missing or empty.
    fn required(self) -> Option<String> {
        self.location.filter(|l| !l.is_empty())
    }
}

/// `POST /api/report`: validate, stamp, and store a hazard report.
pub async fn submit_report(
    State(state): State<AppState>,
    body: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<Json<ReportAccepted>, ApiError> {
    let Ok(Json(body)) = body else {
        return Err(hazard_error_to_response(HazardError::InvalidData));
    };

    let new = hazard::parse_report_body(&body).map_err(hazard_error_to_response)?;
    let report = hazard::collect_hazard_report(new, hazard::local_now()).map_err(hazard_error_to_response)?;

    state
        .store
        .append(&report)
        .await
        .map_err(|e| store_error_to_response(e, "failed to save report"))?;

    info!(
        location = %report.location_name,
        hazard_type = %report.hazard_type,
        accessibility = %report.accessibility,
        "hazard report saved"
    );
    Ok(Json(ReportAccepted { status: "ok".to_owned(), report }))
}

/// `GET /api/hazards?location=`: most recent reports matching a location.
pub async fn list_hazards(
    State(state): State<AppState>,
    Query(query): Query<LocationQuery>,
) -> Result<Json<HazardsResponse>, ApiError> {
    let Some(location) = query.required() else {
        return Err(api_error(StatusCode::BAD_REQUEST, LOCATION_REQUIRED));
    };

    let hazards = state
        .store
        .recent(&location, state.config.recent_limit)
        .await
        .map_err(|e| store_error_to_response(e, "failed to load hazards"))?;

    Ok(Json(HazardsResponse { hazards }))
}

/// `GET /api/predict?location=`: should the location be avoided today?
pub async fn predict(
    State(state): State<AppState>,
    Query(query): Query<LocationQuery>,
) -> Result<Json<Prediction>, ApiError> {
    let Some(location) = query.required() else {
        return Err(api_error(StatusCode::BAD_REQUEST, LOCATION_REQUIRED));
    };

    let today = hazard::local_now().weekday().to_string();
    let prediction = predict_for_day(&state, &location, &today).await?;
    Ok(Json(prediction))
}

async fn predict_for_day(state: &AppState, location: &str, day: &str) -> Result<Prediction, ApiError> {
    let records = state
        .store
        .load_all()
        .await
        .map_err(|e| store_error_to_response(e, "failed to load hazards"))?;
    let model = RiskModel::build(&records);
    Ok(hazard::predict_should_avoid(&model, location, day, state.config.avoid_threshold))
}
