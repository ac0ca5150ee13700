//! REST API helpers for the hazard endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `ApiError::Unavailable` since these
//! endpoints are only called from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call resolves to `Result<_, ApiError>` and never panics. Callers
//! only need to tell two kinds apart: the server answered with a non-2xx
//! status (`Rejected`, possibly with its own message), or the exchange never
//! produced a usable answer (`Network`, `Decode`, `Unavailable`).

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(any(test, feature = "hydrate"))]
use hazards::ErrorBody;
use hazards::{HazardReport, HazardsResponse, Prediction};

/// Failure of a single API exchange.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Server replied with a non-2xx status. `message` is the body's `error`
    /// field when present.
    #[error("request rejected with status {status}")]
    Rejected { status: u16, message: Option<String> },
    /// The request never completed.
    #[error("network error: {0}")]
    Network(String),
    /// A response arrived but its body could not be parsed.
    #[error("invalid response body: {0}")]
    Decode(String),
    /// Called outside the browser.
    #[error("not available on server")]
    Unavailable,
}

#[cfg(any(test, feature = "hydrate"))]
fn rejection(status: u16, body: &str) -> ApiError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error);
    ApiError::Rejected { status, message }
}

/// Interpret a `POST /api/report` response. Success bodies are ignored.
#[cfg(any(test, feature = "hydrate"))]
fn report_outcome(ok: bool, status: u16, body: &str) -> Result<(), ApiError> {
    if ok { Ok(()) } else { Err(rejection(status, body)) }
}

/// Interpret a `GET /api/hazards` body regardless of status: an error body
/// has no `hazards` and reads as an empty list, as does `"hazards": null`.
#[cfg(any(test, feature = "hydrate"))]
fn hazards_outcome(body: &str) -> Result<HazardsResponse, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Interpret a `GET /api/predict` response.
#[cfg(any(test, feature = "hydrate"))]
fn prediction_outcome(ok: bool, status: u16, body: &str) -> Result<Prediction, ApiError> {
    if !ok {
        return Err(rejection(status, body));
    }
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(feature = "hydrate")]
fn network(err: gloo_net::Error) -> ApiError {
    log::warn!("hazard api request failed: {err}");
    ApiError::Network(err.to_string())
}

/// Submit a hazard report via `POST /api/report`.
///
/// # Errors
///
/// Returns `Rejected` on a non-2xx status and `Network` if the request
/// could not complete.
pub async fn submit_report(report: &HazardReport) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(hazards::REPORT_PATH)
            .json(report)
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        let ok = resp.ok();
        let body = if ok { String::new() } else { resp.text().await.unwrap_or_default() };
        report_outcome(ok, resp.status(), &body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = report;
        Err(ApiError::Unavailable)
    }
}

/// Fetch recent hazards for `location` via `GET /api/hazards`.
///
/// # Errors
///
/// Returns `Network` if the request could not complete and `Decode` if the
/// body is not a hazards payload.
pub async fn fetch_hazards(location: &str) -> Result<HazardsResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(hazards::HAZARDS_PATH)
            .query([(hazards::LOCATION_PARAM, location)])
            .send()
            .await
            .map_err(network)?;
        let body = resp.text().await.map_err(network)?;
        hazards_outcome(&body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = location;
        Err(ApiError::Unavailable)
    }
}

/// Ask whether `location` should be avoided today via `GET /api/predict`.
///
/// # Errors
///
/// Returns `Rejected` on a non-2xx status, `Network` if the request could
/// not complete, and `Decode` for an unexpected body.
pub async fn fetch_prediction(location: &str) -> Result<Prediction, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(hazards::PREDICT_PATH)
            .query([(hazards::LOCATION_PARAM, location)])
            .send()
            .await
            .map_err(network)?;
        let ok = resp.ok();
        let status = resp.status();
        let body = resp.text().await.map_err(network)?;
        prediction_outcome(ok, status, &body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = location;
        Err(ApiError::Unavailable)
    }
}
