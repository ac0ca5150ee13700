//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the hazard store behind a trait object so tests can point routes at
//! a temporary file while production uses Postgres.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use std::sync::Arc;

use crate::config::HazardConfig;
use crate::services::store::HazardStore;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped or Copy.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn HazardStore>,
    pub config: HazardConfig,
}

impl AppState {
    #[must_use]
    pub fn new(store: Arc<dyn HazardStore>, config: HazardConfig) -> Self {
        Self { store, config }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
