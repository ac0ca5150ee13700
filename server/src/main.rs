mod config;
mod db;
mod routes;
mod services;
mod state;

use std::sync::Arc;

use services::store::{FileHazardStore, HazardStore, PgHazardStore};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = config::Config::from_env();

    let store: Arc<dyn HazardStore> = match config.database_url.as_deref() {
        Some(url) => {
            let pool = db::init_pool(url, config.db_max_connections)
                .await
                .expect("database init failed");
            tracing::info!("hazard store: postgres");
            Arc::new(PgHazardStore::new(pool))
        }
        None => {
            let store = FileHazardStore::new(config.hazards_file.clone());
            tracing::info!(path = %store.path().display(), "hazard store: json lines file");
            Arc::new(store)
        }
    };

    let state = state::AppState::new(store, config.hazards);

    // Serve the API alone if the Leptos site is not configured.
    let app = match routes::leptos_app(state.clone()) {
        Ok(app) => app,
        Err(e) => {
            tracing::warn!(error = %e, "leptos site unavailable; serving API only");
            routes::api_routes(state)
        }
    };

    let port = config.port;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "safestreet listening");
    axum::serve(listener, app).await.expect("server failed");
}
