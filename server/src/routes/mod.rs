//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds the JSON/plain-text admin API under `/api` and serves the
//! compiled client bundle as static files with an `index.html`
//! fallback, so deep links to client routes resolve to the single-page
//! console.

pub mod config;
pub mod testcases;

use axum::Router;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Assemble the application router.
pub fn app(state: AppState) -> Router {
    let static_dir = state.config.static_dir().to_path_buf();
    let index = static_dir.join("index.html");

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/config/projecthome", get(config::project_home))
        .route("/api/config/root", get(config::root_directory))
        .route("/api/testcases", get(testcases::list_test_cases))
        .route("/api/stats", get(testcases::statistics))
        .route("/healthz", get(healthz))
        .fallback_service(ServeDir::new(static_dir).fallback(ServeFile::new(index)))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// `GET /healthz` — liveness probe.
async fn healthz() -> &'static str {
    "ok"
}
