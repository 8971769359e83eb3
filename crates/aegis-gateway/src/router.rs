//! Axum router wiring.
//!
//! All routes are plain GETs. CORS is fully open unless
//! `gateway.cors_permissive` is turned off.

use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;

use crate::{api, app_state::AppState, ops};

pub fn build_router(state: AppState) -> Router {
    let cors_permissive = state.cfg().gateway.cors_permissive;

    let router = Router::new()
        .route("/api/tick", get(api::tick::tick))
        .route("/api/explain", get(api::tick::explain))
        .route("/api/legacy/llm", get(api::legacy::llm_probe))
        .route("/api/legacy/ml", get(api::legacy::drift_probe))
        .route("/healthz", get(ops::healthz))
        .route("/readyz", get(ops::readyz))
        .route("/metrics", get(ops::metrics))
        .with_state(state);

    if cors_permissive {
        router.layer(CorsLayer::permissive())
    } else {
        router
    }
}
