//! Router assembly: the five catalog routes plus health/version.

use crate::handlers::{
    events::{event_sessions, list_events},
    sessions::session_speakers,
    speakers::{list_speakers, speaker_detail},
};
use crate::state::AppState;
use axum::{routing::get, Json, Router};
use serde::Serialize;

#[derive(Serialize)]
struct HealthBody {
    status: &'static str,
}

async fn health() -> Json<HealthBody> {
    Json(HealthBody { status: "ok" })
}

async fn version() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// GET /health and GET /version. No state.
pub fn common_routes() -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/version", get(version))
}

/// The read-only catalog surface.
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/events", get(list_events))
        .route("/events/:id/sessions", get(event_sessions))
        .route("/speakers", get(list_speakers))
        .route("/speakers/:id", get(speaker_detail))
        .route("/sessions/:id/speakers", get(session_speakers))
        .with_state(state)
}

pub fn app(state: AppState) -> Router {
    Router::new().merge(common_routes()).merge(api_routes(state))
}
