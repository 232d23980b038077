//! Event endpoints.

use crate::error::AppError;
use crate::service::Catalog;
use crate::state::AppState;
use crate::views::{EventSummary, SessionSummary};
use axum::{
    extract::{Path, State},
    Json,
};

pub async fn list_events(
    State(state): State<AppState>,
) -> Result<Json<Vec<EventSummary>>, AppError> {
    let events = Catalog::list_events(&state.pool).await?;
    Ok(Json(events.into_iter().map(EventSummary::from).collect()))
}

pub async fn event_sessions(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<SessionSummary>>, AppError> {
    let event = Catalog::get_event(&state.pool, id)
        .await?
        .ok_or(AppError::NotFound(AppError::EVENT_NOT_FOUND))?;
    let sessions = Catalog::sessions_for_event(&state.pool, event.id).await?;
    Ok(Json(
        sessions.into_iter().map(SessionSummary::from).collect(),
    ))
}
