//! Session endpoints.

use crate::error::AppError;
use crate::service::Catalog;
use crate::state::AppState;
use crate::views::SpeakerProfile;
use axum::{
    extract::{Path, State},
    Json,
};

pub async fn session_speakers(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<SpeakerProfile>>, AppError> {
    let session = Catalog::get_session(&state.pool, id)
        .await?
        .ok_or(AppError::NotFound(AppError::SESSION_NOT_FOUND))?;
    let speakers = Catalog::speakers_for_session(&state.pool, session.id).await?;
    Ok(Json(
        speakers.into_iter().map(SpeakerProfile::from).collect(),
    ))
}
