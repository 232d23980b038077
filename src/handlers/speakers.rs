//! Speaker endpoints.

use crate::error::AppError;
use crate::service::Catalog;
use crate::state::AppState;
use crate::views::{SpeakerProfile, SpeakerSummary};
use axum::{
    extract::{Path, State},
    Json,
};

pub async fn list_speakers(
    State(state): State<AppState>,
) -> Result<Json<Vec<SpeakerSummary>>, AppError> {
    let speakers = Catalog::list_speakers(&state.pool).await?;
    Ok(Json(
        speakers.into_iter().map(SpeakerSummary::from).collect(),
    ))
}

pub async fn speaker_detail(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<SpeakerProfile>, AppError> {
    let speaker = Catalog::speaker_with_bio(&state.pool, id)
        .await?
        .ok_or(AppError::NotFound(AppError::SPEAKER_NOT_FOUND))?;
    Ok(Json(SpeakerProfile::from(speaker)))
}
