//! Row types for the four tables plus the speaker/bio join product.

use chrono::NaiveDateTime;
use serde::Serialize;
use sqlx::FromRow;

/// Top-level item owning zero or more sessions.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Event {
    pub id: i64,
    pub name: String,
    pub location: String,
}

/// Timed item belonging to exactly one event.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Session {
    pub id: i64,
    pub title: String,
    pub start_time: NaiveDateTime,
    pub event_id: i64,
}

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Speaker {
    pub id: i64,
    pub name: String,
}

/// At most one per speaker, enforced by the unique `speaker_id` column.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Bio {
    pub id: i64,
    pub bio_text: String,
    pub speaker_id: i64,
}

/// Speaker LEFT JOIN bio. `bio_text` is `None` for speakers without a bio,
/// which is distinct from a bio whose text is empty.
#[derive(Debug, Clone, FromRow)]
pub struct SpeakerBio {
    pub id: i64,
    pub name: String,
    pub bio_text: Option<String>,
}
