//! Read queries. By-id lookups return `Option`; a miss is a normal outcome and
//! is distinct from "found but empty collection".
//!
//! Lists are ordered by primary key, which for AUTOINCREMENT keys equals
//! insertion order.

use crate::error::AppError;
use crate::models::{Event, Session, Speaker, SpeakerBio};
use sqlx::SqlitePool;

pub struct Catalog;

impl Catalog {
    pub async fn get_event(pool: &SqlitePool, id: i64) -> Result<Option<Event>, AppError> {
        let row = sqlx::query_as::<_, Event>("SELECT id, name, location FROM events WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row)
    }

    pub async fn list_events(pool: &SqlitePool) -> Result<Vec<Event>, AppError> {
        let rows =
            sqlx::query_as::<_, Event>("SELECT id, name, location FROM events ORDER BY id")
                .fetch_all(pool)
                .await?;
        Ok(rows)
    }

    pub async fn sessions_for_event(
        pool: &SqlitePool,
        event_id: i64,
    ) -> Result<Vec<Session>, AppError> {
        let rows = sqlx::query_as::<_, Session>(
            "SELECT id, title, start_time, event_id FROM sessions WHERE event_id = ? ORDER BY id",
        )
        .bind(event_id)
        .fetch_all(pool)
        .await?;
        Ok(rows)
    }

    pub async fn get_session(pool: &SqlitePool, id: i64) -> Result<Option<Session>, AppError> {
        let row = sqlx::query_as::<_, Session>(
            "SELECT id, title, start_time, event_id FROM sessions WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;
        Ok(row)
    }

    pub async fn get_speaker(pool: &SqlitePool, id: i64) -> Result<Option<Speaker>, AppError> {
        let row = sqlx::query_as::<_, Speaker>("SELECT id, name FROM speakers WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row)
    }

    pub async fn list_speakers(pool: &SqlitePool) -> Result<Vec<Speaker>, AppError> {
        let rows = sqlx::query_as::<_, Speaker>("SELECT id, name FROM speakers ORDER BY id")
            .fetch_all(pool)
            .await?;
        Ok(rows)
    }

    /// One speaker with their bio text, if any.
    pub async fn speaker_with_bio(
        pool: &SqlitePool,
        id: i64,
    ) -> Result<Option<SpeakerBio>, AppError> {
        let row = sqlx::query_as::<_, SpeakerBio>(
            r#"
            SELECT sp.id, sp.name, b.bio_text
            FROM speakers sp
            LEFT JOIN bios b ON b.speaker_id = sp.id
            WHERE sp.id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;
        Ok(row)
    }

    /// Speakers of one session, each with their bio text, if any.
    pub async fn speakers_for_session(
        pool: &SqlitePool,
        session_id: i64,
    ) -> Result<Vec<SpeakerBio>, AppError> {
        let rows = sqlx::query_as::<_, SpeakerBio>(
            r#"
            SELECT sp.id, sp.name, b.bio_text
            FROM speakers sp
            JOIN session_speakers ss ON ss.speaker_id = sp.id
            LEFT JOIN bios b ON b.speaker_id = sp.id
            WHERE ss.session_id = ?
            ORDER BY sp.id
            "#,
        )
        .bind(session_id)
        .fetch_all(pool)
        .await?;
        Ok(rows)
    }
}
