//! Seed/admin-time writes. Nothing here is reachable from the HTTP surface;
//! the API is read-only. Constraint violations come back as typed errors so
//! seed tooling can report them instead of panicking.

use crate::error::AppError;
use crate::models::{Bio, Event, Session, Speaker};
use chrono::NaiveDateTime;
use sqlx::error::ErrorKind;
use sqlx::SqlitePool;

pub struct AdminStore;

impl AdminStore {
    pub async fn create_event(
        pool: &SqlitePool,
        name: &str,
        location: &str,
    ) -> Result<Event, AppError> {
        let row = sqlx::query_as::<_, Event>(
            "INSERT INTO events (name, location) VALUES (?, ?) RETURNING id, name, location",
        )
        .bind(name)
        .bind(location)
        .fetch_one(pool)
        .await
        .map_err(map_constraint)?;
        Ok(row)
    }

    /// Fails with `BadRequest` if `event_id` names no live event: a session
    /// must always belong to exactly one event.
    pub async fn create_session(
        pool: &SqlitePool,
        title: &str,
        start_time: NaiveDateTime,
        event_id: i64,
    ) -> Result<Session, AppError> {
        let row = sqlx::query_as::<_, Session>(
            r#"
            INSERT INTO sessions (title, start_time, event_id) VALUES (?, ?, ?)
            RETURNING id, title, start_time, event_id
            "#,
        )
        .bind(title)
        .bind(start_time)
        .bind(event_id)
        .fetch_one(pool)
        .await
        .map_err(map_constraint)?;
        Ok(row)
    }

    pub async fn create_speaker(pool: &SqlitePool, name: &str) -> Result<Speaker, AppError> {
        let row =
            sqlx::query_as::<_, Speaker>("INSERT INTO speakers (name) VALUES (?) RETURNING id, name")
                .bind(name)
                .fetch_one(pool)
                .await
                .map_err(map_constraint)?;
        Ok(row)
    }

    /// Fails with `Conflict` if the speaker already has a bio (unique
    /// `speaker_id`) and `BadRequest` if the speaker does not exist.
    pub async fn create_bio(
        pool: &SqlitePool,
        speaker_id: i64,
        bio_text: &str,
    ) -> Result<Bio, AppError> {
        let row = sqlx::query_as::<_, Bio>(
            r#"
            INSERT INTO bios (bio_text, speaker_id) VALUES (?, ?)
            RETURNING id, bio_text, speaker_id
            "#,
        )
        .bind(bio_text)
        .bind(speaker_id)
        .fetch_one(pool)
        .await
        .map_err(map_constraint)?;
        Ok(row)
    }

    /// Attach a speaker to a session. The composite primary key rejects
    /// duplicate pairs.
    pub async fn assign_speaker(
        pool: &SqlitePool,
        session_id: i64,
        speaker_id: i64,
    ) -> Result<(), AppError> {
        sqlx::query("INSERT INTO session_speakers (session_id, speaker_id) VALUES (?, ?)")
            .bind(session_id)
            .bind(speaker_id)
            .execute(pool)
            .await
            .map_err(map_constraint)?;
        Ok(())
    }

    /// Deletes the event and, via cascade, all its sessions and their
    /// association rows. Returns whether a row was deleted.
    pub async fn delete_event(pool: &SqlitePool, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM events WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Deletes the speaker, its bio if present, and its association rows.
    /// Sessions the speaker spoke at are left intact.
    pub async fn delete_speaker(pool: &SqlitePool, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM speakers WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

fn map_constraint(e: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(ref db) = e {
        match db.kind() {
            ErrorKind::UniqueViolation => {
                return AppError::Conflict(format!("unique constraint: {}", db.message()))
            }
            ErrorKind::ForeignKeyViolation => {
                return AppError::BadRequest(format!("missing parent row: {}", db.message()))
            }
            ErrorKind::NotNullViolation => {
                return AppError::BadRequest(format!("missing required column: {}", db.message()))
            }
            _ => {}
        }
    }
    AppError::Db(e)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::Catalog;
    use crate::store::{apply_migrations, open_in_memory};
    use chrono::NaiveDate;
    use sqlx::SqlitePool;

    async fn setup() -> SqlitePool {
        let pool = open_in_memory().await.unwrap();
        apply_migrations(&pool).await.unwrap();
        pool
    }

    fn at(h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 15)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    #[tokio::test]
    async fn session_requires_a_live_event() {
        let pool = setup().await;
        let err = AdminStore::create_session(&pool, "Orphan", at(9), 42).await;
        assert!(matches!(err, Err(AppError::BadRequest(_))));
    }

    #[tokio::test]
    async fn second_bio_for_a_speaker_is_rejected() {
        let pool = setup().await;
        let speaker = AdminStore::create_speaker(&pool, "Dr. Jane Smith").await.unwrap();
        AdminStore::create_bio(&pool, speaker.id, "First bio.").await.unwrap();
        let err = AdminStore::create_bio(&pool, speaker.id, "Second bio.").await;
        assert!(matches!(err, Err(AppError::Conflict(_))));
    }

    #[tokio::test]
    async fn bio_requires_a_live_speaker() {
        let pool = setup().await;
        let err = AdminStore::create_bio(&pool, 42, "Ghost bio.").await;
        assert!(matches!(err, Err(AppError::BadRequest(_))));
    }

    #[tokio::test]
    async fn duplicate_session_speaker_pair_is_rejected() {
        let pool = setup().await;
        let event = AdminStore::create_event(&pool, "Tech Summit 2024", "San Francisco, CA")
            .await
            .unwrap();
        let session = AdminStore::create_session(&pool, "Intro", at(9), event.id)
            .await
            .unwrap();
        let speaker = AdminStore::create_speaker(&pool, "John Doe").await.unwrap();
        AdminStore::assign_speaker(&pool, session.id, speaker.id).await.unwrap();
        let err = AdminStore::assign_speaker(&pool, session.id, speaker.id).await;
        assert!(matches!(err, Err(AppError::Conflict(_))));
    }

    #[tokio::test]
    async fn deleting_an_event_cascades_to_sessions_and_association_rows() {
        let pool = setup().await;
        let event = AdminStore::create_event(&pool, "Tech Summit 2024", "San Francisco, CA")
            .await
            .unwrap();
        let session = AdminStore::create_session(&pool, "Intro", at(9), event.id)
            .await
            .unwrap();
        let speaker = AdminStore::create_speaker(&pool, "John Doe").await.unwrap();
        AdminStore::assign_speaker(&pool, session.id, speaker.id).await.unwrap();

        assert!(AdminStore::delete_event(&pool, event.id).await.unwrap());

        assert!(Catalog::get_session(&pool, session.id).await.unwrap().is_none());
        let (pairs,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM session_speakers")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(pairs, 0);
        // The speaker survives the cascade.
        assert!(Catalog::get_speaker(&pool, speaker.id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn deleting_a_speaker_removes_bio_but_not_sessions() {
        let pool = setup().await;
        let event = AdminStore::create_event(&pool, "Developer Conference", "Austin, TX")
            .await
            .unwrap();
        let session = AdminStore::create_session(&pool, "Web Apps", at(10), event.id)
            .await
            .unwrap();
        let speaker = AdminStore::create_speaker(&pool, "Alice Johnson").await.unwrap();
        AdminStore::create_bio(&pool, speaker.id, "Cloud architect.").await.unwrap();
        AdminStore::assign_speaker(&pool, session.id, speaker.id).await.unwrap();

        assert!(AdminStore::delete_speaker(&pool, speaker.id).await.unwrap());

        let (bios,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM bios")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(bios, 0);
        let session_after = Catalog::get_session(&pool, session.id).await.unwrap();
        assert!(session_after.is_some());
        let speakers = Catalog::speakers_for_session(&pool, session.id).await.unwrap();
        assert!(speakers.is_empty());
    }

    #[tokio::test]
    async fn delete_of_missing_row_reports_false() {
        let pool = setup().await;
        assert!(!AdminStore::delete_event(&pool, 7).await.unwrap());
        assert!(!AdminStore::delete_speaker(&pool, 7).await.unwrap());
    }
}
