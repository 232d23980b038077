//! Pool construction and schema DDL. Foreign keys are enabled on every
//! connection; cascade rules live in the table definitions.

use crate::error::AppError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

/// Open a pool against `database_url`, creating the database file if missing.
pub async fn connect(database_url: &str) -> Result<SqlitePool, AppError> {
    let opts = SqliteConnectOptions::from_str(database_url)
        .map_err(|e| AppError::BadRequest(format!("invalid DATABASE_URL: {}", e)))?
        .create_if_missing(true)
        .foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(opts)
        .await?;
    Ok(pool)
}

/// In-memory database for tests and ad-hoc tooling. Single connection so the
/// database outlives individual checkouts.
pub async fn open_in_memory() -> Result<SqlitePool, AppError> {
    let opts = SqliteConnectOptions::from_str("sqlite::memory:")
        .map_err(|e| AppError::BadRequest(format!("sqlite options: {}", e)))?
        .foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(opts)
        .await?;
    Ok(pool)
}

const SCHEMA_DDL: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS events (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        location TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS sessions (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title TEXT NOT NULL,
        start_time TEXT NOT NULL,
        event_id INTEGER NOT NULL REFERENCES events(id) ON DELETE CASCADE
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS speakers (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS bios (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        bio_text TEXT NOT NULL,
        speaker_id INTEGER NOT NULL UNIQUE REFERENCES speakers(id) ON DELETE CASCADE
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS session_speakers (
        session_id INTEGER NOT NULL REFERENCES sessions(id) ON DELETE CASCADE,
        speaker_id INTEGER NOT NULL REFERENCES speakers(id) ON DELETE CASCADE,
        PRIMARY KEY (session_id, speaker_id)
    )
    "#,
];

/// Tables in drop order (children first, so `reset` works with foreign keys on).
const TABLES: &[&str] = &["session_speakers", "bios", "sessions", "speakers", "events"];

/// Create all tables if absent. Idempotent.
pub async fn apply_migrations(pool: &SqlitePool) -> Result<(), AppError> {
    for ddl in SCHEMA_DDL {
        sqlx::query(ddl).execute(pool).await?;
    }
    Ok(())
}

/// Drop and recreate the whole schema. Seed-time only.
pub async fn reset(pool: &SqlitePool) -> Result<(), AppError> {
    for table in TABLES {
        sqlx::query(&format!("DROP TABLE IF EXISTS {}", table))
            .execute(pool)
            .await?;
    }
    apply_migrations(pool).await
}
