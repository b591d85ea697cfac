//! Announcement repository.

use chrono::Utc;
use sqlx::SqlitePool;

use campus_core::error::{AppError, ErrorKind};
use campus_core::result::AppResult;
use campus_entity::announcement::Announcement;

/// Repository for announcements.
#[derive(Debug, Clone)]
pub struct AnnouncementRepository {
    pool: SqlitePool,
}

impl AnnouncementRepository {
    /// Create a new announcement repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Latest announcements, newest first.
    pub async fn list(&self, limit: i64) -> AppResult<Vec<Announcement>> {
        sqlx::query_as::<_, Announcement>(
            "SELECT * FROM announcements ORDER BY announcement_id DESC LIMIT ?",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list announcements", e)
        })
    }

    /// Create an announcement.
    pub async fn insert(&self, title: &str, message: &str, created_by: &str) -> AppResult<i64> {
        let result = sqlx::query(
            "INSERT INTO announcements (title, message, created_by, created_at) VALUES (?, ?, ?, ?)",
        )
        .bind(title)
        .bind(message)
        .bind(created_by)
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to insert announcement", e)
        })?;

        Ok(result.last_insert_rowid())
    }
}
