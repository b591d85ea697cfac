//! Notification repository.

use chrono::Utc;
use sqlx::SqlitePool;

use campus_core::error::{AppError, ErrorKind};
use campus_core::result::AppResult;
use campus_entity::notification::NotificationWithRead;

/// Repository for notifications and per-user read state.
#[derive(Debug, Clone)]
pub struct NotificationRepository {
    pool: SqlitePool,
}

impl NotificationRepository {
    /// Create a new notification repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Notifications visible to one principal (broadcast or targeted at
    /// them), joined with their read flags, newest first.
    pub async fn list_for(
        &self,
        user_id: &str,
        limit: i64,
    ) -> AppResult<Vec<NotificationWithRead>> {
        sqlx::query_as::<_, NotificationWithRead>(
            "SELECT n.notification_id, n.title, n.message, n.level, n.target_user, n.created_at,
                    CASE WHEN nr.user_id IS NULL THEN 0 ELSE 1 END AS is_read
             FROM notifications n
             LEFT JOIN notification_reads nr
               ON nr.notification_id = n.notification_id AND nr.user_id = ?
             WHERE n.target_user IS NULL OR n.target_user = ?
             ORDER BY n.notification_id DESC
             LIMIT ?",
        )
        .bind(user_id)
        .bind(user_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list notifications", e)
        })
    }

    /// Create a notification. `target_user` of `None` broadcasts.
    pub async fn insert(
        &self,
        title: &str,
        message: &str,
        level: &str,
        target_user: Option<&str>,
    ) -> AppResult<i64> {
        let result = sqlx::query(
            "INSERT INTO notifications (title, message, level, target_user, created_at)
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(title)
        .bind(message)
        .bind(level)
        .bind(target_user)
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to insert notification", e)
        })?;

        Ok(result.last_insert_rowid())
    }

    /// Mark a notification read for one principal (idempotent).
    pub async fn mark_read(&self, notification_id: i64, user_id: &str) -> AppResult<()> {
        sqlx::query(
            "INSERT OR IGNORE INTO notification_reads (notification_id, user_id) VALUES (?, ?)",
        )
        .bind(notification_id)
        .bind(user_id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to mark notification read", e)
        })?;

        Ok(())
    }
}
