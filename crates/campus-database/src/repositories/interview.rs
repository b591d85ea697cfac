//! Interview statistics repository.

use sqlx::SqlitePool;

use campus_core::error::{AppError, ErrorKind};
use campus_core::result::AppResult;
use campus_entity::interview::InterviewStat;

/// Repository for manually recorded interview statistics.
#[derive(Debug, Clone)]
pub struct InterviewRepository {
    pool: SqlitePool,
}

impl InterviewRepository {
    /// Create a new interview repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List all manual stats, newest date first.
    pub async fn list(&self) -> AppResult<Vec<InterviewStat>> {
        sqlx::query_as::<_, InterviewStat>(
            "SELECT * FROM interview_stats
             ORDER BY interview_date DESC, interview_id DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list interviews", e))
    }

    /// Create a manual stat.
    pub async fn insert(
        &self,
        airline_name: &str,
        interview_date: &str,
        notes: &str,
    ) -> AppResult<i64> {
        let result = sqlx::query(
            "INSERT INTO interview_stats (airline_name, interview_date, notes) VALUES (?, ?, ?)",
        )
        .bind(airline_name)
        .bind(interview_date)
        .bind(notes)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to insert interview stat", e)
        })?;

        Ok(result.last_insert_rowid())
    }
}
