//! Timetable repository.

use sqlx::SqlitePool;

use campus_core::error::{AppError, ErrorKind};
use campus_core::result::AppResult;
use campus_entity::timetable::{NewTimetableSlot, TimetableSlot};

/// Repository for timetable slots.
#[derive(Debug, Clone)]
pub struct TimetableRepository {
    pool: SqlitePool,
}

impl TimetableRepository {
    /// Create a new timetable repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List every slot, ordered by day and start time.
    pub async fn list_all(&self) -> AppResult<Vec<TimetableSlot>> {
        sqlx::query_as::<_, TimetableSlot>(
            "SELECT * FROM timetable
             ORDER BY day_of_week ASC, start_time ASC, timetable_id DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list timetable", e))
    }

    /// List slots visible to one course/batch pair. Empty slot filters
    /// match everything.
    pub async fn list_for(&self, course: &str, batch: &str) -> AppResult<Vec<TimetableSlot>> {
        sqlx::query_as::<_, TimetableSlot>(
            "SELECT * FROM timetable
             WHERE (course = ? OR course = '') AND (batch = ? OR batch = '')
             ORDER BY day_of_week ASC, start_time ASC, timetable_id DESC",
        )
        .bind(course)
        .bind(batch)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list timetable for student", e)
        })
    }

    /// Create a slot.
    pub async fn insert(&self, slot: &NewTimetableSlot) -> AppResult<i64> {
        let result = sqlx::query(
            "INSERT INTO timetable (title, day_of_week, start_time, end_time, course, batch, location, instructor)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&slot.title)
        .bind(&slot.day_of_week)
        .bind(&slot.start_time)
        .bind(&slot.end_time)
        .bind(&slot.course)
        .bind(&slot.batch)
        .bind(&slot.location)
        .bind(&slot.instructor)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to insert timetable slot", e)
        })?;

        Ok(result.last_insert_rowid())
    }
}
