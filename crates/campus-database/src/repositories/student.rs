//! Student roster repository.

use chrono::Utc;
use sqlx::SqlitePool;

use campus_core::error::{AppError, ErrorKind};
use campus_core::result::AppResult;
use campus_entity::student::Student;

/// Repository for roster CRUD and query operations.
#[derive(Debug, Clone)]
pub struct StudentRepository {
    pool: SqlitePool,
}

impl StudentRepository {
    /// Create a new student repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Find a roster entry by student id.
    pub async fn find_by_id(&self, student_id: &str) -> AppResult<Option<Student>> {
        sqlx::query_as::<_, Student>("SELECT * FROM students WHERE student_id = ?")
            .bind(student_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find student", e))
    }

    /// List the full roster, newest ids first. When `scope` is set the
    /// result is narrowed to that single student (self-scoped callers).
    pub async fn list(&self, scope: Option<&str>) -> AppResult<Vec<Student>> {
        let query = match scope {
            Some(id) => sqlx::query_as::<_, Student>(
                "SELECT * FROM students WHERE student_id = ? ORDER BY student_id DESC",
            )
            .bind(id),
            None => sqlx::query_as::<_, Student>(
                "SELECT * FROM students ORDER BY student_id DESC",
            ),
        };

        query
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list students", e))
    }

    /// List every student id in the roster.
    pub async fn list_ids(&self) -> AppResult<Vec<String>> {
        sqlx::query_scalar::<_, String>("SELECT student_id FROM students ORDER BY student_id ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list student ids", e)
            })
    }

    /// Insert a new roster entry. Fails with a conflict if the id exists.
    pub async fn insert(
        &self,
        student_id: &str,
        student_name: &str,
        course: &str,
        batch: &str,
    ) -> AppResult<()> {
        let result = sqlx::query(
            "INSERT OR IGNORE INTO students (student_id, student_name, course, batch, created_at)
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(student_id)
        .bind(student_name)
        .bind(course)
        .bind(batch)
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to insert student", e))?;

        if result.rows_affected() == 0 {
            return Err(AppError::conflict(format!(
                "Student id already exists: {student_id}"
            )));
        }
        Ok(())
    }

    /// Count roster entries.
    pub async fn count(&self) -> AppResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM students")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count students", e))
    }
}
