//! Admissions repository.

use chrono::Utc;
use sqlx::SqlitePool;

use campus_core::error::{AppError, ErrorKind};
use campus_core::result::AppResult;
use campus_entity::admission::{Admission, NewAdmission};

/// Repository for admission applications.
#[derive(Debug, Clone)]
pub struct AdmissionRepository {
    pool: SqlitePool,
}

impl AdmissionRepository {
    /// Create a new admission repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Store a submitted application, returning its row id.
    pub async fn insert(&self, application: &NewAdmission) -> AppResult<i64> {
        let result = sqlx::query(
            "INSERT INTO admissions (applicant_name, email, phone, course, message, created_at)
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&application.applicant_name)
        .bind(&application.email)
        .bind(&application.phone)
        .bind(&application.course)
        .bind(&application.message)
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to insert admission", e)
        })?;

        Ok(result.last_insert_rowid())
    }

    /// List applications, newest first.
    pub async fn list(&self) -> AppResult<Vec<Admission>> {
        sqlx::query_as::<_, Admission>(
            "SELECT * FROM admissions ORDER BY admission_id DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list admissions", e))
    }
}
