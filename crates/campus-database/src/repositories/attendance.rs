//! Attendance repository.
//!
//! Inserts rely on the table's seven-field UNIQUE constraint together
//! with `INSERT OR IGNORE`: a duplicate row reports zero affected rows
//! and is counted as skipped, never as an error.

use chrono::Utc;
use sqlx::SqlitePool;

use campus_core::error::{AppError, ErrorKind};
use campus_core::result::AppResult;
use campus_entity::attendance::{AttendanceEntry, AttendanceRecord};

/// Repository for attendance rows and the bulk merge used by the
/// reconciler.
#[derive(Debug, Clone)]
pub struct AttendanceRepository {
    pool: SqlitePool,
}

/// A per-student attendance row as exposed on student detail endpoints.
#[derive(Debug, Clone, serde::Serialize, sqlx::FromRow)]
pub struct StudentAttendanceRow {
    /// Attendance date.
    pub date: String,
    /// Normalized status.
    pub attendance_status: String,
    /// Remarks.
    pub remarks: String,
}

/// Aggregate present/absent counts for reporting.
#[derive(Debug, Clone, Copy, serde::Serialize, sqlx::FromRow)]
pub struct StatusCounts {
    /// Rows with a `Present`-class status.
    pub present: i64,
    /// Rows with an `Absent`-class status.
    pub absent: i64,
}

impl AttendanceRepository {
    /// Create a new attendance repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Merge a batch of normalized entries into storage.
    ///
    /// Runs in a single transaction: optionally clears prior rows
    /// (`replace`), upserts the roster for every entry (insert-if-absent,
    /// never overwriting an existing name/course/batch), then inserts
    /// each attendance row with duplicate suppression. The returned
    /// vector holds one flag per entry: `true` if the row was inserted,
    /// `false` if it collapsed into an existing identical row.
    ///
    /// The transaction commits only after every row is processed; a
    /// database failure rolls the whole batch back.
    pub async fn merge_batch(
        &self,
        entries: &[AttendanceEntry],
        replace: bool,
    ) -> AppResult<Vec<bool>> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin import transaction", e)
        })?;

        if replace {
            sqlx::query("DELETE FROM attendance")
                .execute(&mut *tx)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to clear attendance", e)
                })?;
        }

        let now = Utc::now();
        let mut inserted_flags = Vec::with_capacity(entries.len());

        for entry in entries {
            sqlx::query(
                "INSERT OR IGNORE INTO students (student_id, student_name, course, batch, created_at)
                 VALUES (?, ?, ?, ?, ?)",
            )
            .bind(&entry.student_id)
            .bind(&entry.student_name)
            .bind(&entry.course)
            .bind(&entry.batch)
            .bind(now)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to upsert roster entry", e)
            })?;

            let result = sqlx::query(
                "INSERT OR IGNORE INTO attendance
                 (student_id, student_name, course, batch, date, attendance_status, remarks)
                 VALUES (?, ?, ?, ?, ?, ?, ?)",
            )
            .bind(&entry.student_id)
            .bind(&entry.student_name)
            .bind(&entry.course)
            .bind(&entry.batch)
            .bind(&entry.date)
            .bind(&entry.attendance_status)
            .bind(&entry.remarks)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to insert attendance row", e)
            })?;

            inserted_flags.push(result.rows_affected() > 0);
        }

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit import transaction", e)
        })?;

        Ok(inserted_flags)
    }

    /// Latest rows, newest date first. `scope` narrows to one student.
    pub async fn recent(
        &self,
        scope: Option<&str>,
        limit: i64,
    ) -> AppResult<Vec<AttendanceRecord>> {
        let query = match scope {
            Some(id) => sqlx::query_as::<_, AttendanceRecord>(
                "SELECT * FROM attendance WHERE student_id = ? ORDER BY date DESC, attendance_id DESC LIMIT ?",
            )
            .bind(id)
            .bind(limit),
            None => sqlx::query_as::<_, AttendanceRecord>(
                "SELECT * FROM attendance ORDER BY date DESC, attendance_id DESC LIMIT ?",
            )
            .bind(limit),
        };

        query.fetch_all(&self.pool).await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list recent attendance", e)
        })
    }

    /// Rows for a single date, student name ascending.
    pub async fn by_date(
        &self,
        date: &str,
        scope: Option<&str>,
    ) -> AppResult<Vec<AttendanceRecord>> {
        let query = match scope {
            Some(id) => sqlx::query_as::<_, AttendanceRecord>(
                "SELECT * FROM attendance WHERE date = ? AND student_id = ? ORDER BY student_name ASC",
            )
            .bind(date)
            .bind(id),
            None => sqlx::query_as::<_, AttendanceRecord>(
                "SELECT * FROM attendance WHERE date = ? ORDER BY student_name ASC",
            )
            .bind(date),
        };

        query.fetch_all(&self.pool).await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list attendance by date", e)
        })
    }

    /// Full attendance history for one student, newest first.
    pub async fn for_student(&self, student_id: &str) -> AppResult<Vec<StudentAttendanceRow>> {
        sqlx::query_as::<_, StudentAttendanceRow>(
            "SELECT date, attendance_status, remarks FROM attendance
             WHERE student_id = ? ORDER BY date DESC",
        )
        .bind(student_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list student attendance", e)
        })
    }

    /// Rows whose remarks mention an interview, newest first.
    pub async fn interview_remarks(
        &self,
        scope: Option<&str>,
    ) -> AppResult<Vec<AttendanceRecord>> {
        let query = match scope {
            Some(id) => sqlx::query_as::<_, AttendanceRecord>(
                "SELECT * FROM attendance
                 WHERE remarks IS NOT NULL AND TRIM(remarks) <> ''
                   AND LOWER(remarks) LIKE '%interview%' AND student_id = ?
                 ORDER BY date DESC, attendance_id DESC",
            )
            .bind(id),
            None => sqlx::query_as::<_, AttendanceRecord>(
                "SELECT * FROM attendance
                 WHERE remarks IS NOT NULL AND TRIM(remarks) <> ''
                   AND LOWER(remarks) LIKE '%interview%'
                 ORDER BY date DESC, attendance_id DESC",
            ),
        };

        query.fetch_all(&self.pool).await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list interview remarks", e)
        })
    }

    /// Present/absent aggregate over all rows.
    pub async fn status_counts(&self) -> AppResult<StatusCounts> {
        sqlx::query_as::<_, StatusCounts>(
            "SELECT
                COALESCE(SUM(CASE WHEN LOWER(attendance_status) IN ('present', 'p') THEN 1 ELSE 0 END), 0) AS present,
                COALESCE(SUM(CASE WHEN LOWER(attendance_status) IN ('absent', 'a') THEN 1 ELSE 0 END), 0) AS absent
             FROM attendance",
        )
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to aggregate attendance", e)
        })
    }
}
