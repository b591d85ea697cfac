//! Fee ledger repository.

use chrono::Utc;
use sqlx::SqlitePool;

use campus_core::error::{AppError, ErrorKind};
use campus_core::result::AppResult;
use campus_entity::fee::{Fee, NewFee};

/// Repository for fee entries and financial aggregates.
#[derive(Debug, Clone)]
pub struct FeeRepository {
    pool: SqlitePool,
}

/// Aggregate totals across the whole ledger.
#[derive(Debug, Clone, Copy, serde::Serialize, sqlx::FromRow)]
pub struct FeeTotals {
    /// Sum of agreed totals.
    pub total: f64,
    /// Sum of paid amounts.
    pub paid: f64,
    /// Number of ledger entries.
    pub transactions: i64,
}

/// Aggregate view of one student's ledger.
#[derive(Debug, Clone, Copy, serde::Serialize, sqlx::FromRow)]
pub struct StudentFeeTotals {
    /// Sum of paid amounts.
    pub paid: f64,
    /// Largest agreed total seen on any entry.
    pub max_total: f64,
    /// Number of ledger entries.
    pub transactions: i64,
}

impl FeeRepository {
    /// Create a new fee repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Record a fee entry, returning its row id.
    pub async fn insert(&self, fee: &NewFee) -> AppResult<i64> {
        let result = sqlx::query(
            "INSERT INTO fees (student_id, amount_total, amount_paid, due_date, remarks, receipt_path, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&fee.student_id)
        .bind(fee.amount_total)
        .bind(fee.amount_paid)
        .bind(&fee.due_date)
        .bind(&fee.remarks)
        .bind(&fee.receipt_path)
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to insert fee entry", e))?;

        Ok(result.last_insert_rowid())
    }

    /// Latest entries, newest first. `scope` narrows to one student.
    pub async fn recent(&self, scope: Option<&str>, limit: i64) -> AppResult<Vec<Fee>> {
        let query = match scope {
            Some(id) => sqlx::query_as::<_, Fee>(
                "SELECT * FROM fees WHERE student_id = ? ORDER BY fee_id DESC LIMIT ?",
            )
            .bind(id)
            .bind(limit),
            None => {
                sqlx::query_as::<_, Fee>("SELECT * FROM fees ORDER BY fee_id DESC LIMIT ?")
                    .bind(limit)
            }
        };

        query
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list fees", e))
    }

    /// All entries for one student, newest first.
    pub async fn for_student(&self, student_id: &str) -> AppResult<Vec<Fee>> {
        sqlx::query_as::<_, Fee>(
            "SELECT * FROM fees WHERE student_id = ? ORDER BY fee_id DESC",
        )
        .bind(student_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list student fees", e)
        })
    }

    /// Ledger-wide totals.
    pub async fn totals(&self) -> AppResult<FeeTotals> {
        sqlx::query_as::<_, FeeTotals>(
            "SELECT COALESCE(SUM(amount_total), 0) AS total,
                    COALESCE(SUM(amount_paid), 0) AS paid,
                    COUNT(*) AS transactions
             FROM fees",
        )
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to aggregate fees", e))
    }

    /// Per-student totals.
    pub async fn totals_for_student(&self, student_id: &str) -> AppResult<StudentFeeTotals> {
        sqlx::query_as::<_, StudentFeeTotals>(
            "SELECT COALESCE(SUM(amount_paid), 0) AS paid,
                    COALESCE(MAX(amount_total), 0) AS max_total,
                    COUNT(*) AS transactions
             FROM fees WHERE student_id = ?",
        )
        .bind(student_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to aggregate student fees", e)
        })
    }
}
