//! Fee ledger entities.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A fee ledger entry. `amount_total` records the agreed total at the
/// time of the transaction; `amount_paid` the amount received.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Fee {
    /// Surrogate row id.
    pub fee_id: i64,
    /// Student the entry belongs to.
    pub student_id: String,
    /// Total agreed amount (INR).
    pub amount_total: f64,
    /// Amount paid in this transaction (INR).
    pub amount_paid: f64,
    /// Optional due date (`YYYY-MM-DD`).
    pub due_date: Option<String>,
    /// Free-form remarks.
    pub remarks: String,
    /// Stored receipt file path, if a receipt was uploaded.
    pub receipt_path: Option<String>,
    /// When the entry was recorded.
    pub created_at: DateTime<Utc>,
}

/// Data required to record a fee entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewFee {
    /// Student the entry belongs to.
    pub student_id: String,
    /// Total agreed amount (INR).
    pub amount_total: f64,
    /// Amount paid (INR).
    pub amount_paid: f64,
    /// Optional due date.
    pub due_date: Option<String>,
    /// Free-form remarks.
    pub remarks: String,
    /// Stored receipt path, if any.
    pub receipt_path: Option<String>,
}
