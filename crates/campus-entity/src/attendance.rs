//! Attendance entities.
//!
//! An attendance row's identity is the full seven-field tuple; storage
//! enforces uniqueness over it and duplicate inserts are silently
//! ignored rather than merged.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A persisted attendance row.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AttendanceRecord {
    /// Surrogate row id.
    pub attendance_id: i64,
    /// Student identifier.
    pub student_id: String,
    /// Student name as recorded in the source.
    pub student_name: String,
    /// Course as recorded in the source.
    pub course: String,
    /// Batch as recorded in the source.
    pub batch: String,
    /// Canonical `YYYY-MM-DD` date (unrecognized source formats pass
    /// through unchanged).
    pub date: String,
    /// Canonical status: `Present`, `Absent`, or a capitalized free-form
    /// value such as `On-duty`.
    pub attendance_status: String,
    /// Free-form remarks ("" if absent in the source).
    pub remarks: String,
}

/// The data fields of an attendance row, before insertion.
///
/// Two entries identical across all seven fields collapse into one row;
/// entries differing in any field (remarks included) are both kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceEntry {
    /// Student identifier (trimmed).
    pub student_id: String,
    /// Student name.
    pub student_name: String,
    /// Course.
    pub course: String,
    /// Batch.
    pub batch: String,
    /// Normalized date.
    pub date: String,
    /// Normalized status.
    pub attendance_status: String,
    /// Remarks, defaulted to "".
    pub remarks: String,
}
