//! Interview statistics entities.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A manually recorded interview statistic.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct InterviewStat {
    /// Surrogate row id.
    pub interview_id: i64,
    /// Airline or employer name.
    pub airline_name: String,
    /// Interview date (`YYYY-MM-DD`).
    pub interview_date: String,
    /// Free-form notes.
    pub notes: String,
}

/// Where a merged interview item came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterviewSource {
    /// Entered through `POST /interviews`.
    Manual,
    /// Derived from an attendance remark mentioning an interview.
    AttendanceRemark,
}

/// A merged interview item: either a manual stat or a row derived from
/// an attendance remark, sorted together by date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterviewItem {
    /// Item id (`<n>` for manual rows, `attendance-<n>` for derived).
    pub interview_id: String,
    /// Airline or employer name (extracted from the remark for derived
    /// rows).
    pub airline_name: String,
    /// Interview date.
    pub interview_date: String,
    /// Notes (the raw remark for derived rows).
    pub notes: String,
    /// Provenance of the item.
    pub source: InterviewSource,
    /// Student id, for derived rows.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_id: Option<String>,
    /// Student name, for derived rows.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_name: Option<String>,
}
