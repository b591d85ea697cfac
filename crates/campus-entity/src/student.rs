//! Student roster entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A roster entry. `student_id` is the natural key and doubles as the
/// login principal for self-scoped access.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Student {
    /// Unique student identifier (e.g. `AAI701`).
    pub student_id: String,
    /// Full name.
    pub student_name: String,
    /// Enrolled course.
    pub course: String,
    /// Batch label.
    pub batch: String,
    /// When the roster entry was created.
    pub created_at: DateTime<Utc>,
}

impl Student {
    /// First name, for greeting purposes.
    pub fn first_name(&self) -> &str {
        self.student_name.trim().split(' ').next().unwrap_or("")
    }
}

/// Data required to create a roster entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewStudent {
    /// Full name.
    pub student_name: String,
    /// Enrolled course.
    pub course: String,
    /// Batch label.
    pub batch: String,
}
