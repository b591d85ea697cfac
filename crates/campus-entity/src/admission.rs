//! Admissions intake entities.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A submitted admission application. Intake is public; review is
/// superuser-only.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Admission {
    /// Surrogate row id.
    pub admission_id: i64,
    /// Applicant full name.
    pub applicant_name: String,
    /// Contact email.
    pub email: String,
    /// Contact phone.
    pub phone: String,
    /// Course applied for.
    pub course: String,
    /// Free-form message from the applicant.
    pub message: String,
    /// When the application was submitted.
    pub created_at: DateTime<Utc>,
}

/// Data submitted through the public intake form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAdmission {
    /// Applicant full name.
    pub applicant_name: String,
    /// Contact email.
    pub email: String,
    /// Contact phone.
    #[serde(default)]
    pub phone: String,
    /// Course applied for.
    pub course: String,
    /// Free-form message.
    #[serde(default)]
    pub message: String,
}
