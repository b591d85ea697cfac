//! Announcement entities.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A broadcast announcement, visible to every authenticated principal.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Announcement {
    /// Surrogate row id.
    pub announcement_id: i64,
    /// Title.
    pub title: String,
    /// Body text.
    pub message: String,
    /// Principal that created the announcement.
    pub created_by: String,
    /// When the announcement was created.
    pub created_at: DateTime<Utc>,
}
