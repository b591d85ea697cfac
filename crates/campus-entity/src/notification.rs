//! Notification entities.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A notification, either broadcast (`target_user` null) or targeted at
/// one principal.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Notification {
    /// Surrogate row id.
    pub notification_id: i64,
    /// Title.
    pub title: String,
    /// Body text.
    pub message: String,
    /// Severity level (`info`, `warning`, ...).
    pub level: String,
    /// Target principal, or null for a broadcast.
    pub target_user: Option<String>,
    /// When the notification was created.
    pub created_at: DateTime<Utc>,
}

/// A notification joined with the caller's read state.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct NotificationWithRead {
    /// Surrogate row id.
    pub notification_id: i64,
    /// Title.
    pub title: String,
    /// Body text.
    pub message: String,
    /// Severity level.
    pub level: String,
    /// Target principal, or null for a broadcast.
    pub target_user: Option<String>,
    /// When the notification was created.
    pub created_at: DateTime<Utc>,
    /// Whether the calling principal has marked it read.
    pub is_read: bool,
}
