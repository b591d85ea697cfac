//! Timetable entities.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A timetable slot. Empty `course`/`batch` means the slot applies to
/// every course or batch.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TimetableSlot {
    /// Surrogate row id.
    pub timetable_id: i64,
    /// Session title.
    pub title: String,
    /// Day of week label (`Monday`..`Sunday`).
    pub day_of_week: String,
    /// Start time (`HH:MM`).
    pub start_time: String,
    /// End time (`HH:MM`).
    pub end_time: String,
    /// Course filter ("" = all courses).
    pub course: String,
    /// Batch filter ("" = all batches).
    pub batch: String,
    /// Location label.
    pub location: String,
    /// Instructor name.
    pub instructor: String,
}

/// Data required to create a timetable slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTimetableSlot {
    /// Session title.
    pub title: String,
    /// Day of week label.
    pub day_of_week: String,
    /// Start time.
    pub start_time: String,
    /// End time.
    pub end_time: String,
    /// Course filter ("" = all).
    #[serde(default)]
    pub course: String,
    /// Batch filter ("" = all).
    #[serde(default)]
    pub batch: String,
    /// Location label.
    #[serde(default)]
    pub location: String,
    /// Instructor name.
    #[serde(default)]
    pub instructor: String,
}
