//! Timetable handlers.

use axum::Json;
use axum::extract::State;

use campus_auth::policy;
use campus_core::error::AppError;
use campus_entity::timetable::{NewTimetableSlot, TimetableSlot};

use crate::dto::response::StatusResponse;
use crate::extractors::CurrentUser;
use crate::state::AppState;

/// GET /timetable — the superuser sees everything; a student sees the
/// slots matching their course and batch (empty slot filters match all).
pub async fn list(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<Json<Vec<TimetableSlot>>, AppError> {
    if user.is_superuser() {
        return Ok(Json(state.timetable_repo.list_all().await?));
    }

    let student = state.student_repo.find_by_id(&user.principal).await?;
    let (course, batch) = match &student {
        Some(s) => (s.course.as_str(), s.batch.as_str()),
        None => ("", ""),
    };

    Ok(Json(state.timetable_repo.list_for(course, batch).await?))
}

/// POST /timetable — superuser only.
pub async fn create(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(slot): Json<NewTimetableSlot>,
) -> Result<Json<StatusResponse>, AppError> {
    policy::require_superuser(user.role)?;
    state.timetable_repo.insert(&slot).await?;
    Ok(Json(StatusResponse::ok("Timetable entry created")))
}
