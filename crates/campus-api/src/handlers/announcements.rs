//! Announcement handlers.

use axum::Json;
use axum::extract::State;

use campus_auth::policy;
use campus_core::error::AppError;
use campus_entity::announcement::Announcement;

use crate::dto::request::CreateAnnouncementRequest;
use crate::dto::response::StatusResponse;
use crate::extractors::CurrentUser;
use crate::state::AppState;

const LIST_LIMIT: i64 = 20;

/// GET /announcements — visible to every authenticated principal.
pub async fn list(
    State(state): State<AppState>,
    _user: CurrentUser,
) -> Result<Json<Vec<Announcement>>, AppError> {
    Ok(Json(state.announcement_repo.list(LIST_LIMIT).await?))
}

/// POST /announcements — superuser only.
pub async fn create(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(req): Json<CreateAnnouncementRequest>,
) -> Result<Json<StatusResponse>, AppError> {
    policy::require_superuser(user.role)?;
    state
        .announcement_repo
        .insert(&req.title, &req.message, &user.principal)
        .await?;
    Ok(Json(StatusResponse::ok("Announcement created")))
}
