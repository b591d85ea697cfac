//! Notification handlers.

use axum::Json;
use axum::extract::{Path, State};

use campus_auth::policy;
use campus_core::error::AppError;
use campus_entity::notification::NotificationWithRead;

use crate::dto::request::CreateNotificationRequest;
use crate::dto::response::StatusResponse;
use crate::extractors::CurrentUser;
use crate::state::AppState;

const LIST_LIMIT: i64 = 30;

/// GET /notifications — broadcast and targeted items for the caller,
/// with their read flags.
pub async fn list(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<Json<Vec<NotificationWithRead>>, AppError> {
    Ok(Json(
        state
            .notification_repo
            .list_for(&user.principal, LIST_LIMIT)
            .await?,
    ))
}

/// POST /notifications — superuser only.
pub async fn create(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(req): Json<CreateNotificationRequest>,
) -> Result<Json<StatusResponse>, AppError> {
    policy::require_superuser(user.role)?;
    state
        .notification_repo
        .insert(
            &req.title,
            &req.message,
            &req.level,
            req.target_user.as_deref().filter(|t| !t.is_empty()),
        )
        .await?;
    Ok(Json(StatusResponse::ok("Notification created")))
}

/// POST /notifications/{id}/read — idempotent read marker.
pub async fn mark_read(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(notification_id): Path<i64>,
) -> Result<Json<StatusResponse>, AppError> {
    state
        .notification_repo
        .mark_read(notification_id, &user.principal)
        .await?;
    Ok(Json(StatusResponse::ok("Notification marked read")))
}
