//! Interview statistics handlers.

use axum::Json;
use axum::extract::State;

use campus_auth::policy;
use campus_core::error::AppError;
use campus_entity::interview::InterviewItem;

use crate::dto::request::CreateInterviewRequest;
use crate::dto::response::StatusResponse;
use crate::extractors::CurrentUser;
use crate::state::AppState;

/// GET /interviews — manual stats plus remark-derived rows under the
/// caller's scope.
pub async fn list(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<Json<Vec<InterviewItem>>, AppError> {
    Ok(Json(state.interviews.list(&user.scope()).await?))
}

/// POST /interviews — superuser only.
pub async fn create(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(req): Json<CreateInterviewRequest>,
) -> Result<Json<StatusResponse>, AppError> {
    policy::require_superuser(user.role)?;
    state
        .interviews
        .create(&req.airline_name, &req.interview_date, &req.notes)
        .await?;
    Ok(Json(StatusResponse::ok("Interview stat created")))
}
