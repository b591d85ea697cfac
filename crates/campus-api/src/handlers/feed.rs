//! Dashboard feed handler.

use axum::Json;
use axum::extract::State;

use campus_core::error::AppError;
use campus_service::feed::Feed;

use crate::extractors::CurrentUser;
use crate::state::AppState;

/// GET /feed — aggregated dashboard content under the caller's scope.
pub async fn feed(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<Json<Feed>, AppError> {
    Ok(Json(state.feed.feed(&user).await?))
}
