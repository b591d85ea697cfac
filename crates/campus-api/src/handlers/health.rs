//! Health and root handlers.

use axum::Json;
use axum::extract::State;
use axum::response::{Html, IntoResponse, Response};

use campus_core::error::AppError;

use crate::dto::response::HealthResponse;
use crate::state::AppState;

/// GET /health — liveness plus a database ping.
pub async fn health(State(state): State<AppState>) -> Result<Json<HealthResponse>, AppError> {
    let database = campus_database::connection::health_check(&state.db_pool)
        .await
        .unwrap_or(false);

    Ok(Json(HealthResponse {
        status: "ok",
        database,
    }))
}

/// GET / — serves the frontend index when a static directory is
/// configured, a service banner otherwise.
pub async fn index(State(state): State<AppState>) -> Response {
    let static_dir = &state.config.storage.static_dir;
    if !static_dir.is_empty() {
        let index_path = format!("{static_dir}/index.html");
        if let Ok(contents) = tokio::fs::read_to_string(&index_path).await {
            return Html(contents).into_response();
        }
    }

    Json(serde_json::json!({
        "status": "ok",
        "service": "campus-erp",
    }))
    .into_response()
}
