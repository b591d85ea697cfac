//! Auth handlers — login and identity check.

use axum::Json;
use axum::extract::State;
use tracing::info;

use campus_core::error::AppError;

use crate::dto::request::LoginRequest;
use crate::dto::response::{LoginResponse, MeResponse};
use crate::extractors::CurrentUser;
use crate::state::AppState;

/// POST /login
///
/// Reconciles credentials against the roster first, so a student added
/// through any path can log in immediately, then verifies the secret
/// and issues a session token.
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let username = req.username.trim();
    let password = req.password.trim();

    let roster_ids = state.student_repo.list_ids().await?;
    state.vault.reconcile(&roster_ids).await?;

    state.vault.verify(username, password).await?;
    let token = state.sessions.create(username);

    info!(principal = %username, "Login successful");

    Ok(Json(LoginResponse {
        status: "ok",
        token,
    }))
}

/// GET /auth/me
///
/// On the public-path allowlist, but the `CurrentUser` extractor still
/// validates the bearer token; the endpoint answers "who am I" for a
/// token the client already holds.
pub async fn me(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<Json<MeResponse>, AppError> {
    if user.is_superuser() {
        return Ok(Json(MeResponse {
            status: "ok",
            user: user.principal.clone(),
            role: user.role.as_str(),
            student_name: None,
            first_name: None,
            course: None,
            batch: None,
        }));
    }

    let student = state.student_repo.find_by_id(&user.principal).await?;

    let (student_name, first_name, course, batch) = match &student {
        Some(s) => (
            s.student_name.clone(),
            s.first_name().to_string(),
            s.course.clone(),
            s.batch.clone(),
        ),
        None => Default::default(),
    };

    Ok(Json(MeResponse {
        status: "ok",
        user: user.principal.clone(),
        role: user.role.as_str(),
        student_name: Some(student_name),
        first_name: Some(first_name),
        course: Some(course),
        batch: Some(batch),
    }))
}
