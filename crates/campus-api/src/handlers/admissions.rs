//! Admissions intake handlers.

use axum::Json;
use axum::extract::State;

use campus_auth::policy;
use campus_core::error::AppError;
use campus_entity::admission::{Admission, NewAdmission};

use crate::dto::response::AdmissionSubmittedResponse;
use crate::extractors::CurrentUser;
use crate::state::AppState;

/// POST /admissions/apply — public intake form.
pub async fn apply(
    State(state): State<AppState>,
    Json(application): Json<NewAdmission>,
) -> Result<Json<AdmissionSubmittedResponse>, AppError> {
    if application.applicant_name.trim().is_empty()
        || application.email.trim().is_empty()
        || application.course.trim().is_empty()
    {
        return Err(AppError::validation(
            "applicant_name, email, and course are required",
        ));
    }

    let admission_id = state.admission_repo.insert(&application).await?;

    Ok(Json(AdmissionSubmittedResponse {
        status: "ok",
        message: "Application received".to_string(),
        admission_id,
    }))
}

/// GET /admissions — superuser review listing.
pub async fn list(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<Json<Vec<Admission>>, AppError> {
    policy::require_superuser(user.role)?;
    Ok(Json(state.admission_repo.list().await?))
}
