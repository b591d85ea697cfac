//! Student roster handlers.

use axum::Json;
use axum::extract::{Path, Query, State};

use campus_auth::policy;
use campus_core::error::AppError;
use campus_database::repositories::attendance::StudentAttendanceRow;
use campus_entity::fee::Fee;
use campus_entity::student::{NewStudent, Student};

use crate::dto::request::AddStudentParams;
use crate::dto::response::{BalanceResponse, StudentCreatedResponse};
use crate::extractors::CurrentUser;
use crate::state::AppState;

/// GET /students — filtering policy: a student sees only their own row.
pub async fn list(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<Json<Vec<Student>>, AppError> {
    let students = state.roster.list(&user.scope()).await?;
    Ok(Json(students))
}

/// GET /students/ids — public id listing for the login form.
pub async fn ids(State(state): State<AppState>) -> Result<Json<Vec<String>>, AppError> {
    Ok(Json(state.roster.public_ids().await?))
}

/// POST /students — superuser only.
pub async fn create(
    State(state): State<AppState>,
    user: CurrentUser,
    Query(params): Query<AddStudentParams>,
) -> Result<Json<StudentCreatedResponse>, AppError> {
    policy::require_superuser(user.role)?;

    let student_id = state
        .roster
        .create(&NewStudent {
            student_name: params.student_name,
            course: params.course,
            batch: params.batch,
        })
        .await?;

    Ok(Json(StudentCreatedResponse {
        status: "ok",
        message: "Student added".to_string(),
        student_id,
    }))
}

/// GET /students/{id}/balance — rejecting policy.
pub async fn balance(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(student_id): Path<String>,
) -> Result<Json<BalanceResponse>, AppError> {
    policy::ensure_self_or_superuser(user.role, &user.principal, &student_id)?;

    let info = state
        .finance
        .financials(&student_id)
        .await?
        .ok_or_else(|| AppError::not_found("Student not found"))?;

    Ok(Json(BalanceResponse {
        student_id,
        student_name: info.student.student_name,
        course: info.student.course,
        total: info.total,
        paid: info.paid,
        balance: info.due,
        gst_percent: campus_service::finance::GST_PERCENT,
    }))
}

/// GET /students/{id}/attendance — rejecting policy.
pub async fn attendance(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(student_id): Path<String>,
) -> Result<Json<Vec<StudentAttendanceRow>>, AppError> {
    policy::ensure_self_or_superuser(user.role, &user.principal, &student_id)?;
    Ok(Json(state.attendance_repo.for_student(&student_id).await?))
}

/// GET /students/{id}/fees — rejecting policy.
pub async fn fees(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(student_id): Path<String>,
) -> Result<Json<Vec<Fee>>, AppError> {
    policy::ensure_self_or_superuser(user.role, &user.principal, &student_id)?;
    Ok(Json(state.fee_repo.for_student(&student_id).await?))
}
