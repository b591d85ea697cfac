//! Reporting handlers.

use axum::Json;
use axum::extract::State;

use campus_auth::policy;
use campus_core::error::AppError;

use crate::dto::response::ReportsSummaryResponse;
use crate::extractors::CurrentUser;
use crate::state::AppState;

/// GET /reports/summary — superuser only.
pub async fn summary(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<Json<ReportsSummaryResponse>, AppError> {
    policy::require_superuser(user.role)?;

    let students = state.student_repo.count().await?;
    let fees = state.fee_repo.totals().await?;
    let attendance = state.attendance_repo.status_counts().await?;

    Ok(Json(ReportsSummaryResponse {
        students,
        fees_total: fees.total,
        fees_paid: fees.paid,
        fees_balance: fees.total - fees.paid,
        attendance_present: attendance.present,
        attendance_absent: attendance.absent,
    }))
}
