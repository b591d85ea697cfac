//! Attendance handlers — listings, manual entry, and the two bulk
//! reconciliation entry points.

use axum::Json;
use axum::extract::{Multipart, Query, State};
use axum::response::{IntoResponse, Response};

use campus_auth::policy;
use campus_core::error::AppError;
use campus_entity::attendance::AttendanceRecord;
use campus_service::attendance::ImportMode;

use crate::dto::request::{AttendanceSubmission, ByDateParams};
use crate::dto::response::{ImportResponse, RecordedResponse, UploadedOnlyResponse};
use crate::extractors::CurrentUser;
use crate::state::AppState;

const RECENT_LIMIT: i64 = 20;

/// GET /attendance/recent — filtering policy.
pub async fn recent(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<Json<Vec<AttendanceRecord>>, AppError> {
    let scope = user.scope();
    let rows = state
        .attendance_repo
        .recent(scope.filter(), RECENT_LIMIT)
        .await?;
    Ok(Json(rows))
}

/// GET /attendance/by-date — filtering policy.
pub async fn by_date(
    State(state): State<AppState>,
    user: CurrentUser,
    Query(params): Query<ByDateParams>,
) -> Result<Json<Vec<AttendanceRecord>>, AppError> {
    if params.date.trim().is_empty() {
        return Err(AppError::validation("date is required"));
    }

    let scope = user.scope();
    let rows = state
        .attendance_repo
        .by_date(params.date.trim(), scope.filter())
        .await?;
    Ok(Json(rows))
}

/// POST /attendance/record — superuser only, manual batch for one date.
pub async fn record(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(submission): Json<AttendanceSubmission>,
) -> Result<Json<RecordedResponse>, AppError> {
    policy::require_superuser(user.role)?;

    let count = submission.records.len();
    state
        .reconciler
        .record_manual(&submission.date, &submission.records)
        .await?;

    Ok(Json(RecordedResponse {
        status: "ok",
        message: "Attendance recorded".to_string(),
        count,
    }))
}

/// POST /attendance/sync — superuser only; full reconciliation from the
/// configured master CSV, replacing prior attendance.
pub async fn sync(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<Json<ImportResponse>, AppError> {
    policy::require_superuser(user.role)?;

    let report = state
        .reconciler
        .sync_from_master(&state.config.import.master_path)
        .await?;

    Ok(Json(ImportResponse {
        status: "ok",
        message: "Attendance synced from master CSV".to_string(),
        inserted: report.inserted,
        skipped: report.skipped,
    }))
}

/// POST /attendance/sync/upload — superuser only; same reconciliation
/// semantics over an uploaded CSV. A non-CSV upload is answered with an
/// informative response, not an error.
pub async fn sync_upload(
    State(state): State<AppState>,
    user: CurrentUser,
    mut multipart: Multipart,
) -> Result<Response, AppError> {
    policy::require_superuser(user.role)?;

    let mut file: Option<(String, Vec<u8>)> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::validation(format!("Invalid multipart payload: {e}")))?
    {
        if field.name() == Some("file") {
            let name = field.file_name().unwrap_or("attendance.csv").to_string();
            let bytes = field
                .bytes()
                .await
                .map_err(|e| AppError::validation(format!("Failed to read upload: {e}")))?;
            file = Some((name, bytes.to_vec()));
        }
    }

    let (file_name, bytes) = file.ok_or_else(|| AppError::validation("file is required"))?;

    let extension = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_lowercase())
        .unwrap_or_default();

    if extension != "csv" {
        return Ok(Json(UploadedOnlyResponse {
            status: "uploaded_only",
            message: "Unsupported file type; upload a CSV for automatic parsing".to_string(),
            supported_parse_format: "csv",
        })
        .into_response());
    }

    let text = String::from_utf8_lossy(&bytes);
    let report = state.reconciler.import_csv(&text, ImportMode::Replace).await?;

    Ok(Json(ImportResponse {
        status: "ok",
        message: "Attendance synced from uploaded CSV".to_string(),
        inserted: report.inserted,
        skipped: report.skipped,
    })
    .into_response())
}
