//! Fee handlers — listings, summaries, and manual recording with an
//! optional receipt upload.

use axum::Json;
use axum::extract::{Multipart, State};
use uuid::Uuid;

use campus_auth::policy;
use campus_core::error::AppError;
use campus_entity::fee::{Fee, NewFee};
use campus_service::finance::FeeSummary;

use crate::dto::response::StatusResponse;
use crate::extractors::CurrentUser;
use crate::state::AppState;

const RECENT_LIMIT: i64 = 20;

/// GET /fees/recent — filtering policy.
pub async fn recent(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<Json<Vec<Fee>>, AppError> {
    let scope = user.scope();
    let rows = state.fee_repo.recent(scope.filter(), RECENT_LIMIT).await?;
    Ok(Json(rows))
}

/// GET /fees/summary — ledger-wide for the superuser, personal for a
/// student.
pub async fn summary(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<Json<FeeSummary>, AppError> {
    Ok(Json(state.finance.summary(&user).await?))
}

/// POST /fees/record — superuser only. Multipart form: `student_id`,
/// `amount_paid`, optional `amount_total`, `due_date`, `remarks`, and an
/// optional `receipt` file stored under the receipts directory.
pub async fn record(
    State(state): State<AppState>,
    user: CurrentUser,
    mut multipart: Multipart,
) -> Result<Json<StatusResponse>, AppError> {
    policy::require_superuser(user.role)?;

    let mut student_id = String::new();
    let mut amount_paid = 0.0_f64;
    let mut amount_total: Option<f64> = None;
    let mut due_date: Option<String> = None;
    let mut remarks = String::new();
    let mut receipt: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::validation(format!("Invalid multipart payload: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "receipt" => {
                let file_name = field.file_name().unwrap_or("receipt.bin").to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::validation(format!("Failed to read receipt: {e}")))?;
                if !bytes.is_empty() {
                    receipt = Some((file_name, bytes.to_vec()));
                }
            }
            _ => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| AppError::validation(format!("Invalid form field: {e}")))?;
                match name.as_str() {
                    "student_id" => student_id = value.trim().to_string(),
                    "amount_paid" => {
                        amount_paid = value.trim().parse().map_err(|_| {
                            AppError::validation("amount_paid must be a number")
                        })?;
                    }
                    "amount_total" => {
                        if !value.trim().is_empty() {
                            amount_total = Some(value.trim().parse().map_err(|_| {
                                AppError::validation("amount_total must be a number")
                            })?);
                        }
                    }
                    "due_date" => {
                        if !value.trim().is_empty() {
                            due_date = Some(value.trim().to_string());
                        }
                    }
                    "remarks" => remarks = value.trim().to_string(),
                    _ => {}
                }
            }
        }
    }

    if student_id.is_empty() || amount_paid <= 0.0 {
        return Err(AppError::validation("Invalid fee payload"));
    }

    let receipt_path = match receipt {
        Some((file_name, bytes)) => {
            Some(store_receipt(&state, &student_id, &file_name, &bytes).await?)
        }
        None => None,
    };

    state
        .fee_repo
        .insert(&NewFee {
            student_id,
            amount_total: amount_total.unwrap_or(amount_paid),
            amount_paid,
            due_date,
            remarks,
            receipt_path,
        })
        .await?;

    Ok(Json(StatusResponse::ok("Fee recorded")))
}

/// Persist an uploaded receipt under the receipts directory and return
/// its stored path.
async fn store_receipt(
    state: &AppState,
    student_id: &str,
    file_name: &str,
    bytes: &[u8],
) -> Result<String, AppError> {
    let dir = &state.config.storage.receipts_dir;
    tokio::fs::create_dir_all(dir)
        .await
        .map_err(|e| AppError::storage(format!("Failed to create receipts dir {dir}: {e}")))?;

    let extension = file_name.rsplit_once('.').map(|(_, e)| e).unwrap_or("bin");
    let stored = format!("{dir}/{student_id}_{}.{extension}", Uuid::new_v4().simple());

    tokio::fs::write(&stored, bytes)
        .await
        .map_err(|e| AppError::storage(format!("Failed to store receipt {stored}: {e}")))?;

    Ok(stored)
}
