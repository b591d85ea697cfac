//! Payment gateway handlers — order creation and signature-verified
//! recording against the fee ledger.

use axum::Json;
use axum::extract::State;
use chrono::Utc;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use tracing::{info, warn};

use campus_auth::policy;
use campus_core::error::AppError;
use campus_entity::fee::NewFee;

use crate::dto::request::{CreateOrderRequest, VerifyPaymentRequest};
use crate::dto::response::{
    GatewayStatusResponse, Invoice, OrderResponse, VerifyPaymentResponse,
};
use crate::extractors::CurrentUser;
use crate::state::AppState;

type HmacSha256 = Hmac<Sha256>;

/// GET /payments/gateway-status
pub async fn gateway_status(
    State(state): State<AppState>,
    _user: CurrentUser,
) -> Json<GatewayStatusResponse> {
    let payments = &state.config.payments;
    let enabled = payments.is_enabled();

    Json(GatewayStatusResponse {
        enabled,
        provider: "razorpay",
        message: if enabled {
            "Razorpay ready".to_string()
        } else {
            "Razorpay keys not configured".to_string()
        },
        key_id: enabled.then(|| payments.razorpay_key_id.clone()),
    })
}

/// POST /payments/razorpay/order — create a gateway order for (up to)
/// the student's due amount.
pub async fn create_order(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(req): Json<CreateOrderRequest>,
) -> Result<Json<OrderResponse>, AppError> {
    let payments = &state.config.payments;
    if !payments.is_enabled() {
        return Err(AppError::service_unavailable("Razorpay is not configured"));
    }

    let student_id = req
        .student_id
        .filter(|id| !id.trim().is_empty())
        .unwrap_or_else(|| user.principal.clone());
    policy::ensure_self_or_superuser(user.role, &user.principal, &student_id)?;

    let info = state
        .finance
        .financials(&student_id)
        .await?
        .ok_or_else(|| AppError::not_found("Student not found"))?;

    if info.due <= 0.0 {
        return Err(AppError::validation("No due amount"));
    }

    let amount_inr = req.amount_inr.unwrap_or(info.due).min(info.due).max(1.0);
    let amount_paise = (amount_inr * 100.0).round() as i64;
    let receipt = format!("fee-{student_id}-{}", Utc::now().timestamp());

    let body = serde_json::json!({
        "amount": amount_paise,
        "currency": "INR",
        "receipt": receipt,
        "notes": { "student_id": student_id, "course": info.student.course },
        "payment_capture": 1,
    });

    let response = state
        .http
        .post(&payments.orders_url)
        .basic_auth(&payments.razorpay_key_id, Some(&payments.razorpay_key_secret))
        .json(&body)
        .send()
        .await
        .map_err(|e| AppError::external(format!("Razorpay order request failed: {e}")))?;

    if !response.status().is_success() {
        let status = response.status();
        let text = response.text().await.unwrap_or_default();
        warn!(%status, "Razorpay order rejected");
        return Err(AppError::external(format!(
            "Razorpay order failed: {text}"
        )));
    }

    let order: serde_json::Value = response
        .json()
        .await
        .map_err(|e| AppError::external(format!("Invalid Razorpay order response: {e}")))?;

    Ok(Json(OrderResponse {
        key_id: payments.razorpay_key_id.clone(),
        order,
        student_id,
        amount_inr,
        due_inr: info.due,
        student_name: info.student.student_name,
    }))
}

/// POST /payments/razorpay/verify — check the gateway's HMAC signature
/// and record the payment as a fee entry.
pub async fn verify_payment(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(req): Json<VerifyPaymentRequest>,
) -> Result<Json<VerifyPaymentResponse>, AppError> {
    let payments = &state.config.payments;
    if !payments.is_enabled() {
        return Err(AppError::service_unavailable("Razorpay is not configured"));
    }

    policy::ensure_self_or_superuser(user.role, &user.principal, &req.student_id)?;

    let payload = format!("{}|{}", req.razorpay_order_id, req.razorpay_payment_id);
    let computed = hmac_hex(&payments.razorpay_key_secret, &payload);
    if computed != req.razorpay_signature {
        return Err(AppError::validation("Invalid payment signature"));
    }

    let info = state
        .finance
        .financials(&req.student_id)
        .await?
        .ok_or_else(|| AppError::not_found("Student not found"))?;

    let amount_paid = req.amount_paid_inr.max(0.0).min(info.due);
    let remarks = format!(
        "Razorpay payment_id={}, order_id={}",
        req.razorpay_payment_id, req.razorpay_order_id
    );

    let fee_id = state
        .fee_repo
        .insert(&NewFee {
            student_id: req.student_id.clone(),
            amount_total: info.total,
            amount_paid,
            due_date: None,
            remarks,
            receipt_path: None,
        })
        .await?;

    info!(student_id = %req.student_id, amount_paid, "Payment verified and recorded");

    let balance_due = (info.due - amount_paid).max(0.0);

    Ok(Json(VerifyPaymentResponse {
        status: "ok",
        message: "Payment verified and recorded".to_string(),
        amount_paid_inr: amount_paid,
        invoice: Invoice {
            invoice_no: format!("INV-{fee_id}"),
            date: Utc::now().format("%Y-%m-%d").to_string(),
            student_id: req.student_id,
            student_name: info.student.student_name,
            course: info.student.course,
            payment_id: req.razorpay_payment_id,
            order_id: req.razorpay_order_id,
            amount_paid,
            amount_total: info.total,
            balance_due,
        },
    }))
}

/// Hex-encoded HMAC-SHA256 of `data` under `secret`.
fn hmac_hex(secret: &str, data: &str) -> String {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC accepts any key length");
    mac.update(data.as_bytes());
    mac.finalize()
        .into_bytes()
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hmac_matches_known_vector() {
        // RFC 4231 test case 2.
        assert_eq!(
            hmac_hex("Jefe", "what do ya want for nothing?"),
            "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843"
        );
    }
}
