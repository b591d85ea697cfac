//! Response DTOs.

use serde::Serialize;
use serde_json::Value;

/// Generic ok/message envelope used by mutation endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct StatusResponse {
    /// Always `"ok"`.
    pub status: &'static str,
    /// Human-readable outcome.
    pub message: String,
}

impl StatusResponse {
    /// Build an ok response.
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            status: "ok",
            message: message.into(),
        }
    }
}

/// POST /login
#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    /// Always `"ok"`.
    pub status: &'static str,
    /// The issued bearer token.
    pub token: String,
}

/// GET /auth/me
#[derive(Debug, Clone, Serialize)]
pub struct MeResponse {
    /// Always `"ok"`.
    pub status: &'static str,
    /// The principal name.
    pub user: String,
    /// Derived role.
    pub role: &'static str,
    /// Student name (students only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_name: Option<String>,
    /// First name (students only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// Course (students only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course: Option<String>,
    /// Batch (students only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub batch: Option<String>,
}

/// POST /students
#[derive(Debug, Clone, Serialize)]
pub struct StudentCreatedResponse {
    /// Always `"ok"`.
    pub status: &'static str,
    /// Human-readable outcome.
    pub message: String,
    /// The generated student id.
    pub student_id: String,
}

/// GET /students/{id}/balance
#[derive(Debug, Clone, Serialize)]
pub struct BalanceResponse {
    /// Student id.
    pub student_id: String,
    /// Student name.
    pub student_name: String,
    /// Course.
    pub course: String,
    /// Planned or ledger-derived total.
    pub total: f64,
    /// Total paid.
    pub paid: f64,
    /// Outstanding amount.
    pub balance: f64,
    /// GST rate quoted on the amounts.
    pub gst_percent: u8,
}

/// POST /attendance/record
#[derive(Debug, Clone, Serialize)]
pub struct RecordedResponse {
    /// Always `"ok"`.
    pub status: &'static str,
    /// Human-readable outcome.
    pub message: String,
    /// Number of records submitted.
    pub count: usize,
}

/// POST /attendance/sync and /attendance/sync/upload
#[derive(Debug, Clone, Serialize)]
pub struct ImportResponse {
    /// Always `"ok"`.
    pub status: &'static str,
    /// Human-readable outcome.
    pub message: String,
    /// Rows inserted.
    pub inserted: u64,
    /// Rows skipped (duplicates or invalid).
    pub skipped: u64,
}

/// POST /attendance/sync/upload with a non-CSV file.
#[derive(Debug, Clone, Serialize)]
pub struct UploadedOnlyResponse {
    /// Always `"uploaded_only"`.
    pub status: &'static str,
    /// Explanation of why nothing was parsed.
    pub message: String,
    /// The format automatic parsing supports.
    pub supported_parse_format: &'static str,
}

/// GET /reports/summary
#[derive(Debug, Clone, Serialize)]
pub struct ReportsSummaryResponse {
    /// Roster size.
    pub students: i64,
    /// Sum of agreed fee totals.
    pub fees_total: f64,
    /// Sum of paid amounts.
    pub fees_paid: f64,
    /// Outstanding across the ledger.
    pub fees_balance: f64,
    /// Present-class attendance rows.
    pub attendance_present: i64,
    /// Absent-class attendance rows.
    pub attendance_absent: i64,
}

/// GET /payments/gateway-status
#[derive(Debug, Clone, Serialize)]
pub struct GatewayStatusResponse {
    /// Whether the gateway credentials are configured.
    pub enabled: bool,
    /// Provider name.
    pub provider: &'static str,
    /// Human-readable status.
    pub message: String,
    /// Public key id, when configured.
    pub key_id: Option<String>,
}

/// POST /payments/razorpay/order
#[derive(Debug, Clone, Serialize)]
pub struct OrderResponse {
    /// Public key id for the client-side checkout.
    pub key_id: String,
    /// The raw gateway order object.
    pub order: Value,
    /// Student the order pays for.
    pub student_id: String,
    /// Order amount in INR.
    pub amount_inr: f64,
    /// Outstanding amount in INR.
    pub due_inr: f64,
    /// Student name.
    pub student_name: String,
}

/// Invoice payload returned after a verified payment.
#[derive(Debug, Clone, Serialize)]
pub struct Invoice {
    /// Invoice number.
    pub invoice_no: String,
    /// Issue date (`YYYY-MM-DD`).
    pub date: String,
    /// Student id.
    pub student_id: String,
    /// Student name.
    pub student_name: String,
    /// Course.
    pub course: String,
    /// Gateway payment id.
    pub payment_id: String,
    /// Gateway order id.
    pub order_id: String,
    /// Amount paid in this transaction.
    pub amount_paid: f64,
    /// Agreed total.
    pub amount_total: f64,
    /// Remaining balance.
    pub balance_due: f64,
}

/// POST /payments/razorpay/verify
#[derive(Debug, Clone, Serialize)]
pub struct VerifyPaymentResponse {
    /// Always `"ok"`.
    pub status: &'static str,
    /// Human-readable outcome.
    pub message: String,
    /// Amount recorded, in INR.
    pub amount_paid_inr: f64,
    /// The generated invoice.
    pub invoice: Invoice,
}

/// POST /admissions/apply
#[derive(Debug, Clone, Serialize)]
pub struct AdmissionSubmittedResponse {
    /// Always `"ok"`.
    pub status: &'static str,
    /// Human-readable outcome.
    pub message: String,
    /// The stored application id.
    pub admission_id: i64,
}

/// GET /health
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Always `"ok"`.
    pub status: &'static str,
    /// Whether the database answered the liveness query.
    pub database: bool,
}
