//! Request DTOs.

use serde::Deserialize;

use campus_service::attendance::ManualRecord;

/// POST /login
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    /// Principal name (superuser or student id).
    pub username: String,
    /// Shared secret.
    pub password: String,
}

/// POST /students (query parameters)
#[derive(Debug, Clone, Deserialize)]
pub struct AddStudentParams {
    /// Full name.
    pub student_name: String,
    /// Enrolled course.
    pub course: String,
    /// Batch label.
    pub batch: String,
}

/// GET /attendance/by-date
#[derive(Debug, Clone, Deserialize)]
pub struct ByDateParams {
    /// Date to list (`YYYY-MM-DD`).
    #[serde(default)]
    pub date: String,
}

/// POST /attendance/record
#[derive(Debug, Clone, Deserialize)]
pub struct AttendanceSubmission {
    /// Date all records apply to.
    pub date: String,
    /// The per-student records.
    #[serde(default)]
    pub records: Vec<ManualRecord>,
}

/// POST /interviews
#[derive(Debug, Clone, Deserialize)]
pub struct CreateInterviewRequest {
    /// Airline or employer name.
    #[serde(default)]
    pub airline_name: String,
    /// Interview date.
    #[serde(default)]
    pub interview_date: String,
    /// Notes.
    #[serde(default)]
    pub notes: String,
}

/// POST /announcements
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAnnouncementRequest {
    /// Title.
    #[serde(default)]
    pub title: String,
    /// Body text.
    #[serde(default)]
    pub message: String,
}

/// POST /notifications
#[derive(Debug, Clone, Deserialize)]
pub struct CreateNotificationRequest {
    /// Title.
    #[serde(default)]
    pub title: String,
    /// Body text.
    #[serde(default)]
    pub message: String,
    /// Severity level.
    #[serde(default = "default_level")]
    pub level: String,
    /// Target principal; omit to broadcast.
    #[serde(default)]
    pub target_user: Option<String>,
}

/// POST /payments/razorpay/order
#[derive(Debug, Clone, Deserialize)]
pub struct CreateOrderRequest {
    /// Student to pay for; defaults to the calling principal.
    #[serde(default)]
    pub student_id: Option<String>,
    /// Amount in INR; defaults to the full due amount.
    #[serde(default)]
    pub amount_inr: Option<f64>,
}

/// POST /payments/razorpay/verify
#[derive(Debug, Clone, Deserialize)]
pub struct VerifyPaymentRequest {
    /// Student the payment applies to.
    pub student_id: String,
    /// Gateway order id.
    pub razorpay_order_id: String,
    /// Gateway payment id.
    pub razorpay_payment_id: String,
    /// Gateway HMAC signature over `order_id|payment_id`.
    pub razorpay_signature: String,
    /// Amount the client reports as paid, in INR.
    #[serde(default)]
    pub amount_paid_inr: f64,
}

fn default_level() -> String {
    "info".to_string()
}
