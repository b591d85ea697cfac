//! Route definitions for the Campus ERP HTTP API.
//!
//! The session gate is applied to the whole router; paths on the
//! public allowlist (see `campus_auth::policy`) pass through it
//! untouched.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::middleware::cors::build_cors_layer;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let max_body = state.config.server.max_body_bytes as usize;
    let cors = build_cors_layer(&state.config.server.cors);

    let mut router = Router::new()
        .route("/", get(handlers::health::index))
        .route("/health", get(handlers::health::health))
        .route("/login", post(handlers::auth::login))
        .route("/auth/me", get(handlers::auth::me))
        .merge(student_routes())
        .merge(attendance_routes())
        .merge(fee_routes())
        .merge(payment_routes())
        .merge(timetable_routes())
        .merge(interview_routes())
        .merge(broadcast_routes())
        .merge(admission_routes())
        .route("/reports/summary", get(handlers::reports::summary))
        .route("/feed", get(handlers::feed::feed));

    if !state.config.storage.static_dir.is_empty() {
        router = router.nest_service(
            "/static",
            ServeDir::new(&state.config.storage.static_dir),
        );
    }

    router
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::auth::require_session,
        ))
        .layer(DefaultBodyLimit::max(max_body))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Roster endpoints.
fn student_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/students",
            get(handlers::students::list).post(handlers::students::create),
        )
        .route("/students/ids", get(handlers::students::ids))
        .route("/students/{id}/balance", get(handlers::students::balance))
        .route(
            "/students/{id}/attendance",
            get(handlers::students::attendance),
        )
        .route("/students/{id}/fees", get(handlers::students::fees))
}

/// Attendance listings and reconciliation.
fn attendance_routes() -> Router<AppState> {
    Router::new()
        .route("/attendance/recent", get(handlers::attendance::recent))
        .route("/attendance/by-date", get(handlers::attendance::by_date))
        .route("/attendance/record", post(handlers::attendance::record))
        .route("/attendance/sync", post(handlers::attendance::sync))
        .route(
            "/attendance/sync/upload",
            post(handlers::attendance::sync_upload),
        )
}

/// Fee ledger endpoints.
fn fee_routes() -> Router<AppState> {
    Router::new()
        .route("/fees/recent", get(handlers::fees::recent))
        .route("/fees/summary", get(handlers::fees::summary))
        .route("/fees/record", post(handlers::fees::record))
}

/// Payment gateway endpoints.
fn payment_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/payments/gateway-status",
            get(handlers::payments::gateway_status),
        )
        .route(
            "/payments/razorpay/order",
            post(handlers::payments::create_order),
        )
        .route(
            "/payments/razorpay/verify",
            post(handlers::payments::verify_payment),
        )
}

/// Timetable endpoints.
fn timetable_routes() -> Router<AppState> {
    Router::new().route(
        "/timetable",
        get(handlers::timetable::list).post(handlers::timetable::create),
    )
}

/// Interview stats endpoints.
fn interview_routes() -> Router<AppState> {
    Router::new().route(
        "/interviews",
        get(handlers::interviews::list).post(handlers::interviews::create),
    )
}

/// Announcements and notifications.
fn broadcast_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/announcements",
            get(handlers::announcements::list).post(handlers::announcements::create),
        )
        .route(
            "/notifications",
            get(handlers::notifications::list).post(handlers::notifications::create),
        )
        .route(
            "/notifications/{id}/read",
            post(handlers::notifications::mark_read),
        )
}

/// Admissions intake and review.
fn admission_routes() -> Router<AppState> {
    Router::new()
        .route("/admissions/apply", post(handlers::admissions::apply))
        .route("/admissions", get(handlers::admissions::list))
}
