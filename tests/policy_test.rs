//! Integration tests for the authorization policy: rejecting gates on
//! single-resource endpoints, filtering on list endpoints.

mod common;

use http::StatusCode;

async fn seeded_app() -> common::TestApp {
    let app = common::TestApp::new().await;
    app.seed_student("AAI701", "Alpha Student", "Ground Operations", "Mike")
        .await;
    app.seed_student("AAI702", "Beta Student", "Cabin Crew", "November")
        .await;
    app.seed_fee("AAI702", 10000.0, 3500.0, "first installment").await;
    app.seed_attendance("AAI702", "Beta Student", "2026-02-10", "Present", "")
        .await;
    app
}

#[tokio::test]
async fn student_list_returns_only_self() {
    let app = seeded_app().await;
    let token = app.token_for("AAI702");

    let response = app.request("GET", "/students", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::OK);

    let rows = response.body.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["student_id"], "AAI702");
}

#[tokio::test]
async fn superuser_sees_full_roster() {
    let app = seeded_app().await;
    let token = app.token_for("superuser");

    let response = app.request("GET", "/students", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn student_cannot_view_another_balance() {
    let app = seeded_app().await;
    let token = app.token_for("AAI702");

    let response = app
        .request("GET", "/students/AAI701/balance", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn student_can_view_own_balance_with_fee_plan() {
    let app = seeded_app().await;
    let token = app.token_for("AAI702");

    let response = app
        .request("GET", "/students/AAI702/balance", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    // Cabin Crew carries a planned total of 250000; 3500 paid so far.
    assert_eq!(response.body["total"], 250000.0);
    assert_eq!(response.body["paid"], 3500.0);
    assert_eq!(response.body["balance"], 246500.0);
    assert_eq!(response.body["gst_percent"], 18);
}

#[tokio::test]
async fn superuser_can_view_any_balance() {
    let app = seeded_app().await;
    let token = app.token_for("superuser");

    let response = app
        .request("GET", "/students/AAI702/balance", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let missing = app
        .request("GET", "/students/NOPE/balance", None, Some(&token))
        .await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn reports_are_superuser_only() {
    let app = seeded_app().await;

    let student = app
        .request(
            "GET",
            "/reports/summary",
            None,
            Some(&app.token_for("AAI702")),
        )
        .await;
    assert_eq!(student.status, StatusCode::FORBIDDEN);

    let admin = app
        .request(
            "GET",
            "/reports/summary",
            None,
            Some(&app.token_for("superuser")),
        )
        .await;
    assert_eq!(admin.status, StatusCode::OK);
    assert_eq!(admin.body["students"], 2);
    assert_eq!(admin.body["fees_total"], 10000.0);
    assert_eq!(admin.body["fees_paid"], 3500.0);
    assert_eq!(admin.body["attendance_present"], 1);
}

#[tokio::test]
async fn attendance_listings_are_scoped() {
    let app = seeded_app().await;
    app.seed_attendance("AAI701", "Alpha Student", "2026-02-10", "Absent", "")
        .await;

    let student = app
        .request(
            "GET",
            "/attendance/recent",
            None,
            Some(&app.token_for("AAI702")),
        )
        .await;
    assert_eq!(student.status, StatusCode::OK);
    let rows = student.body.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["student_id"], "AAI702");

    let admin = app
        .request(
            "GET",
            "/attendance/by-date?date=2026-02-10",
            None,
            Some(&app.token_for("superuser")),
        )
        .await;
    assert_eq!(admin.body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn mutating_endpoints_require_superuser() {
    let app = seeded_app().await;
    let token = app.token_for("AAI702");

    let add_student = app
        .request(
            "POST",
            "/students?student_name=New&course=Cabin%20Crew&batch=Oscar",
            None,
            Some(&token),
        )
        .await;
    assert_eq!(add_student.status, StatusCode::FORBIDDEN);

    let sync = app
        .request("POST", "/attendance/sync", None, Some(&token))
        .await;
    assert_eq!(sync.status, StatusCode::FORBIDDEN);

    let announce = app
        .request(
            "POST",
            "/announcements",
            Some(serde_json::json!({"title": "T", "message": "M"})),
            Some(&token),
        )
        .await;
    assert_eq!(announce.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn fees_listings_are_scoped() {
    let app = seeded_app().await;

    let own = app
        .request("GET", "/fees/recent", None, Some(&app.token_for("AAI702")))
        .await;
    assert_eq!(own.body.as_array().unwrap().len(), 1);

    let other = app
        .request("GET", "/fees/recent", None, Some(&app.token_for("AAI701")))
        .await;
    assert_eq!(other.body.as_array().unwrap().len(), 0);

    let summary = app
        .request("GET", "/fees/summary", None, Some(&app.token_for("AAI702")))
        .await;
    assert_eq!(summary.body["course"], "Cabin Crew");
    assert_eq!(summary.body["due"], 246500.0);
}
