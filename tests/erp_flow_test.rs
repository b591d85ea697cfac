//! Integration tests for the surrounding ERP surface: admissions,
//! announcements, notifications, timetable, interviews, and the feed.

mod common;

use http::StatusCode;

#[tokio::test]
async fn admission_intake_is_public_and_review_is_not() {
    let app = common::TestApp::new().await;

    let submitted = app
        .request(
            "POST",
            "/admissions/apply",
            Some(serde_json::json!({
                "applicant_name": "New Applicant",
                "email": "applicant@example.com",
                "course": "Cabin Crew",
            })),
            None,
        )
        .await;
    assert_eq!(submitted.status, StatusCode::OK, "{:?}", submitted.body);
    assert_eq!(submitted.body["status"], "ok");

    let incomplete = app
        .request(
            "POST",
            "/admissions/apply",
            Some(serde_json::json!({"applicant_name": "", "email": "", "course": ""})),
            None,
        )
        .await;
    assert_eq!(incomplete.status, StatusCode::BAD_REQUEST);

    let unauthenticated = app.request("GET", "/admissions", None, None).await;
    assert_eq!(unauthenticated.status, StatusCode::UNAUTHORIZED);

    let student_view = app
        .request("GET", "/admissions", None, Some(&app.token_for("AAI701")))
        .await;
    assert_eq!(student_view.status, StatusCode::FORBIDDEN);

    let admin_view = app
        .request("GET", "/admissions", None, Some(&app.token_for("superuser")))
        .await;
    assert_eq!(admin_view.status, StatusCode::OK);
    assert_eq!(admin_view.body.as_array().unwrap().len(), 1);
    assert_eq!(admin_view.body[0]["applicant_name"], "New Applicant");
}

#[tokio::test]
async fn announcements_roundtrip() {
    let app = common::TestApp::new().await;
    let admin = app.token_for("superuser");

    let created = app
        .request(
            "POST",
            "/announcements",
            Some(serde_json::json!({"title": "Holiday", "message": "Campus closed Friday"})),
            Some(&admin),
        )
        .await;
    assert_eq!(created.status, StatusCode::OK);

    // Any authenticated principal can read announcements.
    let listed = app
        .request("GET", "/announcements", None, Some(&app.token_for("AAI701")))
        .await;
    assert_eq!(listed.status, StatusCode::OK);
    assert_eq!(listed.body[0]["title"], "Holiday");
    assert_eq!(listed.body[0]["created_by"], "superuser");
}

#[tokio::test]
async fn notifications_respect_targeting_and_read_state() {
    let app = common::TestApp::new().await;
    let admin = app.token_for("superuser");

    app.request(
        "POST",
        "/notifications",
        Some(serde_json::json!({"title": "For everyone", "message": "b"})),
        Some(&admin),
    )
    .await;
    app.request(
        "POST",
        "/notifications",
        Some(serde_json::json!({
            "title": "For Beta only", "message": "b", "target_user": "AAI702",
        })),
        Some(&admin),
    )
    .await;

    let alpha = app
        .request("GET", "/notifications", None, Some(&app.token_for("AAI701")))
        .await;
    assert_eq!(alpha.body.as_array().unwrap().len(), 1);

    let beta_token = app.token_for("AAI702");
    let beta = app
        .request("GET", "/notifications", None, Some(&beta_token))
        .await;
    let beta_rows = beta.body.as_array().unwrap().clone();
    assert_eq!(beta_rows.len(), 2);
    assert!(beta_rows.iter().all(|n| n["is_read"] == false));

    let target_id = beta_rows[0]["notification_id"].as_i64().unwrap();
    app.request(
        "POST",
        &format!("/notifications/{target_id}/read"),
        None,
        Some(&beta_token),
    )
    .await;

    let beta_after = app
        .request("GET", "/notifications", None, Some(&beta_token))
        .await;
    let read_flags: Vec<bool> = beta_after
        .body
        .as_array()
        .unwrap()
        .iter()
        .map(|n| {
            (
                n["notification_id"].as_i64().unwrap(),
                n["is_read"].as_bool().unwrap(),
            )
        })
        .map(|(id, read)| (id == target_id) == read)
        .collect();
    assert!(read_flags.iter().all(|ok| *ok));
}

#[tokio::test]
async fn timetable_is_filtered_by_course_and_batch() {
    let app = common::TestApp::new().await;
    app.seed_student("AAI702", "Beta Student", "Cabin Crew", "November")
        .await;
    let admin = app.token_for("superuser");

    for (title, course, batch) in [
        ("Safety drills", "Cabin Crew", "November"),
        ("Ramp walk", "Cabin Crew", "Oscar"),
        ("Ground radio", "Ground Operations", "Mike"),
        ("Assembly", "", ""),
    ] {
        app.request(
            "POST",
            "/timetable",
            Some(serde_json::json!({
                "title": title,
                "day_of_week": "Monday",
                "start_time": "09:00",
                "end_time": "10:00",
                "course": course,
                "batch": batch,
            })),
            Some(&admin),
        )
        .await;
    }

    let all = app.request("GET", "/timetable", None, Some(&admin)).await;
    assert_eq!(all.body.as_array().unwrap().len(), 4);

    let student = app
        .request("GET", "/timetable", None, Some(&app.token_for("AAI702")))
        .await;
    let titles: Vec<&str> = student
        .body
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["title"].as_str().unwrap())
        .collect();
    // Own course/batch plus the all-courses slot.
    assert!(titles.contains(&"Safety drills"));
    assert!(titles.contains(&"Assembly"));
    assert!(!titles.contains(&"Ramp walk"));
    assert!(!titles.contains(&"Ground radio"));
}

#[tokio::test]
async fn interviews_merge_manual_and_remark_derived_rows() {
    let app = common::TestApp::new().await;
    app.seed_attendance(
        "AAI702",
        "Beta Student",
        "2026-02-10",
        "Present",
        "Interview: IndiGo",
    )
    .await;
    let admin = app.token_for("superuser");

    app.request(
        "POST",
        "/interviews",
        Some(serde_json::json!({
            "airline_name": "Air India",
            "interview_date": "2026-02-12",
            "notes": "campus round",
        })),
        Some(&admin),
    )
    .await;

    let listed = app.request("GET", "/interviews", None, Some(&admin)).await;
    let rows = listed.body.as_array().unwrap().clone();
    assert_eq!(rows.len(), 2);

    // Sorted newest first: the manual stat on the 12th leads.
    assert_eq!(rows[0]["airline_name"], "Air India");
    assert_eq!(rows[0]["source"], "manual");
    assert_eq!(rows[1]["airline_name"], "IndiGo");
    assert_eq!(rows[1]["source"], "attendance_remark");
    assert_eq!(rows[1]["student_id"], "AAI702");

    // A student only sees their own derived rows.
    let other = app
        .request("GET", "/interviews", None, Some(&app.token_for("AAI701")))
        .await;
    let other_rows = other.body.as_array().unwrap().clone();
    assert_eq!(other_rows.len(), 1);
    assert_eq!(other_rows[0]["source"], "manual");
}

#[tokio::test]
async fn feed_aggregates_scope_dependent_content() {
    let app = common::TestApp::new().await;
    app.seed_student("AAI702", "Beta Student", "Cabin Crew", "November")
        .await;
    app.seed_fee("AAI702", 250000.0, 3500.0, "first installment")
        .await;
    let admin = app.token_for("superuser");

    app.request(
        "POST",
        "/announcements",
        Some(serde_json::json!({"title": "Welcome", "message": "hi"})),
        Some(&admin),
    )
    .await;

    let feed = app
        .request("GET", "/feed", None, Some(&app.token_for("AAI702")))
        .await;
    assert_eq!(feed.status, StatusCode::OK);
    assert_eq!(feed.body["fees"]["due"], 246500.0);
    assert_eq!(feed.body["announcements"][0]["title"], "Welcome");

    let admin_feed = app.request("GET", "/feed", None, Some(&admin)).await;
    assert_eq!(admin_feed.body["fees"]["total"], 250000.0);
}

#[tokio::test]
async fn gateway_status_reports_unconfigured() {
    let app = common::TestApp::new().await;

    let response = app
        .request(
            "GET",
            "/payments/gateway-status",
            None,
            Some(&app.token_for("AAI701")),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["enabled"], false);
    assert_eq!(response.body["provider"], "razorpay");

    // With no keys configured, order creation is a 503.
    let order = app
        .request(
            "POST",
            "/payments/razorpay/order",
            Some(serde_json::json!({})),
            Some(&app.token_for("AAI701")),
        )
        .await;
    assert_eq!(order.status, StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn student_creation_generates_id_and_credentials() {
    let app = common::TestApp::new().await;
    let admin = app.token_for("superuser");

    let created = app
        .request(
            "POST",
            "/students?student_name=New%20Student&course=Cabin%20Crew&batch=Oscar",
            None,
            Some(&admin),
        )
        .await;
    assert_eq!(created.status, StatusCode::OK, "{:?}", created.body);

    let student_id = created.body["student_id"].as_str().unwrap().to_string();
    assert!(student_id.starts_with("AAI"));
    assert!(app.stored_secret(&student_id).is_some());
}
