//! Integration tests for login and session handling.

mod common;

use http::StatusCode;

#[tokio::test]
async fn login_as_superuser_with_default_secret() {
    let app = common::TestApp::new().await;

    let token = app.login("superuser", "qwerty").await;

    let response = app.request("GET", "/auth/me", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["role"], "superuser");
    assert_eq!(response.body["user"], "superuser");
}

#[tokio::test]
async fn login_provisions_and_accepts_student_secret() {
    let app = common::TestApp::new().await;
    app.seed_student("AAI701", "Alpha Student", "Ground Operations", "Mike")
        .await;

    // Any login reconciles credentials first, so the student's secret
    // exists after a (failed) attempt.
    let response = app
        .request(
            "POST",
            "/login",
            Some(serde_json::json!({"username": "AAI701", "password": "wrong"})),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    let secret = app
        .stored_secret("AAI701")
        .expect("credential was not provisioned");
    assert_eq!(secret.len(), 8);

    let token = app.login("AAI701", &secret).await;
    let response = app.request("GET", "/auth/me", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["role"], "student");
    assert_eq!(response.body["student_name"], "Alpha Student");
    assert_eq!(response.body["first_name"], "Alpha");
    assert_eq!(response.body["course"], "Ground Operations");
}

#[tokio::test]
async fn invalid_credentials_are_indistinguishable() {
    let app = common::TestApp::new().await;
    app.seed_student("AAI701", "Alpha Student", "Ground Operations", "Mike")
        .await;

    let unknown = app
        .request(
            "POST",
            "/login",
            Some(serde_json::json!({"username": "nobody", "password": "x"})),
            None,
        )
        .await;
    let wrong = app
        .request(
            "POST",
            "/login",
            Some(serde_json::json!({"username": "AAI701", "password": "x"})),
            None,
        )
        .await;

    assert_eq!(unknown.status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong.status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown.body, wrong.body);
    assert_eq!(wrong.body["message"], "Invalid credentials");
}

#[tokio::test]
async fn protected_routes_reject_missing_or_unknown_tokens() {
    let app = common::TestApp::new().await;

    let missing = app.request("GET", "/students", None, None).await;
    assert_eq!(missing.status, StatusCode::UNAUTHORIZED);
    assert_eq!(missing.body["message"], "Unauthorized");

    let unknown = app
        .request("GET", "/students", None, Some("not-a-real-token"))
        .await;
    assert_eq!(unknown.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn idle_session_expires_with_distinct_message() {
    let app = common::TestApp::with_session_timeout(1).await;
    let token = app.token_for("superuser");

    // Fresh token works.
    let response = app.request("GET", "/auth/me", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::OK);

    tokio::time::sleep(std::time::Duration::from_millis(1200)).await;

    let expired = app.request("GET", "/auth/me", None, Some(&token)).await;
    assert_eq!(expired.status, StatusCode::UNAUTHORIZED);
    assert_eq!(expired.body["message"], "Session expired");
}

#[tokio::test]
async fn public_paths_bypass_authentication() {
    let app = common::TestApp::new().await;
    app.seed_student("AAI701", "Alpha Student", "Ground Operations", "Mike")
        .await;

    let ids = app.request("GET", "/students/ids", None, None).await;
    assert_eq!(ids.status, StatusCode::OK);
    assert_eq!(ids.body, serde_json::json!(["AAI701"]));

    let health = app.request("GET", "/health", None, None).await;
    assert_eq!(health.status, StatusCode::OK);
    assert_eq!(health.body["database"], true);

    let root = app.request("GET", "/", None, None).await;
    assert_eq!(root.status, StatusCode::OK);
}
