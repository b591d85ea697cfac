//! Shared test harness for integration tests.
//!
//! Builds the real router over an in-memory SQLite pool and a
//! throwaway credentials file, so every test drives the identical
//! object graph the server binary runs.

// Not every test target uses every helper.
#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::Value;
use sqlx::sqlite::SqlitePoolOptions;
use tower::ServiceExt;

use campus_api::state::AppState;
use campus_core::config::AppConfig;

/// Test application context.
pub struct TestApp {
    /// The Axum router for making test requests.
    pub router: Router,
    /// The wired application state, for direct access to stores.
    pub state: AppState,
    /// Path of the throwaway credentials file.
    pub credentials_path: String,
}

impl TestApp {
    /// Create a test application with the default session timeout.
    pub async fn new() -> Self {
        Self::with_session_timeout(300).await
    }

    /// Create a test application with a custom idle timeout in seconds.
    pub async fn with_session_timeout(idle_timeout_seconds: u64) -> Self {
        let credentials_path = std::env::temp_dir()
            .join(format!("campus-test-creds-{}.txt", uuid::Uuid::new_v4()))
            .display()
            .to_string();

        let mut config = AppConfig::default();
        config.credentials.path = credentials_path.clone();
        config.session.idle_timeout_seconds = idle_timeout_seconds;

        let db_pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await
            .expect("Failed to open in-memory database");

        campus_database::migration::run_migrations(&db_pool)
            .await
            .expect("Failed to run migrations");

        let state = AppState::build(config, db_pool);
        let router = campus_api::router::build_router(state.clone());

        Self {
            router,
            state,
            credentials_path,
        }
    }

    /// Insert a roster entry directly.
    pub async fn seed_student(&self, student_id: &str, name: &str, course: &str, batch: &str) {
        sqlx::query(
            "INSERT INTO students (student_id, student_name, course, batch, created_at)
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(student_id)
        .bind(name)
        .bind(course)
        .bind(batch)
        .bind(chrono_now())
        .execute(&self.state.db_pool)
        .await
        .expect("Failed to seed student");
    }

    /// Insert a fee entry directly.
    pub async fn seed_fee(&self, student_id: &str, total: f64, paid: f64, remarks: &str) {
        sqlx::query(
            "INSERT INTO fees (student_id, amount_total, amount_paid, remarks, created_at)
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(student_id)
        .bind(total)
        .bind(paid)
        .bind(remarks)
        .bind(chrono_now())
        .execute(&self.state.db_pool)
        .await
        .expect("Failed to seed fee");
    }

    /// Insert an attendance row directly.
    pub async fn seed_attendance(
        &self,
        student_id: &str,
        name: &str,
        date: &str,
        status: &str,
        remarks: &str,
    ) {
        sqlx::query(
            "INSERT INTO attendance
             (student_id, student_name, course, batch, date, attendance_status, remarks)
             VALUES (?, ?, '', '', ?, ?, ?)",
        )
        .bind(student_id)
        .bind(name)
        .bind(date)
        .bind(status)
        .bind(remarks)
        .execute(&self.state.db_pool)
        .await
        .expect("Failed to seed attendance");
    }

    /// Issue a session token for a principal without going through the
    /// login handler.
    pub fn token_for(&self, principal: &str) -> String {
        self.state.sessions.create(principal)
    }

    /// Read a student's generated secret from the credentials file.
    /// The file exists once any login or import has reconciled it.
    pub fn stored_secret(&self, principal: &str) -> Option<String> {
        let text = std::fs::read_to_string(&self.credentials_path).ok()?;
        text.lines().find_map(|line| {
            let (user, secret) = line.split_once(':')?;
            (user == principal).then(|| secret.to_string())
        })
    }

    /// Login through the HTTP endpoint and return the issued token.
    pub async fn login(&self, username: &str, password: &str) -> String {
        let response = self
            .request(
                "POST",
                "/login",
                Some(serde_json::json!({
                    "username": username,
                    "password": password,
                })),
                None,
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Login failed: {:?}",
            response.body
        );

        response
            .body
            .get("token")
            .and_then(|v| v.as_str())
            .expect("No token in login response")
            .to_string()
    }

    /// Make a JSON HTTP request to the test app.
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {token}"));
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        self.send(req).await
    }

    /// Upload a file through a multipart request.
    pub async fn upload(
        &self,
        path: &str,
        file_name: &str,
        contents: &str,
        token: &str,
    ) -> TestResponse {
        let boundary = "campus-test-boundary";
        let body = format!(
            "--{boundary}\r\n\
             Content-Disposition: form-data; name=\"file\"; filename=\"{file_name}\"\r\n\
             Content-Type: text/csv\r\n\r\n\
             {contents}\r\n\
             --{boundary}--\r\n"
        );

        let req = Request::builder()
            .method("POST")
            .uri(path)
            .header(
                "Content-Type",
                format!("multipart/form-data; boundary={boundary}"),
            )
            .header("Authorization", format!("Bearer {token}"))
            .body(Body::from(body))
            .expect("Failed to build upload request");

        self.send(req).await
    }

    async fn send(&self, req: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.credentials_path);
    }
}

/// Response from a test request.
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code.
    pub status: StatusCode,
    /// Parsed JSON body (Null for non-JSON responses).
    pub body: Value,
}

fn chrono_now() -> String {
    // RFC 3339, matching how the repositories bind timestamps.
    chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Micros, true)
}
