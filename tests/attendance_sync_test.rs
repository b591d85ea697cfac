//! Integration tests for bulk attendance reconciliation.

mod common;

use http::StatusCode;

const CSV_HEADER: &str = "student_id,student_name,course,batch,date,attendance_status,remarks";

#[tokio::test]
async fn identical_rows_collapse_into_one() {
    let app = common::TestApp::new().await;
    let token = app.token_for("superuser");

    let csv = format!(
        "{CSV_HEADER}\n\
         AAI701,Alpha Student,Ground Operations,Mike,2026-03-15,P,\n\
         AAI701,Alpha Student,Ground Operations,Mike,2026-03-15,P,\n"
    );

    let response = app
        .upload("/attendance/sync/upload", "log.csv", &csv, &token)
        .await;

    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    assert_eq!(response.body["inserted"], 1);
    assert_eq!(response.body["skipped"], 1);
}

#[tokio::test]
async fn rows_differing_only_in_remarks_are_both_kept() {
    let app = common::TestApp::new().await;
    let token = app.token_for("superuser");

    let csv = format!(
        "{CSV_HEADER}\n\
         AAI701,Alpha Student,Ground Operations,Mike,2026-03-15,P,\n\
         AAI701,Alpha Student,Ground Operations,Mike,2026-03-15,P,Interview: IndiGo\n"
    );

    let response = app
        .upload("/attendance/sync/upload", "log.csv", &csv, &token)
        .await;

    assert_eq!(response.body["inserted"], 2);
    assert_eq!(response.body["skipped"], 0);
}

#[tokio::test]
async fn dates_and_statuses_are_normalized_on_import() {
    let app = common::TestApp::new().await;
    let token = app.token_for("superuser");

    let csv = format!(
        "{CSV_HEADER}\n\
         AAI701,Alpha Student,Ground Operations,Mike,15-03-2026,p,\n\
         AAI702,Beta Student,Cabin Crew,November,15032026,on-duty,\n\
         AAI703,Gamma Student,Cabin Crew,November,2026-03-15,,\n"
    );

    let response = app
        .upload("/attendance/sync/upload", "log.csv", &csv, &token)
        .await;
    assert_eq!(response.body["inserted"], 3);

    let rows = app
        .request(
            "GET",
            "/attendance/by-date?date=2026-03-15",
            None,
            Some(&token),
        )
        .await;
    let rows = rows.body.as_array().unwrap().clone();
    assert_eq!(rows.len(), 3);

    let status_of = |id: &str| {
        rows.iter()
            .find(|r| r["student_id"] == id)
            .map(|r| r["attendance_status"].as_str().unwrap().to_string())
            .unwrap()
    };
    assert_eq!(status_of("AAI701"), "Present");
    assert_eq!(status_of("AAI702"), "On-duty");
    // Empty status defaults to Absent rather than dropping the row.
    assert_eq!(status_of("AAI703"), "Absent");
}

#[tokio::test]
async fn missing_columns_abort_the_whole_batch() {
    let app = common::TestApp::new().await;
    let token = app.token_for("superuser");

    let csv = "student_id,student_name,date\nAAI701,Alpha Student,2026-03-15\n";

    let response = app
        .upload("/attendance/sync/upload", "log.csv", csv, &token)
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    let message = response.body["message"].as_str().unwrap();
    assert!(message.contains("course"), "{message}");
    assert!(message.contains("batch"), "{message}");
    assert!(message.contains("attendance_status"), "{message}");
}

#[tokio::test]
async fn malformed_rows_are_skipped_without_aborting() {
    let app = common::TestApp::new().await;
    let token = app.token_for("superuser");

    let csv = format!(
        "{CSV_HEADER}\n\
         ,Alpha Student,Ground Operations,Mike,2026-03-15,P,\n\
         AAI702,Beta Student,Cabin Crew,November,,P,\n\
         AAI703,Gamma Student,Cabin Crew,November,2026-03-15,P,\n"
    );

    let response = app
        .upload("/attendance/sync/upload", "log.csv", &csv, &token)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["inserted"], 1);
    assert_eq!(response.body["skipped"], 2);
}

#[tokio::test]
async fn upload_replaces_prior_attendance() {
    let app = common::TestApp::new().await;
    app.seed_attendance("AAI700", "Old Student", "2026-01-01", "Present", "")
        .await;
    let token = app.token_for("superuser");

    let csv = format!(
        "{CSV_HEADER}\n\
         AAI701,Alpha Student,Ground Operations,Mike,2026-03-15,P,\n"
    );
    app.upload("/attendance/sync/upload", "log.csv", &csv, &token)
        .await;

    let old = app
        .request(
            "GET",
            "/attendance/by-date?date=2026-01-01",
            None,
            Some(&token),
        )
        .await;
    assert_eq!(old.body.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn import_upserts_roster_and_provisions_credentials() {
    let app = common::TestApp::new().await;
    app.seed_student("AAI701", "Original Name", "Ground Operations", "Mike")
        .await;
    let token = app.token_for("superuser");

    let csv = format!(
        "{CSV_HEADER}\n\
         AAI701,Different Name,Cabin Crew,November,2026-03-15,P,\n\
         AAI799,New Student,Cabin Crew,November,2026-03-15,P,\n"
    );
    app.upload("/attendance/sync/upload", "log.csv", &csv, &token)
        .await;

    let students = app.request("GET", "/students", None, Some(&token)).await;
    let rows = students.body.as_array().unwrap().clone();
    assert_eq!(rows.len(), 2);

    // Existing roster entries are never overwritten by imports.
    let original = rows.iter().find(|r| r["student_id"] == "AAI701").unwrap();
    assert_eq!(original["student_name"], "Original Name");

    // The new student got a credential entry.
    assert!(app.stored_secret("AAI799").is_some());
}

#[tokio::test]
async fn non_csv_upload_is_acknowledged_not_parsed() {
    let app = common::TestApp::new().await;
    let token = app.token_for("superuser");

    let response = app
        .upload("/attendance/sync/upload", "log.xlsx", "binary!", &token)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "uploaded_only");
    assert_eq!(response.body["supported_parse_format"], "csv");
}

#[tokio::test]
async fn manual_record_suppresses_duplicates() {
    let app = common::TestApp::new().await;
    let token = app.token_for("superuser");

    let payload = serde_json::json!({
        "date": "2026-03-15",
        "records": [
            {"student_id": "AAI701", "student_name": "Alpha Student",
             "course": "Ground Operations", "batch": "Mike",
             "attendance_status": "present"},
        ],
    });

    let first = app
        .request("POST", "/attendance/record", Some(payload.clone()), Some(&token))
        .await;
    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(first.body["count"], 1);

    // Re-submitting the same record does not duplicate the row.
    app.request("POST", "/attendance/record", Some(payload), Some(&token))
        .await;

    let rows = app
        .request(
            "GET",
            "/attendance/by-date?date=2026-03-15",
            None,
            Some(&token),
        )
        .await;
    assert_eq!(rows.body.as_array().unwrap().len(), 1);
    assert_eq!(rows.body[0]["attendance_status"], "Present");
}

#[tokio::test]
async fn empty_manual_submission_is_rejected() {
    let app = common::TestApp::new().await;
    let token = app.token_for("superuser");

    let response = app
        .request(
            "POST",
            "/attendance/record",
            Some(serde_json::json!({"date": "2026-03-15", "records": []})),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}
