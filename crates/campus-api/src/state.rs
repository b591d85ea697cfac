//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use sqlx::SqlitePool;

use campus_auth::credentials::{CredentialVault, FileCredentialStore};
use campus_auth::session::{MemorySessionStore, SessionStore};
use campus_core::config::AppConfig;
use campus_database::repositories::admission::AdmissionRepository;
use campus_database::repositories::announcement::AnnouncementRepository;
use campus_database::repositories::attendance::AttendanceRepository;
use campus_database::repositories::fee::FeeRepository;
use campus_database::repositories::interview::InterviewRepository;
use campus_database::repositories::notification::NotificationRepository;
use campus_database::repositories::student::StudentRepository;
use campus_database::repositories::timetable::TimetableRepository;
use campus_service::attendance::AttendanceReconciler;
use campus_service::feed::FeedService;
use campus_service::finance::FinanceService;
use campus_service::interviews::InterviewService;
use campus_service::roster::RosterService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`. All fields are
/// `Arc`-wrapped for cheap cloning across tasks; the session table in
/// particular exists exactly once per process.
#[derive(Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// SQLite connection pool
    pub db_pool: SqlitePool,
    /// Shared HTTP client (payment gateway calls)
    pub http: reqwest::Client,

    // ── Auth ─────────────────────────────────────────────────
    /// In-memory session table
    pub sessions: Arc<dyn SessionStore>,
    /// Credential vault
    pub vault: Arc<CredentialVault>,

    // ── Repositories ─────────────────────────────────────────
    /// Student roster repository
    pub student_repo: Arc<StudentRepository>,
    /// Attendance repository
    pub attendance_repo: Arc<AttendanceRepository>,
    /// Fee ledger repository
    pub fee_repo: Arc<FeeRepository>,
    /// Timetable repository
    pub timetable_repo: Arc<TimetableRepository>,
    /// Interview stats repository
    pub interview_repo: Arc<InterviewRepository>,
    /// Announcement repository
    pub announcement_repo: Arc<AnnouncementRepository>,
    /// Notification repository
    pub notification_repo: Arc<NotificationRepository>,
    /// Admissions repository
    pub admission_repo: Arc<AdmissionRepository>,

    // ── Services ─────────────────────────────────────────────
    /// Roster service
    pub roster: Arc<RosterService>,
    /// Attendance reconciler
    pub reconciler: Arc<AttendanceReconciler>,
    /// Finance service
    pub finance: Arc<FinanceService>,
    /// Interview service
    pub interviews: Arc<InterviewService>,
    /// Feed service
    pub feed: Arc<FeedService>,
}

impl AppState {
    /// Wire the full dependency graph over an existing pool.
    ///
    /// Used by the server binary and by integration tests, so both run
    /// the identical object graph.
    pub fn build(config: AppConfig, db_pool: SqlitePool) -> Self {
        let config = Arc::new(config);

        let sessions: Arc<dyn SessionStore> =
            Arc::new(MemorySessionStore::from_config(&config.session));
        let credential_store = Arc::new(FileCredentialStore::new(&config.credentials.path));
        let vault = Arc::new(CredentialVault::new(
            credential_store,
            config.credentials.clone(),
        ));

        let student_repo = Arc::new(StudentRepository::new(db_pool.clone()));
        let attendance_repo = Arc::new(AttendanceRepository::new(db_pool.clone()));
        let fee_repo = Arc::new(FeeRepository::new(db_pool.clone()));
        let timetable_repo = Arc::new(TimetableRepository::new(db_pool.clone()));
        let interview_repo = Arc::new(InterviewRepository::new(db_pool.clone()));
        let announcement_repo = Arc::new(AnnouncementRepository::new(db_pool.clone()));
        let notification_repo = Arc::new(NotificationRepository::new(db_pool.clone()));
        let admission_repo = Arc::new(AdmissionRepository::new(db_pool.clone()));

        let roster = Arc::new(RosterService::new(
            Arc::clone(&student_repo),
            Arc::clone(&vault),
        ));
        let reconciler = Arc::new(AttendanceReconciler::new(
            Arc::clone(&attendance_repo),
            Arc::clone(&student_repo),
            Arc::clone(&vault),
        ));
        let finance = Arc::new(FinanceService::new(
            Arc::clone(&fee_repo),
            Arc::clone(&student_repo),
        ));
        let interviews = Arc::new(InterviewService::new(
            Arc::clone(&interview_repo),
            Arc::clone(&attendance_repo),
        ));
        let feed = Arc::new(FeedService::new(
            Arc::clone(&finance),
            Arc::clone(&interviews),
            Arc::clone(&announcement_repo),
            Arc::clone(&notification_repo),
        ));

        Self {
            config,
            db_pool,
            http: reqwest::Client::new(),
            sessions,
            vault,
            student_repo,
            attendance_repo,
            fee_repo,
            timetable_repo,
            interview_repo,
            announcement_repo,
            notification_repo,
            admission_repo,
            roster,
            reconciler,
            finance,
            interviews,
            feed,
        }
    }
}
