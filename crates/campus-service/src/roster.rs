//! Roster service — student listing and creation, with credential
//! provisioning kept in lockstep.

use std::sync::Arc;

use rand::RngExt;
use tracing::info;

use campus_auth::{AccessScope, CredentialVault};
use campus_core::error::{AppError, ErrorKind};
use campus_core::result::AppResult;
use campus_database::repositories::student::StudentRepository;
use campus_entity::student::{NewStudent, Student};

/// Prefix for generated student ids.
const ID_PREFIX: &str = "AAI";
/// Attempts at generating an unused id before giving up.
const ID_ATTEMPTS: u32 = 32;

/// Roster operations.
pub struct RosterService {
    student_repo: Arc<StudentRepository>,
    vault: Arc<CredentialVault>,
}

impl RosterService {
    /// Create a roster service.
    pub fn new(student_repo: Arc<StudentRepository>, vault: Arc<CredentialVault>) -> Self {
        Self {
            student_repo,
            vault,
        }
    }

    /// List roster entries under the caller's scope.
    pub async fn list(&self, scope: &AccessScope) -> AppResult<Vec<Student>> {
        self.student_repo.list(scope.filter()).await
    }

    /// Bare student-id list, served publicly for the login form.
    pub async fn public_ids(&self) -> AppResult<Vec<String>> {
        self.student_repo.list_ids().await
    }

    /// Create a roster entry with a generated `AAI<nnn>` id, then
    /// reconcile credentials so the new student can log in immediately.
    pub async fn create(&self, new: &NewStudent) -> AppResult<String> {
        if new.student_name.trim().is_empty()
            || new.course.trim().is_empty()
            || new.batch.trim().is_empty()
        {
            return Err(AppError::validation("Missing required fields"));
        }

        let mut last_err = None;
        let mut created_id = None;
        for _ in 0..ID_ATTEMPTS {
            let candidate = format!("{ID_PREFIX}{}", rand::rng().random_range(100..1000));
            match self
                .student_repo
                .insert(
                    &candidate,
                    new.student_name.trim(),
                    new.course.trim(),
                    new.batch.trim(),
                )
                .await
            {
                Ok(()) => {
                    created_id = Some(candidate);
                    break;
                }
                Err(e) if e.kind == ErrorKind::Conflict => {
                    last_err = Some(e);
                }
                Err(e) => return Err(e),
            }
        }

        let student_id = created_id.ok_or_else(|| {
            last_err.unwrap_or_else(|| AppError::internal("Failed to allocate a student id"))
        })?;

        let roster_ids = self.student_repo.list_ids().await?;
        self.vault.reconcile(&roster_ids).await?;

        info!(student_id = %student_id, "Student added to roster");
        Ok(student_id)
    }
}
