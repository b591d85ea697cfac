//! Authorization policy.
//!
//! Two distinct per-endpoint policies exist and must not be conflated:
//! single-resource endpoints *reject* out-of-scope callers with
//! `Forbidden`, while list endpoints *filter* — a self-scoped caller
//! transparently receives only rows matching their own identifier.

use campus_core::error::AppError;
use campus_core::result::AppResult;
use campus_entity::Role;

/// Query scope applied to list endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessScope {
    /// No narrowing: the caller sees every row.
    All,
    /// Rows are narrowed to this student id.
    OnlySelf(String),
}

impl AccessScope {
    /// Derive the scope for a principal.
    pub fn for_principal(role: Role, principal: &str) -> Self {
        match role {
            Role::Superuser => Self::All,
            Role::Student => Self::OnlySelf(principal.to_string()),
        }
    }

    /// The student-id filter to apply, if any.
    pub fn filter(&self) -> Option<&str> {
        match self {
            Self::All => None,
            Self::OnlySelf(id) => Some(id.as_str()),
        }
    }
}

/// Reject callers that are not the superuser.
pub fn require_superuser(role: Role) -> AppResult<()> {
    if role.is_superuser() {
        Ok(())
    } else {
        Err(AppError::forbidden("Forbidden"))
    }
}

/// Reject callers that are neither the superuser nor the exact target
/// student.
pub fn ensure_self_or_superuser(role: Role, principal: &str, target_id: &str) -> AppResult<()> {
    if role.is_superuser() || principal == target_id {
        Ok(())
    } else {
        Err(AppError::forbidden("Forbidden"))
    }
}

/// Paths that bypass session authentication entirely: the root page,
/// login, the identity check, the public roster-id listing, admission
/// intake, static assets, API documentation, and the health probe.
pub fn is_public_path(path: &str) -> bool {
    matches!(
        path,
        "/" | "/login" | "/auth/me" | "/students/ids" | "/admissions/apply" | "/health"
            | "/docs" | "/openapi.json"
    ) || path.starts_with("/static/")
        || path.starts_with("/docs/")
}
