//! Request context carrying the authenticated principal and its role.

use serde::{Deserialize, Serialize};

use campus_auth::AccessScope;
use campus_entity::Role;

/// Context for the current authenticated request.
///
/// Built once at session-validation time and passed into service methods
/// so that every operation knows *who* is acting without re-deriving the
/// role from strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The authenticated principal (superuser name or student id).
    pub principal: String,
    /// The role derived for this principal.
    pub role: Role,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(principal: impl Into<String>, role: Role) -> Self {
        Self {
            principal: principal.into(),
            role,
        }
    }

    /// Whether the principal is the superuser.
    pub fn is_superuser(&self) -> bool {
        self.role.is_superuser()
    }

    /// The list-endpoint query scope for this principal.
    pub fn scope(&self) -> AccessScope {
        AccessScope::for_principal(self.role, &self.principal)
    }
}
