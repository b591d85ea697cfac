//! Principal and role types.
//!
//! Roles are never stored: they are derived structurally from the
//! principal name at session-validation time and carried on the request
//! context from then on.

use serde::{Deserialize, Serialize};

/// The role of an authenticated principal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// The single administrative principal.
    Superuser,
    /// A self-scoped student principal.
    Student,
}

impl Role {
    /// Derive the role for a principal name given the reserved superuser
    /// name. Exact string equality; everything else is a student.
    pub fn for_principal(principal: &str, superuser: &str) -> Self {
        if principal == superuser {
            Self::Superuser
        } else {
            Self::Student
        }
    }

    /// Whether this role carries administrative privileges.
    pub fn is_superuser(self) -> bool {
        matches!(self, Self::Superuser)
    }

    /// Stable lowercase name, as rendered in API responses.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Superuser => "superuser",
            Self::Student => "student",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_is_derived_by_exact_match() {
        assert_eq!(Role::for_principal("superuser", "superuser"), Role::Superuser);
        assert_eq!(Role::for_principal("AAI701", "superuser"), Role::Student);
        // No case folding on purpose.
        assert_eq!(Role::for_principal("Superuser", "superuser"), Role::Student);
    }
}
