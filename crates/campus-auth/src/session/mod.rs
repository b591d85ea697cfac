//! Bearer-token session management.
//!
//! Sessions live only in process memory: a restart empties the table.
//! Each successful validation refreshes the idle clock, so a session
//! lives indefinitely under continuous use and expires only after the
//! configured idle window passes with no activity at all.

mod memory;

pub use memory::MemorySessionStore;

use campus_core::error::AppError;
use thiserror::Error;

/// Session validation failures.
///
/// `Unauthenticated` and `Expired` are deliberately distinct: both map
/// to HTTP 401 but with different messages, and only `Expired` implies
/// the token was once valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    /// The token is unknown to the session table.
    #[error("Unauthorized")]
    Unauthenticated,
    /// The token was known but idled past the timeout and has been
    /// evicted.
    #[error("Session expired")]
    Expired,
}

impl From<SessionError> for AppError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::Unauthenticated => AppError::authentication("Unauthorized"),
            SessionError::Expired => AppError::session_expired("Session expired"),
        }
    }
}

/// Concurrency-safe session table, constructed once per process and
/// injected into the request path.
pub trait SessionStore: Send + Sync {
    /// Create a session for a principal and return its bearer token.
    /// Multiple live sessions per principal are allowed.
    fn create(&self, principal: &str) -> String;

    /// Validate a token: unknown tokens fail with
    /// [`SessionError::Unauthenticated`], idle-expired ones are evicted
    /// and fail with [`SessionError::Expired`], and valid ones have
    /// their idle clock reset before the bound principal is returned.
    fn validate(&self, token: &str) -> Result<String, SessionError>;

    /// Drop every session bound to a principal. Returns the number of
    /// evicted sessions. Not wired to credential regeneration (see
    /// DESIGN.md); provided as the seam for doing so.
    fn purge_principal(&self, principal: &str) -> usize;

    /// Number of live (possibly stale) entries in the table.
    fn len(&self) -> usize;

    /// Whether the table is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
