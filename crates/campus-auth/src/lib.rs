//! # campus-auth
//!
//! Authentication and authorization for Campus ERP:
//!
//! - [`credentials`] — the file-backed credential vault, auto-provisioned
//!   from the roster and reconciled on every roster mutation;
//! - [`session`] — in-memory bearer-token sessions with a sliding idle
//!   window;
//! - [`policy`] — role derivation and the two per-resource gates
//!   (rejecting and filtering), plus the public-path allowlist.

pub mod credentials;
pub mod policy;
pub mod session;

pub use credentials::{CredentialStore, CredentialVault, FileCredentialStore};
pub use policy::AccessScope;
pub use session::{MemorySessionStore, SessionError, SessionStore};
