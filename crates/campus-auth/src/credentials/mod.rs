//! Credential vault — durable principal → secret mapping.
//!
//! Secrets are auto-provisioned from the roster: every student id that
//! contains at least one digit gets a generated secret on first sight,
//! and entries disappear when their id leaves the roster. The superuser
//! entry is permanent. Secrets are stored and compared in plaintext for
//! compatibility with the existing file format (see DESIGN.md).

mod file_store;
mod secret;

pub use file_store::FileCredentialStore;
pub use secret::generate_secret;

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{debug, info};

use campus_core::config::CredentialsConfig;
use campus_core::error::AppError;
use campus_core::result::AppResult;

/// Persistence backend for the credential mapping.
///
/// `save` rewrites the whole mapping; there is no append operation.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Load the full mapping. Absent storage yields an empty mapping.
    async fn load(&self) -> AppResult<BTreeMap<String, String>>;

    /// Persist the full mapping, replacing prior contents.
    async fn save(&self, mapping: &BTreeMap<String, String>) -> AppResult<()>;

    /// Whether the backing storage currently exists.
    async fn exists(&self) -> bool;
}

/// The credential vault: reconciliation and login verification over a
/// pluggable [`CredentialStore`].
pub struct CredentialVault {
    store: Arc<dyn CredentialStore>,
    config: CredentialsConfig,
    /// Serializes reconciliation; two racing reconciles must not
    /// interleave their read-modify-write of the store.
    reconcile_lock: Mutex<()>,
}

impl CredentialVault {
    /// Create a vault over the given store.
    pub fn new(store: Arc<dyn CredentialStore>, config: CredentialsConfig) -> Self {
        Self {
            store,
            config,
            reconcile_lock: Mutex::new(()),
        }
    }

    /// The reserved superuser principal name.
    pub fn superuser(&self) -> &str {
        &self.config.superuser
    }

    /// Reconcile stored credentials against the current roster.
    ///
    /// Ensures the superuser entry exists (default secret on first run),
    /// generates a fresh secret for every roster id containing a digit
    /// that has none yet, and removes entries whose id left the roster or
    /// never contained a digit. Persists only when something changed or
    /// the storage did not previously exist, so a second call with an
    /// unchanged roster leaves the stored bytes identical.
    ///
    /// Returns whether the stored set changed.
    pub async fn reconcile(&self, roster_ids: &[String]) -> AppResult<bool> {
        let _guard = self.reconcile_lock.lock().await;

        let existed = self.store.exists().await;
        let mut mapping = self.store.load().await?;
        let mut changed = false;

        if !mapping.contains_key(&self.config.superuser) {
            mapping.insert(
                self.config.superuser.clone(),
                self.config.superuser_secret.clone(),
            );
            changed = true;
        }

        let valid_ids: BTreeSet<&str> = roster_ids
            .iter()
            .map(String::as_str)
            .filter(|id| has_digit(id))
            .collect();

        for id in &valid_ids {
            if !mapping.contains_key(*id) {
                mapping.insert((*id).to_string(), generate_secret()?);
                debug!(student_id = %id, "Provisioned credential for new roster entry");
                changed = true;
            }
        }

        let to_remove: Vec<String> = mapping
            .keys()
            .filter(|k| *k != &self.config.superuser && !valid_ids.contains(k.as_str()))
            .cloned()
            .collect();

        for key in to_remove {
            mapping.remove(&key);
            debug!(principal = %key, "Removed stale credential");
            changed = true;
        }

        if changed || !existed {
            self.store.save(&mapping).await?;
            info!(entries = mapping.len(), "Credential store reconciled");
        }

        Ok(changed)
    }

    /// Verify a login attempt.
    ///
    /// The returned error is identical whether the principal is unknown
    /// or the secret mismatches, so usernames cannot be enumerated.
    pub async fn verify(&self, username: &str, password: &str) -> AppResult<()> {
        let mapping = self.store.load().await?;
        match mapping.get(username) {
            Some(secret) if secret == password => Ok(()),
            _ => Err(AppError::authentication("Invalid credentials")),
        }
    }
}

/// A principal qualifies for auto-provisioning only if its literal form
/// contains at least one decimal digit.
fn has_digit(s: &str) -> bool {
    s.chars().any(|c| c.is_ascii_digit())
}
