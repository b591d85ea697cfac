//! In-memory session table.

use std::time::{Duration, Instant};

use dashmap::DashMap;
use uuid::Uuid;

use campus_core::config::SessionConfig;

use super::{SessionError, SessionStore};

/// One live session.
#[derive(Debug, Clone)]
struct SessionEntry {
    principal: String,
    last_activity: Instant,
}

/// [`SessionStore`] over a concurrent in-process map.
///
/// Tokens are 128-bit random identifiers; collisions are ignored as
/// negligibly improbable. Expired entries are evicted lazily on the
/// validation path.
#[derive(Debug)]
pub struct MemorySessionStore {
    sessions: DashMap<String, SessionEntry>,
    idle_timeout: Duration,
}

impl MemorySessionStore {
    /// Create a store with the given idle timeout.
    pub fn new(idle_timeout: Duration) -> Self {
        Self {
            sessions: DashMap::new(),
            idle_timeout,
        }
    }

    /// Create a store from configuration.
    pub fn from_config(config: &SessionConfig) -> Self {
        Self::new(Duration::from_secs(config.idle_timeout_seconds))
    }
}

impl SessionStore for MemorySessionStore {
    fn create(&self, principal: &str) -> String {
        let token = Uuid::new_v4().simple().to_string();
        self.sessions.insert(
            token.clone(),
            SessionEntry {
                principal: principal.to_string(),
                last_activity: Instant::now(),
            },
        );
        token
    }

    fn validate(&self, token: &str) -> Result<String, SessionError> {
        let now = Instant::now();

        // Read and drop the guard before any removal; removing a key
        // while holding its shard guard would deadlock.
        let expired = match self.sessions.get(token) {
            None => return Err(SessionError::Unauthenticated),
            Some(entry) => now.duration_since(entry.last_activity) > self.idle_timeout,
        };

        if expired {
            self.sessions.remove(token);
            return Err(SessionError::Expired);
        }

        match self.sessions.get_mut(token) {
            Some(mut entry) => {
                entry.last_activity = now;
                Ok(entry.principal.clone())
            }
            // Evicted by a racing validation between the two lookups.
            None => Err(SessionError::Unauthenticated),
        }
    }

    fn purge_principal(&self, principal: &str) -> usize {
        let before = self.sessions.len();
        self.sessions.retain(|_, entry| entry.principal != principal);
        before - self.sessions.len()
    }

    fn len(&self) -> usize {
        self.sessions.len()
    }
}
