//! In-memory registry of per-user session contexts.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use dbarchitect_core::session::SessionContext;
use tokio::sync::RwLock;
use tokio::time::Instant;

/// Interval between idle-session sweeps (in seconds).
const SWEEP_INTERVAL_SECS: u64 = 60;

/// A session's context and when it was last touched.
struct SessionEntry {
    context: SessionContext,
    last_seen: Instant,
}

impl SessionEntry {
    fn new() -> Self {
        Self {
            context: SessionContext::new(),
            last_seen: Instant::now(),
        }
    }
}

/// Holds one [`SessionContext`] per session id.
///
/// Thread-safe via interior `RwLock`; designed to be wrapped in `Arc` and
/// shared across the application. Every read or update counts as activity;
/// sessions idle for longer than the configured limit are dropped by
/// [`start_idle_sweep`].
pub struct SessionStore {
    sessions: RwLock<HashMap<String, SessionEntry>>,
}

impl SessionStore {
    /// Create a new, empty store.
    pub fn new() -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Open a fresh session in new-project mode and return its id.
    pub async fn create(&self) -> String {
        let id = uuid::Uuid::new_v4().to_string();
        self.sessions
            .write()
            .await
            .insert(id.clone(), SessionEntry::new());
        id
    }

    /// Snapshot of a session's context.
    pub async fn get(&self, id: &str) -> Option<SessionContext> {
        let mut sessions = self.sessions.write().await;
        let entry = sessions.get_mut(id)?;
        entry.last_seen = Instant::now();
        Some(entry.context.clone())
    }

    /// Apply `f` to a session's context, returning the updated snapshot.
    pub async fn update<F>(&self, id: &str, f: F) -> Option<SessionContext>
    where
        F: FnOnce(&mut SessionContext),
    {
        let mut sessions = self.sessions.write().await;
        let entry = sessions.get_mut(id)?;
        entry.last_seen = Instant::now();
        f(&mut entry.context);
        Some(entry.context.clone())
    }

    /// Remove a session. Returns `false` if it did not exist.
    pub async fn remove(&self, id: &str) -> bool {
        self.sessions.write().await.remove(id).is_some()
    }

    /// Drop every session not touched within `max_idle`. Returns how many
    /// were removed.
    pub async fn remove_idle(&self, max_idle: Duration) -> usize {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, entry| entry.last_seen.elapsed() <= max_idle);
        before - sessions.len()
    }

    /// Number of open sessions.
    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Spawn a background task that periodically drops idle sessions.
///
/// The task runs until aborted through the returned `JoinHandle`.
pub fn start_idle_sweep(
    sessions: Arc<SessionStore>,
    max_idle: Duration,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(SWEEP_INTERVAL_SECS));

        loop {
            interval.tick().await;
            let removed = sessions.remove_idle(max_idle).await;
            if removed > 0 {
                let remaining = sessions.session_count().await;
                tracing::info!(removed, remaining, "Expired idle sessions");
            }
        }
    })
}
