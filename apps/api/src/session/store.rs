use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::time::Instant;
use tracing::debug;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::session::SessionState;

const DEFAULT_IDLE_TTL: Duration = Duration::from_secs(60 * 60);
const DEFAULT_MAX_SESSIONS: usize = 1000;

struct Entry {
    state: SessionState,
    last_seen: Instant,
}

/// Sessions keyed by id. Nothing is persisted; a restart drops every session.
///
/// A session idle for longer than the TTL is discarded on its next access or
/// when a new session is created. At capacity, `create` drops the session
/// that has been idle longest.
///
/// Callers must not hold the lock across an LLM call: take a snapshot with
/// `get`, generate, then write the result back through `update`.
#[derive(Clone)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<Uuid, Entry>>>,
    idle_ttl: Duration,
    max_sessions: usize,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(DEFAULT_IDLE_TTL, DEFAULT_MAX_SESSIONS)
    }
}

impl SessionStore {
    pub fn new(idle_ttl: Duration, max_sessions: usize) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            idle_ttl,
            max_sessions: max_sessions.max(1),
        }
    }

    pub async fn create(&self) -> SessionState {
        let session = SessionState::new();
        let now = Instant::now();
        let mut sessions = self.sessions.write().await;

        let before = sessions.len();
        sessions.retain(|_, entry| now.duration_since(entry.last_seen) <= self.idle_ttl);
        if sessions.len() < before {
            debug!("Evicted {} idle sessions", before - sessions.len());
        }

        if sessions.len() >= self.max_sessions {
            if let Some(oldest) = sessions
                .iter()
                .min_by_key(|(_, entry)| entry.last_seen)
                .map(|(id, _)| *id)
            {
                sessions.remove(&oldest);
                debug!("Session cap reached, evicted {oldest}");
            }
        }

        sessions.insert(
            session.id,
            Entry {
                state: session.clone(),
                last_seen: now,
            },
        );
        debug!("Created session {} ({} active)", session.id, sessions.len());
        session
    }

    /// Snapshot of the session. Counts as activity.
    pub async fn get(&self, id: Uuid) -> Result<SessionState, AppError> {
        self.update(id, |s| Ok(s.clone())).await
    }

    /// Applies `f` under the write lock and returns its result. `f` must not
    /// block; a failing `f` should leave the session untouched.
    pub async fn update<T, F>(&self, id: Uuid, f: F) -> Result<T, AppError>
    where
        F: FnOnce(&mut SessionState) -> Result<T, AppError>,
    {
        let now = Instant::now();
        let mut sessions = self.sessions.write().await;
        let expired = match sessions.get(&id) {
            Some(entry) => now.duration_since(entry.last_seen) > self.idle_ttl,
            None => return Err(not_found(id)),
        };
        if expired {
            sessions.remove(&id);
            debug!("Session {id} expired");
            return Err(not_found(id));
        }

        let entry = sessions.get_mut(&id).ok_or_else(|| not_found(id))?;
        entry.last_seen = now;
        f(&mut entry.state)
    }

    pub async fn remove(&self, id: Uuid) -> Result<(), AppError> {
        self.sessions
            .write()
            .await
            .remove(&id)
            .map(|_| debug!("Removed session {id}"))
            .ok_or_else(|| not_found(id))
    }
}

fn not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Session {id} not found"))
}
