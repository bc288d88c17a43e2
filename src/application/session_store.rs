// In-memory store of per-session widget state
use crate::domain::session::SessionState;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, MutexGuard};

pub const DEFAULT_MAX_SESSIONS: usize = 1024;

#[derive(Debug)]
struct SessionEntry {
    state: SessionState,
    last_used: u64,
}

#[derive(Debug, Default)]
struct Sessions {
    entries: HashMap<String, SessionEntry>,
    clock: u64,
}

#[derive(Clone)]
pub struct SessionStore {
    sessions: Arc<Mutex<Sessions>>,
    max_sessions: usize,
}

/// Exclusive access to the store. Requests and resets are serialized while one is held.
pub struct SessionGuard<'a> {
    sessions: MutexGuard<'a, Sessions>,
    max_sessions: usize,
}

impl SessionStore {
    pub fn new(max_sessions: usize) -> Self {
        Self {
            sessions: Arc::new(Mutex::new(Sessions::default())),
            max_sessions: max_sessions.max(1),
        }
    }

    pub async fn lock(&self) -> SessionGuard<'_> {
        SessionGuard {
            sessions: self.sessions.lock().await,
            max_sessions: self.max_sessions,
        }
    }

    /// Forget a session; returns whether it existed
    pub async fn reset(&self, session_id: &str) -> bool {
        self.lock().await.remove(session_id)
    }

    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.sessions.lock().await.entries.len()
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_SESSIONS)
    }
}

impl SessionGuard<'_> {
    /// Retained state for a session, or a fresh default one
    pub fn checkout(&self, session_id: &str) -> SessionState {
        self.sessions
            .entries
            .get(session_id)
            .map(|e| e.state.clone())
            .unwrap_or_default()
    }

    /// Store a session's state. Default state is not kept, and the least recently
    /// used session is evicted once the store is full.
    pub fn checkin(&mut self, session_id: &str, state: SessionState) {
        if state == SessionState::default() {
            self.sessions.entries.remove(session_id);
            return;
        }

        self.sessions.clock += 1;
        let last_used = self.sessions.clock;
        self.sessions
            .entries
            .insert(session_id.to_string(), SessionEntry { state, last_used });

        while self.sessions.entries.len() > self.max_sessions {
            let oldest = self
                .sessions
                .entries
                .iter()
                .min_by_key(|(_, e)| e.last_used)
                .map(|(id, _)| id.clone());
            match oldest {
                Some(id) => {
                    tracing::debug!("Evicting session {}", id);
                    self.sessions.entries.remove(&id);
                }
                None => break,
            }
        }
    }

    pub fn remove(&mut self, session_id: &str) -> bool {
        self.sessions.entries.remove(session_id).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn with_min_count(min_count: f64) -> SessionState {
        SessionState {
            min_count,
            ..SessionState::new()
        }
    }

    #[tokio::test]
    async fn test_checkout_defaults_then_retains() {
        let store = SessionStore::default();
        let mut sessions = store.lock().await;
        assert_eq!(sessions.checkout("a"), SessionState::new());

        sessions.checkin("a", with_min_count(4.0));

        assert_eq!(sessions.checkout("a"), with_min_count(4.0));
        assert_eq!(sessions.checkout("b"), SessionState::new());
    }

    #[tokio::test]
    async fn test_reset_restores_defaults() {
        let store = SessionStore::default();
        let mut state = SessionState::new();
        state.selected_items = Some(vec!["Milk".to_string()]);
        store.lock().await.checkin("a", state);

        assert!(store.reset("a").await);
        assert!(!store.reset("a").await);
        assert_eq!(store.lock().await.checkout("a"), SessionState::new());
    }

    #[tokio::test]
    async fn test_reset_waits_for_inflight_request() {
        let store = SessionStore::default();
        let mut sessions = store.lock().await;
        let mut state = sessions.checkout("a");
        state.min_count = 7.0;

        let resetter = store.clone();
        let reset = tokio::spawn(async move { resetter.reset("a").await });
        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(!reset.is_finished());

        sessions.checkin("a", state);
        drop(sessions);

        assert!(reset.await.expect("reset task"));
        assert_eq!(store.lock().await.checkout("a"), SessionState::new());
    }

    #[tokio::test]
    async fn test_default_state_is_not_stored() {
        let store = SessionStore::default();
        {
            let mut sessions = store.lock().await;
            for i in 0..1000 {
                let id = format!("s{}", i);
                let state = sessions.checkout(&id);
                sessions.checkin(&id, state);
            }
        }
        assert_eq!(store.len().await, 0);
    }

    #[tokio::test]
    async fn test_store_evicts_least_recently_used() {
        let store = SessionStore::new(2);
        let mut sessions = store.lock().await;
        sessions.checkin("a", with_min_count(1.0));
        sessions.checkin("b", with_min_count(2.0));
        sessions.checkin("a", with_min_count(3.0));
        sessions.checkin("c", with_min_count(4.0));
        drop(sessions);

        assert_eq!(store.len().await, 2);
        let sessions = store.lock().await;
        assert_eq!(sessions.checkout("a"), with_min_count(3.0));
        assert_eq!(sessions.checkout("b"), SessionState::new());
        assert_eq!(sessions.checkout("c"), with_min_count(4.0));
    }
}
