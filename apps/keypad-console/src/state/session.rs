//! # Session State
//!
//! Each session owns one [`CalculatorEngine`]. Sessions are independent: two
//! keypads on screen never see each other's operands.
//!
//! ## Thread Safety
//! A session is wrapped in `Arc<Mutex<T>>` because:
//! 1. Whatever dispatches button presses may hold the session on any thread
//! 2. Only one press is applied at a time
//! 3. A press runs to completion while the lock is held
//!
//! ## Session Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Session Registry Operations                          │
//! │                                                                         │
//! │  Host Action              Command                 Registry Change       │
//! │  ───────────              ───────                 ───────────────       │
//! │                                                                         │
//! │  Open keypad ────────────► create_session() ────► sessions.insert(id)  │
//! │                                                                         │
//! │  Button press ───────────► press_button() ──────► session.engine.apply │
//! │                                                                         │
//! │  Close keypad ───────────► close_session() ─────► sessions.remove(id)  │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Utc};
use keypad_core::{CalculatorEngine, InputEvent};
use tracing::info;
use uuid::Uuid;

use crate::error::ApiError;

/// One calculator instance plus bookkeeping.
#[derive(Debug, Clone)]
pub struct Session {
    /// Session identifier (UUID v4)
    pub id: Uuid,

    /// The calculator state machine
    pub engine: CalculatorEngine,

    /// Number of events applied since creation
    pub event_count: u64,

    /// When the session was opened
    pub created_at: DateTime<Utc>,

    /// When the last event was applied
    pub updated_at: DateTime<Utc>,
}

impl Session {
    /// Creates a session with a fresh engine.
    pub fn new() -> Self {
        let now = Utc::now();
        Session {
            id: Uuid::new_v4(),
            engine: CalculatorEngine::new(),
            event_count: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// Applies one event and returns the new display.
    pub fn apply(&mut self, event: InputEvent) -> &str {
        self.event_count += 1;
        self.updated_at = Utc::now();
        self.engine.apply(event)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared handle to a [`Session`].
#[derive(Debug, Clone)]
pub struct SessionState {
    id: Uuid,
    session: Arc<Mutex<Session>>,
}

impl SessionState {
    /// Wraps a session.
    pub fn new(session: Session) -> Self {
        SessionState {
            id: session.id,
            session: Arc::new(Mutex::new(session)),
        }
    }

    /// Session identifier.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Executes a function with read access to the session.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let display = state.with_session(|s| s.engine.display().to_string());
    /// ```
    pub fn with_session<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Session) -> R,
    {
        f(&self.lock())
    }

    /// Executes a function with write access to the session.
    pub fn with_session_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Session) -> R,
    {
        f(&mut self.lock())
    }

    // Engine methods never panic mid-update, so a poisoned lock still guards
    // a consistent engine.
    fn lock(&self) -> MutexGuard<'_, Session> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// All open sessions, keyed by id.
#[derive(Debug, Clone, Default)]
pub struct SessionRegistry {
    sessions: Arc<Mutex<HashMap<Uuid, SessionState>>>,
}

impl SessionRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a new session.
    pub fn create(&self) -> SessionState {
        let state = SessionState::new(Session::new());
        self.lock().insert(state.id(), state.clone());
        info!(session_id = %state.id(), "Session created");
        state
    }

    /// Looks up a session by its textual id.
    pub fn get(&self, id: &str) -> Result<SessionState, ApiError> {
        let uuid = parse_session_id(id)?;
        self.lock()
            .get(&uuid)
            .cloned()
            .ok_or_else(|| ApiError::session_not_found(id))
    }

    /// Closes a session.
    pub fn remove(&self, id: &str) -> Result<(), ApiError> {
        let uuid = parse_session_id(id)?;
        match self.lock().remove(&uuid) {
            Some(_) => {
                info!(session_id = %uuid, "Session closed");
                Ok(())
            }
            None => Err(ApiError::session_not_found(id)),
        }
    }

    /// Number of open sessions.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Returns true when no sessions are open.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<Uuid, SessionState>> {
        self.sessions.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn parse_session_id(id: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(id.trim())
        .map_err(|_| ApiError::validation(format!("Invalid session id: {}", id)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use keypad_core::Operator;

    #[test]
    fn test_session_apply_tracks_activity() {
        let mut session = Session::new();
        assert_eq!(session.event_count, 0);

        assert_eq!(session.apply(InputEvent::Operator(Operator::Add)), "0");
        assert_eq!(session.event_count, 1);
        assert!(session.updated_at >= session.created_at);
    }

    #[test]
    fn test_registry_create_get_remove() {
        let registry = SessionRegistry::new();
        assert!(registry.is_empty());

        let state = registry.create();
        let id = state.id().to_string();
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get(&id).unwrap().id(), state.id());

        registry.remove(&id).unwrap();
        assert!(registry.is_empty());

        let err = registry.get(&id).unwrap_err();
        assert_eq!(err.code, ErrorCode::SessionNotFound);
        assert_eq!(registry.remove(&id).unwrap_err().code, ErrorCode::SessionNotFound);
    }

    #[test]
    fn test_registry_rejects_malformed_id() {
        let registry = SessionRegistry::new();
        let err = registry.get("not-a-uuid").unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_sessions_are_independent() {
        let registry = SessionRegistry::new();
        let a = registry.create();
        let b = registry.create();

        a.with_session_mut(|s| s.engine.press("7").map(str::to_string)).unwrap();
        assert_eq!(a.with_session(|s| s.engine.display().to_string()), "7");
        assert_eq!(b.with_session(|s| s.engine.display().to_string()), "0");
    }

    #[test]
    fn test_cloned_handle_shares_engine() {
        let registry = SessionRegistry::new();
        let state = registry.create();
        let handle = registry.get(&state.id().to_string()).unwrap();

        handle.with_session_mut(|s| {
            s.apply(InputEvent::Clear);
        });
        assert_eq!(state.with_session(|s| s.event_count), 1);
    }
}
