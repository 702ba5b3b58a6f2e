//! # Session Commands
//!
//! Opening, closing and scripted replay of calculator sessions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use keypad_core::{CoreResult, InputEvent};

use crate::commands::keypad::{dispatch, DisplayResponse};
use crate::error::ApiError;
use crate::state::SessionRegistry;

/// Returned when a session is opened.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub session_id: String,
    pub created_at: DateTime<Utc>,
    pub display: String,
}

/// One replayed button and the display it produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplayStep {
    pub label: String,
    pub display: String,
}

/// Result of a replay: every step plus the final state.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplayResponse {
    pub steps: Vec<ReplayStep>,
    pub result: DisplayResponse,
}

/// Opens a new session with a fresh engine.
pub fn create_session(registry: &SessionRegistry) -> SessionResponse {
    let state = registry.create();
    state.with_session(|session| SessionResponse {
        session_id: session.id.to_string(),
        created_at: session.created_at,
        display: session.engine.display().to_string(),
    })
}

/// Closes a session.
pub fn close_session(registry: &SessionRegistry, session_id: &str) -> Result<(), ApiError> {
    registry.remove(session_id)
}

/// Feeds a sequence of button labels into a session.
///
/// ## Behavior
/// ```text
/// labels: ["5", "+", "3", "="]
///      │
///      ▼
/// decode all labels ──► any unknown? ──► Err(UNKNOWN_BUTTON), session untouched
///      │
///      ▼
/// apply one by one, recording each display
///      │
///      ▼
/// steps: [5, 5, 3, 8]   result.display: "8"
/// ```
pub fn replay<S: AsRef<str>>(
    registry: &SessionRegistry,
    session_id: &str,
    labels: &[S],
) -> Result<ReplayResponse, ApiError> {
    let events = labels
        .iter()
        .map(|label| label.as_ref().parse::<InputEvent>())
        .collect::<CoreResult<Vec<_>>>()?;

    let state = registry.get(session_id)?;
    let mut steps = Vec::with_capacity(events.len());
    for (label, event) in labels.iter().zip(events) {
        let response = dispatch(registry, session_id, event)?;
        steps.push(ReplayStep {
            label: label.as_ref().to_string(),
            display: response.display,
        });
    }

    debug!(session_id = %session_id, steps = steps.len(), "Replay finished");

    Ok(ReplayResponse {
        steps,
        result: state.with_session(|session| DisplayResponse::from(session)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_create_and_close() {
        let registry = SessionRegistry::new();
        let session = create_session(&registry);
        assert_eq!(session.display, "0");
        assert_eq!(registry.len(), 1);

        close_session(&registry, &session.session_id).unwrap();
        assert!(registry.is_empty());
    }

    #[test]
    fn test_replay_records_every_step() {
        let registry = SessionRegistry::new();
        let id = create_session(&registry).session_id;

        let response = replay(&registry, &id, &["5", "+", "3", "-", "2", "="]).unwrap();
        let displays: Vec<&str> = response.steps.iter().map(|s| s.display.as_str()).collect();
        assert_eq!(displays, ["5", "5", "3", "8", "2", "6"]);
        assert_eq!(response.result.display, "6");
        assert_eq!(response.steps[3].label, "-");
    }

    #[test]
    fn test_replay_rejects_unknown_label_atomically() {
        let registry = SessionRegistry::new();
        let id = create_session(&registry).session_id;

        let err = replay(&registry, &id, &["5", "+", "x", "3"]).unwrap_err();
        assert_eq!(err.code, ErrorCode::UnknownButton);

        let state = registry.get(&id).unwrap();
        assert_eq!(state.with_session(|s| s.event_count), 0);
    }

    #[test]
    fn test_replay_accepts_owned_labels() {
        let registry = SessionRegistry::new();
        let id = create_session(&registry).session_id;
        let labels: Vec<String> = vec!["5".into(), "%".into()];

        let response = replay(&registry, &id, &labels).unwrap();
        assert_eq!(response.result.display, "0.05");
    }
}
