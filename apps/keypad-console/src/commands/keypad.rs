//! # Keypad Commands
//!
//! One command per button kind. Every command applies a single event to a
//! session and reports the resulting display.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Button            Command                  Engine call                 │
//! │  ──────            ───────                  ───────────                 │
//! │  any label ──────► press_button(label) ───► label.parse() → apply       │
//! │  0-9 ────────────► press_digit(d) ────────► digit                       │
//! │  . ──────────────► press_decimal() ───────► decimal_point               │
//! │  + - × ÷ ────────► press_operator(sym) ───► operator                    │
//! │  = ──────────────► press_equals() ────────► equals                      │
//! │  AC ─────────────► press_clear() ─────────► clear                       │
//! │  +/- ────────────► press_sign_toggle() ───► sign_toggle                 │
//! │  % ──────────────► press_percent() ───────► percent                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use keypad_core::{Digit, InputEvent, Operator};

use crate::error::ApiError;
use crate::state::{Session, SessionRegistry};

/// What the presentation layer renders after each press.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayResponse {
    pub session_id: String,
    pub display: String,
    pub pending_operator: Option<Operator>,
    pub awaiting_operand: bool,
}

impl From<&Session> for DisplayResponse {
    fn from(session: &Session) -> Self {
        DisplayResponse {
            session_id: session.id.to_string(),
            display: session.engine.display().to_string(),
            pending_operator: session.engine.pending_operator(),
            awaiting_operand: session.engine.is_awaiting_fresh_operand(),
        }
    }
}

/// Applies a button label.
///
/// Unknown labels are rejected before the session is touched.
pub fn press_button(
    registry: &SessionRegistry,
    session_id: &str,
    label: &str,
) -> Result<DisplayResponse, ApiError> {
    let event: InputEvent = label.parse()?;
    dispatch(registry, session_id, event)
}

/// Enters a digit (`0..=9`).
pub fn press_digit(
    registry: &SessionRegistry,
    session_id: &str,
    digit: u8,
) -> Result<DisplayResponse, ApiError> {
    let digit = Digit::new(digit)?;
    dispatch(registry, session_id, InputEvent::Digit(digit))
}

/// Enters a decimal point.
pub fn press_decimal(registry: &SessionRegistry, session_id: &str) -> Result<DisplayResponse, ApiError> {
    dispatch(registry, session_id, InputEvent::DecimalPoint)
}

/// Selects an operator by its keypad symbol.
pub fn press_operator(
    registry: &SessionRegistry,
    session_id: &str,
    symbol: &str,
) -> Result<DisplayResponse, ApiError> {
    let op: Operator = symbol.parse()?;
    dispatch(registry, session_id, InputEvent::Operator(op))
}

/// Completes the pending operation.
pub fn press_equals(registry: &SessionRegistry, session_id: &str) -> Result<DisplayResponse, ApiError> {
    dispatch(registry, session_id, InputEvent::Equals)
}

/// Resets the session's engine.
pub fn press_clear(registry: &SessionRegistry, session_id: &str) -> Result<DisplayResponse, ApiError> {
    dispatch(registry, session_id, InputEvent::Clear)
}

/// Flips the sign of the displayed number.
pub fn press_sign_toggle(
    registry: &SessionRegistry,
    session_id: &str,
) -> Result<DisplayResponse, ApiError> {
    dispatch(registry, session_id, InputEvent::SignToggle)
}

/// Divides the displayed number by 100.
pub fn press_percent(registry: &SessionRegistry, session_id: &str) -> Result<DisplayResponse, ApiError> {
    dispatch(registry, session_id, InputEvent::Percent)
}

/// Reads the current display without applying anything.
pub fn get_display(registry: &SessionRegistry, session_id: &str) -> Result<DisplayResponse, ApiError> {
    let state = registry.get(session_id)?;
    Ok(state.with_session(|session| DisplayResponse::from(session)))
}

pub(crate) fn dispatch(
    registry: &SessionRegistry,
    session_id: &str,
    event: InputEvent,
) -> Result<DisplayResponse, ApiError> {
    let state = registry.get(session_id)?;
    let response = state.with_session_mut(|session| {
        session.apply(event);
        DisplayResponse::from(&*session)
    });
    debug!(
        session_id = %session_id,
        button = %event,
        display = %response.display,
        "Button applied"
    );
    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    fn setup() -> (SessionRegistry, String) {
        let registry = SessionRegistry::new();
        let id = registry.create().id().to_string();
        (registry, id)
    }

    #[test]
    fn test_typed_commands() {
        let (registry, id) = setup();

        press_digit(&registry, &id, 1).unwrap();
        press_decimal(&registry, &id).unwrap();
        press_digit(&registry, &id, 5).unwrap();
        let response = press_operator(&registry, &id, "×").unwrap();
        assert_eq!(response.display, "1.5");
        assert_eq!(response.pending_operator, Some(Operator::Multiply));
        assert!(response.awaiting_operand);

        press_digit(&registry, &id, 4).unwrap();
        let response = press_equals(&registry, &id).unwrap();
        assert_eq!(response.display, "6");
        assert_eq!(response.pending_operator, None);

        assert_eq!(press_sign_toggle(&registry, &id).unwrap().display, "-6");
        assert_eq!(press_percent(&registry, &id).unwrap().display, "-0.06");
        assert_eq!(press_clear(&registry, &id).unwrap().display, "0");
    }

    #[test]
    fn test_press_button_labels() {
        let (registry, id) = setup();
        for label in ["9", "÷", "0"] {
            press_button(&registry, &id, label).unwrap();
        }
        let response = press_button(&registry, &id, "=").unwrap();
        assert_eq!(response.display, "Error");
        assert_eq!(get_display(&registry, &id).unwrap(), response);
    }

    #[test]
    fn test_bad_input_leaves_session_untouched() {
        let (registry, id) = setup();
        press_digit(&registry, &id, 3).unwrap();

        assert_eq!(press_button(&registry, &id, "MC").unwrap_err().code, ErrorCode::UnknownButton);
        assert_eq!(press_digit(&registry, &id, 12).unwrap_err().code, ErrorCode::UnknownButton);
        assert_eq!(press_operator(&registry, &id, "^").unwrap_err().code, ErrorCode::UnknownButton);

        let state = registry.get(&id).unwrap();
        assert_eq!(state.with_session(|s| s.event_count), 1);
        assert_eq!(get_display(&registry, &id).unwrap().display, "3");
    }

    #[test]
    fn test_unknown_session() {
        let registry = SessionRegistry::new();
        let missing = uuid::Uuid::new_v4().to_string();
        let err = press_equals(&registry, &missing).unwrap_err();
        assert_eq!(err.code, ErrorCode::SessionNotFound);
    }

    #[test]
    fn test_display_response_shape() {
        let (registry, id) = setup();
        press_button(&registry, &id, "7").unwrap();
        let response = press_button(&registry, &id, "-").unwrap();

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["sessionId"], id.as_str());
        assert_eq!(json["display"], "7");
        assert_eq!(json["pendingOperator"], "-");
        assert_eq!(json["awaitingOperand"], true);
    }
}
