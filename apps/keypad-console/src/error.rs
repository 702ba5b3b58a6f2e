//! # API Error Type
//!
//! Unified error type for console commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Keypad                                 │
//! │                                                                         │
//! │  press_button(session, "MC")                                            │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Session missing? ─── ApiError::session_not_found ──┐           │  │
//! │  │         │                                           │           │  │
//! │  │         ▼                                           ▼           │  │
//! │  │  Bad label? ─── CoreError::UnknownButton ───── ApiError ───────►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success (display may still read "Error") ─────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A calculator `"Error"` display is not an `ApiError`: the command succeeded
//! and the display is reported as-is.

use serde::Serialize;
use thiserror::Error;

use keypad_core::CoreError;

/// API error returned from commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "UNKNOWN_BUTTON",
///   "message": "Unknown button: \"MC\""
/// }
/// ```
#[derive(Debug, Clone, Serialize, Error)]
#[serde(rename_all = "camelCase")]
#[error("[{code:?}] {message}")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Label, digit or operator symbol not on the keypad
    UnknownButton,

    /// Malformed request input (e.g. a session id that is not a UUID)
    ValidationError,

    /// No session with the given id
    SessionNotFound,

    /// Host failure (e.g. unreadable stdin)
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a session not found error.
    pub fn session_not_found(id: &str) -> Self {
        ApiError::new(ErrorCode::SessionNotFound, format!("Session not found: {}", id))
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::UnknownButton(_)
            | CoreError::InvalidDigit(_)
            | CoreError::UnknownOperator(_) => ApiError::new(ErrorCode::UnknownButton, err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_error_maps_to_unknown_button() {
        let err: ApiError = CoreError::UnknownButton("MC".to_string()).into();
        assert_eq!(err.code, ErrorCode::UnknownButton);
        assert_eq!(err.message, "Unknown button: \"MC\"");
    }

    #[test]
    fn test_serialized_shape() {
        let err = ApiError::session_not_found("abc");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "code": "SESSION_NOT_FOUND", "message": "Session not found: abc" })
        );
        assert_eq!(err.to_string(), "[SessionNotFound] Session not found: abc");
    }
}
