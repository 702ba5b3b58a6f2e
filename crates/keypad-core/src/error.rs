//! # Error Types
//!
//! Domain-specific error types for keypad-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  keypad-core errors (this file)                                        │
//! │  └── CoreError        - Button labels / symbols that decode to nothing │
//! │                                                                         │
//! │  keypad-console errors (app)                                           │
//! │  └── ApiError         - What the host reports (serialized)             │
//! │                                                                         │
//! │  Flow: CoreError → ApiError → stdout/stderr                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Note
//! Arithmetic never fails with a `CoreError`. Division by zero and other
//! undefined results are shown as the `"Error"` display sentinel; these
//! errors only cover decoding input before it reaches the engine.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Input decoding errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A button label that maps to no input event.
    ///
    /// ## When This Occurs
    /// - A presentation layer forwards a label outside the keypad set
    /// - A scripted feed contains a typo (`"x"` instead of `"×"`)
    #[error("Unknown button: {0:?}")]
    UnknownButton(String),

    /// A digit outside `0-9`.
    #[error("Invalid digit: {0:?}")]
    InvalidDigit(String),

    /// A symbol that is not one of `+ - × ÷`.
    #[error("Unknown operator: {0:?}")]
    UnknownOperator(String),
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::UnknownButton("MC".to_string());
        assert_eq!(err.to_string(), "Unknown button: \"MC\"");

        let err = CoreError::InvalidDigit("12".to_string());
        assert_eq!(err.to_string(), "Invalid digit: \"12\"");

        let err = CoreError::UnknownOperator("^".to_string());
        assert_eq!(err.to_string(), "Unknown operator: \"^\"");
    }
}
