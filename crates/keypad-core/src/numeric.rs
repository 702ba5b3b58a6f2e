//! # Numeric Module
//!
//! The pure boundary between display text and `f64` arithmetic.
//!
//! ## Display Is the Source of Truth
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   display: "12.5" ──► parse_operand ──► 12.5 ──┐                       │
//! │                                                 ├──► evaluate(a, b, op) │
//! │   first_operand: 3.0 ───────────────────────────┘          │            │
//! │                                                             ▼            │
//! │   display: "37.5" ◄── format_number ◄── Evaluation::Value(37.5)        │
//! │   display: "Error" ◄───────────────── Evaluation::Undefined             │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The engine never touches `f64` text conversion directly; everything goes
//! through [`parse_operand`] and [`format_number`].

use crate::types::Operator;
use crate::DISPLAY_ERROR;

// =============================================================================
// Evaluation
// =============================================================================

/// Outcome of applying an operator to two operands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Evaluation {
    /// A numeric result. May still be non-finite (e.g. overflow to infinity).
    Value(f64),

    /// Division by zero.
    Undefined,
}

impl Evaluation {
    /// Returns the result only if it is a finite number.
    ///
    /// ## Example
    /// ```rust
    /// use keypad_core::Evaluation;
    ///
    /// assert_eq!(Evaluation::Value(2.5).finite(), Some(2.5));
    /// assert_eq!(Evaluation::Value(f64::INFINITY).finite(), None);
    /// assert_eq!(Evaluation::Undefined.finite(), None);
    /// ```
    pub fn finite(&self) -> Option<f64> {
        match *self {
            Evaluation::Value(v) if v.is_finite() => Some(v),
            _ => None,
        }
    }

    /// Renders the outcome as display text.
    pub fn to_display(&self) -> String {
        match *self {
            Evaluation::Value(v) => format_number(v),
            Evaluation::Undefined => DISPLAY_ERROR.to_string(),
        }
    }
}

/// Applies `op` to `a` and `b`.
///
/// ## Rules
/// | op | result |
/// |----|--------|
/// | `+` | `a + b` |
/// | `-` | `a - b` |
/// | `×` | `a × b` |
/// | `÷` | `Undefined` when `b == 0`, else `a / b` |
///
/// ## Example
/// ```rust
/// use keypad_core::{numeric::evaluate, Evaluation, Operator};
///
/// assert_eq!(evaluate(6.0, 3.0, Operator::Divide), Evaluation::Value(2.0));
/// assert_eq!(evaluate(1.0, 0.0, Operator::Divide), Evaluation::Undefined);
/// ```
pub fn evaluate(a: f64, b: f64, op: Operator) -> Evaluation {
    match op {
        Operator::Add => Evaluation::Value(a + b),
        Operator::Subtract => Evaluation::Value(a - b),
        Operator::Multiply => Evaluation::Value(a * b),
        // -0.0 == 0.0, so negative zero is caught too
        Operator::Divide if b == 0.0 => Evaluation::Undefined,
        Operator::Divide => Evaluation::Value(a / b),
    }
}

// =============================================================================
// Text Conversion
// =============================================================================

/// Parses display text as an operand.
///
/// Returns `None` for anything that is not a finite number, including
/// `"Error"`, `""`, `"-"` and the textual infinities `f64::from_str` accepts.
pub fn parse_operand(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Formats a numeric result for the display.
///
/// ## Rules
/// - Infinity, negative infinity and NaN render as `"Error"`
/// - Negative zero renders as `"0"`
/// - Everything else uses the shortest decimal text that parses back to the
///   same `f64` (`8.0` → `"8"`, `0.05` → `"0.05"`); no rounding is applied
///
/// ## Example
/// ```rust
/// use keypad_core::numeric::format_number;
///
/// assert_eq!(format_number(8.0), "8");
/// assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
/// assert_eq!(format_number(f64::NAN), "Error");
/// ```
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return DISPLAY_ERROR.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    value.to_string()
}

// =============================================================================
// Unit Tests
// =============================================================================
