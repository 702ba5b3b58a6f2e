//! # Domain Types
//!
//! Core domain types used throughout Keypad.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────────┐   │
//! │  │     Digit       │   │    Operator     │   │ CalculatorSnapshot  │   │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────────  │   │
//! │  │  0..=9 (u8)     │   │  Add       +    │   │  display            │   │
//! │  └────────┬────────┘   │  Subtract  -    │   │  first_operand      │   │
//! │           │            │  Multiply  ×    │   │  pending_operator   │   │
//! │           │            │  Divide    ÷    │   │  awaiting_fresh_... │   │
//! │           │            └────────┬────────┘   └─────────────────────┘   │
//! │           └──────────┬──────────┘                                       │
//! │                      ▼                                                  │
//! │            ┌───────────────────┐                                        │
//! │            │    InputEvent     │  ◄── decoded from button labels        │
//! │            │  Digit, Decimal,  │      ("7", "×", "AC", "+/-", ...)      │
//! │            │  Operator, Equals │                                        │
//! │            │  Clear, SignToggle│                                        │
//! │            │  Percent          │                                        │
//! │            └───────────────────┘                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};

// =============================================================================
// Button Labels
// =============================================================================

/// Every label the keypad understands, in keypad order (top-left first).
pub const BUTTON_LABELS: [&str; 19] = [
    "AC", "+/-", "%", "÷", //
    "7", "8", "9", "×", //
    "4", "5", "6", "-", //
    "1", "2", "3", "+", //
    "0", ".", "=",
];

// =============================================================================
// Digit
// =============================================================================

/// A single decimal digit, `0` through `9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(try_from = "u8", into = "u8")]
#[ts(export)]
pub struct Digit(u8);

impl Digit {
    /// Creates a digit, rejecting anything above 9.
    ///
    /// ## Example
    /// ```rust
    /// use keypad_core::Digit;
    ///
    /// assert_eq!(Digit::new(7).unwrap().value(), 7);
    /// assert!(Digit::new(10).is_err());
    /// ```
    pub fn new(value: u8) -> CoreResult<Self> {
        if value > 9 {
            return Err(CoreError::InvalidDigit(value.to_string()));
        }
        Ok(Digit(value))
    }

    /// Returns the numeric value.
    #[inline]
    pub const fn value(&self) -> u8 {
        self.0
    }

    /// Returns the ASCII character for this digit.
    #[inline]
    pub const fn as_char(&self) -> char {
        (b'0' + self.0) as char
    }
}

impl TryFrom<u8> for Digit {
    type Error = CoreError;

    fn try_from(value: u8) -> CoreResult<Self> {
        Digit::new(value)
    }
}

impl TryFrom<char> for Digit {
    type Error = CoreError;

    fn try_from(c: char) -> CoreResult<Self> {
        c.to_digit(10)
            .map(|d| Digit(d as u8))
            .ok_or_else(|| CoreError::InvalidDigit(c.to_string()))
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> Self {
        digit.0
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Operator
// =============================================================================

/// One of the four binary operators on the keypad.
///
/// A closed set: there is no "unknown operator" at runtime, so evaluation
/// never needs a fallback branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Operator {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Subtract,
    #[serde(rename = "×")]
    Multiply,
    #[serde(rename = "÷")]
    Divide,
}

impl Operator {
    /// All operators in keypad order.
    pub const ALL: [Operator; 4] = [
        Operator::Divide,
        Operator::Multiply,
        Operator::Subtract,
        Operator::Add,
    ];

    /// Returns the keypad symbol.
    pub const fn symbol(&self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "×",
            Operator::Divide => "÷",
        }
    }
}

impl FromStr for Operator {
    type Err = CoreError;

    /// Parses a keypad symbol.
    ///
    /// ## Example
    /// ```rust
    /// use keypad_core::Operator;
    ///
    /// assert_eq!("×".parse::<Operator>().unwrap(), Operator::Multiply);
    /// assert!("*".parse::<Operator>().is_err());
    /// ```
    fn from_str(s: &str) -> CoreResult<Self> {
        Operator::ALL
            .into_iter()
            .find(|op| op.symbol() == s)
            .ok_or_else(|| CoreError::UnknownOperator(s.to_string()))
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

// =============================================================================
// Input Event
// =============================================================================

/// A discrete button press forwarded by the presentation layer.
///
/// ## Label Mapping
/// ```text
/// "0".."9" ──► Digit        "AC"  ──► Clear
/// "."      ──► DecimalPoint "+/-" ──► SignToggle
/// "+-×÷"   ──► Operator     "%"   ──► Percent
/// "="      ──► Equals
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
#[ts(export)]
pub enum InputEvent {
    Digit(Digit),
    DecimalPoint,
    Operator(Operator),
    Equals,
    Clear,
    SignToggle,
    Percent,
}

impl InputEvent {
    /// Returns the button label that produces this event.
    pub fn label(&self) -> String {
        match self {
            InputEvent::Digit(d) => d.to_string(),
            InputEvent::DecimalPoint => ".".to_string(),
            InputEvent::Operator(op) => op.symbol().to_string(),
            InputEvent::Equals => "=".to_string(),
            InputEvent::Clear => "AC".to_string(),
            InputEvent::SignToggle => "+/-".to_string(),
            InputEvent::Percent => "%".to_string(),
        }
    }
}

impl FromStr for InputEvent {
    type Err = CoreError;

    /// Decodes a button label.
    ///
    /// ## Example
    /// ```rust
    /// use keypad_core::{InputEvent, Operator};
    ///
    /// assert_eq!("AC".parse::<InputEvent>().unwrap(), InputEvent::Clear);
    /// assert_eq!("÷".parse::<InputEvent>().unwrap(), InputEvent::Operator(Operator::Divide));
    /// assert!("MC".parse::<InputEvent>().is_err());
    /// ```
    fn from_str(label: &str) -> CoreResult<Self> {
        let event = match label {
            "." => InputEvent::DecimalPoint,
            "=" => InputEvent::Equals,
            "AC" => InputEvent::Clear,
            "+/-" => InputEvent::SignToggle,
            "%" => InputEvent::Percent,
            _ => {
                if let Ok(op) = label.parse::<Operator>() {
                    return Ok(InputEvent::Operator(op));
                }
                let mut chars = label.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if c.is_ascii_digit() => InputEvent::Digit(Digit::try_from(c)?),
                    _ => return Err(CoreError::UnknownButton(label.to_string())),
                }
            }
        };
        Ok(event)
    }
}

impl From<Digit> for InputEvent {
    fn from(digit: Digit) -> Self {
        InputEvent::Digit(digit)
    }
}

impl From<Operator> for InputEvent {
    fn from(op: Operator) -> Self {
        InputEvent::Operator(op)
    }
}

impl fmt::Display for InputEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

// =============================================================================
// Calculator Snapshot
// =============================================================================

/// Read-only copy of an engine's state, for rendering and inspection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CalculatorSnapshot {
    /// Text currently shown on the display.
    pub display: String,

    /// Left-hand value of the pending operation.
    pub first_operand: Option<f64>,

    /// Operator awaiting its second operand.
    pub pending_operator: Option<Operator>,

    /// Whether the next digit starts a new number.
    pub awaiting_fresh_operand: bool,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_bounds() {
        assert!(Digit::new(0).is_ok());
        assert!(Digit::new(9).is_ok());
        assert_eq!(Digit::new(10), Err(CoreError::InvalidDigit("10".to_string())));
        assert_eq!(Digit::try_from('4').unwrap().as_char(), '4');
        assert!(Digit::try_from('x').is_err());
    }

    #[test]
    fn test_operator_symbols() {
        for op in Operator::ALL {
            assert_eq!(op.symbol().parse::<Operator>().unwrap(), op);
        }
        assert!("/".parse::<Operator>().is_err());
        assert!("".parse::<Operator>().is_err());
    }

    #[test]
    fn test_every_button_label_decodes() {
        for label in BUTTON_LABELS {
            let event: InputEvent = label.parse().unwrap();
            assert_eq!(event.label(), label);
        }
    }

    #[test]
    fn test_unknown_labels_rejected() {
        assert_eq!(
            "12".parse::<InputEvent>(),
            Err(CoreError::UnknownButton("12".to_string()))
        );
        assert!("".parse::<InputEvent>().is_err());
        assert!("ac".parse::<InputEvent>().is_err());
        assert!("*".parse::<InputEvent>().is_err());
    }

    #[test]
    fn test_input_event_serialization() {
        let json = serde_json::to_value(InputEvent::Operator(Operator::Multiply)).unwrap();
        assert_eq!(json, serde_json::json!({ "kind": "operator", "value": "×" }));

        let json = serde_json::to_value(InputEvent::Digit(Digit::new(3).unwrap())).unwrap();
        assert_eq!(json, serde_json::json!({ "kind": "digit", "value": 3 }));

        let back: InputEvent = serde_json::from_value(serde_json::json!({ "kind": "signToggle" })).unwrap();
        assert_eq!(back, InputEvent::SignToggle);
    }

    #[test]
    fn test_digit_deserialize_rejects_out_of_range() {
        assert!(serde_json::from_str::<Digit>("11").is_err());
        assert_eq!(serde_json::from_str::<Digit>("8").unwrap().value(), 8);
    }
}
