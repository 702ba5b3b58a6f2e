//! # Calculator Engine
//!
//! The calculator state machine. One method per input event; each mutates
//! the engine and returns the new display text.
//!
//! ## State Transitions
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   clear ──► display "0", nothing pending                                │
//! │                │                                                        │
//! │           digit/decimal (typing the first operand)                      │
//! │                │                                                        │
//! │                ▼                                                        │
//! │   operator ──► first_operand = display, pending = op, awaiting = true   │
//! │                │                                                        │
//! │           digit/decimal (typing the second operand, awaiting = false)   │
//! │                │                                                        │
//! │       ┌────────┴─────────┐                                              │
//! │       ▼                  ▼                                              │
//! │   operator            equals                                            │
//! │   (chain: evaluate,   (evaluate, show result, clear operand and         │
//! │    result becomes      operator, awaiting = true)                       │
//! │    first_operand)                                                       │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - The display holds a valid number, `"0"`, or `"Error"`, and never more
//!   than one decimal point.
//! - `pending_operator` is set only while `first_operand` is set.
//! - An `"Error"` display always has `awaiting_fresh_operand` set, so the next
//!   digit starts a new number instead of extending the sentinel.

use crate::error::CoreResult;
use crate::numeric::{evaluate, format_number, parse_operand};
use crate::types::{CalculatorSnapshot, Digit, InputEvent, Operator};
use crate::validation::{has_decimal_point, is_valid_number};
use crate::{DISPLAY_ERROR, DISPLAY_ZERO};

/// A single calculator instance.
///
/// Engines share nothing; create as many as needed.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculatorEngine {
    display: String,
    first_operand: Option<f64>,
    pending_operator: Option<Operator>,
    awaiting_fresh_operand: bool,
}

impl CalculatorEngine {
    /// Creates an engine showing `"0"` with nothing pending.
    pub fn new() -> Self {
        CalculatorEngine {
            display: DISPLAY_ZERO.to_string(),
            first_operand: None,
            pending_operator: None,
            awaiting_fresh_operand: false,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Current display text.
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Left-hand operand of the pending operation, if any.
    pub fn first_operand(&self) -> Option<f64> {
        self.first_operand
    }

    /// Operator awaiting its second operand, if any.
    pub fn pending_operator(&self) -> Option<Operator> {
        self.pending_operator
    }

    /// Whether the next digit or decimal point starts a new number.
    pub fn is_awaiting_fresh_operand(&self) -> bool {
        self.awaiting_fresh_operand
    }

    /// Returns a read-only copy of the state.
    pub fn snapshot(&self) -> CalculatorSnapshot {
        CalculatorSnapshot {
            display: self.display.clone(),
            first_operand: self.first_operand,
            pending_operator: self.pending_operator,
            awaiting_fresh_operand: self.awaiting_fresh_operand,
        }
    }

    // =========================================================================
    // Event Dispatch
    // =========================================================================

    /// Routes an event to its handler.
    pub fn apply(&mut self, event: InputEvent) -> &str {
        match event {
            InputEvent::Digit(d) => self.digit(d),
            InputEvent::DecimalPoint => self.decimal_point(),
            InputEvent::Operator(op) => self.operator(op),
            InputEvent::Equals => self.equals(),
            InputEvent::Clear => self.clear(),
            InputEvent::SignToggle => self.sign_toggle(),
            InputEvent::Percent => self.percent(),
        }
    }

    /// Decodes a button label and applies it.
    ///
    /// ## Example
    /// ```rust
    /// use keypad_core::CalculatorEngine;
    ///
    /// let mut engine = CalculatorEngine::new();
    /// for label in ["1", "2", "×", "3", "="] {
    ///     engine.press(label).unwrap();
    /// }
    /// assert_eq!(engine.display(), "36");
    ///
    /// assert!(engine.press("MC").is_err());
    /// assert_eq!(engine.display(), "36");
    /// ```
    pub fn press(&mut self, label: &str) -> CoreResult<&str> {
        let event: InputEvent = label.parse()?;
        Ok(self.apply(event))
    }

    // =========================================================================
    // Input Events
    // =========================================================================

    /// Enters a digit.
    ///
    /// Starts a new number when awaiting a fresh operand, replaces a lone
    /// `"0"`, and otherwise appends.
    pub fn digit(&mut self, digit: Digit) -> &str {
        if self.awaiting_fresh_operand {
            self.display = digit.to_string();
            self.awaiting_fresh_operand = false;
        } else if self.display == DISPLAY_ZERO {
            self.display = digit.to_string();
        } else {
            self.display.push(digit.as_char());
        }
        &self.display
    }

    /// Enters a decimal point. At most one per number.
    pub fn decimal_point(&mut self) -> &str {
        if self.awaiting_fresh_operand {
            self.display = "0.".to_string();
            self.awaiting_fresh_operand = false;
        } else if !has_decimal_point(&self.display) {
            self.display.push('.');
        }
        &self.display
    }

    /// Selects a binary operator.
    ///
    /// ## Behavior
    /// - Nothing pending: the display becomes `first_operand`. If the display
    ///   is not a number (e.g. `"Error"`) the press is ignored.
    /// - Operator pending and a second operand typed: the pending operation
    ///   is evaluated first and its result becomes `first_operand`
    ///   (`5 + 3 -` shows `8`).
    /// - Operator pending but no second operand yet: only the operator is
    ///   replaced (`5 + + ×` evaluates nothing).
    ///
    /// A chained evaluation that is undefined shows `"Error"` and drops the
    /// pending operation.
    pub fn operator(&mut self, op: Operator) -> &str {
        match (self.first_operand, self.pending_operator) {
            (None, _) => {
                let Some(value) = parse_operand(&self.display) else {
                    return &self.display;
                };
                self.first_operand = Some(value);
            }
            (Some(first), Some(pending)) if !self.awaiting_fresh_operand => {
                let Some(second) = parse_operand(&self.display) else {
                    return &self.display;
                };
                match evaluate(first, second, pending).finite() {
                    Some(result) => {
                        self.display = format_number(result);
                        self.first_operand = Some(result);
                    }
                    None => {
                        self.show_error();
                        return &self.display;
                    }
                }
            }
            _ => {}
        }

        self.pending_operator = Some(op);
        self.awaiting_fresh_operand = true;
        &self.display
    }

    /// Completes the pending operation.
    ///
    /// Ignored when nothing is pending or the display is not a number.
    pub fn equals(&mut self) -> &str {
        let (Some(first), Some(op)) = (self.first_operand, self.pending_operator) else {
            return &self.display;
        };
        let Some(second) = parse_operand(&self.display) else {
            return &self.display;
        };

        self.display = evaluate(first, second, op).to_display();
        self.first_operand = None;
        self.pending_operator = None;
        self.awaiting_fresh_operand = true;
        &self.display
    }

    /// Resets everything. Idempotent.
    pub fn clear(&mut self) -> &str {
        *self = CalculatorEngine::new();
        &self.display
    }

    /// Flips the sign of the displayed number.
    ///
    /// Ignored for `"0"` and for anything that is not a number.
    pub fn sign_toggle(&mut self) -> &str {
        if self.display == DISPLAY_ZERO || !is_valid_number(&self.display) {
            return &self.display;
        }

        match self.display.strip_prefix('-') {
            Some(magnitude) => self.display = magnitude.to_string(),
            None => self.display.insert(0, '-'),
        }
        &self.display
    }

    /// Divides the displayed number by 100.
    pub fn percent(&mut self) -> &str {
        if let Some(value) = parse_operand(&self.display) {
            self.display = format_number(value / 100.0);
        }
        &self.display
    }

    fn show_error(&mut self) {
        self.display = DISPLAY_ERROR.to_string();
        self.first_operand = None;
        self.pending_operator = None;
        self.awaiting_fresh_operand = true;
    }
}

impl Default for CalculatorEngine {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
