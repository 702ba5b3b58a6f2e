//! # Validation Module
//!
//! Checks on display text that gate engine operations.
//!
//! ## Where These Checks Apply
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Operation       Requires valid number?   Other guard                   │
//! │  ─────────────   ──────────────────────   ───────────────────────────   │
//! │  digit           no                       "0" is replaced, not extended │
//! │  decimal_point   no                       at most one '.'               │
//! │  operator        yes (to capture)         skip eval when awaiting       │
//! │  equals          yes                      operand + operator pending    │
//! │  sign_toggle     yes                      not "0"                       │
//! │  percent         yes                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::numeric::parse_operand;

/// Returns true if `text` parses as a finite number.
///
/// ## Example
/// ```rust
/// use keypad_core::validation::is_valid_number;
///
/// assert!(is_valid_number("3.14"));
/// assert!(is_valid_number("-0."));
/// assert!(!is_valid_number("Error"));
/// assert!(!is_valid_number(""));
/// ```
pub fn is_valid_number(text: &str) -> bool {
    parse_operand(text).is_some()
}

/// Returns true if `text` already holds a decimal point.
pub fn has_decimal_point(text: &str) -> bool {
    text.contains('.')
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_number() {
        assert!(is_valid_number("0"));
        assert!(is_valid_number("42"));
        assert!(is_valid_number("-7.25"));
        assert!(is_valid_number("0."));

        assert!(!is_valid_number("Error"));
        assert!(!is_valid_number(""));
        assert!(!is_valid_number("1.2.3"));
        assert!(!is_valid_number("infinity"));
    }

    #[test]
    fn test_has_decimal_point() {
        assert!(has_decimal_point("0."));
        assert!(has_decimal_point("-1.5"));
        assert!(!has_decimal_point("15"));
    }
}
