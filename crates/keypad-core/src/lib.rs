//! # keypad-core: Pure Calculator Logic for Keypad
//!
//! This crate is the **heart** of Keypad. It holds the calculator state
//! machine and nothing else: no rendering, no terminal, no logging sinks.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Keypad Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │             Presentation (web keypad, console host)             │   │
//! │  │     button press ──► InputEvent        display ◄── String       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ keypad-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │  numeric  │  │  engine   │  │ validation│  │   │
//! │  │   │ Operator  │  │ evaluate  │  │ Calculator│  │  display  │  │   │
//! │  │   │InputEvent │  │  format   │  │  Engine   │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO GLOBALS • EVERY EVENT COMPLETES SYNCHRONOUSLY     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`engine`] - The calculator state machine
//! - [`numeric`] - Display text parsing, formatting and operator evaluation
//! - [`types`] - Operators, digits, input events and snapshots
//! - [`validation`] - Display text checks
//! - [`error`] - Input decoding errors
//!
//! ## Example Usage
//!
//! ```rust
//! use keypad_core::{CalculatorEngine, Digit, Operator};
//!
//! let mut engine = CalculatorEngine::new();
//! engine.digit(Digit::new(5).unwrap());
//! engine.operator(Operator::Add);
//! engine.digit(Digit::new(3).unwrap());
//!
//! assert_eq!(engine.equals(), "8");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod engine;
pub mod error;
pub mod numeric;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use engine::CalculatorEngine;
pub use error::{CoreError, CoreResult};
pub use numeric::Evaluation;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Display text of a freshly cleared calculator.
pub const DISPLAY_ZERO: &str = "0";

/// Display sentinel shown in place of any non-finite or undefined result.
///
/// Division by zero, overflow to infinity and NaN all surface as this
/// string rather than as a Rust error.
pub const DISPLAY_ERROR: &str = "Error";
