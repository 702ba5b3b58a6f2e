//! # Keypad Console Entry Point
//!
//! ```text
//! $ keypad 5 + 3 =
//! 8
//! $ echo "1 ÷ 0 =" | keypad --json
//! { "sessionId": "...", "display": "Error", ... }
//! ```
//!
//! The actual setup is in lib.rs for better testability.

use std::process::ExitCode;

fn main() -> ExitCode {
    keypad_console_lib::run()
}
