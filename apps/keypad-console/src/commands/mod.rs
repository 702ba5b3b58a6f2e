//! # Commands Module
//!
//! All commands exposed to the presentation layer.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── keypad.rs   ◄─── One command per button kind
//! └── session.rs  ◄─── Open/close sessions, scripted replay
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  Presentation layer                                                     │
//! │  ──────────────────                                                     │
//! │  press_button(&registry, &session_id, "×")                              │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Rust host                                                              │
//! │  ─────────                                                              │
//! │  fn press_button(                                                       │
//! │      registry: &SessionRegistry,  ◄── Shared session map               │
//! │      session_id: &str,            ◄── Which keypad                     │
//! │      label: &str,                 ◄── Button label                     │
//! │  ) -> Result<DisplayResponse, ApiError>                                 │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Presentation renders response.display verbatim                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod keypad;
pub mod session;

pub use keypad::DisplayResponse;
pub use session::{ReplayResponse, ReplayStep, SessionResponse};
