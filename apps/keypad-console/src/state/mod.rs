//! # State Module
//!
//! Manages application state for the console host.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────────────────────┐   ┌──────────────────────────┐   │
//! │  │         SessionRegistry          │   │       ConfigState        │   │
//! │  │                                  │   │                          │   │
//! │  │  HashMap<Uuid, SessionState>     │   │  output (plain | json)   │   │
//! │  │        │                         │   │  echo                    │   │
//! │  │        ▼                         │   │  log_filter              │   │
//! │  │  Arc<Mutex<Session>>             │   │                          │   │
//! │  │    engine, event_count, times    │   │                          │   │
//! │  └──────────────────────────────────┘   └──────────────────────────┘   │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • SessionRegistry: map behind a Mutex, handles are cheap clones       │
//! │  • SessionState: Arc<Mutex<Session>> for exclusive access per press    │
//! │  • ConfigState: Read-only after initialization                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod session;

pub use config::{ConfigError, ConfigState, OutputFormat, DEFAULT_LOG_FILTER};
pub use session::{Session, SessionRegistry, SessionState};
