//! # Configuration State
//!
//! Stores host configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command-line flags (`--json`, `--echo`)
//! 2. Environment variables (`KEYPAD_*`)
//! 3. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

/// Default tracing filter when neither `RUST_LOG` nor `KEYPAD_LOG` is set.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Configuration parse errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Unknown output format: {0:?} (expected \"plain\" or \"json\")")]
    UnknownOutputFormat(String),

    #[error("Invalid boolean for {key}: {value:?}")]
    InvalidBool { key: String, value: String },
}

/// How command results are written to stdout.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Bare display text, one line per reported display
    #[default]
    Plain,

    /// Serialized command responses
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "plain" | "text" => Ok(OutputFormat::Plain),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::UnknownOutputFormat(s.to_string())),
        }
    }
}

/// Host configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Output format for command results
    pub output: OutputFormat,

    /// Report the display after every button, not just the last one
    pub echo: bool,

    /// Tracing filter directive (`RUST_LOG` still wins when set)
    pub log_filter: String,

    /// Environment values that were ignored, kept for logging once tracing
    /// is up
    #[serde(skip)]
    pub rejected: Vec<ConfigError>,
}

impl Default for ConfigState {
    fn default() -> Self {
        ConfigState {
            output: OutputFormat::Plain,
            echo: false,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            rejected: Vec::new(),
        }
    }
}

impl ConfigState {
    /// Creates a ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `KEYPAD_OUTPUT`: `plain` or `json`
    /// - `KEYPAD_ECHO`: `1`/`true`/`yes` or `0`/`false`/`no`
    /// - `KEYPAD_LOG`: tracing filter directive
    ///
    /// Malformed values are collected in `rejected` and the default is kept.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConfigState::default();

        if let Some(output) = lookup("KEYPAD_OUTPUT") {
            match output.parse() {
                Ok(format) => config.output = format,
                Err(e) => config.rejected.push(e),
            }
        }

        if let Some(echo) = lookup("KEYPAD_ECHO") {
            match parse_bool("KEYPAD_ECHO", &echo) {
                Ok(flag) => config.echo = flag,
                Err(e) => config.rejected.push(e),
            }
        }

        if let Some(filter) = lookup("KEYPAD_LOG") {
            if !filter.trim().is_empty() {
                config.log_filter = filter;
            }
        }

        config
    }

    /// Logs every rejected environment value.
    pub fn log_rejected(&self) {
        for e in &self.rejected {
            warn!(error = %e, "Ignoring environment value");
        }
    }

    /// Applies command-line flags on top of this configuration.
    ///
    /// Flags can only switch features on; an absent flag keeps the
    /// environment value.
    pub fn with_flags(mut self, json: bool, echo: bool) -> Self {
        if json {
            self.output = OutputFormat::Json;
        }
        if echo {
            self.echo = true;
        }
        self
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}
