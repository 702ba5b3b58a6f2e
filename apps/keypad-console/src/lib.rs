//! # Keypad Console Library
//!
//! Host for the Keypad calculator engine. Stands in for the on-screen keypad:
//! it owns sessions, turns button labels into engine events and reports the
//! display after each one.
//!
//! ## Module Organization
//! ```text
//! keypad_console_lib/
//! ├── lib.rs          ◄─── You are here (CLI parsing & run)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── session.rs  ◄─── Sessions and the session registry
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── keypad.rs   ◄─── Button commands
//! │   └── session.rs  ◄─── Session and replay commands
//! └── error.rs        ◄─── API error type for commands
//! ```

pub mod commands;
pub mod error;
pub mod state;

use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use commands::ReplayResponse;
use error::ApiError;
use state::{ConfigState, OutputFormat, SessionRegistry};

/// Replays keypad button labels through a fresh calculator session.
#[derive(Debug, Parser)]
#[command(name = "keypad", version, about, long_about = None)]
#[command(after_help = "Labels: 0-9 . + - × ÷ = AC +/- %")]
pub struct Cli {
    /// Print JSON responses instead of bare display text
    #[arg(long)]
    pub json: bool,

    /// Print the display after every button, not just the last
    #[arg(long)]
    pub echo: bool,

    /// Button labels to press in order; read from stdin when omitted
    pub labels: Vec<String>,
}

/// Runs the console host.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  1. Parse arguments (clap)                                              │
/// │  2. Load configuration (env, then flags)                                │
/// │  3. Initialize tracing (stderr, RUST_LOG > KEYPAD_LOG > default)        │
/// │  4. Collect labels (arguments, or whitespace-separated stdin)           │
/// │  5. Open a session and replay the labels                                │
/// │  6. Write the result to stdout                                          │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> ExitCode {
    let cli = Cli::parse();
    let config = ConfigState::from_env().with_flags(cli.json, cli.echo);
    init_tracing(&config);
    config.log_rejected();

    info!(output = ?config.output, echo = config.echo, "Starting Keypad console");

    let result = collect_labels(cli.labels).and_then(|labels| execute(&labels));
    match result {
        Ok(response) => {
            let mut stdout = std::io::stdout().lock();
            match write_response(&mut stdout, &config, &response) {
                Ok(()) => ExitCode::SUCCESS,
                Err(e) => {
                    error!(error = %e, "Failed to write output");
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            error!(code = ?e.code, "{}", e.message);
            report_error(&config, &e);
            ExitCode::FAILURE
        }
    }
}

/// Replays `labels` through a new session, closing it afterwards.
pub fn execute<S: AsRef<str>>(labels: &[S]) -> Result<ReplayResponse, ApiError> {
    let registry = SessionRegistry::new();
    let session = commands::session::create_session(&registry);
    let response = commands::session::replay(&registry, &session.session_id, labels);
    commands::session::close_session(&registry, &session.session_id)?;
    response
}

/// Writes a replay result in the configured format.
pub fn write_response<W: Write>(
    out: &mut W,
    config: &ConfigState,
    response: &ReplayResponse,
) -> std::io::Result<()> {
    match config.output {
        OutputFormat::Json => {
            if config.echo {
                serde_json::to_writer_pretty(&mut *out, response)?;
            } else {
                serde_json::to_writer_pretty(&mut *out, &response.result)?;
            }
            writeln!(out)
        }
        OutputFormat::Plain => {
            if config.echo {
                for step in &response.steps {
                    writeln!(out, "{:>4}  {}", step.label, step.display)?;
                }
            }
            writeln!(out, "{}", response.result.display)
        }
    }
}

fn report_error(config: &ConfigState, err: &ApiError) {
    let mut stderr = std::io::stderr().lock();
    let written = match config.output {
        OutputFormat::Json => serde_json::to_writer(&mut stderr, err)
            .map_err(std::io::Error::from)
            .and_then(|()| writeln!(stderr)),
        OutputFormat::Plain => writeln!(stderr, "keypad: {}", err.message),
    };
    // Nothing left to report to if stderr itself is gone
    let _ = written;
}

fn collect_labels(args: Vec<String>) -> Result<Vec<String>, ApiError> {
    if !args.is_empty() {
        return Ok(args);
    }
    let input = std::io::read_to_string(std::io::stdin())
        .map_err(|e| ApiError::internal(format!("Failed to read stdin: {}", e)))?;
    Ok(split_labels(&input))
}

/// Splits whitespace-separated labels.
pub fn split_labels(input: &str) -> Vec<String> {
    input.split_whitespace().map(str::to_string).collect()
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show every button press
/// - `KEYPAD_LOG=keypad=trace` - Same, via configuration
/// - Default: [`state::DEFAULT_LOG_FILTER`]
///
/// Logs go to stderr; stdout carries only display output.
fn init_tracing(config: &ConfigState) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_flags_and_labels() {
        let cli = Cli::try_parse_from(["keypad", "--json", "5", "+", "3", "="]).unwrap();
        assert!(cli.json);
        assert!(!cli.echo);
        assert_eq!(cli.labels, ["5", "+", "3", "="]);
    }

    #[test]
    fn test_cli_accepts_hyphen_label_after_separator() {
        let cli = Cli::try_parse_from(["keypad", "--", "9", "-", "4", "="]).unwrap();
        assert_eq!(cli.labels, ["9", "-", "4", "="]);
    }

    #[test]
    fn test_split_labels() {
        assert_eq!(split_labels(" 1  +\n2\t= "), ["1", "+", "2", "="]);
        assert!(split_labels("   ").is_empty());
    }
}
