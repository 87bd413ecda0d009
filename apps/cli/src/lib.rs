//! # stamp-cli
//!
//! Interactive terminal front end for the Stamp Calculator.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  main.rs ──► init_tracing() ──► run()                                  │
//! │                                   │                                     │
//! │                                   ├── config::CalculatorConfig::load   │
//! │                                   └── session::Session::run            │
//! │                                          │                              │
//! │                                          ├── stamp_core::validation    │
//! │                                          ├── stamp_core::search        │
//! │                                          └── report (text / JSON)      │
//! │                                                                         │
//! │  stdout: prompts and results only                                      │
//! │  stderr: tracing output                                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod error;
pub mod report;
pub mod session;

use std::io;

use tracing::info;
use tracing_subscriber::EnvFilter;

pub use config::{CalculatorConfig, ConfigError, OutputFormat};
pub use error::{CliError, CliResult};
pub use session::{Parameters, Session};

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `STAMP_LOG=info` - Parameters and search statistics
/// - `STAMP_LOG=debug` - Also rejected stamp lines and config overrides
/// - `RUST_LOG` is honored when `STAMP_LOG` is unset
/// - Default: WARN, so the interactive transcript stays clean
///
/// Logs go to stderr; stdout carries only the calculator's own text.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env("STAMP_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .init();
}

/// Loads configuration and runs one session on stdin/stdout.
pub fn run() -> CliResult<()> {
    let config = CalculatorConfig::load(None)?;
    info!(
        format = %config.output.format,
        max_stamps = config.limits.max_stamps,
        max_denominations = config.limits.max_denominations,
        "Configuration loaded"
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock(), config);
    session.run()?;

    Ok(())
}
