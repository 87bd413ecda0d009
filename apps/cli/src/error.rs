//! # CLI Error Types
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  bad STAMP line, stamp limit ──► re-prompt (never reaches here)        │
//! │                                                                         │
//! │  ValidationError (stamp-core)                                          │
//! │  ConfigError (config.rs)        ──► CliError ──► main: log + exit 1    │
//! │  io::Error, serde_json::Error                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use stamp_core::ValidationError;
use thiserror::Error;

use crate::config::ConfigError;

/// Convenience type alias for Results with CliError.
pub type CliResult<T> = Result<T, CliError>;

/// Everything that can end an interactive session early.
#[derive(Debug, Error)]
pub enum CliError {
    /// Reading stdin or writing stdout failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file or environment override was unusable.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A GOAL, CAP or MAX STAMPS answer could not be used.
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Input ended while a parameter was still needed.
    #[error("Input ended before {field} was entered")]
    UnexpectedEof { field: String },

    /// Results could not be rendered as JSON.
    #[error("JSON output failed: {0}")]
    Json(#[from] serde_json::Error),
}

// =============================================================================
// Unit Tests
// =============================================================================
