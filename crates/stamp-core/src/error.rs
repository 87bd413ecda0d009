//! # Error Types
//!
//! Domain-specific error types for stamp-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  stamp-core errors (this file)                                         │
//! │  ├── CoreError        - General domain errors                          │
//! │  └── ValidationError  - Input text that cannot become an Amount/Stamp  │
//! │                                                                         │
//! │  stamp-cli errors (app crate)                                          │
//! │  └── CliError         - I/O, config, fatal validation                  │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → CliError → stderr + exit code     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The search engine itself never fails. An impossible goal is an empty
//! result list, not an error.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core domain errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// More denominations than the configured limit.
    ///
    /// ## When This Occurs
    /// The search branches once per denomination at every level, so the
    /// interface caps how many may be entered.
    #[error("Too many denominations: {count} entered, at most {max} allowed")]
    TooManyDenominations { count: usize, max: usize },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Produced while turning typed-in text into amounts, counts and stamps.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// Text is not a decimal amount.
    #[error("{field} is not a valid amount: '{input}'")]
    InvalidAmount { field: String, input: String },

    /// Stamp value token does not match the value pattern.
    #[error("'{input}' is not a stamp value")]
    InvalidStampValue { input: String },

    /// A count was given with a fractional part or a sign.
    #[error("{field} must be a whole number, got {input}")]
    NotAWholeNumber { field: String, input: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: u64, max: u64 },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::TooManyDenominations { count: 41, max: 40 };
        assert_eq!(
            err.to_string(),
            "Too many denominations: 41 entered, at most 40 allowed"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::InvalidAmount {
            field: "goal".to_string(),
            input: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "goal is not a valid amount: 'abc'");

        let err = ValidationError::OutOfRange {
            field: "max stamps".to_string(),
            min: 0,
            max: 12,
        };
        assert_eq!(err.to_string(), "max stamps must be between 0 and 12");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::InvalidStampValue {
            input: "x".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
