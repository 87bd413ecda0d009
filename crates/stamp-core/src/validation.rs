//! # Validation Module
//!
//! Turns typed-in text into amounts, counts and stamps.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Where Each Check Runs                              │
//! │                                                                         │
//! │  GOAL / CAP        parse_amount         signed decimal                  │
//! │  MAX STAMPS        parse_max_count      whole number, 0..=limit         │
//! │  STAMP lines       parse_stamp_line     "<value>[ <name>]"              │
//! │  each new stamp    validate_stamp_count at most `limit` denominations   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  search() only ever sees clean, typed input                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Value Syntax
//! A stamp value is digits with at most one decimal point: `123`,
//! `123.45`, `.45` and `123.` are accepted; signs, exponents and a lone
//! `.` are not.
//!
//! ## Usage
//! ```rust
//! use stamp_core::validation::{parse_amount, parse_stamp_line};
//!
//! let goal = parse_amount("goal", " 1.00 ").unwrap();
//! assert_eq!(goal.to_string(), "1.00");
//!
//! let stamp = parse_stamp_line(".60 Forever Flag").unwrap();
//! assert_eq!(stamp.to_string(), "Forever Flag (0.60)");
//!
//! assert!(parse_stamp_line("sixty").is_err());
//! ```

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Amount;
use crate::types::Stamp;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Stamp Lines
// =============================================================================

/// Checks a token against the stamp value syntax.
///
/// ## Example
/// ```rust
/// use stamp_core::validation::is_stamp_value;
///
/// assert!(is_stamp_value("123"));
/// assert!(is_stamp_value(".45"));
/// assert!(is_stamp_value("123."));
/// assert!(!is_stamp_value("."));
/// assert!(!is_stamp_value("-1"));
/// ```
pub fn is_stamp_value(token: &str) -> bool {
    let mut digits = 0usize;
    let mut points = 0usize;

    for c in token.chars() {
        match c {
            '0'..='9' => digits += 1,
            '.' => points += 1,
            _ => return false,
        }
    }

    digits > 0 && points <= 1
}

/// Parses one stamp entry line: a value, then optionally a space and a name.
///
/// The line is split at the first space only, so names may contain
/// spaces. A missing or empty name gives an unnamed stamp.
pub fn parse_stamp_line(line: &str) -> ValidationResult<Stamp> {
    let (token, name) = match line.split_once(' ') {
        Some((token, name)) => (token, Some(name.to_string())),
        None => (line, None),
    };

    if !is_stamp_value(token) {
        return Err(ValidationError::InvalidStampValue {
            input: token.to_string(),
        });
    }

    let value = decimal_from_token(token).ok_or_else(|| ValidationError::InvalidStampValue {
        input: token.to_string(),
    })?;

    Ok(Stamp::new(Amount::new(value), name))
}

// =============================================================================
// Parameters
// =============================================================================

/// Parses a goal or cap amount.
///
/// ## Rules
/// - Surrounding whitespace is ignored
/// - One optional leading `+` or `-`
/// - The rest must follow the stamp value syntax
pub fn parse_amount(field: &str, text: &str) -> ValidationResult<Amount> {
    let trimmed = text.trim();
    let invalid = || ValidationError::InvalidAmount {
        field: field.to_string(),
        input: trimmed.to_string(),
    };

    let (negative, body) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    if !is_stamp_value(body) {
        return Err(invalid());
    }

    let value = decimal_from_token(body).ok_or_else(invalid)?;
    let amount = Amount::new(value);
    Ok(if negative { amount.negated() } else { amount })
}

/// Parses the maximum number of stamps.
///
/// Accepts the same syntax as [`parse_amount`], then requires a whole
/// number between zero and `limit`. `3.0` is fine, `2.5` is not.
pub fn parse_max_count(text: &str, limit: u32) -> ValidationResult<u32> {
    let amount = parse_amount("max stamps", text)?;
    validate_max_count(amount, limit)
}

/// Validates an already-parsed maximum stamp count.
///
/// ## User Workflow
/// ```text
/// MAX STAMPS --> 4
///      │
///      ▼
/// validate_max_count(4, limit = 12) ← THIS FUNCTION
///      │
///      ├── 2.5?      → Error: "must be a whole number"
///      ├── -1 / 13?  → Error: "must be between 0 and 12"
///      └── OK → 4u32 handed to search()
/// ```
pub fn validate_max_count(amount: Amount, limit: u32) -> ValidationResult<u32> {
    let field = "max stamps";

    if !amount.is_whole() {
        return Err(ValidationError::NotAWholeNumber {
            field: field.to_string(),
            input: amount.to_string(),
        });
    }

    let out_of_range = || ValidationError::OutOfRange {
        field: field.to_string(),
        min: 0,
        max: u64::from(limit),
    };

    let count = amount.decimal().to_u32().ok_or_else(out_of_range)?;
    if count > limit {
        return Err(out_of_range());
    }

    Ok(count)
}

/// Validates the number of denominations entered.
pub fn validate_stamp_count(count: usize, limit: usize) -> CoreResult<()> {
    if count > limit {
        return Err(CoreError::TooManyDenominations { count, max: limit });
    }

    Ok(())
}

// =============================================================================
// Helpers
// =============================================================================

/// Converts a token that already passed [`is_stamp_value`] into a decimal.
///
/// `.45` becomes `0.45` and `123.` becomes `123`, so values display the
/// way they would be written out. Returns `None` when the value does not
/// fit in a `Decimal`.
fn decimal_from_token(token: &str) -> Option<Decimal> {
    let token = token.strip_suffix('.').unwrap_or(token);
    let normalized = if token.starts_with('.') {
        format!("0{}", token)
    } else {
        token.to_string()
    };

    Decimal::from_str_exact(&normalized).ok()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_is_stamp_value() {
        // Valid values
        assert!(is_stamp_value("123"));
        assert!(is_stamp_value("123.45"));
        assert!(is_stamp_value(".45"));
        assert!(is_stamp_value("123."));
        assert!(is_stamp_value("0"));

        // Invalid values
        assert!(!is_stamp_value(""));
        assert!(!is_stamp_value("."));
        assert!(!is_stamp_value("abc"));
        assert!(!is_stamp_value("1.2.3"));
        assert!(!is_stamp_value("-1"));
        assert!(!is_stamp_value("+1"));
        assert!(!is_stamp_value("1e5"));
        assert!(!is_stamp_value("١٢"));
    }

    #[test]
    fn test_parse_stamp_line_with_name() {
        let stamp = parse_stamp_line("0.60 Forever Flag").unwrap();
        assert_eq!(stamp.value(), Amount::new(dec!(0.60)));
        assert_eq!(stamp.name(), Some("Forever Flag"));
    }

    #[test]
    fn test_parse_stamp_line_without_name() {
        let stamp = parse_stamp_line("1.00").unwrap();
        assert_eq!(stamp.name(), None);
        assert_eq!(stamp.to_string(), "(1.00)");

        // Trailing space leaves an empty name
        let stamp = parse_stamp_line("1.00 ").unwrap();
        assert_eq!(stamp.name(), None);
    }

    #[test]
    fn test_parse_stamp_line_normalizes_value_text() {
        assert_eq!(parse_stamp_line(".45").unwrap().to_string(), "(0.45)");
        assert_eq!(parse_stamp_line("5.").unwrap().to_string(), "(5)");
    }

    #[test]
    fn test_parse_stamp_line_rejects_bad_values() {
        assert_eq!(
            parse_stamp_line("sixty cents"),
            Err(ValidationError::InvalidStampValue {
                input: "sixty".to_string()
            })
        );
        assert!(parse_stamp_line(" 0.60").is_err());
        assert!(parse_stamp_line("-0.60 refund").is_err());
        assert!(parse_stamp_line("1.2.3").is_err());
    }

    #[test]
    fn test_parse_stamp_line_rejects_oversized_value() {
        let huge = "9".repeat(40);
        assert!(parse_stamp_line(&huge).is_err());
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("goal", "1.00").unwrap(), Amount::new(dec!(1.00)));
        assert_eq!(parse_amount("goal", "  5\n").unwrap(), Amount::new(dec!(5)));
        assert_eq!(parse_amount("goal", "-.5").unwrap(), Amount::new(dec!(-0.5)));
        assert_eq!(parse_amount("goal", "+2.").unwrap(), Amount::new(dec!(2)));
        assert_eq!(parse_amount("goal", "-0").unwrap().to_string(), "0");

        assert!(parse_amount("goal", "").is_err());
        assert!(parse_amount("goal", "ten").is_err());
        assert!(parse_amount("goal", "--1").is_err());
        assert!(parse_amount("goal", "1 2").is_err());
    }

    #[test]
    fn test_parse_amount_error_names_field() {
        let err = parse_amount("cap", "lots").unwrap_err();
        assert_eq!(err.to_string(), "cap is not a valid amount: 'lots'");
    }

    #[test]
    fn test_parse_max_count() {
        assert_eq!(parse_max_count("3", 12), Ok(3));
        assert_eq!(parse_max_count("3.0", 12), Ok(3));
        assert_eq!(parse_max_count("0", 12), Ok(0));
        assert_eq!(parse_max_count("12", 12), Ok(12));

        assert!(matches!(
            parse_max_count("2.5", 12),
            Err(ValidationError::NotAWholeNumber { .. })
        ));
        assert!(matches!(
            parse_max_count("13", 12),
            Err(ValidationError::OutOfRange { max: 12, .. })
        ));
        assert!(matches!(
            parse_max_count("-1", 12),
            Err(ValidationError::OutOfRange { .. })
        ));
        assert!(matches!(
            parse_max_count("three", 12),
            Err(ValidationError::InvalidAmount { .. })
        ));
    }

    #[test]
    fn test_validate_stamp_count() {
        assert!(validate_stamp_count(0, 40).is_ok());
        assert!(validate_stamp_count(40, 40).is_ok());
        assert!(matches!(
            validate_stamp_count(41, 40),
            Err(CoreError::TooManyDenominations { count: 41, max: 40 })
        ));
    }
}
