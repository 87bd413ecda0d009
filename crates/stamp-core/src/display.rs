//! # Display Module
//!
//! Text rendering for ranked results. Pure string building; the CLI decides
//! where the text goes.
//!
//! ## Output Shape
//! ```text
//! With two stamps:
//!     1.05 - Forever (0.60) + (0.45)
//!     1.20 - Forever (0.60) + Forever (0.60)
//!
//! With three stamps:
//!     1.35 - (0.45) + (0.45) + (0.45)
//! ```
//!
//! Totals keep the scale the arithmetic produced. Rounding only happens
//! when `decimal_places` is set.

use crate::money::Amount;
use crate::types::SearchResult;

const NUMBER_WORDS: [&str; 10] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

/// How totals are laid out on each result line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayOptions {
    /// Round totals to this many digits after the decimal point.
    /// `None` prints the exact total.
    pub decimal_places: Option<u32>,
    /// Minimum width of the total column, right-aligned.
    pub total_width: usize,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        DisplayOptions {
            decimal_places: None,
            total_width: 8,
        }
    }
}

/// Spells out 0 through 9; larger numbers stay as digits.
///
/// ## Example
/// ```rust
/// use stamp_core::display::number_word;
///
/// assert_eq!(number_word(3), "three");
/// assert_eq!(number_word(12), "12");
/// ```
pub fn number_word(n: usize) -> String {
    NUMBER_WORDS
        .get(n)
        .map(|word| word.to_string())
        .unwrap_or_else(|| n.to_string())
}

/// Fills `{n}` in the singular or plural template with [`number_word`].
pub fn quantity(n: usize, singular: &str, plural: &str) -> String {
    let template = if n == 1 { singular } else { plural };
    template.replace("{n}", &number_word(n))
}

/// Header printed above each size group, e.g. `With two stamps:`.
pub fn group_header(size: usize) -> String {
    quantity(size, "With {n} stamp:", "With {n} stamps:")
}

/// Formats a total right-aligned to `total_width`, exact unless
/// `decimal_places` asks for rounding.
pub fn format_total(total: Amount, options: DisplayOptions) -> String {
    let text = match options.decimal_places {
        Some(places) => total.to_fixed(places),
        None => total.to_string(),
    };
    format!("{:>width$}", text, width = options.total_width)
}

/// One result line: total, then the stamps joined by ` + `.
pub fn format_result_line(result: &SearchResult, goal: Amount, options: DisplayOptions) -> String {
    let stamps = result
        .stamps()
        .iter()
        .map(|stamp| stamp.to_string())
        .collect::<Vec<_>>()
        .join(" + ");

    format!("{} - {}", format_total(result.total(goal), options), stamps)
}

// =============================================================================
// Unit Tests
// =============================================================================
