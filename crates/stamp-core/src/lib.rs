//! # stamp-core: Pure Search Logic for the Stamp Calculator
//!
//! Finds every way to reach a postage amount from a set of stamp
//! denominations, within a cap and a maximum number of stamps. All logic
//! here is pure: no I/O, no logging, no globals.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Stamp Calculator Architecture                       │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    stamp-cli (apps/cli)                         │   │
//! │  │   config ──► prompts ──► search ──► rank ──► print             │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ stamp-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐ ┌──────────┐ ┌──────────┐ ┌──────────┐          │   │
//! │  │   │  money   │ │  search  │ │ ranking  │ │validation│          │   │
//! │  │   │  Amount  │ │  DFS +   │ │  sort +  │ │  text →  │          │   │
//! │  │   │          │ │  pruning │ │  group   │ │  types   │          │   │
//! │  │   └──────────┘ └──────────┘ └──────────┘ └──────────┘          │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO LOGGING • PURE FUNCTIONS                          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Stamp, StampSet, SearchResult
//! - [`money`] - Exact decimal `Amount`
//! - [`search`] - Combination search engine
//! - [`ranking`] - Result ordering and size groups
//! - [`validation`] - Parsing of typed-in amounts and stamp lines
//! - [`display`] - Result line and header text
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use stamp_core::validation::{parse_amount, parse_stamp_line};
//! use stamp_core::{group_by_size, rank, search, StampSet};
//!
//! let stamps = StampSet::from_unsorted(vec![
//!     parse_stamp_line("0.45").unwrap(),
//!     parse_stamp_line("0.60 Forever").unwrap(),
//! ]);
//! let goal = parse_amount("goal", "1.00").unwrap();
//! let cap = parse_amount("cap", "2.00").unwrap();
//!
//! let mut results = search(&stamps, goal, cap, 3);
//! rank(&mut results);
//!
//! // Closest two-stamp match first: 0.60 + 0.45 = 1.05
//! assert_eq!(results[0].total(goal).to_string(), "1.05");
//! assert_eq!(group_by_size(&results).len(), 2);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod display;
pub mod error;
pub mod money;
pub mod ranking;
pub mod search;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Amount;
pub use ranking::{group_by_size, rank, ResultGroup};
pub use search::{search, search_with_stats, SearchOutcome, SearchStats};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Default upper bound on MAX STAMPS.
///
/// The search tree grows exponentially with the stamp count, so the
/// interface refuses larger values unless configured otherwise.
pub const DEFAULT_MAX_STAMPS: u32 = 12;

/// Default upper bound on the number of denominations entered.
pub const DEFAULT_MAX_DENOMINATIONS: usize = 40;
