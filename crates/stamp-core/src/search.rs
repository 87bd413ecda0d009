//! # Search Module
//!
//! Depth-first, branch-and-bound enumeration of stamp combinations.
//!
//! ## How the Search Walks
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  stamps = [0.60, 0.45]   goal = 1.00   cap = 2.00   max = 3            │
//! │                                                                         │
//! │  []                                                                     │
//! │   ├── 0.60                       (goal 0.40, budget 1.40)              │
//! │   │    ├── 0.60  → ✓ overage 0.20                                      │
//! │   │    └── 0.45  → ✓ overage 0.05                                      │
//! │   └── 0.45                       (only 0.45 and cheaper from here)     │
//! │        └── 0.45                                                         │
//! │             └── 0.45  → ✓ overage 0.35                                 │
//! │                                                                         │
//! │  Each node checks, in order:                                            │
//! │    1. budget < 0   → prune (over the cap)                               │
//! │    2. goal  <= 0   → record, stop extending                             │
//! │    3. count == 0   → prune (out of stamps)                              │
//! │    4. branch on every candidate at or after the current one             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Restricting each branch to `candidates[i..]` yields every multiset once,
//! in non-increasing value order, never once per permutation.
//!
//! ## Example
//! ```rust
//! use rust_decimal::Decimal;
//! use stamp_core::{search, Amount, Stamp, StampSet};
//!
//! let amount = |cents| Amount::new(Decimal::new(cents, 2));
//! let stamps = StampSet::from_unsorted(vec![
//!     Stamp::unnamed(amount(45)),
//!     Stamp::unnamed(amount(60)),
//! ]);
//!
//! let results = search(&stamps, amount(100), amount(200), 3);
//! assert_eq!(results.len(), 3);
//! assert!(results.iter().all(|r| r.size() <= 3));
//! ```

use crate::money::Amount;
use crate::types::{SearchResult, Stamp, StampSet};

// =============================================================================
// Search Outcome
// =============================================================================

/// Counters collected while walking the search tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Every call into the recursion, root included.
    pub nodes_visited: u64,
    /// Combinations recorded as results.
    pub accepted: u64,
    /// Paths abandoned because the total passed the cap.
    pub pruned_over_cap: u64,
    /// Paths abandoned because no stamps were left and the goal was unmet.
    pub pruned_exhausted: u64,
}

/// Results of a search together with its counters.
#[derive(Debug, Clone, Default)]
pub struct SearchOutcome {
    /// Combinations in discovery order. Not yet ranked.
    pub results: Vec<SearchResult>,
    pub stats: SearchStats,
}

// =============================================================================
// Public Entry Points
// =============================================================================

/// Enumerates every combination of `stamps` whose total reaches `goal`
/// without passing `cap`, using at most `max_count` stamps.
///
/// Never fails: an unreachable goal gives an empty vector. Results come
/// back in discovery order; use [`crate::ranking::rank`] before display.
pub fn search(stamps: &StampSet, goal: Amount, cap: Amount, max_count: u32) -> Vec<SearchResult> {
    search_with_stats(stamps, goal, cap, max_count).results
}

/// Same as [`search`], also returning node and prune counters.
pub fn search_with_stats(
    stamps: &StampSet,
    goal: Amount,
    cap: Amount,
    max_count: u32,
) -> SearchOutcome {
    let mut walk = Walk::default();
    walk.explore(stamps.as_slice(), goal, cap, max_count);

    SearchOutcome {
        results: walk.found,
        stats: walk.stats,
    }
}

// =============================================================================
// Recursive Walk
// =============================================================================

/// Call-local state shared by every level of the recursion.
#[derive(Default)]
struct Walk<'a> {
    /// Stamps chosen on the current path. Pushed before and popped after
    /// each branch.
    trace: Vec<&'a Stamp>,
    found: Vec<SearchResult>,
    stats: SearchStats,
}

impl<'a> Walk<'a> {
    fn explore(
        &mut self,
        candidates: &'a [Stamp],
        remaining_goal: Amount,
        remaining_budget: Amount,
        remaining_count: u32,
    ) {
        self.stats.nodes_visited += 1;

        // The last stamp pushed the total past the cap
        if remaining_budget.is_negative() {
            self.stats.pruned_over_cap += 1;
            return;
        }

        if !remaining_goal.is_positive() {
            self.record(remaining_goal.negated());
            return;
        }

        if remaining_count == 0 {
            self.stats.pruned_exhausted += 1;
            return;
        }

        for (i, stamp) in candidates.iter().enumerate() {
            self.trace.push(stamp);
            self.explore(
                &candidates[i..],
                remaining_goal - stamp.value(),
                remaining_budget - stamp.value(),
                remaining_count - 1,
            );
            self.trace.pop();
        }
    }

    fn record(&mut self, overage: Amount) {
        let stamps = self.trace.iter().map(|&stamp| stamp.clone()).collect();
        self.found.push(SearchResult::new(overage, stamps));
        self.stats.accepted += 1;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
