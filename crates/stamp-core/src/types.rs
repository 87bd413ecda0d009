//! # Domain Types
//!
//! Core domain types used by the search engine and the CLI.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │     Stamp       │   │    StampSet     │   │  SearchResult   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  value (Amount) │◄──│  Vec<Stamp>     │   │  size           │       │
//! │  │  name (Option)  │   │  sorted desc,   │   │  overage        │       │
//! │  └─────────────────┘   │  stable         │   │  stamps         │       │
//! │                        └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All three are immutable once built: fields are private and exposed
//! through accessors only.

use serde::Serialize;
use std::fmt;

use crate::money::Amount;

// =============================================================================
// Stamp
// =============================================================================

/// One available denomination. Usable any number of times in a combination.
///
/// ## Example
/// ```rust
/// use rust_decimal::Decimal;
/// use stamp_core::{Amount, Stamp};
///
/// let forever = Stamp::new(Amount::new(Decimal::new(60, 2)), Some("Forever".into()));
/// assert_eq!(forever.to_string(), "Forever (0.60)");
///
/// let plain = Stamp::unnamed(Amount::new(Decimal::new(45, 2)));
/// assert_eq!(plain.to_string(), "(0.45)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Stamp {
    value: Amount,
    name: Option<String>,
}

impl Stamp {
    /// Creates a stamp. An empty name counts as no name.
    pub fn new(value: Amount, name: Option<String>) -> Self {
        Stamp {
            value,
            name: name.filter(|n| !n.is_empty()),
        }
    }

    /// Creates a stamp without a label.
    pub fn unnamed(value: Amount) -> Self {
        Stamp { value, name: None }
    }

    #[inline]
    pub fn value(&self) -> Amount {
        self.value
    }

    #[inline]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

impl fmt::Display for Stamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{} ({})", name, self.value),
            None => write!(f, "({})", self.value),
        }
    }
}

// =============================================================================
// Stamp Set
// =============================================================================

/// The denominations available to a search, sorted descending by value.
///
/// ## Ordering Invariant
/// ```text
/// input:   [0.45 "A", 0.60, 0.45 "B", 1.00]
///                        │
///                        ▼  stable sort, descending
/// stored:  [1.00, 0.60, 0.45 "A", 0.45 "B"]
/// ```
/// The search only ever moves rightwards through this list, which is what
/// makes every multiset come out exactly once. Equal values keep their
/// input order so results are reproducible.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StampSet {
    stamps: Vec<Stamp>,
}

impl StampSet {
    /// Builds a set from stamps in any order.
    pub fn from_unsorted(mut stamps: Vec<Stamp>) -> Self {
        // sort_by is stable: ties keep input order
        stamps.sort_by(|a, b| b.value.cmp(&a.value));
        StampSet { stamps }
    }

    #[inline]
    pub fn as_slice(&self) -> &[Stamp] {
        &self.stamps
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.stamps.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.stamps.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Stamp> {
        self.stamps.iter()
    }
}

impl FromIterator<Stamp> for StampSet {
    fn from_iter<I: IntoIterator<Item = Stamp>>(iter: I) -> Self {
        StampSet::from_unsorted(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a StampSet {
    type Item = &'a Stamp;
    type IntoIter = std::slice::Iter<'a, Stamp>;

    fn into_iter(self) -> Self::IntoIter {
        self.stamps.iter()
    }
}

// =============================================================================
// Search Result
// =============================================================================

/// One valid combination found by the search.
///
/// ## Invariants
/// - `Σ stamps.value == goal + overage`
/// - `overage >= 0`
/// - `size == stamps.len() <= max_count`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    size: usize,
    overage: Amount,
    stamps: Vec<Stamp>,
}

impl SearchResult {
    /// Creates a result from the stamps chosen and the overage reached.
    pub fn new(overage: Amount, stamps: Vec<Stamp>) -> Self {
        SearchResult {
            size: stamps.len(),
            overage,
            stamps,
        }
    }

    /// Number of stamps used.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Amount by which the total exceeds the goal. Zero is an exact match.
    #[inline]
    pub fn overage(&self) -> Amount {
        self.overage
    }

    /// Stamps in the order the search chose them (descending value).
    #[inline]
    pub fn stamps(&self) -> &[Stamp] {
        &self.stamps
    }

    /// Total value of the combination, computed from the goal.
    #[inline]
    pub fn total(&self, goal: Amount) -> Amount {
        goal + self.overage
    }

    /// Sum of the stamp values, computed from the stamps themselves.
    pub fn stamp_sum(&self) -> Amount {
        self.stamps.iter().map(Stamp::value).sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn stamp(value: rust_decimal::Decimal, name: &str) -> Stamp {
        Stamp::new(Amount::new(value), Some(name.to_string()))
    }

    #[test]
    fn test_stamp_display() {
        assert_eq!(stamp(dec!(0.60), "Forever").to_string(), "Forever (0.60)");
        assert_eq!(Stamp::unnamed(Amount::new(dec!(0.45))).to_string(), "(0.45)");
    }

    #[test]
    fn test_empty_name_is_unnamed() {
        let s = Stamp::new(Amount::new(dec!(1)), Some(String::new()));
        assert_eq!(s.name(), None);
        assert_eq!(s.to_string(), "(1)");
    }

    #[test]
    fn test_stamp_set_sorts_descending_and_stable() {
        let set = StampSet::from_unsorted(vec![
            stamp(dec!(0.45), "A"),
            stamp(dec!(0.60), "B"),
            stamp(dec!(0.45), "C"),
            stamp(dec!(1.00), "D"),
        ]);

        let names: Vec<_> = set.iter().filter_map(Stamp::name).collect();
        assert_eq!(names, vec!["D", "B", "A", "C"]);
        assert_eq!(set.len(), 4);
        assert!(!set.is_empty());
    }

    #[test]
    fn test_stamp_set_from_iterator() {
        let set: StampSet = [dec!(1), dec!(3), dec!(2)]
            .into_iter()
            .map(|v| Stamp::unnamed(Amount::new(v)))
            .collect();
        let values: Vec<_> = set.iter().map(|s| s.value()).collect();
        assert_eq!(
            values,
            vec![
                Amount::new(dec!(3)),
                Amount::new(dec!(2)),
                Amount::new(dec!(1))
            ]
        );
    }

    #[test]
    fn test_search_result_accessors() {
        let stamps = vec![stamp(dec!(0.60), "A"), stamp(dec!(0.60), "A")];
        let result = SearchResult::new(Amount::new(dec!(0.20)), stamps);

        assert_eq!(result.size(), 2);
        assert_eq!(result.overage(), Amount::new(dec!(0.20)));
        assert_eq!(result.total(Amount::new(dec!(1.00))), Amount::new(dec!(1.20)));
        assert_eq!(result.stamp_sum(), Amount::new(dec!(1.20)));
    }

    #[test]
    fn test_serialize_amounts_as_strings() {
        let json = serde_json::to_string(&stamp(dec!(0.60), "Forever")).unwrap();
        assert_eq!(json, r#"{"value":"0.60","name":"Forever"}"#);
    }
}
