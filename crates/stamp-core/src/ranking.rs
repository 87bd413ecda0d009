//! # Ranking Module
//!
//! Orders search results for display and splits them into size groups.
//!
//! ## Ordering
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Key: (size, overage), ascending. Stable.                               │
//! │                                                                         │
//! │   discovery order              ranked                                   │
//! │   ────────────────             ──────────────────                       │
//! │   0.60+0.60       (2, 0.20)    0.60+0.45       (2, 0.05) ┐ group 2      │
//! │   0.60+0.45       (2, 0.05) ─► 0.60+0.60       (2, 0.20) ┘              │
//! │   0.45+0.45+0.45  (3, 0.35)    0.45+0.45+0.45  (3, 0.35) ─ group 3      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//! Results with equal keys keep the order the search found them in.

use crate::types::SearchResult;

/// A run of consecutive results sharing the same size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultGroup<'a> {
    pub size: usize,
    pub results: &'a [SearchResult],
}

/// Sorts results by fewest stamps, then smallest overage.
pub fn rank(results: &mut [SearchResult]) {
    results.sort_by(|a, b| {
        a.size()
            .cmp(&b.size())
            .then_with(|| a.overage().cmp(&b.overage()))
    });
}

/// Splits results into runs of equal size, preserving order.
///
/// Call after [`rank`] to get one group per size, ascending.
pub fn group_by_size(results: &[SearchResult]) -> Vec<ResultGroup<'_>> {
    results
        .chunk_by(|a, b| a.size() == b.size())
        .map(|chunk| ResultGroup {
            size: chunk[0].size(),
            results: chunk,
        })
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Amount;
    use crate::types::Stamp;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn result(overage: Decimal, names: &[&str]) -> SearchResult {
        let stamps = names
            .iter()
            .map(|n| Stamp::new(Amount::new(dec!(1)), Some(n.to_string())))
            .collect();
        SearchResult::new(Amount::new(overage), stamps)
    }

    fn first_names(results: &[SearchResult]) -> Vec<&str> {
        results
            .iter()
            .map(|r| r.stamps().first().and_then(Stamp::name).unwrap_or("-"))
            .collect()
    }

    #[test]
    fn test_rank_by_size_then_overage() {
        let mut results = vec![
            result(dec!(0.20), &["a", "a"]),
            result(dec!(0.05), &["b", "b"]),
            result(dec!(0.35), &["c", "c", "c"]),
            result(dec!(0.50), &["d"]),
        ];
        rank(&mut results);

        assert_eq!(first_names(&results), vec!["d", "b", "a", "c"]);
    }

    #[test]
    fn test_rank_is_stable_for_equal_keys() {
        let mut results = vec![
            result(dec!(0.10), &["first", "x"]),
            result(dec!(0.00), &["exact", "x"]),
            result(dec!(0.10), &["second", "x"]),
        ];
        rank(&mut results);

        assert_eq!(first_names(&results), vec!["exact", "first", "second"]);
    }

    #[test]
    fn test_rank_compares_overage_numerically() {
        let mut results = vec![result(dec!(0.5), &["half"]), result(dec!(0.05), &["twentieth"])];
        rank(&mut results);
        assert_eq!(first_names(&results), vec!["twentieth", "half"]);
    }

    #[test]
    fn test_group_by_size() {
        let mut results = vec![
            result(dec!(0.20), &["a", "a"]),
            result(dec!(0.35), &["c", "c", "c"]),
            result(dec!(0.05), &["b", "b"]),
        ];
        rank(&mut results);
        let groups = group_by_size(&results);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].size, 2);
        assert_eq!(groups[0].results.len(), 2);
        assert_eq!(groups[1].size, 3);
        assert_eq!(groups[1].results.len(), 1);
    }

    #[test]
    fn test_group_empty_combination() {
        let results = vec![result(dec!(0), &[])];
        let groups = group_by_size(&results);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].size, 0);
    }

    #[test]
    fn test_group_no_results() {
        assert!(group_by_size(&[]).is_empty());
    }
}
