//! # Report Rendering
//!
//! Rendering of ranked results for the terminal.
//!
//! Text output follows the grouped layout from [`stamp_core::display`].
//! JSON output carries the same groups as one document:
//!
//! ```json
//! {
//!   "goal": "1.00",
//!   "cap": "2.00",
//!   "max_stamps": 3,
//!   "groups": [
//!     { "size": 2, "results": [ { "total": "1.05", "overage": "0.05", "stamps": [...] } ] }
//!   ]
//! }
//! ```

use serde::Serialize;
use stamp_core::display::{format_result_line, group_header, DisplayOptions};
use stamp_core::{group_by_size, Amount, SearchResult, Stamp};

use crate::error::CliResult;

#[derive(Debug, Serialize)]
struct ReportDocument<'a> {
    goal: Amount,
    cap: Amount,
    max_stamps: u32,
    groups: Vec<GroupEntry<'a>>,
}

#[derive(Debug, Serialize)]
struct GroupEntry<'a> {
    size: usize,
    results: Vec<ResultEntry<'a>>,
}

#[derive(Debug, Serialize)]
struct ResultEntry<'a> {
    total: Amount,
    overage: Amount,
    stamps: &'a [Stamp],
}

/// Renders ranked results as grouped text lines.
///
/// Each group starts with a blank line and its header. No results gives
/// an empty string.
pub fn render_text(results: &[SearchResult], goal: Amount, options: DisplayOptions) -> String {
    let mut out = String::new();

    for group in group_by_size(results) {
        out.push('\n');
        out.push_str(&group_header(group.size));
        out.push('\n');
        for result in group.results {
            out.push_str(&format_result_line(result, goal, options));
            out.push('\n');
        }
    }

    out
}

/// Renders ranked results as a pretty-printed JSON document.
pub fn render_json(
    results: &[SearchResult],
    goal: Amount,
    cap: Amount,
    max_stamps: u32,
) -> CliResult<String> {
    let groups = group_by_size(results)
        .into_iter()
        .map(|group| GroupEntry {
            size: group.size,
            results: group
                .results
                .iter()
                .map(|result| ResultEntry {
                    total: result.total(goal),
                    overage: result.overage(),
                    stamps: result.stamps(),
                })
                .collect(),
        })
        .collect();

    let document = ReportDocument {
        goal,
        cap,
        max_stamps,
        groups,
    };

    Ok(serde_json::to_string_pretty(&document)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use stamp_core::{rank, search, StampSet};

    fn ranked_results() -> (Vec<SearchResult>, Amount) {
        let stamps = StampSet::from_unsorted(vec![
            Stamp::unnamed(Amount::new(dec!(0.45))),
            Stamp::new(Amount::new(dec!(0.60)), Some("Forever".to_string())),
        ]);
        let goal = Amount::new(dec!(1.00));
        let mut results = search(&stamps, goal, Amount::new(dec!(2.00)), 3);
        rank(&mut results);
        (results, goal)
    }

    #[test]
    fn test_render_text() {
        let (results, goal) = ranked_results();
        let text = render_text(&results, goal, DisplayOptions::default());

        assert_eq!(
            text,
            "\nWith two stamps:\n\
             \x20   1.05 - Forever (0.60) + (0.45)\n\
             \x20   1.20 - Forever (0.60) + Forever (0.60)\n\
             \nWith three stamps:\n\
             \x20   1.35 - (0.45) + (0.45) + (0.45)\n"
        );
    }

    #[test]
    fn test_render_text_no_results() {
        assert_eq!(
            render_text(&[], Amount::zero(), DisplayOptions::default()),
            ""
        );
    }

    #[test]
    fn test_render_json() {
        let (results, goal) = ranked_results();
        let json = render_json(&results, goal, Amount::new(dec!(2.00)), 3).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["goal"], "1.00");
        assert_eq!(value["max_stamps"], 3);
        assert_eq!(value["groups"][0]["size"], 2);
        assert_eq!(value["groups"][0]["results"][0]["total"], "1.05");
        assert_eq!(value["groups"][0]["results"][0]["overage"], "0.05");
        assert_eq!(
            value["groups"][0]["results"][0]["stamps"][0]["name"],
            "Forever"
        );
        assert!(value["groups"][0]["results"][0]["stamps"][1]["name"].is_null());
        assert_eq!(value["groups"][1]["size"], 3);
    }
}
