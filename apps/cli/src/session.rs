//! # Interactive Session
//!
//! Drives one calculator run over any line reader and writer.
//!
//! ## Session Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  banner                                                                 │
//! │    │                                                                    │
//! │    ▼                                                                    │
//! │  GOAL AMOUNT --> ─┐                                                     │
//! │  CAP AMOUNT  --> ─┼─ bad answer: fatal, or ask again if configured      │
//! │  MAX STAMPS  --> ─┘                                                     │
//! │    │                                                                    │
//! │    ▼                                                                    │
//! │  STAMP --> (repeat) ── bad value: print ERROR, ask again                │
//! │    │                   over the limit: print ERROR, wait for empty line │
//! │    │   empty line or end of input                                       │
//! │    ▼                                                                    │
//! │  search → rank → print text or JSON                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::{BufRead, Write};

use stamp_core::validation::{
    parse_amount, parse_max_count, parse_stamp_line, validate_stamp_count, ValidationResult,
};
use stamp_core::{rank, search_with_stats, Amount, SearchStats, StampSet};
use tracing::{debug, info, warn};

use crate::config::{CalculatorConfig, OutputFormat};
use crate::error::{CliError, CliResult};
use crate::report::{render_json, render_text};

const GOAL_PROMPT: &str = "How much value do you need to add up to?        GOAL AMOUNT --> ";
const CAP_PROMPT: &str = "How much value do you not want to exceed?        CAP AMOUNT --> ";
const MAX_PROMPT: &str = "What's the most number of stamps you will use?   MAX STAMPS --> ";
const STAMP_PROMPT: &str = "STAMP --> ";
const STAMP_LINE_ERROR: &str =
    "ERROR: Please enter a value, optionally followed by a space and a name.";
const STAMP_LIMIT_HINT: &str = "Enter an empty line when you're done.";

/// The three answers collected before stamp entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parameters {
    pub goal: Amount,
    pub cap: Amount,
    pub max_stamps: u32,
}

/// One interactive run of the calculator.
pub struct Session<R, W> {
    input: R,
    output: W,
    config: CalculatorConfig,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, config: CalculatorConfig) -> Self {
        Session {
            input,
            output,
            config,
        }
    }

    /// Gives back the writer, e.g. to inspect captured output in tests.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs the whole session: prompts, search, output.
    pub fn run(&mut self) -> CliResult<SearchStats> {
        writeln!(self.output, "Welcome to the Stamp Calculator.")?;
        writeln!(self.output)?;

        let params = self.read_parameters()?;
        info!(
            goal = %params.goal,
            cap = %params.cap,
            max_stamps = params.max_stamps,
            "Parameters accepted"
        );

        writeln!(self.output)?;
        writeln!(self.output, "Enter the values of your stamps, one per line.")?;
        writeln!(
            self.output,
            "You can also include names for your stamps, separated from the value by a space."
        )?;
        writeln!(self.output, "Enter an empty line when you're done.")?;

        let stamps = self.read_stamps()?;
        info!(denominations = stamps.len(), "Stamp entry finished");

        let outcome = search_with_stats(&stamps, params.goal, params.cap, params.max_stamps);
        let stats = outcome.stats;
        info!(
            nodes = stats.nodes_visited,
            accepted = stats.accepted,
            pruned_over_cap = stats.pruned_over_cap,
            pruned_exhausted = stats.pruned_exhausted,
            "Search complete"
        );

        let mut results = outcome.results;
        rank(&mut results);

        writeln!(self.output)?;
        match self.config.output.format {
            OutputFormat::Text => {
                let text = render_text(
                    &results,
                    params.goal,
                    self.config.output.display_options(),
                );
                write!(self.output, "{}", text)?;
            }
            OutputFormat::Json => {
                let json = render_json(&results, params.goal, params.cap, params.max_stamps)?;
                writeln!(self.output, "{}", json)?;
            }
        }
        self.output.flush()?;

        Ok(stats)
    }

    /// Asks for goal, cap and maximum stamp count, in that order.
    pub fn read_parameters(&mut self) -> CliResult<Parameters> {
        let goal = self.read_parameter("goal", GOAL_PROMPT, |text| parse_amount("goal", text))?;
        let cap = self.read_parameter("cap", CAP_PROMPT, |text| parse_amount("cap", text))?;

        let limit = self.config.limits.max_stamps;
        let max_stamps =
            self.read_parameter("max stamps", MAX_PROMPT, |text| parse_max_count(text, limit))?;

        Ok(Parameters {
            goal,
            cap,
            max_stamps,
        })
    }

    /// Reads stamp lines until an empty line or end of input.
    ///
    /// Lines with a bad value print an error and are skipped; entry
    /// continues. Once `limits.max_denominations` stamps are in, further
    /// values are refused the same way until an empty line ends entry.
    pub fn read_stamps(&mut self) -> CliResult<StampSet> {
        let limit = self.config.limits.max_denominations;
        let mut stamps = Vec::new();

        while let Some(line) = self.read_line(STAMP_PROMPT)? {
            if line.is_empty() {
                break;
            }

            let stamp = match parse_stamp_line(&line) {
                Ok(stamp) => stamp,
                Err(e) => {
                    debug!(line = %line, error = %e, "Rejected stamp line");
                    writeln!(self.output, "{}", STAMP_LINE_ERROR)?;
                    continue;
                }
            };

            if let Err(e) = validate_stamp_count(stamps.len() + 1, limit) {
                warn!(line = %line, error = %e, "Stamp limit reached");
                writeln!(self.output, "ERROR: {}. {}", e, STAMP_LIMIT_HINT)?;
                continue;
            }

            stamps.push(stamp);
        }

        Ok(StampSet::from_unsorted(stamps))
    }

    fn read_parameter<T, F>(&mut self, field: &str, prompt: &str, parse: F) -> CliResult<T>
    where
        F: Fn(&str) -> ValidationResult<T>,
    {
        loop {
            let line = self
                .read_line(prompt)?
                .ok_or_else(|| CliError::UnexpectedEof {
                    field: field.to_string(),
                })?;

            match parse(&line) {
                Ok(value) => return Ok(value),
                Err(e) if self.config.input.reprompt_parameters => {
                    warn!(field, error = %e, "Invalid parameter, asking again");
                    writeln!(self.output, "ERROR: {}", e)?;
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    /// Prints `prompt` and reads one line without its line ending.
    /// Returns `None` at end of input.
    fn read_line(&mut self, prompt: &str) -> CliResult<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }

        Ok(Some(line))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use stamp_core::ValidationError;
    use std::io::Cursor;

    const HEADER: &str = "Welcome to the Stamp Calculator.\n\n";
    const INSTRUCTIONS: &str = "Enter the values of your stamps, one per line.\n\
        You can also include names for your stamps, separated from the value by a space.\n\
        Enter an empty line when you're done.\n";

    fn run_session(input: &str, config: CalculatorConfig) -> (CliResult<SearchStats>, String) {
        let mut session = Session::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), config);
        let result = session.run();
        let output = String::from_utf8(session.into_output()).unwrap();
        (result, output)
    }

    fn prompts() -> String {
        format!("{}{}{}", GOAL_PROMPT, CAP_PROMPT, MAX_PROMPT)
    }

    #[test]
    fn test_full_session_transcript() {
        let (result, output) = run_session(
            "1.00\n2.00\n3\n0.60 Forever\n.45\n\n",
            CalculatorConfig::default(),
        );

        let stats = result.unwrap();
        assert_eq!(stats.accepted, 3);

        let expected = format!(
            "{}{}\n{}{}{}{}\n\
             \nWith two stamps:\n\
             \x20   1.05 - Forever (0.60) + (0.45)\n\
             \x20   1.20 - Forever (0.60) + Forever (0.60)\n\
             \nWith three stamps:\n\
             \x20   1.35 - (0.45) + (0.45) + (0.45)\n",
            HEADER,
            prompts(),
            INSTRUCTIONS,
            STAMP_PROMPT,
            STAMP_PROMPT,
            STAMP_PROMPT,
        );
        assert_eq!(output, expected);
    }

    #[test]
    fn test_invalid_stamp_line_reprompts() {
        let (result, output) = run_session(
            "1\n1\n1\nabc\n1 One\n\n",
            CalculatorConfig::default(),
        );

        assert!(result.is_ok());
        assert!(output.contains(&format!("{}{}\n{}", STAMP_PROMPT, STAMP_LINE_ERROR, STAMP_PROMPT)));
        assert!(output.ends_with("\nWith one stamp:\n       1 - One (1)\n"));
    }

    #[test]
    fn test_windows_line_endings() {
        let (result, output) = run_session("1\r\n1\r\n1\r\n1 One\r\n\r\n", CalculatorConfig::default());
        assert!(result.is_ok());
        assert!(output.ends_with("\n       1 - One (1)\n"));
    }

    #[test]
    fn test_end_of_input_finishes_stamp_entry() {
        let (result, output) = run_session("0.50\n1\n1\n0.50", CalculatorConfig::default());
        assert!(result.is_ok());
        assert!(output.ends_with("\nWith one stamp:\n    0.50 - (0.50)\n"));
    }

    #[test]
    fn test_no_results_prints_only_blank_line() {
        let (result, output) = run_session("3\n3\n2\n1\n\n", CalculatorConfig::default());
        assert_eq!(result.unwrap().accepted, 0);
        assert!(output.ends_with(&format!("{}{}\n", STAMP_PROMPT, STAMP_PROMPT)));
    }

    #[test]
    fn test_zero_goal_lists_empty_combination() {
        let (result, output) = run_session("0\n1\n2\n\n", CalculatorConfig::default());
        assert!(result.is_ok());
        assert!(output.ends_with("\nWith zero stamps:\n       0 - \n"));
    }

    #[test]
    fn test_invalid_goal_is_fatal_by_default() {
        let (result, output) = run_session("lots\n", CalculatorConfig::default());

        assert!(matches!(
            result,
            Err(CliError::Validation(ValidationError::InvalidAmount { .. }))
        ));
        assert_eq!(output, format!("{}{}", HEADER, GOAL_PROMPT));
    }

    #[test]
    fn test_invalid_parameter_reprompts_when_configured() {
        let mut config = CalculatorConfig::default();
        config.input.reprompt_parameters = true;

        let (result, output) = run_session("lots\n1\n2\n2.5\n2\n1\n\n", config);

        assert!(result.is_ok());
        assert!(output.contains("ERROR: goal is not a valid amount: 'lots'\n"));
        assert!(output.contains("ERROR: max stamps must be a whole number, got 2.5\n"));
    }

    #[test]
    fn test_max_stamps_over_limit() {
        let mut config = CalculatorConfig::default();
        config.limits.max_stamps = 4;

        let (result, _) = run_session("1\n2\n5\n", config);
        assert!(matches!(
            result,
            Err(CliError::Validation(ValidationError::OutOfRange { max: 4, .. }))
        ));
    }

    #[test]
    fn test_missing_parameter_is_unexpected_eof() {
        let (result, _) = run_session("1\n", CalculatorConfig::default());
        match result {
            Err(CliError::UnexpectedEof { field }) => assert_eq!(field, "cap"),
            other => panic!("expected UnexpectedEof, got {:?}", other),
        }
    }

    #[test]
    fn test_stamp_limit_refuses_extra_values_and_still_searches() {
        let mut config = CalculatorConfig::default();
        config.limits.max_denominations = 2;

        let (result, output) = run_session("1\n2\n1\n1 One\n0.50\n3\nabc\n\n", config);

        assert_eq!(result.unwrap().accepted, 1);
        assert!(output.contains(
            "STAMP --> ERROR: Too many denominations: 3 entered, at most 2 allowed. \
             Enter an empty line when you're done.\nSTAMP --> "
        ));
        assert!(output.contains(&format!("{}{}\n", STAMP_PROMPT, STAMP_LINE_ERROR)));
        assert!(output.ends_with("\nWith one stamp:\n       1 - One (1)\n"));
    }

    #[test]
    fn test_total_with_long_scale_is_exact() {
        let (result, output) = run_session(
            "1.0000005\n2\n1\n1.0000005\n\n",
            CalculatorConfig::default(),
        );

        assert!(result.is_ok());
        assert!(output.ends_with("\nWith one stamp:\n1.0000005 - (1.0000005)\n"));
    }

    #[test]
    fn test_configured_rounding() {
        let mut config = CalculatorConfig::default();
        config.output.decimal_places = Some(6);

        let (result, output) = run_session("1.00\n2.00\n2\n0.60\n\n", config);
        assert!(result.is_ok());
        assert!(output.ends_with("\nWith two stamps:\n1.200000 - (0.60) + (0.60)\n"));
    }

    #[test]
    fn test_read_parameters() {
        let mut session = Session::new(
            Cursor::new(b" 1.50 \n-2\n+3\n".to_vec()),
            Vec::new(),
            CalculatorConfig::default(),
        );
        let params = session.read_parameters().unwrap();

        assert_eq!(params.goal, Amount::new(dec!(1.50)));
        assert_eq!(params.cap, Amount::new(dec!(-2)));
        assert_eq!(params.max_stamps, 3);
    }

    #[test]
    fn test_json_output() {
        let mut config = CalculatorConfig::default();
        config.output.format = OutputFormat::Json;

        let (result, output) = run_session("1.00\n2.00\n2\n0.60\n\n", config);
        assert!(result.is_ok());

        let json_start = output.find('{').unwrap();
        let value: serde_json::Value = serde_json::from_str(&output[json_start..]).unwrap();
        assert_eq!(value["groups"][0]["results"][0]["total"], "1.20");
    }
}
