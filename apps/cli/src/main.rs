//! # Stamp Calculator
//!
//! ```bash
//! cargo run -p stamp-cli --bin stamp-calculator
//!
//! # With search statistics on stderr
//! STAMP_LOG=info cargo run -p stamp-cli --bin stamp-calculator
//! ```

use std::process::ExitCode;

use tracing::error;

fn main() -> ExitCode {
    stamp_cli::init_tracing();

    match stamp_cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Stamp calculator failed");
            eprintln!();
            eprintln!("ERROR: {}", e);
            ExitCode::FAILURE
        }
    }
}
