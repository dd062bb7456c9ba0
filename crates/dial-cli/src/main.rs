//! dial: ranked report of the fairest clock-hand spacings.
//!
//! Takes no arguments; prints the report for both motion models and
//! both metrics to stdout. `DIAL_LOG` controls diagnostics on stderr.

use std::io::{self, Write};

use dial_analysis::engine::run_analysis;
use dial_analysis::report::console::ConsoleReporter;
use dial_analysis::report::Reporter;
use dial_core::config::ReportOptions;
use dial_core::errors::ReportError;
use dial_core::init_tracing;

fn main() -> Result<(), ReportError> {
    init_tracing();

    let report = run_analysis(&ReportOptions::default());
    let rendered = ConsoleReporter.generate(&report)?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    Ok(())
}
