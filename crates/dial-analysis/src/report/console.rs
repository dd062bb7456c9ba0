//! Console reporter — the fixed plain-text ranking.

use std::fmt::Write;

use dial_core::errors::ReportError;

use super::Reporter;
use crate::engine::types::AnalysisReport;

/// Console reporter emitting the canonical indented layout:
///
/// ```text
/// Sweeping:
///     max_min
///         02:54:34+38/73 cost 12/73
/// ```
///
/// Hour, minute and the whole-second part are zero-padded to two
/// digits; the fractional remainder and the cost are printed as exact
/// rationals.
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn name(&self) -> &'static str {
        "console"
    }

    fn generate(&self, report: &AnalysisReport) -> Result<String, ReportError> {
        let mut out = String::new();

        for section in &report.sections {
            writeln!(out, "{}:", section.model)?;
            for ranking in &section.rankings {
                writeln!(out, "    {}", ranking.metric)?;
                for time in &ranking.times {
                    writeln!(
                        out,
                        "        {:02}:{:02}:{:02}+{} cost {}",
                        time.hour,
                        time.minute,
                        time.second.floor(),
                        time.second.fract(),
                        time.cost,
                    )?;
                }
            }
        }

        Ok(out)
    }
}
