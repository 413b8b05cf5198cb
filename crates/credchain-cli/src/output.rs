//! Rendering of verification outcomes and results.

use std::io::Write;

use anyhow::{Context, Result};
use credchain_core::{OutcomeSink, VerificationOutcome};
use credchain_verify::ValidationResult;
use serde::Serialize;

/// Prints each outcome as it arrives, one line per stage.
pub struct ConsoleSink<W: Write> {
    out: W,
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> OutcomeSink for ConsoleSink<W> {
    fn record(&mut self, outcome: VerificationOutcome) {
        // A closed stdout must not abort verification.
        let _ = writeln!(self.out, "{}", render_outcome(&outcome));
    }
}

/// `[PASS] stageName: reason`
pub fn render_outcome(outcome: &VerificationOutcome) -> String {
    let mark = if outcome.success { "PASS" } else { "FAIL" };
    format!("[{mark}] {}: {}", outcome.stage, outcome.reason)
}

/// Summary line printed after the outcomes.
pub fn render_result(result: &ValidationResult) -> String {
    if result.network_name.is_empty() {
        format!("{} (status: {})", result.message, result.status)
    } else {
        format!(
            "{} (status: {}, network: {})",
            result.message, result.status, result.network_name
        )
    }
}

/// JSON document printed with `--json`.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    #[serde(flatten)]
    pub result: &'a ValidationResult,
    pub outcomes: &'a [VerificationOutcome],
}

pub fn print_report(result: &ValidationResult, outcomes: &[VerificationOutcome]) -> Result<()> {
    let report = Report { result, outcomes };
    let text = serde_json::to_string_pretty(&report).context("failed to serialize report")?;
    println!("{text}");
    Ok(())
}
