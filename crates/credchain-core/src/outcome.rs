//! # Verification Outcomes and Sinks
//!
//! A verification run reports progress as a stream of [`VerificationOutcome`]
//! values, one per stage, append-only. Code under test collects them into a
//! `Vec`; interactive callers adapt a `(stage, title, success, reason)`
//! closure through [`FnSink`].
//!
//! [`StageReporter`] is the write side used by the pipeline. It stamps each
//! outcome with the stage title and logs it before handing it to the sink.

use serde::{Deserialize, Serialize};

use crate::stage::Stage;

/// The result of one verification stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationOutcome {
    pub stage: Stage,
    pub title: String,
    pub success: bool,
    pub reason: String,
}

impl VerificationOutcome {
    /// Build an outcome titled with the stage's catalogue title.
    pub fn new(stage: Stage, success: bool, reason: impl Into<String>) -> Self {
        Self {
            stage,
            title: stage.title().to_string(),
            success,
            reason: reason.into(),
        }
    }
}

/// Destination for verification outcomes.
pub trait OutcomeSink {
    fn record(&mut self, outcome: VerificationOutcome);
}

impl OutcomeSink for Vec<VerificationOutcome> {
    fn record(&mut self, outcome: VerificationOutcome) {
        self.push(outcome);
    }
}

impl<S: OutcomeSink + ?Sized> OutcomeSink for &mut S {
    fn record(&mut self, outcome: VerificationOutcome) {
        (**self).record(outcome);
    }
}

/// Adapts a progress callback taking `(stage, title, success, reason)`.
pub struct FnSink<F>(pub F);

impl<F> OutcomeSink for FnSink<F>
where
    F: FnMut(&str, &str, bool, &str),
{
    fn record(&mut self, outcome: VerificationOutcome) {
        (self.0)(
            outcome.stage.as_str(),
            &outcome.title,
            outcome.success,
            &outcome.reason,
        );
    }
}

/// Discards outcomes after writing them to the `tracing` subscriber.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl OutcomeSink for TracingSink {
    fn record(&mut self, outcome: VerificationOutcome) {
        tracing::debug!(
            stage = outcome.stage.as_str(),
            title = %outcome.title,
            success = outcome.success,
            reason = %outcome.reason,
            "verification outcome"
        );
    }
}

/// Write side of a sink used by verification code.
pub struct StageReporter<'a, S: OutcomeSink + ?Sized> {
    sink: &'a mut S,
}

impl<'a, S: OutcomeSink + ?Sized> StageReporter<'a, S> {
    pub fn new(sink: &'a mut S) -> Self {
        Self { sink }
    }

    /// Emit a successful outcome for `stage`.
    pub fn pass(&mut self, stage: Stage, reason: impl Into<String>) {
        self.emit(VerificationOutcome::new(stage, true, reason));
    }

    /// Emit a failed outcome for `stage`.
    pub fn fail(&mut self, stage: Stage, reason: impl Into<String>) {
        self.emit(VerificationOutcome::new(stage, false, reason));
    }

    /// Emit a prepared outcome.
    pub fn emit(&mut self, outcome: VerificationOutcome) {
        if outcome.success {
            tracing::info!(stage = outcome.stage.as_str(), reason = %outcome.reason, "stage passed");
        } else {
            tracing::warn!(stage = outcome.stage.as_str(), reason = %outcome.reason, "stage failed");
        }
        self.sink.record(outcome);
    }

    /// Emit a batch of outcomes in declared stage order, stopping after the
    /// first failure. Returns `false` if any emitted outcome failed.
    pub fn emit_ordered(&mut self, mut outcomes: Vec<VerificationOutcome>) -> bool {
        outcomes.sort_by_key(|o| o.stage);
        for outcome in outcomes {
            let success = outcome.success;
            self.emit(outcome);
            if !success {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vec_sink_collects_in_order() {
        let mut sink: Vec<VerificationOutcome> = Vec::new();
        let mut reporter = StageReporter::new(&mut sink);
        reporter.pass(Stage::GetNormalizedDecodedData, "ok");
        reporter.fail(Stage::CheckDecodedAnchors, "missing");
        assert_eq!(sink.len(), 2);
        assert!(sink[0].success);
        assert!(!sink[1].success);
        assert_eq!(sink[1].title, "Checking decoded data anchors...");
    }

    #[test]
    fn fn_sink_receives_wire_names() {
        let mut seen = Vec::new();
        {
            let mut sink = FnSink(|stage: &str, _title: &str, ok: bool, _reason: &str| {
                seen.push((stage.to_string(), ok));
            });
            StageReporter::new(&mut sink).pass(Stage::FetchDataFromBlockchainApi, "ok");
        }
        assert_eq!(seen, vec![("fetchDataFromBlockchainAPI".to_string(), true)]);
    }

    #[test]
    fn emit_ordered_sorts_and_stops_at_first_failure() {
        let mut sink: Vec<VerificationOutcome> = Vec::new();
        let batch = vec![
            VerificationOutcome::new(Stage::CheckDecodedTargetHash, false, "no target"),
            VerificationOutcome::new(Stage::CheckDecodedMerkleRoot, true, "ok"),
            VerificationOutcome::new(Stage::CheckDecodedAnchors, true, "ok"),
            VerificationOutcome::new(Stage::CheckDecodedPath, false, "no path"),
        ];
        let ok = StageReporter::new(&mut sink).emit_ordered(batch);
        assert!(!ok);
        let stages: Vec<Stage> = sink.iter().map(|o| o.stage).collect();
        assert_eq!(stages, vec![Stage::CheckDecodedAnchors, Stage::CheckDecodedPath]);
    }

    #[test]
    fn outcome_serializes_stage_wire_name() {
        let outcome = VerificationOutcome::new(Stage::VerifyMerkleProof, true, "ok");
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["stage"], "verifyMerkleProof");
        assert_eq!(json["success"], true);
    }

    #[test]
    fn tracing_sink_accepts_outcomes() {
        let mut sink = TracingSink;
        StageReporter::new(&mut sink).pass(Stage::ChecksumValidation, "done");
    }
}
