//! # Credential Verifier
//!
//! Full verification of one credential: the checksum engine plus the
//! structure, issuer and revocation collaborators, in one of two orders.
//!
//! | Mode | Sequence |
//! |------|----------|
//! | `OnChain` | structure → issuer profile → checksum → revocation/expiry |
//! | `OffChain` | checksum → issuer profile → revocation/expiry |
//!
//! Any failing step ends the run. A `verifyCredential` outcome closes every
//! run with "Verified" or "Failed".

use std::sync::Arc;

use chrono::{DateTime, Utc};
use credchain_client::{CredchainClient, ExplorerRegistry};
use credchain_core::messages as msg;
use credchain_core::{OutcomeSink, Stage, StageReporter};
use credchain_vc::{Credential, CredentialStructureValidator, IssuerProfileValidator, RevocationStatusCheck};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::checksum::{ChecksumVerificationEngine, EngineOptions, ValidationResult};

/// Which checks run, and in what order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationMode {
    #[default]
    OnChain,
    OffChain,
}

impl std::fmt::Display for VerificationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OnChain => f.write_str("on_chain"),
            Self::OffChain => f.write_str("off_chain"),
        }
    }
}

/// Top-level credential verifier.
#[derive(Debug, Clone)]
pub struct CredentialVerifier {
    checksum: ChecksumVerificationEngine,
    structure: CredentialStructureValidator,
    issuer: IssuerProfileValidator,
    revocation: RevocationStatusCheck,
}

impl CredentialVerifier {
    pub fn new(
        client: &CredchainClient,
        registry: Arc<ExplorerRegistry>,
        options: EngineOptions,
    ) -> Self {
        Self {
            checksum: ChecksumVerificationEngine::new(client, registry, options),
            structure: CredentialStructureValidator,
            issuer: IssuerProfileValidator::new(client.profiles().clone()),
            revocation: RevocationStatusCheck,
        }
    }

    /// The checksum engine this verifier runs.
    pub fn checksum(&self) -> &ChecksumVerificationEngine {
        &self.checksum
    }

    /// Verify `credential` against the current time.
    pub async fn verify<S: OutcomeSink + ?Sized>(
        &self,
        credential: &Value,
        mode: VerificationMode,
        sink: &mut S,
    ) -> ValidationResult {
        self.verify_at(credential, mode, sink, Utc::now()).await
    }

    /// Verify `credential`, judging expiry against `now`.
    pub async fn verify_at<S: OutcomeSink + ?Sized>(
        &self,
        credential: &Value,
        mode: VerificationMode,
        sink: &mut S,
        now: DateTime<Utc>,
    ) -> ValidationResult {
        let mut reporter = StageReporter::new(sink);
        let credential = match Credential::from_value(credential) {
            Ok(credential) => credential,
            Err(e) => {
                tracing::warn!(error = %e, "credential rejected");
                return finish(&mut reporter, false, String::new());
            }
        };

        tracing::info!(%mode, id = credential.id().unwrap_or_default(), "verifying credential");
        let (status, network_name) = match mode {
            VerificationMode::OnChain => self.on_chain(&credential, &mut reporter, now).await,
            VerificationMode::OffChain => self.off_chain(&credential, &mut reporter, now).await,
        };
        finish(&mut reporter, status, network_name)
    }

    async fn on_chain<S: OutcomeSink + ?Sized>(
        &self,
        credential: &Credential,
        reporter: &mut StageReporter<'_, S>,
        now: DateTime<Utc>,
    ) -> (bool, String) {
        if !self.structure.validate(credential, reporter) {
            return (false, String::new());
        }
        let Some(documents) = self.issuer.validate(credential, reporter).await else {
            return (false, String::new());
        };
        let checksum = self.checksum.run(credential, reporter).await;
        if !checksum.status {
            return (false, checksum.network_name);
        }
        let status = self.revocation.check(
            credential,
            &documents.profile,
            &documents.revocation_list,
            reporter,
            now,
        );
        (status, checksum.network_name)
    }

    async fn off_chain<S: OutcomeSink + ?Sized>(
        &self,
        credential: &Credential,
        reporter: &mut StageReporter<'_, S>,
        now: DateTime<Utc>,
    ) -> (bool, String) {
        let checksum = self.checksum.run(credential, reporter).await;
        if !checksum.status {
            return (false, checksum.network_name);
        }
        let Some(documents) = self.issuer.validate(credential, reporter).await else {
            return (false, checksum.network_name);
        };
        let status = self.revocation.check(
            credential,
            &documents.profile,
            &documents.revocation_list,
            reporter,
            now,
        );
        (status, checksum.network_name)
    }
}

fn finish<S: OutcomeSink + ?Sized>(
    reporter: &mut StageReporter<'_, S>,
    status: bool,
    network_name: String,
) -> ValidationResult {
    let message = if status {
        reporter.pass(Stage::VerifyCredential, msg::VERIFIED);
        msg::VERIFIED
    } else {
        reporter.fail(Stage::VerifyCredential, msg::FAILED);
        msg::FAILED
    };
    ValidationResult {
        message: message.to_string(),
        status,
        network_name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use credchain_client::ClientConfig;
    use credchain_core::VerificationOutcome;
    use serde_json::json;

    #[tokio::test]
    async fn malformed_structure_fails_before_any_fetch() {
        let client = CredchainClient::new(ClientConfig::default()).unwrap();
        let verifier = CredentialVerifier::new(
            &client,
            Arc::new(ExplorerRegistry::default()),
            EngineOptions::default(),
        );
        let mut sink: Vec<VerificationOutcome> = Vec::new();
        let result = verifier
            .verify(&json!({"type": ["Badge"]}), VerificationMode::OnChain, &mut sink)
            .await;

        assert!(!result.status);
        assert_eq!(result.message, msg::FAILED);
        let stages: Vec<Stage> = sink.iter().map(|o| o.stage).collect();
        assert_eq!(
            stages,
            vec![
                Stage::ValidateCredentialType,
                Stage::ValidateCredential,
                Stage::VerifyCredential,
            ]
        );
    }

    #[test]
    fn mode_display_matches_serde() {
        for mode in [VerificationMode::OnChain, VerificationMode::OffChain] {
            let serialized = serde_json::to_value(mode).unwrap();
            assert_eq!(serialized, json!(mode.to_string()));
        }
    }
}
