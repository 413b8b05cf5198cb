//! # Checksum Verification Engine
//!
//! Linear, fail-fast state machine over one credential:
//!
//! ```text
//! getNormalizedDecodedData
//!   ├─ Merkle:  checkDecodedAnchors → checkDecodedPath → checkDecodedMerkleRoot
//!   │           → checkDecodedTargetHash → fetchDataFromBlockchainAPI
//!   │           → verifyMerkleProof → verifyTargetHash
//!   └─ Ed25519: verifySignature
//! checksumValidation
//! ```
//!
//! Each stage emits exactly one outcome; the first failure skips every
//! remaining stage except the `checksumValidation` summary. The four
//! structural checks have no data dependency on each other and are
//! evaluated together, then emitted in declared stage order.
//!
//! The engine holds no per-call state. Concurrent `validate()` calls on one
//! engine share only the read-only registry and the HTTP connection pool.

use std::sync::Arc;

use credchain_client::{
    AnchorResolver, CredchainClient, ExplorerClient, ExplorerRegistry, ResolveError,
};
use credchain_core::messages as msg;
use credchain_core::{issuance_digest, IssuanceBytes, OutcomeSink, Stage, StageReporter, VerificationOutcome};
use credchain_crypto::{MerklePathVerifier, PathMode, ProofPathElement};
use credchain_vc::{Credential, DecodedProof, ProofDecoder, ProofMaterial, SignatureMaterial, SignatureVerifier};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::MismatchError;

/// What the explorer response must show about the anchoring transaction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnchorCheck {
    /// The transaction exists.
    #[default]
    Presence,
    /// The transaction exists and its input carries the Merkle root.
    MatchMerkleRoot,
}

/// Engine behavior switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineOptions {
    pub path_mode: PathMode,
    pub anchor_check: AnchorCheck,
}

/// Overall result of a `validate()` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub message: String,
    pub status: bool,
    /// Registry id of the resolved network; empty until anchor resolution
    /// succeeds.
    pub network_name: String,
}

/// Orchestrates decoding, anchor lookup and hash reconciliation.
#[derive(Debug, Clone)]
pub struct ChecksumVerificationEngine {
    decoder: ProofDecoder,
    resolver: AnchorResolver,
    explorer: ExplorerClient,
    signatures: SignatureVerifier,
    merkle: MerklePathVerifier,
    options: EngineOptions,
}

impl ChecksumVerificationEngine {
    /// Build an engine from a client and an explorer registry.
    ///
    /// Remote proof normalization is available only if the client was
    /// configured with a normalization URL.
    pub fn new(
        client: &CredchainClient,
        registry: Arc<ExplorerRegistry>,
        options: EngineOptions,
    ) -> Self {
        Self {
            decoder: ProofDecoder::new(client.normalization().ok().cloned()),
            resolver: AnchorResolver::new(registry),
            explorer: client.explorer().clone(),
            signatures: SignatureVerifier::new(client.profiles().clone()),
            merkle: MerklePathVerifier::new(options.path_mode),
            options,
        }
    }

    pub fn options(&self) -> EngineOptions {
        self.options
    }

    pub fn resolver(&self) -> &AnchorResolver {
        &self.resolver
    }

    /// Verify the checksum of `credential`, writing one outcome per stage
    /// to `sink`.
    ///
    /// The caller's document is copied and never modified. This never
    /// fails: every error becomes a failed outcome and `status = false`.
    pub async fn validate<S: OutcomeSink + ?Sized>(
        &self,
        credential: &Value,
        sink: &mut S,
    ) -> ValidationResult {
        let mut reporter = StageReporter::new(sink);
        match Credential::from_value(credential) {
            Ok(credential) => self.run(&credential, &mut reporter).await,
            Err(e) => {
                tracing::warn!(error = %e, "credential rejected");
                reporter.fail(Stage::GetNormalizedDecodedData, msg::FETCHING_NORMALIZED_DECODED_DATA_ERROR);
                summarize(&mut reporter, false, String::new())
            }
        }
    }

    /// Run the engine against an already parsed credential.
    pub async fn run<S: OutcomeSink + ?Sized>(
        &self,
        credential: &Credential,
        reporter: &mut StageReporter<'_, S>,
    ) -> ValidationResult {
        let mut network_name = String::new();
        let status = self.run_stages(credential, reporter, &mut network_name).await;
        summarize(reporter, status, network_name)
    }

    async fn run_stages<S: OutcomeSink + ?Sized>(
        &self,
        credential: &Credential,
        reporter: &mut StageReporter<'_, S>,
        network_name: &mut String,
    ) -> bool {
        let decoded = match self.decoder.decode(credential).await {
            Ok(decoded) => decoded,
            Err(e) => {
                tracing::warn!(error = %e, "proof decoding failed");
                reporter.fail(Stage::GetNormalizedDecodedData, msg::FETCHING_NORMALIZED_DECODED_DATA_ERROR);
                return false;
            }
        };
        tracing::debug!(kind = %decoded.kind, issuance_len = decoded.issuance.len(), "proof decoded");
        reporter.pass(Stage::GetNormalizedDecodedData, msg::FETCHING_NORMALIZED_DECODED_DATA_SUCCESS);

        match &decoded.material {
            ProofMaterial::Merkle(proof) => {
                self.verify_merkle(&decoded.issuance, proof, reporter, network_name)
                    .await
            }
            ProofMaterial::Signature(material) => {
                self.verify_signature(&decoded.issuance, material, reporter).await
            }
        }
    }

    async fn verify_merkle<S: OutcomeSink + ?Sized>(
        &self,
        issuance: &IssuanceBytes,
        proof: &DecodedProof,
        reporter: &mut StageReporter<'_, S>,
        network_name: &mut String,
    ) -> bool {
        if !reporter.emit_ordered(structural_checks(proof)) {
            return false;
        }
        let (Some(anchor), Some(path), Some(root), Some(target)) = (
            proof.selected_anchor(),
            proof.path.as_deref(),
            proof.merkle_root.as_deref(),
            proof.target_hash.as_deref(),
        ) else {
            return false;
        };

        // Anchor resolution and transaction fetch.
        let resolved = match self.resolver.resolve(anchor) {
            Ok(resolved) => resolved,
            Err(e) => {
                tracing::warn!(error = %e, "anchor resolution failed");
                reporter.fail(Stage::FetchDataFromBlockchainApi, resolve_reason(&e));
                return false;
            }
        };
        *network_name = resolved.network_name().to_string();

        let record = match self.explorer.fetch_transaction(&resolved).await {
            Ok(record) => record,
            Err(e) => {
                tracing::warn!(error = %e, "anchoring transaction unavailable");
                reporter.fail(Stage::FetchDataFromBlockchainApi, msg::TRANSACTION_NOT_FOUND_ERROR);
                return false;
            }
        };
        if self.options.anchor_check == AnchorCheck::MatchMerkleRoot && !record.anchors_hash(root) {
            let e = MismatchError::AnchorPayload {
                transaction_id: resolved.transaction_id().to_string(),
                merkle_root: root.to_string(),
            };
            tracing::warn!(error = %e, network = %network_name, "anchor payload mismatch");
            reporter.fail(Stage::FetchDataFromBlockchainApi, msg::ANCHOR_PAYLOAD_MISMATCH_ERROR);
            return false;
        }
        reporter.pass(Stage::FetchDataFromBlockchainApi, msg::DATA_FETCHED_SUCCESS);

        if let Err(e) = self.check_merkle_root(target, path, root) {
            tracing::warn!(error = %e, "Merkle proof rejected");
            reporter.fail(Stage::VerifyMerkleProof, msg::CALCULATED_HASH_DIFFER_FROM_MERKLEROOT);
            return false;
        }
        reporter.pass(Stage::VerifyMerkleProof, msg::CALCULATED_HASH_MATCHES_WITH_MERKLEROOT);

        // Reached only with a verified path; both must hold.
        match check_target_hash(issuance, target) {
            Ok(()) => {
                reporter.pass(Stage::VerifyTargetHash, msg::CALCULATED_HASH_MATCHES_WITH_TARGETHASH);
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, "target hash rejected");
                reporter.fail(Stage::VerifyTargetHash, msg::CALCULATED_HASH_DIFFER_FROM_TARGETHASH);
                false
            }
        }
    }

    fn check_merkle_root(
        &self,
        target: &str,
        path: &[ProofPathElement],
        root: &str,
    ) -> Result<(), MismatchError> {
        let computed = self.merkle.compute_root(target, path)?;
        if computed == root {
            Ok(())
        } else {
            Err(MismatchError::MerkleRoot {
                computed,
                expected: root.to_string(),
            })
        }
    }

    async fn verify_signature<S: OutcomeSink + ?Sized>(
        &self,
        issuance: &IssuanceBytes,
        material: &SignatureMaterial,
        reporter: &mut StageReporter<'_, S>,
    ) -> bool {
        match self.signatures.verify(issuance, material).await {
            Ok(true) => {
                reporter.pass(Stage::VerifySignature, msg::SIGNATURE_VALID);
                true
            }
            Ok(false) => {
                reporter.fail(Stage::VerifySignature, msg::SIGNATURE_INVALID);
                false
            }
            Err(credchain_vc::VerifyError::KeyFetch(e)) => {
                tracing::warn!(error = %e, url = %material.public_key_url, "public key fetch failed");
                reporter.fail(Stage::VerifySignature, msg::PUBLIC_KEY_RETRIEVAL_ERROR);
                false
            }
            Err(e) => {
                tracing::warn!(error = %e, "signature verification failed");
                reporter.fail(Stage::VerifySignature, msg::SIGNATURE_INVALID);
                false
            }
        }
    }
}

/// Presence checks on the decoded proof, one outcome each.
fn structural_checks(proof: &DecodedProof) -> Vec<VerificationOutcome> {
    let check = |stage, ok: bool, success: &str, failure: &str| {
        VerificationOutcome::new(stage, ok, if ok { success } else { failure })
    };
    vec![
        check(
            Stage::CheckDecodedAnchors,
            !proof.anchors.is_empty(),
            msg::ANCHOR_DECODED_DATA_KEY_SUCCESS,
            msg::ANCHOR_DECODED_DATA_KEY_ERROR,
        ),
        check(
            Stage::CheckDecodedPath,
            proof.path.as_ref().is_some_and(|p| !p.is_empty()),
            msg::PATH_DECODED_DATA_KEY_SUCCESS,
            msg::PATH_DECODED_DATA_KEY_ERROR,
        ),
        check(
            Stage::CheckDecodedMerkleRoot,
            proof.merkle_root.is_some(),
            msg::MERKLEROOT_DECODED_DATA_KEY_SUCCESS,
            msg::MERKLEROOT_DECODED_DATA_KEY_ERROR,
        ),
        check(
            Stage::CheckDecodedTargetHash,
            proof.target_hash.is_some(),
            msg::TARGETHASH_DECODED_DATA_KEY_SUCCESS,
            msg::TARGETHASH_DECODED_DATA_KEY_ERROR,
        ),
    ]
}

fn check_target_hash(issuance: &IssuanceBytes, target: &str) -> Result<(), MismatchError> {
    let computed = issuance_digest(issuance);
    if computed == target {
        Ok(())
    } else {
        Err(MismatchError::TargetHash {
            computed,
            expected: target.to_string(),
        })
    }
}

fn resolve_reason(error: &ResolveError) -> &'static str {
    match error {
        ResolveError::MalformedAnchor { .. } => msg::REQUIRED_VALUES_RETRIEVAL_ERROR,
        ResolveError::UnknownNetwork { .. } => msg::NO_MATCHING_API_FOUND_ERROR,
        ResolveError::MisconfiguredEndpoint { .. } => msg::URL_OR_APIKEY_RETRIEVAL_ERROR,
    }
}

fn summarize<S: OutcomeSink + ?Sized>(
    reporter: &mut StageReporter<'_, S>,
    status: bool,
    network_name: String,
) -> ValidationResult {
    let message = if status {
        reporter.pass(Stage::ChecksumValidation, msg::CHECKSUM_VALIDATION_SUCCESS);
        msg::CHECKSUM_VALIDATION_SUCCESS
    } else {
        reporter.fail(Stage::ChecksumValidation, msg::CHECKSUM_VALIDATION_FAILED);
        msg::CHECKSUM_VALIDATION_FAILED
    };
    ValidationResult {
        message: message.to_string(),
        status,
        network_name,
    }
}
