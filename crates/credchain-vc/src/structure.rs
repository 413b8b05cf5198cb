//! # Credential Structure Checks
//!
//! Key-presence checks on the credential envelope, run in a fixed order
//! and stopping at the first failure. Each check emits one outcome; a
//! summary outcome (`validateCredential`) follows.

use credchain_core::messages as msg;
use credchain_core::{OutcomeSink, Stage, StageReporter};
use serde_json::Value;

use crate::credential::{contains_any, non_empty_str, Credential};
use crate::proof::ProofKind;

pub const VERIFIABLE_CREDENTIAL: &str = "VerifiableCredential";

/// Accepted `@context` URLs for credentials.
pub const CREDENTIAL_CONTEXTS: &[&str] = &[
    "https://www.w3.org/2018/credentials/v1",
    "https://www.w3.org/2018/credentials/v2",
    "https://www.w3.org/ns/credentials/v2",
];

const SUBJECT_REQUIRED_KEYS: &[&str] = &["id", "name", "image"];
const PROOF_REQUIRED_KEYS: &[&str] = &["type", "created", "proofPurpose", "verificationMethod"];

/// Runs the envelope checks.
#[derive(Debug, Clone, Copy, Default)]
pub struct CredentialStructureValidator;

impl CredentialStructureValidator {
    /// Check `credential`, reporting each stage. Returns `true` if every
    /// check passed.
    pub fn validate<S: OutcomeSink + ?Sized>(
        &self,
        credential: &Credential,
        reporter: &mut StageReporter<'_, S>,
    ) -> bool {
        let checks: [(Stage, fn(&Credential) -> bool, &str, &str); 6] = [
            (Stage::ValidateCredentialType, check_type, msg::TYPE_KEY_SUCCESS, msg::TYPE_KEY_ERROR),
            (Stage::ValidateCredentialContext, check_context, msg::CONTEXT_KEY_SUCCESS, msg::CONTEXT_KEY_ERROR),
            (Stage::ValidateCredentialId, check_id, msg::ID_KEY_SUCCESS, msg::ID_KEY_ERROR),
            (
                Stage::ValidateCredentialSubject,
                check_subject,
                msg::CREDENTIAL_SUBJECT_KEY_SUCCESS,
                msg::CREDENTIAL_SUBJECT_KEY_ERROR,
            ),
            (Stage::ValidateCredentialProof, check_proof, msg::PROOF_KEY_SUCCESS, msg::PROOF_KEY_ERROR),
            (
                Stage::ValidateCredentialIssuanceDate,
                check_issuance_date,
                msg::ISSUANCE_DATE_KEY_SUCCESS,
                msg::ISSUANCE_DATE_KEY_ERROR,
            ),
        ];

        for (stage, check, success, failure) in checks {
            if check(credential) {
                reporter.pass(stage, success);
            } else {
                reporter.fail(stage, failure);
                reporter.fail(Stage::ValidateCredential, msg::CREDENTIAL_VALIDATION_FAILED);
                return false;
            }
        }
        reporter.pass(Stage::ValidateCredential, msg::CREDENTIAL_VALIDATION_SUCCESS);
        true
    }
}

fn check_type(credential: &Credential) -> bool {
    contains_any(credential.get("type"), &[VERIFIABLE_CREDENTIAL])
}

fn check_context(credential: &Credential) -> bool {
    contains_any(credential.get("@context"), CREDENTIAL_CONTEXTS)
}

fn check_id(credential: &Credential) -> bool {
    credential.id().is_some()
}

fn check_subject(credential: &Credential) -> bool {
    let Some(subject) = credential.get("credentialSubject") else {
        return false;
    };
    SUBJECT_REQUIRED_KEYS
        .iter()
        .all(|key| subject.get(*key).and_then(non_empty_str).is_some())
}

fn check_proof(credential: &Credential) -> bool {
    let Some(proof) = credential.proof() else {
        return false;
    };
    let has_required = PROOF_REQUIRED_KEYS
        .iter()
        .all(|key| proof.get(*key).and_then(non_empty_str).is_some());
    let has_value = proof.get("proofValue").and_then(non_empty_str).is_some()
        || proof.get("merkleProof").map(Value::is_object).unwrap_or(false);
    has_required && has_value && ProofKind::from_proof(proof).is_ok()
}

fn check_issuance_date(credential: &Credential) -> bool {
    credential.get("issuanceDate").and_then(non_empty_str).is_some()
}
