//! # Verification Stages — The Stage Catalogue
//!
//! Defines the `Stage` enum naming every check the verification pipeline can
//! report on. Declaration order is the canonical emission order: outcomes
//! evaluated together are sorted by [`Stage::ordinal`] before they are
//! emitted, so the event stream never depends on completion order.
//!
//! Wire names are camelCase (`checkDecodedAnchors`) and are what
//! progress consumers receive as the `stage` argument.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::UnknownStage;
use crate::messages;

/// Every stage a verification run can emit an outcome for.
///
/// # Groups
///
/// | Group | Stages |
/// |-------|--------|
/// | Structure | `validateCredentialType` .. `validateCredential` |
/// | Issuer | `fetchIssuerProfile`, `validateIssuerProfile`, `fetchRevocationList` |
/// | Checksum | `getNormalizedDecodedData` .. `checksumValidation` |
/// | Status | `checkRevocationStatus`, `checkExpirationDate` |
/// | Overall | `verifyCredential` |
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Stage {
    ValidateCredentialType,
    ValidateCredentialContext,
    #[serde(rename = "validateCredentialID")]
    ValidateCredentialId,
    ValidateCredentialSubject,
    ValidateCredentialProof,
    ValidateCredentialIssuanceDate,
    /// Summary of the structural checks.
    ValidateCredential,

    FetchIssuerProfile,
    ValidateIssuerProfile,
    FetchRevocationList,

    /// Proof decoding: inline, remote normalization, or AES unwrap.
    GetNormalizedDecodedData,
    CheckDecodedAnchors,
    CheckDecodedPath,
    CheckDecodedMerkleRoot,
    CheckDecodedTargetHash,
    /// Anchor resolution and explorer lookup.
    #[serde(rename = "fetchDataFromBlockchainAPI")]
    FetchDataFromBlockchainApi,
    VerifyMerkleProof,
    VerifySignature,
    VerifyTargetHash,
    /// Terminal summary of the checksum engine.
    ChecksumValidation,

    CheckRevocationStatus,
    CheckExpirationDate,

    /// Terminal summary of a full verification.
    VerifyCredential,
}

impl Stage {
    /// All stages in declared order.
    pub fn all() -> &'static [Stage] {
        &[
            Self::ValidateCredentialType,
            Self::ValidateCredentialContext,
            Self::ValidateCredentialId,
            Self::ValidateCredentialSubject,
            Self::ValidateCredentialProof,
            Self::ValidateCredentialIssuanceDate,
            Self::ValidateCredential,
            Self::FetchIssuerProfile,
            Self::ValidateIssuerProfile,
            Self::FetchRevocationList,
            Self::GetNormalizedDecodedData,
            Self::CheckDecodedAnchors,
            Self::CheckDecodedPath,
            Self::CheckDecodedMerkleRoot,
            Self::CheckDecodedTargetHash,
            Self::FetchDataFromBlockchainApi,
            Self::VerifyMerkleProof,
            Self::VerifySignature,
            Self::VerifyTargetHash,
            Self::ChecksumValidation,
            Self::CheckRevocationStatus,
            Self::CheckExpirationDate,
            Self::VerifyCredential,
        ]
    }

    /// Position in the declared order.
    pub fn ordinal(self) -> usize {
        self as usize
    }

    /// Wire name; matches the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ValidateCredentialType => "validateCredentialType",
            Self::ValidateCredentialContext => "validateCredentialContext",
            Self::ValidateCredentialId => "validateCredentialID",
            Self::ValidateCredentialSubject => "validateCredentialSubject",
            Self::ValidateCredentialProof => "validateCredentialProof",
            Self::ValidateCredentialIssuanceDate => "validateCredentialIssuanceDate",
            Self::ValidateCredential => "validateCredential",
            Self::FetchIssuerProfile => "fetchIssuerProfile",
            Self::ValidateIssuerProfile => "validateIssuerProfile",
            Self::FetchRevocationList => "fetchRevocationList",
            Self::GetNormalizedDecodedData => "getNormalizedDecodedData",
            Self::CheckDecodedAnchors => "checkDecodedAnchors",
            Self::CheckDecodedPath => "checkDecodedPath",
            Self::CheckDecodedMerkleRoot => "checkDecodedMerkleRoot",
            Self::CheckDecodedTargetHash => "checkDecodedTargetHash",
            Self::FetchDataFromBlockchainApi => "fetchDataFromBlockchainAPI",
            Self::VerifyMerkleProof => "verifyMerkleProof",
            Self::VerifySignature => "verifySignature",
            Self::VerifyTargetHash => "verifyTargetHash",
            Self::ChecksumValidation => "checksumValidation",
            Self::CheckRevocationStatus => "checkRevocationStatus",
            Self::CheckExpirationDate => "checkExpirationDate",
            Self::VerifyCredential => "verifyCredential",
        }
    }

    /// Title shown to the user while the stage runs.
    pub fn title(&self) -> &'static str {
        match self {
            Self::ValidateCredentialType => messages::TYPE_KEY_VALIDATE,
            Self::ValidateCredentialContext => messages::CONTEXT_KEY_VALIDATE,
            Self::ValidateCredentialId => messages::ID_KEY_VALIDATE,
            Self::ValidateCredentialSubject => messages::CREDENTIAL_SUBJECT_KEY_VALIDATE,
            Self::ValidateCredentialProof => messages::PROOF_KEY_VALIDATE,
            Self::ValidateCredentialIssuanceDate => messages::ISSUANCE_DATE_KEY_VALIDATE,
            Self::ValidateCredential => messages::CREDENTIAL_VALIDATION,
            Self::FetchIssuerProfile => messages::FETCHING_ISSUER_PROFILE,
            Self::ValidateIssuerProfile => messages::ISSUER_PROFILE_VALIDATE,
            Self::FetchRevocationList => messages::FETCHING_REVOCATION_LIST,
            Self::GetNormalizedDecodedData => messages::FETCHING_NORMALIZED_DECODED_DATA,
            Self::CheckDecodedAnchors => messages::ANCHOR_DECODED_DATA_KEY_VALIDATE,
            Self::CheckDecodedPath => messages::PATH_DECODED_DATA_KEY_VALIDATE,
            Self::CheckDecodedMerkleRoot => messages::MERKLEROOT_DECODED_DATA_KEY_VALIDATE,
            Self::CheckDecodedTargetHash => messages::TARGETHASH_DECODED_DATA_KEY_VALIDATE,
            Self::FetchDataFromBlockchainApi => messages::BLOCKCHAIN_DATA_VALIDATE,
            Self::VerifyMerkleProof => messages::MERKLE_PROOF_VALIDATE,
            Self::VerifySignature => messages::SIGNATURE_VALIDATE,
            Self::VerifyTargetHash => messages::VALIDATE_TARGET_HASH,
            Self::ChecksumValidation => messages::CHECKSUM_VALIDATION,
            Self::CheckRevocationStatus => messages::REVOCATION_STATUS_VALIDATE,
            Self::CheckExpirationDate => messages::VALID_UNTIL_DATE_VALIDATE,
            Self::VerifyCredential => messages::VERIFY_CREDENTIAL,
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Stage {
    type Err = UnknownStage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|stage| stage.as_str() == s)
            .ok_or_else(|| UnknownStage(s.to_string()))
    }
}
