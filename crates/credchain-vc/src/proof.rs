//! # Proof Kinds
//!
//! Closed set of proof kinds the verifier understands. Dispatch on
//! `proof.type` happens once, here; the decoder and the engine match on
//! [`ProofKind`] exhaustively.
//!
//! | `proof.type` | `proof.cryptosuite` | Kind |
//! |--------------|---------------------|------|
//! | `MerkleProof2019` | any | `MerkleProof2019` |
//! | `Ed25519VerificationKey2018` | any | `MerkleProof2019`, always inline |
//! | `AES-128` | any | `Aes128` |
//! | `Ed25519Signature2018`, `Ed25519Signature2020` | any | `Ed25519` |
//! | `DataIntegrityProof` | `eddsa-*` | `Ed25519` |

use serde_json::{Map, Value};

use crate::error::DecodeError;

pub const MERKLE_PROOF_2019: &str = "MerkleProof2019";
pub const AES_128: &str = "AES-128";
pub const DATA_INTEGRITY_PROOF: &str = "DataIntegrityProof";
/// Legacy issuers label inline Merkle proofs with this type.
pub const ED25519_VERIFICATION_KEY_2018: &str = "Ed25519VerificationKey2018";

const ED25519_TYPES: &[&str] = &["Ed25519Signature2018", "Ed25519Signature2020"];

/// The verification strategy a proof selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProofKind {
    /// Merkle inclusion proof anchored on a blockchain.
    MerkleProof2019,
    /// Merkle proof wrapped in AES-128-CBC.
    Aes128,
    /// Detached Ed25519 signature.
    Ed25519,
}

impl ProofKind {
    /// Determine the proof kind from a `proof` object.
    ///
    /// # Errors
    ///
    /// - `DecodeError::MissingProof` if `type` is absent or empty.
    /// - `DecodeError::UnsupportedProofType` for any other type.
    pub fn from_proof(proof: &Map<String, Value>) -> Result<Self, DecodeError> {
        let proof_type = proof
            .get("type")
            .and_then(Value::as_str)
            .filter(|t| !t.is_empty())
            .ok_or(DecodeError::MissingProof)?;

        match proof_type {
            MERKLE_PROOF_2019 | ED25519_VERIFICATION_KEY_2018 => Ok(Self::MerkleProof2019),
            AES_128 => Ok(Self::Aes128),
            t if ED25519_TYPES.contains(&t) => Ok(Self::Ed25519),
            DATA_INTEGRITY_PROOF => match proof.get("cryptosuite").and_then(Value::as_str) {
                Some(suite) if suite.starts_with("eddsa") => Ok(Self::Ed25519),
                Some(suite) => Err(DecodeError::UnsupportedProofType(format!(
                    "{DATA_INTEGRITY_PROOF}/{suite}"
                ))),
                None => Err(DecodeError::UnsupportedProofType(format!(
                    "{DATA_INTEGRITY_PROOF} without cryptosuite"
                ))),
            },
            other => Err(DecodeError::UnsupportedProofType(other.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MerkleProof2019 => MERKLE_PROOF_2019,
            Self::Aes128 => AES_128,
            Self::Ed25519 => "Ed25519",
        }
    }
}

impl std::fmt::Display for ProofKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
