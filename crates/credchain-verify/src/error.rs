//! Error types for the verification pipeline.
//!
//! These never escape `validate()`: every error is logged and turned into
//! a failed outcome for the stage it occurred in.

use credchain_core::error::CryptoError;
use thiserror::Error;

/// A recomputed value disagrees with the value the proof claims.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MismatchError {
    /// Replaying the Merkle path gave a different root.
    #[error("computed Merkle root {computed} differs from claimed root {expected}")]
    MerkleRoot { computed: String, expected: String },

    /// The Merkle path could not be replayed.
    #[error("Merkle path cannot be replayed: {0}")]
    InvalidPath(#[from] CryptoError),

    /// The issuance bytes hash to a different target hash.
    #[error("issuance digest {computed} differs from target hash {expected}")]
    TargetHash { computed: String, expected: String },

    /// The anchoring transaction does not carry the Merkle root.
    #[error("transaction {transaction_id} does not carry Merkle root {merkle_root}")]
    AnchorPayload {
        transaction_id: String,
        merkle_root: String,
    },
}
