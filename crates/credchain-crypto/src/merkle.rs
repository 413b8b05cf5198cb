//! # Merkle Path Replay
//!
//! Replays a Merkle inclusion proof from a leaf (`targetHash`) to a claimed
//! root. Each path element names one sibling digest and its position
//! relative to the running accumulator:
//!
//! - `{left: L}`:  `acc = SHA256(hex_decode(L ‖ acc))`
//! - `{right: R}`: `acc = SHA256(hex_decode(acc ‖ R))`
//!
//! Concatenation happens on the hex text before decoding. Elements are
//! applied in the order given; the comparison with the root happens once,
//! after the whole path has been hashed, as exact string equality.
//!
//! ## Path Modes
//!
//! [`PathMode::Strict`] rejects elements that carry neither or both sibling
//! positions. [`PathMode::Compatible`] reproduces the permissive behavior
//! seen in deployed proofs: an empty element is a no-op and an element with
//! both positions uses `left`.

use credchain_core::error::CryptoError;
use credchain_core::sha256_hex;
use serde::{Deserialize, Serialize};

/// One step of a Merkle inclusion proof.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProofPathElement {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right: Option<String>,
}

impl ProofPathElement {
    pub fn left(hash: impl Into<String>) -> Self {
        Self {
            left: Some(hash.into()),
            right: None,
        }
    }

    pub fn right(hash: impl Into<String>) -> Self {
        Self {
            left: None,
            right: Some(hash.into()),
        }
    }
}

/// Handling of malformed path elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PathMode {
    /// Reject elements with neither or both sibling positions.
    #[default]
    Strict,
    /// Skip empty elements; prefer `left` when both are present.
    Compatible,
}

/// Replays Merkle paths under a fixed [`PathMode`].
#[derive(Debug, Clone, Copy, Default)]
pub struct MerklePathVerifier {
    mode: PathMode,
}

impl MerklePathVerifier {
    pub fn new(mode: PathMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> PathMode {
        self.mode
    }

    /// Hash `target_hash` up through `path` and return the resulting root.
    ///
    /// # Errors
    ///
    /// - `CryptoError::InvalidEncoding` if a concatenation is not valid hex.
    /// - `CryptoError::DigestError` if an element is malformed under
    ///   [`PathMode::Strict`].
    pub fn compute_root(
        &self,
        target_hash: &str,
        path: &[ProofPathElement],
    ) -> Result<String, CryptoError> {
        let mut acc = target_hash.to_string();
        for (index, element) in path.iter().enumerate() {
            let joined = match (&element.left, &element.right, self.mode) {
                (Some(left), None, _) | (Some(left), Some(_), PathMode::Compatible) => {
                    format!("{left}{acc}")
                }
                (None, Some(right), _) => format!("{acc}{right}"),
                (None, None, PathMode::Compatible) => continue,
                (None, None, PathMode::Strict) => {
                    return Err(CryptoError::DigestError(format!(
                        "path element {index} has no sibling"
                    )))
                }
                (Some(_), Some(_), PathMode::Strict) => {
                    return Err(CryptoError::DigestError(format!(
                        "path element {index} has both left and right siblings"
                    )))
                }
            };
            acc = hash_hex_concat(&joined, index)?;
        }
        Ok(acc)
    }

    /// Returns `true` only if the replayed root equals `merkle_root` exactly.
    pub fn verify(&self, target_hash: &str, path: &[ProofPathElement], merkle_root: &str) -> bool {
        match self.compute_root(target_hash, path) {
            Ok(root) => root == merkle_root,
            Err(_) => false,
        }
    }
}

fn hash_hex_concat(joined: &str, index: usize) -> Result<String, CryptoError> {
    let bytes = hex::decode(joined).map_err(|e| {
        CryptoError::InvalidEncoding(format!("path element {index}: invalid hex: {e}"))
    })?;
    Ok(sha256_hex(&bytes))
}
