//! # SHA-256 Digest Computation
//!
//! The single hashing primitive of the verification pipeline. Merkle path
//! replay hashes hex-decoded sibling concatenations; target-hash
//! reconciliation hashes [`IssuanceBytes`]. Both produce lowercase hex with
//! no `0x` prefix.

use sha2::{Digest, Sha256};

use crate::canonical::IssuanceBytes;

/// Compute the raw 32-byte SHA-256 digest of `data`.
pub fn sha256_bytes(data: &[u8]) -> [u8; 32] {
    let hash = Sha256::digest(data);
    let mut out = [0u8; 32];
    out.copy_from_slice(&hash);
    out
}

/// Compute SHA-256 of `data` as lowercase hex.
pub fn sha256_hex(data: &[u8]) -> String {
    hex::encode(sha256_bytes(data))
}

/// Compute the target hash of a credential's issuance bytes.
///
/// This is the value a `MerkleProof2019` proof carries as `targetHash`.
pub fn issuance_digest(bytes: &IssuanceBytes) -> String {
    sha256_hex(bytes.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_known_vector() {
        assert_eq!(
            sha256_hex(b""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn abc_known_vector() {
        assert_eq!(
            sha256_hex(b"abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn output_is_lowercase_without_prefix() {
        let hex = sha256_hex(b"credential");
        assert_eq!(hex.len(), 64);
        assert!(!hex.starts_with("0x"));
        assert!(hex.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }

    #[test]
    fn issuance_digest_hashes_document_without_proof() {
        let doc = serde_json::json!({"a": 1, "proof": {"x": 1}});
        let bytes = IssuanceBytes::from_document(&doc).unwrap();
        assert_eq!(issuance_digest(&bytes), sha256_hex(br#"{"a":1}"#));
    }
}
