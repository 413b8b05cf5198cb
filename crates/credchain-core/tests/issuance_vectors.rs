//! # Issuance Digest Vectors
//!
//! Fixed credential documents and the target hashes an issuer computes for
//! them: SHA-256 over the compact JSON with `proof` removed, keys in
//! document order.

use credchain_core::{issuance_digest, sha256_hex, IssuanceBytes};
use serde_json::Value;

const CREDENTIAL: &str = r#"{
  "@context": ["https://www.w3.org/2018/credentials/v1"],
  "id": "urn:uuid:5a1b0f5e-7c3e-4a57-9a3b-2c4b1a6f8d10",
  "type": ["VerifiableCredential"],
  "issuer": "https://issuer.example/profile.json",
  "issuanceDate": "2024-03-01T10:00:00Z",
  "credentialSubject": {"id": "did:example:alice", "name": "Alice"},
  "proof": {"type": "MerkleProof2019", "merkleProof": {}}
}"#;

const EXPECTED_TEXT: &str = concat!(
    r#"{"@context":["https://www.w3.org/2018/credentials/v1"],"#,
    r#""id":"urn:uuid:5a1b0f5e-7c3e-4a57-9a3b-2c4b1a6f8d10","#,
    r#""type":["VerifiableCredential"],"#,
    r#""issuer":"https://issuer.example/profile.json","#,
    r#""issuanceDate":"2024-03-01T10:00:00Z","#,
    r#""credentialSubject":{"id":"did:example:alice","name":"Alice"}}"#
);

#[test]
fn issuance_text_is_compact_and_ordered() {
    let doc: Value = serde_json::from_str(CREDENTIAL).unwrap();
    let bytes = IssuanceBytes::from_document(&doc).unwrap();
    assert_eq!(bytes.as_str(), Some(EXPECTED_TEXT));
}

#[test]
fn issuance_digest_matches_hash_of_text() {
    let doc: Value = serde_json::from_str(CREDENTIAL).unwrap();
    let bytes = IssuanceBytes::from_document(&doc).unwrap();
    assert_eq!(issuance_digest(&bytes), sha256_hex(EXPECTED_TEXT.as_bytes()));
}

#[test]
fn service_text_hashes_verbatim() {
    let bytes = IssuanceBytes::from_text(EXPECTED_TEXT);
    let doc: Value = serde_json::from_str(CREDENTIAL).unwrap();
    let local = IssuanceBytes::from_document(&doc).unwrap();
    assert_eq!(issuance_digest(&bytes), issuance_digest(&local));
}

#[test]
fn whole_valued_numbers_hash_like_json_stringify() {
    let doc: Value = serde_json::from_str(
        r#"{"id":"urn:1","score":1.0,"big":1e3,"ratio":0.25,"proof":{"type":"MerkleProof2019"}}"#,
    )
    .unwrap();
    let bytes = IssuanceBytes::from_document(&doc).unwrap();
    let expected = r#"{"id":"urn:1","score":1,"big":1000,"ratio":0.25}"#;
    assert_eq!(bytes.as_str(), Some(expected));
    assert_eq!(issuance_digest(&bytes), sha256_hex(expected.as_bytes()));
}
