//! Fixtures shared by the engine and verifier tests.

#![allow(dead_code)]

use std::sync::Arc;

use aes::cipher::{block_padding::Pkcs7, BlockEncryptMut, KeyIvInit};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use credchain_client::{ClientConfig, CredchainClient, ExplorerEndpoint, ExplorerRegistry};
use credchain_core::{issuance_digest, sha256_hex, IssuanceBytes};
use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TX: &str = "0xdeadbeef";
pub const ANCHOR: &str = "x:eth:mainnet:0xdeadbeef";

pub fn sibling() -> String {
    "cc".repeat(32)
}

/// A credential body without its proof.
pub fn unsigned(issuer: &str) -> Value {
    json!({
        "@context": ["https://www.w3.org/2018/credentials/v1", "https://w3id.org/openbadges/v2"],
        "id": "urn:uuid:6f1e4c2a",
        "type": ["VerifiableCredential", "BlockcertsCredential"],
        "issuer": issuer,
        "issuanceDate": "2024-03-01T10:00:00Z",
        "credentialSubject": {
            "id": "did:example:alice",
            "name": "Alice Example",
            "image": "data:image/png;base64,iVBORw0KGgo="
        }
    })
}

/// `unsigned(issuer)` with an inline Merkle proof whose target hash and
/// root are correct for it.
pub fn anchored(issuer: &str) -> (Value, String) {
    with_merkle_proof(unsigned(issuer), issuer)
}

/// Attach an inline Merkle proof that is correct for `doc`. Returns the
/// document and its Merkle root.
pub fn with_merkle_proof(mut doc: Value, issuer: &str) -> (Value, String) {
    let target = issuance_digest(&IssuanceBytes::from_document(&doc).unwrap());
    let (merkle, root) = merkle_proof_for(&target);
    doc["proof"] = json!({
        "type": "MerkleProof2019",
        "created": "2024-03-01T10:00:00Z",
        "proofPurpose": "assertionMethod",
        "verificationMethod": format!("{issuer}#key-1"),
        "merkleProof": merkle
    });
    (doc, root)
}

pub const AES_KEY: &str = "0123456789abcdef";
pub const AES_IV: &str = "abcdef9876543210";

/// Merkle proof fields that are correct for issuance `target`, with the
/// root they lead to.
pub fn merkle_proof_for(target: &str) -> (Value, String) {
    let root = sha256_hex(&hex::decode(format!("{target}{}", sibling())).unwrap());
    let proof = json!({
        "anchors": [ANCHOR],
        "path": [{"right": sibling()}],
        "merkleRoot": root,
        "targetHash": target
    });
    (proof, root)
}

/// Attach an `AES-128` proof whose decrypted payload is a Merkle proof
/// that is correct for `doc`.
pub fn with_aes_proof(mut doc: Value) -> (Value, String) {
    let target = issuance_digest(&IssuanceBytes::from_document(&doc).unwrap());
    let (merkle, root) = merkle_proof_for(&target);
    let enc = cbc::Encryptor::<aes::Aes128>::new_from_slices(AES_KEY.as_bytes(), AES_IV.as_bytes())
        .unwrap();
    let plaintext = serde_json::to_vec(&merkle).unwrap();
    doc["proof"] = json!({
        "type": "AES-128",
        "proofValue": STANDARD.encode(enc.encrypt_padded_vec_mut::<Pkcs7>(&plaintext)),
        "proofDecodingKeys": {"AES_128_KEY": AES_KEY, "AES_128_IV": AES_IV}
    });
    (doc, root)
}

pub fn client() -> CredchainClient {
    CredchainClient::new(ClientConfig::default().with_timeout_secs(5)).unwrap()
}

pub fn registry(server: &MockServer) -> Arc<ExplorerRegistry> {
    Arc::new(
        ExplorerRegistry::new(vec![ExplorerEndpoint::new(
            "ethereumMainnet",
            server.uri(),
            "test-key",
        )])
        .unwrap(),
    )
}

/// Serve the anchoring transaction, with `input` as its payload.
pub async fn mount_transaction(server: &MockServer, input: &str, expected_calls: u64) {
    Mock::given(method("GET"))
        .and(path("/api"))
        .and(query_param("txhash", TX))
        .and(query_param("apikey", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "jsonrpc": "2.0",
            "id": 1,
            "result": {"hash": TX, "input": input}
        })))
        .expect(expected_calls)
        .mount(server)
        .await;
}
