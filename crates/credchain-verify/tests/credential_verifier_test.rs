//! CredentialVerifier in both modes against a mocked issuer and explorer.

mod common;

use chrono::{TimeZone, Utc};
use common::*;
use credchain_core::messages as msg;
use credchain_core::{Stage, VerificationOutcome};
use credchain_verify::{CredentialVerifier, EngineOptions, VerificationMode};
use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_issuer(server: &MockServer, revoked: Value) -> String {
    let base = server.uri();
    let profile_url = format!("{base}/profile.json");
    let list_url = format!("{base}/revocation.json");
    Mock::given(method("GET"))
        .and(path("/profile.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "@context": ["https://w3id.org/openbadges/v2"],
            "type": "Profile",
            "id": profile_url,
            "name": "Example University",
            "email": "registrar@example.edu",
            "revocationList": list_url,
            "publicKey": [{"id": "ecdsa-koblitz-pubkey:0xabc", "created": "2024-01-01T00:00:00Z"}]
        })))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/revocation.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "@context": "https://w3id.org/openbadges/v2",
            "type": "RevocationList",
            "id": list_url,
            "issuer": profile_url,
            "revokedAssertions": revoked
        })))
        .mount(server)
        .await;
    profile_url
}

fn verifier(server: &MockServer) -> CredentialVerifier {
    CredentialVerifier::new(&client(), registry(server), EngineOptions::default())
}

fn now() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 1, 0, 0, 0).unwrap()
}

#[tokio::test]
async fn on_chain_runs_every_stage() {
    let server = MockServer::start().await;
    let issuer = mount_issuer(&server, json!([])).await;
    mount_transaction(&server, "0xfeed", 1).await;
    let (credential, _) = anchored(&issuer);

    let mut sink: Vec<VerificationOutcome> = Vec::new();
    let result = verifier(&server)
        .verify_at(&credential, VerificationMode::OnChain, &mut sink, now())
        .await;

    assert!(result.status, "outcomes: {sink:#?}");
    assert_eq!(result.message, msg::VERIFIED);
    assert_eq!(result.network_name, "ethereumMainnet");

    let stages: Vec<Stage> = sink.iter().map(|o| o.stage).collect();
    let position = |stage| stages.iter().position(|s| *s == stage).unwrap();
    assert!(position(Stage::ValidateCredential) < position(Stage::FetchIssuerProfile));
    assert!(position(Stage::FetchRevocationList) < position(Stage::GetNormalizedDecodedData));
    assert!(position(Stage::ChecksumValidation) < position(Stage::CheckRevocationStatus));
    assert_eq!(stages.last(), Some(&Stage::VerifyCredential));
}

#[tokio::test]
async fn off_chain_checks_checksum_first() {
    let server = MockServer::start().await;
    let issuer = mount_issuer(&server, json!([])).await;
    mount_transaction(&server, "0xfeed", 1).await;
    let (credential, _) = anchored(&issuer);

    let mut sink: Vec<VerificationOutcome> = Vec::new();
    let result = verifier(&server)
        .verify_at(&credential, VerificationMode::OffChain, &mut sink, now())
        .await;

    assert!(result.status);
    assert_eq!(sink[0].stage, Stage::GetNormalizedDecodedData);
    assert!(!sink.iter().any(|o| o.stage == Stage::ValidateCredentialType));
}

#[tokio::test]
async fn revoked_credential_fails_with_network_name() {
    let server = MockServer::start().await;
    let revoked = json!([{"id": "urn:uuid:6f1e4c2a", "revocationReason": "Awarded in error"}]);
    let issuer = mount_issuer(&server, revoked).await;
    mount_transaction(&server, "0xfeed", 1).await;
    let (credential, _) = anchored(&issuer);

    let mut sink: Vec<VerificationOutcome> = Vec::new();
    let result = verifier(&server)
        .verify_at(&credential, VerificationMode::OnChain, &mut sink, now())
        .await;

    assert!(!result.status);
    assert_eq!(result.message, msg::FAILED);
    assert_eq!(result.network_name, "ethereumMainnet");
    let revocation = sink
        .iter()
        .find(|o| o.stage == Stage::CheckRevocationStatus)
        .unwrap();
    assert_eq!(revocation.reason, "Awarded in error");
}

#[tokio::test]
async fn expired_credential_fails() {
    let server = MockServer::start().await;
    let issuer = mount_issuer(&server, json!([])).await;
    mount_transaction(&server, "0xfeed", 1).await;
    let mut doc = unsigned(&issuer);
    doc["validUntil"] = json!("2025-01-01T00:00:00Z");
    let (credential, _) = with_merkle_proof(doc, &issuer);

    let mut sink: Vec<VerificationOutcome> = Vec::new();
    let result = verifier(&server)
        .verify_at(&credential, VerificationMode::OnChain, &mut sink, now())
        .await;

    assert!(!result.status);
    let expiry = sink
        .iter()
        .find(|o| o.stage == Stage::CheckExpirationDate)
        .unwrap();
    assert!(!expiry.success);
    assert_eq!(expiry.reason, msg::VALID_UNTIL_DATE_ERROR);
}
