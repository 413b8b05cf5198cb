//! # Ed25519 Signature Verification
//!
//! Verifies a credential's detached Ed25519 signature against the first
//! public key the issuer publishes:
//!
//! 1. Issuance bytes: as decoded, the credential with `proof` removed.
//! 2. Signature: the decoded `proof.proofValue`, base64.
//! 3. Public key: `GET {publicKeyUrl}` → `publicKey[0].publicKey`, base64.
//!
//! A signature mismatch is `Ok(false)`. Fetch and decode failures are
//! `Err(VerifyError)`. Nothing here panics.

use credchain_client::ProfileClient;
use credchain_core::error::CryptoError;
use credchain_core::IssuanceBytes;
use credchain_crypto::{verify_detached, Ed25519PublicKey, Ed25519Signature};
use serde_json::Value;

use crate::credential::non_empty_str;
use crate::decoder::SignatureMaterial;
use crate::error::VerifyError;

/// Verifies Ed25519 proofs, fetching issuer keys over HTTP.
#[derive(Debug, Clone)]
pub struct SignatureVerifier {
    profiles: ProfileClient,
}

impl SignatureVerifier {
    pub fn new(profiles: ProfileClient) -> Self {
        Self { profiles }
    }

    /// Verify the decoded signature over `message` with the key published
    /// at `material.public_key_url`.
    pub async fn verify(
        &self,
        message: &IssuanceBytes,
        material: &SignatureMaterial,
    ) -> Result<bool, VerifyError> {
        let public_key_url = material.public_key_url.as_str();
        let signature = Ed25519Signature::from_base64(&material.signature)
            .map_err(VerifyError::InvalidSignature)?;

        let profile = self
            .profiles
            .fetch_json(public_key_url)
            .await
            .map_err(VerifyError::KeyFetch)?;
        let public_key = first_public_key(&profile)?;

        match verify_detached(message, &signature, &public_key) {
            Ok(()) => Ok(true),
            Err(CryptoError::VerificationFailed(reason)) => {
                tracing::warn!(%reason, url = %public_key_url, "Ed25519 signature mismatch");
                Ok(false)
            }
            Err(e) => Err(VerifyError::InvalidKey(e)),
        }
    }
}

/// `publicKey[0].publicKey` of an issuer profile.
fn first_public_key(profile: &Value) -> Result<Ed25519PublicKey, VerifyError> {
    let encoded = profile
        .get("publicKey")
        .and_then(Value::as_array)
        .and_then(|keys| keys.first())
        .and_then(|entry| entry.get("publicKey"))
        .and_then(non_empty_str)
        .ok_or(VerifyError::MissingPublicKey)?;
    Ed25519PublicKey::from_base64(encoded).map_err(VerifyError::InvalidKey)
}
