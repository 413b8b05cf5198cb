//! Error types for credential decoding and verification.

use credchain_client::ClientError;
use credchain_core::error::{CanonicalizationError, CryptoError};
use thiserror::Error;

/// Errors reading a credential document.
#[derive(Error, Debug)]
pub enum CredentialError {
    /// The document is not a JSON object.
    #[error("credential must be a JSON object")]
    NotAnObject,

    /// Producing issuance bytes failed.
    #[error("canonicalization failed: {0}")]
    Canonicalization(#[from] CanonicalizationError),
}

/// Errors decoding a credential's proof.
#[derive(Error, Debug)]
pub enum DecodeError {
    /// The credential has no `proof` object or no `proof.type`.
    #[error("credential has no proof type")]
    MissingProof,

    /// `proof.type` (or `proof.cryptosuite`) names no supported proof kind.
    #[error("unsupported proof type: {0}")]
    UnsupportedProofType(String),

    /// The normalization service response lacks a required key.
    #[error("normalization response is missing {0}")]
    MissingNormalizationKeys(&'static str),

    /// A remote proof needs normalization but no service is configured.
    #[error("normalization service is not configured")]
    NormalizationUnavailable,

    /// The normalization request failed.
    #[error("normalization request failed: {0}")]
    Normalization(#[source] ClientError),

    /// `proofValue`, `AES_128_KEY` or `AES_128_IV` is missing.
    #[error("AES-128 proof is missing {0}")]
    MissingAesMaterial(&'static str),

    /// Decryption of an AES-128 proof failed.
    #[error("proof decryption failed: {0}")]
    Decryption(#[from] CryptoError),

    /// The decrypted payload is not a JSON object.
    #[error("decoded proof is not a JSON object: {0}")]
    InvalidDecodedProof(String),

    /// An Ed25519 proof has no `proofValue`.
    #[error("signature proof has no proofValue")]
    MissingSignature,

    /// No issuer profile URL to fetch the public key from.
    #[error("no public key URL in credentialSubject.profile, issuer.profile or issuer")]
    MissingPublicKeyUrl,

    /// Reading the credential failed.
    #[error(transparent)]
    Credential(#[from] CredentialError),
}

/// Errors verifying an Ed25519 signature proof.
#[derive(Error, Debug)]
pub enum VerifyError {
    /// Fetching the issuer profile failed.
    #[error("public key fetch failed: {0}")]
    KeyFetch(#[source] ClientError),

    /// The profile has no `publicKey[0].publicKey`.
    #[error("issuer profile has no publicKey[0].publicKey")]
    MissingPublicKey,

    /// The public key is not valid base64 or not a valid key.
    #[error("invalid public key: {0}")]
    InvalidKey(#[source] CryptoError),

    /// The signature is not valid base64 or has the wrong length.
    #[error("invalid signature encoding: {0}")]
    InvalidSignature(#[source] CryptoError),
}
