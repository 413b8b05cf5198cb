//! # Error Types — Shared Error Hierarchy
//!
//! Errors shared by the crypto and credential crates. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.
//! Crate-specific failures (decode, resolve, fetch) live next to the code
//! that produces them.

use thiserror::Error;

/// Error while producing issuance bytes from a credential document.
#[derive(Error, Debug)]
pub enum CanonicalizationError {
    /// The credential document is not a JSON object.
    #[error("credential document must be a JSON object, got {0}")]
    NotAnObject(&'static str),

    /// JSON serialization failed.
    #[error("serialization failed: {0}")]
    SerializationFailed(#[from] serde_json::Error),
}

/// Error in cryptographic operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CryptoError {
    /// Signature verification failed.
    #[error("signature verification failed: {0}")]
    VerificationFailed(String),

    /// Key parsing failed.
    #[error("key error: {0}")]
    KeyError(String),

    /// Digest input or output was malformed.
    #[error("digest error: {0}")]
    DigestError(String),

    /// Symmetric decryption failed.
    #[error("decryption failed: {0}")]
    DecryptionFailed(String),

    /// Base64 or hex input could not be decoded.
    #[error("invalid encoding: {0}")]
    InvalidEncoding(String),
}

/// A stage name did not match any entry in the stage catalogue.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown verification stage: {0:?}")]
pub struct UnknownStage(pub String);
