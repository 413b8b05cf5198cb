//! # credchain-vc — Credential Documents and Proofs
//!
//! Everything that reads a credential document:
//!
//! - **Credential** (`credential.rs`): owned copy of the document with
//!   accessors for the members verification needs.
//!
//! - **Proof** (`proof.rs`, `decoder.rs`): dispatch on `proof.type` and
//!   decoding into Merkle or signature material, through the normalization
//!   service when the proof is not carried inline.
//!
//! - **Signature** (`signature.rs`): Ed25519 verification against the key
//!   the issuer publishes.
//!
//! - **Checks** (`structure.rs`, `issuer.rs`, `revocation.rs`): envelope,
//!   issuer profile, revocation list and expiry checks, each reporting
//!   through a `StageReporter`.
//!
//! ## Security Invariant
//!
//! Issuance bytes are produced only by `Credential::issuance_bytes` or
//! taken verbatim from the normalization service. The caller's document is
//! never mutated.
//!
//! ## Crate Policy
//!
//! - Depends on `credchain-core`, `credchain-crypto` and `credchain-client`.
//! - All HTTP goes through `credchain-client`.

pub mod credential;
pub mod decoder;
pub mod error;
pub mod issuer;
pub mod proof;
pub mod revocation;
pub mod signature;
pub mod structure;

pub use credential::Credential;
pub use decoder::{Decoded, DecodedProof, ProofDecoder, ProofMaterial, SignatureMaterial};
pub use error::{CredentialError, DecodeError, VerifyError};
pub use issuer::{IssuerDocuments, IssuerProfileValidator};
pub use proof::ProofKind;
pub use revocation::RevocationStatusCheck;
pub use signature::SignatureVerifier;
pub use structure::CredentialStructureValidator;
