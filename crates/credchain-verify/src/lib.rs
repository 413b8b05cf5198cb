//! # credchain-verify — Credential Verification Pipeline
//!
//! - **ChecksumVerificationEngine** (`checksum.rs`): decodes the proof,
//!   checks its structure, fetches the anchoring transaction and
//!   reconciles Merkle root and target hash, or verifies the Ed25519
//!   signature for signature proofs.
//!
//! - **CredentialVerifier** (`verifier.rs`): wraps the engine with
//!   structure, issuer profile and revocation checks.
//!
//! ## Error Model
//!
//! Nothing here returns `Err`. Every failure is logged, becomes one failed
//! outcome for the stage it happened in, and ends the run with
//! `status = false`. Nothing is retried; callers re-run `validate()`.

pub mod checksum;
pub mod error;
pub mod verifier;

pub use checksum::{AnchorCheck, ChecksumVerificationEngine, EngineOptions, ValidationResult};
pub use error::MismatchError;
pub use verifier::{CredentialVerifier, VerificationMode};
