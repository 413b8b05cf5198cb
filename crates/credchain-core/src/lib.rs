//! # credchain-core — Foundational Types for Credential Verification
//!
//! The leaf crate of the credchain workspace. Every other crate depends on
//! it; it depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **`IssuanceBytes` newtype.** The byte sequence that was hashed or signed
//!    at issuance is produced in exactly one place: the credential document
//!    with `proof` removed, serialized compactly in document key order.
//!
//! 2. **Hex digests are lowercase without `0x`.** [`sha256_hex`] is the only
//!    hashing entry point used by the Merkle and reconciliation paths.
//!
//! 3. **Closed `Stage` enum.** Every progress event names a stage from one
//!    catalogue with a declared order, so event streams can be sorted and
//!    compared deterministically.
//!
//! 4. **Progress is a sink, not a callback.** Verification code writes
//!    [`VerificationOutcome`] values into an [`OutcomeSink`]; collecting them
//!    into a `Vec` makes stage sequences directly testable.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `credchain-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod canonical;
pub mod digest;
pub mod error;
pub mod messages;
pub mod outcome;
pub mod stage;

pub use canonical::IssuanceBytes;
pub use digest::{issuance_digest, sha256_bytes, sha256_hex};
pub use error::{CanonicalizationError, CryptoError, UnknownStage};
pub use outcome::{FnSink, OutcomeSink, StageReporter, TracingSink, VerificationOutcome};
pub use stage::Stage;
