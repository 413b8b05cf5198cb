//! # credchain-crypto — Cryptographic Primitives
//!
//! The pure building blocks of checksum verification:
//!
//! - **Merkle path replay** from a target hash to a claimed root, with
//!   positional (left/right) concatenation of hex digests.
//! - **Ed25519** detached signature verification over issuance bytes.
//! - **AES-128-CBC** unwrapping of encrypted proof payloads.
//!
//! Nothing here performs I/O or reports progress; the engine in
//! `credchain-verify` layers stage reporting on top.
//!
//! ## Crate Policy
//!
//! - Depends only on `credchain-core` internally.
//! - No mocking of cryptographic operations in tests.
//! - No `unsafe` code.

pub mod aes;
pub mod ed25519;
pub mod merkle;

pub use aes::decrypt_aes128_cbc;
pub use ed25519::{verify_detached, Ed25519PublicKey, Ed25519Signature};
pub use merkle::{MerklePathVerifier, PathMode, ProofPathElement};
