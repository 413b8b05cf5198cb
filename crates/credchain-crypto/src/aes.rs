//! # AES-128-CBC Proof Unwrapping
//!
//! `AES-128` proofs carry the decoded proof as base64 ciphertext in
//! `proofValue`. Key and IV are the UTF-8 bytes of the `AES_128_KEY` and
//! `AES_128_IV` strings and must be 16 bytes each. Padding is PKCS#7.

use aes::cipher::{block_padding::Pkcs7, BlockDecryptMut, KeyIvInit};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use credchain_core::error::CryptoError;

type Aes128CbcDec = cbc::Decryptor<aes::Aes128>;

const BLOCK_LEN: usize = 16;

/// Decrypt a base64 AES-128-CBC ciphertext and return the plaintext bytes.
///
/// # Errors
///
/// - `CryptoError::KeyError` if the key or IV is not 16 bytes.
/// - `CryptoError::InvalidEncoding` if the ciphertext is not base64.
/// - `CryptoError::DecryptionFailed` on a length or padding failure.
pub fn decrypt_aes128_cbc(
    ciphertext_b64: &str,
    key: &str,
    iv: &str,
) -> Result<Vec<u8>, CryptoError> {
    if key.len() != BLOCK_LEN {
        return Err(CryptoError::KeyError(format!(
            "AES-128 key must be {BLOCK_LEN} bytes, got {}",
            key.len()
        )));
    }
    if iv.len() != BLOCK_LEN {
        return Err(CryptoError::KeyError(format!(
            "AES-128 IV must be {BLOCK_LEN} bytes, got {}",
            iv.len()
        )));
    }
    let ciphertext = STANDARD
        .decode(ciphertext_b64.trim())
        .map_err(|e| CryptoError::InvalidEncoding(format!("ciphertext is not base64: {e}")))?;
    if ciphertext.is_empty() || ciphertext.len() % BLOCK_LEN != 0 {
        return Err(CryptoError::DecryptionFailed(format!(
            "ciphertext length {} is not a positive multiple of {BLOCK_LEN}",
            ciphertext.len()
        )));
    }
    let decryptor = Aes128CbcDec::new_from_slices(key.as_bytes(), iv.as_bytes())
        .map_err(|e| CryptoError::KeyError(format!("invalid key or IV length: {e}")))?;
    decryptor
        .decrypt_padded_vec_mut::<Pkcs7>(&ciphertext)
        .map_err(|_| CryptoError::DecryptionFailed("invalid PKCS#7 padding".to_string()))
}
