//! # Proof Decoding
//!
//! Turns a credential's `proof` into the material the engine verifies.
//!
//! ## Strategies
//!
//! | Kind | Source of decoded proof | Source of issuance bytes | Network |
//! |------|-------------------------|--------------------------|---------|
//! | `MerkleProof2019`, inline | `proof.merkleProof` verbatim | local | none |
//! | `Ed25519VerificationKey2018` | `proof.merkleProof`, possibly empty | local | none |
//! | `MerkleProof2019`, remote | `decoded_proof_value` | `get_byte_array_to_issue` | one POST |
//! | `AES-128` | decrypted `proof.proofValue` | local | none |
//! | `Ed25519` | `proof.proofValue` + key URL | local | none |
//!
//! "Local" issuance bytes are the credential with `proof` removed (see
//! [`IssuanceBytes`]). Decoded proofs are parsed leniently: missing or
//! mistyped fields become `None` or empty so the engine can report each
//! structural check individually.

use credchain_client::NormalizationClient;
use credchain_core::IssuanceBytes;
use credchain_crypto::{decrypt_aes128_cbc, ProofPathElement};
use serde_json::Value;

use crate::credential::{non_empty_str, Credential};
use crate::error::DecodeError;
use crate::proof::{ProofKind, ED25519_VERIFICATION_KEY_2018};

pub const DECODED_PROOF_VALUE: &str = "decoded_proof_value";
pub const BYTE_ARRAY_TO_ISSUE: &str = "get_byte_array_to_issue";
pub const AES_128_KEY: &str = "AES_128_KEY";
pub const AES_128_IV: &str = "AES_128_IV";

/// A decoded Merkle proof.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodedProof {
    /// Anchor descriptors; only string entries are kept.
    pub anchors: Vec<String>,
    /// `None` when `path` is absent or not an array of path elements.
    pub path: Option<Vec<ProofPathElement>>,
    pub merkle_root: Option<String>,
    pub target_hash: Option<String>,
}

impl DecodedProof {
    /// Read a decoded proof object leniently.
    pub fn from_value(value: &Value) -> Self {
        let anchors = value
            .get("anchors")
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(non_empty_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();
        let path = value
            .get("path")
            .and_then(|p| serde_json::from_value::<Vec<ProofPathElement>>(p.clone()).ok());
        Self {
            anchors,
            path,
            merkle_root: value.get("merkleRoot").and_then(non_empty_str).map(str::to_string),
            target_hash: value.get("targetHash").and_then(non_empty_str).map(str::to_string),
        }
    }

    /// The anchor the engine resolves: the first one.
    pub fn selected_anchor(&self) -> Option<&str> {
        self.anchors.first().map(String::as_str)
    }
}

/// What an Ed25519 proof needs for verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureMaterial {
    /// Base64 signature from `proof.proofValue`.
    pub signature: String,
    pub public_key_url: String,
}

/// Decoded proof material by strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProofMaterial {
    Merkle(DecodedProof),
    Signature(SignatureMaterial),
}

/// The result of decoding a credential's proof.
#[derive(Debug, Clone)]
pub struct Decoded {
    pub kind: ProofKind,
    pub issuance: IssuanceBytes,
    pub material: ProofMaterial,
}

/// Decodes credential proofs, calling the normalization service when a
/// Merkle proof is not carried inline.
#[derive(Debug, Clone, Default)]
pub struct ProofDecoder {
    normalization: Option<NormalizationClient>,
}

impl ProofDecoder {
    pub fn new(normalization: Option<NormalizationClient>) -> Self {
        Self { normalization }
    }

    /// Decode the proof of `credential`.
    ///
    /// At most one network call is made, and only for remote Merkle proofs.
    pub async fn decode(&self, credential: &Credential) -> Result<Decoded, DecodeError> {
        let proof = credential.proof().ok_or(DecodeError::MissingProof)?;
        let kind = ProofKind::from_proof(proof)?;

        match kind {
            ProofKind::MerkleProof2019 => {
                let inline = proof.get("merkleProof").and_then(Value::as_object);
                let legacy = proof.get("type").and_then(Value::as_str)
                    == Some(ED25519_VERIFICATION_KEY_2018);
                if legacy || inline.is_some_and(|m| !m.is_empty()) {
                    let merkle = inline.cloned().map(Value::Object).unwrap_or_default();
                    Ok(Decoded {
                        kind,
                        issuance: credential.issuance_bytes()?,
                        material: ProofMaterial::Merkle(DecodedProof::from_value(&merkle)),
                    })
                } else {
                    self.decode_remote(credential, kind).await
                }
            }
            ProofKind::Aes128 => decode_aes(credential, kind),
            ProofKind::Ed25519 => {
                let signature = credential
                    .proof_str("proofValue")
                    .ok_or(DecodeError::MissingSignature)?
                    .to_string();
                let public_key_url = credential
                    .public_key_url()
                    .ok_or(DecodeError::MissingPublicKeyUrl)?
                    .to_string();
                Ok(Decoded {
                    kind,
                    issuance: credential.issuance_bytes()?,
                    material: ProofMaterial::Signature(SignatureMaterial {
                        signature,
                        public_key_url,
                    }),
                })
            }
        }
    }

    async fn decode_remote(
        &self,
        credential: &Credential,
        kind: ProofKind,
    ) -> Result<Decoded, DecodeError> {
        let client = self
            .normalization
            .as_ref()
            .ok_or(DecodeError::NormalizationUnavailable)?;
        let response = client
            .normalize(credential.document(), kind.as_str())
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "normalization request failed");
                DecodeError::Normalization(e)
            })?;

        let decoded = response
            .get(DECODED_PROOF_VALUE)
            .ok_or(DecodeError::MissingNormalizationKeys(DECODED_PROOF_VALUE))?;
        let issuance = match response.get(BYTE_ARRAY_TO_ISSUE) {
            Some(Value::String(text)) => IssuanceBytes::from_text(text.as_str()),
            Some(Value::Null) | None => {
                return Err(DecodeError::MissingNormalizationKeys(BYTE_ARRAY_TO_ISSUE))
            }
            Some(other) => IssuanceBytes::from_text(other.to_string()),
        };

        tracing::debug!(kind = %kind, "proof normalized remotely");
        Ok(Decoded {
            kind,
            issuance,
            material: ProofMaterial::Merkle(DecodedProof::from_value(decoded)),
        })
    }
}

fn decode_aes(credential: &Credential, kind: ProofKind) -> Result<Decoded, DecodeError> {
    let ciphertext = credential
        .proof_str("proofValue")
        .ok_or(DecodeError::MissingAesMaterial("proofValue"))?;
    let keys = credential.proof().and_then(|p| p.get("proofDecodingKeys"));
    let key = keys
        .and_then(|k| k.get(AES_128_KEY))
        .and_then(non_empty_str)
        .ok_or(DecodeError::MissingAesMaterial(AES_128_KEY))?;
    let iv = keys
        .and_then(|k| k.get(AES_128_IV))
        .and_then(non_empty_str)
        .ok_or(DecodeError::MissingAesMaterial(AES_128_IV))?;

    let plaintext = decrypt_aes128_cbc(ciphertext, key, iv)?;
    let decoded: Value = serde_json::from_slice(&plaintext)
        .map_err(|e| DecodeError::InvalidDecodedProof(e.to_string()))?;
    if !decoded.is_object() {
        return Err(DecodeError::InvalidDecodedProof(
            "expected a JSON object".to_string(),
        ));
    }

    Ok(Decoded {
        kind,
        issuance: credential.issuance_bytes()?,
        material: ProofMaterial::Merkle(DecodedProof::from_value(&decoded)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn credential(value: Value) -> Credential {
        Credential::from_value(&value).unwrap()
    }

    #[test]
    fn lenient_parse_keeps_what_is_valid() {
        let decoded = DecodedProof::from_value(&json!({
            "anchors": ["x:eth:mainnet:0x1", 7, ""],
            "path": "not-a-list",
            "merkleRoot": "",
            "targetHash": "ab"
        }));
        assert_eq!(decoded.anchors, vec!["x:eth:mainnet:0x1"]);
        assert_eq!(decoded.path, None);
        assert_eq!(decoded.merkle_root, None);
        assert_eq!(decoded.target_hash.as_deref(), Some("ab"));
        assert_eq!(decoded.selected_anchor(), Some("x:eth:mainnet:0x1"));
    }

    #[tokio::test]
    async fn verification_key_2018_never_calls_normalization() {
        let cred = credential(json!({
            "id": "urn:2",
            "proof": {"type": "Ed25519VerificationKey2018", "merkleProof": {}}
        }));
        let decoded = ProofDecoder::default().decode(&cred).await.unwrap();
        assert_eq!(decoded.kind, ProofKind::MerkleProof2019);
        assert_eq!(decoded.issuance.as_str(), Some(r#"{"id":"urn:2"}"#));
        assert_eq!(decoded.material, ProofMaterial::Merkle(DecodedProof::default()));
    }

    #[tokio::test]
    async fn inline_merkle_proof_decodes_without_network() {
        let cred = credential(json!({
            "id": "urn:1",
            "proof": {
                "type": "MerkleProof2019",
                "merkleProof": {
                    "anchors": ["x:eth:mainnet:0x1"],
                    "path": [{"right": "cc"}],
                    "merkleRoot": "ff",
                    "targetHash": "ee"
                }
            }
        }));
        let decoded = ProofDecoder::default().decode(&cred).await.unwrap();
        assert_eq!(decoded.kind, ProofKind::MerkleProof2019);
        assert_eq!(decoded.issuance.as_str(), Some(r#"{"id":"urn:1"}"#));
        match decoded.material {
            ProofMaterial::Merkle(proof) => {
                assert_eq!(proof.path, Some(vec![ProofPathElement::right("cc")]));
                assert_eq!(proof.merkle_root.as_deref(), Some("ff"));
            }
            other => panic!("expected Merkle material, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn empty_merkle_proof_without_service_is_unavailable() {
        let cred = credential(json!({"proof": {"type": "MerkleProof2019", "merkleProof": {}}}));
        assert!(matches!(
            ProofDecoder::default().decode(&cred).await,
            Err(DecodeError::NormalizationUnavailable)
        ));
    }

    #[tokio::test]
    async fn unsupported_type_is_hard_failure() {
        let cred = credential(json!({"proof": {"type": "BbsBlsSignature2020"}}));
        assert!(matches!(
            ProofDecoder::default().decode(&cred).await,
            Err(DecodeError::UnsupportedProofType(_))
        ));
    }

    #[tokio::test]
    async fn missing_proof_is_reported() {
        let cred = credential(json!({"id": "urn:1"}));
        assert!(matches!(
            ProofDecoder::default().decode(&cred).await,
            Err(DecodeError::MissingProof)
        ));
    }

    #[tokio::test]
    async fn aes_missing_material_fails_before_decryption() {
        let cred = credential(json!({
            "proof": {"type": "AES-128", "proofValue": "AAAA", "proofDecodingKeys": {"AES_128_KEY": "0123456789abcdef"}}
        }));
        assert!(matches!(
            ProofDecoder::default().decode(&cred).await,
            Err(DecodeError::MissingAesMaterial(AES_128_IV))
        ));

        let no_value = credential(json!({"proof": {"type": "AES-128"}}));
        assert!(matches!(
            ProofDecoder::default().decode(&no_value).await,
            Err(DecodeError::MissingAesMaterial("proofValue"))
        ));
    }

    #[tokio::test]
    async fn ed25519_locates_signature_and_key_url() {
        let cred = credential(json!({
            "issuer": "https://issuer.example/profile.json",
            "proof": {"type": "Ed25519Signature2020", "proofValue": "c2ln"}
        }));
        let decoded = ProofDecoder::default().decode(&cred).await.unwrap();
        assert_eq!(
            decoded.material,
            ProofMaterial::Signature(SignatureMaterial {
                signature: "c2ln".into(),
                public_key_url: "https://issuer.example/profile.json".into(),
            })
        );
    }

    #[tokio::test]
    async fn ed25519_without_proof_value_fails() {
        let cred = credential(json!({
            "issuer": "https://issuer.example/profile.json",
            "proof": {"type": "Ed25519Signature2018"}
        }));
        assert!(matches!(
            ProofDecoder::default().decode(&cred).await,
            Err(DecodeError::MissingSignature)
        ));
    }
}
