//! # Issuance Bytes — The Byte Sequence That Was Anchored or Signed
//!
//! This module defines `IssuanceBytes`, the sole construction path for the
//! bytes that are rehashed during target-hash reconciliation and fed to
//! Ed25519 verification.
//!
//! ## Normalization Rule
//!
//! Issuers hash the credential document with its `proof` member removed,
//! serialized as compact JSON (no insignificant whitespace) with object keys
//! in the order they appear in the document. Key order matters: the
//! workspace enables `serde_json/preserve_order`, and removal of `proof`
//! rebuilds the map instead of swapping entries so that the remaining keys
//! keep their relative positions.
//!
//! Numbers follow JavaScript `JSON.stringify`: a float with no fractional
//! part inside the safe-integer range is written as an integer, so `1.0`
//! becomes `1` and `1e3` becomes `1000`.
//!
//! When a remote normalization service returns the byte sequence directly
//! (`get_byte_array_to_issue`), [`IssuanceBytes::from_text`] wraps it
//! verbatim; the service is the authority for that form.

use serde_json::{Map, Number, Value};

use crate::error::CanonicalizationError;

/// `Number.MAX_SAFE_INTEGER`.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// The exact byte sequence an issuer hashed or signed.
///
/// # Invariants
///
/// - Produced either from a credential document (proof removed, compact,
///   document key order) or verbatim from a normalization service.
/// - The inner buffer is private; downstream code can only read it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IssuanceBytes(Vec<u8>);

impl IssuanceBytes {
    /// Build issuance bytes from a credential document.
    ///
    /// The document itself is not modified.
    ///
    /// # Errors
    ///
    /// Returns `CanonicalizationError::NotAnObject` if the document is not a
    /// JSON object.
    pub fn from_document(document: &Value) -> Result<Self, CanonicalizationError> {
        let object = document
            .as_object()
            .ok_or_else(|| CanonicalizationError::NotAnObject(json_kind(document)))?;
        let without_proof = strip_proof(object);
        let bytes = serde_json::to_vec(&Value::Object(without_proof))?;
        Ok(Self(bytes))
    }

    /// Wrap a byte sequence returned by a normalization service.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self(text.into().into_bytes())
    }

    /// Access the bytes for hashing or signature verification.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// The bytes as UTF-8 text, if they are valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.0).ok()
    }

    /// Returns the length of the byte sequence.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the byte sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<[u8]> for IssuanceBytes {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Copy every member except `proof`, keeping document order.
fn strip_proof(object: &Map<String, Value>) -> Map<String, Value> {
    object
        .iter()
        .filter(|(key, _)| key.as_str() != "proof")
        .map(|(key, value)| (key.clone(), js_numbers(value)))
        .collect()
}

/// Deep copy of `value` with whole floats rewritten as integers.
fn js_numbers(value: &Value) -> Value {
    match value {
        Value::Number(n) => Value::Number(js_number(n)),
        Value::Array(items) => Value::Array(items.iter().map(js_numbers).collect()),
        Value::Object(members) => Value::Object(
            members
                .iter()
                .map(|(key, value)| (key.clone(), js_numbers(value)))
                .collect(),
        ),
        other => other.clone(),
    }
}

fn js_number(n: &Number) -> Number {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() <= MAX_SAFE_INTEGER => {
            Number::from(f as i64)
        }
        _ => n.clone(),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn proof_is_removed() {
        let doc = json!({"id": "urn:1", "proof": {"type": "MerkleProof2019"}, "name": "x"});
        let bytes = IssuanceBytes::from_document(&doc).unwrap();
        assert_eq!(bytes.as_str(), Some(r#"{"id":"urn:1","name":"x"}"#));
    }

    #[test]
    fn document_key_order_is_kept() {
        let doc: Value =
            serde_json::from_str(r#"{"zeta":1,"proof":{},"alpha":2,"@context":["a"]}"#).unwrap();
        let bytes = IssuanceBytes::from_document(&doc).unwrap();
        assert_eq!(bytes.as_str(), Some(r#"{"zeta":1,"alpha":2,"@context":["a"]}"#));
    }

    #[test]
    fn source_document_is_untouched() {
        let doc = json!({"a": 1, "proof": {"type": "x"}});
        let before = doc.clone();
        let _ = IssuanceBytes::from_document(&doc).unwrap();
        assert_eq!(doc, before);
    }

    #[test]
    fn non_object_is_rejected() {
        let err = IssuanceBytes::from_document(&json!([1, 2])).unwrap_err();
        assert!(matches!(err, CanonicalizationError::NotAnObject("array")));
    }

    #[test]
    fn document_without_proof_serializes_whole() {
        let doc = json!({"a": "b"});
        let bytes = IssuanceBytes::from_document(&doc).unwrap();
        assert_eq!(bytes.as_bytes(), br#"{"a":"b"}"#);
        assert_eq!(bytes.len(), 9);
        assert!(!bytes.is_empty());
    }

    #[test]
    fn whole_floats_serialize_as_integers() {
        let doc: Value =
            serde_json::from_str(r#"{"score":1.0,"big":1e3,"neg":-0.0,"nested":[{"x":2.50}]}"#)
                .unwrap();
        let bytes = IssuanceBytes::from_document(&doc).unwrap();
        assert_eq!(bytes.as_str(), Some(r#"{"score":1,"big":1000,"neg":0,"nested":[{"x":2.5}]}"#));
    }

    #[test]
    fn integer_literals_are_left_alone() {
        let doc: Value = serde_json::from_str(r#"{"int":9007199254740993,"neg":-4}"#).unwrap();
        let bytes = IssuanceBytes::from_document(&doc).unwrap();
        assert_eq!(bytes.as_str(), Some(r#"{"int":9007199254740993,"neg":-4}"#));
    }

    #[test]
    fn from_text_is_verbatim() {
        let bytes = IssuanceBytes::from_text("{ \"spaced\": true }");
        assert_eq!(bytes.as_str(), Some("{ \"spaced\": true }"));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn flat_document() -> impl Strategy<Value = Map<String, Value>> {
        prop::collection::vec(
            (
                "[a-z@]{1,8}",
                prop_oneof![
                    any::<bool>().prop_map(Value::Bool),
                    any::<i64>().prop_map(|n| serde_json::json!(n)),
                    "[a-zA-Z0-9 :/]{0,24}".prop_map(Value::String),
                ],
            ),
            0..12,
        )
        .prop_map(|pairs| pairs.into_iter().collect())
    }

    proptest! {
        /// The top-level `proof` member never survives.
        #[test]
        fn proof_never_survives(mut doc in flat_document()) {
            doc.insert("proof".to_string(), serde_json::json!({"type": "MerkleProof2019"}));
            let bytes = IssuanceBytes::from_document(&Value::Object(doc)).unwrap();
            let parsed: Value = serde_json::from_slice(bytes.as_bytes()).unwrap();
            prop_assert!(parsed.get("proof").is_none());
        }

        /// Issuance bytes are deterministic for the same document.
        #[test]
        fn issuance_bytes_deterministic(doc in flat_document()) {
            let value = Value::Object(doc);
            let a = IssuanceBytes::from_document(&value).unwrap();
            let b = IssuanceBytes::from_document(&value).unwrap();
            prop_assert_eq!(a, b);
        }
    }
}
