//! # Credential Documents
//!
//! A [`Credential`] is an owned deep copy of the caller's JSON document.
//! Verification reads it through the accessors here and never mutates it;
//! the caller's original is never touched.
//!
//! The envelope is deliberately untyped: issuers in the wild vary `issuer`
//! (string or object), `@context` and `type` (string or array), and add
//! arbitrary members, all of which take part in the issuance bytes.

use credchain_core::IssuanceBytes;
use serde_json::{Map, Value};

use crate::error::CredentialError;

/// A credential document under verification.
#[derive(Debug, Clone, PartialEq)]
pub struct Credential {
    document: Value,
}

impl Credential {
    /// Deep-copy `document` into a credential.
    pub fn from_value(document: &Value) -> Result<Self, CredentialError> {
        if !document.is_object() {
            return Err(CredentialError::NotAnObject);
        }
        Ok(Self {
            document: document.clone(),
        })
    }

    /// Parse a credential from JSON text, keeping member order.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        let document: Value = serde_json::from_str(text)?;
        if !document.is_object() {
            return Err(serde::de::Error::custom("credential must be a JSON object"));
        }
        Ok(Self { document })
    }

    pub fn document(&self) -> &Value {
        &self.document
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.document.get(key)
    }

    /// The `proof` object, if present.
    pub fn proof(&self) -> Option<&Map<String, Value>> {
        self.document.get("proof").and_then(Value::as_object)
    }

    /// A non-empty string member of `proof`.
    pub fn proof_str(&self, key: &str) -> Option<&str> {
        self.proof().and_then(|p| p.get(key)).and_then(non_empty_str)
    }

    /// The credential `id`.
    pub fn id(&self) -> Option<&str> {
        self.document.get("id").and_then(non_empty_str)
    }

    /// The issuer URL: `issuer` when it is a string, else `issuer.id`.
    pub fn issuer_url(&self) -> Option<&str> {
        match self.document.get("issuer")? {
            Value::String(s) if !s.is_empty() => Some(s),
            Value::Object(o) => o.get("id").and_then(non_empty_str),
            _ => None,
        }
    }

    /// Where the issuer publishes its public key:
    /// `credentialSubject.profile`, else `issuer.profile`, else `issuer`
    /// when it is a string.
    pub fn public_key_url(&self) -> Option<&str> {
        let subject_profile = self
            .document
            .get("credentialSubject")
            .and_then(|s| s.get("profile"))
            .and_then(non_empty_str);
        let issuer = self.document.get("issuer");
        let issuer_profile = issuer.and_then(|i| i.get("profile")).and_then(non_empty_str);
        let issuer_string = issuer.and_then(non_empty_str);
        subject_profile.or(issuer_profile).or(issuer_string)
    }

    /// `validUntil`, if present.
    pub fn valid_until(&self) -> Option<&Value> {
        self.document.get("validUntil")
    }

    /// The bytes the issuer hashed or signed: this document with `proof`
    /// removed.
    pub fn issuance_bytes(&self) -> Result<IssuanceBytes, CredentialError> {
        Ok(IssuanceBytes::from_document(&self.document)?)
    }
}

/// `value` as a non-empty string.
pub(crate) fn non_empty_str(value: &Value) -> Option<&str> {
    value.as_str().filter(|s| !s.is_empty())
}

/// Whether `value` (a string or an array of strings) contains any of
/// `accepted`.
pub(crate) fn contains_any(value: Option<&Value>, accepted: &[&str]) -> bool {
    match value {
        Some(Value::String(s)) => accepted.contains(&s.as_str()),
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .any(|s| accepted.contains(&s)),
        _ => false,
    }
}
