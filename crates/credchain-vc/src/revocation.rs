//! # Revocation and Expiry Status
//!
//! Checks a credential against its issuer's revocation list and its own
//! `validUntil`. The clock is a parameter so callers and tests control it.

use chrono::{DateTime, Utc};
use credchain_core::messages as msg;
use credchain_core::{OutcomeSink, Stage, StageReporter};
use serde_json::Value;

use crate::credential::{contains_any, non_empty_str, Credential};
use crate::issuer::issuer_contexts;

pub const REVOCATION_LIST_TYPE: &str = "RevocationList";

/// Revocation and expiry checks.
#[derive(Debug, Clone, Copy, Default)]
pub struct RevocationStatusCheck;

impl RevocationStatusCheck {
    /// Emit `checkRevocationStatus` then `checkExpirationDate`, stopping at
    /// the first failure. Returns `true` if both passed.
    pub fn check<S: OutcomeSink + ?Sized>(
        &self,
        credential: &Credential,
        profile: &Value,
        revocation_list: &Value,
        reporter: &mut StageReporter<'_, S>,
        now: DateTime<Utc>,
    ) -> bool {
        match revocation_status(credential, profile, revocation_list) {
            Ok(()) => reporter.pass(Stage::CheckRevocationStatus, msg::CREDENTIAL_NOT_REVOKED),
            Err(reason) => {
                reporter.fail(Stage::CheckRevocationStatus, reason);
                return false;
            }
        }
        match expiry_status(credential, now) {
            Ok(reason) => {
                reporter.pass(Stage::CheckExpirationDate, reason);
                true
            }
            Err(reason) => {
                reporter.fail(Stage::CheckExpirationDate, reason);
                false
            }
        }
    }
}

/// Check the list is the issuer's and does not name the credential.
///
/// On a match the reason is the entry's `revocationReason`, if it gives one.
pub fn revocation_status(
    credential: &Credential,
    profile: &Value,
    list: &Value,
) -> Result<(), String> {
    let contexts: Vec<&str> = issuer_contexts().collect();
    if !contains_any(list.get("@context"), &contexts) {
        return Err(msg::CONTEXT_REVOCATION_LIST_KEY_ERROR.into());
    }
    if !contains_any(list.get("type"), &[REVOCATION_LIST_TYPE]) {
        return Err(msg::TYPE_REVOCATION_LIST_KEY_ERROR.into());
    }
    let list_id = list.get("id").and_then(non_empty_str);
    if list_id.is_none() || list_id != profile.get("revocationList").and_then(non_empty_str) {
        return Err(msg::ID_REVOCATION_LIST_KEY_ERROR.into());
    }
    let list_issuer = list.get("issuer").and_then(non_empty_str);
    if list_issuer.is_none() || list_issuer != profile.get("id").and_then(non_empty_str) {
        return Err(msg::ISSUER_REVOCATION_LIST_KEY_ERROR.into());
    }
    let Some(revoked) = list.get("revokedAssertions").and_then(Value::as_array) else {
        return Err(msg::REVOKED_ASSERTIONS_REVOCATION_LIST_KEY_ERROR.into());
    };

    let credential_id = credential.id();
    let entry = revoked
        .iter()
        .find(|entry| credential_id.is_some() && entry.get("id").and_then(Value::as_str) == credential_id);
    match entry {
        None => Ok(()),
        Some(entry) => Err(entry
            .get("revocationReason")
            .and_then(non_empty_str)
            .unwrap_or(msg::CREDENTIAL_REVOKED)
            .to_string()),
    }
}

/// Check `validUntil`, if present, is in the future.
pub fn expiry_status(credential: &Credential, now: DateTime<Utc>) -> Result<&'static str, &'static str> {
    let Some(raw) = credential.valid_until() else {
        return Ok(msg::VALID_UNTIL_DATE_ABSENT);
    };
    let until = raw
        .as_str()
        .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .ok_or(msg::VALID_UNTIL_DATE_ERROR)?;
    if until.with_timezone(&Utc) > now {
        Ok(msg::VALID_UNTIL_DATE_SUCCESS)
    } else {
        Err(msg::VALID_UNTIL_DATE_ERROR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use credchain_core::VerificationOutcome;
    use serde_json::json;

    const ISSUER: &str = "https://issuer.example/profile.json";
    const LIST: &str = "https://issuer.example/revocation.json";

    fn profile() -> Value {
        json!({"id": ISSUER, "revocationList": LIST})
    }

    fn list(revoked: Value) -> Value {
        json!({
            "@context": "https://w3id.org/openbadges/v2",
            "type": "RevocationList",
            "id": LIST,
            "issuer": ISSUER,
            "revokedAssertions": revoked
        })
    }

    fn credential(extra: Value) -> Credential {
        let mut doc = json!({"id": "urn:uuid:42"});
        if let (Some(doc), Some(extra)) = (doc.as_object_mut(), extra.as_object()) {
            doc.extend(extra.clone());
        }
        Credential::from_value(&doc).unwrap()
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn empty_list_is_not_revoked() {
        assert_eq!(revocation_status(&credential(json!({})), &profile(), &list(json!([]))), Ok(()));
    }

    #[test]
    fn unrelated_entries_are_not_revoked() {
        let revoked = json!([{"id": "urn:uuid:7", "revocationReason": "typo"}]);
        assert_eq!(revocation_status(&credential(json!({})), &profile(), &list(revoked)), Ok(()));
    }

    #[test]
    fn listed_credential_reports_reason() {
        let revoked = json!([{"id": "urn:uuid:42", "revocationReason": "Issued in error"}]);
        assert_eq!(
            revocation_status(&credential(json!({})), &profile(), &list(revoked)),
            Err("Issued in error".to_string())
        );
        let bare = json!([{"id": "urn:uuid:42"}]);
        assert_eq!(
            revocation_status(&credential(json!({})), &profile(), &list(bare)),
            Err(msg::CREDENTIAL_REVOKED.to_string())
        );
    }

    #[test]
    fn list_must_belong_to_issuer() {
        let mut doc = list(json!([]));
        doc["issuer"] = json!("https://other.example/profile.json");
        assert_eq!(
            revocation_status(&credential(json!({})), &profile(), &doc),
            Err(msg::ISSUER_REVOCATION_LIST_KEY_ERROR.to_string())
        );
    }

    #[test]
    fn expiry_rules() {
        assert_eq!(expiry_status(&credential(json!({})), now()), Ok(msg::VALID_UNTIL_DATE_ABSENT));
        assert_eq!(
            expiry_status(&credential(json!({"validUntil": "2030-01-01T00:00:00Z"})), now()),
            Ok(msg::VALID_UNTIL_DATE_SUCCESS)
        );
        assert_eq!(
            expiry_status(&credential(json!({"validUntil": "2020-01-01T00:00:00Z"})), now()),
            Err(msg::VALID_UNTIL_DATE_ERROR)
        );
        assert_eq!(
            expiry_status(&credential(json!({"validUntil": "next year"})), now()),
            Err(msg::VALID_UNTIL_DATE_ERROR)
        );
    }

    #[test]
    fn check_stops_after_revocation_failure() {
        let mut sink: Vec<VerificationOutcome> = Vec::new();
        let revoked = json!([{"id": "urn:uuid:42"}]);
        let ok = RevocationStatusCheck.check(
            &credential(json!({})),
            &profile(),
            &list(revoked),
            &mut StageReporter::new(&mut sink),
            now(),
        );
        assert!(!ok);
        assert_eq!(sink.len(), 1);
        assert_eq!(sink[0].stage, Stage::CheckRevocationStatus);
    }
}
