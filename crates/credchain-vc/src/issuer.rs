//! # Issuer Profile Checks
//!
//! Fetches the issuer profile named by the credential, checks it is a
//! well-formed Open Badges profile for this issuer, then fetches the
//! revocation list the profile points to.

use credchain_client::ProfileClient;
use credchain_core::messages as msg;
use credchain_core::{OutcomeSink, Stage, StageReporter};
use serde_json::Value;
use url::Url;

use crate::credential::{contains_any, non_empty_str, Credential};
use crate::structure::CREDENTIAL_CONTEXTS;

pub const OPEN_BADGES_V2_CONTEXT: &str = "https://w3id.org/openbadges/v2";
pub const PROFILE_TYPE: &str = "Profile";

/// `@context` values accepted on issuer documents.
pub fn issuer_contexts() -> impl Iterator<Item = &'static str> {
    CREDENTIAL_CONTEXTS
        .iter()
        .copied()
        .chain(std::iter::once(OPEN_BADGES_V2_CONTEXT))
}

/// Documents fetched from the issuer.
#[derive(Debug, Clone, PartialEq)]
pub struct IssuerDocuments {
    pub profile: Value,
    pub revocation_list: Value,
}

/// Fetches and checks issuer documents.
#[derive(Debug, Clone)]
pub struct IssuerProfileValidator {
    profiles: ProfileClient,
}

impl IssuerProfileValidator {
    pub fn new(profiles: ProfileClient) -> Self {
        Self { profiles }
    }

    /// Fetch and check the issuer profile and its revocation list.
    ///
    /// Emits `fetchIssuerProfile`, `validateIssuerProfile` and
    /// `fetchRevocationList`, stopping at the first failure. Returns the
    /// documents only if all three passed.
    pub async fn validate<S: OutcomeSink + ?Sized>(
        &self,
        credential: &Credential,
        reporter: &mut StageReporter<'_, S>,
    ) -> Option<IssuerDocuments> {
        let Some(issuer_url) = credential.issuer_url().and_then(parse_url) else {
            reporter.fail(Stage::FetchIssuerProfile, msg::ISSUER_KEY_ERROR);
            return None;
        };

        let profile = match self.profiles.fetch_json(issuer_url.as_str()).await {
            Ok(profile) => profile,
            Err(e) => {
                tracing::warn!(error = %e, url = %issuer_url, "issuer profile fetch failed");
                reporter.fail(Stage::FetchIssuerProfile, msg::FETCHING_ISSUER_PROFILE_ERROR);
                return None;
            }
        };
        reporter.pass(Stage::FetchIssuerProfile, msg::FETCHING_ISSUER_PROFILE_SUCCESS);

        // The credential names the issuer by the URL it gave, not the parsed form.
        let issuer_id = credential.issuer_url().unwrap_or_default();
        if let Err(reason) = check_profile(&profile, issuer_id) {
            reporter.fail(Stage::ValidateIssuerProfile, reason);
            return None;
        }
        reporter.pass(Stage::ValidateIssuerProfile, msg::ISSUER_PROFILE_SUCCESS);

        let Some(list_url) = profile
            .get("revocationList")
            .and_then(non_empty_str)
            .and_then(parse_url)
        else {
            reporter.fail(Stage::FetchRevocationList, msg::REVOCATION_LIST_ISSUER_PROFILE_KEY_ERROR);
            return None;
        };
        let revocation_list = match self.profiles.fetch_json(list_url.as_str()).await {
            Ok(list) => list,
            Err(e) => {
                tracing::warn!(error = %e, url = %list_url, "revocation list fetch failed");
                reporter.fail(Stage::FetchRevocationList, msg::FETCHING_REVOCATION_LIST_ERROR);
                return None;
            }
        };
        reporter.pass(Stage::FetchRevocationList, msg::FETCHING_REVOCATION_LIST_SUCCESS);

        Some(IssuerDocuments {
            profile,
            revocation_list,
        })
    }
}

fn parse_url(raw: &str) -> Option<Url> {
    Url::parse(raw)
        .ok()
        .filter(|u| matches!(u.scheme(), "http" | "https"))
}

/// Check an issuer profile document. Returns the failure message.
pub fn check_profile(profile: &Value, issuer_id: &str) -> Result<(), &'static str> {
    let contexts: Vec<&str> = issuer_contexts().collect();
    if !contains_any(profile.get("@context"), &contexts) {
        return Err(msg::CONTEXT_ISSUER_PROFILE_KEY_ERROR);
    }
    if !contains_any(profile.get("type"), &[PROFILE_TYPE]) {
        return Err(msg::TYPE_ISSUER_PROFILE_KEY_ERROR);
    }
    if profile.get("id").and_then(non_empty_str) != Some(issuer_id) {
        return Err(msg::ID_ISSUER_PROFILE_KEY_ERROR);
    }
    if profile.get("name").and_then(non_empty_str).is_none() {
        return Err(msg::NAME_ISSUER_PROFILE_KEY_ERROR);
    }
    if profile.get("email").and_then(non_empty_str).is_none() {
        return Err(msg::EMAIL_ISSUER_PROFILE_KEY_ERROR);
    }
    if profile.get("revocationList").and_then(non_empty_str).is_none() {
        return Err(msg::REVOCATION_LIST_ISSUER_PROFILE_KEY_ERROR);
    }
    let keys_ok = profile
        .get("publicKey")
        .and_then(Value::as_array)
        .map(|keys| {
            !keys.is_empty()
                && keys.iter().all(|k| {
                    k.get("id").and_then(non_empty_str).is_some()
                        && k.get("created").and_then(non_empty_str).is_some()
                })
        })
        .unwrap_or(false);
    if !keys_ok {
        return Err(msg::PUBLIC_KEY_ISSUER_PROFILE_KEY_ERROR);
    }
    Ok(())
}
