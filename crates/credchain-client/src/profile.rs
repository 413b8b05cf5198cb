//! Issuer document client.
//!
//! Fetches JSON documents published by issuers: profiles (with their
//! `publicKey` entries) and revocation lists. URLs come from the credential
//! itself, so there is no base URL.

use serde_json::Value;

use crate::error::ClientError;

/// Client for issuer-published JSON documents.
#[derive(Debug, Clone)]
pub struct ProfileClient {
    http: reqwest::Client,
}

impl ProfileClient {
    pub(crate) fn new(http: reqwest::Client) -> Self {
        Self { http }
    }

    /// `GET {url}` and parse the body as JSON.
    pub async fn fetch_json(&self, url: &str) -> Result<Value, ClientError> {
        let endpoint = format!("GET {url}");
        let resp = self
            .http
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| ClientError::Http {
                endpoint: endpoint.clone(),
                source: e,
            })?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(ClientError::ApiError {
                endpoint,
                status,
                body,
            });
        }

        resp.json()
            .await
            .map_err(|e| ClientError::Deserialization { endpoint, source: e })
    }
}
