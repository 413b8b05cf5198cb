//! Proof normalization service client.
//!
//! Credentials whose `MerkleProof2019` proof is not carried inline are
//! decoded remotely:
//!
//! `POST {base}/user/credential/merkle_tree_verification?merkle_tree_data=normalize_data&algorithm={type}`
//!
//! with a multipart field `body` holding the credential JSON. The response
//! is returned as-is; callers check for `decoded_proof_value` and
//! `get_byte_array_to_issue`.

use serde_json::Value;
use url::Url;

use crate::error::ClientError;

const API_PATH: &str = "user/credential/merkle_tree_verification";
const ENDPOINT: &str = "POST /user/credential/merkle_tree_verification";

/// Client for the proof normalization service.
#[derive(Debug, Clone)]
pub struct NormalizationClient {
    http: reqwest::Client,
    base_url: Url,
}

impl NormalizationClient {
    pub(crate) fn new(http: reqwest::Client, base_url: Url) -> Self {
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Send `credential` for normalization under `algorithm` (the proof type).
    pub async fn normalize(&self, credential: &Value, algorithm: &str) -> Result<Value, ClientError> {
        let base = self.base_url.as_str().trim_end_matches('/');
        let url = format!("{base}/{API_PATH}");

        let body = serde_json::to_string(credential).map_err(|e| ClientError::Serialization {
            endpoint: ENDPOINT.into(),
            source: e,
        })?;
        let part = reqwest::multipart::Part::text(body)
            .file_name("blob")
            .mime_str("application/json")
            .map_err(|e| ClientError::Http {
                endpoint: ENDPOINT.into(),
                source: e,
            })?;
        let form = reqwest::multipart::Form::new().part("body", part);

        let resp = self
            .http
            .post(&url)
            .query(&[("merkle_tree_data", "normalize_data"), ("algorithm", algorithm)])
            .header(reqwest::header::ACCEPT, "application/json")
            .multipart(form)
            .send()
            .await
            .map_err(|e| ClientError::Http {
                endpoint: ENDPOINT.into(),
                source: e,
            })?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(ClientError::ApiError {
                endpoint: ENDPOINT.into(),
                status,
                body,
            });
        }

        resp.json().await.map_err(|e| ClientError::Deserialization {
            endpoint: ENDPOINT.into(),
            source: e,
        })
    }
}
