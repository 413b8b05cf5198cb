//! Blockchain explorer client.
//!
//! Looks up anchoring transactions through an Etherscan-compatible proxy
//! endpoint:
//!
//! `GET {explorerUrl}api?module=proxy&action=eth_getTransactionByHash&apikey={key}&txhash={id}`
//!
//! Every failure mode (transport error, timeout, non-2xx status, non-JSON
//! body, empty object, absent or `null` result) is reported as
//! [`FetchError::NotFound`]. The cause is logged at `warn`.

use serde_json::Value;

use crate::anchor::ResolvedAnchor;
use crate::error::{ClientError, FetchError};
use crate::registry::ExplorerEndpoint;

const ENDPOINT: &str = "GET api?module=proxy&action=eth_getTransactionByHash";

/// A transaction body returned by an explorer.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRecord {
    raw: Value,
}

impl TransactionRecord {
    pub fn raw(&self) -> &Value {
        &self.raw
    }

    /// The JSON-RPC `result` member.
    pub fn result(&self) -> &Value {
        &self.raw["result"]
    }

    /// The transaction's `input` data, if present.
    pub fn input(&self) -> Option<&str> {
        self.result().get("input").and_then(Value::as_str)
    }

    /// Whether the transaction input carries `hash_hex` (case-insensitive,
    /// `0x` prefix optional on either side).
    pub fn anchors_hash(&self, hash_hex: &str) -> bool {
        let needle = strip_0x(hash_hex).to_ascii_lowercase();
        if needle.is_empty() {
            return false;
        }
        self.input()
            .map(|input| strip_0x(input).to_ascii_lowercase().contains(&needle))
            .unwrap_or(false)
    }
}

fn strip_0x(s: &str) -> &str {
    s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")).unwrap_or(s)
}

/// Client for Etherscan-compatible explorer APIs.
#[derive(Debug, Clone)]
pub struct ExplorerClient {
    http: reqwest::Client,
}

impl ExplorerClient {
    pub(crate) fn new(http: reqwest::Client) -> Self {
        Self { http }
    }

    /// Fetch the transaction an anchor points at.
    pub async fn fetch_transaction(
        &self,
        anchor: &ResolvedAnchor,
    ) -> Result<TransactionRecord, FetchError> {
        self.fetch(&anchor.endpoint, anchor.transaction_id()).await
    }

    /// Fetch a transaction by id from `endpoint`.
    pub async fn fetch(
        &self,
        endpoint: &ExplorerEndpoint,
        transaction_id: &str,
    ) -> Result<TransactionRecord, FetchError> {
        let not_found = || FetchError::NotFound {
            endpoint: endpoint.id.clone(),
            transaction_id: transaction_id.to_string(),
        };

        let body = match self.request(endpoint, transaction_id).await {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!(network = %endpoint.id, tx = %transaction_id, error = %e, "explorer request failed");
                return Err(not_found());
            }
        };

        if !has_result(&body) {
            tracing::warn!(network = %endpoint.id, tx = %transaction_id, "explorer returned no transaction");
            return Err(not_found());
        }

        tracing::debug!(network = %endpoint.id, tx = %transaction_id, "transaction fetched");
        Ok(TransactionRecord { raw: body })
    }

    async fn request(
        &self,
        endpoint: &ExplorerEndpoint,
        transaction_id: &str,
    ) -> Result<Value, ClientError> {
        let url = format!("{}api", with_trailing_slash(&endpoint.url));
        let resp = self
            .http
            .get(&url)
            .query(&[
                ("module", "proxy"),
                ("action", "eth_getTransactionByHash"),
                ("apikey", endpoint.api_key.as_str()),
                ("txhash", transaction_id),
            ])
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

fn with_trailing_slash(url: &str) -> String {
    if url.ends_with('/') {
        url.to_string()
    } else {
        format!("{url}/")
    }
}

/// A body counts as a transaction when it is a non-empty object whose
/// `result` is present and neither `null` nor empty.
fn has_result(body: &Value) -> bool {
    let Some(object) = body.as_object() else {
        return false;
    };
    match object.get("result") {
        None | Some(Value::Null) => false,
        Some(Value::Object(map)) => !map.is_empty(),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(items)) => !items.is_empty(),
        Some(_) => true,
    }
}
