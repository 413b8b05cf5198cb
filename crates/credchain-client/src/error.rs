//! Client error types.

use crate::config::ConfigError;

/// Errors from outbound HTTP calls.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// HTTP transport error, including timeouts.
    #[error("HTTP error calling {endpoint}: {source}")]
    Http {
        endpoint: String,
        source: reqwest::Error,
    },
    /// The remote service returned a non-2xx status.
    #[error("{endpoint} returned {status}: {body}")]
    ApiError {
        endpoint: String,
        status: u16,
        body: String,
    },
    /// Response deserialization failed.
    #[error("failed to deserialize response from {endpoint}: {source}")]
    Deserialization {
        endpoint: String,
        source: reqwest::Error,
    },
    /// Request body serialization failed.
    #[error("failed to serialize request to {endpoint}: {source}")]
    Serialization {
        endpoint: String,
        source: serde_json::Error,
    },
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors resolving an anchor descriptor to an explorer endpoint.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    /// The descriptor does not have four non-empty `:`-separated segments.
    #[error("malformed anchor {anchor:?}: {reason}")]
    MalformedAnchor { anchor: String, reason: String },
    /// The chain family or network token is unknown, or no endpoint is
    /// registered for the pair.
    #[error("unknown network for anchor {anchor:?}: {reason}")]
    UnknownNetwork { anchor: String, reason: String },
    /// An endpoint is registered but lacks a URL or API key.
    #[error("explorer endpoint {id} is misconfigured: {reason}")]
    MisconfiguredEndpoint { id: String, reason: String },
}

/// Errors fetching an anchoring transaction.
///
/// Transport failures, non-2xx statuses, timeouts and empty results are all
/// reported as `NotFound`; the cause is logged, not surfaced.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("transaction {transaction_id} not found on {endpoint}")]
    NotFound {
        endpoint: String,
        transaction_id: String,
    },
}
