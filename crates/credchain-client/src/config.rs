//! Client configuration.
//!
//! HTTP settings shared by the explorer, normalization and profile clients.
//! Explorer endpoints and their API keys live in the
//! [`ExplorerRegistry`](crate::registry::ExplorerRegistry), not here.

use url::Url;

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for outbound HTTP calls.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the proof normalization service. Required only for
    /// credentials whose `MerkleProof2019` proof is not inline.
    pub normalization_url: Option<Url>,
    /// Per-request timeout in seconds. Exceeding it is reported like any
    /// other transport failure.
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            normalization_url: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `CREDCHAIN_NORMALIZATION_URL` (optional)
    /// - `CREDCHAIN_TIMEOUT_SECS` (default: 30)
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            normalization_url: env_opt_url("CREDCHAIN_NORMALIZATION_URL")?,
            timeout_secs: std::env::var("CREDCHAIN_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
        })
    }

    /// Set the normalization service URL from a string.
    pub fn with_normalization_url(mut self, raw: &str) -> Result<Self, ConfigError> {
        self.normalization_url = Some(parse_url("normalization_url", raw)?);
        Ok(self)
    }

    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }
}

fn env_opt_url(var: &str) -> Result<Option<Url>, ConfigError> {
    match std::env::var(var) {
        Ok(raw) if !raw.trim().is_empty() => parse_url(var, raw.trim()).map(Some),
        _ => Ok(None),
    }
}

fn parse_url(name: &str, raw: &str) -> Result<Url, ConfigError> {
    Url::parse(raw).map_err(|e| ConfigError::InvalidUrl(name.to_string(), e.to_string()))
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid URL for {0}: {1}")]
    InvalidUrl(String, String),
    #[error("failed to read explorer registry {0}: {1}")]
    RegistryRead(String, String),
    #[error("invalid explorer registry: {0}")]
    RegistryParse(String),
    #[error("duplicate explorer id {0:?} in registry")]
    DuplicateExplorer(String),
    #[error("normalization service URL is not configured")]
    MissingNormalizationUrl,
}
