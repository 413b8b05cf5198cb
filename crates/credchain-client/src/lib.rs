//! # credchain-client — HTTP Collaborators for Credential Verification
//!
//! Typed access to every remote service a verification run touches:
//!
//! - **Blockchain explorers** (Etherscan-compatible proxy API) via
//!   [`ExplorerClient`], addressed through the [`ExplorerRegistry`] and
//!   [`AnchorResolver`].
//! - **Proof normalization service** via [`NormalizationClient`].
//! - **Issuer documents** (profiles, revocation lists) via [`ProfileClient`].
//!
//! ## Architecture
//!
//! This crate is the only place in the workspace that performs HTTP. All
//! sub-clients share one `reqwest::Client` built with the configured
//! timeout. Nothing here retries; a failed verification is re-run by the
//! caller.

pub mod anchor;
pub mod config;
pub mod error;
pub mod explorer;
pub mod normalization;
pub mod profile;
pub mod registry;

pub use anchor::{AnchorReference, AnchorResolver, ResolvedAnchor};
pub use config::{ClientConfig, ConfigError};
pub use error::{ClientError, FetchError, ResolveError};
pub use explorer::{ExplorerClient, TransactionRecord};
pub use normalization::NormalizationClient;
pub use profile::ProfileClient;
pub use registry::{ChainFamily, ExplorerEndpoint, ExplorerRegistry, Network};

use std::time::Duration;

/// Top-level client. Holds sub-clients for each remote service.
#[derive(Debug, Clone)]
pub struct CredchainClient {
    explorer: ExplorerClient,
    normalization: Option<NormalizationClient>,
    profiles: ProfileClient,
}

impl CredchainClient {
    /// Create a client from configuration.
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ClientError::Http {
                endpoint: "client_init".into(),
                source: e,
            })?;

        Ok(Self {
            explorer: ExplorerClient::new(http.clone()),
            normalization: config
                .normalization_url
                .map(|url| NormalizationClient::new(http.clone(), url)),
            profiles: ProfileClient::new(http),
        })
    }

    /// Access the blockchain explorer client.
    pub fn explorer(&self) -> &ExplorerClient {
        &self.explorer
    }

    /// Access the normalization client.
    ///
    /// # Errors
    ///
    /// `ConfigError::MissingNormalizationUrl` if no service URL was configured.
    pub fn normalization(&self) -> Result<&NormalizationClient, ClientError> {
        self.normalization
            .as_ref()
            .ok_or(ClientError::Config(ConfigError::MissingNormalizationUrl))
    }

    /// Access the issuer document client.
    pub fn profiles(&self) -> &ProfileClient {
        &self.profiles
    }
}
