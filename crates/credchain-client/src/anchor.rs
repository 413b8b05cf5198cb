//! # Anchor Resolution
//!
//! An anchor descriptor names the blockchain transaction that attests to a
//! Merkle root: `<meta>:<chainFamily>:<network>:<transactionId>`, for example
//! `blink:eth:mainnet:0xabc123`. The first segment is unused metadata.
//!
//! Resolution is pure: it parses the descriptor, maps the family and network
//! tokens to canonical names, and looks up the injected
//! [`ExplorerRegistry`]. No I/O happens here.

use std::sync::Arc;

use crate::error::ResolveError;
use crate::registry::{registry_key, ChainFamily, ExplorerEndpoint, ExplorerRegistry, Network};

const SEGMENTS: usize = 4;

/// A parsed anchor descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnchorReference {
    pub chain_family: ChainFamily,
    pub network: Network,
    pub transaction_id: String,
}

impl AnchorReference {
    /// Registry key of the explorer for this anchor, e.g. `ethereumMainnet`.
    pub fn network_name(&self) -> String {
        registry_key(self.chain_family, self.network)
    }
}

/// An anchor together with the explorer endpoint that can look it up.
#[derive(Debug, Clone)]
pub struct ResolvedAnchor {
    pub reference: AnchorReference,
    pub endpoint: ExplorerEndpoint,
}

impl ResolvedAnchor {
    pub fn network_name(&self) -> &str {
        &self.endpoint.id
    }

    pub fn transaction_id(&self) -> &str {
        &self.reference.transaction_id
    }
}

/// Resolves anchor descriptors against an explorer registry.
#[derive(Debug, Clone)]
pub struct AnchorResolver {
    registry: Arc<ExplorerRegistry>,
}

impl AnchorResolver {
    pub fn new(registry: Arc<ExplorerRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &ExplorerRegistry {
        &self.registry
    }

    /// Parse an anchor descriptor without consulting the registry.
    ///
    /// # Errors
    ///
    /// - `MalformedAnchor` unless there are exactly four segments with
    ///   non-empty family, network and transaction id.
    /// - `UnknownNetwork` if the family or network token is not recognized.
    pub fn parse(anchor: &str) -> Result<AnchorReference, ResolveError> {
        let segments: Vec<&str> = anchor.split(':').collect();
        if segments.len() != SEGMENTS {
            return Err(ResolveError::MalformedAnchor {
                anchor: anchor.to_string(),
                reason: format!("expected {SEGMENTS} segments, got {}", segments.len()),
            });
        }
        let (family, network, transaction_id) = (segments[1], segments[2], segments[3]);
        if family.is_empty() || network.is_empty() || transaction_id.is_empty() {
            return Err(ResolveError::MalformedAnchor {
                anchor: anchor.to_string(),
                reason: "chain family, network and transaction id must be non-empty".to_string(),
            });
        }

        let chain_family =
            ChainFamily::from_token(family).ok_or_else(|| ResolveError::UnknownNetwork {
                anchor: anchor.to_string(),
                reason: format!("unknown chain family {family:?}"),
            })?;
        let network = Network::from_token(network).ok_or_else(|| ResolveError::UnknownNetwork {
            anchor: anchor.to_string(),
            reason: format!("unknown network {network:?}"),
        })?;

        Ok(AnchorReference {
            chain_family,
            network,
            transaction_id: transaction_id.to_string(),
        })
    }

    /// Resolve an anchor descriptor to its registered explorer endpoint.
    ///
    /// # Errors
    ///
    /// Everything [`AnchorResolver::parse`] returns, plus `UnknownNetwork`
    /// when no endpoint is registered for the pair and
    /// `MisconfiguredEndpoint` when it has an empty URL or API key.
    pub fn resolve(&self, anchor: &str) -> Result<ResolvedAnchor, ResolveError> {
        let reference = Self::parse(anchor)?;
        let key = reference.network_name();
        let endpoint = self
            .registry
            .get(&key)
            .ok_or_else(|| ResolveError::UnknownNetwork {
                anchor: anchor.to_string(),
                reason: format!("no explorer registered for {key}"),
            })?;

        if endpoint.url.trim().is_empty() {
            return Err(ResolveError::MisconfiguredEndpoint {
                id: key,
                reason: "empty url".to_string(),
            });
        }
        if endpoint.api_key.trim().is_empty() {
            return Err(ResolveError::MisconfiguredEndpoint {
                id: key,
                reason: "empty API key".to_string(),
            });
        }

        tracing::debug!(network = %key, tx = %reference.transaction_id, "anchor resolved");
        Ok(ResolvedAnchor {
            reference,
            endpoint: endpoint.clone(),
        })
    }
}
