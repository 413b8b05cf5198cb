//! # Explorer Registry
//!
//! The immutable table of blockchain explorer endpoints, keyed by the
//! composite of canonical chain family and network names
//! (`ethereumMainnet`, `polygonAmoy`, ...). It is built once and injected
//! into [`AnchorResolver`](crate::anchor::AnchorResolver); nothing reads it
//! from ambient global state.
//!
//! ## Sources
//!
//! - [`ExplorerRegistry::builtin`]: public Etherscan/Polygonscan endpoints,
//!   API keys from `CREDCHAIN_ETHERSCAN_API_KEY` and
//!   `CREDCHAIN_POLYGONSCAN_API_KEY`.
//! - [`ExplorerRegistry::from_yaml_str`] / [`ExplorerRegistry::from_yaml_file`].
//! - [`ExplorerRegistry::new`] for explicit construction in tests.
//!
//! ## YAML format
//!
//! ```yaml
//! explorers:
//!   - id: ethereumMainnet
//!     url: https://api.etherscan.io/
//!     api_key_env: CREDCHAIN_ETHERSCAN_API_KEY
//!   - id: polygonAmoy
//!     url: https://api-amoy.polygonscan.com/
//!     api_key: literal-key
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use zeroize::Zeroizing;

use crate::config::ConfigError;

pub const ETHERSCAN_KEY_ENV: &str = "CREDCHAIN_ETHERSCAN_API_KEY";
pub const POLYGONSCAN_KEY_ENV: &str = "CREDCHAIN_POLYGONSCAN_API_KEY";

/// Chain families an anchor can name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChainFamily {
    Ethereum,
    Polygon,
}

impl ChainFamily {
    /// Map an anchor token (`eth`, `poly`) to a chain family.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "eth" => Some(Self::Ethereum),
            "poly" => Some(Self::Polygon),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ethereum => "ethereum",
            Self::Polygon => "polygon",
        }
    }
}

impl std::fmt::Display for ChainFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Networks an anchor can name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Network {
    Mainnet,
    Sepolia,
    Testnet,
    Amoy,
}

impl Network {
    /// Map an anchor token (`mainnet`, `sepolia`, `testnet`, `amoy`).
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "mainnet" => Some(Self::Mainnet),
            "sepolia" => Some(Self::Sepolia),
            "testnet" => Some(Self::Testnet),
            "amoy" => Some(Self::Amoy),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mainnet => "Mainnet",
            Self::Sepolia => "Sepolia",
            Self::Testnet => "Testnet",
            Self::Amoy => "Amoy",
        }
    }
}

impl std::fmt::Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Registry key for a family/network pair, e.g. `ethereumMainnet`.
pub fn registry_key(family: ChainFamily, network: Network) -> String {
    format!("{}{}", family.as_str(), network.as_str())
}

/// A blockchain explorer API endpoint.
///
/// Custom `Debug` implementation redacts the `api_key` field.
#[derive(Clone, PartialEq, Eq)]
pub struct ExplorerEndpoint {
    pub id: String,
    /// Explorer API base URL. May be empty in a registry; resolution rejects it.
    pub url: String,
    pub api_key: Zeroizing<String>,
}

impl ExplorerEndpoint {
    pub fn new(id: impl Into<String>, url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            url: url.into(),
            api_key: Zeroizing::new(api_key.into()),
        }
    }
}

impl std::fmt::Debug for ExplorerEndpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let key = if self.api_key.is_empty() { "" } else { "[REDACTED]" };
        f.debug_struct("ExplorerEndpoint")
            .field("id", &self.id)
            .field("url", &self.url)
            .field("api_key", &key)
            .finish()
    }
}

/// Read-only table of explorer endpoints keyed by id.
#[derive(Debug, Clone, Default)]
pub struct ExplorerRegistry {
    endpoints: BTreeMap<String, ExplorerEndpoint>,
}

#[derive(Deserialize)]
struct RegistryFile {
    explorers: Vec<EndpointEntry>,
}

#[derive(Deserialize)]
struct EndpointEntry {
    id: String,
    #[serde(default)]
    url: String,
    #[serde(default)]
    api_key: Option<String>,
    #[serde(default)]
    api_key_env: Option<String>,
}

impl ExplorerRegistry {
    /// Build a registry from explicit endpoints.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::DuplicateExplorer` if two endpoints share an id.
    pub fn new(endpoints: Vec<ExplorerEndpoint>) -> Result<Self, ConfigError> {
        let mut map = BTreeMap::new();
        for endpoint in endpoints {
            if map.contains_key(&endpoint.id) {
                return Err(ConfigError::DuplicateExplorer(endpoint.id));
            }
            map.insert(endpoint.id.clone(), endpoint);
        }
        Ok(Self { endpoints: map })
    }

    /// The public Etherscan and Polygonscan endpoints, with API keys read
    /// from the environment. A missing key leaves the endpoint registered
    /// with an empty key.
    pub fn builtin() -> Self {
        let etherscan = env_key(ETHERSCAN_KEY_ENV);
        let polygonscan = env_key(POLYGONSCAN_KEY_ENV);
        let builtin = [
            ("ethereumMainnet", "https://api.etherscan.io/", &etherscan),
            ("ethereumSepolia", "https://api-sepolia.etherscan.io/", &etherscan),
            ("polygonMainnet", "https://api.polygonscan.com/", &polygonscan),
            ("polygonTestnet", "https://api-testnet.polygonscan.com/", &polygonscan),
            ("polygonAmoy", "https://api-amoy.polygonscan.com/", &polygonscan),
        ];
        let endpoints = builtin
            .into_iter()
            .map(|(id, url, key)| (id.to_string(), ExplorerEndpoint::new(id, url, key.as_str())))
            .collect();
        Self { endpoints }
    }

    /// Parse a registry from YAML.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let file: RegistryFile =
            serde_yaml::from_str(yaml).map_err(|e| ConfigError::RegistryParse(e.to_string()))?;
        let endpoints = file
            .explorers
            .into_iter()
            .map(|entry| {
                let key = match (entry.api_key, entry.api_key_env) {
                    (Some(key), _) => Zeroizing::new(key),
                    (None, Some(var)) => env_key(&var),
                    (None, None) => Zeroizing::new(String::new()),
                };
                ExplorerEndpoint {
                    id: entry.id,
                    url: entry.url,
                    api_key: key,
                }
            })
            .collect();
        Self::new(endpoints)
    }

    /// Read and parse a YAML registry file.
    pub fn from_yaml_file(path: &Path) -> Result<Self, ConfigError> {
        let yaml = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::RegistryRead(path.display().to_string(), e.to_string()))?;
        Self::from_yaml_str(&yaml)
    }

    pub fn get(&self, id: &str) -> Option<&ExplorerEndpoint> {
        self.endpoints.get(id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.endpoints.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.endpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }
}

fn env_key(var: &str) -> Zeroizing<String> {
    Zeroizing::new(std::env::var(var).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_registers_all_networks() {
        let registry = ExplorerRegistry::builtin();
        let ids: Vec<&str> = registry.ids().collect();
        assert_eq!(
            ids,
            vec![
                "ethereumMainnet",
                "ethereumSepolia",
                "polygonAmoy",
                "polygonMainnet",
                "polygonTestnet",
            ]
        );
        assert_eq!(
            registry.get("ethereumMainnet").map(|e| e.url.as_str()),
            Some("https://api.etherscan.io/")
        );
    }

    #[test]
    fn registry_key_concatenates_canonical_names() {
        assert_eq!(
            registry_key(ChainFamily::Ethereum, Network::Mainnet),
            "ethereumMainnet"
        );
        assert_eq!(registry_key(ChainFamily::Polygon, Network::Amoy), "polygonAmoy");
    }

    #[test]
    fn tokens_are_case_sensitive() {
        assert_eq!(ChainFamily::from_token("eth"), Some(ChainFamily::Ethereum));
        assert_eq!(ChainFamily::from_token("ETH"), None);
        assert_eq!(Network::from_token("sepolia"), Some(Network::Sepolia));
        assert_eq!(Network::from_token("goerli"), None);
    }

    #[test]
    fn debug_redacts_api_key() {
        let endpoint = ExplorerEndpoint::new("ethereumMainnet", "https://x/", "secret-key");
        let debug = format!("{endpoint:?}");
        assert!(!debug.contains("secret-key"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn yaml_literal_and_missing_keys() {
        let registry = ExplorerRegistry::from_yaml_str(
            "explorers:\n  - id: ethereumMainnet\n    url: https://a/\n    api_key: k1\n  - id: polygonAmoy\n    url: https://b/\n",
        )
        .unwrap();
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get("ethereumMainnet").unwrap().api_key.as_str(), "k1");
        assert!(registry.get("polygonAmoy").unwrap().api_key.is_empty());
    }

    #[test]
    fn yaml_key_from_env() {
        std::env::set_var("CREDCHAIN_TEST_REGISTRY_KEY_4411", "from-env");
        let registry = ExplorerRegistry::from_yaml_str(
            "explorers:\n  - id: ethereumSepolia\n    url: https://s/\n    api_key_env: CREDCHAIN_TEST_REGISTRY_KEY_4411\n",
        )
        .unwrap();
        std::env::remove_var("CREDCHAIN_TEST_REGISTRY_KEY_4411");
        assert_eq!(registry.get("ethereumSepolia").unwrap().api_key.as_str(), "from-env");
    }

    #[test]
    fn duplicate_ids_rejected() {
        let result = ExplorerRegistry::new(vec![
            ExplorerEndpoint::new("ethereumMainnet", "https://a/", "k"),
            ExplorerEndpoint::new("ethereumMainnet", "https://b/", "k"),
        ]);
        assert!(matches!(result, Err(ConfigError::DuplicateExplorer(_))));
    }

    #[test]
    fn invalid_yaml_rejected() {
        assert!(matches!(
            ExplorerRegistry::from_yaml_str("explorers: 3"),
            Err(ConfigError::RegistryParse(_))
        ));
    }
}
