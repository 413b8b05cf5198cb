//! # credchain-cli — Command-Line Credential Verifier
//!
//! Provides the `credchain` command-line interface.
//!
//! ## Subcommands
//!
//! - `credchain verify` — Full verification (structure, issuer, checksum,
//!   revocation and expiry).
//! - `credchain checksum` — Checksum engine only.
//! - `credchain resolve` — Resolve an anchor descriptor to its explorer.
//! - `credchain hash` — SHA-256 of a credential's issuance bytes.
//!
//! ## Exit Codes
//!
//! | Code | Meaning |
//! |------|---------|
//! | 0 | Verified (or command succeeded) |
//! | 1 | Error: unreadable input, bad configuration |
//! | 2 | Verification ran and failed |
//!
//! ```bash
//! credchain verify credential.json --registry explorers.yaml
//! credchain checksum credential.json --json
//! credchain resolve blink:eth:sepolia:0x5f3a...
//! ```

pub mod checksum;
pub mod hash;
pub mod output;
pub mod resolve;
pub mod verify;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::Args;
use credchain_client::{ClientConfig, CredchainClient, ExplorerRegistry};
use credchain_crypto::PathMode;
use credchain_verify::{AnchorCheck, EngineOptions};
use serde_json::Value;

pub const EXIT_VERIFIED: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_FAILED: u8 = 2;

/// Explorer registry selection, shared by every networked subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct RegistryArgs {
    /// YAML explorer registry. Defaults to the built-in public explorers.
    #[arg(long)]
    pub registry: Option<PathBuf>,
}

impl RegistryArgs {
    pub fn load(&self) -> Result<Arc<ExplorerRegistry>> {
        let registry = match &self.registry {
            Some(path) => ExplorerRegistry::from_yaml_file(path)
                .with_context(|| format!("failed to load registry {}", path.display()))?,
            None => ExplorerRegistry::builtin(),
        };
        tracing::debug!(explorers = registry.len(), "explorer registry loaded");
        Ok(Arc::new(registry))
    }
}

/// HTTP client and engine settings.
#[derive(Args, Debug, Clone, Default)]
pub struct EngineArgs {
    #[command(flatten)]
    pub registry: RegistryArgs,

    /// Proof normalization service base URL (overrides CREDCHAIN_NORMALIZATION_URL).
    #[arg(long)]
    pub normalization_url: Option<String>,

    /// Per-request timeout in seconds (overrides CREDCHAIN_TIMEOUT_SECS).
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Skip Merkle path elements that carry neither `left` nor `right`.
    #[arg(long)]
    pub compat_path: bool,

    /// Require the anchoring transaction to carry the Merkle root.
    #[arg(long)]
    pub require_anchor_match: bool,
}

impl EngineArgs {
    pub fn client(&self) -> Result<CredchainClient> {
        let mut config = ClientConfig::from_env().context("invalid client environment")?;
        if let Some(url) = &self.normalization_url {
            config = config
                .with_normalization_url(url)
                .context("invalid --normalization-url")?;
        }
        if let Some(secs) = self.timeout_secs {
            if secs == 0 {
                bail!("--timeout-secs must be greater than zero");
            }
            config = config.with_timeout_secs(secs);
        }
        CredchainClient::new(config).context("failed to build HTTP client")
    }

    pub fn options(&self) -> EngineOptions {
        EngineOptions {
            path_mode: if self.compat_path {
                PathMode::Compatible
            } else {
                PathMode::Strict
            },
            anchor_check: if self.require_anchor_match {
                AnchorCheck::MatchMerkleRoot
            } else {
                AnchorCheck::Presence
            },
        }
    }
}

/// Read a credential document from a JSON file.
pub fn load_credential(path: &Path) -> Result<Value> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let value: Value = serde_json::from_str(&text)
        .with_context(|| format!("{} is not valid JSON", path.display()))?;
    if !value.is_object() {
        bail!("{} does not contain a JSON object", path.display());
    }
    Ok(value)
}

/// Map a verification status to the process exit code.
pub fn exit_code(status: bool) -> u8 {
    if status {
        EXIT_VERIFIED
    } else {
        EXIT_FAILED
    }
}
