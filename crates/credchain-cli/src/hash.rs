//! # Hash CLI — Print the target hash a credential should carry.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use credchain_core::issuance_digest;
use credchain_vc::Credential;

use crate::load_credential;

/// Arguments for `credchain hash`.
#[derive(Args, Debug)]
pub struct HashArgs {
    /// Credential JSON file.
    pub file: PathBuf,

    /// Also print the issuance bytes that were hashed.
    #[arg(long)]
    pub show_bytes: bool,
}

/// Execute `credchain hash`.
pub fn run_hash(args: &HashArgs) -> Result<u8> {
    let digest = issuance_hash(&load_credential(&args.file)?, args.show_bytes)?;
    println!("{digest}");
    Ok(0)
}

fn issuance_hash(document: &serde_json::Value, show_bytes: bool) -> Result<String> {
    let credential = Credential::from_value(document).context("not a credential document")?;
    let bytes = credential
        .issuance_bytes()
        .context("failed to build issuance bytes")?;
    if show_bytes {
        eprintln!("{}", String::from_utf8_lossy(bytes.as_bytes()));
    }
    Ok(issuance_digest(&bytes))
}
