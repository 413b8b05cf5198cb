//! # Resolve CLI — Show which explorer an anchor descriptor resolves to.
//!
//! The API key is never printed.

use anyhow::{Context, Result};
use clap::Args;
use credchain_client::AnchorResolver;

use crate::RegistryArgs;

/// Arguments for `credchain resolve`.
#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Anchor descriptor, `<meta>:<chain>:<network>:<transactionId>`.
    pub anchor: String,

    #[command(flatten)]
    pub registry: RegistryArgs,
}

/// Execute `credchain resolve`.
pub fn run_resolve(args: &ResolveArgs) -> Result<u8> {
    let resolver = AnchorResolver::new(args.registry.load()?);
    let resolved = resolver
        .resolve(&args.anchor)
        .with_context(|| format!("cannot resolve anchor {:?}", args.anchor))?;

    println!("  network:     {}", resolved.network_name());
    println!("  explorer:    {}", resolved.endpoint.url);
    println!("  transaction: {}", resolved.transaction_id());
    Ok(0)
}
