//! # credchain CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use credchain_cli::checksum::{run_checksum, ChecksumArgs};
use credchain_cli::hash::{run_hash, HashArgs};
use credchain_cli::resolve::{run_resolve, ResolveArgs};
use credchain_cli::verify::{run_verify, VerifyArgs};
use credchain_cli::EXIT_ERROR;

/// Verify blockchain-anchored and Ed25519-signed credentials.
#[derive(Parser, Debug)]
#[command(name = "credchain", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Emit logs as JSON lines on stderr.
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Fully verify a credential: structure, issuer, checksum, revocation.
    Verify(VerifyArgs),

    /// Run only the checksum verification engine.
    Checksum(ChecksumArgs),

    /// Resolve an anchor descriptor to its explorer endpoint.
    Resolve(ResolveArgs),

    /// Print the SHA-256 of a credential's issuance bytes.
    Hash(HashArgs),
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);
    if cli.log_json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "credchain starting");

    let result = match &cli.command {
        Commands::Verify(args) => run_verify(args).await,
        Commands::Checksum(args) => run_checksum(args).await,
        Commands::Resolve(args) => run_resolve(args),
        Commands::Hash(args) => run_hash(args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            eprintln!("error: {e:#}");
            ExitCode::from(EXIT_ERROR)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn cli_parse_verify_defaults() {
        let cli = Cli::try_parse_from(["credchain", "verify", "credential.json"]).unwrap();
        let Commands::Verify(args) = cli.command else {
            panic!("expected verify");
        };
        assert_eq!(args.file, PathBuf::from("credential.json"));
        assert!(!args.offchain);
        assert!(!args.json);
        assert!(args.engine.registry.registry.is_none());
        assert!(!args.engine.compat_path);
    }

    #[test]
    fn cli_parse_verify_all_flags() {
        let cli = Cli::try_parse_from([
            "credchain",
            "-vv",
            "--log-json",
            "verify",
            "credential.json",
            "--offchain",
            "--json",
            "--registry",
            "explorers.yaml",
            "--normalization-url",
            "https://normalize.example/",
            "--timeout-secs",
            "10",
            "--compat-path",
            "--require-anchor-match",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(cli.log_json);
        let Commands::Verify(args) = cli.command else {
            panic!("expected verify");
        };
        assert!(args.offchain);
        assert!(args.json);
        assert_eq!(args.engine.registry.registry, Some(PathBuf::from("explorers.yaml")));
        assert_eq!(args.engine.normalization_url.as_deref(), Some("https://normalize.example/"));
        assert_eq!(args.engine.timeout_secs, Some(10));
        assert!(args.engine.compat_path);
        assert!(args.engine.require_anchor_match);
    }

    #[test]
    fn cli_parse_resolve() {
        let cli = Cli::try_parse_from(["credchain", "resolve", "x:eth:mainnet:0xabc"]).unwrap();
        let Commands::Resolve(args) = cli.command else {
            panic!("expected resolve");
        };
        assert_eq!(args.anchor, "x:eth:mainnet:0xabc");
    }

    #[test]
    fn cli_parse_hash_and_checksum() {
        assert!(matches!(
            Cli::try_parse_from(["credchain", "hash", "c.json"]).unwrap().command,
            Commands::Hash(_)
        ));
        assert!(matches!(
            Cli::try_parse_from(["credchain", "checksum", "c.json", "--json"]).unwrap().command,
            Commands::Checksum(_)
        ));
    }

    #[test]
    fn cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["credchain"]).is_err());
    }
}
