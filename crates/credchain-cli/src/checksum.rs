//! # Checksum CLI — Run only the checksum verification engine.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use credchain_core::VerificationOutcome;
use credchain_verify::ChecksumVerificationEngine;

use crate::output::{print_report, render_result, ConsoleSink};
use crate::{exit_code, load_credential, EngineArgs};

/// Arguments for `credchain checksum`.
#[derive(Args, Debug)]
pub struct ChecksumArgs {
    /// Credential JSON file.
    pub file: PathBuf,

    /// Print a JSON report instead of one line per stage.
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub engine: EngineArgs,
}

/// Execute `credchain checksum`.
pub async fn run_checksum(args: &ChecksumArgs) -> Result<u8> {
    let credential = load_credential(&args.file)?;
    let client = args.engine.client()?;
    let engine = ChecksumVerificationEngine::new(&client, args.engine.registry.load()?, args.engine.options());

    let result = if args.json {
        let mut outcomes: Vec<VerificationOutcome> = Vec::new();
        let result = engine.validate(&credential, &mut outcomes).await;
        print_report(&result, &outcomes)?;
        result
    } else {
        let mut sink = ConsoleSink::new(std::io::stdout());
        let result = engine.validate(&credential, &mut sink).await;
        println!("{}", render_result(&result));
        result
    };

    Ok(exit_code(result.status))
}
