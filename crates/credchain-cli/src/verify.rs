//! # Verify CLI — Full credential verification.
//!
//! ```bash
//! credchain verify credential.json
//! credchain verify credential.json --offchain --json
//! ```

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use credchain_core::VerificationOutcome;
use credchain_verify::{CredentialVerifier, VerificationMode};

use crate::output::{print_report, render_result, ConsoleSink};
use crate::{exit_code, load_credential, EngineArgs};

/// Arguments for `credchain verify`.
#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// Credential JSON file.
    pub file: PathBuf,

    /// Run the checksum first and skip the structure checks.
    #[arg(long)]
    pub offchain: bool,

    /// Print a JSON report instead of one line per stage.
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub engine: EngineArgs,
}

impl VerifyArgs {
    pub fn mode(&self) -> VerificationMode {
        if self.offchain {
            VerificationMode::OffChain
        } else {
            VerificationMode::OnChain
        }
    }
}

/// Execute `credchain verify`.
pub async fn run_verify(args: &VerifyArgs) -> Result<u8> {
    let credential = load_credential(&args.file)?;
    let client = args.engine.client()?;
    let verifier = CredentialVerifier::new(&client, args.engine.registry.load()?, args.engine.options());

    let result = if args.json {
        let mut outcomes: Vec<VerificationOutcome> = Vec::new();
        let result = verifier.verify(&credential, args.mode(), &mut outcomes).await;
        print_report(&result, &outcomes)?;
        result
    } else {
        let mut sink = ConsoleSink::new(std::io::stdout());
        let result = verifier.verify(&credential, args.mode(), &mut sink).await;
        println!("{}", render_result(&result));
        result
    };

    Ok(exit_code(result.status))
}
