//! Tallar CLI
//!
//! Evaluation and data tooling for the Compact IR fine-tuning pipeline.
//!
//! # Usage
//!
//! ```bash
//! # Validate an IR file (or `-` for stdin)
//! tallar validate model_output.ir
//!
//! # Score a generation dump against ground truth
//! tallar eval --dataset test.jsonl --generations gen.jsonl
//!
//! # Corpus statistics
//! tallar data train.jsonl
//!
//! # Inspect a pipeline config
//! tallar info pipeline.yaml
//! ```

use std::process::ExitCode;

use clap::Parser;
use tallar::cli::{run_command, Cli};

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run_command(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
