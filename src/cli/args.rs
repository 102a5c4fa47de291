//! Command-line argument definitions

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Evaluation and data tooling for Compact IR fine-tuning
#[derive(Debug, Parser)]
#[command(name = "tallar", version, about)]
pub struct Cli {
    /// Suppress non-error output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level subcommands
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Validate a Compact IR file
    Validate(ValidateArgs),
    /// Score a generation dump against a dataset
    Eval(EvalArgs),
    /// Show statistics for a JSONL design corpus
    Data(DataArgs),
    /// Load and validate a pipeline config
    Info(InfoArgs),
}

/// Arguments for `tallar validate`
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// IR file to validate, or `-` for stdin
    pub path: PathBuf,
}

/// Arguments for `tallar eval`
#[derive(Debug, Args)]
pub struct EvalArgs {
    /// Dataset JSONL with ground-truth `text`/`ir` pairs
    #[arg(long)]
    pub dataset: PathBuf,

    /// Generation dump JSONL, one `{"ir": ...}` row per dataset example
    #[arg(long)]
    pub generations: PathBuf,

    /// Cap the number of evaluated examples
    #[arg(long)]
    pub max_samples: Option<usize>,
}

/// Arguments for `tallar data`
#[derive(Debug, Args)]
pub struct DataArgs {
    /// Corpus JSONL file to analyze
    pub path: PathBuf,
}

/// Arguments for `tallar info`
#[derive(Debug, Args)]
pub struct InfoArgs {
    /// Pipeline config YAML
    pub path: PathBuf,
}
