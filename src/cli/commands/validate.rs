//! Validate command implementation

use std::io::Read as _;
use std::path::Path;
use std::process::ExitCode;

use crate::cli::logging::{log, LogLevel};
use crate::error::{Error, Result};
use crate::ir::{is_ir_valid, logical_lines, Verdict};

fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| Error::Io(format!("stdin: {e}")))?;
        Ok(buf)
    } else {
        std::fs::read_to_string(path).map_err(|e| Error::Io(format!("{}: {e}", path.display())))
    }
}

/// Format a verdict for terminal output.
#[must_use]
pub fn format_verdict(ir: &str, verdict: &Verdict) -> String {
    if verdict.is_valid {
        let instructions = logical_lines(ir).len();
        format!("✓ Valid Compact IR ({instructions} instructions)")
    } else {
        match verdict.message() {
            Some(message) => format!("✗ {message}"),
            None => "✗ Invalid Compact IR".to_string(),
        }
    }
}

/// Run `tallar validate`.
pub fn run_validate(
    args: &crate::cli::args::ValidateArgs,
    log_level: LogLevel,
) -> Result<ExitCode> {
    let ir = read_input(&args.path)?;
    let verdict = is_ir_valid(&ir);

    log(log_level, LogLevel::Normal, &format_verdict(&ir, &verdict));

    if verdict.is_valid {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
