//! Eval command implementation
//!
//! Offline scoring: the model ran elsewhere and left a generation dump;
//! this command replays it against the ground-truth dataset.

use std::process::ExitCode;

use crate::cli::logging::{log, LogLevel};
use crate::data::load_jsonl;
use crate::error::Result;
use crate::eval::{render_report, Evaluator, PregeneratedCompletions};

/// Run `tallar eval`.
pub fn run_eval(args: &crate::cli::args::EvalArgs, log_level: LogLevel) -> Result<ExitCode> {
    let samples = load_jsonl(&args.dataset)?;
    let generations = PregeneratedCompletions::load_jsonl(&args.generations)?;

    log(
        log_level,
        LogLevel::Verbose,
        &format!(
            "Loaded {} samples, {} generations",
            samples.len(),
            generations.len()
        ),
    );

    let mut evaluator = Evaluator::new(&generations);
    if let Some(n) = args.max_samples {
        evaluator = evaluator.with_max_samples(n);
    }

    let (records, metrics) = evaluator.evaluate(&samples)?;

    if log_level == LogLevel::Verbose {
        for (index, record) in records.iter().enumerate() {
            let status = if record.syntax_valid { "ok" } else { "invalid" };
            let detail = record.error_message.as_deref().unwrap_or("");
            log(
                log_level,
                LogLevel::Verbose,
                &format!("  [{index}] {status} {detail}"),
            );
        }
    }

    log(log_level, LogLevel::Normal, &render_report(&metrics));

    Ok(ExitCode::SUCCESS)
}
