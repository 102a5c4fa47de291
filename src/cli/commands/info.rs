//! Info command implementation

use std::process::ExitCode;

use crate::cli::logging::{log, LogLevel};
use crate::config::{load_config, validate_config, PipelineSpec};
use crate::error::Result;

/// Format model and adapter information as a string.
#[must_use]
pub fn format_model_info(spec: &PipelineSpec) -> String {
    let mut lines = vec![
        format!("  Base model: {}", spec.model.model_name),
        format!(
            "  LoRA: rank={}, alpha={}",
            spec.model.lora.rank, spec.model.lora.alpha
        ),
    ];
    if spec.model.lora.dropout > 0.0 {
        lines.push(format!("    Dropout: {}", spec.model.lora.dropout));
    }
    if spec.model.quant.use_4bit {
        lines.push(format!(
            "  Quantization: 4-bit {} ({})",
            spec.model.quant.quant_type, spec.model.quant.compute_dtype
        ));
    }
    lines.join("\n")
}

/// Format training hyperparameters as a string.
#[must_use]
pub fn format_training_info(spec: &PipelineSpec) -> String {
    [
        format!("  Run name: {}", spec.training.run_name),
        format!("  Epochs: {}", spec.training.epochs),
        format!(
            "  Effective batch size: {}",
            spec.training.train_batch_size * spec.training.gradient_accumulation_steps
        ),
        format!("  Learning rate: {}", spec.training.learning_rate),
        format!("  Max sequence length: {}", spec.training.max_seq_len),
        format!("  Output dir: {}", spec.training.output_dir.display()),
    ]
    .join("\n")
}

/// Format data configuration as a string.
#[must_use]
pub fn format_data_info(spec: &PipelineSpec) -> String {
    let mut lines = vec![
        format!("  Training data: {}", spec.data.train_path.display()),
        format!("  Validation data: {}", spec.data.val_path.display()),
        format!("  Test data: {}", spec.data.test_path.display()),
    ];
    if let Some(n) = spec.data.max_samples {
        lines.push(format!("  Max samples: {n}"));
    }
    lines.join("\n")
}

/// Run `tallar info`.
pub fn run_info(args: &crate::cli::args::InfoArgs, log_level: LogLevel) -> Result<ExitCode> {
    let spec = load_config(&args.path)?;
    validate_config(&spec)?;

    log(log_level, LogLevel::Normal, "✓ Config loaded and validated");
    log(log_level, LogLevel::Normal, "");
    log(log_level, LogLevel::Normal, &format_model_info(&spec));
    log(log_level, LogLevel::Normal, "");
    log(log_level, LogLevel::Normal, &format_training_info(&spec));
    log(log_level, LogLevel::Normal, "");
    log(log_level, LogLevel::Normal, &format_data_info(&spec));

    Ok(ExitCode::SUCCESS)
}
