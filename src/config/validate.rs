//! Structural validation for pipeline specifications
//!
//! Catches configs that would only fail hours into a training run:
//! degenerate adapter shapes, out-of-range schedules, and prompt
//! templates that training and evaluation would interpret differently.

use crate::error::{Error, Result};

use super::schema::PipelineSpec;

fn fail(message: impl Into<String>) -> Error {
    Error::Config(message.into())
}

/// Validate a pipeline specification.
///
/// # Errors
/// Returns a `Config` error naming the first offending field.
pub fn validate_config(spec: &PipelineSpec) -> Result<()> {
    if spec.model.model_name.trim().is_empty() {
        return Err(fail("model.model_name must not be empty"));
    }
    if spec.model.lora.rank == 0 {
        return Err(fail("model.lora.rank must be positive"));
    }
    if spec.model.lora.alpha <= 0.0 {
        return Err(fail("model.lora.alpha must be positive"));
    }
    if !(0.0..1.0).contains(&spec.model.lora.dropout) {
        return Err(fail("model.lora.dropout must be in [0, 1)"));
    }
    if spec.model.lora.target_modules.is_empty() {
        return Err(fail("model.lora.target_modules must not be empty"));
    }

    if spec.training.epochs == 0 {
        return Err(fail("training.epochs must be positive"));
    }
    if spec.training.train_batch_size == 0 || spec.training.eval_batch_size == 0 {
        return Err(fail("training batch sizes must be positive"));
    }
    if spec.training.gradient_accumulation_steps == 0 {
        return Err(fail("training.gradient_accumulation_steps must be positive"));
    }
    if spec.training.learning_rate <= 0.0 {
        return Err(fail("training.learning_rate must be positive"));
    }
    if !(0.0..=1.0).contains(&spec.training.warmup_ratio) {
        return Err(fail("training.warmup_ratio must be in [0, 1]"));
    }
    if spec.training.max_seq_len == 0 {
        return Err(fail("training.max_seq_len must be positive"));
    }

    let template = &spec.data.prompt.template;
    if !template.contains("{text}") || !template.contains("{ir}") {
        return Err(fail(
            "data.prompt.template must contain {text} and {ir} placeholders",
        ));
    }
    let prompt_part = template.replace("{ir}", "");
    if !prompt_part.ends_with(&spec.data.prompt.response_marker) {
        return Err(fail(
            "data.prompt.response_marker must terminate the prompt part of the template",
        ));
    }

    Ok(())
}
