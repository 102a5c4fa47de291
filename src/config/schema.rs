//! YAML schema for the fine-tuning pipeline specification
//!
//! Declarative data only: the external trainer consumes these values, so
//! every field is plain serde with documented defaults. Missing blocks
//! and fields fall back to the defaults of a known-good run.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::data::PromptTemplate;

/// Complete pipeline specification.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineSpec {
    /// Base model and adapter configuration
    pub model: ModelSpec,
    /// Training-loop hyperparameters
    pub training: TrainingSpec,
    /// Data paths and prompt templates
    pub data: DataSpec,
}

/// Base model, LoRA adapter, and quantization configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelSpec {
    /// Hub identifier of the base model
    pub model_name: String,
    /// LoRA adapter configuration
    pub lora: LoraSpec,
    /// Load-time quantization configuration
    pub quant: QuantSpec,
    /// Whether to enable flash attention
    pub use_flash_attention: bool,
}

impl Default for ModelSpec {
    fn default() -> Self {
        Self {
            model_name: "Qwen/Qwen2.5-Coder-7B".to_string(),
            lora: LoraSpec::default(),
            quant: QuantSpec::default(),
            use_flash_attention: true,
        }
    }
}

/// LoRA adapter configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoraSpec {
    /// Adapter rank
    pub rank: u32,
    /// Scaling factor, conventionally twice the rank
    pub alpha: f64,
    /// Adapter dropout probability
    pub dropout: f64,
    /// Projection layers the adapters attach to
    pub target_modules: Vec<String>,
}

impl Default for LoraSpec {
    fn default() -> Self {
        Self {
            rank: 64,
            alpha: 128.0,
            dropout: 0.05,
            target_modules: [
                "q_proj",
                "k_proj",
                "v_proj",
                "o_proj",
                "gate_proj",
                "up_proj",
                "down_proj",
            ]
            .map(String::from)
            .to_vec(),
        }
    }
}

/// Load-time quantization configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct QuantSpec {
    /// Load the base model in 4-bit
    pub use_4bit: bool,
    /// Compute dtype for dequantized activations
    pub compute_dtype: String,
    /// Quantization scheme
    pub quant_type: String,
    /// Whether to nest-quantize the quantization constants
    pub nested: bool,
}

impl Default for QuantSpec {
    fn default() -> Self {
        Self {
            use_4bit: true,
            compute_dtype: "bfloat16".to_string(),
            quant_type: "nf4".to_string(),
            nested: false,
        }
    }
}

/// Training-loop hyperparameters, handed verbatim to the external trainer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainingSpec {
    /// Checkpoint output directory
    pub output_dir: PathBuf,
    /// Run name for experiment tracking
    pub run_name: String,
    /// Number of training epochs
    pub epochs: u32,
    /// Per-device train batch size
    pub train_batch_size: u32,
    /// Per-device eval batch size
    pub eval_batch_size: u32,
    /// Gradient accumulation steps
    pub gradient_accumulation_steps: u32,
    /// Peak learning rate
    pub learning_rate: f64,
    /// Weight decay
    pub weight_decay: f64,
    /// Warmup fraction of total steps
    pub warmup_ratio: f64,
    /// Learning-rate schedule name
    pub lr_scheduler: String,
    /// Gradient clipping norm
    pub max_grad_norm: f64,
    /// Maximum sequence length (prompt + IR)
    pub max_seq_len: u32,
    /// Steps between log lines
    pub logging_steps: u32,
    /// Steps between evaluations
    pub eval_steps: u32,
    /// Steps between checkpoints
    pub save_steps: u32,
    /// Checkpoints kept on disk
    pub save_total_limit: u32,
    /// RNG seed
    pub seed: u64,
}

impl Default for TrainingSpec {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("/data/checkpoints"),
            run_name: "tallar-qwen-7b-lora".to_string(),
            epochs: 3,
            train_batch_size: 4,
            eval_batch_size: 4,
            gradient_accumulation_steps: 8,
            learning_rate: 2e-4,
            weight_decay: 0.01,
            warmup_ratio: 0.03,
            lr_scheduler: "cosine".to_string(),
            max_grad_norm: 0.3,
            max_seq_len: 1024,
            logging_steps: 10,
            eval_steps: 2000,
            save_steps: 500,
            save_total_limit: 3,
            seed: 42,
        }
    }
}

/// Data paths and prompt templates.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DataSpec {
    /// Training split path
    pub train_path: PathBuf,
    /// Validation split path
    pub val_path: PathBuf,
    /// Held-out test split path
    pub test_path: PathBuf,
    /// Prompt construction shared by training and evaluation
    pub prompt: PromptTemplate,
    /// Optional sample cap for debugging runs
    pub max_samples: Option<usize>,
}

impl Default for DataSpec {
    fn default() -> Self {
        Self {
            train_path: PathBuf::from("/data/train.jsonl"),
            val_path: PathBuf::from("/data/val.jsonl"),
            test_path: PathBuf::from("/data/test.jsonl"),
            prompt: PromptTemplate::default(),
            max_samples: None,
        }
    }
}
