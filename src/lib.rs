//! Tallar — evaluation core for text-to-CAD fine-tuning
//!
//! A fine-tuned code model translates natural-language design descriptions
//! into Compact IR: a line-oriented program text describing 3D CAD
//! constructions (primitives, transforms, booleans). This crate owns the
//! parts of that pipeline with real algorithmic content — the IR validator,
//! the scoring and report layer, the design corpus loader, and the
//! declarative configuration handed to the external trainer. Model
//! inference, LoRA training, and geometry evaluation are external
//! collaborators reached through trait seams.
//!
//! # Architecture
//!
//! - [`ir`]: instruction grammar, line parsing, syntax + reference validation
//! - [`eval`]: per-example metrics, aggregate scoring, offline evaluator
//! - [`data`]: JSONL design corpus, prompt templates, dataset statistics
//! - [`config`]: YAML pipeline specification (model, LoRA, quant, training)
//! - [`cli`]: command-line interface
//!
//! # Example
//!
//! ```
//! use tallar::ir::is_ir_valid;
//!
//! // A cube and a sphere joined by a union of nodes 0 and 1.
//! let verdict = is_ir_valid("C 1.0 1.0 1.0\nS 0.5\nU 0 1");
//! assert!(verdict.is_valid);
//!
//! // Node 1 does not exist yet when the union executes.
//! let verdict = is_ir_valid("C 1.0 1.0 1.0\nU 0 1");
//! assert!(!verdict.is_valid);
//! ```

pub mod cli;
pub mod config;
pub mod data;
pub mod error;
pub mod eval;
pub mod ir;

pub use error::{Error, Result};
