//! Design corpus loading and prompt formatting
//!
//! Training data is JSONL: one `{"text": "...", "ir": "..."}` object per
//! line, optionally tagged with a shape family and a complexity level.
//! The same prompt template drives both training-example formatting and
//! evaluation-time prompting, so the two can never drift apart.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A single design-description → Compact-IR training pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DesignSample {
    /// Natural-language design description
    pub text: String,
    /// Ground-truth Compact IR program
    pub ir: String,
    /// Shape family tag (e.g. "bracket", "enclosure")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
    /// Construction complexity level
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub complexity: Option<u32>,
}

/// Load design samples from a JSONL file. Blank lines are skipped.
///
/// # Errors
/// Returns an error if the file cannot be read or a row fails to parse;
/// parse errors carry the 1-based line number.
pub fn load_jsonl(path: &Path) -> Result<Vec<DesignSample>> {
    let content =
        std::fs::read_to_string(path).map_err(|e| Error::Io(format!("{}: {e}", path.display())))?;

    let mut samples = Vec::new();
    for (line_num, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let sample: DesignSample = serde_json::from_str(line).map_err(|e| Error::Parse {
            line: line_num + 1,
            message: e.to_string(),
        })?;
        samples.push(sample);
    }
    Ok(samples)
}

/// Train/validation/test splits of the design corpus.
#[derive(Debug, Clone, Default)]
pub struct DesignCorpus {
    /// Training samples
    pub train: Vec<DesignSample>,
    /// Validation samples
    pub val: Vec<DesignSample>,
    /// Held-out test samples
    pub test: Vec<DesignSample>,
}

impl DesignCorpus {
    /// Load all three splits from JSONL files.
    ///
    /// `max_samples` caps the training split for debugging runs; the
    /// validation split is capped at a tenth of it.
    ///
    /// # Errors
    /// Returns the first load failure.
    pub fn load(
        train_path: &Path,
        val_path: &Path,
        test_path: &Path,
        max_samples: Option<usize>,
    ) -> Result<Self> {
        let mut train = load_jsonl(train_path)?;
        let mut val = load_jsonl(val_path)?;
        let test = load_jsonl(test_path)?;

        if let Some(n) = max_samples {
            train.truncate(n);
            val.truncate(n / 10);
        }

        Ok(Self { train, val, test })
    }

    /// Total number of samples across all splits.
    #[must_use]
    pub fn len(&self) -> usize {
        self.train.len() + self.val.len() + self.test.len()
    }

    /// Whether every split is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.train.is_empty() && self.val.is_empty() && self.test.is_empty()
    }
}

/// Prompt construction for completion-style training and evaluation.
///
/// The training template interpolates `{text}` and `{ir}`; the response
/// marker is the substring after which loss is unmasked during training
/// and after which the IR is extracted during evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptTemplate {
    /// Full training template with `{text}` and `{ir}` placeholders
    pub template: String,
    /// Marker that precedes the completion
    pub response_marker: String,
}

impl Default for PromptTemplate {
    fn default() -> Self {
        Self {
            template: "Design: {text}\n\nCompact IR:\n{ir}".to_string(),
            response_marker: "\n\nCompact IR:\n".to_string(),
        }
    }
}

impl PromptTemplate {
    /// Format a full training example (prompt and target IR).
    #[must_use]
    pub fn format_training(&self, sample: &DesignSample) -> String {
        self.template
            .replace("{text}", &sample.text)
            .replace("{ir}", &sample.ir)
    }

    /// Format the generation prompt for a design description: the
    /// training template with the `{ir}` slot left empty.
    #[must_use]
    pub fn format_prompt(&self, text: &str) -> String {
        self.template.replace("{ir}", "").replace("{text}", text)
    }
}

/// Length summary over a corpus field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LengthStats {
    /// Shortest value, in characters
    pub min: usize,
    /// Longest value, in characters
    pub max: usize,
    /// Mean length, in characters
    pub mean: f64,
}

fn length_stats(lengths: &[usize]) -> Option<LengthStats> {
    let (first, rest) = lengths.split_first()?;
    let (mut min, mut max, mut sum) = (*first, *first, *first);
    for &len in rest {
        min = min.min(len);
        max = max.max(len);
        sum += len;
    }
    Some(LengthStats {
        min,
        max,
        mean: sum as f64 / lengths.len() as f64,
    })
}

/// Statistics over a single corpus split.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CorpusStats {
    /// Number of samples
    pub total_examples: usize,
    /// Sample count per shape family; untagged samples count as "unknown"
    pub families: BTreeMap<String, usize>,
    /// Sample count per complexity level; untagged samples count as 0
    pub complexity: BTreeMap<u32, usize>,
    /// Description length summary, absent for an empty split
    pub text_length: Option<LengthStats>,
    /// IR length summary, absent for an empty split
    pub ir_length: Option<LengthStats>,
}

/// Compute statistics over a corpus split.
#[must_use]
pub fn analyze(samples: &[DesignSample]) -> CorpusStats {
    let mut families: BTreeMap<String, usize> = BTreeMap::new();
    let mut complexity: BTreeMap<u32, usize> = BTreeMap::new();
    let mut text_lengths = Vec::with_capacity(samples.len());
    let mut ir_lengths = Vec::with_capacity(samples.len());

    for sample in samples {
        let family = sample.family.as_deref().unwrap_or("unknown");
        *families.entry(family.to_string()).or_insert(0) += 1;
        *complexity.entry(sample.complexity.unwrap_or(0)).or_insert(0) += 1;
        text_lengths.push(sample.text.len());
        ir_lengths.push(sample.ir.len());
    }

    CorpusStats {
        total_examples: samples.len(),
        families,
        complexity,
        text_length: length_stats(&text_lengths),
        ir_length: length_stats(&ir_lengths),
    }
}
