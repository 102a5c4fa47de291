//! Per-example and aggregate evaluation metrics
//!
//! Three axes per example: syntax validity (from the IR validator),
//! geometry validity (an external capability, possibly absent), and exact
//! textual match against the ground truth.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Evaluation outcome for a single design example.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EvalRecord {
    /// Whether the generated IR passed syntax and reference validation
    pub syntax_valid: bool,
    /// Whether the IR produced a valid manifold; `None` when no geometry
    /// checker was available
    #[serde(default)]
    pub geometry_valid: Option<bool>,
    /// Whether the generated IR matched the ground truth exactly
    #[serde(default)]
    pub exact_match: bool,
    /// The IR extracted from the model completion
    #[serde(default)]
    pub generated_ir: String,
    /// Diagnostic for the first validation failure, if any
    #[serde(default)]
    pub error_message: Option<String>,
}

/// Aggregate metrics over an evaluation run.
///
/// Immutable once built; accuracies use the `0/0 = 0` convention so an
/// empty run reports zeros rather than NaN.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AggregateMetrics {
    /// Number of evaluated examples
    pub total: usize,
    /// Examples with valid syntax and references
    pub syntax_valid: usize,
    /// Examples whose geometry check returned true
    pub geometry_valid: usize,
    /// Examples matching the ground truth exactly
    pub exact_match: usize,
    /// `syntax_valid / total`
    pub syntax_accuracy: f64,
    /// `geometry_valid / total`
    pub geometry_accuracy: f64,
    /// `exact_match / total`
    pub exact_match_accuracy: f64,
    /// Error histogram keyed by the message text before the first `:`
    pub errors: BTreeMap<String, usize>,
}

/// Whitespace-edge-insensitive string equality.
///
/// Each side is trimmed independently; interior whitespace is compared
/// exactly, so structurally equivalent but differently formatted IR
/// scores as a mismatch.
#[must_use]
pub fn exact_match(target: &str, generated: &str) -> bool {
    target.trim() == generated.trim()
}

/// Histogram key for an error message: the text before the first `:`,
/// or the whole message when it has none.
#[must_use]
pub fn error_bucket(message: &str) -> &str {
    match message.find(':') {
        Some(i) => &message[..i],
        None => message,
    }
}

fn ratio(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64
    }
}

/// Fold per-example records into aggregate metrics.
#[must_use]
pub fn aggregate(records: &[EvalRecord]) -> AggregateMetrics {
    let total = records.len();
    let syntax_valid = records.iter().filter(|r| r.syntax_valid).count();
    let geometry_valid = records
        .iter()
        .filter(|r| r.geometry_valid == Some(true))
        .count();
    let exact = records.iter().filter(|r| r.exact_match).count();

    let mut errors: BTreeMap<String, usize> = BTreeMap::new();
    for record in records {
        if let Some(message) = &record.error_message {
            *errors.entry(error_bucket(message).to_string()).or_insert(0) += 1;
        }
    }

    AggregateMetrics {
        total,
        syntax_valid,
        geometry_valid,
        exact_match: exact,
        syntax_accuracy: ratio(syntax_valid, total),
        geometry_accuracy: ratio(geometry_valid, total),
        exact_match_accuracy: ratio(exact, total),
        errors,
    }
}
