//! Offline evaluation driver
//!
//! Replays (or requests) completions for design prompts, validates the
//! extracted IR, scores exact match, and folds the results into aggregate
//! metrics. The two capabilities this crate does not own — model
//! inference and geometry evaluation — enter through the
//! [`CompletionSource`] and [`GeometryChecker`] seams.

use std::path::Path;

use serde::Deserialize;

use crate::data::{DesignSample, PromptTemplate};
use crate::error::{Error, Result};
use crate::eval::extract::extract_ir;
use crate::eval::metrics::{aggregate, exact_match, AggregateMetrics, EvalRecord};
use crate::ir::is_ir_valid;

/// Source of model completions for design prompts.
///
/// Model inference lives outside this crate; evaluation only needs
/// prompt text in, completion text out. `index` is the example's position
/// in the evaluation set, so replay sources can stay aligned with it.
pub trait CompletionSource {
    /// Produce the raw completion for a formatted prompt.
    ///
    /// # Errors
    /// Returns an error when no completion can be produced for the
    /// example.
    fn complete(&self, index: usize, prompt: &str) -> Result<String>;
}

/// External geometry capability: does the IR produce a valid manifold?
///
/// There is no built-in implementation; callers inject one backed by a
/// real geometry kernel or evaluate without the geometry axis.
pub trait GeometryChecker {
    /// Check manifold validity of a syntactically valid IR program.
    ///
    /// # Errors
    /// Returns an error when the backing engine cannot evaluate the
    /// program.
    fn check(&self, ir: &str) -> Result<bool>;
}

#[derive(Debug, Deserialize)]
struct GeneratedRow {
    ir: String,
}

/// Completions replayed from a JSONL dump: one `{"ir": "..."}` row per
/// example, in dataset order.
#[derive(Debug, Clone, Default)]
pub struct PregeneratedCompletions {
    rows: Vec<String>,
}

impl PregeneratedCompletions {
    /// Wrap an in-memory list of completions.
    #[must_use]
    pub fn new(rows: Vec<String>) -> Self {
        Self { rows }
    }

    /// Load a generation dump from a JSONL file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or a row fails to
    /// parse.
    pub fn load_jsonl(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Io(format!("{}: {e}", path.display())))?;

        let mut rows = Vec::new();
        for (line_num, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let row: GeneratedRow = serde_json::from_str(line).map_err(|e| Error::Parse {
                line: line_num + 1,
                message: e.to_string(),
            })?;
            rows.push(row.ir);
        }
        Ok(Self { rows })
    }

    /// Number of completions in the dump.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the dump is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl CompletionSource for PregeneratedCompletions {
    fn complete(&self, index: usize, _prompt: &str) -> Result<String> {
        self.rows
            .get(index)
            .cloned()
            .ok_or_else(|| Error::Unsupported(format!("no completion for example {index}")))
    }
}

/// Evaluation driver.
///
/// Owns nothing but borrowed capability handles and the prompt template;
/// evaluation itself is a pure fold over the samples.
pub struct Evaluator<'a> {
    source: &'a dyn CompletionSource,
    geometry: Option<&'a dyn GeometryChecker>,
    template: PromptTemplate,
    max_samples: Option<usize>,
}

impl<'a> Evaluator<'a> {
    /// Create an evaluator over a completion source.
    #[must_use]
    pub fn new(source: &'a dyn CompletionSource) -> Self {
        Self {
            source,
            geometry: None,
            template: PromptTemplate::default(),
            max_samples: None,
        }
    }

    /// Attach a geometry checker; without one the geometry axis stays
    /// absent (`None`) in every record.
    #[must_use]
    pub fn with_geometry(mut self, checker: &'a dyn GeometryChecker) -> Self {
        self.geometry = Some(checker);
        self
    }

    /// Override the prompt template.
    #[must_use]
    pub fn with_template(mut self, template: PromptTemplate) -> Self {
        self.template = template;
        self
    }

    /// Cap the number of evaluated examples.
    #[must_use]
    pub const fn with_max_samples(mut self, n: usize) -> Self {
        self.max_samples = Some(n);
        self
    }

    /// Evaluate a single example.
    ///
    /// A reference failure downgrades syntax validity and carries its
    /// diagnostic, so callers see one validity bit per example. A
    /// geometry-engine error records `geometry_valid = Some(false)` and
    /// surfaces the engine message.
    ///
    /// # Errors
    /// Returns an error when the completion source fails.
    pub fn evaluate_example(&self, index: usize, sample: &DesignSample) -> Result<EvalRecord> {
        let prompt = self.template.format_prompt(&sample.text);
        let raw = self.source.complete(index, &prompt)?;
        let generated_ir = extract_ir(&raw).to_string();

        let verdict = is_ir_valid(&generated_ir);
        let syntax_valid = verdict.is_valid;
        let mut error_message = verdict.error.map(|e| e.message);

        let matched = exact_match(&sample.ir, &generated_ir);

        let geometry_valid = match self.geometry {
            Some(checker) if syntax_valid => match checker.check(&generated_ir) {
                Ok(ok) => Some(ok),
                Err(e) => {
                    error_message = Some(e.to_string());
                    Some(false)
                }
            },
            _ => None,
        };

        Ok(EvalRecord {
            syntax_valid,
            geometry_valid,
            exact_match: matched,
            generated_ir,
            error_message,
        })
    }

    /// Evaluate a slice of samples, honoring the `max_samples` cap.
    ///
    /// # Errors
    /// Returns the first completion-source failure.
    pub fn evaluate(
        &self,
        samples: &[DesignSample],
    ) -> Result<(Vec<EvalRecord>, AggregateMetrics)> {
        let take = self
            .max_samples
            .unwrap_or(samples.len())
            .min(samples.len());

        let mut records = Vec::with_capacity(take);
        for (index, sample) in samples.iter().take(take).enumerate() {
            records.push(self.evaluate_example(index, sample)?);
        }

        let metrics = aggregate(&records);
        Ok((records, metrics))
    }
}

/// Render the evaluation report.
#[must_use]
pub fn render_report(metrics: &AggregateMetrics) -> String {
    let rule = "=".repeat(60);
    let mut lines = vec![
        String::new(),
        rule.clone(),
        "Evaluation Report".to_string(),
        rule.clone(),
        format!("Total examples: {}", metrics.total),
        String::new(),
        "Accuracy:".to_string(),
        format!(
            "  Syntax validity:   {:.1}% ({}/{})",
            metrics.syntax_accuracy * 100.0,
            metrics.syntax_valid,
            metrics.total
        ),
        format!(
            "  Geometry validity: {:.1}% ({}/{})",
            metrics.geometry_accuracy * 100.0,
            metrics.geometry_valid,
            metrics.total
        ),
        format!(
            "  Exact match:       {:.1}% ({}/{})",
            metrics.exact_match_accuracy * 100.0,
            metrics.exact_match,
            metrics.total
        ),
    ];

    if !metrics.errors.is_empty() {
        lines.push(String::new());
        lines.push("Error breakdown:".to_string());
        let mut buckets: Vec<(&String, &usize)> = metrics.errors.iter().collect();
        buckets.sort_by(|a, b| b.1.cmp(a.1));
        for (bucket, count) in buckets {
            lines.push(format!("  {bucket}: {count}"));
        }
    }

    lines.push(rule);
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(text: &str, ir: &str) -> DesignSample {
        DesignSample {
            text: text.to_string(),
            ir: ir.to_string(),
            family: None,
            complexity: None,
        }
    }

    struct AlwaysManifold;
    impl GeometryChecker for AlwaysManifold {
        fn check(&self, _ir: &str) -> Result<bool> {
            Ok(true)
        }
    }

    struct BrokenEngine;
    impl GeometryChecker for BrokenEngine {
        fn check(&self, _ir: &str) -> Result<bool> {
            Err(Error::Unsupported("kernel offline".into()))
        }
    }

    #[test]
    fn test_evaluate_example_valid_and_exact() {
        let source = PregeneratedCompletions::new(vec!["C 1 1 1\nS 0.5\nU 0 1".into()]);
        let evaluator = Evaluator::new(&source);
        let record = evaluator
            .evaluate_example(0, &sample("a cube and sphere", "C 1 1 1\nS 0.5\nU 0 1"))
            .unwrap();

        assert!(record.syntax_valid);
        assert!(record.exact_match);
        assert_eq!(record.geometry_valid, None);
        assert!(record.error_message.is_none());
    }

    #[test]
    fn test_evaluate_example_reference_failure_downgrades_syntax() {
        let source = PregeneratedCompletions::new(vec!["C 1 1 1\nU 0 1".into()]);
        let evaluator = Evaluator::new(&source);
        let record = evaluator
            .evaluate_example(0, &sample("bad union", "C 1 1 1"))
            .unwrap();

        assert!(!record.syntax_valid);
        assert!(record
            .error_message
            .as_deref()
            .unwrap()
            .starts_with("Invalid references"));
    }

    #[test]
    fn test_evaluate_example_extracts_from_completion() {
        let raw = "Design: a cube\n\nCompact IR:\nC 2 2 2\n\nNotes: done".to_string();
        let source = PregeneratedCompletions::new(vec![raw]);
        let evaluator = Evaluator::new(&source);
        let record = evaluator
            .evaluate_example(0, &sample("a cube", "C 2 2 2"))
            .unwrap();

        assert_eq!(record.generated_ir, "C 2 2 2");
        assert!(record.syntax_valid);
        assert!(record.exact_match);
    }

    #[test]
    fn test_geometry_checker_runs_only_on_valid_syntax() {
        let source = PregeneratedCompletions::new(vec!["not ir at all".into(), "S 1.0".into()]);
        let checker = AlwaysManifold;
        let evaluator = Evaluator::new(&source).with_geometry(&checker);

        let bad = evaluator.evaluate_example(0, &sample("x", "S 1.0")).unwrap();
        assert_eq!(bad.geometry_valid, None);

        let good = evaluator.evaluate_example(1, &sample("x", "S 1.0")).unwrap();
        assert_eq!(good.geometry_valid, Some(true));
    }

    #[test]
    fn test_geometry_engine_error_records_false() {
        let source = PregeneratedCompletions::new(vec!["S 1.0".into()]);
        let checker = BrokenEngine;
        let evaluator = Evaluator::new(&source).with_geometry(&checker);

        let record = evaluator.evaluate_example(0, &sample("x", "S 1.0")).unwrap();
        assert!(record.syntax_valid);
        assert_eq!(record.geometry_valid, Some(false));
        assert!(record.error_message.unwrap().contains("kernel offline"));
    }

    #[test]
    fn test_evaluate_batch_and_max_samples() {
        let source = PregeneratedCompletions::new(vec![
            "S 1.0".into(),
            "C 1 1 1".into(),
            "garbage".into(),
        ]);
        let samples = vec![
            sample("sphere", "S 1.0"),
            sample("cube", "C 2 2 2"),
            sample("junk", "S 1.0"),
        ];

        let evaluator = Evaluator::new(&source);
        let (records, metrics) = evaluator.evaluate(&samples).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(metrics.syntax_valid, 2);
        assert_eq!(metrics.exact_match, 1);

        let capped = Evaluator::new(&source).with_max_samples(1);
        let (records, metrics) = capped.evaluate(&samples).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(metrics.total, 1);
    }

    #[test]
    fn test_missing_completion_is_an_error() {
        let source = PregeneratedCompletions::new(vec![]);
        let evaluator = Evaluator::new(&source);
        assert!(evaluator.evaluate_example(0, &sample("x", "S 1.0")).is_err());
    }

    #[test]
    fn test_render_report_shape() {
        let records = vec![
            EvalRecord {
                syntax_valid: true,
                exact_match: true,
                ..Default::default()
            },
            EvalRecord {
                syntax_valid: false,
                error_message: Some("Empty IR".into()),
                ..Default::default()
            },
        ];
        let report = render_report(&aggregate(&records));

        assert!(report.contains("Evaluation Report"));
        assert!(report.contains("Total examples: 2"));
        assert!(report.contains("Syntax validity:   50.0% (1/2)"));
        assert!(report.contains("Exact match:       50.0% (1/2)"));
        assert!(report.contains("Error breakdown:"));
        assert!(report.contains("  Empty IR: 1"));
    }

    #[test]
    fn test_render_report_no_errors_omits_breakdown() {
        let report = render_report(&aggregate(&[]));
        assert!(!report.contains("Error breakdown:"));
        assert!(report.contains("Total examples: 0"));
        assert!(report.contains("0.0% (0/0)"));
    }
}
