//! Syntax and reference validation for Compact IR programs
//!
//! Two pure passes composed by [`is_ir_valid`]: a grammar walk that checks
//! line shape, then a def-before-use walk that checks node references.
//! Both report their first violation and stop; neither panics or performs
//! I/O, so re-running on the same input always yields the same verdict.

use serde::{Deserialize, Serialize};

use super::grammar::{recognize, Opcode};
use super::parse::logical_lines;

/// Maximum characters of an offending line quoted in a diagnostic
const EXCERPT_LEN: usize = 50;

/// Classification of a validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorKind {
    /// Input was empty or all whitespace
    EmptyInput,
    /// A non-blank line matched no instruction form
    SyntaxError,
    /// Input was non-empty but no line ever matched
    NoValidOperations,
    /// A node reference names a node not created yet
    DanglingReference,
}

/// A validation failure with its diagnostic message.
///
/// The text before the first `:` of `message` is stable: the reporting
/// layer buckets error histograms on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Failure classification
    pub kind: ErrorKind,
    /// Human-readable diagnostic
    pub message: String,
}

/// Outcome of a validation pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    /// Whether the input passed this pass
    pub is_valid: bool,
    /// First violation encountered, when invalid
    pub error: Option<ValidationError>,
}

impl Verdict {
    /// Passing verdict.
    #[must_use]
    pub const fn pass() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    /// Failing verdict with a diagnostic.
    #[must_use]
    pub fn fail(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error: Some(ValidationError {
                kind,
                message: message.into(),
            }),
        }
    }

    /// Diagnostic message, if any.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.error.as_ref().map(|e| e.message.as_str())
    }

    /// Failure kind, if any.
    #[must_use]
    pub fn kind(&self) -> Option<ErrorKind> {
        self.error.as_ref().map(|e| e.kind)
    }
}

/// Check that every line of `ir` is a well-formed instruction.
///
/// Walks the logical lines in order, matching each against the grammar
/// and counting one node per matched line. Returns on the first line
/// that matches nothing, quoting its 1-based line number and the first
/// 50 characters of the line.
#[must_use]
pub fn validate_syntax(ir: &str) -> Verdict {
    if ir.trim().is_empty() {
        return Verdict::fail(ErrorKind::EmptyInput, "Empty IR");
    }

    let mut node_count = 0usize;
    for line in logical_lines(ir) {
        if recognize(&line.tokens).is_some() {
            node_count += 1;
        } else {
            let excerpt: String = line.text.chars().take(EXCERPT_LEN).collect();
            return Verdict::fail(
                ErrorKind::SyntaxError,
                format!("Invalid syntax at line {}: {excerpt}", line.number),
            );
        }
    }

    // Unreachable for non-empty input under fail-fast, but the branch is
    // part of the reported taxonomy and its message is load-bearing for
    // the error histogram.
    if node_count == 0 {
        return Verdict::fail(ErrorKind::NoValidOperations, "No valid operations found");
    }

    Verdict::pass()
}

/// Check that every node reference points strictly backward.
///
/// The node index increments once per non-blank line; a reference on the
/// line defining node `n` must be `< n`, which forbids both self- and
/// forward references. Expects input that already passed
/// [`validate_syntax`]; lines it does not recognize still consume a node
/// index but are not checked.
#[must_use]
pub fn validate_references(ir: &str) -> Verdict {
    let mut node_index = 0usize;

    for line in logical_lines(ir) {
        let opcode = Opcode::parse(line.tokens[0]);
        match opcode.map(Opcode::node_ref_count) {
            Some(1) if line.tokens.len() >= 2 => {
                let (value, display) = parse_ref(line.tokens[1]);
                if !value.is_some_and(|r| r < node_index) {
                    return Verdict::fail(
                        ErrorKind::DanglingReference,
                        format!("Invalid reference {display} at node {node_index}"),
                    );
                }
            }
            Some(2) if line.tokens.len() >= 3 => {
                let (a, display_a) = parse_ref(line.tokens[1]);
                let (b, display_b) = parse_ref(line.tokens[2]);
                let a_ok = a.is_some_and(|r| r < node_index);
                let b_ok = b.is_some_and(|r| r < node_index);
                if !a_ok || !b_ok {
                    return Verdict::fail(
                        ErrorKind::DanglingReference,
                        format!("Invalid references {display_a}, {display_b} at node {node_index}"),
                    );
                }
            }
            _ => {}
        }
        node_index += 1;
    }

    Verdict::pass()
}

/// Parse a node-reference token.
///
/// Returns the parsed value (None when the token does not fit `usize`,
/// which is out of range for any program) and the value to quote in a
/// diagnostic (`007` reports as `7`).
fn parse_ref(token: &str) -> (Option<usize>, String) {
    match token.parse::<usize>() {
        Ok(r) => (Some(r), r.to_string()),
        Err(_) => (None, token.to_string()),
    }
}

/// Full validity check: syntax first, then references.
///
/// Syntax success is necessary but not sufficient; the reference verdict
/// decides overall validity. This is the entry point external callers
/// consume.
#[must_use]
pub fn is_ir_valid(ir: &str) -> Verdict {
    let syntax = validate_syntax(ir);
    if !syntax.is_valid {
        return syntax;
    }
    validate_references(ir)
}
