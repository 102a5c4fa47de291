//! Logical-line splitting and tokenization for Compact IR text

/// One non-blank logical line of IR text.
///
/// Borrowed from the input string; lines exist only for the duration of a
/// validation pass.
#[derive(Debug, Clone)]
pub struct Line<'a> {
    /// 1-based position within the trimmed text. Interior blank lines
    /// advance the numbering even though they produce no `Line`.
    pub number: usize,
    /// Trimmed line text
    pub text: &'a str,
    /// Whitespace-separated tokens; `tokens[0]` is the opcode candidate
    pub tokens: Vec<&'a str>,
}

/// Split raw IR text into non-blank logical lines.
///
/// The whole text is trimmed first, then split on `\n`. Every line of the
/// trimmed text consumes a line number; blank lines are dropped from the
/// result.
#[must_use]
pub fn logical_lines(ir: &str) -> Vec<Line<'_>> {
    ir.trim()
        .split('\n')
        .enumerate()
        .filter_map(|(i, raw)| {
            let text = raw.trim();
            if text.is_empty() {
                return None;
            }
            Some(Line {
                number: i + 1,
                text,
                tokens: text.split_whitespace().collect(),
            })
        })
        .collect()
}
