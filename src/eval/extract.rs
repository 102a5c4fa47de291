//! Completion post-processing
//!
//! A raw model completion usually echoes the prompt and may ramble past
//! the program; only the text after the last `Compact IR:` marker, up to
//! the first blank line, is the IR.

/// Marker separating the design prompt from the IR completion
pub const IR_MARKER: &str = "Compact IR:";

/// Extract the Compact IR portion of a raw model completion.
///
/// Takes the text after the last [`IR_MARKER`], trimmed, cut at the first
/// blank-line separator. Text without the marker is returned unchanged.
#[must_use]
pub fn extract_ir(raw: &str) -> &str {
    match raw.rfind(IR_MARKER) {
        Some(i) => {
            let ir = raw[i + IR_MARKER.len()..].trim();
            match ir.find("\n\n") {
                Some(j) => &ir[..j],
                None => ir,
            }
        }
        None => raw,
    }
}
