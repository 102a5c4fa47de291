//! Central error type for the tallar crate
//!
//! Validation outcomes are plain values ([`crate::ir::Verdict`]), never
//! errors. This type covers the fallible surfaces around them: file I/O,
//! corpus and config parsing, and absent external capabilities.

use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Crate-wide error type
#[derive(Debug, Error)]
pub enum Error {
    /// I/O failure while reading corpora, configs, or generation dumps
    #[error("IO error: {0}")]
    Io(String),

    /// A JSONL row failed to parse
    #[error("Parse error at line {line}: {message}")]
    Parse {
        /// 1-based line number within the file
        line: usize,
        /// Underlying parser message
        message: String,
    },

    /// Configuration could not be read, parsed, or validated
    #[error("Config error: {0}")]
    Config(String),

    /// An external capability (model inference, geometry evaluation) is
    /// not available in this context
    #[error("Unsupported: {0}")]
    Unsupported(String),
}
