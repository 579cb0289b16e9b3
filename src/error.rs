//! Crate-level error types.

use std::fmt;

/// Errors produced by the flourish crate.
///
/// Page-facing behavior is best-effort and never errors: a missing element
/// silently skips its feature. Only the options layer is fallible.
#[derive(Debug)]
pub enum FlourishError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for FlourishError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for FlourishError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::OptionsParse(_) => None,
        }
    }
}

impl From<std::io::Error> for FlourishError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
