//! Compilation errors.

use core::ops::Range;

use thiserror::Error;

/// Byte range of a token in the source string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Span(pub Range<usize>);

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Span(start..end)
    }

    pub fn start(&self) -> usize {
        self.0.start
    }

    pub fn end(&self) -> usize {
        self.0.end
    }
}

/// Why a source string failed to compile.
///
/// Compilation stops at the first error, so there is only ever one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    /// The token is neither a numeric literal nor an enabled mnemonic.
    #[error("unrecognized token `{token}` at {}..{}", .span.start(), .span.end())]
    UnknownToken { token: String, span: Span },
}

impl CompileError {
    pub fn span(&self) -> &Span {
        match self {
            CompileError::UnknownToken { span, .. } => span,
        }
    }

    /// Short label for the offending token, used when rendering diagnostics.
    pub fn label(&self) -> &'static str {
        match self {
            CompileError::UnknownToken { .. } => {
                "not a number and not an enabled operation"
            }
        }
    }
}
