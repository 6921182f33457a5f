//! The [`Diagnostic`] record the scanner appends for recoverable input errors.

use quill_ir::Span;
use std::fmt;

use crate::ErrorCode;

/// Severity level for diagnostics.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// One recorded problem: a code plus the byte range it covers.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Diagnostic {
    pub code: ErrorCode,
    pub span: Span,
}

impl Diagnostic {
    #[inline]
    pub fn new(code: ErrorCode, span: Span) -> Self {
        Diagnostic { code, span }
    }

    /// Byte offset where the problem starts.
    #[inline]
    pub fn start(&self) -> usize {
        self.span.start
    }

    /// Length of the offending range in bytes.
    #[inline]
    pub fn length(&self) -> usize {
        self.span.len()
    }

    pub fn severity(&self) -> Severity {
        if self.code.is_warning() {
            Severity::Warning
        } else {
            Severity::Error
        }
    }

    pub fn message(&self) -> &'static str {
        self.code.description()
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}[{}] at {}: {}",
            self.severity(),
            self.code,
            self.span,
            self.message()
        )
    }
}
