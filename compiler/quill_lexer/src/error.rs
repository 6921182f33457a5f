//! Fatal scanner errors.
//!
//! Malformed markup never produces one of these; it degrades to a fallback
//! token plus a [`Diagnostic`](quill_diagnostic::Diagnostic). Only caller
//! misuse of the restart API is an error.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScanError {
    #[error("rollback position {position} is outside the scanned range {start}..{end}")]
    RollbackOutOfRange {
        position: usize,
        start: usize,
        end: usize,
    },

    #[error("rollback position {position} is inside a multi-byte character")]
    RollbackNotCharBoundary { position: usize },
}
