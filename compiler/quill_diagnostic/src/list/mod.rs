//! Append-only diagnostic storage owned by one scanner.

use quill_ir::Span;

use crate::{Diagnostic, ErrorCode};

/// Diagnostics in the order they were recorded.
///
/// The scanner only appends. The single exception is a rollback: records
/// starting at or after the restart position are dropped, since rescanning
/// reports them again.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DiagnosticList {
    items: Vec<Diagnostic>,
}

impl DiagnosticList {
    pub fn new() -> Self {
        DiagnosticList { items: Vec::new() }
    }

    #[inline]
    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.items.push(diagnostic);
    }

    /// Record a diagnostic for `code` over `start..end`.
    #[inline]
    pub fn report(&mut self, code: ErrorCode, start: usize, end: usize) {
        self.push(Diagnostic::new(code, Span::new(start, end.max(start))));
    }

    #[inline]
    pub fn as_slice(&self) -> &[Diagnostic] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of errors, warnings excluded.
    pub fn error_count(&self) -> usize {
        self.items.iter().filter(|d| !d.code.is_warning()).count()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.items.iter()
    }

    /// Drop everything, keeping the allocation.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Drop records whose range starts at or after `position`.
    pub fn discard_from(&mut self, position: usize) {
        self.items.retain(|d| d.start() < position);
    }
}

impl<'a> IntoIterator for &'a DiagnosticList {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests;
