//! Token types for the Quill scanner.
//!
//! The scanner itself exposes only the live token through its public fields;
//! [`Token`] is an owned snapshot of those fields for callers that need to
//! keep tokens around (tests, tooling, the tree builder's lookahead).

mod flags;
mod kind;

pub use flags::{RollbackKind, TokenFlags};
pub use kind::TokenKind;

use std::fmt;

use super::Span;

/// An owned copy of one scanned token.
#[derive(Clone, Eq, PartialEq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    pub kind: TokenKind,
    /// Decoded or normalised token text.
    pub text: String,
    pub flags: TokenFlags,
    /// Offset where this token's leading trivia begins.
    pub full_start: usize,
    /// The meaningful part of the token, without leading trivia.
    pub span: Span,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Span) -> Self {
        Token {
            kind,
            text: text.into(),
            flags: TokenFlags::empty(),
            full_start: span.start,
            span,
        }
    }

    /// Offset just past this token.
    #[inline]
    pub fn offset_next(&self) -> usize {
        self.span.end
    }

    /// The full extent of the token, leading trivia included.
    #[inline]
    pub fn full_span(&self) -> Span {
        Span::new(self.full_start, self.span.end)
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({:?}) @ {}", self.kind, self.text, self.span)
    }
}

// Size assertions to prevent accidental regressions
#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::{RollbackKind, TokenFlags, TokenKind};
    crate::static_assert_size!(TokenKind, 1);
    crate::static_assert_size!(TokenFlags, 4);
    crate::static_assert_size!(RollbackKind, 1);
}
