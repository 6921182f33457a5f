//! Shared helpers for the scanner's unit tests.

use quill_ir::{Token, TokenFlags, TokenKind};

use crate::{ScanOptions, Scanner};

/// Every token before `EndOfFile`.
pub(crate) fn scan_all(text: &str) -> Vec<Token> {
    scan_all_with(text, ScanOptions::default())
}

pub(crate) fn scan_all_with(text: &str, options: ScanOptions) -> Vec<Token> {
    let mut scanner = Scanner::new(options);
    scanner.init_text(text);
    scanner.tokens().collect()
}

/// `(kind, text)` pairs, the usual shape for expectations.
pub(crate) fn kinds_and_text(text: &str) -> Vec<(TokenKind, String)> {
    pairs(&scan_all(text))
}

pub(crate) fn kinds_and_text_with(text: &str, options: ScanOptions) -> Vec<(TokenKind, String)> {
    pairs(&scan_all_with(text, options))
}

pub(crate) fn kinds(text: &str) -> Vec<TokenKind> {
    scan_all(text).into_iter().map(|t| t.kind).collect()
}

/// Flags with the layout and restart bits masked out.
pub(crate) fn content_flags(flags: TokenFlags) -> TokenFlags {
    flags
        & !(TokenFlags::AT_LINE_START
            | TokenFlags::PRECEDING_LINE_BREAK
            | TokenFlags::CAN_ROLLBACK_HERE
            | TokenFlags::ROLLBACK_KIND)
}

fn pairs(tokens: &[Token]) -> Vec<(TokenKind, String)> {
    tokens.iter().map(|t| (t.kind, t.text.clone())).collect()
}

/// Shorthand for building expectations.
pub(crate) fn tok(kind: TokenKind, text: &str) -> (TokenKind, String) {
    (kind, text.to_owned())
}
