//! Markdown scanner for Quill.
//!
//! Turns source text into a flat, position-exact token stream for a
//! CommonMark/GFM-style tree builder. One [`Scanner`] serves one document:
//! the caller binds text, calls [`Scanner::scan`] until `EndOfFile`, and
//! reads the live token from the scanner's public fields between calls.
//!
//! # Architecture
//!
//! ```text
//! text → classify_line (cached per line) → dispatcher → sub-scanner → emit
//! ```
//!
//! - **Block sub-scanners** (`block`): indentation, blank lines, headings,
//!   fences, thematic breaks, indented code, list and blockquote markers
//! - **Inline scanner** (`inline`): text runs, cross-line accumulation,
//!   delimiter runs with flanking, code spans, math, brackets, hard breaks
//! - **HTML sub-engine** (`html`): tags and attributes (a nested mode),
//!   comments, CDATA, processing instructions, declarations, entities,
//!   autolinks
//! - **Rollback** (`rollback`): restart from any flagged line start
//!
//! Malformed input never fails: the scanner emits a fallback token and
//! records a [`Diagnostic`] out of band.

mod block;
mod context;
mod debug_state;
mod error;
mod html;
mod inline;
mod normalize;
mod options;
mod rollback;
mod scanner;
mod span_buffer;

pub use debug_state::DebugState;
pub use error::ScanError;
pub use options::ScanOptions;
pub use scanner::{Scanner, Tokens};

pub use quill_diagnostic::{Diagnostic, ErrorCode};
pub use quill_ir::{RollbackKind, Span, Token, TokenFlags, TokenKind};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=quill_lexer=debug` or `RUST_LOG=quill_lexer=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            // Another subscriber may already be installed by the host.
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
        }
    });
}

/// Scan `text` to completion and collect every token before `EndOfFile`.
pub fn tokenize(text: &str, options: ScanOptions) -> Vec<Token> {
    let mut scanner = Scanner::new(options);
    scanner.init_text(text);
    scanner.tokens().collect()
}

#[cfg(test)]
pub(crate) mod test_helpers;
