//! Cross-token scanner context and sub-modes.

use bitflags::bitflags;

bitflags! {
    /// Context carried from one token to the next.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub(crate) struct ContextFlags: u8 {
        /// Nothing but indentation has been emitted on the current line.
        const AT_LINE_START = 1 << 0;
        /// A line break was crossed since the last non-trivia token.
        const PRECEDING_LINE_BREAK = 1 << 1;
        /// A paragraph is open; indented lines continue it lazily.
        const IN_PARAGRAPH = 1 << 2;
    }
}

/// Nested state machine the next `scan()` resumes in.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum ScanMode {
    Normal,
    /// Between `<name` and the closing `>` or `/>`.
    HtmlTag(TagState),
    /// After a code span opener whose closer is known.
    CodeSpan(CodeSpanState),
}

impl ScanMode {
    pub(crate) fn name(self) -> &'static str {
        match self {
            ScanMode::Normal => "normal",
            ScanMode::HtmlTag(_) => "html-tag",
            ScanMode::CodeSpan(_) => "code-span",
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct TagState {
    /// Offset of the `<` that opened the tag.
    pub(crate) tag_start: usize,
    /// `</name`: attributes and `/>` are not allowed.
    pub(crate) closing: bool,
    /// Last token was an attribute name, so `=` may follow.
    pub(crate) after_name: bool,
    /// Last token was `=`, so a value should follow.
    pub(crate) expect_value: bool,
}

impl TagState {
    pub(crate) fn new(tag_start: usize, closing: bool) -> Self {
        TagState {
            tag_start,
            closing,
            after_name: false,
            expect_value: false,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct CodeSpanState {
    /// Offset of the closing backtick run.
    pub(crate) close: usize,
    /// Length of both backtick runs.
    pub(crate) run: usize,
    /// The content token has been emitted; the closer is next.
    pub(crate) content_done: bool,
}
