//! Snapshot of scanner internals for tooling.

use quill_ir::{TokenFlags, TokenKind};

use crate::context::ContextFlags;
use crate::Scanner;

/// Caller-owned record filled by [`Scanner::fill_debug_state`].
///
/// Reusing one record across calls keeps `token_text`'s allocation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DebugState {
    pub pos: usize,
    /// Zero-based line of `pos`.
    pub line: usize,
    /// Byte column of `pos` within its line.
    pub column: usize,
    /// `"normal"`, `"html-tag"` or `"code-span"`.
    pub mode: &'static str,
    pub at_line_start: bool,
    pub in_paragraph: bool,
    pub preceding_line_break: bool,
    pub list_marker_consumed: bool,
    pub token: TokenKind,
    pub token_text: String,
    pub token_flags: TokenFlags,
    pub token_start: usize,
    pub full_start: usize,
    pub offset_next: usize,
    /// Diagnostics recorded so far.
    pub diagnostic_count: usize,
}

impl Scanner {
    /// Copy position, context and the live token into `state`.
    pub fn fill_debug_state(&self, state: &mut DebugState) {
        state.pos = self.pos;
        state.line = self.line;
        state.column = self.column;
        state.mode = self.mode.name();
        state.at_line_start = self.context.contains(ContextFlags::AT_LINE_START);
        state.in_paragraph = self.context.contains(ContextFlags::IN_PARAGRAPH);
        state.preceding_line_break = self.context.contains(ContextFlags::PRECEDING_LINE_BREAK);
        state.list_marker_consumed = self.list_marker_consumed;
        state.token = self.token;
        state.token_text.clear();
        state.token_text.push_str(&self.token_text);
        state.token_flags = self.token_flags;
        state.token_start = self.token_start;
        state.full_start = self.full_start;
        state.offset_next = self.offset_next;
        state.diagnostic_count = self.diagnostics.len();
    }
}
