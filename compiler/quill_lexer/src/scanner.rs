//! The stateful scanner: binding, the `scan()` loop and token emission.
//!
//! Every sub-scanner ends in [`Scanner::emit`], which is the only place that
//! moves `pos`. That keeps line/column tracking, context flags and restart
//! flags in one spot.

use quill_diagnostic::{Diagnostic, DiagnosticList, ErrorCode};
use quill_ir::{RollbackKind, Span, Token, TokenFlags, TokenKind};
use quill_lexer_core::{
    char_class::{is_line_break, is_space_or_tab},
    classify_line, DollarPlan, LineFlags, LineInfo, SourceBuffer,
};
use tracing::{debug, trace};

use crate::context::{ContextFlags, ScanMode};
use crate::span_buffer::SpanBuffer;
use crate::ScanOptions;

/// Cached classification of the line being scanned.
#[derive(Copy, Clone, Debug)]
pub(crate) struct LineState {
    /// Offset the line (not the classification) starts at.
    pub(crate) line_start: usize,
    pub(crate) info: LineInfo,
    /// Inline `$` pairing for the line.
    pub(crate) dollars: DollarPlan,
}

impl LineState {
    /// Text on this line belongs to a paragraph: inline content opens one
    /// and a run may continue onto the next line.
    pub(crate) fn is_paragraph_like(&self) -> bool {
        !self.info.flags.intersects(
            LineFlags::BLANK_LINE
                | LineFlags::ATX_HEADING
                | LineFlags::THEMATIC_BREAK
                | LineFlags::FENCED_CODE_OPEN
                | LineFlags::MATH_BLOCK,
        )
    }
}

/// Markdown scanner.
///
/// Call [`init_text`](Scanner::init_text), then [`scan`](Scanner::scan)
/// until it returns [`TokenKind::EndOfFile`]. After each call the public
/// fields describe the token just produced; the next call overwrites them.
#[derive(Debug)]
pub struct Scanner {
    /// Kind of the live token.
    pub token: TokenKind,
    /// Decoded or normalised text of the live token.
    pub token_text: String,
    pub token_flags: TokenFlags,
    /// Start of the meaningful part of the token.
    pub token_start: usize,
    /// Where the token's leading trivia begins (the previous `offset_next`).
    pub full_start: usize,
    /// Offset just past the token.
    pub offset_next: usize,

    pub(crate) source: SourceBuffer,
    pub(crate) pos: usize,
    pub(crate) line: usize,
    pub(crate) column: usize,
    pub(crate) last_line_start: usize,
    pub(crate) context: ContextFlags,
    pub(crate) line_state: Option<LineState>,
    /// One-shot latch: the list marker of the current line was emitted.
    pub(crate) list_marker_consumed: bool,
    /// The last finished line was blank.
    pub(crate) prev_line_blank: bool,
    pub(crate) prev_token: TokenKind,
    pub(crate) mode: ScanMode,
    pub(crate) spans: SpanBuffer,
    /// Scratch buffer for two-step decoding.
    pub(crate) scratch: String,
    pub(crate) diagnostics: DiagnosticList,
    pub(crate) options: ScanOptions,
    /// Restart kind for the token being produced, decided on entry to `scan`.
    pub(crate) restart: Option<RollbackKind>,
}

impl Default for Scanner {
    fn default() -> Self {
        Scanner::new(ScanOptions::default())
    }
}

impl Scanner {
    pub fn new(options: ScanOptions) -> Self {
        Scanner {
            token: TokenKind::Unknown,
            token_text: String::new(),
            token_flags: TokenFlags::empty(),
            token_start: 0,
            full_start: 0,
            offset_next: 0,
            source: SourceBuffer::default(),
            pos: 0,
            line: 0,
            column: 0,
            last_line_start: 0,
            context: ContextFlags::AT_LINE_START,
            line_state: None,
            list_marker_consumed: false,
            prev_line_blank: false,
            prev_token: TokenKind::Unknown,
            mode: ScanMode::Normal,
            spans: SpanBuffer::default(),
            scratch: String::new(),
            diagnostics: DiagnosticList::new(),
            options,
            restart: None,
        }
    }

    pub fn options(&self) -> ScanOptions {
        self.options
    }

    /// Replace the options. Takes effect from the next bound text.
    pub fn set_options(&mut self, options: ScanOptions) {
        self.options = options;
    }

    /// Bind the scanner to the whole of `text`.
    pub fn init_text(&mut self, text: &str) {
        self.init_text_range(text, 0, text.len());
    }

    /// Bind the scanner to `text[start..start + length]`.
    ///
    /// The range is clamped to the text and to `char` boundaries. All state
    /// is reset; buffers keep their allocations.
    pub fn init_text_range(&mut self, text: &str, start: usize, length: usize) {
        self.source.reset(text, start, length);
        self.diagnostics.clear();
        let start = self.source.start();
        self.reset_to(start, RollbackKind::DocumentStart);
        debug!(
            start,
            end = self.source.end(),
            len = text.len(),
            "bound text"
        );
    }

    /// The bound text (all of it, not only the scanned range).
    pub fn text(&self) -> &str {
        self.source.text()
    }

    /// Current position.
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Zero-based line of the current position.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Byte column of the current position.
    pub fn column(&self) -> usize {
        self.column
    }

    /// Diagnostics recorded since the text was bound.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        self.diagnostics.as_slice()
    }

    /// Span of the live token, leading trivia excluded.
    pub fn token_span(&self) -> Span {
        Span::new(self.token_start, self.offset_next)
    }

    /// Owned copy of the live token.
    pub fn snapshot(&self) -> Token {
        Token {
            kind: self.token,
            text: self.token_text.clone(),
            flags: self.token_flags,
            full_start: self.full_start,
            span: self.token_span(),
        }
    }

    /// Iterate over the remaining tokens, `EndOfFile` excluded.
    pub fn tokens(&mut self) -> Tokens<'_> {
        Tokens {
            scanner: self,
            done: false,
        }
    }

    /// Advance by exactly one token and return its kind.
    pub fn scan(&mut self) -> TokenKind {
        self.restart = self.restart_kind_here();
        match self.mode {
            ScanMode::HtmlTag(state) => {
                if let Some(kind) = self.scan_tag_content(state) {
                    return kind;
                }
            }
            ScanMode::CodeSpan(state) => return self.scan_code_span(state),
            ScanMode::Normal => {}
        }
        self.scan_normal()
    }

    fn scan_normal(&mut self) -> TokenKind {
        if self.pos >= self.source.end() {
            return self.emit_eof();
        }
        if is_line_break(self.source.byte(self.pos)) {
            return self.scan_line_break();
        }
        let line = self.current_line();
        if self.pos <= line.info.content_start {
            if let Some(kind) = self.scan_line_structure(line) {
                return kind;
            }
        }
        self.scan_inline(line)
    }

    /// A token starting on a fresh line in normal mode is a restart point.
    fn restart_kind_here(&self) -> Option<RollbackKind> {
        if self.mode != ScanMode::Normal || !self.source.is_line_start(self.pos) {
            return None;
        }
        let kind = if self.pos == self.source.start() {
            RollbackKind::DocumentStart
        } else if self.context.contains(ContextFlags::IN_PARAGRAPH) {
            RollbackKind::InParagraph
        } else if self.prev_line_blank {
            RollbackKind::AfterBlankLine
        } else {
            RollbackKind::LineStart
        };
        Some(kind)
    }

    // === Line cache ===

    /// Classification of the line `pos` is on, computed once per line.
    pub(crate) fn current_line(&mut self) -> LineState {
        if let Some(state) = self.line_state {
            if state.line_start == self.last_line_start {
                return state;
            }
        }
        let state = self.classify_line_at(self.last_line_start, self.last_line_start);
        self.line_state = Some(state);
        self.list_marker_consumed = false;
        state
    }

    /// Classify the line starting at `line_start`, looking from `from`.
    pub(crate) fn classify_line_at(&self, line_start: usize, from: usize) -> LineState {
        let info = classify_line(
            self.source.as_bytes(),
            from,
            self.source.end(),
            self.options.line_config(),
        );
        let dollars = if self.options.math && !info.flags.contains(LineFlags::MATH_BLOCK) {
            DollarPlan::scan(self.source.as_bytes(), info.content_start, info.line_end)
        } else {
            DollarPlan::default()
        };
        LineState {
            line_start,
            info,
            dollars,
        }
    }

    // === Emission ===

    /// Replace the token text with the raw source slice `[start, end)`.
    pub(crate) fn set_text_raw(&mut self, start: usize, end: usize) {
        self.token_text.clear();
        self.token_text.push_str(self.source.slice(start, end));
    }

    /// Replace the token text with `text`.
    pub(crate) fn set_text(&mut self, text: &str) {
        self.token_text.clear();
        self.token_text.push_str(text);
    }

    /// Record a diagnostic over `[start, end)`.
    pub(crate) fn report(&mut self, code: ErrorCode, start: usize, end: usize) {
        debug!(code = %code, start, end, "diagnostic");
        self.diagnostics.report(code, start, end);
    }

    /// Publish the token `[token_start, end)` and move past it.
    ///
    /// The token text must already be in `token_text`. Everything between
    /// the current position and `token_start` becomes leading trivia.
    pub(crate) fn emit(
        &mut self,
        kind: TokenKind,
        token_start: usize,
        end: usize,
        flags: TokenFlags,
    ) -> TokenKind {
        let (kind, token_start, end, mut flags) = if end > self.pos || kind == TokenKind::EndOfFile
        {
            (kind, token_start, end, flags)
        } else {
            self.stalled()
        };
        debug_assert!(
            kind.is_delimiter() || !flags.intersects(TokenFlags::CAN_OPEN | TokenFlags::CAN_CLOSE),
            "{kind} carries flanking flags"
        );

        if self.context.contains(ContextFlags::AT_LINE_START) {
            flags |= TokenFlags::AT_LINE_START;
        }
        if self.context.contains(ContextFlags::PRECEDING_LINE_BREAK) {
            flags |= TokenFlags::PRECEDING_LINE_BREAK;
        }
        if let Some(restart) = self.restart.take() {
            flags = flags.with_rollback(restart);
        }

        self.token = kind;
        self.token_flags = flags;
        self.token_start = token_start;
        self.full_start = self.pos;
        self.offset_next = end;
        self.advance_to(end);

        if !kind.is_trivia() && kind != TokenKind::EndOfFile {
            self.context
                .remove(ContextFlags::AT_LINE_START | ContextFlags::PRECEDING_LINE_BREAK);
        }
        self.prev_token = kind;

        trace!(
            kind = %kind,
            start = token_start,
            end,
            text = ?self.token_text,
            flags = ?flags,
            "token"
        );
        kind
    }

    /// A sub-scanner failed to advance: consume one character as `Unknown`.
    fn stalled(&mut self) -> (TokenKind, usize, usize, TokenFlags) {
        let start = self.pos;
        let end = self.source.next_char_boundary(start).max(start + 1);
        self.set_text_raw(start, end);
        self.report(ErrorCode::M9001, start, end);
        self.mode = ScanMode::Normal;
        (TokenKind::Unknown, start, end, TokenFlags::HAS_SCAN_ERROR)
    }

    fn advance_to(&mut self, end: usize) {
        let breaks = self.source.line_breaks(self.pos, end);
        if let Some(line_start) = breaks.last_line_start {
            self.line += breaks.count;
            self.last_line_start = line_start;
        }
        self.pos = end;
        self.column = end - self.last_line_start;
    }

    fn emit_eof(&mut self) -> TokenKind {
        let end = self.source.end();
        self.token_text.clear();
        self.emit(TokenKind::EndOfFile, end, end, TokenFlags::empty())
    }

    // === Line breaks ===

    /// A line break ends the paragraph when the rest of the line classified
    /// blank (`>` alone does too), but only a whitespace-only physical line
    /// counts as a blank line.
    fn scan_line_break(&mut self) -> TokenKind {
        let line = self.current_line();
        let rest_blank = line.info.flags.contains(LineFlags::BLANK_LINE);
        let blank = rest_blank && self.is_whitespace_only(&line);
        let start = self.pos;
        let end = start + self.source.cursor(start).line_break_len();
        self.set_text_raw(start, end);
        let flags = if blank {
            TokenFlags::IS_BLANK_LINE
        } else {
            TokenFlags::empty()
        };
        let kind = self.emit(TokenKind::NewLineTrivia, start, end, flags);

        self.context
            .insert(ContextFlags::AT_LINE_START | ContextFlags::PRECEDING_LINE_BREAK);
        if rest_blank {
            self.context.remove(ContextFlags::IN_PARAGRAPH);
        }
        self.prev_line_blank = blank;
        kind
    }

    /// The physical line of `line` holds only spaces and tabs.
    pub(crate) fn is_whitespace_only(&self, line: &LineState) -> bool {
        self.source
            .slice(line.line_start, line.info.line_end)
            .bytes()
            .all(is_space_or_tab)
    }

    /// Ends whatever paragraph is open.
    pub(crate) fn end_paragraph(&mut self) {
        self.context.remove(ContextFlags::IN_PARAGRAPH);
    }

    /// End `EndOfFile` at the range end, folding `[pos, end)` into its
    /// leading trivia.
    pub(crate) fn finish_at_eof(&mut self) -> TokenKind {
        self.mode = ScanMode::Normal;
        self.emit_eof()
    }
}

/// Iterator over owned token snapshots. Stops before `EndOfFile`.
#[derive(Debug)]
pub struct Tokens<'s> {
    scanner: &'s mut Scanner,
    done: bool,
}

impl Iterator for Tokens<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.done {
            return None;
        }
        if self.scanner.scan() == TokenKind::EndOfFile {
            self.done = true;
            return None;
        }
        Some(self.scanner.snapshot())
    }
}

impl std::iter::FusedIterator for Tokens<'_> {}
