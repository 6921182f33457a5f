//! Inline scanning: text runs, cross-line accumulation and delimiters.

use quill_ir::{TokenFlags, TokenKind};
use quill_lexer_core::char_class::{is_escapable, is_line_break, is_space_or_tab};
use quill_lexer_core::{flanking, LineFlags};

use crate::context::{CodeSpanState, ContextFlags, ScanMode};
use crate::html::HtmlStart;
use crate::normalize::{code_span_text, normalize_text};
use crate::scanner::LineState;
use crate::Scanner;

/// Inline construct found at a position.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum InlineStart {
    /// `*` or `_` run.
    Emphasis(u8),
    Backtick,
    Strikethrough,
    MathInline,
    /// `$$` later on a math block line.
    MathBlock,
    Html(HtmlStart),
    Ampersand,
    OpenBracket,
    CloseBracket,
    ImageOpen,
    /// `\` or two or more spaces before a line break.
    HardBreak,
}

impl Scanner {
    pub(crate) fn scan_inline(&mut self, line: LineState) -> TokenKind {
        let pos = self.pos;
        let kind = if self.prev_token == TokenKind::HashToken
            && is_space_or_tab(self.source.byte(pos))
        {
            self.scan_heading_separator()
        } else {
            match self.inline_start_at(pos, &line) {
                Some(start) => self.scan_inline_construct(start),
                None => self.scan_text(line),
            }
        };
        if line.is_paragraph_like() {
            self.context.insert(ContextFlags::IN_PARAGRAPH);
        }
        kind
    }

    /// Which inline construct, if any, starts at `pos`.
    pub(crate) fn inline_start_at(&self, pos: usize, line: &LineState) -> Option<InlineStart> {
        let next = self.source.byte(pos + 1);
        match self.source.byte(pos) {
            b'*' => Some(InlineStart::Emphasis(b'*')),
            b'_' => (!self.is_intraword_underscore(pos)).then_some(InlineStart::Emphasis(b'_')),
            b'`' => Some(InlineStart::Backtick),
            b'~' => (self.options.strikethrough && next == b'~')
                .then_some(InlineStart::Strikethrough),
            b'$' => self.dollar_start(pos, line),
            b'<' => self.html_start_at(pos).map(InlineStart::Html),
            b'&' => Some(InlineStart::Ampersand),
            b'[' => Some(InlineStart::OpenBracket),
            b']' => Some(InlineStart::CloseBracket),
            b'!' => (next == b'[').then_some(InlineStart::ImageOpen),
            b'\\' => is_line_break(next).then_some(InlineStart::HardBreak),
            b' ' => self
                .hard_break_spaces_end(pos)
                .map(|_| InlineStart::HardBreak),
            _ => None,
        }
    }

    fn dollar_start(&self, pos: usize, line: &LineState) -> Option<InlineStart> {
        if !self.options.math {
            return None;
        }
        if line.info.flags.contains(LineFlags::MATH_BLOCK) {
            return (self.source.byte(pos + 1) == b'$').then_some(InlineStart::MathBlock);
        }
        line.dollars.role_at(pos).map(|_| InlineStart::MathInline)
    }

    /// An underscore run with alphanumerics on both sides is literal text.
    fn is_intraword_underscore(&self, pos: usize) -> bool {
        let mut run_start = pos;
        while run_start > self.source.start() && self.source.byte(run_start - 1) == b'_' {
            run_start -= 1;
        }
        let mut cursor = self.source.cursor(pos);
        cursor.eat_run(b'_');
        self.source
            .char_before(run_start)
            .is_some_and(char::is_alphanumeric)
            && self
                .source
                .char_at(cursor.pos())
                .is_some_and(char::is_alphanumeric)
    }

    /// End of a run of two or more spaces at `pos` that sits directly before
    /// a line break.
    fn hard_break_spaces_end(&self, pos: usize) -> Option<usize> {
        let mut cursor = self.source.cursor(pos);
        let run = cursor.eat_run(b' ');
        (run >= 2 && cursor.at_line_break()).then_some(cursor.pos())
    }

    fn scan_inline_construct(&mut self, start: InlineStart) -> TokenKind {
        let pos = self.pos;
        match start {
            InlineStart::Emphasis(marker) => self.scan_emphasis(marker),
            InlineStart::Backtick => self.scan_backtick_run(),
            InlineStart::Strikethrough => self.scan_strikethrough(),
            InlineStart::MathInline => {
                let flags = match self.current_line().dollars.role_at(pos) {
                    Some(true) => TokenFlags::CAN_OPEN,
                    Some(false) => TokenFlags::CAN_CLOSE,
                    None => TokenFlags::empty(),
                };
                self.set_text("$");
                self.emit(TokenKind::MathInlineDelimiter, pos, pos + 1, flags)
            }
            InlineStart::MathBlock => {
                self.set_text("$$");
                self.emit(TokenKind::MathBlockDelimiter, pos, pos + 2, TokenFlags::empty())
            }
            InlineStart::Html(html) => self.scan_html(html),
            InlineStart::Ampersand => self.scan_ampersand(),
            InlineStart::OpenBracket => self.emit_punct(TokenKind::OpenBracketToken, 1),
            InlineStart::CloseBracket => self.emit_punct(TokenKind::CloseBracketToken, 1),
            InlineStart::ImageOpen => self.emit_punct(TokenKind::ExclamationOpenBracket, 2),
            InlineStart::HardBreak => {
                let end = if self.source.byte(pos) == b'\\' {
                    pos + 1
                } else {
                    self.hard_break_spaces_end(pos).unwrap_or(pos + 1)
                };
                self.set_text_raw(pos, end);
                self.emit(TokenKind::HardLineBreak, pos, end, TokenFlags::empty())
            }
        }
    }

    fn emit_punct(&mut self, kind: TokenKind, len: usize) -> TokenKind {
        let pos = self.pos;
        self.set_text_raw(pos, pos + len);
        self.emit(kind, pos, pos + len, TokenFlags::empty())
    }

    /// Spaces and tabs after a heading's `#` run, as one `" "` token.
    fn scan_heading_separator(&mut self) -> TokenKind {
        let start = self.pos;
        let mut cursor = self.source.cursor(start);
        cursor.eat_whitespace();
        let end = cursor.pos();
        self.set_text(" ");
        self.emit(TokenKind::WhitespaceTrivia, start, end, TokenFlags::empty())
    }

    // === Delimiter runs ===

    /// `*`/`_`: two bytes of a run of two or more, otherwise one.
    fn scan_emphasis(&mut self, marker: u8) -> TokenKind {
        let start = self.pos;
        let mut cursor = self.source.cursor(start);
        let run = cursor.eat_run(marker);
        let len = run.min(2);
        let side = flanking(
            self.source.char_before(start),
            self.source.char_at(cursor.pos()),
            marker,
        );
        let kind = match (marker, len) {
            (b'*', 2) => TokenKind::AsteriskAsterisk,
            (b'*', _) => TokenKind::AsteriskToken,
            (_, 2) => TokenKind::UnderscoreUnderscore,
            _ => TokenKind::UnderscoreToken,
        };
        self.set_text_raw(start, start + len);
        self.emit(
            kind,
            start,
            start + len,
            TokenFlags::flanking(side.can_open, side.can_close),
        )
    }

    fn scan_strikethrough(&mut self) -> TokenKind {
        let start = self.pos;
        let mut cursor = self.source.cursor(start);
        cursor.eat_run(b'~');
        let side = flanking(
            self.source.char_before(start),
            self.source.char_at(cursor.pos()),
            b'~',
        );
        self.set_text("~~");
        self.emit(
            TokenKind::TildeTilde,
            start,
            start + 2,
            TokenFlags::flanking(side.can_open, side.can_close),
        )
    }

    // === Code spans ===

    /// A backtick run. When a run of the same length closes it later on the
    /// line, the scanner enters code-span mode.
    fn scan_backtick_run(&mut self) -> TokenKind {
        let start = self.pos;
        let line_end = self.current_line().info.line_end;
        let mut cursor = self.source.cursor(start);
        let run = cursor.eat_run(b'`');
        let run_end = cursor.pos();
        let kind = backtick_kind(run);
        self.set_text_raw(start, run_end);

        match self.find_closing_backticks(run_end, line_end, run) {
            Some(close) => {
                let kind = self.emit(kind, start, run_end, TokenFlags::CAN_OPEN);
                self.mode = ScanMode::CodeSpan(CodeSpanState {
                    close,
                    run,
                    content_done: false,
                });
                kind
            }
            None => self.emit(kind, start, run_end, TokenFlags::empty()),
        }
    }

    fn find_closing_backticks(&self, from: usize, line_end: usize, run: usize) -> Option<usize> {
        let mut cursor = self.source.cursor(from);
        while let Some(at) = cursor.find_byte(b'`').filter(|&at| at < line_end) {
            cursor.set_pos(at);
            let len = cursor.eat_run(b'`');
            if len == run {
                return Some(at);
            }
        }
        None
    }

    /// Content, then closer, of a code span.
    pub(crate) fn scan_code_span(&mut self, state: CodeSpanState) -> TokenKind {
        let start = self.pos;
        if !state.content_done && start < state.close {
            self.token_text.clear();
            code_span_text(self.source.slice(start, state.close), &mut self.token_text);
            self.mode = ScanMode::CodeSpan(CodeSpanState {
                content_done: true,
                ..state
            });
            return self.emit(
                TokenKind::StringLiteral,
                start,
                state.close,
                TokenFlags::empty(),
            );
        }
        let end = state.close + state.run;
        self.set_text_raw(state.close, end);
        self.mode = ScanMode::Normal;
        self.emit(
            backtick_kind(state.run),
            state.close,
            end,
            TokenFlags::CAN_CLOSE,
        )
    }

    // === Text runs ===

    /// Where a text run starting at `start` on `line` ends.
    ///
    /// The first unit is always consumed. The run stops before an inline
    /// construct or at the line end; a trailing hard-break space run is left
    /// for its own token.
    pub(crate) fn text_run_end(&self, start: usize, line: &LineState) -> usize {
        let bytes = self.source.as_bytes();
        let end = line.info.line_end;
        let mut p = start;
        while p < end {
            let b = bytes[p];
            if b == b'\\' && p + 1 < end && is_escapable(bytes[p + 1]) {
                p += 2;
                continue;
            }
            if b == b' ' {
                if p > start && self.hard_break_spaces_end(p).is_some() {
                    return p;
                }
                let mut cursor = self.source.cursor(p);
                cursor.eat_run(b' ');
                p = cursor.pos().min(end);
                continue;
            }
            if p > start && self.inline_start_at(p, line).is_some() {
                return p;
            }
            p = self.source.next_char_boundary(p).min(end);
        }
        p
    }

    /// The line after a run ending at `run_end`, when it continues the
    /// paragraph with plain text.
    fn continuation_after(&self, run_end: usize, line: &LineState) -> Option<LineState> {
        if run_end != line.info.line_end {
            return None;
        }
        let break_len = self.source.cursor(run_end).line_break_len();
        if break_len == 0 {
            return None;
        }
        let next_start = run_end + break_len;
        if next_start >= self.source.end() {
            return None;
        }
        let next = self.classify_line_at(next_start, next_start);
        if !next
            .info
            .flags
            .intersects(LineFlags::PARAGRAPH_PLAIN | LineFlags::INDENTED_CODE)
        {
            return None;
        }
        if self.inline_start_at(next.info.content_start, &next).is_some() {
            return None;
        }
        Some(next)
    }

    /// One `StringLiteral`, possibly spanning several paragraph lines.
    fn scan_text(&mut self, line: LineState) -> TokenKind {
        let start = self.pos;
        let first_end = self.text_run_end(start, &line);

        let mut last_line = line;
        let mut end = first_end;
        if line.is_paragraph_like() {
            while let Some(next) = self.continuation_after(end, &last_line) {
                if !self.spans.is_active() {
                    self.spans.begin(start);
                    self.spans.push(start, first_end);
                }
                let piece_start = next.info.content_start;
                end = self.text_run_end(piece_start, &next);
                self.spans.push(piece_start, end);
                last_line = next;
            }
        }

        let keep_leading = self
            .source
            .char_before(start)
            .is_some_and(|c| !c.is_whitespace());
        let keep_trailing = self
            .source
            .char_at(end)
            .is_some_and(|c| !c.is_whitespace());

        self.token_text.clear();
        let accumulated = self.spans.is_active();
        if accumulated {
            let (_, extent_end) = self.spans.extent().unwrap_or((start, end));
            debug_assert_eq!(extent_end, end);
            normalize_text(
                self.source.text(),
                self.spans.as_slice(),
                keep_leading,
                keep_trailing,
                &mut self.token_text,
            );
            self.spans.clear();
        } else {
            normalize_text(
                self.source.text(),
                &[(start, first_end - start)],
                keep_leading,
                keep_trailing,
                &mut self.token_text,
            );
        }

        let kind = self.emit(TokenKind::StringLiteral, start, end, TokenFlags::empty());
        if accumulated {
            self.line_state = Some(last_line);
            self.list_marker_consumed = false;
        }
        kind
    }
}

fn backtick_kind(run: usize) -> TokenKind {
    if run == 1 {
        TokenKind::BacktickToken
    } else {
        TokenKind::InlineCodeDelimiter
    }
}

#[cfg(test)]
mod tests;
