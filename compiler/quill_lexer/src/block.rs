//! Line-start sub-scanners: indentation, blank lines and block markers.

use quill_ir::{TokenFlags, TokenKind};
use quill_lexer_core::LineFlags;

use crate::context::ContextFlags;
use crate::scanner::LineState;
use crate::Scanner;

impl Scanner {
    /// Scan structure at or before the content start of `line`.
    ///
    /// Returns `None` when the position holds inline content.
    pub(crate) fn scan_line_structure(&mut self, line: LineState) -> Option<TokenKind> {
        let info = line.info;
        let flags = info.flags;
        let pos = self.pos;

        if flags.contains(LineFlags::BLANK_LINE) {
            // After a lone `>` the rest classifies blank; the line does not.
            let blank = if self.is_whitespace_only(&line) {
                TokenFlags::IS_BLANK_LINE
            } else {
                TokenFlags::empty()
            };
            self.set_text_raw(pos, info.line_end);
            return Some(self.emit(TokenKind::WhitespaceTrivia, pos, info.line_end, blank));
        }

        // Indented code only when no paragraph is open; otherwise the line
        // is a lazy continuation and scanned as text after its indentation.
        if flags.contains(LineFlags::INDENTED_CODE)
            && !self.context.contains(ContextFlags::IN_PARAGRAPH)
        {
            self.set_text_raw(pos, info.line_end);
            return Some(self.emit(
                TokenKind::StringLiteral,
                pos,
                info.line_end,
                TokenFlags::empty(),
            ));
        }

        if pos < info.content_start {
            self.set_text_raw(pos, info.content_start);
            return Some(self.emit(
                TokenKind::WhitespaceTrivia,
                pos,
                info.content_start,
                TokenFlags::empty(),
            ));
        }

        if flags.contains(LineFlags::ATX_HEADING) {
            return Some(self.emit_block_marker(TokenKind::HashToken, info.marker_end));
        }
        if flags.contains(LineFlags::THEMATIC_BREAK) {
            return Some(self.emit_block_marker(TokenKind::ThematicBreak, info.line_end));
        }
        if flags.contains(LineFlags::FENCED_CODE_OPEN) {
            return Some(self.emit_block_marker(TokenKind::CodeFence, info.line_end));
        }
        if flags.contains(LineFlags::BLOCKQUOTE_MARKER) {
            return Some(self.scan_blockquote_marker(line));
        }
        if flags.intersects(LineFlags::LIST_UNORDERED_MARKER | LineFlags::LIST_ORDERED_MARKER)
            && !self.list_marker_consumed
        {
            return Some(self.scan_list_marker(line));
        }
        if flags.contains(LineFlags::MATH_BLOCK) {
            self.set_text("$$");
            let kind = self.emit(
                TokenKind::MathBlockDelimiter,
                pos,
                pos + 2,
                TokenFlags::empty(),
            );
            self.end_paragraph();
            return Some(kind);
        }
        None
    }

    /// One raw token from `pos` to `end` that closes any open paragraph.
    fn emit_block_marker(&mut self, kind: TokenKind, end: usize) -> TokenKind {
        let start = self.pos;
        self.set_text_raw(start, end);
        let kind = self.emit(kind, start, end, TokenFlags::empty());
        self.end_paragraph();
        kind
    }

    /// `>` plus one optional space, then re-classify the rest of the line.
    fn scan_blockquote_marker(&mut self, line: LineState) -> TokenKind {
        let start = self.pos;
        let end = line.info.marker_end;
        self.set_text(">");
        let kind = self.emit(TokenKind::GreaterThanToken, start, end, TokenFlags::empty());
        self.line_state = Some(self.classify_line_at(line.line_start, end));
        kind
    }

    /// Bullet or digits plus separator; the token text is the bullet or
    /// digits only.
    fn scan_list_marker(&mut self, line: LineState) -> TokenKind {
        let start = self.pos;
        let (kind, text_end) = if line.info.flags.contains(LineFlags::LIST_ORDERED_MARKER) {
            let mut cursor = self.source.cursor(start);
            cursor.eat_while(|b| b.is_ascii_digit());
            (TokenKind::ListMarkerOrdered, cursor.pos())
        } else {
            (TokenKind::ListMarkerUnordered, start + 1)
        };
        self.set_text_raw(start, text_end);
        let kind = self.emit(kind, start, line.info.marker_end, TokenFlags::empty());
        self.list_marker_consumed = true;
        self.end_paragraph();
        kind
    }
}
