//! HTML sub-engine: tags and attributes, comment-like constructs, entities
//! and autolinks.
//!
//! A tag is scanned one token per call. `<name` switches the scanner into
//! [`ScanMode::HtmlTag`]; each later call skips trivia (spaces, tabs and
//! single line breaks) and emits one attribute name, `=`, value or closer.
//! Anything that cannot continue the tag ends tag mode and the same call
//! falls back to normal scanning.

use quill_diagnostic::ErrorCode;
use quill_ir::{TokenFlags, TokenKind};
use quill_lexer_core::char_class::{
    is_attr_name_char, is_attr_name_start, is_tag_name_char, is_tag_name_start,
    is_unquoted_value_char,
};
use quill_lexer_core::{
    collapse_whitespace, decode_attribute_value, match_entity, Cursor, EntityMatch,
};

use crate::context::{ScanMode, TagState};
use crate::Scanner;

/// HTML-like construct starting at a `<`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum HtmlStart {
    Comment,
    Cdata,
    ProcessingInstruction,
    Declaration,
    OpenTag { name_end: usize },
    CloseTag { name_end: usize },
    /// `<...>` autolink whose `>` is at `close`.
    Autolink { close: usize },
}

/// What follows the trivia inside a tag.
enum TagTrivia {
    Content { at: usize, crossed_line_break: bool },
    BlankLine,
}

impl Scanner {
    /// Which construct, if any, the `<` at `pos` opens.
    pub(crate) fn html_start_at(&self, pos: usize) -> Option<HtmlStart> {
        let cursor = self.source.cursor(pos);
        if cursor.starts_with(b"<!--") {
            return Some(HtmlStart::Comment);
        }
        if cursor.starts_with(b"<![CDATA[") {
            return Some(HtmlStart::Cdata);
        }
        if cursor.starts_with(b"<?") {
            return Some(HtmlStart::ProcessingInstruction);
        }
        if cursor.starts_with(b"<!") && cursor.peek2().is_ascii_alphabetic() {
            return Some(HtmlStart::Declaration);
        }
        if self.options.autolinks {
            if let Some(close) = self.autolink_close(pos) {
                return Some(HtmlStart::Autolink { close });
            }
        }
        if cursor.peek() == b'/' {
            let name_end = self.tag_name_end(pos + 2)?;
            return matches!(self.source.byte(name_end), b' ' | b'\t' | b'\n' | b'\r' | b'>')
                .then_some(HtmlStart::CloseTag { name_end });
        }
        let name_end = self.tag_name_end(pos + 1)?;
        let ends_name = match self.source.byte(name_end) {
            b' ' | b'\t' | b'\n' | b'\r' | b'>' => true,
            b'/' => self.source.byte(name_end + 1) == b'>',
            _ => false,
        };
        ends_name.then_some(HtmlStart::OpenTag { name_end })
    }

    fn tag_name_end(&self, from: usize) -> Option<usize> {
        if !is_tag_name_start(self.source.byte(from)) {
            return None;
        }
        let mut cursor = self.source.cursor(from);
        cursor.eat_while(is_tag_name_char);
        Some(cursor.pos())
    }

    /// Offset of the `>` closing an autolink at `pos`.
    fn autolink_close(&self, pos: usize) -> Option<usize> {
        let cursor = self.source.cursor(pos + 1);
        let close = cursor.find_line_break_or(b'>')?;
        if self.source.byte(close) != b'>' {
            return None;
        }
        let inner = &self.source.as_bytes()[pos + 1..close];
        (is_uri_autolink(inner) || is_email_autolink(inner)).then_some(close)
    }

    pub(crate) fn scan_html(&mut self, start: HtmlStart) -> TokenKind {
        let pos = self.pos;
        match start {
            HtmlStart::Comment => self.scan_delimited(
                TokenKind::HtmlComment,
                (2, 4),
                b"-->",
                ErrorCode::M0001,
            ),
            HtmlStart::Cdata => {
                self.scan_delimited(TokenKind::HtmlCdata, (9, 9), b"]]>", ErrorCode::M0002)
            }
            HtmlStart::ProcessingInstruction => self.scan_delimited(
                TokenKind::HtmlProcessingInstruction,
                (2, 2),
                b"?>",
                ErrorCode::M0003,
            ),
            HtmlStart::Declaration => {
                self.scan_delimited(TokenKind::HtmlDoctype, (2, 2), b">", ErrorCode::M0004)
            }
            HtmlStart::OpenTag { name_end } => {
                self.set_text_raw(pos + 1, name_end);
                let kind = self.emit(TokenKind::HtmlTagOpenName, pos, name_end, TokenFlags::empty());
                self.mode = ScanMode::HtmlTag(TagState::new(pos, false));
                kind
            }
            HtmlStart::CloseTag { name_end } => {
                self.set_text_raw(pos + 2, name_end);
                let kind =
                    self.emit(TokenKind::HtmlTagCloseName, pos, name_end, TokenFlags::empty());
                self.mode = ScanMode::HtmlTag(TagState::new(pos, true));
                kind
            }
            HtmlStart::Autolink { close } => {
                self.set_text_raw(pos + 1, close);
                self.emit(TokenKind::Autolink, pos, close + 1, TokenFlags::empty())
            }
        }
    }

    /// A construct ended by `terminator`, raw text included.
    ///
    /// `search_from` and `body` are offsets from the `<`: where the
    /// terminator may start, and where the unterminated fallback looks for
    /// the first line break or `<`. The terminator must come before the next
    /// blank line, and for declarations before the next `<`.
    fn scan_delimited(
        &mut self,
        kind: TokenKind,
        (search_from, body): (usize, usize),
        terminator: &[u8],
        code: ErrorCode,
    ) -> TokenKind {
        let start = self.pos;
        let mut limit = self.blank_line_limit(start + body);
        if kind == TokenKind::HtmlDoctype {
            if let Some(lt) = self.source.cursor(start + body).find_byte(b'<') {
                limit = limit.min(lt);
            }
        }
        let search = Cursor::new(self.source.as_bytes(), start + search_from, limit);
        if let Some(at) = search.find(terminator) {
            let end = at + terminator.len();
            self.set_text_raw(start, end);
            return self.emit(kind, start, end, TokenFlags::empty());
        }
        let end = self
            .source
            .cursor(start + body)
            .find_line_break_or(b'<')
            .unwrap_or(self.source.end());
        self.set_text_raw(start, end);
        self.report(code, start, end);
        self.emit(
            kind,
            start,
            end,
            TokenFlags::UNTERMINATED | TokenFlags::HAS_SCAN_ERROR,
        )
    }

    /// Offset of the line break that ends the last line before the first
    /// blank line after `from`, or the range end.
    fn blank_line_limit(&self, from: usize) -> usize {
        let mut cursor = self.source.cursor(from);
        while let Some(brk) = cursor.find_line_break() {
            cursor.set_pos(brk);
            cursor.advance_n(cursor.line_break_len());
            cursor.eat_whitespace();
            if cursor.is_eof() || cursor.at_line_break() {
                return brk;
            }
        }
        self.source.end()
    }

    // === Tag mode ===

    /// One token inside a tag, or `None` when tag mode ended without one
    /// and normal scanning should take over.
    pub(crate) fn scan_tag_content(&mut self, mut state: TagState) -> Option<TokenKind> {
        let (at, crossed) = match self.skip_tag_trivia(self.pos) {
            TagTrivia::Content {
                at,
                crossed_line_break,
            } => (at, crossed_line_break),
            TagTrivia::BlankLine => {
                self.report(ErrorCode::M0005, state.tag_start, self.pos);
                self.mode = ScanMode::Normal;
                return None;
            }
        };
        let leading = if crossed {
            TokenFlags::PRECEDING_LINE_BREAK
        } else {
            TokenFlags::empty()
        };

        if at >= self.source.end() {
            self.report(ErrorCode::M0005, state.tag_start, at);
            return Some(self.finish_at_eof());
        }

        let b = self.source.byte(at);
        if state.expect_value {
            state.expect_value = false;
            if b == b'"' || b == b'\'' {
                return Some(self.scan_quoted_value(at, b, state, leading));
            }
            if is_unquoted_value_char(b) {
                return Some(self.scan_unquoted_value(at, state, leading));
            }
        }

        match b {
            b'>' => Some(self.emit_tag_closer(TokenKind::GreaterThanToken, at, leading)),
            b'/' if self.source.byte(at + 1) == b'>' && !state.closing => {
                Some(self.emit_tag_closer(TokenKind::SlashGreaterThanToken, at, leading))
            }
            b'=' if state.after_name => Some(self.scan_attribute_equals(at, state, leading)),
            _ if is_attr_name_start(b) && !state.closing => {
                let mut cursor = self.source.cursor(at);
                cursor.eat_while(is_attr_name_char);
                let end = cursor.pos();
                self.set_text_raw(at, end);
                state.after_name = true;
                self.mode = ScanMode::HtmlTag(state);
                Some(self.emit(TokenKind::HtmlAttributeName, at, end, leading))
            }
            _ => {
                let end = self.source.next_char_boundary(at);
                self.report(ErrorCode::M0008, at, end);
                self.mode = ScanMode::Normal;
                None
            }
        }
    }

    /// Skip spaces, tabs and single line breaks inside a tag.
    fn skip_tag_trivia(&self, from: usize) -> TagTrivia {
        let mut cursor = self.source.cursor(from);
        let mut crossed_line_break = false;
        loop {
            cursor.eat_whitespace();
            let len = cursor.line_break_len();
            if len == 0 {
                return TagTrivia::Content {
                    at: cursor.pos(),
                    crossed_line_break,
                };
            }
            cursor.advance_n(len);
            let mut ahead = cursor;
            ahead.eat_whitespace();
            if ahead.is_eof() || ahead.at_line_break() {
                return TagTrivia::BlankLine;
            }
            crossed_line_break = true;
        }
    }

    fn emit_tag_closer(&mut self, kind: TokenKind, at: usize, flags: TokenFlags) -> TokenKind {
        let end = if kind == TokenKind::SlashGreaterThanToken {
            at + 2
        } else {
            at + 1
        };
        self.set_text_raw(at, end);
        self.mode = ScanMode::Normal;
        self.emit(kind, at, end, flags)
    }

    /// `=` after an attribute name. A `=` with no value before the closer
    /// or EOF becomes trivia of the closer.
    fn scan_attribute_equals(
        &mut self,
        at: usize,
        mut state: TagState,
        leading: TokenFlags,
    ) -> TokenKind {
        if let TagTrivia::Content {
            at: next,
            crossed_line_break,
        } = self.skip_tag_trivia(at + 1)
        {
            let flags = if crossed_line_break {
                leading | TokenFlags::PRECEDING_LINE_BREAK
            } else {
                leading
            };
            if next >= self.source.end() {
                self.report(ErrorCode::M0006, at, at + 1);
                self.report(ErrorCode::M0005, state.tag_start, next);
                return self.finish_at_eof();
            }
            let closer = match self.source.byte(next) {
                b'>' => Some(TokenKind::GreaterThanToken),
                b'/' if self.source.byte(next + 1) == b'>' && !state.closing => {
                    Some(TokenKind::SlashGreaterThanToken)
                }
                _ => None,
            };
            if let Some(kind) = closer {
                self.report(ErrorCode::M0006, at, at + 1);
                return self.emit_tag_closer(kind, next, flags | TokenFlags::HAS_SCAN_ERROR);
            }
        }

        state.after_name = false;
        state.expect_value = true;
        self.mode = ScanMode::HtmlTag(state);
        self.set_text("=");
        self.emit(TokenKind::EqualsToken, at, at + 1, leading)
    }

    fn scan_quoted_value(
        &mut self,
        at: usize,
        quote: u8,
        mut state: TagState,
        leading: TokenFlags,
    ) -> TokenKind {
        state.after_name = false;
        self.mode = ScanMode::HtmlTag(state);
        let body = at + 1;
        if let Some(close) = self.closing_quote(body, quote) {
            self.decode_value(body, close, false);
            return self.emit(TokenKind::HtmlAttributeValue, at, close + 1, leading);
        }
        let stop = self
            .source
            .cursor(body)
            .find_line_break_or(b'>')
            .unwrap_or(self.source.end());
        self.decode_value(body, stop, false);
        self.report(ErrorCode::M0007, at, stop);
        self.emit(
            TokenKind::HtmlAttributeValue,
            at,
            stop,
            leading | TokenFlags::UNTERMINATED | TokenFlags::HAS_SCAN_ERROR,
        )
    }

    /// The matching quote, unless a blank line comes first.
    fn closing_quote(&self, body: usize, quote: u8) -> Option<usize> {
        let close = self.source.cursor(body).find_byte(quote)?;
        (close < self.blank_line_limit(body)).then_some(close)
    }

    fn scan_unquoted_value(&mut self, at: usize, mut state: TagState, leading: TokenFlags) -> TokenKind {
        state.after_name = false;
        self.mode = ScanMode::HtmlTag(state);
        let mut cursor = self.source.cursor(at);
        cursor.eat_while(is_unquoted_value_char);
        let end = cursor.pos();
        self.decode_value(at, end, true);
        self.emit(TokenKind::HtmlAttributeValue, at, end, leading)
    }

    /// Decode `[start, end)` into the token text. Unquoted values also get
    /// their whitespace collapsed and trimmed.
    fn decode_value(&mut self, start: usize, end: usize, unquoted: bool) {
        self.token_text.clear();
        let raw = self.source.slice(start, end);
        if unquoted {
            self.scratch.clear();
            decode_attribute_value(raw, &mut self.scratch);
            collapse_whitespace(&self.scratch, &mut self.token_text);
        } else {
            decode_attribute_value(raw, &mut self.token_text);
        }
    }

    // === Entities ===

    pub(crate) fn scan_ampersand(&mut self) -> TokenKind {
        let start = self.pos;
        let found = match_entity(&self.source.as_bytes()[start..self.source.end()]);
        match found {
            EntityMatch::Decoded { len, ch } => {
                self.token_text.clear();
                self.token_text.push(ch);
                self.emit(TokenKind::HtmlEntity, start, start + len, TokenFlags::empty())
            }
            EntityMatch::Malformed { len } => {
                self.report(ErrorCode::M0009, start, start + len);
                self.set_text("&");
                self.emit(
                    TokenKind::AmpersandToken,
                    start,
                    start + 1,
                    TokenFlags::HAS_SCAN_ERROR,
                )
            }
            EntityMatch::NotEntity => {
                self.set_text("&");
                self.emit(TokenKind::AmpersandToken, start, start + 1, TokenFlags::empty())
            }
        }
    }
}

/// `scheme:rest` with a 2-32 character scheme and no spaces, controls or
/// angle brackets in the rest.
fn is_uri_autolink(inner: &[u8]) -> bool {
    let Some(colon) = memchr::memchr(b':', inner) else {
        return false;
    };
    let (scheme, rest) = (&inner[..colon], &inner[colon + 1..]);
    (2..=32).contains(&scheme.len())
        && scheme[0].is_ascii_alphabetic()
        && scheme[1..]
            .iter()
            .all(|&b| b.is_ascii_alphanumeric() || matches!(b, b'+' | b'.' | b'-'))
        && rest.iter().all(|&b| b > b' ' && b != b'<' && b != b'>')
}

/// `local@domain` with dot-separated alphanumeric labels.
fn is_email_autolink(inner: &[u8]) -> bool {
    let Some(at) = memchr::memchr(b'@', inner) else {
        return false;
    };
    let (local, domain) = (&inner[..at], &inner[at + 1..]);
    let local_ok = !local.is_empty()
        && local
            .iter()
            .all(|&b| b.is_ascii_alphanumeric() || b".!#$%&'*+/=?^_`{|}~-".contains(&b));
    local_ok
        && !domain.is_empty()
        && domain.split(|&b| b == b'.').all(|label| {
            (1..=63).contains(&label.len())
                && label.iter().all(|&b| b.is_ascii_alphanumeric() || b == b'-')
                && label.first() != Some(&b'-')
                && label.last() != Some(&b'-')
        })
}
