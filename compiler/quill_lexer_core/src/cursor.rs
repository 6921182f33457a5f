//! Bounded byte cursor over a borrowed buffer.
//!
//! The cursor advances byte-by-byte and never reads past `end`. Reads at or
//! beyond `end` return `0x00`, so lookahead code can compare against byte
//! literals without bounds checks of its own.
//!
//! # Interior Null Bytes
//!
//! A null inside the range is returned as `0x00` too; use
//! [`is_eof()`](Cursor::is_eof) to tell the two apart.

/// Byte cursor over `buf[..end]`.
///
/// Created via [`SourceBuffer::cursor()`](crate::SourceBuffer::cursor).
/// The cursor is [`Copy`], enabling cheap state snapshots for lookahead.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    buf: &'a [u8],
    /// Current read position (byte index into `buf`).
    pos: usize,
    /// Exclusive upper bound; never past `buf.len()`.
    end: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at `pos`, bounded by `end` (clamped to the buffer).
    pub fn new(buf: &'a [u8], pos: usize, end: usize) -> Self {
        let end = end.min(buf.len());
        Self {
            buf,
            pos: pos.min(end),
            end,
        }
    }

    /// Returns the byte at the current position, `0x00` at EOF.
    #[inline]
    pub fn current(&self) -> u8 {
        self.byte_at(self.pos)
    }

    /// Returns the byte one position ahead of current.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.byte_at(self.pos + 1)
    }

    /// Returns the byte two positions ahead of current.
    #[inline]
    pub fn peek2(&self) -> u8 {
        self.byte_at(self.pos + 2)
    }

    /// Returns the byte at an absolute position, `0x00` outside the range.
    #[inline]
    fn byte_at(&self, pos: usize) -> u8 {
        if pos < self.end {
            self.buf[pos]
        } else {
            0
        }
    }

    /// Advance by `n` bytes, stopping at EOF.
    #[inline]
    pub fn advance_n(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.end);
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.end
    }

    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Move to an absolute position (clamped to the range).
    #[inline]
    pub fn set_pos(&mut self, pos: usize) {
        self.pos = pos.min(self.end);
    }

    /// Check whether the bytes at the current position start with `prefix`.
    #[inline]
    pub fn starts_with(&self, prefix: &[u8]) -> bool {
        self.buf[self.pos..self.end].starts_with(prefix)
    }

    /// Consume bytes while `pred` holds. Returns the number consumed.
    #[inline]
    pub fn eat_while(&mut self, mut pred: impl FnMut(u8) -> bool) -> usize {
        let start = self.pos;
        while self.pos < self.end && pred(self.buf[self.pos]) {
            self.pos += 1;
        }
        self.pos - start
    }

    /// Consume a run of `byte`. Returns the run length.
    #[inline]
    pub fn eat_run(&mut self, byte: u8) -> usize {
        self.eat_while(|b| b == byte)
    }

    /// Consume spaces and tabs. Returns the number consumed.
    #[inline]
    pub fn eat_whitespace(&mut self) -> usize {
        self.eat_while(|b| b == b' ' || b == b'\t')
    }

    /// Check whether the current byte is `\n` or `\r`.
    #[inline]
    pub fn at_line_break(&self) -> bool {
        matches!(self.current(), b'\n' | b'\r')
    }

    /// Length of the line break at the current position: 2 for CRLF, 1 for a
    /// lone `\n` or `\r`, 0 when not at a line break.
    #[inline]
    pub fn line_break_len(&self) -> usize {
        match self.current() {
            b'\r' if self.peek() == b'\n' => 2,
            b'\n' | b'\r' => 1,
            _ => 0,
        }
    }

    /// Absolute position of the next `\n` or `\r` at or after the cursor.
    #[inline]
    pub fn find_line_break(&self) -> Option<usize> {
        memchr::memchr2(b'\n', b'\r', &self.buf[self.pos..self.end]).map(|off| self.pos + off)
    }

    /// Absolute position of the next occurrence of `byte`.
    #[inline]
    pub fn find_byte(&self, byte: u8) -> Option<usize> {
        memchr::memchr(byte, &self.buf[self.pos..self.end]).map(|off| self.pos + off)
    }

    /// Absolute position of the next occurrence of `needle`.
    #[inline]
    pub fn find(&self, needle: &[u8]) -> Option<usize> {
        memchr::memmem::find(&self.buf[self.pos..self.end], needle).map(|off| self.pos + off)
    }

    /// Absolute position of the next line break or `stop` byte.
    #[inline]
    pub fn find_line_break_or(&self, stop: u8) -> Option<usize> {
        memchr::memchr3(b'\n', b'\r', stop, &self.buf[self.pos..self.end])
            .map(|off| self.pos + off)
    }
}
