//! Reusable owned source text with a scanned sub-range.
//!
//! The scanner is bound to new text many times over its life (every edit in
//! an editor). [`SourceBuffer::reset`] copies the text into the existing
//! allocation instead of allocating a fresh buffer.
//!
//! All positions are absolute byte offsets into the whole text; the range
//! `[start, end)` only limits what is scanned. Both bounds are always on
//! `char` boundaries.

use crate::Cursor;

/// Line breaks found between two offsets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LineBreaks {
    /// Number of line breaks (`\r\n` counts once).
    pub count: usize,
    /// Offset just past the last line break, if any.
    pub last_line_start: Option<usize>,
}

/// Owned copy of the bound text plus the range being scanned.
#[derive(Clone, Debug, Default)]
pub struct SourceBuffer {
    text: String,
    start: usize,
    end: usize,
}

impl SourceBuffer {
    /// Create a buffer over the whole of `text`.
    pub fn new(text: &str) -> Self {
        let mut buf = SourceBuffer::default();
        buf.reset(text, 0, text.len());
        buf
    }

    /// Replace the text and range, reusing the allocation.
    ///
    /// The range is clamped to the text and widened to whole characters:
    /// the start moves back and the end forward to the nearest `char`
    /// boundary.
    pub fn reset(&mut self, text: &str, start: usize, length: usize) {
        self.text.clear();
        self.text.push_str(text);
        let requested_end = start.saturating_add(length).min(text.len());
        let start = floor_char_boundary(text, start.min(text.len()));
        let end = ceil_char_boundary(text, requested_end);
        self.start = start;
        self.end = end.max(start);
    }

    /// The whole bound text.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Start of the scanned range.
    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    /// End of the scanned range (exclusive).
    #[inline]
    pub fn end(&self) -> usize {
        self.end
    }

    /// Byte at `pos`, `0x00` at or past the range end.
    #[inline]
    pub fn byte(&self, pos: usize) -> u8 {
        if pos < self.end {
            self.text.as_bytes()[pos]
        } else {
            0
        }
    }

    /// Text between two offsets, empty when the offsets are not valid
    /// boundaries.
    #[inline]
    pub fn slice(&self, start: usize, end: usize) -> &str {
        self.text.get(start..end).unwrap_or("")
    }

    #[inline]
    pub fn is_char_boundary(&self, pos: usize) -> bool {
        self.text.is_char_boundary(pos)
    }

    /// The character starting at `pos`, `None` at the range end.
    #[inline]
    pub fn char_at(&self, pos: usize) -> Option<char> {
        if pos >= self.end {
            return None;
        }
        self.text.get(pos..self.end)?.chars().next()
    }

    /// The character ending at `pos`, `None` at the range start.
    #[inline]
    pub fn char_before(&self, pos: usize) -> Option<char> {
        if pos <= self.start {
            return None;
        }
        self.text.get(self.start..pos)?.chars().next_back()
    }

    /// Offset just past the character at `pos` (the range end at EOF).
    #[inline]
    pub fn next_char_boundary(&self, pos: usize) -> usize {
        self.char_at(pos).map_or(self.end, |c| pos + c.len_utf8())
    }

    /// Check whether `pos` begins a line: the range start, or directly after
    /// a `\n` or `\r`.
    #[inline]
    pub fn is_line_start(&self, pos: usize) -> bool {
        pos == self.start
            || (pos > self.start && matches!(self.text.as_bytes()[pos - 1], b'\n' | b'\r'))
    }

    /// Cursor positioned at `pos`, bounded by the range end.
    #[inline]
    pub fn cursor(&self, pos: usize) -> Cursor<'_> {
        Cursor::new(self.text.as_bytes(), pos, self.end)
    }

    /// Count the line breaks in `[from, to)`.
    ///
    /// A `\r` directly followed by `\n` inside the range counts once.
    pub fn line_breaks(&self, from: usize, to: usize) -> LineBreaks {
        let bytes = self.text.as_bytes();
        let to = to.min(bytes.len());
        let mut breaks = LineBreaks::default();
        let mut i = from;
        while i < to {
            let Some(off) = memchr::memchr2(b'\n', b'\r', &bytes[i..to]) else {
                break;
            };
            let at = i + off;
            let next = if bytes[at] == b'\r' && at + 1 < to && bytes[at + 1] == b'\n' {
                at + 2
            } else {
                at + 1
            };
            breaks.count += 1;
            breaks.last_line_start = Some(next);
            i = next;
        }
        breaks
    }

    /// Zero-based line number of `pos` and the offset its line starts at,
    /// computed by a linear scan from the start of the text.
    pub fn line_of(&self, pos: usize) -> (usize, usize) {
        let breaks = self.line_breaks(0, pos);
        (breaks.count, breaks.last_line_start.unwrap_or(0))
    }
}

/// Largest `char` boundary at or below `pos`.
fn floor_char_boundary(text: &str, mut pos: usize) -> usize {
    while pos > 0 && !text.is_char_boundary(pos) {
        pos -= 1;
    }
    pos
}

/// Smallest `char` boundary at or above `pos` (at most `text.len()`).
fn ceil_char_boundary(text: &str, mut pos: usize) -> usize {
    while pos < text.len() && !text.is_char_boundary(pos) {
        pos += 1;
    }
    pos
}

#[cfg(test)]
mod tests;
