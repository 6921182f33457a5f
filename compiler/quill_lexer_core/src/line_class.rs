//! One-pass structural classification of a single line.
//!
//! The classifier answers "what could this line start?" without knowing
//! anything about the lines around it. The scanner caches the answer until
//! it moves to another line, and re-runs it after a blockquote marker so the
//! rest of the line is classified on its own.
//!
//! Precedence: blank > indented code > line-start marker (`#`, thematic
//! break before list for `- * _`, `+`, fences, `>`, `$$`) > ordered list >
//! table heuristics > setext underline > paragraph.

use bitflags::bitflags;

use crate::char_class::is_space_or_tab;

bitflags! {
    /// What a line may start, as far as one line can tell.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct LineFlags: u16 {
        /// Only spaces and tabs before the line break.
        const BLANK_LINE = 1 << 0;
        /// Four or more columns of indentation.
        const INDENTED_CODE = 1 << 1;
        const ATX_HEADING = 1 << 2;
        const THEMATIC_BREAK = 1 << 3;
        const FENCED_CODE_OPEN = 1 << 4;
        const BLOCKQUOTE_MARKER = 1 << 5;
        const LIST_UNORDERED_MARKER = 1 << 6;
        const LIST_ORDERED_MARKER = 1 << 7;
        /// `$$` at the content start.
        const MATH_BLOCK = 1 << 8;
        const TABLE_ALIGNMENT_ROW = 1 << 9;
        const TABLE_PIPE_HEADER_CANDIDATE = 1 << 10;
        const SETEXT_UNDERLINE_CANDIDATE = 1 << 11;
        /// Nothing structural: ordinary paragraph text.
        const PARAGRAPH_PLAIN = 1 << 12;
    }
}

/// Classifier settings derived from the scanner options.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LineConfig {
    /// Longest `#` run that still opens an ATX heading (1..=6).
    pub max_heading_level: u8,
    /// Recognise `$$` lines.
    pub math_blocks: bool,
}

impl Default for LineConfig {
    fn default() -> Self {
        LineConfig {
            max_heading_level: 6,
            math_blocks: true,
        }
    }
}

/// Classification of one line.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LineInfo {
    pub flags: LineFlags,
    /// First byte after the indentation.
    pub content_start: usize,
    /// Offset of the line break, or the range end.
    pub line_end: usize,
    /// Indentation width in columns (tabs advance to the next multiple of 4).
    pub indent: usize,
    /// End of the line-start marker: the `#` run, list marker plus separator,
    /// `>` plus one optional space, or `$$`. Equals `content_start` for lines
    /// without a marker and `line_end` for fences and thematic breaks.
    pub marker_end: usize,
}

/// Classify the line starting at `line_start`, looking no further than `end`.
pub fn classify_line(bytes: &[u8], line_start: usize, end: usize, config: LineConfig) -> LineInfo {
    let end = end.min(bytes.len());
    let line_start = line_start.min(end);
    let line_end = memchr::memchr2(b'\n', b'\r', &bytes[line_start..end])
        .map_or(end, |off| line_start + off);
    let line = &bytes[..line_end];

    let mut p = line_start;
    let mut col = 0;
    while p < line_end {
        match line[p] {
            b' ' => col += 1,
            b'\t' => col += 4 - col % 4,
            _ => break,
        }
        p += 1;
    }

    let info = |flags: LineFlags, marker_end: usize| LineInfo {
        flags,
        content_start: p,
        line_end,
        indent: col,
        marker_end,
    };

    if p == line_end {
        return info(LineFlags::BLANK_LINE, p);
    }
    if col >= 4 {
        return info(LineFlags::INDENTED_CODE, p);
    }

    let first = line[p];
    match first {
        b'#' => {
            if let Some(marker_end) = atx_heading(line, p, config.max_heading_level) {
                return info(LineFlags::ATX_HEADING, marker_end);
            }
        }
        b'-' | b'*' | b'_' => {
            if is_thematic_break(line, p, first) {
                return info(LineFlags::THEMATIC_BREAK, line_end);
            }
            if first != b'_' {
                if let Some(marker_end) = list_marker_end(line, p + 1, col + 1) {
                    return info(LineFlags::LIST_UNORDERED_MARKER, marker_end);
                }
            }
        }
        b'+' => {
            if let Some(marker_end) = list_marker_end(line, p + 1, col + 1) {
                return info(LineFlags::LIST_UNORDERED_MARKER, marker_end);
            }
        }
        b'`' | b'~' => {
            if is_fence(line, p, first) {
                return info(LineFlags::FENCED_CODE_OPEN, line_end);
            }
        }
        b'>' => {
            let marker_end = if line.get(p + 1).copied().is_some_and(is_space_or_tab) {
                p + 2
            } else {
                p + 1
            };
            return info(LineFlags::BLOCKQUOTE_MARKER, marker_end);
        }
        b'$' if config.math_blocks && line.get(p + 1) == Some(&b'$') => {
            return info(LineFlags::MATH_BLOCK, p + 2);
        }
        _ => {}
    }

    if first.is_ascii_digit() {
        let digits = line[p..].iter().take(10).take_while(|b| b.is_ascii_digit()).count();
        if digits <= 9 && matches!(line.get(p + digits), Some(b'.' | b')')) {
            if let Some(marker_end) = list_marker_end(line, p + digits + 1, col + digits + 1) {
                return info(LineFlags::LIST_ORDERED_MARKER, marker_end);
            }
        }
    }

    if let Some(flags) = table_flags(&line[p..]) {
        return info(flags, p);
    }
    if is_setext_underline(&line[p..]) {
        return info(LineFlags::SETEXT_UNDERLINE_CANDIDATE, p);
    }
    info(LineFlags::PARAGRAPH_PLAIN, p)
}

/// `#` run of 1..=max followed by space, tab or end of line.
fn atx_heading(line: &[u8], p: usize, max_level: u8) -> Option<usize> {
    let run = line[p..].iter().take_while(|&&b| b == b'#').count();
    let max = usize::from(max_level.clamp(1, 6));
    let after = p + run;
    if run <= max && (after == line.len() || is_space_or_tab(line[after])) {
        Some(after)
    } else {
        None
    }
}

/// Three or more `marker` bytes with nothing but spaces and tabs between.
fn is_thematic_break(line: &[u8], p: usize, marker: u8) -> bool {
    let mut count = 0;
    for &b in &line[p..] {
        if b == marker {
            count += 1;
        } else if !is_space_or_tab(b) {
            return false;
        }
    }
    count >= 3
}

/// End of a list marker whose bullet/delimiter ends just before `after`.
///
/// The marker must be followed by space, tab or end of line. The separator
/// counts as part of the marker up to 4 columns; with 5 or more only one
/// column does, the rest being indented content.
fn list_marker_end(line: &[u8], after: usize, col_after: usize) -> Option<usize> {
    if after == line.len() {
        return Some(after);
    }
    if !is_space_or_tab(line[after]) {
        return None;
    }
    let mut q = after;
    let mut col = col_after;
    while q < line.len() && is_space_or_tab(line[q]) {
        col += if line[q] == b'\t' { 4 - col % 4 } else { 1 };
        q += 1;
    }
    if q == line.len() || col - col_after <= 4 {
        Some(q)
    } else {
        Some(after + 1)
    }
}

/// Three or more backticks or tildes; a backtick fence's info string may not
/// contain a backtick.
fn is_fence(line: &[u8], p: usize, marker: u8) -> bool {
    let run = line[p..].iter().take_while(|&&b| b == marker).count();
    if run < 3 {
        return false;
    }
    marker != b'`' || memchr::memchr(b'`', &line[p + run..]).is_none()
}

fn table_flags(content: &[u8]) -> Option<LineFlags> {
    memchr::memchr(b'|', content)?;
    if is_alignment_row(content) {
        Some(LineFlags::TABLE_ALIGNMENT_ROW)
    } else if has_unescaped_pipe(content) {
        Some(LineFlags::TABLE_PIPE_HEADER_CANDIDATE)
    } else {
        None
    }
}

/// Cells of `:?-+:?` separated by `|`, outer pipes optional.
fn is_alignment_row(content: &[u8]) -> bool {
    let mut row = trim_trailing_space(content);
    if let Some(rest) = row.strip_prefix(b"|") {
        row = rest;
    }
    if let Some(rest) = row.strip_suffix(b"|") {
        row = rest;
    }
    !row.is_empty() && row.split(|&b| b == b'|').all(is_alignment_cell)
}

fn is_alignment_cell(cell: &[u8]) -> bool {
    let mut cell = trim_trailing_space(cell);
    while let Some((&first, rest)) = cell.split_first() {
        if !is_space_or_tab(first) {
            break;
        }
        cell = rest;
    }
    let cell = cell.strip_prefix(b":").unwrap_or(cell);
    let cell = cell.strip_suffix(b":").unwrap_or(cell);
    !cell.is_empty() && cell.iter().all(|&b| b == b'-')
}

fn has_unescaped_pipe(content: &[u8]) -> bool {
    content
        .iter()
        .enumerate()
        .any(|(i, &b)| b == b'|' && (i == 0 || content[i - 1] != b'\\'))
}

/// Only `=` or only `-`, then trailing whitespace.
fn is_setext_underline(content: &[u8]) -> bool {
    let body = trim_trailing_space(content);
    match body.first() {
        Some(&marker @ (b'=' | b'-')) => body.iter().all(|&b| b == marker),
        _ => false,
    }
}

fn trim_trailing_space(mut bytes: &[u8]) -> &[u8] {
    while let Some((&last, rest)) = bytes.split_last() {
        if !is_space_or_tab(last) {
            break;
        }
        bytes = rest;
    }
    bytes
}

#[cfg(test)]
mod tests;
