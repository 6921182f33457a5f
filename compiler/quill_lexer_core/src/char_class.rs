//! Character classification.
//!
//! Byte predicates cover the ASCII structure of markdown and HTML; the
//! `char` predicates feed the delimiter flanking rules.

/// Flanking class of the character on one side of a delimiter run.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CharClass {
    /// Unicode whitespace, a line boundary, or the edge of the range.
    Whitespace,
    /// ASCII punctuation or a Unicode punctuation/symbol character.
    Punctuation,
    Other,
}

impl CharClass {
    /// Classify an optional neighbour; `None` (range edge) counts as
    /// whitespace.
    #[inline]
    pub fn of(c: Option<char>) -> CharClass {
        match c {
            None => CharClass::Whitespace,
            Some(c) if c.is_whitespace() => CharClass::Whitespace,
            Some(c) if is_punctuation(c) => CharClass::Punctuation,
            Some(_) => CharClass::Other,
        }
    }
}

/// Space or tab.
#[inline]
pub fn is_space_or_tab(b: u8) -> bool {
    b == b' ' || b == b'\t'
}

/// `\n` or `\r`.
#[inline]
pub fn is_line_break(b: u8) -> bool {
    b == b'\n' || b == b'\r'
}

/// Bytes a backslash may escape.
#[inline]
pub fn is_escapable(b: u8) -> bool {
    b.is_ascii_punctuation()
}

/// First byte of an HTML tag name.
#[inline]
pub fn is_tag_name_start(b: u8) -> bool {
    b.is_ascii_alphabetic()
}

/// Continuation byte of an HTML tag name.
#[inline]
pub fn is_tag_name_char(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'-'
}

/// First byte of an attribute name: `[A-Za-z_:]`.
#[inline]
pub fn is_attr_name_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_' || b == b':'
}

/// Continuation byte of an attribute name: `[A-Za-z0-9_.:-]`.
#[inline]
pub fn is_attr_name_char(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'_' | b'.' | b':' | b'-')
}

/// Byte allowed in an unquoted attribute value.
#[inline]
pub fn is_unquoted_value_char(b: u8) -> bool {
    !matches!(
        b,
        b' ' | b'\t' | b'\n' | b'\r' | b'"' | b'\'' | b'=' | b'<' | b'>' | b'`' | 0
    )
}

/// ASCII punctuation plus the Unicode punctuation and symbol blocks that
/// show up next to emphasis in practice.
pub fn is_punctuation(c: char) -> bool {
    if c.is_ascii() {
        return c.is_ascii_punctuation();
    }
    let cp = u32::from(c);
    match cp {
        // Latin-1 punctuation and symbols; skips ª µ º and the digit forms
        0xA1..=0xBF => !c.is_alphanumeric(),
        0xD7 | 0xF7 => true,
        // General Punctuation
        0x2010..=0x2027 | 0x2030..=0x205E => true,
        // Arrows, math operators, technical, box drawing, shapes, dingbats
        0x2190..=0x23FF | 0x2500..=0x27BF => true,
        // Misc math symbols A and B
        0x27C0..=0x27EF | 0x2980..=0x29FF => true,
        // Supplemental Punctuation
        0x2E00..=0x2E7F => true,
        // CJK Symbols and Punctuation
        0x3001..=0x3003 | 0x3008..=0x3011 | 0x3014..=0x301F => true,
        // Vertical forms, small form variants
        0xFE10..=0xFE19 | 0xFE30..=0xFE4F | 0xFE50..=0xFE6B => true,
        // Fullwidth ASCII punctuation
        0xFF01..=0xFF0F | 0xFF1A..=0xFF20 | 0xFF3B..=0xFF40 | 0xFF5B..=0xFF65 => true,
        _ => false,
    }
}
