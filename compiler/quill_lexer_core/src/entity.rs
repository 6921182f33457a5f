//! Character references, percent escapes and attribute value decoding.

/// Result of matching a character reference at an `&`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EntityMatch {
    /// A complete, known reference of `len` bytes.
    Decoded { len: usize, ch: char },
    /// Reference-shaped but unusable (`&bogus;`, `&#;`, `&#12345678;`).
    /// `len` covers the malformed part.
    Malformed { len: usize },
    /// A plain ampersand.
    NotEntity,
}

/// Longest name considered when looking for a named reference.
const MAX_NAME_LEN: usize = 32;

const NAMED: [(&[u8], char); 6] = [
    (b"amp", '&'),
    (b"lt", '<'),
    (b"gt", '>'),
    (b"quot", '"'),
    (b"apos", '\''),
    (b"nbsp", '\u{a0}'),
];

/// Match a character reference at the start of `bytes` (which begins with
/// `&`).
///
/// Numeric references take 1-7 decimal or 1-6 hex digits; zero, surrogates
/// and values above U+10FFFF decode to U+FFFD.
pub fn match_entity(bytes: &[u8]) -> EntityMatch {
    if bytes.first() != Some(&b'&') {
        return EntityMatch::NotEntity;
    }
    if bytes.get(1) == Some(&b'#') {
        return match_numeric(bytes);
    }

    let name_len = bytes[1..]
        .iter()
        .take(MAX_NAME_LEN + 1)
        .take_while(|b| b.is_ascii_alphanumeric())
        .count();
    if name_len == 0 || name_len > MAX_NAME_LEN || bytes.get(1 + name_len) != Some(&b';') {
        return EntityMatch::NotEntity;
    }
    let name = &bytes[1..=name_len];
    let len = name_len + 2;
    NAMED
        .iter()
        .find(|(n, _)| *n == name)
        .map_or(EntityMatch::Malformed { len }, |&(_, ch)| {
            EntityMatch::Decoded { len, ch }
        })
}

fn match_numeric(bytes: &[u8]) -> EntityMatch {
    let (hex, digits_start) = match bytes.get(2) {
        Some(b'x' | b'X') => (true, 3),
        _ => (false, 2),
    };
    let max_digits = if hex { 6 } else { 7 };
    let digits = bytes[digits_start.min(bytes.len())..]
        .iter()
        .take_while(|b| {
            if hex {
                b.is_ascii_hexdigit()
            } else {
                b.is_ascii_digit()
            }
        })
        .count();
    let digits_end = digits_start + digits;

    if digits == 0 || digits > max_digits || bytes.get(digits_end) != Some(&b';') {
        return EntityMatch::Malformed {
            len: digits_end.min(bytes.len()),
        };
    }

    let radix = if hex { 16 } else { 10 };
    let value = bytes[digits_start..digits_end]
        .iter()
        .fold(0u32, |acc, &b| acc * radix + hex_value(b));
    let ch = char::from_u32(value)
        .filter(|&c| c != '\0')
        .unwrap_or('\u{FFFD}');
    EntityMatch::Decoded {
        len: digits_end + 1,
        ch,
    }
}

#[inline]
fn hex_value(b: u8) -> u32 {
    match b {
        b'0'..=b'9' => u32::from(b - b'0'),
        b'a'..=b'f' => u32::from(b - b'a' + 10),
        b'A'..=b'F' => u32::from(b - b'A' + 10),
        _ => 0,
    }
}

/// Decode an attribute value into `out`.
///
/// Resolves character references and `%XX` escapes (runs of escapes are
/// decoded together as UTF-8, invalid sequences become U+FFFD) and turns
/// `\r\n` and lone `\r` into `\n`. Anything unrecognised is copied as is.
pub fn decode_attribute_value(raw: &str, out: &mut String) {
    let bytes = raw.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        let Some(off) = memchr::memchr3(b'&', b'%', b'\r', &bytes[i..]) else {
            out.push_str(&raw[i..]);
            break;
        };
        let at = i + off;
        out.push_str(&raw[i..at]);
        match bytes[at] {
            b'&' => match match_entity(&bytes[at..]) {
                EntityMatch::Decoded { len, ch } => {
                    out.push(ch);
                    i = at + len;
                }
                EntityMatch::Malformed { .. } | EntityMatch::NotEntity => {
                    out.push('&');
                    i = at + 1;
                }
            },
            b'%' => {
                let consumed = decode_percent_run(&bytes[at..], out);
                if consumed == 0 {
                    out.push('%');
                    i = at + 1;
                } else {
                    i = at + consumed;
                }
            }
            _ => {
                out.push('\n');
                i = if bytes.get(at + 1) == Some(&b'\n') {
                    at + 2
                } else {
                    at + 1
                };
            }
        }
    }
}

/// Decode consecutive `%XX` escapes. Returns the bytes consumed.
fn decode_percent_run(bytes: &[u8], out: &mut String) -> usize {
    let mut decoded = Vec::new();
    let mut i = 0;
    while bytes.get(i) == Some(&b'%') {
        match (bytes.get(i + 1), bytes.get(i + 2)) {
            (Some(&hi), Some(&lo)) if hi.is_ascii_hexdigit() && lo.is_ascii_hexdigit() => {
                // Both digits are < 16, so the byte cannot overflow.
                decoded.push(((hex_value(hi) << 4) | hex_value(lo)) as u8);
                i += 3;
            }
            _ => break,
        }
    }
    if !decoded.is_empty() {
        out.push_str(&String::from_utf8_lossy(&decoded));
    }
    i
}

/// Collapse whitespace runs to one space and trim both ends.
pub fn collapse_whitespace(text: &str, out: &mut String) {
    let mut first = true;
    for word in text.split_whitespace() {
        if !first {
            out.push(' ');
        }
        out.push_str(word);
        first = false;
    }
}
