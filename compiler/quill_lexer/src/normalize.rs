//! Text normalisation for `StringLiteral` tokens.
//!
//! Token text is what the tree builder stores, so it is cleaned once here:
//! escapes resolved, whitespace runs collapsed, line joins turned into a
//! single space.

/// Write the normalised text of `spans` (`(start, len)` pairs into `text`)
/// to `out`.
///
/// - Space and tab runs collapse to one space; each boundary between two
///   spans counts as whitespace.
/// - `\` before ASCII punctuation is dropped, keeping the punctuation.
/// - NUL becomes U+FFFD.
/// - Leading (trailing) whitespace survives as one space only when
///   `keep_leading` (`keep_trailing`) is set.
/// - Whitespace-only input yields `" "`.
pub(crate) fn normalize_text(
    text: &str,
    spans: &[(usize, usize)],
    keep_leading: bool,
    keep_trailing: bool,
    out: &mut String,
) {
    let mut pending_space = false;
    let mut seen_content = false;

    for (index, &(start, len)) in spans.iter().enumerate() {
        if index > 0 {
            pending_space = true;
        }
        let piece = text.get(start..start + len).unwrap_or("");
        let mut chars = piece.chars().peekable();
        while let Some(c) = chars.next() {
            if c == ' ' || c == '\t' {
                pending_space = true;
                continue;
            }
            if pending_space {
                if seen_content || keep_leading {
                    out.push(' ');
                }
                pending_space = false;
            }
            seen_content = true;
            match c {
                '\\' => match chars.peek() {
                    Some(&next) if next.is_ascii_punctuation() => {
                        out.push(next);
                        chars.next();
                    }
                    _ => out.push('\\'),
                },
                '\0' => out.push('\u{FFFD}'),
                _ => out.push(c),
            }
        }
    }

    if !seen_content {
        out.push(' ');
    } else if pending_space && keep_trailing {
        out.push(' ');
    }
}

/// Write code span content to `out`: raw, except that one leading and one
/// trailing space are stripped when both are present and the content is
/// not all spaces.
pub(crate) fn code_span_text(raw: &str, out: &mut String) {
    let strip = raw.len() >= 2
        && raw.starts_with(' ')
        && raw.ends_with(' ')
        && raw.bytes().any(|b| b != b' ');
    if strip {
        out.push_str(&raw[1..raw.len() - 1]);
    } else {
        out.push_str(raw);
    }
}
