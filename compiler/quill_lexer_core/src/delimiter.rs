//! Delimiter rules: emphasis flanking and inline math pairing.

use crate::char_class::CharClass;

/// Whether a delimiter run may open and/or close emphasis.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Flanking {
    pub can_open: bool,
    pub can_close: bool,
}

/// Compute flanking for a run of `delim`.
///
/// `before` is the character preceding the run and `after` the character
/// following the whole run; `None` means a range edge. Line breaks are
/// ordinary whitespace here.
///
/// An underscore run with alphanumerics on both sides is intraword and gets
/// neither flag.
pub fn flanking(before: Option<char>, after: Option<char>, delim: u8) -> Flanking {
    if delim == b'_'
        && before.is_some_and(char::is_alphanumeric)
        && after.is_some_and(char::is_alphanumeric)
    {
        return Flanking::default();
    }

    let before_class = CharClass::of(before);
    let after_class = CharClass::of(after);

    let left = after_class != CharClass::Whitespace
        && (after_class != CharClass::Punctuation || before_class != CharClass::Other);
    let right = before_class != CharClass::Whitespace
        && (before_class != CharClass::Punctuation || after_class != CharClass::Other);

    Flanking {
        can_open: left,
        can_close: right,
    }
}

/// Which `$` bytes on one line are inline math delimiters.
///
/// Exactly two unescaped `$` pair up. With three, the first two pair and the
/// third is literal. Any other count leaves every `$` literal.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct DollarPlan {
    /// Number of unescaped `$` bytes on the line.
    pub count: u32,
    opener: Option<usize>,
    closer: Option<usize>,
}

impl DollarPlan {
    /// Scan `bytes[from..to]` for unescaped `$`.
    pub fn scan(bytes: &[u8], from: usize, to: usize) -> DollarPlan {
        let to = to.min(bytes.len());
        let mut plan = DollarPlan::default();
        let mut i = from;
        while i < to {
            let Some(off) = memchr::memchr(b'$', &bytes[i..to]) else {
                break;
            };
            let at = i + off;
            if !is_escaped(bytes, from, at) {
                plan.count += 1;
                match plan.count {
                    1 => plan.opener = Some(at),
                    2 => plan.closer = Some(at),
                    _ => {}
                }
            }
            i = at + 1;
        }
        plan
    }

    /// Check whether the `$` at `pos` is a delimiter. Returns the role:
    /// `Some(true)` opens, `Some(false)` closes.
    pub fn role_at(&self, pos: usize) -> Option<bool> {
        if !matches!(self.count, 2 | 3) {
            return None;
        }
        if self.opener == Some(pos) {
            Some(true)
        } else if self.closer == Some(pos) {
            Some(false)
        } else {
            None
        }
    }
}

/// A byte is escaped when an odd number of backslashes precede it.
fn is_escaped(bytes: &[u8], floor: usize, pos: usize) -> bool {
    let mut backslashes = 0;
    let mut i = pos;
    while i > floor && bytes[i - 1] == b'\\' {
        backslashes += 1;
        i -= 1;
    }
    backslashes % 2 == 1
}

#[cfg(test)]
mod tests;
