use super::*;
use pretty_assertions::assert_eq;

fn open_close(before: Option<char>, after: Option<char>, delim: u8) -> (bool, bool) {
    let f = flanking(before, after, delim);
    (f.can_open, f.can_close)
}

// === Flanking ===

#[test]
fn opener_at_range_start() {
    // "*a*": the first star
    assert_eq!(open_close(None, Some('a'), b'*'), (true, false));
}

#[test]
fn closer_at_range_end() {
    // "*a*": the second star
    assert_eq!(open_close(Some('a'), None, b'*'), (false, true));
}

#[test]
fn surrounded_by_whitespace_neither() {
    assert_eq!(open_close(Some(' '), Some(' '), b'*'), (false, false));
}

#[test]
fn intraword_star_both() {
    assert_eq!(open_close(Some('a'), Some('b'), b'*'), (true, true));
}

#[test]
fn intraword_underscore_neither() {
    assert_eq!(open_close(Some('a'), Some('b'), b'_'), (false, false));
    assert_eq!(open_close(Some('1'), Some('x'), b'_'), (false, false));
}

#[test]
fn punctuation_rules() {
    // a*"foo"*: the first star is preceded by a letter and followed by punctuation
    assert_eq!(open_close(Some('a'), Some('"'), b'*'), (false, true));
    // *"foo": preceded by whitespace, followed by punctuation
    assert_eq!(open_close(Some(' '), Some('"'), b'*'), (true, false));
    // "foo"*bar
    assert_eq!(open_close(Some('"'), Some('b'), b'*'), (true, false));
}

#[test]
fn line_break_is_whitespace() {
    assert_eq!(open_close(Some('\n'), Some('x'), b'*'), (true, false));
}

// === Math pairing ===

fn plan(line: &str) -> DollarPlan {
    DollarPlan::scan(line.as_bytes(), 0, line.len())
}

#[test]
fn two_dollars_pair() {
    let p = plan("a $x$ b");
    assert_eq!(p.count, 2);
    assert_eq!(p.role_at(2), Some(true));
    assert_eq!(p.role_at(4), Some(false));
}

#[test]
fn three_dollars_pair_first_two() {
    let p = plan("$a$ costs $5");
    assert_eq!(p.count, 3);
    assert_eq!(p.role_at(0), Some(true));
    assert_eq!(p.role_at(2), Some(false));
    assert_eq!(p.role_at(10), None);
}

#[test]
fn one_or_four_dollars_are_literal() {
    assert_eq!(plan("costs $5").role_at(6), None);
    let p = plan("$a$ $b$");
    assert_eq!(p.count, 4);
    assert_eq!(p.role_at(0), None);
}

#[test]
fn escaped_dollar_does_not_count() {
    let p = plan(r"\$ and $x$");
    assert_eq!(p.count, 2);
    assert_eq!(p.role_at(1), None);
    assert_eq!(p.role_at(7), Some(true));
}

#[test]
fn double_backslash_does_not_escape() {
    let p = plan(r"\\$x$");
    assert_eq!(p.count, 2);
    assert_eq!(p.role_at(2), Some(true));
}
