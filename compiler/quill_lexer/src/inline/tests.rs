use pretty_assertions::assert_eq;

use quill_ir::{Span, TokenFlags, TokenKind};

use crate::test_helpers::{content_flags, kinds, kinds_and_text, scan_all, tok};

/// `(kind, text, flags)` with layout and restart bits masked.
fn detailed(text: &str) -> Vec<(TokenKind, String, TokenFlags)> {
    scan_all(text)
        .into_iter()
        .map(|t| (t.kind, t.text, content_flags(t.flags)))
        .collect()
}

fn d(kind: TokenKind, text: &str, flags: TokenFlags) -> (TokenKind, String, TokenFlags) {
    (kind, text.to_owned(), flags)
}

const NONE: TokenFlags = TokenFlags::empty();

// === Emphasis ===

#[test]
fn single_emphasis_flanking() {
    assert_eq!(
        detailed("*a*"),
        vec![
            d(TokenKind::AsteriskToken, "*", TokenFlags::CAN_OPEN),
            d(TokenKind::StringLiteral, "a", NONE),
            d(TokenKind::AsteriskToken, "*", TokenFlags::CAN_CLOSE),
        ]
    );
}

#[test]
fn double_emphasis_consumes_two() {
    assert_eq!(
        detailed("**bold**"),
        vec![
            d(TokenKind::AsteriskAsterisk, "**", TokenFlags::CAN_OPEN),
            d(TokenKind::StringLiteral, "bold", NONE),
            d(TokenKind::AsteriskAsterisk, "**", TokenFlags::CAN_CLOSE),
        ]
    );
}

#[test]
fn long_run_splits_into_pairs() {
    assert_eq!(
        kinds("a***b"),
        vec![
            TokenKind::StringLiteral,
            TokenKind::AsteriskAsterisk,
            TokenKind::AsteriskToken,
            TokenKind::StringLiteral,
        ]
    );
}

#[test]
fn spaced_delimiter_flanks_neither_side() {
    let tokens = detailed("a * b");
    assert_eq!(tokens[1], d(TokenKind::AsteriskToken, "*", NONE));
    assert_eq!(tokens[2], d(TokenKind::StringLiteral, " b", NONE));
}

#[test]
fn intraword_underscores_are_text() {
    assert_eq!(
        kinds_and_text("snake_case_name"),
        vec![tok(TokenKind::StringLiteral, "snake_case_name")]
    );
    assert_eq!(
        kinds_and_text("foo__bar"),
        vec![tok(TokenKind::StringLiteral, "foo__bar")]
    );
}

#[test]
fn edge_underscores_are_delimiters() {
    assert_eq!(
        kinds_and_text("__init__"),
        vec![
            tok(TokenKind::UnderscoreUnderscore, "__"),
            tok(TokenKind::StringLiteral, "init"),
            tok(TokenKind::UnderscoreUnderscore, "__"),
        ]
    );
    assert_eq!(
        detailed("_a_")[0],
        d(TokenKind::UnderscoreToken, "_", TokenFlags::CAN_OPEN)
    );
}

#[test]
fn whitespace_between_delimiters_is_one_space() {
    let tokens = kinds_and_text("*a* *b*");
    assert_eq!(tokens[3], tok(TokenKind::StringLiteral, " "));
}

// === Code spans ===

#[test]
fn code_span_three_tokens() {
    assert_eq!(
        detailed("`code`"),
        vec![
            d(TokenKind::BacktickToken, "`", TokenFlags::CAN_OPEN),
            d(TokenKind::StringLiteral, "code", NONE),
            d(TokenKind::BacktickToken, "`", TokenFlags::CAN_CLOSE),
        ]
    );
}

#[test]
fn code_span_content_is_raw_and_stripped() {
    assert_eq!(
        kinds_and_text("`` a ` *b* ``"),
        vec![
            tok(TokenKind::InlineCodeDelimiter, "``"),
            tok(TokenKind::StringLiteral, "a ` *b*"),
            tok(TokenKind::InlineCodeDelimiter, "``"),
        ]
    );
}

#[test]
fn unmatched_backtick_has_no_flags() {
    assert_eq!(
        detailed("`open"),
        vec![
            d(TokenKind::BacktickToken, "`", NONE),
            d(TokenKind::StringLiteral, "open", NONE),
        ]
    );
}

#[test]
fn closer_must_be_on_the_same_line() {
    assert_eq!(
        detailed("`a\nb`")[0],
        d(TokenKind::BacktickToken, "`", NONE)
    );
}

#[test]
fn code_span_may_contain_shorter_runs() {
    assert_eq!(
        kinds_and_text("a ``` `` ```"),
        vec![
            tok(TokenKind::StringLiteral, "a "),
            tok(TokenKind::InlineCodeDelimiter, "```"),
            tok(TokenKind::StringLiteral, "``"),
            tok(TokenKind::InlineCodeDelimiter, "```"),
        ]
    );
}

// === Strikethrough and math ===

#[test]
fn strikethrough_pair() {
    assert_eq!(
        detailed("~~del~~"),
        vec![
            d(TokenKind::TildeTilde, "~~", TokenFlags::CAN_OPEN),
            d(TokenKind::StringLiteral, "del", NONE),
            d(TokenKind::TildeTilde, "~~", TokenFlags::CAN_CLOSE),
        ]
    );
    assert_eq!(
        kinds_and_text("~one~"),
        vec![tok(TokenKind::StringLiteral, "~one~")]
    );
}

#[test]
fn inline_math_pair() {
    assert_eq!(
        detailed("$x$"),
        vec![
            d(TokenKind::MathInlineDelimiter, "$", TokenFlags::CAN_OPEN),
            d(TokenKind::StringLiteral, "x", NONE),
            d(TokenKind::MathInlineDelimiter, "$", TokenFlags::CAN_CLOSE),
        ]
    );
}

#[test]
fn third_dollar_is_literal() {
    assert_eq!(
        kinds_and_text("$5 and $6 and $7"),
        vec![
            tok(TokenKind::MathInlineDelimiter, "$"),
            tok(TokenKind::StringLiteral, "5 and "),
            tok(TokenKind::MathInlineDelimiter, "$"),
            tok(TokenKind::StringLiteral, "6 and $7"),
        ]
    );
}

#[test]
fn lone_and_escaped_dollars_are_literal() {
    assert_eq!(
        kinds_and_text("one $ only"),
        vec![tok(TokenKind::StringLiteral, "one $ only")]
    );
    assert_eq!(
        kinds_and_text(r"\$x$"),
        vec![tok(TokenKind::StringLiteral, "$x$")]
    );
}

// === Brackets ===

#[test]
fn link_and_image_brackets() {
    assert_eq!(
        kinds_and_text("[a](b) ![i]"),
        vec![
            tok(TokenKind::OpenBracketToken, "["),
            tok(TokenKind::StringLiteral, "a"),
            tok(TokenKind::CloseBracketToken, "]"),
            tok(TokenKind::StringLiteral, "(b) "),
            tok(TokenKind::ExclamationOpenBracket, "!["),
            tok(TokenKind::StringLiteral, "i"),
            tok(TokenKind::CloseBracketToken, "]"),
        ]
    );
}

// === Hard breaks ===

#[test]
fn trailing_spaces_break_the_line() {
    let tokens = scan_all("a  \nb");
    assert_eq!(tokens[0].text, "a");
    assert_eq!(tokens[1].kind, TokenKind::HardLineBreak);
    assert_eq!(tokens[1].text, "  ");
    assert_eq!(tokens[1].span, Span::new(1, 3));
    assert_eq!(tokens[2].kind, TokenKind::NewLineTrivia);
    assert_eq!(tokens[3].text, "b");
}

#[test]
fn backslash_breaks_the_line() {
    assert_eq!(
        kinds_and_text("a\\\nb"),
        vec![
            tok(TokenKind::StringLiteral, "a"),
            tok(TokenKind::HardLineBreak, "\\"),
            tok(TokenKind::NewLineTrivia, "\n"),
            tok(TokenKind::StringLiteral, "b"),
        ]
    );
}

#[test]
fn trailing_spaces_at_end_of_input_are_text() {
    let tokens = scan_all("a  ");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].text, "a");
    assert_eq!(tokens[0].span, Span::new(0, 3));
}

// === Heading separator ===

#[test]
fn heading_separator_covers_mixed_whitespace() {
    let tokens = scan_all("#\t  foo");
    assert_eq!(tokens[0].kind, TokenKind::HashToken);
    assert_eq!(tokens[1].kind, TokenKind::WhitespaceTrivia);
    assert_eq!(tokens[1].text, " ");
    assert_eq!(tokens[1].span, Span::new(1, 4));
    assert_eq!(tokens[2].text, "foo");
    assert_eq!(tokens[2].full_start, 4);
}

// === Flanking flags ===

#[test]
fn only_delimiters_carry_flanking_flags() {
    let text = "*a* __b__ ~~c~~ `d` $e$ [f](g) ![h] <i j=k> &amp; \\\nl";
    let flagged: Vec<_> = scan_all(text)
        .into_iter()
        .filter(|t| t.flags.intersects(TokenFlags::CAN_OPEN | TokenFlags::CAN_CLOSE))
        .collect();
    assert_eq!(flagged.len(), 10);
    assert!(flagged.iter().all(|t| t.kind.is_delimiter()));
}

// === Text runs ===

#[test]
fn escapes_are_resolved() {
    assert_eq!(
        kinds_and_text(r"\*not\*"),
        vec![tok(TokenKind::StringLiteral, "*not*")]
    );
}

#[test]
fn paragraph_accumulates_plain_lines() {
    let tokens = scan_all("one\ntwo\nthree");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].text, "one two three");
    assert_eq!(tokens[0].span, Span::new(0, 13));
}

#[test]
fn accumulation_stops_before_a_construct() {
    assert_eq!(
        kinds_and_text("text\n*em*"),
        vec![
            tok(TokenKind::StringLiteral, "text"),
            tok(TokenKind::NewLineTrivia, "\n"),
            tok(TokenKind::AsteriskToken, "*"),
            tok(TokenKind::StringLiteral, "em"),
            tok(TokenKind::AsteriskToken, "*"),
        ]
    );
}

#[test]
fn accumulation_stops_at_a_later_construct() {
    assert_eq!(
        kinds_and_text("one\ntwo *x*"),
        vec![
            tok(TokenKind::StringLiteral, "one two "),
            tok(TokenKind::AsteriskToken, "*"),
            tok(TokenKind::StringLiteral, "x"),
            tok(TokenKind::AsteriskToken, "*"),
        ]
    );
}

#[test]
fn lazy_blockquote_continuation_joins() {
    assert_eq!(
        kinds_and_text("> foo\nbar"),
        vec![
            tok(TokenKind::GreaterThanToken, ">"),
            tok(TokenKind::StringLiteral, "foo bar"),
        ]
    );
}

#[test]
fn non_ascii_text_is_kept() {
    assert_eq!(
        kinds_and_text("héllo wörld"),
        vec![tok(TokenKind::StringLiteral, "héllo wörld")]
    );
}
