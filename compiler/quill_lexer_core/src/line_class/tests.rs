use super::*;
use pretty_assertions::assert_eq;

fn classify(line: &str) -> LineInfo {
    classify_line(line.as_bytes(), 0, line.len(), LineConfig::default())
}

fn flags(line: &str) -> LineFlags {
    classify(line).flags
}

// === Blank and indentation ===

#[test]
fn blank_lines() {
    assert_eq!(flags(""), LineFlags::BLANK_LINE);
    assert_eq!(flags("   \t"), LineFlags::BLANK_LINE);
    assert_eq!(flags("  \nnext"), LineFlags::BLANK_LINE);
}

#[test]
fn indented_code_by_spaces_and_tabs() {
    assert_eq!(flags("    code"), LineFlags::INDENTED_CODE);
    assert_eq!(flags("\tcode"), LineFlags::INDENTED_CODE);
    assert_eq!(flags("  \tcode"), LineFlags::INDENTED_CODE);
    assert_eq!(flags("   text"), LineFlags::PARAGRAPH_PLAIN);
}

#[test]
fn content_start_and_line_end() {
    let info = classify("  # Title\r\nrest");
    assert_eq!(info.flags, LineFlags::ATX_HEADING);
    assert_eq!(info.content_start, 2);
    assert_eq!(info.marker_end, 3);
    assert_eq!(info.line_end, 9);
    assert_eq!(info.indent, 2);
}

#[test]
fn classify_from_middle_of_text() {
    let text = "first\n- second";
    let info = classify_line(text.as_bytes(), 6, text.len(), LineConfig::default());
    assert_eq!(info.flags, LineFlags::LIST_UNORDERED_MARKER);
    assert_eq!(info.content_start, 6);
    assert_eq!(info.marker_end, 8);
}

// === Headings ===

#[test]
fn atx_headings() {
    assert_eq!(flags("# a"), LineFlags::ATX_HEADING);
    assert_eq!(flags("######"), LineFlags::ATX_HEADING);
    assert_eq!(flags("#\tx"), LineFlags::ATX_HEADING);
    assert_eq!(flags("####### seven"), LineFlags::PARAGRAPH_PLAIN);
    assert_eq!(flags("#hashtag"), LineFlags::PARAGRAPH_PLAIN);
}

#[test]
fn heading_level_limit() {
    let config = LineConfig {
        max_heading_level: 2,
        math_blocks: true,
    };
    let classify_with = |s: &str| classify_line(s.as_bytes(), 0, s.len(), config).flags;
    assert_eq!(classify_with("## two"), LineFlags::ATX_HEADING);
    assert_eq!(classify_with("### three"), LineFlags::PARAGRAPH_PLAIN);
}

// === Thematic breaks and lists ===

#[test]
fn thematic_breaks() {
    assert_eq!(flags("---"), LineFlags::THEMATIC_BREAK);
    assert_eq!(flags("- - -"), LineFlags::THEMATIC_BREAK);
    assert_eq!(flags("***"), LineFlags::THEMATIC_BREAK);
    assert_eq!(flags("_ _ _  "), LineFlags::THEMATIC_BREAK);
    assert_eq!(classify("---").marker_end, 3);
}

#[test]
fn short_runs_are_not_breaks() {
    assert_eq!(flags("**bold**"), LineFlags::PARAGRAPH_PLAIN);
    assert_eq!(flags("- - x"), LineFlags::LIST_UNORDERED_MARKER);
    assert_eq!(flags("__init__"), LineFlags::PARAGRAPH_PLAIN);
}

#[test]
fn unordered_markers() {
    for line in ["- item", "* item", "+ item", "-", "+\titem"] {
        assert_eq!(flags(line), LineFlags::LIST_UNORDERED_MARKER, "{line:?}");
    }
    assert_eq!(flags("-item"), LineFlags::PARAGRAPH_PLAIN);
}

#[test]
fn list_marker_separator_width() {
    assert_eq!(classify("- item").marker_end, 2);
    assert_eq!(classify("-    item").marker_end, 5);
    // five columns: only one belongs to the marker
    assert_eq!(classify("-     code").marker_end, 2);
    // empty item: the marker takes the trailing whitespace
    assert_eq!(classify("-   ").marker_end, 4);
}

#[test]
fn ordered_markers() {
    assert_eq!(flags("1. one"), LineFlags::LIST_ORDERED_MARKER);
    assert_eq!(flags("42) answer"), LineFlags::LIST_ORDERED_MARKER);
    assert_eq!(flags("123456789. nine digits"), LineFlags::LIST_ORDERED_MARKER);
    assert_eq!(flags("1234567890. ten digits"), LineFlags::PARAGRAPH_PLAIN);
    assert_eq!(flags("2024.5 is a number"), LineFlags::PARAGRAPH_PLAIN);
    assert_eq!(classify("10. x").marker_end, 4);
}

// === Fences, quotes, math ===

#[test]
fn fences() {
    assert_eq!(flags("```"), LineFlags::FENCED_CODE_OPEN);
    assert_eq!(flags("```javascript {.highlight}"), LineFlags::FENCED_CODE_OPEN);
    assert_eq!(flags("~~~ rust"), LineFlags::FENCED_CODE_OPEN);
    assert_eq!(flags("~~~ has ` tick"), LineFlags::FENCED_CODE_OPEN);
    assert_eq!(flags("``` has ` tick"), LineFlags::PARAGRAPH_PLAIN);
    assert_eq!(flags("``code``"), LineFlags::PARAGRAPH_PLAIN);
}

#[test]
fn blockquote_marker_end() {
    assert_eq!(flags("> quote"), LineFlags::BLOCKQUOTE_MARKER);
    assert_eq!(classify("> quote").marker_end, 2);
    assert_eq!(classify(">quote").marker_end, 1);
}

#[test]
fn math_block_toggle() {
    assert_eq!(flags("$$"), LineFlags::MATH_BLOCK);
    assert_eq!(flags("$$ x^2 $$"), LineFlags::MATH_BLOCK);
    assert_eq!(flags("$x$"), LineFlags::PARAGRAPH_PLAIN);
    let no_math = LineConfig {
        max_heading_level: 6,
        math_blocks: false,
    };
    assert_eq!(
        classify_line(b"$$", 0, 2, no_math).flags,
        LineFlags::PARAGRAPH_PLAIN
    );
}

// === Tables and setext ===

#[test]
fn table_rows() {
    assert_eq!(flags("| a | b |"), LineFlags::TABLE_PIPE_HEADER_CANDIDATE);
    assert_eq!(flags("a | b"), LineFlags::TABLE_PIPE_HEADER_CANDIDATE);
    assert_eq!(flags("|---|:-:|"), LineFlags::TABLE_ALIGNMENT_ROW);
    assert_eq!(flags("--- | ---:"), LineFlags::TABLE_ALIGNMENT_ROW);
    assert_eq!(flags(r"escaped \| pipe"), LineFlags::PARAGRAPH_PLAIN);
    assert_eq!(flags("|"), LineFlags::TABLE_PIPE_HEADER_CANDIDATE);
}

#[test]
fn setext_underlines() {
    assert_eq!(flags("==="), LineFlags::SETEXT_UNDERLINE_CANDIDATE);
    assert_eq!(flags("=  "), LineFlags::SETEXT_UNDERLINE_CANDIDATE);
    assert_eq!(flags("--"), LineFlags::SETEXT_UNDERLINE_CANDIDATE);
    assert_eq!(flags("==x"), LineFlags::PARAGRAPH_PLAIN);
}

#[test]
fn plain_paragraph() {
    let info = classify("Hello world");
    assert_eq!(info.flags, LineFlags::PARAGRAPH_PLAIN);
    assert_eq!(info.marker_end, info.content_start);
}

// === Property tests ===

#[allow(
    clippy::disallowed_types,
    reason = "proptest macros internally use Arc"
)]
mod proptest_classify {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn exactly_one_flag_and_ordered_offsets(line in "[ \\t#>*_+=|:$`~0-9a-z.)-]{0,24}") {
            let info = classify(&line);
            prop_assert_eq!(info.flags.bits().count_ones(), 1);
            prop_assert!(info.content_start <= info.line_end);
            prop_assert!(info.marker_end <= info.line_end);
            prop_assert!(info.marker_end >= info.content_start);
            prop_assert_eq!(info.line_end, line.len());
        }
    }
}
