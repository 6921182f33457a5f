use super::*;

// === Construction ===

#[test]
fn empty_source() {
    let buf = SourceBuffer::new("");
    assert_eq!((buf.start(), buf.end()), (0, 0));
    assert_eq!(buf.byte(0), 0);
    assert_eq!(buf.char_at(0), None);
}

#[test]
fn whole_text_range() {
    let buf = SourceBuffer::new("hello");
    assert_eq!(buf.start(), 0);
    assert_eq!(buf.end(), 5);
    assert_eq!(buf.byte(4), b'o');
    assert_eq!(buf.byte(5), 0);
}

#[test]
fn reset_reuses_buffer() {
    let mut buf = SourceBuffer::new("first text");
    buf.reset("second", 2, 3);
    assert_eq!(buf.text(), "second");
    assert_eq!((buf.start(), buf.end()), (2, 5));
    assert_eq!(buf.byte(5), 0, "bytes past the range read as zero");
}

#[test]
fn reset_clamps_range_to_text() {
    let mut buf = SourceBuffer::default();
    buf.reset("abc", 10, 4);
    assert_eq!((buf.start(), buf.end()), (3, 3));
    buf.reset("abc", 1, usize::MAX);
    assert_eq!((buf.start(), buf.end()), (1, 3));
}

#[test]
fn reset_snaps_to_char_boundaries() {
    // 'é' is two bytes at 1..3
    let mut buf = SourceBuffer::default();
    buf.reset("aéb", 2, 1);
    assert_eq!((buf.start(), buf.end()), (1, 3));

    buf.reset("aéb", 0, 2);
    assert_eq!((buf.start(), buf.end()), (0, 3));

    buf.reset("éé", 1, 2);
    assert_eq!((buf.start(), buf.end()), (0, 4));
}

// === Characters ===

#[test]
fn char_at_and_before() {
    let buf = SourceBuffer::new("a\u{1F600}b");
    assert_eq!(buf.char_at(1), Some('\u{1F600}'));
    assert_eq!(buf.char_before(5), Some('\u{1F600}'));
    assert_eq!(buf.char_before(0), None);
    assert_eq!(buf.next_char_boundary(1), 5);
    assert_eq!(buf.next_char_boundary(6), 6);
}

#[test]
fn char_before_respects_range_start() {
    let mut buf = SourceBuffer::default();
    buf.reset("xyz", 1, 2);
    assert_eq!(buf.char_before(1), None);
    assert_eq!(buf.char_before(2), Some('y'));
}

#[test]
fn slice_out_of_bounds_is_empty() {
    let buf = SourceBuffer::new("hello");
    assert_eq!(buf.slice(1, 3), "el");
    assert_eq!(buf.slice(3, 10), "");
}

// === Lines ===

#[test]
fn line_start_detection() {
    let buf = SourceBuffer::new("a\nb\r\nc\rd");
    assert!(buf.is_line_start(0));
    assert!(!buf.is_line_start(1));
    assert!(buf.is_line_start(2));
    assert!(buf.is_line_start(5));
    assert!(buf.is_line_start(7));
}

#[test]
fn line_breaks_count_crlf_once() {
    let buf = SourceBuffer::new("a\nb\r\nc\rd");
    let breaks = buf.line_breaks(0, buf.end());
    assert_eq!(breaks.count, 3);
    assert_eq!(breaks.last_line_start, Some(7));
}

#[test]
fn line_of_positions() {
    let buf = SourceBuffer::new("one\ntwo\r\nthree");
    assert_eq!(buf.line_of(0), (0, 0));
    assert_eq!(buf.line_of(2), (0, 0));
    assert_eq!(buf.line_of(4), (1, 4));
    assert_eq!(buf.line_of(11), (2, 9));
}
