use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_report_keeps_order() {
    let mut list = DiagnosticList::new();
    list.report(ErrorCode::M0005, 10, 12);
    list.report(ErrorCode::M0001, 0, 4);
    let codes: Vec<ErrorCode> = list.iter().map(|d| d.code).collect();
    assert_eq!(codes, vec![ErrorCode::M0005, ErrorCode::M0001]);
}

#[test]
fn test_report_clamps_inverted_range() {
    let mut list = DiagnosticList::new();
    list.report(ErrorCode::M0008, 7, 3);
    assert_eq!(list.as_slice()[0].span, Span::new(7, 7));
}

#[test]
fn test_error_count_skips_warnings() {
    let mut list = DiagnosticList::new();
    list.report(ErrorCode::M0009, 0, 5);
    list.report(ErrorCode::M0002, 6, 20);
    assert_eq!(list.len(), 2);
    assert_eq!(list.error_count(), 1);
}

#[test]
fn test_discard_from_position() {
    let mut list = DiagnosticList::new();
    list.report(ErrorCode::M0001, 0, 4);
    list.report(ErrorCode::M0005, 8, 10);
    list.report(ErrorCode::M0007, 12, 15);
    list.discard_from(8);
    assert_eq!(list.len(), 1);
    assert_eq!(list.as_slice()[0].code, ErrorCode::M0001);
}

#[test]
fn test_clear() {
    let mut list = DiagnosticList::new();
    list.report(ErrorCode::M0001, 0, 4);
    list.clear();
    assert!(list.is_empty());
}
