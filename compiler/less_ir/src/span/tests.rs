use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_span_display() {
    let span = Span::new(10, 20);
    assert_eq!(span.to_string(), "10..20");
    assert_eq!(format!("{span:?}"), "10..20");
}

#[test]
fn test_line_col() {
    let source = ".a {\n  color: spin(red, 10);\n}";
    let offset = source.find("spin").map_or(0, |i| i as u32);
    let pos = Span::new(offset, offset + 4).line_col(source);
    assert_eq!(pos, LineCol { line: 2, column: 10 });
    assert_eq!(pos.to_string(), "2:10");
}

#[test]
fn test_line_col_past_end() {
    let pos = Span::new(100, 100).line_col("ab\nc");
    assert_eq!(pos, LineCol { line: 2, column: 2 });
}
