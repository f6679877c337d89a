use super::Cursor;
use pretty_assertions::assert_eq;

#[test]
fn starts_before_first_char() {
    let cursor = Cursor::new("ab");
    assert_eq!(cursor.current(), None);
    assert_eq!(cursor.peek(), Some('a'));
    assert_eq!(cursor.current_start(), 0);
}

#[test]
fn advance_decodes_multibyte_chars() {
    let mut cursor = Cursor::new("öx");
    assert_eq!(cursor.advance(), Some('ö'));
    assert_eq!(cursor.current_start(), 0);
    assert_eq!(cursor.slice_from(0), "ö");
    assert_eq!(cursor.peek(), Some('x'));
    assert_eq!(cursor.advance(), Some('x'));
    assert_eq!(cursor.advance(), None);
    assert_eq!(cursor.advance(), None);
}

#[test]
fn slice_includes_current() {
    let mut cursor = Cursor::new("abc");
    cursor.advance();
    let start = cursor.current_start();
    cursor.advance();
    assert_eq!(cursor.slice_from(start), "ab");
}

#[test]
fn eat_stops_before_newline() {
    let mut cursor = Cursor::new("// hi\nnext");
    cursor.advance();
    cursor.eat_until_newline_or_eof();
    assert_eq!(cursor.slice_from(0), "// hi");
    assert_eq!(cursor.current(), Some('i'));
    assert_eq!(cursor.peek(), Some('\n'));
}

#[test]
fn eat_runs_to_end_without_newline() {
    let mut cursor = Cursor::new("//ä");
    cursor.advance();
    cursor.eat_until_newline_or_eof();
    assert_eq!(cursor.slice_from(0), "//ä");
    assert_eq!(cursor.current(), Some('ä'));
    assert_eq!(cursor.peek(), None);
}
