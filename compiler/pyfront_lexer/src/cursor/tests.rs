use super::Cursor;

// === Basic Navigation ===

#[test]
fn current_returns_first_byte() {
    let cursor = Cursor::new("abc");
    assert_eq!(cursor.current(), b'a');
}

#[test]
fn advance_moves_forward() {
    let mut cursor = Cursor::new("abc");
    cursor.advance();
    assert_eq!(cursor.current(), b'b');
    assert_eq!(cursor.pos(), 1);
}

#[test]
fn advance_stops_at_eof() {
    let mut cursor = Cursor::new("hi");
    cursor.advance_n(5);
    assert!(cursor.is_eof());
    assert_eq!(cursor.pos(), 2);
    cursor.advance();
    assert_eq!(cursor.pos(), 2);
    assert_eq!(cursor.current(), 0);
}

#[test]
fn peek_near_end_returns_zero() {
    let mut cursor = Cursor::new("ab");
    cursor.advance();
    assert_eq!(cursor.peek(), 0);
    assert_eq!(cursor.peek2(), 0);
}

#[test]
fn interior_nul_is_not_eof() {
    let cursor = Cursor::new("\0x");
    assert_eq!(cursor.current(), 0);
    assert!(!cursor.is_eof());
}

// === Slicing ===

#[test]
fn slice_from_start() {
    let mut cursor = Cursor::new("hello world");
    cursor.advance_n(5);
    assert_eq!(cursor.slice_from(0), "hello");
    assert_eq!(cursor.slice(6, 11), "world");
}

#[test]
fn slice_off_char_boundary_is_empty() {
    let cursor = Cursor::new("é");
    assert_eq!(cursor.slice(0, 1), "");
}

#[test]
fn advance_char_multibyte() {
    let mut cursor = Cursor::new("héllo");
    cursor.advance();
    assert_eq!(cursor.current_char(), Some('é'));
    cursor.advance_char();
    assert_eq!(cursor.current(), b'l');
    assert_eq!(cursor.slice_from(0), "hé");
}

// === Scanning ===

#[test]
fn eat_until_newline_stops_before_newline() {
    let mut cursor = Cursor::new("# note\nnext");
    cursor.eat_until_newline_or_eof();
    assert_eq!(cursor.current(), b'\n');
    assert_eq!(cursor.slice_from(0), "# note");
}

#[test]
fn eat_until_newline_handles_crlf_and_eof() {
    let mut cursor = Cursor::new("abc\r\n");
    cursor.eat_until_newline_or_eof();
    assert_eq!(cursor.current(), b'\r');

    let mut cursor = Cursor::new("abc");
    cursor.eat_until_newline_or_eof();
    assert!(cursor.is_eof());
}

#[test]
fn skip_to_string_delim_finds_quote_or_escape() {
    let mut cursor = Cursor::new("abc\\'d'");
    assert_eq!(cursor.skip_to_string_delim(b'\''), b'\\');
    assert_eq!(cursor.pos(), 3);

    let mut cursor = Cursor::new("abc\"");
    assert_eq!(cursor.skip_to_string_delim(b'\''), 0);
    assert!(cursor.is_eof());
}

#[test]
fn skip_to_string_delim_stops_at_line_breaks() {
    let mut cursor = Cursor::new("ab\r\ncd'");
    assert_eq!(cursor.skip_to_string_delim(b'\''), b'\r');
    assert_eq!(cursor.pos(), 2);

    let mut cursor = Cursor::new("ab'\rcd");
    assert_eq!(cursor.skip_to_string_delim(b'\''), b'\'');
    assert_eq!(cursor.pos(), 2);
}

#[test]
fn skip_to_string_delim_walks_long_body_line_by_line() {
    let body = "x".repeat(1000) + "\n";
    let source = body.repeat(50) + "'''";
    let mut cursor = Cursor::new(&source);
    let mut lines = 0;
    while cursor.skip_to_string_delim(b'\'') == b'\n' {
        lines += 1;
        cursor.advance();
    }
    assert_eq!(lines, 50);
    assert_eq!(cursor.current(), b'\'');
    assert_eq!(cursor.pos() as usize, 50 * 1001);
}

#[test]
fn eat_whitespace_skips_tabs_and_form_feeds() {
    let mut cursor = Cursor::new(" \t\x0cx");
    cursor.eat_whitespace();
    assert_eq!(cursor.current(), b'x');
}

// === Property tests ===

mod proptest_scan {
    use super::Cursor;
    use proptest::prelude::*;

    fn scalar_string_delim(text: &str, quote: u8) -> usize {
        text.bytes()
            .position(|b| b == quote || b == b'\\' || b == b'\n' || b == b'\r')
            .unwrap_or(text.len())
    }

    proptest! {
        #[test]
        fn string_delim_matches_scalar(text in "[a-c'\"\\\\\n\r ]{0,64}") {
            let mut cursor = Cursor::new(&text);
            cursor.skip_to_string_delim(b'\'');
            prop_assert_eq!(cursor.pos() as usize, scalar_string_delim(&text, b'\''));
        }

        #[test]
        fn newline_scan_matches_scalar(text in "[a-z #\t\n\r]{0,64}") {
            let mut cursor = Cursor::new(&text);
            cursor.eat_until_newline_or_eof();
            let expected = text.bytes().position(|b| b == b'\n' || b == b'\r').unwrap_or(text.len());
            prop_assert_eq!(cursor.pos() as usize, expected);
        }

        #[test]
        fn advance_char_walks_whole_string(text in "\\PC{0,32}") {
            let mut cursor = Cursor::new(&text);
            let mut count = 0;
            while !cursor.is_eof() {
                cursor.advance_char();
                count += 1;
            }
            prop_assert_eq!(count, text.chars().count());
        }
    }
}
