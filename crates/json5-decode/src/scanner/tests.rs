use super::*;

fn drain(s: &mut Scanner<'_>) -> String {
    let mut out = String::new();
    while let Some(ch) = s.advance() {
        out.push(ch);
    }
    out
}

#[test]
fn starts_at_line_one_column_one() {
    let s = Scanner::new(b"abc");
    assert_eq!(
        s.position(),
        Position {
            line: 1,
            column: 1,
            offset: 0
        }
    );
    assert_eq!(s.peek(), Peeked::Char('a'));
}

#[test]
fn columns_count_scalars_offsets_count_bytes() {
    let src = "åβ€x";
    let mut s = Scanner::new(src.as_bytes());
    assert_eq!(drain(&mut s), src);
    assert_eq!(
        s.position(),
        Position {
            line: 1,
            column: 5,
            offset: src.len()
        }
    );
    assert_eq!(s.peek(), Peeked::EndOfInput);
}

#[test]
fn every_line_terminator_ends_one_line() {
    let mut s = Scanner::new("a\nb\rc\r\nd\u{2028}e\u{2029}f".as_bytes());
    let mut lines = Vec::new();
    loop {
        let pos = s.position();
        match s.advance() {
            Some(ch) if ch.is_alphabetic() => lines.push((ch, pos.line, pos.column)),
            Some(_) => {}
            None => break,
        }
    }
    assert_eq!(
        lines,
        vec![
            ('a', 1, 1),
            ('b', 2, 1),
            ('c', 3, 1),
            ('d', 4, 1),
            ('e', 5, 1),
            ('f', 6, 1)
        ]
    );
}

#[test]
fn lone_cr_followed_by_lf_later_counts_twice() {
    let mut s = Scanner::new(b"\rx\n");
    drain(&mut s);
    assert_eq!(s.position().line, 3);
}

#[test]
fn invalid_utf8_is_peeked_and_not_consumed() {
    let mut s = Scanner::new(b"a\xFFb");
    assert_eq!(s.advance(), Some('a'));
    assert_eq!(s.peek(), Peeked::InvalidUtf8);
    assert_eq!(s.advance(), None);
    assert_eq!(s.position().offset, 1);

    let err = s.invalid(s.peek());
    assert_eq!(err.kind(), &ErrorKind::InvalidUtf8);
    assert_eq!((err.line, err.column, err.offset), (1, 2, 1));
}

#[test]
fn truncated_multibyte_sequence_is_invalid() {
    let bytes = "é".as_bytes();
    let s = Scanner::new(&bytes[..1]);
    assert_eq!(s.peek(), Peeked::InvalidUtf8);
}

#[test]
fn eat_consumes_only_the_expected_char() {
    let mut s = Scanner::new(b"*/");
    assert!(!s.eat('/'));
    assert!(s.eat('*'));
    assert!(s.eat('/'));
    assert!(!s.eat('/'));
    assert_eq!(s.peek(), Peeked::EndOfInput);
}

#[test]
fn copy_while_ascii_stops_at_predicate_and_line_breaks() {
    let mut s = Scanner::new(b"12345,");
    let mut out = String::new();
    assert_eq!(s.copy_while_ascii(&mut out, |b| b.is_ascii_digit()), 5);
    assert_eq!(out, "12345");
    assert_eq!(s.peek(), Peeked::Char(','));
    assert_eq!(s.position().column, 6);

    let mut s = Scanner::new(b"ab\ncd");
    let mut out = String::new();
    assert_eq!(s.copy_while_ascii(&mut out, |_| true), 2);
    assert_eq!(s.peek(), Peeked::Char('\n'));
}

#[test]
fn copy_while_ascii_stops_at_multibyte() {
    let mut s = Scanner::new("abé".as_bytes());
    let mut out = String::new();
    assert_eq!(s.copy_while_ascii(&mut out, |_| true), 2);
    assert_eq!(s.peek(), Peeked::Char('é'));
}

#[test]
fn copy_after_cr_resets_crlf_tracking() {
    let mut s = Scanner::new(b"\rab\n");
    s.advance();
    let mut out = String::new();
    s.copy_while_ascii(&mut out, |_| true);
    s.advance();
    assert_eq!(s.position().line, 3);
}

#[test]
fn invalid_maps_peeked_to_error_kind() {
    let s = Scanner::new(b"");
    assert_eq!(
        s.invalid(Peeked::EndOfInput).kind(),
        &ErrorKind::UnexpectedEndOfInput
    );
    assert_eq!(
        s.invalid(Peeked::Char('#')).kind(),
        &ErrorKind::InvalidCharacter('#')
    );
}
