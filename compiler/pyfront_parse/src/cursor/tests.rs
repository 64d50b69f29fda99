use pretty_assertions::assert_eq;
use pyfront_ir::TokenKind;
use pyfront_lexer::{LexErrorKind, Lexer};

use super::TokenCursor;

fn cursor(source: &str) -> TokenCursor<Lexer<'_>> {
    TokenCursor::new(Lexer::new("t.py", source))
}

#[test]
fn advance_returns_consumed_token() {
    let mut c = cursor("a b");
    let first = c.advance();
    assert_eq!(first.text(), Some("a"));
    assert_eq!(c.current().text(), Some("b"));
    assert_eq!(c.position(), 1);
}

#[test]
fn peek_kind_looks_past_current() {
    let mut c = cursor("print >> f");
    assert!(c.check_name("print"));
    assert_eq!(c.peek_kind(), TokenKind::Shr);
    assert_eq!(c.current_kind(), TokenKind::Ident);
}

#[test]
fn comments_inside_brackets_are_dropped() {
    let mut c = cursor("(a, # one\n b)\n# two\n");
    let mut kinds = Vec::new();
    while !c.is_at_end() {
        kinds.push(c.advance().kind);
    }
    use TokenKind::*;
    assert_eq!(
        kinds,
        vec![LParen, Ident, Comma, Ident, RParen, Newline, Comment, Newline]
    );
}

#[test]
fn eat_only_matching_kind() {
    let mut c = cursor("a = 1");
    assert!(!c.eat(TokenKind::Eq));
    assert!(c.eat(TokenKind::Ident));
    assert!(c.eat(TokenKind::Eq));
    assert_eq!(c.current_kind(), TokenKind::Integer);
}

#[test]
fn lexical_error_becomes_eof() {
    let mut c = cursor("a $ b");
    c.advance();
    assert!(c.is_at_end());
    assert_eq!(
        c.lex_error().map(|e| e.kind.clone()),
        Some(LexErrorKind::InvalidCharacter('$'))
    );
    c.advance();
    assert!(c.is_at_end());
}
