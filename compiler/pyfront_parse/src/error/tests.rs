use pretty_assertions::assert_eq;
use pyfront_ir::{Span, StrFlags, StrLiteral, Token, TokenKind, TokenValue};
use pyfront_lexer::{LexError, LexErrorKind};

use super::*;

#[test]
fn display_format() {
    let err = ParseError::new(
        "mod.py",
        7,
        Span::new(3, 4),
        ParseErrorKind::UnexpectedToken {
            expected: "':'".into(),
            found: "NEWLINE".into(),
        },
    );
    assert_eq!(err.to_string(), "mod.py(7): error: expected ':', found NEWLINE");
}

#[test]
fn lexical_errors_convert() {
    let lex = LexError::new("a.py", 2, Span::new(5, 6), LexErrorKind::LoneBang);
    let err = ParseError::from(lex);
    assert!(err.is_lexical());
    assert_eq!(err.line, 2);
    assert_eq!(err.to_string(), "a.py(2): error: expected '=' after '!'");
}

#[test]
fn describe_tokens() {
    let ident = Token::new(TokenKind::Ident, Span::DUMMY, 1, 0)
        .with_value(TokenValue::Text("foo".into()));
    assert_eq!(describe(&ident), "identifier 'foo'");

    let number = Token::new(TokenKind::Integer, Span::DUMMY, 1, 0)
        .with_value(TokenValue::Text("42".into()));
    assert_eq!(describe(&number), "'42'");

    let string = Token::new(TokenKind::String, Span::DUMMY, 1, 0)
        .with_value(TokenValue::Str(StrLiteral::new("x", StrFlags::empty())));
    assert_eq!(describe(&string), "string literal");

    let colon = Token::new(TokenKind::Colon, Span::DUMMY, 1, 0);
    assert_eq!(describe(&colon), "':'");
}
