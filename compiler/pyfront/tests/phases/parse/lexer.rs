//! Lexer tests through the public API.

use pretty_assertions::assert_eq;
use pyfront::{lex, LexError, LexErrorKind};
use pyfront_ir::TokenKind::{self, *};

use crate::common::token_kinds;

fn kinds(source: &str) -> Vec<TokenKind> {
    lex("test.py", source).unwrap().iter().map(|t| t.kind).collect()
}

fn lex_err(source: &str) -> LexError {
    lex("test.py", source).unwrap_err()
}

#[test]
fn function_with_nested_block() {
    let source = "def f(x):\n    if x:\n        return 1\n    return 2\n";
    assert_eq!(
        kinds(source),
        vec![
            KwDef, Ident, LParen, Ident, RParen, Colon, Newline, Indent, KwIf, Ident, Colon,
            Newline, Indent, KwReturn, Integer, Newline, Dedent, KwReturn, Integer, Newline,
            Dedent, Eof
        ]
    );
}

#[test]
fn brackets_suppress_line_structure() {
    let source = "x = [\n    1,\n        2,\n]\n";
    assert_eq!(
        kinds(source),
        vec![Ident, Eq, LBracket, Integer, Comma, Integer, Comma, RBracket, Newline, Eof]
    );
}

#[test]
fn backslash_continuation() {
    assert_eq!(
        kinds("x = 1 + \\\n    2\n"),
        vec![Ident, Eq, Integer, Plus, Integer, Newline, Eof]
    );
}

#[test]
fn triple_quoted_string_spans_lines() {
    let tokens = lex("test.py", "s = \"\"\"a\nb\"\"\"\nt = 1\n").unwrap();
    let lit = tokens[2].str_literal().unwrap();
    assert_eq!(lit.text, "a\nb");
    assert_eq!(tokens[4].line, 3);
}

#[test]
fn every_indent_is_balanced() {
    let source = "class A:\n    def f(self):\n        pass\n    def g(self):\n        if x:\n            y\n";
    let kinds = kinds(source);
    let indents = kinds.iter().filter(|k| **k == Indent).count();
    let dedents = kinds.iter().filter(|k| **k == Dedent).count();
    assert_eq!(indents, dedents);
    assert_eq!(kinds.last(), Some(&Eof));
}

#[test]
fn filtered_stream_matches_raw_without_comments() {
    let source = "if a:\n    b\nelse:\n    c\n";
    assert_eq!(token_kinds(source), kinds(source));
}

#[test]
fn errors_carry_file_and_line() {
    let err = lex_err("a = 1\nb = 'open\n");
    assert_eq!(err.kind, LexErrorKind::UnterminatedString);
    assert_eq!(err.line, 2);
    assert_eq!(err.to_string(), "test.py(2): error: unterminated string literal");

    let err = lex_err("if a:\n        b\n    c\n");
    assert_eq!(err.kind, LexErrorKind::InconsistentDedent);
    assert_eq!(err.line, 3);

    assert_eq!(lex_err("x = a ? b\n").kind, LexErrorKind::InvalidCharacter('?'));
    assert_eq!(lex_err("x = '''never closed\n").kind, LexErrorKind::EofInString);
}
