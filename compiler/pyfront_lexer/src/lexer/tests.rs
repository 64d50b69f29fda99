use pretty_assertions::assert_eq;
use pyfront_ir::{NumericValue, StrFlags, Token, TokenKind};

use crate::{lex, LexErrorKind, Lexer, TokenSource};

fn tokens(source: &str) -> Vec<Token> {
    match lex("test.py", source) {
        Ok(tokens) => tokens,
        Err(err) => panic!("unexpected lex error: {err}"),
    }
}

fn kinds(source: &str) -> Vec<TokenKind> {
    tokens(source).iter().map(|t| t.kind).collect()
}

fn error_kind(source: &str) -> LexErrorKind {
    match lex("test.py", source) {
        Ok(tokens) => panic!("expected a lex error, got {tokens:?}"),
        Err(err) => err.kind,
    }
}

fn single(source: &str) -> Token {
    let all = tokens(source);
    assert_eq!(all.last().map(|t| t.kind), Some(TokenKind::Eof));
    all.into_iter().next().unwrap_or_else(|| panic!("no tokens"))
}

// === Logical Lines ===

#[test]
fn simple_lines() {
    use TokenKind::*;
    assert_eq!(kinds("a\nb\n"), vec![Ident, Newline, Ident, Newline, Eof]);
}

#[test]
fn missing_trailing_newline() {
    use TokenKind::*;
    assert_eq!(kinds("a"), vec![Ident, Eof]);
    assert_eq!(kinds(""), vec![Eof]);
}

#[test]
fn newline_inside_brackets_is_whitespace() {
    use TokenKind::*;
    assert_eq!(kinds("(\n)"), vec![LParen, RParen, Eof]);
    assert_eq!(
        kinds("x = [1,\n     2]\n"),
        vec![Ident, Eq, LBracket, Integer, Comma, Integer, RBracket, Newline, Eof]
    );
}

#[test]
fn unbalanced_closer_saturates() {
    use TokenKind::*;
    assert_eq!(kinds(")\na\n"), vec![RParen, Newline, Ident, Newline, Eof]);
}

#[test]
fn blank_lines_are_skipped() {
    use TokenKind::*;
    assert_eq!(kinds("a\n\n   \n\t\nb\n"), vec![Ident, Newline, Ident, Newline, Eof]);
}

#[test]
fn crlf_and_cr_line_breaks() {
    use TokenKind::*;
    assert_eq!(kinds("a\r\nb\rc\n"), vec![Ident, Newline, Ident, Newline, Ident, Newline, Eof]);
}

#[test]
fn newline_reports_the_line_it_ends() {
    let all = tokens("a\nb\n");
    let lines: Vec<u32> = all.iter().map(|t| t.line).collect();
    assert_eq!(lines, vec![1, 1, 2, 2, 3]);
}

#[test]
fn explicit_line_continuation() {
    use TokenKind::*;
    assert_eq!(kinds("a = \\\n    1\n"), vec![Ident, Eq, Integer, Newline, Eof]);
}

#[test]
fn stray_backslash() {
    assert_eq!(error_kind("a \\ b\n"), LexErrorKind::StrayBackslash);
}

// === Indentation ===

#[test]
fn indent_and_dedent() {
    use TokenKind::*;
    assert_eq!(
        kinds("if x:\n    y\n"),
        vec![KwIf, Ident, Colon, Newline, Indent, Ident, Newline, Dedent, Eof]
    );
}

#[test]
fn multiple_dedents_on_one_line() {
    use TokenKind::*;
    assert_eq!(
        kinds("if a:\n    if b:\n        c\nd\n"),
        vec![
            KwIf, Ident, Colon, Newline, Indent, KwIf, Ident, Colon, Newline, Indent, Ident,
            Newline, Dedent, Dedent, Ident, Newline, Eof,
        ]
    );
}

#[test]
fn ragged_dedent_is_an_error() {
    let err = match lex("test.py", "if a:\n    b\n  c\n") {
        Ok(tokens) => panic!("expected a lex error, got {tokens:?}"),
        Err(err) => err,
    };
    assert_eq!(err.kind, LexErrorKind::InconsistentDedent);
    assert_eq!(err.line, 3);
    assert_eq!(
        err.to_string(),
        "test.py(3): error: unindent does not match any outer indentation level"
    );
}

#[test]
fn tab_advances_to_multiple_of_eight() {
    let all = tokens("if a:\n\tb\n  \tc\n");
    let b = &all[5];
    assert_eq!(b.kind, TokenKind::Ident);
    assert_eq!(b.indent, 8);
    // Two spaces then a tab still lands on column 8: no extra INDENT.
    assert_eq!(all[7].kind, TokenKind::Ident);
    assert_eq!(all[7].indent, 8);
}

#[test]
fn comment_lines_do_not_affect_indentation() {
    use TokenKind::*;
    assert_eq!(
        kinds("if a:\n    b\n# c\n    d\n"),
        vec![
            KwIf, Ident, Colon, Newline, Indent, Ident, Newline, Comment, Newline, Ident,
            Newline, Dedent, Eof,
        ]
    );
}

#[test]
fn eof_unwinds_then_repeats() {
    let mut lexer = Lexer::new("test.py", "if a:\n    b");
    let mut seen = Vec::new();
    for _ in 0..10 {
        match lexer.get() {
            Ok(token) => seen.push(token.kind),
            Err(err) => panic!("{err}"),
        }
    }
    let dedents = seen.iter().filter(|k| **k == TokenKind::Dedent).count();
    assert_eq!(dedents, 1);
    assert_eq!(seen.last(), Some(&TokenKind::Eof));
    assert_eq!(lexer.indent_depth(), 0);
}

// === Comments ===

#[test]
fn comment_text_excludes_hash() {
    let token = single("#hello\n");
    assert_eq!(token.kind, TokenKind::Comment);
    assert_eq!(token.text(), Some("hello"));
}

#[test]
fn trailing_comment() {
    use TokenKind::*;
    let all = tokens("x = 1  # one\n");
    let kinds: Vec<_> = all.iter().map(|t| t.kind).collect();
    assert_eq!(kinds, vec![Ident, Eq, Integer, Comment, Newline, Eof]);
    assert_eq!(all[3].text(), Some(" one"));
}

#[test]
fn comment_inside_brackets_is_emitted() {
    use TokenKind::*;
    assert_eq!(kinds("(a # c\n)\n"), vec![LParen, Ident, Comment, RParen, Newline, Eof]);
}

// === Identifiers and Keywords ===

#[test]
fn keywords_and_identifiers() {
    use TokenKind::*;
    assert_eq!(
        kinds("def print(self): pass\n"),
        vec![KwDef, Ident, LParen, Ident, RParen, Colon, KwPass, Newline, Eof]
    );
}

#[test]
fn non_ascii_identifier() {
    let token = single("größe");
    assert_eq!(token.kind, TokenKind::Ident);
    assert_eq!(token.text(), Some("größe"));
}

// === Numbers ===

#[test]
fn integer_with_underscores() {
    let token = single("3_000");
    assert_eq!(token.kind, TokenKind::Integer);
    assert_eq!(token.text(), Some("3_000"));
    assert_eq!(token.numeric, Some(NumericValue::Int(3000)));
}

#[test]
fn binary_with_underscores() {
    let token = single("0b_0100_0000");
    assert_eq!(token.kind, TokenKind::Integer);
    assert_eq!(token.text(), Some("0b_0100_0000"));
    assert_eq!(token.numeric, Some(NumericValue::Int(64)));
}

#[test]
fn radix_literals() {
    assert_eq!(single("0xff").numeric, Some(NumericValue::Int(255)));
    assert_eq!(single("0o17").numeric, Some(NumericValue::Int(15)));
    assert_eq!(single("0").numeric, Some(NumericValue::Int(0)));
    assert_eq!(single("007").numeric, Some(NumericValue::Int(7)));
}

#[test]
fn integer_overflows_into_long_tier() {
    let token = single("2147483648");
    assert_eq!(token.kind, TokenKind::LongInteger);
    assert_eq!(token.numeric, Some(NumericValue::Long(2_147_483_648)));

    let big = single("99999999999999999999");
    assert_eq!(big.kind, TokenKind::LongInteger);
    assert!(matches!(big.numeric, Some(NumericValue::Big(_))));
}

#[test]
fn long_suffix() {
    let token = single("10L");
    assert_eq!(token.kind, TokenKind::LongInteger);
    assert_eq!(token.text(), Some("10"));
    assert_eq!(token.numeric, Some(NumericValue::Long(10)));
}

#[test]
fn reals() {
    for (source, value) in [("1.5", 1.5), (".5", 0.5), ("1.", 1.0), ("1e3", 1000.0), ("2E-1", 0.2)] {
        let token = single(source);
        assert_eq!(token.kind, TokenKind::Real, "{source}");
        assert_eq!(token.numeric, Some(NumericValue::Real(value)), "{source}");
    }
}

#[test]
fn real_overflow_is_infinite() {
    let token = single("1e400");
    assert_eq!(token.numeric, Some(NumericValue::Real(f64::INFINITY)));
}

#[test]
fn imaginary() {
    let token = single("3j");
    assert_eq!(token.kind, TokenKind::Imaginary);
    assert_eq!(token.text(), Some("3"));
    assert_eq!(token.numeric, Some(NumericValue::Real(3.0)));
    assert_eq!(single("1.5J").numeric, Some(NumericValue::Real(1.5)));
}

#[test]
fn malformed_numbers() {
    assert_eq!(error_kind("0x"), LexErrorKind::MalformedNumber("0x".into()));
    assert_eq!(error_kind("1e+"), LexErrorKind::MalformedNumber("1e+".into()));
}

// === Strings ===

#[test]
fn string_keeps_escapes_verbatim() {
    let token = single(r"'a\'b\n'");
    let lit = token.str_literal().map(|l| l.text.as_str());
    assert_eq!(lit, Some(r"a\'b\n"));
}

#[test]
fn string_prefixes() {
    let cases = [
        ("r\"x\"", StrFlags::RAW),
        ("b\"x\"", StrFlags::BYTES),
        ("u\"x\"", StrFlags::UNICODE),
        ("f\"x\"", StrFlags::FORMAT),
        ("Rb\"x\"", StrFlags::RAW | StrFlags::BYTES),
        ("bR\"x\"", StrFlags::RAW | StrFlags::BYTES),
        ("ur'x'", StrFlags::RAW | StrFlags::UNICODE | StrFlags::SINGLE_QUOTED),
        ("'''x'''", StrFlags::LONG | StrFlags::SINGLE_QUOTED),
    ];
    for (source, flags) in cases {
        let token = single(source);
        assert_eq!(token.kind, TokenKind::String, "{source}");
        assert_eq!(token.str_literal().map(|l| l.flags), Some(flags), "{source}");
    }
}

#[test]
fn invalid_prefix_is_an_identifier() {
    use TokenKind::*;
    assert_eq!(kinds("bu'x'"), vec![Ident, String, Eof]);
}

#[test]
fn empty_strings() {
    assert_eq!(single("''").str_literal().map(|l| l.text.as_str()), Some(""));
    let long = single("\"\"\"\"\"\"");
    assert_eq!(long.str_literal().map(|l| l.flags), Some(StrFlags::LONG));
}

#[test]
fn triple_quoted_spans_lines() {
    let all = tokens("s = \"\"\"a\nb\"\"\"\nx\n");
    let s = &all[2];
    assert_eq!(s.str_literal().map(|l| l.text.as_str()), Some("a\nb"));
    assert_eq!(s.str_literal().map(|l| l.flags), Some(StrFlags::LONG));
    assert_eq!(s.line, 2);
    assert_eq!(all[4].line, 3);
}

#[test]
fn triple_quoted_with_embedded_quotes() {
    let token = single("'''it's ''ok'''");
    assert_eq!(token.str_literal().map(|l| l.text.as_str()), Some("it's ''ok"));
}

#[test]
fn escaped_newline_in_short_string() {
    let token = single("'a\\\nb'");
    assert_eq!(token.str_literal().map(|l| l.text.as_str()), Some("a\\\nb"));
}

#[test]
fn unterminated_strings() {
    assert_eq!(error_kind("'abc\nd'"), LexErrorKind::UnterminatedString);
    assert_eq!(error_kind("'abc"), LexErrorKind::EofInString);
    assert_eq!(error_kind("'''abc\n"), LexErrorKind::EofInString);
    assert_eq!(error_kind("'abc\\"), LexErrorKind::EofInString);
}

// === Operators ===

#[test]
fn operators() {
    use TokenKind::*;
    assert_eq!(
        kinds("a != b -> c := d ... e ** f // g << h >> i"),
        vec![
            Ident, NotEq, Ident, Arrow, Ident, ColonEq, Ident, Ellipsis, Ident, StarStar, Ident,
            SlashSlash, Ident, Shl, Ident, Shr, Ident, Eof,
        ]
    );
}

#[test]
fn augmented_assignments() {
    use TokenKind::*;
    assert_eq!(
        kinds("+= -= *= /= //= %= &= |= ^= <<= >>= **= @="),
        vec![
            PlusEq, MinusEq, StarEq, SlashEq, SlashSlashEq, PercentEq, AmpEq, PipeEq, CaretEq,
            ShlEq, ShrEq, StarStarEq, AtEq, Eof,
        ]
    );
}

#[test]
fn two_dots_are_two_tokens() {
    use TokenKind::*;
    assert_eq!(kinds(".."), vec![Dot, Dot, Eof]);
}

#[test]
fn lone_bang() {
    assert_eq!(error_kind("!x"), LexErrorKind::LoneBang);
}

#[test]
fn invalid_character() {
    assert_eq!(error_kind("a $ b"), LexErrorKind::InvalidCharacter('$'));
}

// === Token Source ===

#[test]
fn peek_is_idempotent() {
    let mut lexer = Lexer::new("test.py", "a b");
    let first = lexer.peek().map(|t| t.kind);
    let second = lexer.peek().map(|t| t.kind);
    assert_eq!(first, Ok(TokenKind::Ident));
    assert_eq!(second, Ok(TokenKind::Ident));
    let got = lexer.get().map(|t| t.text().map(str::to_owned));
    assert_eq!(got, Ok(Some("a".to_owned())));
    let next = lexer.get().map(|t| t.text().map(str::to_owned));
    assert_eq!(next, Ok(Some("b".to_owned())));
}

#[test]
fn error_is_sticky() {
    let mut lexer = Lexer::new("test.py", "$ a");
    let first = lexer.get();
    let second = lexer.get();
    assert!(first.is_err());
    assert_eq!(first, second);
}

#[test]
fn line_number_tracks_progress() {
    let mut lexer = Lexer::new("test.py", "a\nb\n");
    assert_eq!(lexer.line_number(), 1);
    while let Ok(token) = lexer.get() {
        if token.kind == TokenKind::Eof {
            break;
        }
    }
    assert_eq!(lexer.line_number(), 3);
    assert_eq!(lexer.filename(), "test.py");
}

mod proptest_indentation {
    use proptest::prelude::*;

    use super::*;

    fn nested_source(levels: &[u32]) -> String {
        let mut prev = 0;
        let mut source = String::new();
        for &raw in levels {
            let depth = raw.min(prev + 1);
            prev = depth;
            source.push_str(&" ".repeat(depth as usize * 4));
            source.push_str("x\n");
        }
        source
    }

    proptest! {
        #[test]
        fn indents_and_dedents_balance(levels in prop::collection::vec(0u32..6, 1..30)) {
            let source = nested_source(&levels);
            let all = lex("test.py", &source).map_err(|e| TestCaseError::fail(e.to_string()))?;
            let indents = all.iter().filter(|t| t.kind == TokenKind::Indent).count();
            let dedents = all.iter().filter(|t| t.kind == TokenKind::Dedent).count();
            prop_assert_eq!(indents, dedents);
            prop_assert_eq!(all.last().map(|t| t.kind), Some(TokenKind::Eof));
        }

        #[test]
        fn arbitrary_ascii_never_panics(source in "[ -~\n\t]{0,64}") {
            let _ = lex("test.py", &source);
        }
    }
}
