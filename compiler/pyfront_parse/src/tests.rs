use pretty_assertions::assert_eq;
use pyfront_ir::{module_to_string, StmtKind};
use pyfront_lexer::{CommentFilter, LexErrorKind, Lexer};

use super::*;

fn recovering(source: &str) -> Parser<CommentFilter<Lexer<'_>>, CollectingLogger> {
    Parser::with_options("test.py", source, ParseOptions { recover: true })
        .with_logger(CollectingLogger::new())
}

// === Recovery ===

#[test]
fn recovery_replaces_bad_statement_with_marker() {
    let mut parser = recovering("x = 1\ny = = 2\ndef f():\n    pass\n");
    let stmts = parser.parse_module().unwrap_or_else(|err| panic!("{err}"));

    assert_eq!(stmts.len(), 3);
    assert!(parser.ast().stmt(stmts[1]).is_error_marker());
    assert!(matches!(
        parser.ast().stmt(stmts[2]).kind,
        StmtKind::FunctionDef { .. }
    ));
    assert_eq!(
        module_to_string(parser.ast(), &stmts),
        "x = 1\n#<parser-error>\ndef f():\n    pass\n"
    );

    let errors = parser.logger().errors();
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors[0].to_string(),
        "test.py(2): error: expected an expression, found '='"
    );
}

#[test]
fn recovery_resumes_at_comment() {
    let mut parser = recovering("a = (1,\n     2))\n# next\nb = 2\n");
    let stmts = parser.parse_module().unwrap_or_else(|err| panic!("{err}"));
    let rendered = module_to_string(parser.ast(), &stmts);
    assert_eq!(rendered, "#<parser-error>\n# next\nb = 2\n");
    assert_eq!(parser.logger().errors().len(), 1);
}

#[test]
fn recovery_always_makes_progress() {
    let mut parser = recovering("x = 1\n)\ny = 2\n");
    let stmts = parser.parse_module().unwrap_or_else(|err| panic!("{err}"));
    assert_eq!(stmts.len(), 2);
    assert!(parser.ast().stmt(stmts[1]).is_error_marker());
}

#[test]
fn errors_end_the_parse_without_recovery() {
    let mut parser = Parser::new("test.py", "x = 1\ny = = 2\nz = 3\n");
    let results: Vec<_> = parser.parse().collect();
    assert_eq!(results.len(), 2);
    assert!(results[0].is_ok());
    let Err(err) = &results[1] else {
        panic!("second statement parsed");
    };
    assert_eq!(err.line, 2);
    assert_eq!(
        err.kind,
        ParseErrorKind::ExpectedExpression { found: "'='".into() }
    );
}

#[test]
fn lexical_errors_are_never_recovered() {
    let mut parser = recovering("x = 1\ny = $\nz = 3\n");
    let err = parser.parse_module().map(|_| ()).unwrap_err();
    assert!(err.is_lexical());
    assert_eq!(err.kind, ParseErrorKind::Lexical(LexErrorKind::InvalidCharacter('$')));
    assert_eq!(err.to_string(), "test.py(2): error: unexpected character '$'");
    assert!(parser.logger().errors().is_empty());
}

#[test]
fn unterminated_string_is_reported_as_lexical() {
    let err = Parser::new("test.py", "s = 'abc\n")
        .parse_module()
        .map(|_| ())
        .unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::Lexical(LexErrorKind::UnterminatedString));
}

// === Laziness ===

#[test]
fn statements_are_yielded_before_later_errors() {
    let mut parser = Parser::new("test.py", "x = 1\ny = $\n");
    let mut stmts = parser.parse();
    let first = stmts.next().map(|r| r.map_err(|e| e.to_string()));
    let Some(Ok(first)) = first else {
        panic!("first statement failed: {first:?}");
    };
    assert!(matches!(stmts.ast().stmt(first).kind, StmtKind::Expr(_)));
    assert!(matches!(stmts.next(), Some(Err(err)) if err.is_lexical()));
    assert!(stmts.next().is_none());
}

#[test]
fn empty_and_blank_sources() {
    assert_eq!(Parser::new("test.py", "").parse_module(), Ok(Vec::new()));
    assert_eq!(Parser::new("test.py", "\n\n   \n").parse_module(), Ok(Vec::new()));
}

#[test]
fn comment_only_source() {
    let mut parser = Parser::new("test.py", "# one\n# two\n");
    let stmts = parser.parse_module().unwrap_or_else(|err| panic!("{err}"));
    assert_eq!(module_to_string(parser.ast(), &stmts), "# one\n# two\n");
}

#[test]
fn ast_keeps_filename() {
    let parser = Parser::new("pkg/mod.py", "x\n");
    assert_eq!(parser.ast().filename(), "pkg/mod.py");
}

#[test]
fn parse_expression_accepts_trailing_newline() {
    let mut parser = Parser::new("test.py", "a + 1\n");
    let id = parser.parse_expression().unwrap_or_else(|err| panic!("{err}"));
    assert_eq!(pyfront_ir::expr_to_string(parser.ast(), id), "(a + 1)");
}

#[test]
fn deeply_nested_unary_module_parses_and_renders() {
    let source = format!("x = {}1\n", "-".repeat(20_000));
    let mut parser = Parser::new("test.py", &source);
    let stmts = parser.parse_module().unwrap_or_else(|err| panic!("{err}"));

    assert_eq!(stmts.len(), 1);
    assert_eq!(module_to_string(parser.ast(), &stmts), source);
}
