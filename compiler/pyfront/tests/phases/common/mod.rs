//! Shared helpers for phase tests.

use pyfront::{
    module_to_string, Ast, CollectingLogger, CommentFilter, Lexer, ParseError, ParseOptions,
    Parser, StmtId, TokenSource,
};
use pyfront_ir::TokenKind;

/// Kinds of the filtered token stream, `Eof` included.
pub fn token_kinds(source: &str) -> Vec<TokenKind> {
    let mut tokens = CommentFilter::new(Lexer::new("test.py", source));
    let mut kinds = Vec::new();
    loop {
        let kind = tokens.get().unwrap().kind;
        kinds.push(kind);
        if kind == TokenKind::Eof {
            return kinds;
        }
    }
}

/// Parse with default options, panicking on error.
pub fn parse_ok(source: &str) -> (Ast, Vec<StmtId>) {
    let mut parser = Parser::new("test.py", source);
    let stmts = parser
        .parse_module()
        .unwrap_or_else(|err| panic!("{source:?}: {err}"));
    (parser.into_ast(), stmts)
}

/// Parse with default options and return the error.
pub fn parse_err(source: &str) -> ParseError {
    match Parser::new("test.py", source).parse_module() {
        Ok(_) => panic!("{source:?} parsed without error"),
        Err(err) => err,
    }
}

/// Parse in recovery mode; returns the rendered tree and the logged errors.
pub fn recover(source: &str) -> (String, Vec<ParseError>) {
    let mut parser = Parser::with_options("test.py", source, ParseOptions { recover: true })
        .with_logger(CollectingLogger::new());
    let stmts = parser
        .parse_module()
        .unwrap_or_else(|err| panic!("{source:?}: {err}"));
    let text = module_to_string(parser.ast(), &stmts);
    (text, parser.logger().errors().to_vec())
}

/// Parse and render back to source.
pub fn format(source: &str) -> String {
    let (ast, stmts) = parse_ok(source);
    module_to_string(&ast, &stmts)
}
