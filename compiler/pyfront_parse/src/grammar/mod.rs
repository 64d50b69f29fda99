//! Grammar productions.
//!
//! One method per production, all on [`Parser`]:
//!
//! - `stmt/`: statement dispatch, simple statements, suites and compound
//!   statements
//! - `expr/`: the precedence chain from `test` down to atoms, trailers and
//!   comprehensions
//! - `params.rs`: `def` and `lambda` parameter lists

mod expr;
mod params;
mod stmt;

use pyfront_ir::{Expr, ExprId, ExprKind, Span, Stmt, StmtId, StmtKind, Token, TokenKind};

use crate::error::describe;
use crate::{ParseError, ParseErrorKind, Parser};

impl<S: pyfront_lexer::TokenSource, L> Parser<S, L> {
    // === Errors ===

    fn error(&self, kind: ParseErrorKind) -> ParseError {
        ParseError::new(
            self.cursor.filename(),
            self.cursor.line(),
            self.cursor.current_span(),
            kind,
        )
    }

    /// `expected {expected}, found {current token}`.
    pub(crate) fn unexpected(&self, expected: &str) -> ParseError {
        self.error(ParseErrorKind::UnexpectedToken {
            expected: expected.to_owned(),
            found: describe(self.cursor.current()),
        })
    }

    fn expected_expression(&self) -> ParseError {
        self.error(ParseErrorKind::ExpectedExpression {
            found: describe(self.cursor.current()),
        })
    }

    // === Token Helpers ===

    /// Consume a token of kind `kind` or fail.
    fn expect(&mut self, kind: TokenKind) -> Result<Token, ParseError> {
        if self.cursor.check(kind) {
            Ok(self.cursor.advance())
        } else {
            Err(self.unexpected(kind.name()))
        }
    }

    /// Consume an identifier and return its text.
    fn expect_ident(&mut self) -> Result<String, ParseError> {
        if !self.cursor.check(TokenKind::Ident) {
            return Err(self.unexpected("identifier"));
        }
        let token = self.cursor.advance();
        Ok(token.text().unwrap_or_default().to_owned())
    }

    // === Allocation ===

    fn alloc_expr(&mut self, kind: ExprKind, span: Span) -> ExprId {
        self.ast.alloc_expr(Expr::new(kind, span))
    }

    fn alloc_stmt(&mut self, kind: StmtKind, span: Span) -> StmtId {
        self.ast.alloc_stmt(Stmt::new(kind, span))
    }

    #[inline]
    fn expr_span(&self, id: ExprId) -> Span {
        self.ast.expr(id).span
    }

    /// From `start` to the end of the last consumed token.
    #[inline]
    fn span_from(&self, start: Span) -> Span {
        start.merge(self.cursor.previous_span())
    }
}
