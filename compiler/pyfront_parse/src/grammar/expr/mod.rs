//! Expression parsing.
//!
//! The precedence chain, loosest first:
//!
//! ```text
//! test        lambda | or_test ['if' or_test 'else' test] | NAME ':=' test
//! or_test     and_test ('or' and_test)*
//! and_test    not_test ('and' not_test)*
//! not_test    'not' not_test | comparison
//! comparison  or_expr (comp_op or_expr)*
//! or_expr     | ^ & << >> + - * / // % @     (operators.rs)
//! factor      ('+'|'-'|'~') factor | power
//! power       ['await'] atom trailer* ['**' factor]
//! ```
//!
//! # Module Structure
//!
//! - `mod.rs`: `test` down to `comparison`, expression lists, `yield`
//! - `operators.rs`: left-associative binary levels, unary and power
//! - `primary.rs`: atoms and displays
//! - `postfix.rs`: calls, subscripts, attributes
//! - `comprehension.rs`: `comp_for`/`comp_if` chains

mod comprehension;
mod operators;
mod postfix;
mod primary;


use pyfront_ir::{BinaryOp, ExprId, ExprKind, TokenKind, UnaryOp};
use pyfront_lexer::TokenSource;
use pyfront_stack::ensure_sufficient_stack;

use crate::recovery::EXPR_START;
use crate::{ParseError, Parser};

impl<S: TokenSource, L> Parser<S, L> {
    /// Parse a `test`: conditional expression, lambda or walrus.
    pub(crate) fn test(&mut self) -> Result<ExprId, ParseError> {
        ensure_sufficient_stack(|| self.test_inner())
    }

    fn test_inner(&mut self) -> Result<ExprId, ParseError> {
        if self.cursor.check(TokenKind::KwLambda) {
            return self.lambda();
        }

        let body = self.or_test()?;
        let start = self.expr_span(body);

        if self.cursor.check(TokenKind::ColonEq)
            && matches!(self.ast.expr(body).kind, ExprKind::Name(_))
        {
            self.cursor.advance();
            let value = self.test()?;
            let span = start.merge(self.expr_span(value));
            return Ok(self.alloc_expr(ExprKind::Walrus { target: body, value }, span));
        }

        if !self.cursor.eat(TokenKind::KwIf) {
            return Ok(body);
        }
        let test = self.or_test()?;
        self.expect(TokenKind::KwElse)?;
        let orelse = self.test()?;
        let span = start.merge(self.expr_span(orelse));
        Ok(self.alloc_expr(ExprKind::Conditional { body, test, orelse }, span))
    }

    /// `lambda [varargslist]: test`
    fn lambda(&mut self) -> Result<ExprId, ParseError> {
        let start = self.cursor.advance().span;
        let params = self.parameters(TokenKind::Colon, false)?;
        self.expect(TokenKind::Colon)?;
        let body = self.test()?;
        let span = start.merge(self.expr_span(body));
        Ok(self.alloc_expr(ExprKind::Lambda { params, body }, span))
    }

    pub(crate) fn or_test(&mut self) -> Result<ExprId, ParseError> {
        let mut left = self.and_test()?;
        while self.cursor.eat(TokenKind::KwOr) {
            let right = self.and_test()?;
            left = self.binary(BinaryOp::Or, left, right);
        }
        Ok(left)
    }

    fn and_test(&mut self) -> Result<ExprId, ParseError> {
        let mut left = self.not_test()?;
        while self.cursor.eat(TokenKind::KwAnd) {
            let right = self.not_test()?;
            left = self.binary(BinaryOp::And, left, right);
        }
        Ok(left)
    }

    fn not_test(&mut self) -> Result<ExprId, ParseError> {
        if !self.cursor.check(TokenKind::KwNot) {
            return self.comparison();
        }
        let start = self.cursor.advance().span;
        let operand = ensure_sufficient_stack(|| self.not_test())?;
        let span = start.merge(self.expr_span(operand));
        Ok(self.alloc_expr(
            ExprKind::Unary {
                op: UnaryOp::Not,
                operand,
            },
            span,
        ))
    }

    /// Comparisons chain left-associatively: `a < b < c` is
    /// `((a < b) < c)`.
    fn comparison(&mut self) -> Result<ExprId, ParseError> {
        let mut left = self.or_expr()?;
        loop {
            let op = match self.cursor.current_kind() {
                TokenKind::Lt => BinaryOp::Lt,
                TokenKind::Gt => BinaryOp::Gt,
                TokenKind::EqEq => BinaryOp::Eq,
                TokenKind::GtEq => BinaryOp::GtEq,
                TokenKind::LtEq => BinaryOp::LtEq,
                TokenKind::NotEq => BinaryOp::NotEq,
                TokenKind::KwIn => BinaryOp::In,
                TokenKind::KwIs => {
                    self.cursor.advance();
                    let op = if self.cursor.eat(TokenKind::KwNot) {
                        BinaryOp::IsNot
                    } else {
                        BinaryOp::Is
                    };
                    let right = self.or_expr()?;
                    left = self.binary(op, left, right);
                    continue;
                }
                TokenKind::KwNot => {
                    self.cursor.advance();
                    self.expect(TokenKind::KwIn)?;
                    let right = self.or_expr()?;
                    left = self.binary(BinaryOp::NotIn, left, right);
                    continue;
                }
                _ => return Ok(left),
            };
            self.cursor.advance();
            let right = self.or_expr()?;
            left = self.binary(op, left, right);
        }
    }

    pub(crate) fn binary(&mut self, op: BinaryOp, left: ExprId, right: ExprId) -> ExprId {
        let span = self.expr_span(left).merge(self.expr_span(right));
        self.alloc_expr(ExprKind::Binary { op, left, right }, span)
    }

    // === Expression Lists ===

    /// `*expr` or `test`.
    pub(crate) fn test_or_star(&mut self) -> Result<ExprId, ParseError> {
        if self.cursor.check(TokenKind::Star) {
            self.star_expr()
        } else {
            self.test()
        }
    }

    /// `*expr` or `expr` (no comparisons, so `in` is left alone).
    fn expr_or_star(&mut self) -> Result<ExprId, ParseError> {
        if self.cursor.check(TokenKind::Star) {
            self.star_expr()
        } else {
            self.or_expr()
        }
    }

    fn star_expr(&mut self) -> Result<ExprId, ParseError> {
        let start = self.cursor.advance().span;
        let value = self.or_expr()?;
        let span = start.merge(self.expr_span(value));
        Ok(self.alloc_expr(ExprKind::Starred(value), span))
    }

    /// Comma-separated `test`s (with `*` unpacking). A single item without
    /// a comma is returned as-is; otherwise the items form an `ExprList`.
    pub(crate) fn testlist(&mut self) -> Result<ExprId, ParseError> {
        let first = self.test_or_star()?;
        self.expr_list(first, Self::test_or_star)
    }

    /// Comma-separated targets for `for` and `del`.
    pub(crate) fn exprlist(&mut self) -> Result<ExprId, ParseError> {
        let first = self.expr_or_star()?;
        self.expr_list(first, Self::expr_or_star)
    }

    fn expr_list(
        &mut self,
        first: ExprId,
        item: fn(&mut Self) -> Result<ExprId, ParseError>,
    ) -> Result<ExprId, ParseError> {
        if !self.cursor.check(TokenKind::Comma) {
            return Ok(first);
        }
        let start = self.expr_span(first);
        let mut items = vec![first];
        while self.cursor.eat(TokenKind::Comma) {
            if !EXPR_START.contains(self.cursor.current_kind()) {
                break;
            }
            items.push(item(self)?);
        }
        let span = self.span_from(start);
        Ok(self.alloc_expr(ExprKind::ExprList(items), span))
    }

    /// `yield [testlist]` or `yield from test`.
    pub(crate) fn yield_expr(&mut self) -> Result<ExprId, ParseError> {
        let start = self.cursor.advance().span;
        if self.cursor.eat(TokenKind::KwFrom) {
            let value = self.test()?;
            let span = start.merge(self.expr_span(value));
            return Ok(self.alloc_expr(ExprKind::YieldFrom(value), span));
        }
        let value = if EXPR_START.contains(self.cursor.current_kind()) {
            Some(self.testlist()?)
        } else {
            None
        };
        let span = self.span_from(start);
        Ok(self.alloc_expr(ExprKind::Yield(value), span))
    }

    /// A `yield` expression if one starts here, otherwise a `testlist`.
    pub(crate) fn yield_or_testlist(&mut self) -> Result<ExprId, ParseError> {
        if self.cursor.check(TokenKind::KwYield) {
            self.yield_expr()
        } else {
            self.testlist()
        }
    }
}
