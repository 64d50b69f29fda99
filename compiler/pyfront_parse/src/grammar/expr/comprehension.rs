//! Comprehension chains.
//!
//! `for` and `if` clauses form a linked chain of `CompFor`/`CompIf` nodes,
//! each pointing at the next clause. The same chain backs list, set, dict
//! and generator comprehensions.

use pyfront_ir::{ExprId, ExprKind, TokenKind};
use pyfront_lexer::TokenSource;
use pyfront_stack::ensure_sufficient_stack;

use crate::{ParseError, Parser};

impl<S: TokenSource, L> Parser<S, L> {
    /// True at `for` or `async for`.
    pub(crate) fn is_comp_start(&mut self) -> bool {
        self.cursor.check(TokenKind::KwFor)
            || (self.cursor.check(TokenKind::KwAsync) && self.cursor.peek_kind() == TokenKind::KwFor)
    }

    /// `['async'] 'for' exprlist 'in' or_test [comp_iter]`
    pub(crate) fn comp_for(&mut self) -> Result<ExprId, ParseError> {
        let start = self.cursor.current_span();
        let is_async = self.cursor.eat(TokenKind::KwAsync);
        self.expect(TokenKind::KwFor)?;
        let target = self.exprlist()?;
        self.expect(TokenKind::KwIn)?;
        let iter = self.or_test()?;
        let next = self.comp_iter()?;
        let span = self.span_from(start);
        Ok(self.alloc_expr(
            ExprKind::CompFor {
                is_async,
                target,
                iter,
                next,
            },
            span,
        ))
    }

    /// The next clause of a chain, if any.
    fn comp_iter(&mut self) -> Result<Option<ExprId>, ParseError> {
        if self.is_comp_start() {
            return ensure_sufficient_stack(|| self.comp_for()).map(Some);
        }
        if !self.cursor.check(TokenKind::KwIf) {
            return Ok(None);
        }
        let start = self.cursor.advance().span;
        let test = self.or_test()?;
        let next = ensure_sufficient_stack(|| self.comp_iter())?;
        let span = self.span_from(start);
        Ok(Some(self.alloc_expr(ExprKind::CompIf { test, next }, span)))
    }
}
