//! Trailers: calls, subscripts and attribute access.

use pyfront_ir::{Argument, ExprId, ExprKind, SubscriptItem, TokenKind};
use pyfront_lexer::TokenSource;

use crate::{ParseError, Parser};

impl<S: TokenSource, L> Parser<S, L> {
    /// `atom trailer*`
    pub(crate) fn atom_expr(&mut self) -> Result<ExprId, ParseError> {
        let mut expr = self.atom()?;
        let start = self.expr_span(expr);
        loop {
            let kind = match self.cursor.current_kind() {
                TokenKind::LParen => {
                    self.cursor.advance();
                    let args = self.arguments()?;
                    ExprKind::Call { func: expr, args }
                }
                TokenKind::LBracket => {
                    self.cursor.advance();
                    let items = self.subscripts()?;
                    ExprKind::Subscript { value: expr, items }
                }
                TokenKind::Dot => {
                    self.cursor.advance();
                    let attr = self.expect_ident()?;
                    ExprKind::Attribute { value: expr, attr }
                }
                _ => return Ok(expr),
            };
            expr = self.alloc_expr(kind, self.span_from(start));
        }
    }

    /// Call arguments after `(`, through the closing `)`.
    ///
    /// Positional, keyword, `*` and `**` arguments are kept in source order.
    /// A lone generator argument needs no extra parentheses: `f(x for x in y)`.
    pub(crate) fn arguments(&mut self) -> Result<Vec<Argument>, ParseError> {
        let mut args = Vec::new();
        while !self.cursor.check(TokenKind::RParen) {
            let arg = if self.cursor.eat(TokenKind::StarStar) {
                Argument::DoubleStar(self.test()?)
            } else if self.cursor.eat(TokenKind::Star) {
                Argument::Star(self.test()?)
            } else if self.cursor.check(TokenKind::Ident) && self.cursor.peek_kind() == TokenKind::Eq
            {
                let name = self.expect_ident()?;
                self.cursor.advance();
                Argument::Keyword {
                    name,
                    value: self.test()?,
                }
            } else {
                let value = self.test()?;
                if self.is_comp_start() {
                    let start = self.expr_span(value);
                    let generator = self.comp_for()?;
                    let span = self.span_from(start);
                    Argument::Positional(self.alloc_expr(
                        ExprKind::Generator {
                            element: value,
                            generator,
                        },
                        span,
                    ))
                } else {
                    Argument::Positional(value)
                }
            };
            args.push(arg);
            if !self.cursor.eat(TokenKind::Comma) {
                break;
            }
        }
        self.expect(TokenKind::RParen)?;
        Ok(args)
    }

    /// Subscript list after `[`, through the closing `]`.
    fn subscripts(&mut self) -> Result<Vec<SubscriptItem>, ParseError> {
        let mut items = Vec::new();
        loop {
            items.push(self.subscript()?);
            if !self.cursor.eat(TokenKind::Comma) || self.cursor.check(TokenKind::RBracket) {
                break;
            }
        }
        self.expect(TokenKind::RBracket)?;
        Ok(items)
    }

    /// `test` or `[test] ':' [test] [':' [test]]`.
    fn subscript(&mut self) -> Result<SubscriptItem, ParseError> {
        let lower = if self.cursor.check(TokenKind::Colon) {
            None
        } else {
            let index = self.test_or_star()?;
            if !self.cursor.check(TokenKind::Colon) {
                return Ok(SubscriptItem::Index(index));
            }
            Some(index)
        };
        self.cursor.advance();

        let ends_bound = |kind: TokenKind| {
            matches!(
                kind,
                TokenKind::Colon | TokenKind::Comma | TokenKind::RBracket
            )
        };
        let upper = if ends_bound(self.cursor.current_kind()) {
            None
        } else {
            Some(self.test()?)
        };
        let stepped = self.cursor.eat(TokenKind::Colon);
        let step = if stepped && !ends_bound(self.cursor.current_kind()) {
            Some(self.test()?)
        } else {
            None
        };
        Ok(SubscriptItem::Slice {
            lower,
            upper,
            step,
            stepped,
        })
    }
}
