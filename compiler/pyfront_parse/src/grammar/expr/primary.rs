//! Atoms: names, literals, parenthesised forms and displays.

use pyfront_ir::{DictEntry, ExprId, ExprKind, NumericValue, StrFlags, Token, TokenKind};
use pyfront_lexer::TokenSource;

use crate::{ParseError, Parser};

/// Literal text of a number or name token.
fn token_text(token: &Token) -> String {
    token.text().unwrap_or_default().to_owned()
}

impl<S: TokenSource, L> Parser<S, L> {
    pub(crate) fn atom(&mut self) -> Result<ExprId, ParseError> {
        match self.cursor.current_kind() {
            TokenKind::LParen => self.paren_atom(),
            TokenKind::LBracket => self.list_display(),
            TokenKind::LBrace => self.brace_display(),
            TokenKind::String => self.strings(),
            TokenKind::Ident => {
                let token = self.cursor.advance();
                Ok(self.alloc_expr(ExprKind::Name(token_text(&token)), token.span))
            }
            TokenKind::Integer
            | TokenKind::LongInteger
            | TokenKind::Real
            | TokenKind::Imaginary => {
                let token = self.cursor.advance();
                Ok(self.number(&token))
            }
            TokenKind::Ellipsis => self.keyword_atom(ExprKind::Ellipsis),
            TokenKind::KwNone => self.keyword_atom(ExprKind::None),
            TokenKind::KwTrue => self.keyword_atom(ExprKind::Bool(true)),
            TokenKind::KwFalse => self.keyword_atom(ExprKind::Bool(false)),
            _ => Err(self.expected_expression()),
        }
    }

    fn keyword_atom(&mut self, kind: ExprKind) -> Result<ExprId, ParseError> {
        let span = self.cursor.advance().span;
        Ok(self.alloc_expr(kind, span))
    }

    fn number(&mut self, token: &Token) -> ExprId {
        let text = token_text(token);
        let kind = match (token.kind, token.numeric.clone()) {
            (TokenKind::Imaginary, Some(NumericValue::Real(value))) => ExprKind::Imaginary {
                text,
                bits: value.to_bits(),
            },
            (_, Some(NumericValue::Real(value))) => ExprKind::Real {
                text,
                bits: value.to_bits(),
            },
            (_, Some(NumericValue::Int(value))) => ExprKind::Int { text, value },
            (_, Some(NumericValue::Long(value))) => ExprKind::Long { text, value },
            (_, Some(NumericValue::Big(value))) => ExprKind::Big { text, value },
            (_, None) => ExprKind::Int { text, value: 0 },
        };
        self.alloc_expr(kind, token.span)
    }

    /// Adjacent string literals concatenate. The first literal's prefix
    /// decides the flags; a joined text spanning lines is marked `LONG`.
    fn strings(&mut self) -> Result<ExprId, ParseError> {
        let first = self.cursor.advance();
        let mut span = first.span;
        let mut lit = first.str_literal().cloned().unwrap_or_default();
        let mut joined = false;
        while self.cursor.check(TokenKind::String) {
            let next = self.cursor.advance();
            if let Some(more) = next.str_literal() {
                lit.text.push_str(&more.text);
            }
            span = span.merge(next.span);
            joined = true;
        }
        if joined && lit.text.contains('\n') {
            lit.flags |= StrFlags::LONG;
        }
        let kind = if lit.is_bytes() {
            ExprKind::Bytes(lit)
        } else {
            ExprKind::Str(lit)
        };
        Ok(self.alloc_expr(kind, span))
    }

    /// `()`, `(yield ...)`, `(x)`, `(x,)`, `(x for ...)`.
    fn paren_atom(&mut self) -> Result<ExprId, ParseError> {
        let start = self.cursor.advance().span;
        if self.cursor.eat(TokenKind::RParen) {
            return Ok(self.alloc_expr(ExprKind::Tuple(Vec::new()), self.span_from(start)));
        }
        if self.cursor.check(TokenKind::KwYield) {
            let value = self.yield_expr()?;
            self.expect(TokenKind::RParen)?;
            return Ok(value);
        }

        let first = self.test_or_star()?;
        if self.is_comp_start() {
            let generator = self.comp_for()?;
            self.expect(TokenKind::RParen)?;
            let span = self.span_from(start);
            return Ok(self.alloc_expr(
                ExprKind::Generator {
                    element: first,
                    generator,
                },
                span,
            ));
        }
        if !self.cursor.check(TokenKind::Comma) {
            self.expect(TokenKind::RParen)?;
            return Ok(first);
        }
        let items = self.display_items(first, TokenKind::RParen)?;
        self.expect(TokenKind::RParen)?;
        Ok(self.alloc_expr(ExprKind::Tuple(items), self.span_from(start)))
    }

    /// `[...]`: list display or list comprehension.
    fn list_display(&mut self) -> Result<ExprId, ParseError> {
        let start = self.cursor.advance().span;
        if self.cursor.eat(TokenKind::RBracket) {
            return Ok(self.alloc_expr(ExprKind::List(Vec::new()), self.span_from(start)));
        }
        let first = self.test_or_star()?;
        let kind = if self.is_comp_start() {
            let generator = self.comp_for()?;
            ExprKind::ListComp {
                element: first,
                generator,
            }
        } else {
            ExprKind::List(self.display_items(first, TokenKind::RBracket)?)
        };
        self.expect(TokenKind::RBracket)?;
        Ok(self.alloc_expr(kind, self.span_from(start)))
    }

    /// `{...}`: dict or set display, or the matching comprehension.
    fn brace_display(&mut self) -> Result<ExprId, ParseError> {
        let start = self.cursor.advance().span;
        if self.cursor.eat(TokenKind::RBrace) {
            return Ok(self.alloc_expr(ExprKind::Dict(Vec::new()), self.span_from(start)));
        }

        let kind = if self.cursor.eat(TokenKind::StarStar) {
            let value = self.or_expr()?;
            ExprKind::Dict(self.dict_entries(DictEntry { key: None, value })?)
        } else {
            let first = self.test_or_star()?;
            if self.cursor.eat(TokenKind::Colon) {
                let value = self.test()?;
                if self.is_comp_start() {
                    let generator = self.comp_for()?;
                    ExprKind::DictComp {
                        key: first,
                        value,
                        generator,
                    }
                } else {
                    ExprKind::Dict(self.dict_entries(DictEntry {
                        key: Some(first),
                        value,
                    })?)
                }
            } else if self.is_comp_start() {
                let generator = self.comp_for()?;
                ExprKind::SetComp {
                    element: first,
                    generator,
                }
            } else {
                ExprKind::Set(self.display_items(first, TokenKind::RBrace)?)
            }
        };
        self.expect(TokenKind::RBrace)?;
        Ok(self.alloc_expr(kind, self.span_from(start)))
    }

    /// Remaining `, item` pairs of a display, allowing a trailing comma.
    fn display_items(&mut self, first: ExprId, close: TokenKind) -> Result<Vec<ExprId>, ParseError> {
        let mut items = vec![first];
        while self.cursor.eat(TokenKind::Comma) {
            if self.cursor.check(close) {
                break;
            }
            items.push(self.test_or_star()?);
        }
        Ok(items)
    }

    fn dict_entries(&mut self, first: DictEntry) -> Result<Vec<DictEntry>, ParseError> {
        let mut entries = vec![first];
        while self.cursor.eat(TokenKind::Comma) {
            if self.cursor.check(TokenKind::RBrace) {
                break;
            }
            if self.cursor.eat(TokenKind::StarStar) {
                let value = self.or_expr()?;
                entries.push(DictEntry { key: None, value });
                continue;
            }
            let key = self.test()?;
            self.expect(TokenKind::Colon)?;
            let value = self.test()?;
            entries.push(DictEntry {
                key: Some(key),
                value,
            });
        }
        Ok(entries)
    }
}
