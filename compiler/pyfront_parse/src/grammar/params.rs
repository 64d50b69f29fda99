//! Parameter lists for `def` and `lambda`.
//!
//! ```text
//! param     '**' NAME [ann] | '*' [NAME [ann]] | fpdef [ann] ['=' test]
//! fpdef     NAME | '(' fpdef (',' fpdef)* [','] ')'
//! ```
//!
//! Annotations are only read for `def`; in a lambda the `:` ends the list.

use pyfront_ir::{Param, ParamKind, ParamTarget, TokenKind};
use pyfront_lexer::TokenSource;
use pyfront_stack::ensure_sufficient_stack;

use crate::{ParseError, Parser};

impl<S: TokenSource, L> Parser<S, L> {
    /// Parameters up to, but not including, `close`.
    pub(crate) fn parameters(
        &mut self,
        close: TokenKind,
        annotated: bool,
    ) -> Result<Vec<Param>, ParseError> {
        let mut params = Vec::new();
        while !self.cursor.check(close) {
            params.push(self.parameter(annotated)?);
            if !self.cursor.eat(TokenKind::Comma) {
                break;
            }
        }
        Ok(params)
    }

    fn parameter(&mut self, annotated: bool) -> Result<Param, ParseError> {
        let start = self.cursor.current_span();
        let kind = if self.cursor.eat(TokenKind::StarStar) {
            ParamKind::KwArgs
        } else if self.cursor.eat(TokenKind::Star) {
            ParamKind::VarArgs
        } else {
            ParamKind::Normal
        };

        let target = match kind {
            ParamKind::VarArgs if !self.cursor.check(TokenKind::Ident) => ParamTarget::Anonymous,
            ParamKind::Normal if self.cursor.check(TokenKind::LParen) => self.tuple_param()?,
            _ => ParamTarget::Name(self.expect_ident()?),
        };

        let annotation = if annotated
            && matches!(target, ParamTarget::Name(_))
            && self.cursor.eat(TokenKind::Colon)
        {
            Some(self.test()?)
        } else {
            None
        };
        let default = if kind == ParamKind::Normal && self.cursor.eat(TokenKind::Eq) {
            Some(self.test()?)
        } else {
            None
        };

        Ok(Param {
            target,
            kind,
            annotation,
            default,
            span: self.span_from(start),
        })
    }

    /// Python 2 tuple parameter: `(a, (b, c))`.
    fn tuple_param(&mut self) -> Result<ParamTarget, ParseError> {
        self.expect(TokenKind::LParen)?;
        let mut items = Vec::new();
        while !self.cursor.check(TokenKind::RParen) {
            let start = self.cursor.current_span();
            let target = if self.cursor.check(TokenKind::LParen) {
                ensure_sufficient_stack(|| self.tuple_param())?
            } else {
                ParamTarget::Name(self.expect_ident()?)
            };
            items.push(Param {
                target,
                kind: ParamKind::Normal,
                annotation: None,
                default: None,
                span: self.span_from(start),
            });
            if !self.cursor.eat(TokenKind::Comma) {
                break;
            }
        }
        self.expect(TokenKind::RParen)?;
        Ok(ParamTarget::Tuple(items))
    }
}
