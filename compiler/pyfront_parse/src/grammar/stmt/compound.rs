//! Compound statements and suites.
//!
//! # Comments Between Clauses
//!
//! Comment lines after a block and before its continuation clause
//! (`elif`, `else`, `except`, `finally`) move into the start of that
//! clause's suite. When no continuation follows, they are queued in
//! `pending` and emitted right after the compound statement.

use std::mem;

use pyfront_ir::{Decorator, ExceptHandler, StmtId, StmtKind, Token, TokenKind, WithItem};
use pyfront_lexer::TokenSource;
use pyfront_stack::ensure_sufficient_stack;
use tracing::debug;

use crate::error::describe;
use crate::{ParseError, ParseErrorKind, Parser};

impl<S: TokenSource, L> Parser<S, L> {
    // === Suites ===

    /// The block after a header's `:`.
    ///
    /// Either the rest of the line (`if a: b; c`) or `NEWLINE INDENT stmt+
    /// DEDENT`. A comment on the header line becomes the suite's comment.
    /// Comment lines between the header and the first indented statement
    /// open the block.
    fn suite(&mut self) -> Result<StmtId, ParseError> {
        let start = self.cursor.current_span();
        if !self.cursor.check(TokenKind::Newline) && !self.cursor.check(TokenKind::Comment) {
            let (stmts, comment) = self.simple_line()?;
            let span = self.span_from(start);
            let id = self.alloc_stmt(StmtKind::Suite(stmts), span);
            self.ast.stmt_mut(id).comment = comment;
            return Ok(id);
        }

        let comment = if self.cursor.check(TokenKind::Comment) {
            Some(comment_text(&self.cursor.advance()))
        } else {
            None
        };
        self.expect(TokenKind::Newline)?;

        let mut stmts = Vec::new();
        while self.cursor.check(TokenKind::Comment) {
            stmts.push(self.comment_line()?);
        }
        self.expect(TokenKind::Indent)?;
        loop {
            while self.cursor.eat(TokenKind::Newline) {}
            if self.cursor.eat(TokenKind::Dedent) || self.cursor.is_at_end() {
                break;
            }
            stmts.push(self.statement()?);
            stmts.extend(self.pending.drain(..));
        }

        let span = self.span_from(start);
        let id = self.alloc_stmt(StmtKind::Suite(stmts), span);
        self.ast.stmt_mut(id).comment = comment;
        Ok(id)
    }

    /// Read comment lines ahead of a possible continuation clause.
    ///
    /// Returns them if one of `continuations` follows; otherwise they are
    /// queued for after the current compound statement.
    fn comments_before(&mut self, continuations: &[TokenKind]) -> Result<Vec<StmtId>, ParseError> {
        let mut comments = Vec::new();
        while self.cursor.check(TokenKind::Comment) {
            comments.push(self.comment_line()?);
        }
        if comments.is_empty() || continuations.contains(&self.cursor.current_kind()) {
            return Ok(comments);
        }
        self.pending.extend(comments);
        Ok(Vec::new())
    }

    /// Insert `comments` at the start of `suite`.
    fn prepend(&mut self, suite: StmtId, comments: Vec<StmtId>) {
        if comments.is_empty() {
            return;
        }
        if let StmtKind::Suite(stmts) = &mut self.ast.stmt_mut(suite).kind {
            stmts.splice(0..0, comments);
        }
    }

    /// `'else' ':' suite`, with the comments read before it.
    fn else_clause(&mut self, comments: Vec<StmtId>) -> Result<Option<StmtId>, ParseError> {
        if !self.cursor.eat(TokenKind::KwElse) {
            self.pending.extend(comments);
            return Ok(None);
        }
        self.expect(TokenKind::Colon)?;
        let body = self.suite()?;
        self.prepend(body, comments);
        Ok(Some(body))
    }

    // === Control Flow ===

    /// `('if' | 'elif') test ':' suite [elif ... | else]`.
    ///
    /// `elif` becomes a nested `If` in the else branch.
    pub(super) fn if_stmt(&mut self) -> Result<StmtId, ParseError> {
        let start = self.cursor.advance().span;
        let test = self.test()?;
        self.expect(TokenKind::Colon)?;
        let body = self.suite()?;

        let comments = self.comments_before(&[TokenKind::KwElif, TokenKind::KwElse])?;
        let orelse = if self.cursor.check(TokenKind::KwElif) {
            let elif = ensure_sufficient_stack(|| self.if_stmt())?;
            if let StmtKind::If { body, .. } = self.ast.stmt(elif).kind {
                self.prepend(body, comments);
            }
            Some(elif)
        } else {
            self.else_clause(comments)?
        };

        let span = self.span_from(start);
        Ok(self.alloc_stmt(StmtKind::If { test, body, orelse }, span))
    }

    pub(super) fn while_stmt(&mut self) -> Result<StmtId, ParseError> {
        let start = self.cursor.advance().span;
        let test = self.test()?;
        self.expect(TokenKind::Colon)?;
        let body = self.suite()?;
        let comments = self.comments_before(&[TokenKind::KwElse])?;
        let orelse = self.else_clause(comments)?;
        let span = self.span_from(start);
        Ok(self.alloc_stmt(StmtKind::While { test, body, orelse }, span))
    }

    /// `'for' exprlist 'in' testlist ':' suite ['else' ':' suite]`
    pub(super) fn for_stmt(&mut self) -> Result<StmtId, ParseError> {
        let start = self.cursor.advance().span;
        let target = self.exprlist()?;
        self.expect(TokenKind::KwIn)?;
        let iter = self.testlist()?;
        self.expect(TokenKind::Colon)?;
        let body = self.suite()?;
        let comments = self.comments_before(&[TokenKind::KwElse])?;
        let orelse = self.else_clause(comments)?;
        let span = self.span_from(start);
        Ok(self.alloc_stmt(
            StmtKind::For {
                target,
                iter,
                body,
                orelse,
            },
            span,
        ))
    }

    /// `try` with any number of `except` clauses, then optional `else` and
    /// `finally`. At least one `except` or a `finally` is required.
    pub(super) fn try_stmt(&mut self) -> Result<StmtId, ParseError> {
        const CONTINUATIONS: &[TokenKind] =
            &[TokenKind::KwExcept, TokenKind::KwElse, TokenKind::KwFinally];

        let start = self.cursor.advance().span;
        self.expect(TokenKind::Colon)?;
        let body = self.suite()?;

        let mut handlers = Vec::new();
        let mut comments = self.comments_before(CONTINUATIONS)?;
        while self.cursor.check(TokenKind::KwExcept) {
            let handler = self.except_clause()?;
            self.prepend(handler.body, comments);
            handlers.push(handler);
            comments = self.comments_before(CONTINUATIONS)?;
        }

        let orelse = if !handlers.is_empty() && self.cursor.check(TokenKind::KwElse) {
            let orelse = self.else_clause(mem::take(&mut comments))?;
            comments = self.comments_before(&[TokenKind::KwFinally])?;
            orelse
        } else {
            None
        };

        let finalbody = if self.cursor.eat(TokenKind::KwFinally) {
            self.expect(TokenKind::Colon)?;
            let body = self.suite()?;
            self.prepend(body, comments);
            Some(body)
        } else {
            self.pending.extend(comments);
            None
        };

        if handlers.is_empty() && finalbody.is_none() {
            return Err(self.error(ParseErrorKind::MissingExceptOrFinally));
        }
        let span = self.span_from(start);
        Ok(self.alloc_stmt(
            StmtKind::Try {
                body,
                handlers,
                orelse,
                finalbody,
            },
            span,
        ))
    }

    /// `'except' [test [('as' | ',') NAME]] ':' suite`
    fn except_clause(&mut self) -> Result<ExceptHandler, ParseError> {
        let start = self.cursor.advance().span;
        let mut type_ = None;
        let mut name = None;
        if !self.cursor.check(TokenKind::Colon) {
            type_ = Some(self.test()?);
            if self.cursor.eat(TokenKind::KwAs) || self.cursor.eat(TokenKind::Comma) {
                name = Some(self.expect_ident()?);
            }
        }
        self.expect(TokenKind::Colon)?;
        let body = self.suite()?;
        Ok(ExceptHandler {
            type_,
            name,
            body,
            span: self.span_from(start),
        })
    }

    /// `'with' item (',' item)* ':' suite` where `item` is
    /// `test ['as' expr]`.
    pub(super) fn with_stmt(&mut self) -> Result<StmtId, ParseError> {
        let start = self.cursor.advance().span;
        let mut items = Vec::new();
        loop {
            let context = self.test()?;
            let target = if self.cursor.eat(TokenKind::KwAs) {
                Some(self.or_expr()?)
            } else {
                None
            };
            items.push(WithItem { context, target });
            if !self.cursor.eat(TokenKind::Comma) {
                break;
            }
        }
        self.expect(TokenKind::Colon)?;
        let body = self.suite()?;
        let span = self.span_from(start);
        Ok(self.alloc_stmt(StmtKind::With { items, body }, span))
    }

    // === Definitions ===

    /// `'def' NAME '(' parameters ')' ['->' test] ':' suite`
    pub(super) fn funcdef(&mut self) -> Result<StmtId, ParseError> {
        let start = self.cursor.advance().span;
        let name = self.expect_ident()?;
        self.expect(TokenKind::LParen)?;
        let params = self.parameters(TokenKind::RParen, true)?;
        self.expect(TokenKind::RParen)?;
        let returns = if self.cursor.eat(TokenKind::Arrow) {
            Some(self.test()?)
        } else {
            None
        };
        self.expect(TokenKind::Colon)?;
        debug!(%name, params = params.len(), "def");
        let body = self.suite()?;
        let span = self.span_from(start);
        Ok(self.alloc_stmt(
            StmtKind::FunctionDef {
                name,
                params,
                returns,
                body,
                decorators: Vec::new(),
            },
            span,
        ))
    }

    /// `'class' NAME ['(' arguments ')'] ':' suite`
    pub(super) fn classdef(&mut self) -> Result<StmtId, ParseError> {
        let start = self.cursor.advance().span;
        let name = self.expect_ident()?;
        let args = if self.cursor.eat(TokenKind::LParen) {
            self.arguments()?
        } else {
            Vec::new()
        };
        self.expect(TokenKind::Colon)?;
        debug!(%name, bases = args.len(), "class");
        let body = self.suite()?;
        let span = self.span_from(start);
        Ok(self.alloc_stmt(
            StmtKind::ClassDef {
                name,
                args,
                body,
                decorators: Vec::new(),
            },
            span,
        ))
    }

    /// A run of `@decorator` lines followed by a `def`, `class` or
    /// `async def`. Comment lines inside the run, and trailing comments on
    /// decorator lines, open the definition's body.
    pub(super) fn decorated(&mut self) -> Result<StmtId, ParseError> {
        let mut decorators = Vec::new();
        let mut comments = Vec::new();
        loop {
            match self.cursor.current_kind() {
                TokenKind::At => {
                    decorators.push(self.decorator()?);
                    if self.cursor.check(TokenKind::Comment) {
                        comments.push(self.comment_line()?);
                    } else {
                        self.expect(TokenKind::Newline)?;
                    }
                }
                TokenKind::Comment => comments.push(self.comment_line()?),
                TokenKind::Newline => {
                    self.cursor.advance();
                }
                _ => break,
            }
        }

        let is_definition = match self.cursor.current_kind() {
            TokenKind::KwDef | TokenKind::KwClass => true,
            TokenKind::KwAsync => self.cursor.peek_kind() == TokenKind::KwDef,
            _ => false,
        };
        if !is_definition {
            return Err(self.error(ParseErrorKind::ExpectedDefinition {
                found: describe(self.cursor.current()),
            }));
        }
        let id = self.statement()?;

        let definition = match self.ast.stmt(id).kind {
            StmtKind::Async(inner) => inner,
            _ => id,
        };
        let stmt = self.ast.stmt_mut(definition);
        let body = match &stmt.kind {
            StmtKind::FunctionDef { body, .. } | StmtKind::ClassDef { body, .. } => Some(*body),
            _ => None,
        };
        stmt.kind.set_decorators(decorators);
        if let Some(body) = body {
            self.prepend(body, comments);
        }
        Ok(id)
    }

    /// `'@' dotted_name ['(' arguments ')']`, without the line break.
    fn decorator(&mut self) -> Result<Decorator, ParseError> {
        let start = self.cursor.advance().span;
        let name = self.dotted_name()?;
        let args = if self.cursor.eat(TokenKind::LParen) {
            Some(self.arguments()?)
        } else {
            None
        };
        Ok(Decorator {
            name,
            args,
            span: self.span_from(start),
        })
    }

    /// `'async' (funcdef | for_stmt | with_stmt)`
    pub(super) fn async_stmt(&mut self) -> Result<StmtId, ParseError> {
        let start = self.cursor.advance().span;
        let inner = match self.cursor.current_kind() {
            TokenKind::KwDef => self.funcdef()?,
            TokenKind::KwFor => self.for_stmt()?,
            TokenKind::KwWith => self.with_stmt()?,
            _ => return Err(self.unexpected("'def', 'for' or 'with'")),
        };
        let span = self.span_from(start);
        Ok(self.alloc_stmt(StmtKind::Async(inner), span))
    }
}

fn comment_text(token: &Token) -> String {
    token.text().unwrap_or_default().to_owned()
}
