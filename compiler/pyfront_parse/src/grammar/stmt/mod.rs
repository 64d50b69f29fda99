//! Statement parsing.
//!
//! `statement` dispatches on the first token. Compound statements live in
//! `compound.rs`; everything that fits on one logical line is here.
//!
//! A simple-statement line is one or more small statements separated by
//! `;`, an optional trailing comment, and a line break. The line may also
//! end at a `Dedent` or at end of input.

mod compound;


use pyfront_ir::{
    AliasedName, Argument, AssignOp, DottedName, ExprId, ExprKind, ImportNames, StmtId, StmtKind,
    TokenKind,
};
use pyfront_lexer::TokenSource;
use pyfront_stack::ensure_sufficient_stack;

use crate::recovery::{EXPR_START, SIMPLE_STMT_END};
use crate::{ParseError, ParseErrorKind, Parser};

fn assign_op(kind: TokenKind) -> Option<AssignOp> {
    Some(match kind {
        TokenKind::PlusEq => AssignOp::Add,
        TokenKind::MinusEq => AssignOp::Sub,
        TokenKind::StarEq => AssignOp::Mul,
        TokenKind::SlashEq => AssignOp::Div,
        TokenKind::SlashSlashEq => AssignOp::FloorDiv,
        TokenKind::PercentEq => AssignOp::Mod,
        TokenKind::AtEq => AssignOp::MatMul,
        TokenKind::StarStarEq => AssignOp::Pow,
        TokenKind::ShlEq => AssignOp::Shl,
        TokenKind::ShrEq => AssignOp::Shr,
        TokenKind::AmpEq => AssignOp::BitAnd,
        TokenKind::PipeEq => AssignOp::BitOr,
        TokenKind::CaretEq => AssignOp::BitXor,
        _ => return None,
    })
}

impl<S: TokenSource, L> Parser<S, L> {
    /// Parse one statement.
    pub(crate) fn statement(&mut self) -> Result<StmtId, ParseError> {
        ensure_sufficient_stack(|| self.statement_inner())
    }

    fn statement_inner(&mut self) -> Result<StmtId, ParseError> {
        match self.cursor.current_kind() {
            TokenKind::Comment => self.comment_line(),
            TokenKind::KwIf => self.if_stmt(),
            TokenKind::KwWhile => self.while_stmt(),
            TokenKind::KwFor => self.for_stmt(),
            TokenKind::KwTry => self.try_stmt(),
            TokenKind::KwWith => self.with_stmt(),
            TokenKind::KwDef => self.funcdef(),
            TokenKind::KwClass => self.classdef(),
            TokenKind::At => self.decorated(),
            TokenKind::KwAsync => self.async_stmt(),
            TokenKind::Indent => Err(self.error(ParseErrorKind::InvalidSyntax(
                "unexpected indent".to_owned(),
            ))),
            _ => self.simple_stmt(),
        }
    }

    /// A comment-only line.
    pub(crate) fn comment_line(&mut self) -> Result<StmtId, ParseError> {
        let token = self.expect(TokenKind::Comment)?;
        let text = token.text().unwrap_or_default().to_owned();
        if !self.cursor.eat(TokenKind::Newline) && !self.cursor.is_at_end() {
            return Err(self.unexpected(TokenKind::Newline.name()));
        }
        Ok(self.alloc_stmt(StmtKind::Comment(text), token.span))
    }

    /// A simple-statement line. Several `;`-separated statements form a
    /// `Suite`; the trailing comment attaches to the result.
    fn simple_stmt(&mut self) -> Result<StmtId, ParseError> {
        let start = self.cursor.current_span();
        let (mut stmts, comment) = self.simple_line()?;
        let id = if stmts.len() == 1 {
            stmts.swap_remove(0)
        } else {
            let span = self.span_from(start);
            self.alloc_stmt(StmtKind::Suite(stmts), span)
        };
        if comment.is_some() {
            self.ast.stmt_mut(id).comment = comment;
        }
        Ok(id)
    }

    /// `small_stmt (';' small_stmt)* [';'] [COMMENT] (NEWLINE | DEDENT | EOF)`
    ///
    /// The line break is consumed; a `Dedent` is left for the enclosing
    /// suite.
    pub(crate) fn simple_line(&mut self) -> Result<(Vec<StmtId>, Option<String>), ParseError> {
        let mut stmts = vec![self.small_stmt()?];
        while self.cursor.eat(TokenKind::Semi) {
            if SIMPLE_STMT_END.contains(self.cursor.current_kind()) {
                break;
            }
            stmts.push(self.small_stmt()?);
        }

        let comment = if self.cursor.check(TokenKind::Comment) {
            let token = self.cursor.advance();
            Some(token.text().unwrap_or_default().to_owned())
        } else {
            None
        };
        match self.cursor.current_kind() {
            TokenKind::Newline => {
                self.cursor.advance();
            }
            TokenKind::Dedent | TokenKind::Eof => {}
            _ => return Err(self.unexpected(TokenKind::Newline.name())),
        }
        Ok((stmts, comment))
    }

    fn small_stmt(&mut self) -> Result<StmtId, ParseError> {
        let start = self.cursor.current_span();
        let kind = match self.cursor.current_kind() {
            TokenKind::KwPass => self.keyword_stmt(StmtKind::Pass),
            TokenKind::KwBreak => self.keyword_stmt(StmtKind::Break),
            TokenKind::KwContinue => self.keyword_stmt(StmtKind::Continue),
            TokenKind::KwReturn => {
                self.cursor.advance();
                StmtKind::Return(self.optional_testlist()?)
            }
            TokenKind::KwRaise => self.raise_stmt()?,
            TokenKind::KwGlobal => {
                self.cursor.advance();
                StmtKind::Global(self.name_list()?)
            }
            TokenKind::KwNonlocal => {
                self.cursor.advance();
                StmtKind::Nonlocal(self.name_list()?)
            }
            TokenKind::KwDel => {
                self.cursor.advance();
                StmtKind::Del(self.exprlist()?)
            }
            TokenKind::KwAssert => {
                self.cursor.advance();
                let test = self.test()?;
                let msg = if self.cursor.eat(TokenKind::Comma) {
                    Some(self.test()?)
                } else {
                    None
                };
                StmtKind::Assert { test, msg }
            }
            TokenKind::KwImport => self.import_name()?,
            TokenKind::KwFrom => self.import_from()?,
            TokenKind::KwExec => self.exec_stmt()?,
            TokenKind::KwYield => StmtKind::Yield(self.yield_expr()?),
            TokenKind::Ident if self.cursor.check_name("print") && self.is_print_stmt() => {
                self.print_stmt()?
            }
            _ => StmtKind::Expr(self.expr_stmt()?),
        };
        let span = self.span_from(start);
        Ok(self.alloc_stmt(kind, span))
    }

    fn keyword_stmt(&mut self, kind: StmtKind) -> StmtKind {
        self.cursor.advance();
        kind
    }

    fn optional_testlist(&mut self) -> Result<Option<ExprId>, ParseError> {
        if EXPR_START.contains(self.cursor.current_kind()) {
            self.testlist().map(Some)
        } else {
            Ok(None)
        }
    }

    /// `NAME (',' NAME)*`
    fn name_list(&mut self) -> Result<Vec<String>, ParseError> {
        let mut names = vec![self.expect_ident()?];
        while self.cursor.eat(TokenKind::Comma) {
            names.push(self.expect_ident()?);
        }
        Ok(names)
    }

    // === Assignment ===

    /// Expression statement, annotated assignment, augmented assignment or
    /// an `=` chain. `a = b = c` nests to the right.
    fn expr_stmt(&mut self) -> Result<ExprId, ParseError> {
        let target = self.testlist()?;
        let start = self.expr_span(target);

        if self.cursor.eat(TokenKind::Colon) {
            let annotation = self.test()?;
            let value = if self.cursor.eat(TokenKind::Eq) {
                Some(self.yield_or_testlist()?)
            } else {
                None
            };
            let kind = ExprKind::Assign {
                target,
                op: AssignOp::Assign,
                value,
                annotation: Some(annotation),
            };
            return Ok(self.alloc_expr(kind, self.span_from(start)));
        }

        if let Some(op) = assign_op(self.cursor.current_kind()) {
            self.cursor.advance();
            let value = self.yield_or_testlist()?;
            let kind = ExprKind::Assign {
                target,
                op,
                value: Some(value),
                annotation: None,
            };
            return Ok(self.alloc_expr(kind, self.span_from(start)));
        }

        if !self.cursor.check(TokenKind::Eq) {
            return Ok(target);
        }
        let mut chain = vec![target];
        while self.cursor.eat(TokenKind::Eq) {
            chain.push(self.yield_or_testlist()?);
        }
        let end = self.cursor.previous_span();
        let mut value = chain.pop().unwrap_or(target);
        while let Some(target) = chain.pop() {
            let span = self.expr_span(target).merge(end);
            value = self.alloc_expr(
                ExprKind::Assign {
                    target,
                    op: AssignOp::Assign,
                    value: Some(value),
                    annotation: None,
                },
                span,
            );
        }
        Ok(value)
    }

    // === Python 2 Statements ===

    /// `print` is an ordinary name in Python 3. It starts a print statement
    /// unless the next token makes it an assignment target or a reference.
    fn is_print_stmt(&mut self) -> bool {
        let next = self.cursor.peek_kind();
        !(next == TokenKind::Eq
            || next == TokenKind::Dot
            || next == TokenKind::LBracket
            || next == TokenKind::Colon
            || assign_op(next).is_some())
    }

    /// `print`, `print >>dest, a, b,` or `print(args)[,]`.
    fn print_stmt(&mut self) -> Result<StmtKind, ParseError> {
        self.cursor.advance();
        if self.cursor.eat(TokenKind::LParen) {
            let args = self.arguments()?;
            return Ok(StmtKind::Print {
                dest: None,
                args,
                trailing_comma: self.cursor.eat(TokenKind::Comma),
                parenthesized: true,
            });
        }

        let mut dest = None;
        let mut args = Vec::new();
        let mut trailing_comma = false;
        if self.cursor.eat(TokenKind::Shr) {
            dest = Some(self.test()?);
            if !self.cursor.eat(TokenKind::Comma) {
                return Ok(StmtKind::Print {
                    dest,
                    args,
                    trailing_comma,
                    parenthesized: false,
                });
            }
        }
        while EXPR_START.contains(self.cursor.current_kind()) {
            args.push(Argument::Positional(self.test()?));
            trailing_comma = self.cursor.eat(TokenKind::Comma);
            if !trailing_comma {
                break;
            }
        }
        Ok(StmtKind::Print {
            dest,
            args,
            trailing_comma,
            parenthesized: false,
        })
    }

    /// `exec code [in globals [, locals]]`
    fn exec_stmt(&mut self) -> Result<StmtKind, ParseError> {
        self.cursor.advance();
        let code = self.or_expr()?;
        let mut globals = None;
        let mut locals = None;
        if self.cursor.eat(TokenKind::KwIn) {
            globals = Some(self.test()?);
            if self.cursor.eat(TokenKind::Comma) {
                locals = Some(self.test()?);
            }
        }
        Ok(StmtKind::Exec {
            code,
            globals,
            locals,
        })
    }

    /// `raise [exc [from cause]]`, or the legacy `raise E, V[, T]` whose
    /// extra operands become a `(V, T)` cause.
    fn raise_stmt(&mut self) -> Result<StmtKind, ParseError> {
        self.cursor.advance();
        if !EXPR_START.contains(self.cursor.current_kind()) {
            return Ok(StmtKind::Raise {
                exc: None,
                cause: None,
            });
        }
        let exc = self.test()?;
        let cause = if self.cursor.eat(TokenKind::KwFrom) {
            Some(self.test()?)
        } else if self.cursor.check(TokenKind::Comma) {
            let start = self.cursor.advance().span;
            let value = self.test()?;
            let traceback = if self.cursor.eat(TokenKind::Comma) {
                self.test()?
            } else {
                self.alloc_expr(ExprKind::None, self.cursor.previous_span())
            };
            let span = self.span_from(start);
            Some(self.alloc_expr(ExprKind::Tuple(vec![value, traceback]), span))
        } else {
            None
        };
        Ok(StmtKind::Raise {
            exc: Some(exc),
            cause,
        })
    }

    // === Imports ===

    /// `NAME ('.' NAME)*`
    fn dotted_name(&mut self) -> Result<DottedName, ParseError> {
        let mut segments = vec![self.expect_ident()?];
        while self.cursor.eat(TokenKind::Dot) {
            segments.push(self.expect_ident()?);
        }
        Ok(DottedName(segments))
    }

    fn alias(&mut self) -> Result<Option<String>, ParseError> {
        if self.cursor.eat(TokenKind::KwAs) {
            self.expect_ident().map(Some)
        } else {
            Ok(None)
        }
    }

    /// `import a.b [as c] (',' ...)*`
    fn import_name(&mut self) -> Result<StmtKind, ParseError> {
        self.cursor.advance();
        let mut names = Vec::new();
        loop {
            let name = self.dotted_name()?;
            let alias = self.alias()?;
            names.push(AliasedName { name, alias });
            if !self.cursor.eat(TokenKind::Comma) {
                break;
            }
        }
        Ok(StmtKind::Import(names))
    }

    /// `from (.|...)* [module] import (* | '(' names [','] ')' | names)`
    fn import_from(&mut self) -> Result<StmtKind, ParseError> {
        self.cursor.advance();
        let mut level = 0u32;
        loop {
            if self.cursor.eat(TokenKind::Dot) {
                level += 1;
            } else if self.cursor.eat(TokenKind::Ellipsis) {
                level += 3;
            } else {
                break;
            }
        }
        let module = if self.cursor.check(TokenKind::Ident) {
            Some(self.dotted_name()?)
        } else if level == 0 {
            return Err(self.unexpected("module name"));
        } else {
            None
        };
        self.expect(TokenKind::KwImport)?;

        if self.cursor.eat(TokenKind::Star) {
            return Ok(StmtKind::From {
                module,
                level,
                names: ImportNames::Star,
            });
        }
        let parenthesized = self.cursor.eat(TokenKind::LParen);
        let mut names = Vec::new();
        loop {
            let name = DottedName::single(self.expect_ident()?);
            let alias = self.alias()?;
            names.push(AliasedName { name, alias });
            if !self.cursor.eat(TokenKind::Comma) {
                break;
            }
            if parenthesized && self.cursor.check(TokenKind::RParen) {
                break;
            }
        }
        if parenthesized {
            self.expect(TokenKind::RParen)?;
        }
        Ok(StmtKind::From {
            module,
            level,
            names: ImportNames::List(names),
        })
    }
}
