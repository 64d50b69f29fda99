//! Recursive descent parser for Python 2/3 source.
//!
//! Pulls tokens from a [`TokenSource`] (normally a [`CommentFilter`] over a
//! [`Lexer`]) and builds statements into an [`Ast`] arena.
//!
//! # Design
//!
//! - **Lazy**: [`Parser::parse`] returns an iterator that parses one
//!   top-level statement per step, so a consumer can start on the first
//!   statement before the rest of the file has been read.
//! - **Single pass**: a parser serves one file. Re-parsing needs a fresh
//!   parser and lexer.
//! - **Recovery is a loop, not unwinding**: each top-level statement is one
//!   `Result`. In recovery mode an `Err` is reported to the [`ParseLogger`],
//!   the tokens up to the next comment, `def` or `class` are skipped, and a
//!   placeholder comment statement takes the failed statement's place.
//!   Lexical errors always end the parse.

mod cursor;
mod error;
mod grammar;
mod logger;
mod recovery;

use std::collections::VecDeque;

use pyfront_ir::{Ast, ExprId, Stmt, StmtId, StmtKind, TokenKind, PARSER_ERROR_MARKER};
use pyfront_lexer::{CommentFilter, Lexer, TokenSource};
use tracing::{debug, trace};

use cursor::TokenCursor;
pub use error::{ParseError, ParseErrorKind};
pub use logger::{CollectingLogger, ParseLogger, TracingLogger};
use recovery::{synchronize, STMT_BOUNDARY};

/// Parser configuration.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct ParseOptions {
    /// Replace a failed top-level statement with a placeholder and keep
    /// going, instead of ending the parse.
    pub recover: bool,
}

/// Parser state.
pub struct Parser<S, L = TracingLogger> {
    cursor: TokenCursor<S>,
    ast: Ast,
    options: ParseOptions,
    logger: L,
    /// Comment lines read while looking for a continuation clause
    /// (`else`, `except`, ...) that turned out not to follow. They are
    /// emitted right after the compound statement that read them.
    pending: VecDeque<StmtId>,
    /// Set once an error has ended the parse.
    finished: bool,
}

impl<'src> Parser<CommentFilter<Lexer<'src>>> {
    /// Parser over `source` with default options.
    pub fn new(filename: &str, source: &'src str) -> Self {
        Self::with_options(filename, source, ParseOptions::default())
    }

    pub fn with_options(filename: &str, source: &'src str, options: ParseOptions) -> Self {
        Parser::from_tokens(
            CommentFilter::new(Lexer::new(filename, source)),
            options,
            TracingLogger,
        )
    }
}

impl<S: TokenSource, L: ParseLogger> Parser<S, L> {
    /// Parser over an arbitrary token source.
    pub fn from_tokens(source: S, options: ParseOptions, logger: L) -> Self {
        let ast = Ast::new(source.filename());
        Parser {
            cursor: TokenCursor::new(source),
            ast,
            options,
            logger,
            pending: VecDeque::new(),
            finished: false,
        }
    }

    /// Replace the logger that receives recovered errors.
    pub fn with_logger<M: ParseLogger>(self, logger: M) -> Parser<S, M> {
        Parser {
            cursor: self.cursor,
            ast: self.ast,
            options: self.options,
            logger,
            pending: self.pending,
            finished: self.finished,
        }
    }

    /// Lazily parse the top-level statements.
    pub fn parse(&mut self) -> Statements<'_, S, L> {
        Statements { parser: self }
    }

    /// Parse every top-level statement, stopping at the first error that is
    /// not recovered.
    ///
    /// # Errors
    ///
    /// Returns the first unrecovered error.
    pub fn parse_module(&mut self) -> Result<Vec<StmtId>, ParseError> {
        self.parse().collect()
    }

    /// Parse a single expression (a `test`), optionally followed by a line
    /// break, and require the input to end there.
    ///
    /// # Errors
    ///
    /// Returns a syntax error, or the lexical error that ended the input.
    pub fn parse_expression(&mut self) -> Result<ExprId, ParseError> {
        let result = self.test().and_then(|expr| {
            self.cursor.eat(TokenKind::Newline);
            if self.cursor.is_at_end() {
                Ok(expr)
            } else {
                Err(self.unexpected("end of input"))
            }
        });
        result.map_err(|err| self.lexical_or(err))
    }

    pub fn ast(&self) -> &Ast {
        &self.ast
    }

    pub fn into_ast(self) -> Ast {
        self.ast
    }

    pub fn logger(&self) -> &L {
        &self.logger
    }

    /// Prefer the lexical error that cut the stream short over the syntax
    /// error it caused.
    fn lexical_or(&self, err: ParseError) -> ParseError {
        match self.cursor.lex_error() {
            Some(lex) => ParseError::from(lex.clone()),
            None => err,
        }
    }

    /// Parse the next top-level statement.
    fn next_statement(&mut self) -> Result<Option<StmtId>, ParseError> {
        if let Some(id) = self.pending.pop_front() {
            return Ok(Some(id));
        }
        if self.finished {
            return Ok(None);
        }

        // Stray line breaks and the dedents left behind by a skipped block.
        while self.cursor.check(TokenKind::Newline) || self.cursor.check(TokenKind::Dedent) {
            self.cursor.advance();
        }
        if self.cursor.is_at_end() {
            self.finished = true;
            return match self.cursor.lex_error() {
                Some(lex) => Err(ParseError::from(lex.clone())),
                None => Ok(None),
            };
        }

        let start = self.cursor.position();
        match self.statement() {
            Ok(id) => {
                self.ast.link_parents(id);
                debug!(line = self.cursor.line(), stmt = ?self.ast.stmt(id).kind, "statement");
                Ok(Some(id))
            }
            Err(err) => {
                self.pending.clear();
                let err = self.lexical_or(err);
                if err.is_lexical() || !self.options.recover {
                    self.finished = true;
                    return Err(err);
                }
                self.logger.error(&err);
                if self.cursor.position() == start {
                    self.cursor.advance();
                }
                synchronize(&mut self.cursor, STMT_BOUNDARY);
                self.cursor.reset_depth();
                trace!(line = self.cursor.line(), "resuming after parse error");
                let marker = Stmt::new(StmtKind::Comment(PARSER_ERROR_MARKER.to_owned()), err.span);
                Ok(Some(self.ast.alloc_stmt(marker)))
            }
        }
    }
}

/// Lazy, single-pass sequence of top-level statements.
///
/// Yields `Err` at most once; iteration ends after it.
pub struct Statements<'p, S, L> {
    parser: &'p mut Parser<S, L>,
}

impl<S, L> Statements<'_, S, L> {
    /// The arena holding every statement yielded so far.
    pub fn ast(&self) -> &Ast {
        &self.parser.ast
    }
}

impl<S: TokenSource, L: ParseLogger> Iterator for Statements<'_, S, L> {
    type Item = Result<StmtId, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.parser.next_statement().transpose()
    }
}

#[cfg(test)]
mod tests;
