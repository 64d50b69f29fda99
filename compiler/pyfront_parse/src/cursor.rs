//! Token cursor over a pull-based [`TokenSource`].
//!
//! The cursor holds exactly one token of lookahead (`current`) and can peek
//! one further through the source. It also tracks bracket depth: inside
//! brackets comments carry no statement structure, so they are dropped
//! before the grammar sees them.
//!
//! A lexical error poisons the stream. The cursor records the error and
//! presents `Eof` from then on; the parser reports the recorded error in
//! place of whatever syntax error the early end produced.

use std::mem;

use pyfront_ir::{Span, Token, TokenKind};
use pyfront_lexer::{LexError, TokenSource};
use tracing::trace;

pub struct TokenCursor<S> {
    source: S,
    current: Token,
    previous_span: Span,
    /// Open `(`, `[` and `{` consumed so far.
    depth: u32,
    /// Tokens consumed; used for progress checks.
    consumed: usize,
    lex_error: Option<LexError>,
}

impl<S: TokenSource> TokenCursor<S> {
    pub fn new(source: S) -> Self {
        let mut cursor = TokenCursor {
            source,
            current: Token::new(TokenKind::Eof, Span::DUMMY, 1, 0),
            previous_span: Span::DUMMY,
            depth: 0,
            consumed: 0,
            lex_error: None,
        };
        cursor.current = cursor.pull();
        cursor
    }

    fn eof_token(&self) -> Token {
        let offset = self.current.span.end;
        Token::new(TokenKind::Eof, Span::point(offset), self.current.line, 0)
    }

    /// Fetch the next significant token from the source.
    fn pull(&mut self) -> Token {
        if self.lex_error.is_some() {
            return self.eof_token();
        }
        loop {
            match self.source.get() {
                Ok(token) if token.kind == TokenKind::Comment && self.depth > 0 => {
                    trace!(line = token.line, "dropping comment inside brackets");
                }
                Ok(token) => return token,
                Err(err) => {
                    self.lex_error = Some(err);
                    return self.eof_token();
                }
            }
        }
    }

    #[inline]
    pub fn current(&self) -> &Token {
        &self.current
    }

    #[inline]
    pub fn current_kind(&self) -> TokenKind {
        self.current.kind
    }

    #[inline]
    pub fn current_span(&self) -> Span {
        self.current.span
    }

    #[inline]
    pub fn previous_span(&self) -> Span {
        self.previous_span
    }

    /// Line of the current token.
    #[inline]
    pub fn line(&self) -> u32 {
        self.current.line
    }

    #[inline]
    pub fn check(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    /// True if the current token is the identifier `name`.
    pub fn check_name(&self, name: &str) -> bool {
        self.current.kind == TokenKind::Ident && self.current.text() == Some(name)
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.current.kind == TokenKind::Eof
    }

    /// Kind of the token after `current`, without consuming anything.
    pub fn peek_kind(&mut self) -> TokenKind {
        if self.lex_error.is_some() {
            return TokenKind::Eof;
        }
        match self.source.peek() {
            Ok(token) => token.kind,
            Err(_) => TokenKind::Eof,
        }
    }

    /// Consume the current token and return it.
    pub fn advance(&mut self) -> Token {
        match self.current.kind {
            TokenKind::LParen | TokenKind::LBracket | TokenKind::LBrace => self.depth += 1,
            TokenKind::RParen | TokenKind::RBracket | TokenKind::RBrace => {
                self.depth = self.depth.saturating_sub(1);
            }
            _ => {}
        }
        self.previous_span = self.current.span;
        self.consumed += 1;
        let next = self.pull();
        mem::replace(&mut self.current, next)
    }

    /// Consume the current token if it has kind `kind`.
    pub fn eat(&mut self, kind: TokenKind) -> bool {
        let hit = self.check(kind);
        if hit {
            self.advance();
        }
        hit
    }

    /// Number of tokens consumed so far.
    #[inline]
    pub fn position(&self) -> usize {
        self.consumed
    }

    pub fn filename(&self) -> &str {
        self.source.filename()
    }

    /// The lexical error that ended the stream, if any.
    pub fn lex_error(&self) -> Option<&LexError> {
        self.lex_error.as_ref()
    }

    /// Forget bracket depth after skipping tokens during recovery.
    pub fn reset_depth(&mut self) {
        self.depth = 0;
    }
}

#[cfg(test)]
mod tests;
