//! Token-stream adapter that reorders indentation tokens around
//! comment-only lines.
//!
//! # Design
//!
//! The lexer never measures indentation on a comment-only line, so a comment
//! written at the outer level just before a dedent arrives *inside* the
//! closing block:
//!
//! ```text
//! if a:
//!     b
//! # about c          <- COMMENT NEWLINE, then DEDENT on the next line
//! c
//! ```
//!
//! When a run of comment-only lines starts right after a line break and the
//! line that ends the run opens with `Dedent`s, the filter checks whether
//! the first comment sits at the indentation the dedent returns to. If so it
//! moves the dedents in front of the comments, so the parser sees the
//! comments as leading the outer statement. In every other case the buffered
//! tokens are replayed unchanged.

use std::collections::VecDeque;

use pyfront_ir::{Token, TokenKind};
use tracing::trace;

use crate::lex_error::LexError;
use crate::TokenSource;

/// Reorders `Dedent` tokens around leading comment lines.
pub struct CommentFilter<S> {
    source: S,
    queue: VecDeque<Token>,
    peeked: Option<Token>,
    /// Kind of the last token handed out.
    prev: Option<TokenKind>,
}

impl<S: TokenSource> CommentFilter<S> {
    pub fn new(source: S) -> Self {
        CommentFilter {
            source,
            queue: VecDeque::new(),
            peeked: None,
            prev: None,
        }
    }

    fn next_token(&mut self) -> Result<Token, LexError> {
        let token = match self.queue.pop_front() {
            Some(token) => token,
            None => self.fill()?,
        };
        self.prev = Some(token.kind);
        Ok(token)
    }

    /// Pull the next token from the source. A comment at the start of a
    /// line triggers buffering; the first token of the result is returned
    /// and the rest are queued.
    fn fill(&mut self) -> Result<Token, LexError> {
        let token = self.source.get()?;
        let at_line_start = matches!(
            self.prev,
            None | Some(TokenKind::Newline | TokenKind::Indent | TokenKind::Dedent)
        );
        if token.kind != TokenKind::Comment || !at_line_start {
            return Ok(token);
        }

        let mut lines = vec![self.read_line(token)?];
        loop {
            let first = self.source.get()?;
            let line = self.read_line(first)?;
            let keep_going = is_comment_line(&line) && !ends_input(&line);
            lines.push(line);
            if !keep_going {
                break;
            }
        }

        let mut ordered = reorder(lines).into_iter();
        match ordered.next() {
            Some(first) => {
                self.queue.extend(ordered);
                Ok(first)
            }
            None => self.source.get(),
        }
    }

    /// Collect tokens up to and including the next `Newline` or `Eof`.
    fn read_line(&mut self, first: Token) -> Result<Vec<Token>, LexError> {
        let mut line = Vec::new();
        let mut token = first;
        loop {
            let done = matches!(token.kind, TokenKind::Newline | TokenKind::Eof);
            line.push(token);
            if done {
                return Ok(line);
            }
            token = self.source.get()?;
        }
    }
}

fn ends_input(line: &[Token]) -> bool {
    line.last().is_some_and(|t| t.kind == TokenKind::Eof)
}

/// A line is comment-only when its first token, after at most one
/// `Indent`/`Dedent`, is a comment or a bare line break.
fn is_comment_line(line: &[Token]) -> bool {
    let mut kinds = line.iter().map(|t| t.kind);
    let first = match kinds.next() {
        Some(TokenKind::Indent | TokenKind::Dedent) => kinds.next(),
        other => other,
    };
    matches!(first, Some(TokenKind::Comment | TokenKind::Newline))
}

/// Decide the output order for a buffered comment run.
fn reorder(mut lines: Vec<Vec<Token>>) -> Vec<Token> {
    if lines.len() < 2 {
        return lines.into_iter().flatten().collect();
    }
    let comment_indent = lines.first().and_then(|l| l.first()).map(|t| t.indent);
    let Some(last) = lines.pop() else {
        return Vec::new();
    };
    let relocate = match last.first() {
        Some(first) if first.kind == TokenKind::Dedent => comment_indent == Some(first.indent),
        _ => false,
    };

    let mut out = Vec::with_capacity(lines.iter().map(Vec::len).sum::<usize>() + last.len());
    if relocate {
        let split = last
            .iter()
            .position(|t| t.kind != TokenKind::Dedent)
            .unwrap_or(last.len());
        trace!(dedents = split, "moving dedents ahead of comment run");
        let mut last = last.into_iter();
        out.extend(last.by_ref().take(split));
        out.extend(lines.into_iter().flatten());
        out.extend(last);
    } else {
        out.extend(lines.into_iter().flatten());
        out.extend(last);
    }
    out
}

impl<S: TokenSource> TokenSource for CommentFilter<S> {
    fn get(&mut self) -> Result<Token, LexError> {
        match self.peeked.take() {
            Some(token) => Ok(token),
            None => self.next_token(),
        }
    }

    fn peek(&mut self) -> Result<&Token, LexError> {
        let token = match self.peeked.take() {
            Some(token) => token,
            None => self.next_token()?,
        };
        Ok(self.peeked.insert(token))
    }

    fn line_number(&self) -> u32 {
        self.source.line_number()
    }

    fn filename(&self) -> &str {
        self.source.filename()
    }
}
