//! Python lexer for pyfront.
//!
//! Turns source text into [`Token`]s with synthesized `Newline`, `Indent`,
//! `Dedent` and `Eof` tokens. The [`Lexer`] is a pull-based state machine;
//! [`CommentFilter`] wraps any [`TokenSource`] and moves dedents ahead of
//! comment runs that belong to the outer block.
//!
//! The parser consumes tokens through the [`TokenSource`] trait, so either
//! the raw lexer or the filtered stream can feed it.

mod comment_filter;
mod cursor;
mod keywords;
mod lex_error;
mod lexer;

pub use comment_filter::CommentFilter;
pub use cursor::Cursor;
pub use lex_error::{LexError, LexErrorKind};
pub use lexer::Lexer;

use pyfront_ir::{Token, TokenKind};

/// A pull-based stream of tokens.
pub trait TokenSource {
    /// Consume and return the next token.
    fn get(&mut self) -> Result<Token, LexError>;

    /// Return the next token without consuming it. Repeated calls return
    /// the same token.
    fn peek(&mut self) -> Result<&Token, LexError>;

    /// 1-based line the source has read up to.
    fn line_number(&self) -> u32;

    /// Name of the file being lexed, for diagnostics.
    fn filename(&self) -> &str;
}

/// Lex `source` to completion, returning every token up to and including
/// `Eof`.
///
/// # Errors
///
/// Returns the first lexical error.
pub fn lex(filename: &str, source: &str) -> Result<Vec<Token>, LexError> {
    let mut lexer = Lexer::new(filename, source);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.get()?;
        let done = token.kind == TokenKind::Eof;
        tokens.push(token);
        if done {
            return Ok(tokens);
        }
    }
}
