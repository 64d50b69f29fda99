//! Parse error types.
//!
//! A [`ParseError`] carries the file name, the 1-based line and span of the
//! offending token, and a [`ParseErrorKind`]. Lexical errors surface as
//! [`ParseErrorKind::Lexical`] and are never recovered from.

use pyfront_ir::{Span, Token, TokenKind};
use pyfront_lexer::{LexError, LexErrorKind};
use thiserror::Error;

/// A parse error, rendered as `{filename}({line}): error: {message}`.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("{filename}({line}): error: {kind}")]
pub struct ParseError {
    pub filename: String,
    pub line: u32,
    pub span: Span,
    pub kind: ParseErrorKind,
}

impl ParseError {
    pub fn new(filename: impl Into<String>, line: u32, span: Span, kind: ParseErrorKind) -> Self {
        ParseError {
            filename: filename.into(),
            line,
            span,
            kind,
        }
    }

    /// Lexical errors abort the parse even in recovery mode.
    #[inline]
    pub fn is_lexical(&self) -> bool {
        matches!(self.kind, ParseErrorKind::Lexical(_))
    }
}

impl From<LexError> for ParseError {
    fn from(err: LexError) -> Self {
        ParseError {
            filename: err.filename,
            line: err.line,
            span: err.span,
            kind: ParseErrorKind::Lexical(err.kind),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum ParseErrorKind {
    #[error("{0}")]
    Lexical(LexErrorKind),

    #[error("expected {expected}, found {found}")]
    UnexpectedToken { expected: String, found: String },

    #[error("expected an expression, found {found}")]
    ExpectedExpression { found: String },

    #[error("'try' statement needs an 'except' or 'finally' clause")]
    MissingExceptOrFinally,

    /// A decorator run not followed by `def`/`class`.
    #[error("expected 'def' or 'class' after decorator, found {found}")]
    ExpectedDefinition { found: String },

    #[error("{0}")]
    InvalidSyntax(String),
}

/// How a token is named in a diagnostic: its text for identifiers and
/// literals, its kind name otherwise.
pub(crate) fn describe(token: &Token) -> String {
    match (token.kind, token.text()) {
        (TokenKind::Ident, Some(text)) => format!("identifier '{text}'"),
        (TokenKind::Comment, _) => "comment".to_owned(),
        (_, Some(_)) if token.str_literal().is_some() => "string literal".to_owned(),
        (_, Some(text)) => format!("'{text}'"),
        (kind, None) => kind.name().to_owned(),
    }
}

#[cfg(test)]
mod tests;
