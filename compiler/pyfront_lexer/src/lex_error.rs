//! Lexer error types.
//!
//! Lexical errors are always fatal: the lexer stops at the first one and
//! the parser never recovers from it. Every error carries the file name and
//! 1-based line so the rendered message points at the source.

use pyfront_ir::Span;
use thiserror::Error;

/// A lexer error, rendered as `{filename}({line}): error: {message}`.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
#[error("{filename}({line}): error: {kind}")]
pub struct LexError {
    pub filename: String,
    pub line: u32,
    /// Where the offending text starts.
    pub span: Span,
    pub kind: LexErrorKind,
}

impl LexError {
    pub fn new(filename: impl Into<String>, line: u32, span: Span, kind: LexErrorKind) -> Self {
        LexError {
            filename: filename.into(),
            line,
            span,
            kind,
        }
    }
}

/// What kind of lexer error occurred.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
pub enum LexErrorKind {
    // === String Errors ===
    /// Line break inside a single-quoted string.
    #[error("unterminated string literal")]
    UnterminatedString,
    /// End of input inside any string literal.
    #[error("unexpected end of file inside a string literal")]
    EofInString,

    // === Numeric Errors ===
    /// Prefix with no digits (`0x`), or an exponent with no digits (`1e`).
    #[error("malformed numeric literal '{0}'")]
    MalformedNumber(String),

    // === Character Errors ===
    #[error("unexpected character '{}'", .0.escape_debug())]
    InvalidCharacter(char),
    /// `\` not followed by a line break.
    #[error("unexpected character after line continuation character")]
    StrayBackslash,
    /// `!` not followed by `=`.
    #[error("expected '=' after '!'")]
    LoneBang,

    // === Indentation Errors ===
    /// A dedent to a column that no enclosing block opened.
    #[error("unindent does not match any outer indentation level")]
    InconsistentDedent,

    // === Source Errors ===
    #[error("source file exceeds 4 GiB")]
    SourceTooLarge,
}
