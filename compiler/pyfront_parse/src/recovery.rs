//! Error recovery for the parser.
//!
//! Token sets use a `u128` bitset for O(1) membership testing. In recovery
//! mode a failed top-level statement is skipped up to the next token in
//! [`STMT_BOUNDARY`]: a comment, `def` or `class`.

use pyfront_ir::TokenKind;
use pyfront_lexer::TokenSource;

use crate::cursor::TokenCursor;

// TokenSet uses a u128 bitset, so every discriminant index must be < 128.
const _: () = assert!(
    TokenKind::MAX_DISCRIMINANT <= 127,
    "TokenSet uses u128 bitset; all discriminant indices must be < 128"
);

/// A set of token kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub(crate) struct TokenSet(u128);

impl TokenSet {
    #[inline]
    pub(crate) const fn new() -> Self {
        Self(0)
    }

    /// Add a token kind (builder pattern for const contexts).
    #[inline]
    #[must_use]
    pub(crate) const fn with(self, kind: TokenKind) -> Self {
        Self(self.0 | (1u128 << kind.discriminant_index()))
    }

    #[inline]
    pub(crate) const fn contains(&self, kind: TokenKind) -> bool {
        (self.0 & (1u128 << kind.discriminant_index())) != 0
    }
}

/// Where a skipped top-level statement resumes.
pub(crate) const STMT_BOUNDARY: TokenSet = TokenSet::new()
    .with(TokenKind::Comment)
    .with(TokenKind::KwDef)
    .with(TokenKind::KwClass)
    .with(TokenKind::Eof);

/// Tokens that end a simple statement.
pub(crate) const SIMPLE_STMT_END: TokenSet = TokenSet::new()
    .with(TokenKind::Newline)
    .with(TokenKind::Semi)
    .with(TokenKind::Comment)
    .with(TokenKind::Dedent)
    .with(TokenKind::Eof);

/// Tokens that can begin an expression.
pub(crate) const EXPR_START: TokenSet = TokenSet::new()
    .with(TokenKind::Ident)
    .with(TokenKind::Integer)
    .with(TokenKind::LongInteger)
    .with(TokenKind::Real)
    .with(TokenKind::Imaginary)
    .with(TokenKind::String)
    .with(TokenKind::LParen)
    .with(TokenKind::LBracket)
    .with(TokenKind::LBrace)
    .with(TokenKind::Minus)
    .with(TokenKind::Plus)
    .with(TokenKind::Tilde)
    .with(TokenKind::Star)
    .with(TokenKind::Ellipsis)
    .with(TokenKind::KwNot)
    .with(TokenKind::KwLambda)
    .with(TokenKind::KwAwait)
    .with(TokenKind::KwNone)
    .with(TokenKind::KwTrue)
    .with(TokenKind::KwFalse);

/// Advance until the current token is in `recovery` or the input ends.
///
/// Returns `true` if a recovery token was found, `false` at EOF.
pub(crate) fn synchronize<S: TokenSource>(cursor: &mut TokenCursor<S>, recovery: TokenSet) -> bool {
    while !cursor.is_at_end() {
        if recovery.contains(cursor.current_kind()) {
            return true;
        }
        cursor.advance();
    }
    false
}
