//! Operator and delimiter scanning.

use pyfront_ir::{Token, TokenKind};

use super::Lexer;
use crate::lex_error::{LexError, LexErrorKind};

impl Lexer<'_> {
    /// Scan the longest operator or delimiter at the cursor. Brackets update
    /// the nesting counters; closers saturate at zero.
    pub(super) fn scan_operator(&mut self, start: u32) -> Result<Token, LexError> {
        let Some(ch) = self.cursor.current_char() else {
            return Err(self.error(start, LexErrorKind::InvalidCharacter('\0')));
        };
        self.cursor.advance();

        let kind = match ch {
            '(' => {
                self.nesting.parens += 1;
                TokenKind::LParen
            }
            ')' => {
                self.nesting.parens = self.nesting.parens.saturating_sub(1);
                TokenKind::RParen
            }
            '[' => {
                self.nesting.brackets += 1;
                TokenKind::LBracket
            }
            ']' => {
                self.nesting.brackets = self.nesting.brackets.saturating_sub(1);
                TokenKind::RBracket
            }
            '{' => {
                self.nesting.braces += 1;
                TokenKind::LBrace
            }
            '}' => {
                self.nesting.braces = self.nesting.braces.saturating_sub(1);
                TokenKind::RBrace
            }
            ',' => TokenKind::Comma,
            ';' => TokenKind::Semi,
            '~' => TokenKind::Tilde,
            '.' => {
                if self.cursor.current() == b'.' && self.cursor.peek() == b'.' {
                    self.cursor.advance_n(2);
                    TokenKind::Ellipsis
                } else {
                    TokenKind::Dot
                }
            }
            ':' => self.with_eq(TokenKind::Colon, TokenKind::ColonEq),
            '=' => self.with_eq(TokenKind::Eq, TokenKind::EqEq),
            '+' => self.with_eq(TokenKind::Plus, TokenKind::PlusEq),
            '-' => {
                if self.eat(b'>') {
                    TokenKind::Arrow
                } else {
                    self.with_eq(TokenKind::Minus, TokenKind::MinusEq)
                }
            }
            '*' => {
                if self.eat(b'*') {
                    self.with_eq(TokenKind::StarStar, TokenKind::StarStarEq)
                } else {
                    self.with_eq(TokenKind::Star, TokenKind::StarEq)
                }
            }
            '/' => {
                if self.eat(b'/') {
                    self.with_eq(TokenKind::SlashSlash, TokenKind::SlashSlashEq)
                } else {
                    self.with_eq(TokenKind::Slash, TokenKind::SlashEq)
                }
            }
            '<' => {
                if self.eat(b'<') {
                    self.with_eq(TokenKind::Shl, TokenKind::ShlEq)
                } else {
                    self.with_eq(TokenKind::Lt, TokenKind::LtEq)
                }
            }
            '>' => {
                if self.eat(b'>') {
                    self.with_eq(TokenKind::Shr, TokenKind::ShrEq)
                } else {
                    self.with_eq(TokenKind::Gt, TokenKind::GtEq)
                }
            }
            '%' => self.with_eq(TokenKind::Percent, TokenKind::PercentEq),
            '@' => self.with_eq(TokenKind::At, TokenKind::AtEq),
            '&' => self.with_eq(TokenKind::Amp, TokenKind::AmpEq),
            '|' => self.with_eq(TokenKind::Pipe, TokenKind::PipeEq),
            '^' => self.with_eq(TokenKind::Caret, TokenKind::CaretEq),
            '!' => {
                if !self.eat(b'=') {
                    return Err(self.error(start, LexErrorKind::LoneBang));
                }
                TokenKind::NotEq
            }
            other => return Err(self.error(start, LexErrorKind::InvalidCharacter(other))),
        };
        Ok(self.token(kind, start))
    }

    /// Consume `b` if it is the current byte.
    #[inline]
    fn eat(&mut self, b: u8) -> bool {
        let hit = self.cursor.current() == b && !self.cursor.is_eof();
        if hit {
            self.cursor.advance();
        }
        hit
    }

    /// `assign` if an `=` follows, otherwise `plain`.
    #[inline]
    fn with_eq(&mut self, plain: TokenKind, assign: TokenKind) -> TokenKind {
        if self.eat(b'=') {
            assign
        } else {
            plain
        }
    }
}
