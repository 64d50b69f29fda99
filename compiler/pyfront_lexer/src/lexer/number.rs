//! Numeric literal scanning.
//!
//! Integers decode through [`BigInt`] and land in the narrowest
//! [`NumericValue`] tier that holds them. The token text keeps underscores
//! and the radix prefix but never the `L` or `j` suffix.

use num_bigint::BigInt;
use pyfront_ir::{NumericValue, Token, TokenKind, TokenValue};

use super::state::NumState;
use super::Lexer;
use crate::lex_error::{LexError, LexErrorKind};

/// How the literal ended.
enum Shape {
    Int { radix: u32 },
    Real,
}

impl Lexer<'_> {
    /// Scan a numeric literal starting at a digit or at `.` followed by a
    /// digit.
    pub(super) fn scan_number(&mut self, start: u32) -> Result<Token, LexError> {
        let mut state = match self.cursor.current() {
            b'.' => NumState::Fraction,
            b'0' => NumState::Zero,
            _ => NumState::Decimal,
        };
        self.cursor.advance();

        let shape = loop {
            let b = self.cursor.current();
            state = match (state, b) {
                (NumState::Zero, b'x' | b'X') => NumState::Hex,
                (NumState::Zero, b'o' | b'O') => NumState::Octal,
                (NumState::Zero, b'b' | b'B') => NumState::Binary,
                (NumState::Zero | NumState::Decimal, b'0'..=b'9' | b'_') => NumState::Decimal,
                (NumState::Zero | NumState::Decimal, b'.') => NumState::Fraction,
                (NumState::Fraction, b'0'..=b'9' | b'_') => NumState::Fraction,
                (
                    NumState::Zero | NumState::Decimal | NumState::Fraction,
                    b'e' | b'E',
                ) => NumState::ExponentSign,
                (NumState::ExponentSign, b'+' | b'-') => {
                    self.cursor.advance();
                    if !self.cursor.current().is_ascii_digit() {
                        return Err(self.malformed(start));
                    }
                    NumState::ExponentDigits
                }
                (NumState::ExponentSign, b'0'..=b'9') => NumState::ExponentDigits,
                (NumState::ExponentSign, _) => return Err(self.malformed(start)),
                (NumState::ExponentDigits, b'0'..=b'9' | b'_') => NumState::ExponentDigits,
                (NumState::Hex, b) if b.is_ascii_hexdigit() || b == b'_' => NumState::Hex,
                (NumState::Octal, b'0'..=b'7' | b'_') => NumState::Octal,
                (NumState::Binary, b'0' | b'1' | b'_') => NumState::Binary,
                (NumState::Zero | NumState::Decimal, _) => break Shape::Int { radix: 10 },
                (NumState::Hex, _) => break Shape::Int { radix: 16 },
                (NumState::Octal, _) => break Shape::Int { radix: 8 },
                (NumState::Binary, _) => break Shape::Int { radix: 2 },
                (NumState::Fraction | NumState::ExponentDigits, _) => break Shape::Real,
            };
            self.cursor.advance();
        };

        let text = self.cursor.slice_from(start).to_owned();
        match (shape, self.cursor.current()) {
            (_, b'j' | b'J') => {
                let magnitude = parse_real(&text).ok_or_else(|| self.malformed(start))?;
                self.cursor.advance();
                Ok(self.number(TokenKind::Imaginary, start, text, NumericValue::Real(magnitude)))
            }
            (Shape::Real, _) => {
                let value = parse_real(&text).ok_or_else(|| self.malformed(start))?;
                Ok(self.number(TokenKind::Real, start, text, NumericValue::Real(value)))
            }
            (Shape::Int { radix }, suffix) => {
                let value = parse_int(&text, radix).ok_or_else(|| self.malformed(start))?;
                let numeric = NumericValue::from_bigint(value);
                if matches!(suffix, b'l' | b'L') {
                    self.cursor.advance();
                    let numeric = match numeric {
                        NumericValue::Int(v) => NumericValue::Long(i64::from(v)),
                        wide => wide,
                    };
                    return Ok(self.number(TokenKind::LongInteger, start, text, numeric));
                }
                let kind = if numeric.is_wide() {
                    TokenKind::LongInteger
                } else {
                    TokenKind::Integer
                };
                Ok(self.number(kind, start, text, numeric))
            }
        }
    }

    fn number(&self, kind: TokenKind, start: u32, text: String, numeric: NumericValue) -> Token {
        self.token(kind, start)
            .with_value(TokenValue::Text(text))
            .with_numeric(numeric)
    }

    fn malformed(&self, start: u32) -> LexError {
        let text = self.cursor.slice_from(start).to_owned();
        self.error(start, LexErrorKind::MalformedNumber(text))
    }
}

fn strip_underscores(text: &str) -> String {
    text.chars().filter(|&c| c != '_').collect()
}

/// Decode an integer literal. Returns `None` when no digits follow a radix
/// prefix.
fn parse_int(text: &str, radix: u32) -> Option<BigInt> {
    let digits = if radix == 10 {
        strip_underscores(text)
    } else {
        strip_underscores(text.get(2..)?)
    };
    if digits.is_empty() {
        return None;
    }
    BigInt::parse_bytes(digits.as_bytes(), radix)
}

/// Decode a real literal; magnitudes beyond `f64` become infinity.
fn parse_real(text: &str) -> Option<f64> {
    strip_underscores(text).parse::<f64>().ok()
}
