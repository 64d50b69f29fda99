//! Token model shared by the lexer, the comment filter and the parser.
//!
//! # Design
//!
//! A [`Token`] is plain data: kind, optional lexical value, optional decoded
//! numeric value, byte span, line and indentation column. Equality only
//! looks at `(kind, value)` so tests can compare token streams without
//! caring where each token came from.

mod kind;


use std::fmt;

use bitflags::bitflags;
use num_bigint::BigInt;

use crate::Span;

pub use kind::TokenKind;

bitflags! {
    /// Prefix and shape of a string literal.
    ///
    /// Escapes are never decoded, so these flags are the only record of how
    /// the literal's text must be interpreted downstream.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct StrFlags: u8 {
        /// `r` prefix.
        const RAW = 1 << 0;
        /// `u` prefix.
        const UNICODE = 1 << 1;
        /// `b` prefix; the literal is a bytes object.
        const BYTES = 1 << 2;
        /// `f` prefix.
        const FORMAT = 1 << 3;
        /// Triple-quoted.
        const LONG = 1 << 4;
        /// Delimited by `'` rather than `"`.
        const SINGLE_QUOTED = 1 << 5;
    }
}

/// Text of a string literal plus its prefix flags.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct StrLiteral {
    /// Contents between the quotes, escapes kept verbatim.
    pub text: String,
    pub flags: StrFlags,
}

impl StrLiteral {
    pub fn new(text: impl Into<String>, flags: StrFlags) -> Self {
        StrLiteral {
            text: text.into(),
            flags,
        }
    }

    #[inline]
    pub fn is_bytes(&self) -> bool {
        self.flags.contains(StrFlags::BYTES)
    }

    /// Prefix letters in an order Python 2 and 3 both accept (`ur`, `br`,
    /// `rf`).
    pub fn prefix(&self) -> String {
        let mut prefix = String::new();
        if self.flags.contains(StrFlags::UNICODE) {
            prefix.push('u');
        }
        if self.flags.contains(StrFlags::BYTES) {
            prefix.push('b');
        }
        if self.flags.contains(StrFlags::RAW) {
            prefix.push('r');
        }
        if self.flags.contains(StrFlags::FORMAT) {
            prefix.push('f');
        }
        prefix
    }

    /// Quotes to write the literal with.
    ///
    /// The literal's own quote and length are kept when the text fits inside
    /// them. Joined literals can hold text that would close their first
    /// part's quotes early; they take the first delimiter that fits.
    pub fn delimiter(&self) -> &'static str {
        let long = self.flags.contains(StrFlags::LONG);
        let (own, other) = if self.flags.contains(StrFlags::SINGLE_QUOTED) {
            ('\'', '"')
        } else {
            ('"', '\'')
        };
        let (quote, long) = [(own, long), (other, long), (own, true), (other, true)]
            .into_iter()
            .find(|&(quote, long)| fits(&self.text, quote, long))
            .unwrap_or((own, long));
        delimiter(quote, long)
    }
}

fn delimiter(quote: char, long: bool) -> &'static str {
    match (quote, long) {
        ('\'', false) => "'",
        ('\'', true) => "'''",
        (_, false) => "\"",
        (_, true) => "\"\"\"",
    }
}

/// Whether `text` can sit between `quote` delimiters without ending the
/// literal early. Escaped characters never count.
fn fits(text: &str, quote: char, long: bool) -> bool {
    let mut chars = text.chars();
    let mut run = 0;
    while let Some(c) = chars.next() {
        if c == '\\' {
            chars.next();
            run = 0;
        } else if c == quote {
            run += 1;
            if !long || run == 3 {
                return false;
            }
        } else if !long && matches!(c, '\n' | '\r') {
            return false;
        } else {
            run = 0;
        }
    }
    run == 0
}

impl fmt::Display for StrLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let quote = self.delimiter();
        write!(f, "{}{quote}{}{quote}", self.prefix(), self.text)
    }
}

/// Lexical value attached to identifiers, comments, numbers and strings.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TokenValue {
    /// Identifier name, comment text (after `#`) or numeric literal text.
    Text(String),
    Str(StrLiteral),
}

impl TokenValue {
    pub fn as_text(&self) -> &str {
        match self {
            TokenValue::Text(text) => text,
            TokenValue::Str(lit) => &lit.text,
        }
    }
}

/// Decoded value of a numeric literal.
///
/// Integers use the narrowest tier that holds them: `Int`, then `Long`,
/// then `Big`. Downstream translation distinguishes the tiers.
#[derive(Clone, Debug, PartialEq)]
pub enum NumericValue {
    Int(i32),
    Long(i64),
    Big(BigInt),
    Real(f64),
}

impl NumericValue {
    /// Narrowest integer tier that holds `value`.
    pub fn from_bigint(value: BigInt) -> Self {
        if let Ok(v) = i32::try_from(&value) {
            NumericValue::Int(v)
        } else if let Ok(v) = i64::try_from(&value) {
            NumericValue::Long(v)
        } else {
            NumericValue::Big(value)
        }
    }

    /// True for the tiers wider than a machine `int`.
    pub fn is_wide(&self) -> bool {
        matches!(self, NumericValue::Long(_) | NumericValue::Big(_))
    }
}

impl fmt::Display for NumericValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericValue::Int(v) => write!(f, "{v}"),
            NumericValue::Long(v) => write!(f, "{v}"),
            NumericValue::Big(v) => write!(f, "{v}"),
            NumericValue::Real(v) => write!(f, "{v}"),
        }
    }
}

/// A lexed token.
#[derive(Clone, Debug)]
pub struct Token {
    pub kind: TokenKind,
    pub value: Option<TokenValue>,
    pub numeric: Option<NumericValue>,
    pub span: Span,
    /// 1-based line the token ends on.
    pub line: u32,
    /// Indentation column of the line the token belongs to.
    pub indent: u32,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span, line: u32, indent: u32) -> Self {
        Token {
            kind,
            value: None,
            numeric: None,
            span,
            line,
            indent,
        }
    }

    #[must_use]
    pub fn with_value(mut self, value: TokenValue) -> Self {
        self.value = Some(value);
        self
    }

    #[must_use]
    pub fn with_numeric(mut self, numeric: NumericValue) -> Self {
        self.numeric = Some(numeric);
        self
    }

    /// Identifier, comment or literal text, if any.
    pub fn text(&self) -> Option<&str> {
        self.value.as_ref().map(TokenValue::as_text)
    }

    pub fn str_literal(&self) -> Option<&StrLiteral> {
        match &self.value {
            Some(TokenValue::Str(lit)) => Some(lit),
            _ => None,
        }
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.value == other.value
    }
}

impl Eq for Token {}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(TokenValue::Str(lit)) => write!(f, "{lit}"),
            Some(TokenValue::Text(text)) => match self.kind {
                TokenKind::Ident => write!(f, "ID({text})"),
                TokenKind::Comment => write!(f, "#{text}"),
                _ => f.write_str(text),
            },
            None => f.write_str(self.kind.name()),
        }
    }
}
