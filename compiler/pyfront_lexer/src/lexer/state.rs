//! Explicit state of the lexer's outer machine.

/// Where the lexer is relative to the logical-line structure.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum State {
    /// At the start of a physical line that begins a logical line; the
    /// next step measures indentation.
    Start,
    /// Indentation measured; compare it with the indent stack, emitting one
    /// `Indent` or `Dedent` per step until the stack top matches.
    Indent,
    /// Between tokens of a logical line.
    Base,
    /// Input exhausted; unwind the indent stack, then yield `Eof` forever.
    Eof,
}

/// Open bracket counters. A line break is a logical `Newline` only when all
/// three are zero.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct Nesting {
    pub parens: u32,
    pub brackets: u32,
    pub braces: u32,
}

impl Nesting {
    #[inline]
    pub fn is_zero(self) -> bool {
        self.parens == 0 && self.brackets == 0 && self.braces == 0
    }
}

/// Sub-state while scanning a string body.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum StrState {
    Body,
    /// After a backslash: the next character is kept verbatim and never
    /// terminates the literal.
    Escape,
}

/// Sub-state while scanning a numeric literal.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum NumState {
    /// Saw a leading `0`.
    Zero,
    Decimal,
    Hex,
    Octal,
    Binary,
    /// After the decimal point.
    Fraction,
    /// After `e`/`E`; an optional sign may follow.
    ExponentSign,
    ExponentDigits,
}
