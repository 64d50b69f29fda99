//! Indentation-aware Python lexer.
//!
//! # Design
//!
//! The lexer is an explicit state machine: an outer [`State`] tracks the
//! logical-line structure (line start, indentation comparison, between
//! tokens, end of input), and each literal kind runs its own sub-machine
//! (`StrState`, `NumState`). Besides the state value the lexer owns only the
//! indent stack, the bracket counters and the cursor.
//!
//! Indentation is measured at the start of every line that begins a logical
//! line. Blank lines and lines whose first non-blank character is `#` are
//! never compared against the stack, so they cannot open or close a block.
//! Inside brackets a line break is plain whitespace.
//!
//! String escapes are kept verbatim: `"\n"` lexes to a literal holding a
//! backslash and an `n`. Only the prefix flags are recorded.

mod number;
mod operator;
pub(crate) mod state;

#[cfg(test)]
mod tests;

use pyfront_ir::{Span, StrFlags, StrLiteral, Token, TokenKind, TokenValue};
use tracing::trace;

use crate::cursor::Cursor;
use crate::keywords;
use crate::lex_error::{LexError, LexErrorKind};
use crate::TokenSource;
use state::{Nesting, State, StrState};

/// Python lexer over one source file.
///
/// A lexer serves exactly one parse. After the indent stack has been
/// unwound it returns `Eof` on every call; after an error it returns the
/// same error on every call.
pub struct Lexer<'src> {
    filename: String,
    cursor: Cursor<'src>,
    state: State,
    /// Open indentation columns; the bottom entry is the sentinel `0`.
    indent_stack: Vec<u32>,
    nesting: Nesting,
    /// 1-based current line.
    line: u32,
    /// Indentation column of the current line.
    indent: u32,
    peeked: Option<Token>,
    failed: Option<LexError>,
}

impl<'src> Lexer<'src> {
    pub fn new(filename: impl Into<String>, source: &'src str) -> Self {
        let filename = filename.into();
        let failed = (u32::try_from(source.len()).is_err()).then(|| {
            LexError::new(filename.clone(), 1, Span::DUMMY, LexErrorKind::SourceTooLarge)
        });
        Lexer {
            filename,
            cursor: Cursor::new(source),
            state: State::Start,
            indent_stack: vec![0],
            nesting: Nesting::default(),
            line: 1,
            indent: 0,
            peeked: None,
            failed,
        }
    }

    /// Current depth of the indent stack, excluding the sentinel.
    pub fn indent_depth(&self) -> usize {
        self.indent_stack.len() - 1
    }

    fn error(&self, start: u32, kind: LexErrorKind) -> LexError {
        LexError::new(
            self.filename.clone(),
            self.line,
            Span::new(start, self.cursor.pos()),
            kind,
        )
    }

    /// Token spanning `start` to the current position.
    fn token(&self, kind: TokenKind, start: u32) -> Token {
        Token::new(
            kind,
            Span::new(start, self.cursor.pos()),
            self.line,
            self.indent,
        )
    }

    /// Consume `\n`, `\r\n` or a lone `\r`.
    fn eat_line_break(&mut self) {
        if self.cursor.current() == b'\r' {
            self.cursor.advance();
        }
        if self.cursor.current() == b'\n' {
            self.cursor.advance();
        }
    }

    /// Produce the next token by running the state machine until a step
    /// yields one.
    fn next_token(&mut self) -> Result<Token, LexError> {
        loop {
            let step = match self.state {
                State::Start => {
                    self.start_of_line();
                    None
                }
                State::Indent => self.compare_indent()?,
                State::Base => self.scan_base()?,
                State::Eof => Some(self.unwind()),
            };
            if let Some(token) = step {
                return Ok(token);
            }
        }
    }

    /// Measure the indentation of a new line: a space adds one column, a
    /// tab advances to the next multiple of eight.
    fn start_of_line(&mut self) {
        let mut column = 0u32;
        loop {
            match self.cursor.current() {
                b' ' => column += 1,
                b'\t' => column = (column & !7) + 8,
                b'\x0c' => column = 0,
                _ => break,
            }
            self.cursor.advance();
        }

        match self.cursor.current() {
            _ if self.cursor.is_eof() => self.state = State::Eof,
            b'\n' | b'\r' => {
                // Blank line.
                self.eat_line_break();
                self.line += 1;
            }
            b'#' => {
                // Comment-only line; indentation is not compared.
                self.indent = column;
                self.state = State::Base;
            }
            _ => {
                self.indent = column;
                self.state = State::Indent;
            }
        }
    }

    /// One step of the indentation comparison.
    fn compare_indent(&mut self) -> Result<Option<Token>, LexError> {
        let pos = self.cursor.pos();
        let top = self.indent_stack.last().copied().unwrap_or(0);
        if self.indent > top {
            self.indent_stack.push(self.indent);
            self.state = State::Base;
            return Ok(Some(self.token(TokenKind::Indent, pos)));
        }
        if self.indent < top {
            self.indent_stack.pop();
            let new_top = self.indent_stack.last().copied().unwrap_or(0);
            if self.indent > new_top {
                return Err(self.error(pos, LexErrorKind::InconsistentDedent));
            }
            // Stay in `Indent` to re-check against the new top.
            return Ok(Some(self.token(TokenKind::Dedent, pos)));
        }
        self.state = State::Base;
        Ok(None)
    }

    /// At end of input: one `Dedent` per open block, then `Eof`.
    fn unwind(&mut self) -> Token {
        let pos = self.cursor.pos();
        self.indent = 0;
        if self.indent_stack.len() > 1 {
            self.indent_stack.pop();
            self.token(TokenKind::Dedent, pos)
        } else {
            self.token(TokenKind::Eof, pos)
        }
    }

    /// Scan one token inside a logical line. Returns `None` when the step
    /// only consumed whitespace or changed state.
    fn scan_base(&mut self) -> Result<Option<Token>, LexError> {
        self.cursor.eat_whitespace();
        let start = self.cursor.pos();
        if self.cursor.is_eof() {
            self.state = State::Eof;
            return Ok(None);
        }

        let token = match self.cursor.current() {
            b'\n' | b'\r' => {
                self.eat_line_break();
                let newline = self
                    .nesting
                    .is_zero()
                    .then(|| self.token(TokenKind::Newline, start));
                self.line += 1;
                if newline.is_some() {
                    self.state = State::Start;
                }
                return Ok(newline);
            }
            b'#' => self.scan_comment(start),
            b'\\' => {
                self.cursor.advance();
                if !matches!(self.cursor.current(), b'\n' | b'\r') {
                    return Err(self.error(start, LexErrorKind::StrayBackslash));
                }
                // Explicit line continuation.
                self.eat_line_break();
                self.line += 1;
                return Ok(None);
            }
            b'0'..=b'9' => self.scan_number(start)?,
            b'.' if self.cursor.peek().is_ascii_digit() => self.scan_number(start)?,
            b'"' | b'\'' => self.scan_string(start, StrFlags::empty())?,
            b if is_ident_start(b) => self.scan_ident_or_prefixed_string(start)?,
            _ => self.scan_operator(start)?,
        };
        Ok(Some(token))
    }

    /// `# text` up to the end of the line; the value is the text after `#`.
    fn scan_comment(&mut self, start: u32) -> Token {
        self.cursor.advance();
        let text_start = self.cursor.pos();
        self.cursor.eat_until_newline_or_eof();
        let text = self.cursor.slice_from(text_start).to_owned();
        self.token(TokenKind::Comment, start)
            .with_value(TokenValue::Text(text))
    }

    /// An identifier or keyword, unless the leading letters are a string
    /// prefix directly followed by a quote.
    fn scan_ident_or_prefixed_string(&mut self, start: u32) -> Result<Token, LexError> {
        if let Some((flags, len)) = string_prefix(
            self.cursor.current(),
            self.cursor.peek(),
            self.cursor.peek2(),
        ) {
            self.cursor.advance_n(len);
            return self.scan_string(start, flags);
        }

        while is_ident_continue(self.cursor.current()) && !self.cursor.is_eof() {
            self.cursor.advance_char();
        }
        let text = self.cursor.slice_from(start);
        let token = match keywords::lookup(text) {
            Some(kind) => self.token(kind, start),
            None => self
                .token(TokenKind::Ident, start)
                .with_value(TokenValue::Text(text.to_owned())),
        };
        Ok(token)
    }

    /// A string literal whose prefix (if any) has been consumed. The cursor
    /// is on the opening quote.
    fn scan_string(&mut self, start: u32, mut flags: StrFlags) -> Result<Token, LexError> {
        let quote = self.cursor.current();
        if quote == b'\'' {
            flags |= StrFlags::SINGLE_QUOTED;
        }
        self.cursor.advance();
        let long = self.cursor.current() == quote && self.cursor.peek() == quote;
        if long {
            self.cursor.advance_n(2);
            flags |= StrFlags::LONG;
        }

        let body_start = self.cursor.pos();
        let mut state = StrState::Body;
        let body_end = loop {
            match state {
                StrState::Body => {
                    let b = self.cursor.skip_to_string_delim(quote);
                    if self.cursor.is_eof() {
                        return Err(self.error(start, LexErrorKind::EofInString));
                    }
                    match b {
                        b'\\' => {
                            self.cursor.advance();
                            state = StrState::Escape;
                        }
                        b'\n' | b'\r' => {
                            if !long {
                                return Err(self.error(start, LexErrorKind::UnterminatedString));
                            }
                            self.eat_line_break();
                            self.line += 1;
                        }
                        _ if !long => {
                            let end = self.cursor.pos();
                            self.cursor.advance();
                            break end;
                        }
                        _ if self.cursor.peek() == quote && self.cursor.peek2() == quote => {
                            let end = self.cursor.pos();
                            self.cursor.advance_n(3);
                            break end;
                        }
                        _ => self.cursor.advance(),
                    }
                }
                StrState::Escape => {
                    if self.cursor.is_eof() {
                        return Err(self.error(start, LexErrorKind::EofInString));
                    }
                    if matches!(self.cursor.current(), b'\n' | b'\r') {
                        self.eat_line_break();
                        self.line += 1;
                    } else {
                        self.cursor.advance_char();
                    }
                    state = StrState::Body;
                }
            }
        };

        let text = self.cursor.slice(body_start, body_end);
        Ok(self
            .token(TokenKind::String, start)
            .with_value(TokenValue::Str(StrLiteral::new(text, flags))))
    }
}

#[inline]
fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_' || b >= 0x80
}

#[inline]
fn is_ident_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b >= 0x80
}

fn prefix_flag(b: u8) -> Option<StrFlags> {
    match b.to_ascii_lowercase() {
        b'r' => Some(StrFlags::RAW),
        b'u' => Some(StrFlags::UNICODE),
        b'b' => Some(StrFlags::BYTES),
        b'f' => Some(StrFlags::FORMAT),
        _ => None,
    }
}

/// Recognise a string prefix (`r`, `u`, `b`, `f`, or a two-letter combo
/// such as `rb`/`br`/`rf`/`ur`, any case) followed by a quote. Returns the
/// flags and the prefix length.
fn string_prefix(b0: u8, b1: u8, b2: u8) -> Option<(StrFlags, u32)> {
    let is_quote = |b: u8| b == b'"' || b == b'\'';
    let first = prefix_flag(b0)?;
    if is_quote(b1) {
        return Some((first, 1));
    }
    let second = prefix_flag(b1)?;
    if !is_quote(b2) || first == second {
        return None;
    }
    let combined = first | second;
    // At most one of `u`, `b`, `f`; `r` combines with any of them.
    if (combined - StrFlags::RAW).bits().count_ones() > 1 {
        return None;
    }
    Some((combined, 2))
}

impl TokenSource for Lexer<'_> {
    fn get(&mut self) -> Result<Token, LexError> {
        if let Some(token) = self.peeked.take() {
            return Ok(token);
        }
        if let Some(err) = &self.failed {
            return Err(err.clone());
        }
        match self.next_token() {
            Ok(token) => {
                trace!(kind = ?token.kind, line = token.line, "token");
                Ok(token)
            }
            Err(err) => {
                self.failed = Some(err.clone());
                Err(err)
            }
        }
    }

    fn peek(&mut self) -> Result<&Token, LexError> {
        let token = match self.peeked.take() {
            Some(token) => token,
            None => self.get()?,
        };
        Ok(self.peeked.insert(token))
    }

    fn line_number(&self) -> u32 {
        self.line
    }

    fn filename(&self) -> &str {
        &self.filename
    }
}
