//! Byte cursor over the source text.
//!
//! The cursor advances through the source byte-by-byte. Reads past the end
//! return `0x00`, so lookahead never needs a bounds check at the call site;
//! use [`Cursor::is_eof`] to tell a real NUL byte from the end of input.
//!
//! Multi-byte UTF-8 characters only ever appear inside identifiers, string
//! bodies and comments. Those scanners step over whole characters, so every
//! position handed to [`Cursor::slice`] sits on a character boundary.

/// Cursor over a source string.
///
/// The cursor is [`Copy`], so a scanner can snapshot it before speculative
/// lookahead.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    src: &'a str,
    /// Current read position (byte index into `src`).
    pos: u32,
}

impl<'a> Cursor<'a> {
    pub fn new(src: &'a str) -> Self {
        Cursor { src, pos: 0 }
    }

    #[inline]
    fn byte_at(&self, pos: u32) -> u8 {
        self.src.as_bytes().get(pos as usize).copied().unwrap_or(0)
    }

    /// Byte at the current position, `0x00` at EOF.
    #[inline]
    pub fn current(&self) -> u8 {
        self.byte_at(self.pos)
    }

    /// Byte one position ahead of current.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.byte_at(self.pos + 1)
    }

    /// Byte two positions ahead of current.
    #[inline]
    pub fn peek2(&self) -> u8 {
        self.byte_at(self.pos + 2)
    }

    #[inline]
    pub fn advance(&mut self) {
        if !self.is_eof() {
            self.pos += 1;
        }
    }

    #[inline]
    pub fn advance_n(&mut self, n: u32) {
        self.pos = (self.pos + n).min(self.source_len());
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos as usize >= self.src.len()
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    #[expect(
        clippy::cast_possible_truncation,
        reason = "sources over 4 GiB are rejected by Lexer::new"
    )]
    #[inline]
    pub fn source_len(&self) -> u32 {
        self.src.len() as u32
    }

    /// Source text in `start..end`, or `""` if the range is not a valid
    /// character-aligned slice.
    pub fn slice(&self, start: u32, end: u32) -> &'a str {
        self.src.get(start as usize..end as usize).unwrap_or_default()
    }

    /// Source text from `start` to the current position.
    pub fn slice_from(&self, start: u32) -> &'a str {
        self.slice(start, self.pos)
    }

    /// Advance while `pred` holds for the current byte. Stops at EOF.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while !self.is_eof() && pred(self.current()) {
            self.pos += 1;
        }
    }

    /// Number of bytes in the UTF-8 character starting with `byte`.
    #[inline]
    pub fn utf8_char_width(byte: u8) -> u32 {
        match byte {
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => 1,
        }
    }

    /// Advance past one full UTF-8 character.
    #[inline]
    pub fn advance_char(&mut self) {
        let width = Self::utf8_char_width(self.current());
        self.advance_n(width);
    }

    /// The character at the current position, if any.
    pub fn current_char(&self) -> Option<char> {
        self.src.get(self.pos as usize..)?.chars().next()
    }

    /// Advance to the next `\n` or `\r`, or to EOF.
    ///
    /// Used by the comment scanner to skip comment bodies.
    #[expect(
        clippy::cast_possible_truncation,
        reason = "offset <= source_len which fits in u32"
    )]
    pub fn eat_until_newline_or_eof(&mut self) {
        let remaining = self.src.as_bytes().get(self.pos as usize..).unwrap_or_default();
        match memchr::memchr2(b'\n', b'\r', remaining) {
            Some(offset) => self.pos += offset as u32,
            None => self.pos = self.source_len(),
        }
    }

    /// Advance to the next byte that can end or interrupt a string body:
    /// `quote`, `\\` or a line break. Returns that byte, or `0x00` at EOF.
    #[expect(
        clippy::cast_possible_truncation,
        reason = "offset <= source_len which fits in u32"
    )]
    pub fn skip_to_string_delim(&mut self, quote: u8) -> u8 {
        let remaining = self.src.as_bytes().get(self.pos as usize..).unwrap_or_default();
        let hit = memchr::memchr3(quote, b'\\', b'\n', remaining);
        let scanned = &remaining[..hit.unwrap_or(remaining.len())];
        let offset = memchr::memchr(b'\r', scanned).or(hit);
        match offset {
            Some(offset) => {
                self.pos += offset as u32;
                self.current()
            }
            None => {
                self.pos = self.source_len();
                0
            }
        }
    }

    /// Skip spaces, tabs and form feeds.
    #[inline]
    pub fn eat_whitespace(&mut self) {
        self.eat_while(|b| b == b' ' || b == b'\t' || b == b'\x0c');
    }
}

#[cfg(test)]
mod tests;
