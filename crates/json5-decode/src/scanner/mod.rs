//! Scanner: a UTF-8 character cursor over one immutable input buffer.
//!
//! The scanner owns nothing but a borrowed byte slice and a [`Position`]. It
//! decodes one scalar at a time with [`bstr::decode_utf8`], so text and raw
//! bytes go through the same path and invalid UTF-8 is reported at the exact
//! byte where it starts instead of being rejected up front.
//!
//! Position bookkeeping happens on every advance, so the lexer never has to
//! recompute a line or column when it builds an error.
//!
//! Invariants
//! - `pos.offset <= src.len()` and always sits on a scalar boundary.
//! - LF, CR, CR LF, U+2028 and U+2029 each end exactly one line.
//!
//! ```ignore
//! let mut s = Scanner::new(b"ab\r\ncd");
//! while s.advance().is_some() {}
//! assert_eq!(s.position(), Position { line: 2, column: 3, offset: 6 });
//! ```

use crate::error::{DecodeError, ErrorKind};

/// A location in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    /// 1-based line number.
    pub line: usize,
    /// 1-based column, counted in Unicode scalar values.
    pub column: usize,
    /// 0-based byte offset.
    pub offset: usize,
}

impl Default for Position {
    fn default() -> Self {
        Self {
            line: 1,
            column: 1,
            offset: 0,
        }
    }
}

/// What the next character of the input looks like.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Peeked {
    /// A decoded scalar value.
    Char(char),
    /// The bytes at the cursor do not start a valid UTF-8 sequence.
    InvalidUtf8,
    /// Nothing is left.
    EndOfInput,
}

#[derive(Debug)]
pub(crate) struct Scanner<'src> {
    src: &'src [u8],
    pos: Position,
    // Set after a CR so that the LF of a CR LF pair does not start another line.
    after_cr: bool,
}

impl<'src> Scanner<'src> {
    pub fn new(src: &'src [u8]) -> Self {
        Self {
            src,
            pos: Position::default(),
            after_cr: false,
        }
    }

    #[inline]
    pub fn position(&self) -> Position {
        self.pos
    }

    #[inline]
    fn rest(&self) -> &'src [u8] {
        &self.src[self.pos.offset..]
    }

    /// Decodes but does not consume the next character.
    #[inline]
    pub fn peek(&self) -> Peeked {
        let rest = self.rest();
        if rest.is_empty() {
            return Peeked::EndOfInput;
        }
        match bstr::decode_utf8(rest) {
            (Some(ch), _) => Peeked::Char(ch),
            (None, _) => Peeked::InvalidUtf8,
        }
    }

    /// Consumes the next character and returns it.
    ///
    /// Returns `None` without moving at end of input or in front of an
    /// invalid UTF-8 sequence; callers peek first to tell the two apart.
    #[inline]
    pub fn advance(&mut self) -> Option<char> {
        let (ch, len) = bstr::decode_utf8(self.rest());
        let ch = ch?;
        self.pos.offset += len;
        self.bump_pos(ch);
        Some(ch)
    }

    /// Consumes the next character if it is `expected`.
    #[inline]
    pub fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Peeked::Char(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// ASCII fast path: appends consecutive bytes satisfying `pred` to `out`
    /// and returns how many were copied.
    ///
    /// Line terminators and non-ASCII bytes always stop the run, so only the
    /// column needs updating.
    pub fn copy_while_ascii(&mut self, out: &mut String, pred: impl Fn(u8) -> bool) -> usize {
        let rest = self.rest();
        let copied = rest
            .iter()
            .take_while(|&&b| b.is_ascii() && b != b'\n' && b != b'\r' && pred(b))
            .count();
        if copied > 0 {
            out.extend(rest[..copied].iter().copied().map(char::from));
            self.pos.offset += copied;
            self.pos.column += copied;
            self.after_cr = false;
        }
        copied
    }

    #[inline]
    fn bump_pos(&mut self, ch: char) {
        match ch {
            '\n' if self.after_cr => self.after_cr = false,
            '\n' | '\u{2028}' | '\u{2029}' => {
                self.pos.line += 1;
                self.pos.column = 1;
                self.after_cr = false;
            }
            '\r' => {
                self.pos.line += 1;
                self.pos.column = 1;
                self.after_cr = true;
            }
            _ => {
                self.pos.column += 1;
                self.after_cr = false;
            }
        }
    }

    /// An error of `kind` at the cursor.
    pub fn error(&self, kind: ErrorKind) -> DecodeError {
        DecodeError::new(kind, self.pos)
    }

    /// The error for finding `peeked` at the cursor when it cannot continue
    /// the current token.
    pub fn invalid(&self, peeked: Peeked) -> DecodeError {
        self.error(match peeked {
            Peeked::Char(c) => ErrorKind::InvalidCharacter(c),
            Peeked::InvalidUtf8 => ErrorKind::InvalidUtf8,
            Peeked::EndOfInput => ErrorKind::UnexpectedEndOfInput,
        })
    }
}

#[cfg(test)]
mod tests;
