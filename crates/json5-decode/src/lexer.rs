//! The JSON5 lexer.
//!
//! [`Lexer`] pulls characters from a [`Scanner`] and yields one [`Token`] per
//! call to [`Lexer::lex`], skipping whitespace and comments in between. Once
//! the input is exhausted every call returns `Eof`.
//!
//! Numbers go through a small state machine (one state per position in the
//! numeric grammar); strings and identifiers are read in a loop with an ASCII
//! fast path for runs that need no decoding.
#![allow(clippy::enum_glob_use)]

use core::{fmt, mem};

use crate::{
    error::{DecodeError, ErrorKind},
    escape_buffer::{HexEscapeBuffer, is_high_surrogate, join_surrogates},
    number::{Number, NumberLexeme},
    scanner::{Peeked, Position, Scanner},
};

use Peeked::*;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum TokenKind {
    /// Must be one of: `{` `}` `[` `]` `:` `,`
    Punctuator(u8),
    /// A quoted string with escapes resolved.
    String(String),
    /// An unquoted name that is not a keyword, with escapes resolved.
    Identifier(String),
    Keyword(Keyword),
    /// A numeric literal, including signed `Infinity` and `NaN`.
    Number(Number),
    Eof,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Punctuator(p) => write!(f, "'{}'", char::from(*p)),
            TokenKind::String(_) => f.write_str("a string"),
            TokenKind::Identifier(name) => write!(f, "identifier `{name}`"),
            TokenKind::Keyword(k) => write!(f, "`{}`", k.as_str()),
            TokenKind::Number(_) => f.write_str("a number"),
            TokenKind::Eof => f.write_str("end of input"),
        }
    }
}

/// Identifiers with a meaning in value position. Written with an escape
/// (`true`) they are plain identifiers instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Keyword {
    True,
    False,
    Null,
    Infinity,
    NaN,
}

impl Keyword {
    fn from_ident(ident: &str) -> Option<Self> {
        Some(match ident {
            "true" => Keyword::True,
            "false" => Keyword::False,
            "null" => Keyword::Null,
            "Infinity" => Keyword::Infinity,
            "NaN" => Keyword::NaN,
            _ => return None,
        })
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Keyword::True => "true",
            Keyword::False => "false",
            Keyword::Null => "null",
            Keyword::Infinity => "Infinity",
            Keyword::NaN => "NaN",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Token {
    pub kind: TokenKind,
    /// Where the token's first character is.
    pub pos: Position,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NumberState {
    Start,
    Sign,
    Zero,
    DecimalInteger,
    DecimalPointLeading,
    DecimalPoint,
    DecimalFraction,
    DecimalExponent,
    DecimalExponentSign,
    DecimalExponentInteger,
    HexadecimalStart,
    Hexadecimal,
}

/// JSON5 whitespace: the JSON set, vertical tab, form feed, BOM, and the
/// Unicode line/paragraph separators and space separators.
pub(crate) fn is_whitespace(c: char) -> bool {
    c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{85}')
}

pub(crate) fn is_id_start(c: char) -> bool {
    matches!(c, '$' | '_') || unicode_ident::is_xid_start(c)
}

pub(crate) fn is_id_continue(c: char) -> bool {
    matches!(c, '$' | '\u{200C}' | '\u{200D}') || unicode_ident::is_xid_continue(c)
}

fn is_ascii_id_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'$'
}

#[derive(Debug)]
pub(crate) struct Lexer<'src> {
    scanner: Scanner<'src>,
    /// Reused for strings, identifiers and number lexemes.
    buffer: String,
    hex: HexEscapeBuffer,
}

impl<'src> Lexer<'src> {
    pub fn new(src: &'src [u8]) -> Self {
        Self {
            scanner: Scanner::new(src),
            buffer: String::new(),
            hex: HexEscapeBuffer::new(HexEscapeBuffer::UNICODE),
        }
    }

    /// Lexes the next token.
    #[allow(clippy::cast_possible_truncation)]
    pub fn lex(&mut self) -> Result<Token, DecodeError> {
        self.skip_trivia()?;
        let pos = self.scanner.position();
        let kind = match self.scanner.peek() {
            EndOfInput => TokenKind::Eof,
            Char(c @ ('{' | '}' | '[' | ']' | ':' | ',')) => {
                self.scanner.advance();
                TokenKind::Punctuator(c as u8)
            }
            Char(quote @ ('"' | '\'')) => {
                self.scanner.advance();
                self.lex_string(quote)?
            }
            Char('+' | '-' | '.' | '0'..='9') => self.lex_number(pos)?,
            Char(c) if c == '\\' || is_id_start(c) => self.lex_identifier()?,
            other => return Err(self.scanner.invalid(other)),
        };
        Ok(Token { kind, pos })
    }

    // ---------------------------------------------------------------------
    // Whitespace and comments
    // ---------------------------------------------------------------------

    fn skip_trivia(&mut self) -> Result<(), DecodeError> {
        loop {
            match self.scanner.peek() {
                Char(c) if is_whitespace(c) => {
                    self.scanner.advance();
                }
                Char('/') => self.skip_comment()?,
                _ => return Ok(()),
            }
        }
    }

    fn skip_comment(&mut self) -> Result<(), DecodeError> {
        let start = self.scanner.position();
        self.scanner.advance();
        match self.scanner.peek() {
            Char('/') => {
                self.scanner.advance();
                loop {
                    match self.scanner.peek() {
                        Char('\n' | '\r' | '\u{2028}' | '\u{2029}') | EndOfInput => return Ok(()),
                        Char(_) => {
                            self.scanner.advance();
                        }
                        InvalidUtf8 => return Err(self.scanner.invalid(InvalidUtf8)),
                    }
                }
            }
            Char('*') => {
                self.scanner.advance();
                loop {
                    match self.scanner.peek() {
                        Char('*') => {
                            self.scanner.advance();
                            if self.scanner.eat('/') {
                                return Ok(());
                            }
                        }
                        Char(_) => {
                            self.scanner.advance();
                        }
                        EndOfInput => {
                            return Err(DecodeError::new(ErrorKind::UnterminatedComment, start));
                        }
                        InvalidUtf8 => return Err(self.scanner.invalid(InvalidUtf8)),
                    }
                }
            }
            other => Err(self.scanner.invalid(other)),
        }
    }

    // ---------------------------------------------------------------------
    // Strings
    // ---------------------------------------------------------------------

    /// Reads a string body; the opening `quote` has been consumed.
    #[allow(clippy::cast_possible_truncation)]
    fn lex_string(&mut self, quote: char) -> Result<TokenKind, DecodeError> {
        let quote_byte = quote as u8;
        self.buffer.clear();
        loop {
            self.scanner.copy_while_ascii(&mut self.buffer, |b| b != b'\\' && b != quote_byte);
            match self.scanner.peek() {
                Char('\\') => {
                    self.scanner.advance();
                    self.lex_escape()?;
                }
                Char(c) if c == quote => {
                    self.scanner.advance();
                    return Ok(TokenKind::String(mem::take(&mut self.buffer)));
                }
                Char(c @ ('\n' | '\r')) => {
                    return Err(self.scanner.error(ErrorKind::InvalidCharacter(c)));
                }
                Char(c) => {
                    self.scanner.advance();
                    self.buffer.push(c);
                }
                EndOfInput => return Err(self.scanner.error(ErrorKind::UnterminatedString)),
                InvalidUtf8 => return Err(self.scanner.invalid(InvalidUtf8)),
            }
        }
    }

    /// Decodes one escape sequence into the buffer; the backslash has been
    /// consumed.
    fn lex_escape(&mut self) -> Result<(), DecodeError> {
        let pos = self.scanner.position();
        let escape = match self.scanner.peek() {
            Char(c) => {
                self.scanner.advance();
                c
            }
            EndOfInput => return Err(self.scanner.error(ErrorKind::UnterminatedString)),
            InvalidUtf8 => return Err(self.scanner.invalid(InvalidUtf8)),
        };
        let decoded = match escape {
            'b' => '\u{0008}',
            'f' => '\u{000C}',
            'n' => '\n',
            'r' => '\r',
            't' => '\t',
            'v' => '\u{000B}',
            '0' => {
                // `\0` may not be followed by a digit; that would read as octal.
                if let Char(d @ '0'..='9') = self.scanner.peek() {
                    return Err(self.scanner.error(ErrorKind::InvalidCharacter(d)));
                }
                '\0'
            }
            '1'..='9' => return Err(DecodeError::new(ErrorKind::InvalidEscape(escape), pos)),
            'x' => {
                let unit = self.read_hex(HexEscapeBuffer::HEX, true)?;
                char::from_u32(unit)
                    .ok_or_else(|| DecodeError::new(ErrorKind::InvalidUnicodeEscape(unit), pos))?
            }
            'u' => self.read_unicode_escape(pos, true)?,
            // Line continuations contribute nothing.
            '\r' => {
                self.scanner.eat('\n');
                return Ok(());
            }
            '\n' | '\u{2028}' | '\u{2029}' => return Ok(()),
            other => other,
        };
        self.buffer.push(decoded);
        Ok(())
    }

    /// Reads `width` hex digits and returns the code unit they spell.
    fn read_hex(&mut self, width: u8, in_string: bool) -> Result<u32, DecodeError> {
        self.hex.reset(width);
        loop {
            match self.scanner.peek() {
                Char(c) => match self.hex.feed(c) {
                    Ok(Some(unit)) => {
                        self.scanner.advance();
                        return Ok(unit);
                    }
                    Ok(None) => {
                        self.scanner.advance();
                    }
                    Err(c) => return Err(self.scanner.error(ErrorKind::InvalidCharacter(c))),
                },
                EndOfInput if in_string => {
                    return Err(self.scanner.error(ErrorKind::UnterminatedString));
                }
                other => return Err(self.scanner.invalid(other)),
            }
        }
    }

    /// Reads the digits of a `\u` escape (the `u` has been consumed) and, for a
    /// high surrogate, the `\uXXXX` low surrogate that must follow it.
    fn read_unicode_escape(&mut self, pos: Position, in_string: bool) -> Result<char, DecodeError> {
        let unit = self.read_hex(HexEscapeBuffer::UNICODE, in_string)?;
        if is_high_surrogate(unit) {
            if self.scanner.eat('\\') && self.scanner.eat('u') {
                let low = self.read_hex(HexEscapeBuffer::UNICODE, in_string)?;
                if let Some(ch) = join_surrogates(unit, low) {
                    return Ok(ch);
                }
            }
            return Err(DecodeError::new(ErrorKind::InvalidUnicodeEscape(unit), pos));
        }
        char::from_u32(unit)
            .ok_or_else(|| DecodeError::new(ErrorKind::InvalidUnicodeEscape(unit), pos))
    }

    // ---------------------------------------------------------------------
    // Identifiers
    // ---------------------------------------------------------------------

    fn lex_identifier(&mut self) -> Result<TokenKind, DecodeError> {
        self.buffer.clear();
        let mut escaped = false;
        loop {
            if !self.buffer.is_empty() {
                self.scanner.copy_while_ascii(&mut self.buffer, is_ascii_id_continue);
            }
            let pos = self.scanner.position();
            let first = self.buffer.is_empty();
            match self.scanner.peek() {
                Char('\\') => {
                    self.scanner.advance();
                    let escape_pos = self.scanner.position();
                    if !self.scanner.eat('u') {
                        return Err(self.scanner.invalid(self.scanner.peek()));
                    }
                    let ch = self.read_unicode_escape(escape_pos, false)?;
                    let allowed = if first {
                        is_id_start(ch)
                    } else {
                        is_id_continue(ch)
                    };
                    if !allowed {
                        return Err(DecodeError::new(ErrorKind::InvalidCharacter(ch), pos));
                    }
                    self.buffer.push(ch);
                    escaped = true;
                }
                Char(c) if (first && is_id_start(c)) || (!first && is_id_continue(c)) => {
                    self.scanner.advance();
                    self.buffer.push(c);
                }
                _ => break,
            }
        }

        let ident = mem::take(&mut self.buffer);
        if !escaped {
            if let Some(keyword) = Keyword::from_ident(&ident) {
                return Ok(TokenKind::Keyword(keyword));
            }
        }
        Ok(TokenKind::Identifier(ident))
    }

    // ---------------------------------------------------------------------
    // Numbers
    // ---------------------------------------------------------------------

    #[inline]
    fn bump(&mut self, c: char) {
        self.scanner.advance();
        self.buffer.push(c);
    }

    fn lex_number(&mut self, start: Position) -> Result<TokenKind, DecodeError> {
        use NumberState::*;

        self.buffer.clear();
        let mut negative = false;
        let mut state = Start;
        loop {
            let peeked = self.scanner.peek();
            state = match (state, peeked) {
                (Start, Char(c @ ('+' | '-'))) => {
                    negative = c == '-';
                    self.bump(c);
                    Sign
                }
                (Start | Sign, Char(c @ '0')) => {
                    self.bump(c);
                    Zero
                }
                (Start | Sign, Char(c @ '1'..='9')) => {
                    self.bump(c);
                    DecimalInteger
                }
                (Start | Sign, Char(c @ '.')) => {
                    self.bump(c);
                    DecimalPointLeading
                }
                (Sign, Char('I' | 'N')) => return self.lex_signed_keyword(negative, start),

                (Zero, Char('x' | 'X')) => {
                    self.scanner.advance();
                    self.buffer.clear();
                    HexadecimalStart
                }
                (Zero, Char(c @ '0'..='9')) => {
                    return Err(self.scanner.error(ErrorKind::InvalidCharacter(c)));
                }
                (Zero | DecimalInteger, Char(c @ '.')) => {
                    self.bump(c);
                    DecimalPoint
                }
                (Zero | DecimalInteger | DecimalPoint | DecimalFraction, Char(c @ ('e' | 'E'))) => {
                    self.bump(c);
                    DecimalExponent
                }
                (DecimalInteger | DecimalFraction | DecimalExponentInteger, Char('0'..='9')) => {
                    self.scanner.copy_while_ascii(&mut self.buffer, |b| b.is_ascii_digit());
                    state
                }
                (DecimalPointLeading | DecimalPoint, Char(c @ '0'..='9')) => {
                    self.bump(c);
                    DecimalFraction
                }
                (DecimalExponent, Char(c @ ('+' | '-'))) => {
                    self.bump(c);
                    DecimalExponentSign
                }
                (DecimalExponent | DecimalExponentSign, Char(c @ '0'..='9')) => {
                    self.bump(c);
                    DecimalExponentInteger
                }
                (HexadecimalStart | Hexadecimal, Char(c)) if c.is_ascii_hexdigit() => {
                    self.scanner.copy_while_ascii(&mut self.buffer, |b| b.is_ascii_hexdigit());
                    Hexadecimal
                }

                (Zero | DecimalInteger, _) => {
                    return self.finish_number(NumberLexeme::Integer(&self.buffer), start);
                }
                (DecimalPoint | DecimalFraction | DecimalExponentInteger, _) => {
                    return self.finish_number(NumberLexeme::Float(&self.buffer), start);
                }
                (Hexadecimal, _) => {
                    let lexeme = NumberLexeme::Hex {
                        negative,
                        digits: &self.buffer,
                    };
                    return self.finish_number(lexeme, start);
                }
                (_, other) => return Err(self.scanner.invalid(other)),
            };
        }
    }

    /// A number may not run straight into an identifier (`1a`, `0x1g`).
    fn reject_identifier_tail(&self) -> Result<(), DecodeError> {
        match self.scanner.peek() {
            Char(c) if c == '\\' || is_id_start(c) => {
                Err(self.scanner.error(ErrorKind::InvalidCharacter(c)))
            }
            _ => Ok(()),
        }
    }

    fn finish_number(
        &self,
        lexeme: NumberLexeme<'_>,
        start: Position,
    ) -> Result<TokenKind, DecodeError> {
        self.reject_identifier_tail()?;
        lexeme
            .to_number()
            .map(TokenKind::Number)
            .ok_or_else(|| DecodeError::new(ErrorKind::InvalidNumber, start))
    }

    /// `+Infinity`, `-Infinity`, `+NaN`, `-NaN`; the sign has been consumed.
    fn lex_signed_keyword(
        &mut self,
        negative: bool,
        start: Position,
    ) -> Result<TokenKind, DecodeError> {
        self.buffer.clear();
        self.scanner.copy_while_ascii(&mut self.buffer, is_ascii_id_continue);
        let value = match self.buffer.as_str() {
            "Infinity" if negative => f64::NEG_INFINITY,
            "Infinity" => f64::INFINITY,
            "NaN" => f64::NAN,
            _ => return Err(DecodeError::new(ErrorKind::InvalidNumber, start)),
        };
        self.reject_identifier_tail()?;
        Ok(TokenKind::Number(Number::Float(value)))
    }
}
