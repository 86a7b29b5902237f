use core::fmt;

use thiserror::Error;

use crate::scanner::Position;

/// The error returned when a JSON5 document cannot be decoded.
///
/// Decoding stops at the first (leftmost) lexical or structural violation. The
/// error records what went wrong and where: `line` and `column` are 1-based,
/// with columns counted in Unicode scalar values, and `offset` is the 0-based
/// byte offset into the input.
///
/// ```rust
/// let err = json5_decode::from_str("{a: 1,, b: 2}").unwrap_err();
/// assert_eq!((err.line, err.column, err.offset), (1, 7, 6));
/// assert_eq!(
///     err.to_string(),
///     "expected a property name or '}', found ',' at line 1, column 7"
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{kind} at line {line}, column {column}")]
pub struct DecodeError {
    kind: ErrorKind,
    /// 1-based line of the offending character or token.
    pub line: usize,
    /// 1-based column of the offending character or token.
    pub column: usize,
    /// 0-based byte offset of the offending character or token.
    pub offset: usize,
}

impl DecodeError {
    pub(crate) fn new(kind: ErrorKind, pos: Position) -> Self {
        Self {
            kind,
            line: pos.line,
            column: pos.column,
            offset: pos.offset,
        }
    }

    pub(crate) fn io(err: &std::io::Error) -> Self {
        Self::new(ErrorKind::Io(err.to_string()), Position::default())
    }

    /// What went wrong.
    #[must_use]
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Where it went wrong.
    #[must_use]
    pub fn position(&self) -> Position {
        Position {
            line: self.line,
            column: self.column,
            offset: self.offset,
        }
    }

    /// Returns `true` if decoding failed because the input ended early, as
    /// opposed to containing something invalid.
    #[must_use]
    pub fn is_eof(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::UnexpectedEndOfInput
                | ErrorKind::UnterminatedString
                | ErrorKind::UnterminatedComment
                | ErrorKind::UnterminatedContainer(_)
        )
    }
}

/// The kind of a [`DecodeError`].
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ErrorKind {
    // Lexical errors.
    /// A character that cannot start or continue any token at this point.
    #[error("invalid character '{}'", .0.escape_debug())]
    InvalidCharacter(char),
    /// The input bytes are not valid UTF-8.
    #[error("invalid UTF-8 byte sequence")]
    InvalidUtf8,
    /// The input ended inside a string literal.
    #[error("unterminated string")]
    UnterminatedString,
    /// The input ended inside a `/* */` comment.
    #[error("unterminated block comment")]
    UnterminatedComment,
    /// A backslash escape that JSON5 does not allow, such as `\1`.
    #[error("invalid escape sequence '\\{}'", .0.escape_debug())]
    InvalidEscape(char),
    /// A `\u` escape naming an unpaired UTF-16 surrogate.
    #[error("invalid unicode escape sequence \\u{0:04X}")]
    InvalidUnicodeEscape(u32),
    /// A word after a sign that is neither `Infinity` nor `NaN`.
    #[error("invalid number literal")]
    InvalidNumber,
    /// The input ended where another token was required.
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,

    // Structural errors.
    /// A well-formed token in a place the grammar does not allow it.
    #[error("expected {expected}, found {found}")]
    UnexpectedToken {
        /// What the grammar allows here.
        expected: &'static str,
        /// A description of the token that was found.
        found: String,
    },
    /// The input ended before the closing bracket of an array or object.
    #[error("unterminated {0}")]
    UnterminatedContainer(Container),
    /// Something other than whitespace or comments follows the root value.
    #[error("trailing characters after the root value")]
    TrailingCharacters,
    /// Arrays and objects are nested deeper than the configured limit.
    #[error("nesting depth exceeds the limit of {0}")]
    DepthLimitExceeded(usize),

    /// Reading the input failed.
    #[error("I/O error: {0}")]
    Io(String),
}

/// The kind of container an [`ErrorKind::UnterminatedContainer`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Container {
    /// `[ ... ]`
    Array,
    /// `{ ... }`
    Object,
}

impl fmt::Display for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Container::Array => "array",
            Container::Object => "object",
        })
    }
}
