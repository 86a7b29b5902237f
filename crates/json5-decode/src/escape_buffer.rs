//! Accumulates the hexadecimal digits of `\xHH` and `\uXXXX` escapes.
//!
//! [`HexEscapeBuffer`] collects a fixed number of ASCII hex digits and yields
//! the code unit they spell once the last one arrives. JSON5 writes characters
//! outside the Basic Multilingual Plane as two `\u` escapes forming a UTF-16
//! surrogate pair; [`join_surrogates`] turns such a pair back into a `char`.
//!
//! # Errors
//!
//! Feeding a character that is not an ASCII hex digit returns it back as the
//! error so the lexer can report it at its position.

/// Buffer for accumulating hexadecimal digits (`0-9`, `A-F`, `a-f`) into a
/// code unit.
#[derive(Debug)]
pub(crate) struct HexEscapeBuffer {
    value: u32,
    len: u8,
    width: u8,
}

impl HexEscapeBuffer {
    /// Digits in a `\xHH` escape.
    pub const HEX: u8 = 2;
    /// Digits in a `\uXXXX` escape.
    pub const UNICODE: u8 = 4;

    /// Creates an empty buffer expecting `width` digits.
    pub fn new(width: u8) -> Self {
        Self {
            value: 0,
            len: 0,
            width,
        }
    }

    /// Clears any accumulated digits and starts expecting `width` new ones.
    pub fn reset(&mut self, width: u8) {
        self.value = 0;
        self.len = 0;
        self.width = width;
    }

    /// Feeds one digit.
    ///
    /// - Returns `Ok(None)` while fewer than `width` digits have been seen.
    /// - Returns `Ok(Some(unit))` on the last digit and resets for the next
    ///   escape of the same width.
    /// - Returns `Err(c)` if `c` is not an ASCII hex digit.
    pub fn feed(&mut self, c: char) -> Result<Option<u32>, char> {
        let digit = c.to_digit(16).ok_or(c)?;
        self.value = (self.value << 4) | digit;
        self.len += 1;
        if self.len == self.width {
            let unit = self.value;
            self.reset(self.width);
            Ok(Some(unit))
        } else {
            Ok(None)
        }
    }
}

pub(crate) fn is_high_surrogate(unit: u32) -> bool {
    (0xD800..=0xDBFF).contains(&unit)
}

pub(crate) fn is_low_surrogate(unit: u32) -> bool {
    (0xDC00..=0xDFFF).contains(&unit)
}

/// Combines a high and a low surrogate into the scalar value they encode.
pub(crate) fn join_surrogates(high: u32, low: u32) -> Option<char> {
    if !is_high_surrogate(high) || !is_low_surrogate(low) {
        return None;
    }
    char::from_u32(0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00))
}
