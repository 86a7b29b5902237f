//! A decoder for [JSON5](https://json5.org), the JSON superset that allows
//! comments, trailing commas, unquoted and single-quoted keys, single-quoted
//! strings, line continuations, hexadecimal integers, leading or trailing
//! decimal points, an explicit `+` sign, and `Infinity`/`NaN`.
//!
//! Decoding turns one complete JSON5 document into a [`Value`] tree. Object
//! members keep their source order, integers that fit in an `i64` stay exact,
//! and any malformed input is rejected with a [`DecodeError`] pointing at the
//! line, column and byte offset of the first problem.
//!
//! ```rust
//! use json5_decode::Value;
//!
//! let config = json5_decode::from_str(
//!     r"{
//!         // Comments are fine.
//!         name: 'json5',
//!         ports: [0x1F90, 8443,],
//!         ratio: .5,
//!     }",
//! )?;
//!
//! assert_eq!(config["name"], Value::from("json5"));
//! assert_eq!(config["ports"][0].as_i64(), Some(8080));
//! assert_eq!(config["ratio"].as_f64(), Some(0.5));
//! # Ok::<(), json5_decode::DecodeError>(())
//! ```
//!
//! Use [`Decoder`] to change the [`DecoderOptions`], such as the nesting
//! limit that protects against deeply nested input.
//!
//! # Features
//!
//! - `serde`: implements `serde::Serialize` for [`Value`] and [`Number`], so
//!   a decoded document can be re-encoded with any serde format.

mod error;
mod escape_buffer;
mod lexer;
mod number;
mod options;
mod parser;
mod scanner;
mod value;

#[cfg(test)]
mod tests;

use std::{io::Read, str::FromStr};

pub use error::{Container, DecodeError, ErrorKind};
pub use number::Number;
pub use options::DecoderOptions;
pub use scanner::Position;
pub use value::{Array, Map, Value};

use crate::parser::Parser;

/// Decodes JSON5 documents with a fixed set of [`DecoderOptions`].
///
/// A decoder holds no state between calls, so one value can be shared and
/// used from any number of threads.
///
/// ```rust
/// use json5_decode::{Decoder, DecoderOptions};
///
/// let decoder = Decoder::new(DecoderOptions { max_depth: 16 });
/// let value = decoder.decode_slice(b"[1, 2, 3,]")?;
/// assert_eq!(value.as_array().map(Vec::len), Some(3));
/// # Ok::<(), json5_decode::DecodeError>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Decoder {
    options: DecoderOptions,
}

impl Decoder {
    /// Creates a decoder with the given options.
    #[must_use]
    pub fn new(options: DecoderOptions) -> Self {
        Self { options }
    }

    /// The options this decoder was created with.
    #[must_use]
    pub fn options(&self) -> &DecoderOptions {
        &self.options
    }

    /// Decodes a JSON5 document from a string.
    ///
    /// # Errors
    ///
    /// Returns a [`DecodeError`] for the first lexical or structural problem
    /// in `text`.
    pub fn decode_str(&self, text: &str) -> Result<Value, DecodeError> {
        self.decode_slice(text.as_bytes())
    }

    /// Decodes a JSON5 document from UTF-8 bytes.
    ///
    /// The bytes are validated as they are read, so invalid UTF-8 is reported
    /// as [`ErrorKind::InvalidUtf8`] at the offset where it starts.
    ///
    /// # Errors
    ///
    /// Returns a [`DecodeError`] for the first problem in `bytes`.
    pub fn decode_slice(&self, bytes: &[u8]) -> Result<Value, DecodeError> {
        log::trace!(
            "decoding {} bytes with max_depth {}",
            bytes.len(),
            self.options.max_depth
        );
        let result = Parser::new(bytes, &self.options).parse();
        match &result {
            Ok(_) => log::trace!("decoded {} bytes", bytes.len()),
            Err(err) => log::debug!("JSON5 decode failed: {err}"),
        }
        result
    }

    /// Reads `reader` to the end and decodes its contents.
    ///
    /// # Errors
    ///
    /// Returns a [`DecodeError`] of kind [`ErrorKind::Io`] if reading fails,
    /// or the first decoding problem in the bytes read.
    pub fn decode_reader<R: Read>(&self, mut reader: R) -> Result<Value, DecodeError> {
        let mut bytes = Vec::new();
        if let Err(err) = reader.read_to_end(&mut bytes) {
            log::debug!("reading JSON5 input failed: {err}");
            return Err(DecodeError::io(&err));
        }
        self.decode_slice(&bytes)
    }
}

/// Decodes a JSON5 document from a string with the default options.
///
/// # Errors
///
/// Returns a [`DecodeError`] for the first lexical or structural problem in
/// `text`.
///
/// ```rust
/// let err = json5_decode::from_str("[1, 2").unwrap_err();
/// assert_eq!(err.to_string(), "unterminated array at line 1, column 6");
/// ```
pub fn from_str(text: &str) -> Result<Value, DecodeError> {
    Decoder::default().decode_str(text)
}

/// Decodes a JSON5 document from UTF-8 bytes with the default options.
///
/// # Errors
///
/// Returns a [`DecodeError`] for the first problem in `bytes`, including
/// [`ErrorKind::InvalidUtf8`] for malformed UTF-8.
pub fn from_slice(bytes: &[u8]) -> Result<Value, DecodeError> {
    Decoder::default().decode_slice(bytes)
}

/// Reads `reader` to the end and decodes it with the default options.
///
/// # Errors
///
/// Returns a [`DecodeError`] of kind [`ErrorKind::Io`] if reading fails, or
/// the first decoding problem in the bytes read.
///
/// ```rust
/// let value = json5_decode::from_reader("{a: [true]}".as_bytes())?;
/// assert_eq!(value["a"][0].as_bool(), Some(true));
/// # Ok::<(), json5_decode::DecodeError>(())
/// ```
pub fn from_reader<R: Read>(reader: R) -> Result<Value, DecodeError> {
    Decoder::default().decode_reader(reader)
}

impl FromStr for Value {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        from_str(s)
    }
}
