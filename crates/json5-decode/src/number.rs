//! JSON5 numbers.
//!
//! A decoded number keeps the integer/float distinction of its literal where
//! it can: plain decimal digits and hexadecimal literals that fit in an `i64`
//! become [`Number::Integer`], everything else (fractions, exponents,
//! `Infinity`, `NaN`, negative zero, and integers too large for `i64`) becomes
//! [`Number::Float`].

/// A decoded JSON5 number.
///
/// Equality is numeric, so `Integer(1) == Float(1.0)`, and `NaN` is unequal to
/// every number including itself.
///
/// ```rust
/// use json5_decode::{Number, Value};
///
/// let v = json5_decode::from_str("[0x10, 16., NaN]").unwrap();
/// let items = v.as_array().unwrap();
/// assert_eq!(items[0], Value::Number(Number::Integer(16)));
/// assert_eq!(items[0], items[1]);
/// assert_ne!(items[2], items[2]);
/// ```
#[derive(Clone, Copy, Debug)]
pub enum Number {
    /// An integral literal that fits in an `i64`.
    Integer(i64),
    /// Any other numeric literal.
    Float(f64),
}

impl Number {
    /// The value as an `f64`, rounding integers beyond 2^53.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Integer(n) => n as f64,
            Number::Float(f) => f,
        }
    }

    /// The value as an `i64` if it was decoded as an integer.
    #[must_use]
    pub fn as_i64(self) -> Option<i64> {
        match self {
            Number::Integer(n) => Some(n),
            Number::Float(_) => None,
        }
    }

    /// Returns `true` for [`Number::Integer`].
    #[must_use]
    pub fn is_integer(self) -> bool {
        matches!(self, Number::Integer(_))
    }

    /// Returns `true` for [`Number::Float`].
    #[must_use]
    pub fn is_float(self) -> bool {
        matches!(self, Number::Float(_))
    }

    /// Returns `true` if the value is `NaN`.
    #[must_use]
    pub fn is_nan(self) -> bool {
        matches!(self, Number::Float(f) if f.is_nan())
    }

    /// Returns `true` if the value is positive or negative infinity.
    #[must_use]
    pub fn is_infinite(self) -> bool {
        matches!(self, Number::Float(f) if f.is_infinite())
    }
}

impl PartialEq for Number {
    #[allow(clippy::float_cmp)]
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Number::Integer(a), Number::Integer(b)) => a == b,
            _ => self.as_f64() == other.as_f64(),
        }
    }
}

impl From<i64> for Number {
    fn from(n: i64) -> Self {
        Number::Integer(n)
    }
}

impl From<i32> for Number {
    fn from(n: i32) -> Self {
        Number::Integer(n.into())
    }
}

impl From<u32> for Number {
    fn from(n: u32) -> Self {
        Number::Integer(n.into())
    }
}

impl From<f64> for Number {
    fn from(f: f64) -> Self {
        Number::Float(f)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Number {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match *self {
            Number::Integer(n) => serializer.serialize_i64(n),
            Number::Float(f) => serializer.serialize_f64(f),
        }
    }
}

/// Lexical hint so conversion can distinguish ints vs floats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NumberLexeme<'a> {
    /// Optional sign and decimal digits; no '.' and no exponent.
    Integer(&'a str),
    /// Has '.' or an exponent.
    Float(&'a str),
    /// Digits after a `0x` prefix.
    Hex { negative: bool, digits: &'a str },
}

impl NumberLexeme<'_> {
    /// Converts a lexeme the lexer has already validated.
    ///
    /// Integers that overflow `i64` are promoted to the nearest `f64`.
    pub fn to_number(self) -> Option<Number> {
        match self {
            NumberLexeme::Integer(text) => match text.parse::<i64>() {
                Ok(0) if text.starts_with('-') => Some(Number::Float(-0.0)),
                Ok(n) => Some(Number::Integer(n)),
                Err(_) => text.parse::<f64>().ok().map(Number::Float),
            },
            NumberLexeme::Float(text) => text.parse::<f64>().ok().map(Number::Float),
            NumberLexeme::Hex { negative, digits } => Some(hex_to_number(negative, digits)),
        }
    }
}

fn hex_to_number(negative: bool, digits: &str) -> Number {
    if let Ok(magnitude) = u64::from_str_radix(digits, 16) {
        if magnitude == 0 && negative {
            return Number::Float(-0.0);
        }
        let exact = if negative {
            0i64.checked_sub_unsigned(magnitude)
        } else {
            i64::try_from(magnitude).ok()
        };
        if let Some(n) = exact {
            return Number::Integer(n);
        }
    }
    let magnitude = digits
        .chars()
        .filter_map(|c| c.to_digit(16))
        .fold(0.0_f64, |acc, d| acc * 16.0 + f64::from(d));
    Number::Float(if negative { -magnitude } else { magnitude })
}
