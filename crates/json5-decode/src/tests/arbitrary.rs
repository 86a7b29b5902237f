//! Random documents for the property tests, plus a small JSON5 writer that
//! renders them in many equivalent spellings.

use std::fmt::Write as _;

use quickcheck::{Arbitrary, Gen};

use crate::{
    Map, Number, Value,
    lexer::{is_id_continue, is_id_start},
};

#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) struct FiniteFloat(pub f64);

impl Arbitrary for FiniteFloat {
    fn arbitrary(g: &mut Gen) -> Self {
        let mut value = f64::arbitrary(g);
        while !value.is_finite() {
            value = f64::arbitrary(g);
        }

        Self(value)
    }
}

impl Arbitrary for Number {
    fn arbitrary(g: &mut Gen) -> Self {
        if bool::arbitrary(g) {
            Number::Integer(i64::arbitrary(g))
        } else {
            Number::Float(FiniteFloat::arbitrary(g).0)
        }
    }
}

impl Arbitrary for Value {
    fn arbitrary(g: &mut Gen) -> Self {
        fn gen_val(g: &mut Gen, depth: usize) -> Value {
            let variants = if depth == 0 { 4 } else { 6 };
            match usize::arbitrary(g) % variants {
                0 => Value::Null,
                1 => Value::Bool(bool::arbitrary(g)),
                2 => Value::Number(Number::arbitrary(g)),
                3 => Value::String(String::arbitrary(g)),
                4 => {
                    let len = usize::arbitrary(g) % 4;
                    Value::Array((0..len).map(|_| gen_val(g, depth - 1)).collect())
                }
                _ => {
                    let len = usize::arbitrary(g) % 4;
                    let mut map = Map::new();
                    for _ in 0..len {
                        map.insert(String::arbitrary(g), gen_val(g, depth - 1));
                    }
                    Value::Object(map)
                }
            }
        }

        let depth = usize::arbitrary(g) % 4;
        gen_val(g, depth)
    }
}

/// Equality that also requires object members to be in the same order.
pub(crate) fn ordered_eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Array(a), Value::Array(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(a, b)| ordered_eq(a, b))
        }
        (Value::Object(a), Value::Object(b)) => {
            a.len() == b.len()
                && a
                    .iter()
                    .zip(b)
                    .all(|((ka, va), (kb, vb))| ka == kb && ordered_eq(va, vb))
        }
        (Value::Number(Number::Float(a)), Value::Number(Number::Float(b))) => {
            a.to_bits() == b.to_bits() || (a.is_nan() && b.is_nan())
        }
        _ => a == b,
    }
}

pub(crate) fn to_serde_json(value: &Value) -> serde_json::Value {
    match value {
        Value::Null => serde_json::Value::Null,
        Value::Bool(b) => serde_json::Value::Bool(*b),
        Value::Number(Number::Integer(n)) => serde_json::Value::from(*n),
        Value::Number(Number::Float(f)) => serde_json::Number::from_f64(*f)
            .map_or(serde_json::Value::Null, serde_json::Value::Number),
        Value::String(s) => serde_json::Value::String(s.clone()),
        Value::Array(items) => serde_json::Value::Array(items.iter().map(to_serde_json).collect()),
        Value::Object(map) => serde_json::Value::Object(
            map.iter()
                .map(|(k, v)| (k.clone(), to_serde_json(v)))
                .collect(),
        ),
    }
}

const TRIVIA: &[&str] = &[
    "",
    " ",
    "\t",
    "\n",
    "\r\n",
    "\r",
    "\u{000B}",
    "\u{000C}",
    "\u{00A0}",
    "\u{2028}",
    "\u{2029}",
    "\u{3000}",
    "\u{FEFF}",
    "/**/",
    "/* block\n * comment */",
    "// line comment\n",
    " // trailing ' \" } ]\r\n",
];

/// How to spell a document. Each flag picks one of the equivalent JSON5
/// forms; `trivia` seeds what goes between tokens.
#[derive(Debug, Clone)]
pub(crate) struct Json5Style {
    pub trivia: Vec<u8>,
    pub single_quotes: bool,
    pub unquoted_keys: bool,
    pub trailing_commas: bool,
    pub hex_integers: bool,
}

impl Arbitrary for Json5Style {
    fn arbitrary(g: &mut Gen) -> Self {
        Self {
            trivia: Vec::arbitrary(g),
            single_quotes: bool::arbitrary(g),
            unquoted_keys: bool::arbitrary(g),
            trailing_commas: bool::arbitrary(g),
            hex_integers: bool::arbitrary(g),
        }
    }
}

struct Writer<'a> {
    style: &'a Json5Style,
    out: String,
    next_trivia: usize,
    /// Byte length of the output just after the latest closing bracket.
    last_close: usize,
}

impl Writer<'_> {
    fn trivia(&mut self) {
        if self.style.trivia.is_empty() {
            return;
        }
        let seed = self.style.trivia[self.next_trivia % self.style.trivia.len()];
        self.next_trivia += 1;
        self.out.push_str(TRIVIA[usize::from(seed) % TRIVIA.len()]);
    }

    fn string(&mut self, s: &str) {
        let quote = if self.style.single_quotes { '\'' } else { '"' };
        self.out.push(quote);
        for c in s.chars() {
            match c {
                '\\' => self.out.push_str("\\\\"),
                '\n' => self.out.push_str("\\n"),
                '\r' => self.out.push_str("\\r"),
                c if c == quote => {
                    self.out.push('\\');
                    self.out.push(c);
                }
                c if u32::from(c) < 0x20 => {
                    let _ = write!(self.out, "\\x{:02x}", u32::from(c));
                }
                c => self.out.push(c),
            }
        }
        self.out.push(quote);
    }

    fn key(&mut self, key: &str) {
        let mut chars = key.chars();
        let is_identifier = chars.next().is_some_and(is_id_start) && chars.all(is_id_continue);
        if self.style.unquoted_keys && is_identifier {
            self.out.push_str(key);
        } else {
            self.string(key);
        }
    }

    fn number(&mut self, n: Number) {
        match n {
            Number::Integer(n) if self.style.hex_integers => {
                let sign = if n < 0 { "-" } else { "" };
                let _ = write!(self.out, "{sign}0x{:X}", n.unsigned_abs());
            }
            Number::Integer(n) => {
                let _ = write!(self.out, "{n}");
            }
            Number::Float(f) if f.is_nan() => self.out.push_str("NaN"),
            Number::Float(f) if f.is_infinite() => {
                self.out
                    .push_str(if f > 0.0 { "Infinity" } else { "-Infinity" });
            }
            Number::Float(f) => {
                let _ = write!(self.out, "{f:?}");
            }
        }
    }

    fn value(&mut self, value: &Value) {
        self.trivia();
        match value {
            Value::Null => self.out.push_str("null"),
            Value::Bool(b) => self.out.push_str(if *b { "true" } else { "false" }),
            Value::Number(n) => self.number(*n),
            Value::String(s) => self.string(s),
            Value::Array(items) => {
                self.out.push('[');
                for (i, item) in items.iter().enumerate() {
                    self.value(item);
                    self.trivia();
                    if i + 1 < items.len() || self.style.trailing_commas {
                        self.out.push(',');
                    }
                }
                self.trivia();
                self.out.push(']');
                self.last_close = self.out.len();
            }
            Value::Object(map) => {
                self.out.push('{');
                for (i, (k, v)) in map.iter().enumerate() {
                    self.trivia();
                    self.key(k);
                    self.trivia();
                    self.out.push(':');
                    self.value(v);
                    self.trivia();
                    if i + 1 < map.len() || self.style.trailing_commas {
                        self.out.push(',');
                    }
                }
                self.trivia();
                self.out.push('}');
                self.last_close = self.out.len();
            }
        }
        self.trivia();
    }
}

/// Renders `value` as JSON5 text in the given style.
pub(crate) fn to_json5(value: &Value, style: &Json5Style) -> String {
    to_json5_with_root_end(value, style).0
}

/// Like [`to_json5`], also returning the byte offset just past the root
/// container's closing bracket (`0` for scalars).
pub(crate) fn to_json5_with_root_end(value: &Value, style: &Json5Style) -> (String, usize) {
    let mut writer = Writer {
        style,
        out: String::new(),
        next_trivia: 0,
        last_close: 0,
    };
    writer.value(value);
    (writer.out, writer.last_close)
}
