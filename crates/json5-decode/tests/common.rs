#![allow(missing_docs, dead_code)]

use std::fmt::Write as _;

use json5_decode::{Number, Value};

pub const KITCHEN_SINK: &str = r#"// This file is written in JSON5 syntax, naturally, but npm needs a regular
// JSON file, so compile via `npm run build`. Be sure to keep both in sync!
{
    unquoted: 'and you can quote me on that',
    singleQuotes: 'I can use "double quotes" here',
    lineBreaks: "Look, Mom! \
No \\n's!",
    hexadecimal: 0xdecaf,
    leadingDecimalPoint: .8675309, andTrailing: 8675309.,
    positiveSign: +1,
    trailingComma: 'in objects', andIn: ['arrays',],
    "backwardsCompatible": "with JSON",
}
"#;

/// One line per leaf, keyed by its path from the root, in document order.
pub fn render(value: &Value) -> String {
    let mut out = String::new();
    render_into(&mut out, "$", value);
    out
}

fn render_into(out: &mut String, path: &str, value: &Value) {
    match value {
        Value::Array(items) if !items.is_empty() => {
            for (i, item) in items.iter().enumerate() {
                render_into(out, &format!("{path}[{i}]"), item);
            }
        }
        Value::Object(map) if !map.is_empty() => {
            for (key, item) in map {
                render_into(out, &format!("{path}.{key}"), item);
            }
        }
        leaf => {
            let _ = writeln!(out, "{path} = {}", leaf_text(leaf));
        }
    }
}

fn leaf_text(value: &Value) -> String {
    match value {
        Value::Null => "null".to_owned(),
        Value::Bool(b) => b.to_string(),
        Value::Number(Number::Integer(n)) => n.to_string(),
        Value::Number(Number::Float(f)) => format!("{f:?}"),
        Value::String(s) => format!("{s:?}"),
        Value::Array(_) => "[]".to_owned(),
        Value::Object(_) => "{}".to_owned(),
    }
}

/// The decoded value as `serde_json`, with non-finite floats as `null`.
pub fn to_json(value: &Value) -> serde_json::Value {
    match value {
        Value::Null => serde_json::Value::Null,
        Value::Bool(b) => serde_json::Value::Bool(*b),
        Value::Number(Number::Integer(n)) => serde_json::Value::from(*n),
        Value::Number(Number::Float(f)) => serde_json::Number::from_f64(*f)
            .map_or(serde_json::Value::Null, serde_json::Value::Number),
        Value::String(s) => serde_json::Value::String(s.clone()),
        Value::Array(items) => items.iter().map(to_json).collect(),
        Value::Object(map) => serde_json::Value::Object(
            map.iter().map(|(k, v)| (k.clone(), to_json(v))).collect(),
        ),
    }
}

/// Decodes `src` and compares it, member order included, with `expected`.
#[track_caller]
pub fn decodes_to(src: &str, expected: &serde_json::Value) {
    let value = json5_decode::from_str(src).unwrap_or_else(|err| panic!("{src:?}: {err}"));
    assert_eq!(
        serde_json::to_string(&to_json(&value)).unwrap(),
        serde_json::to_string(expected).unwrap(),
        "{src:?}"
    );
}
