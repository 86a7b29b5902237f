#![no_main]

use arbitrary::Arbitrary;
use json5_decode::{Decoder, DecoderOptions};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input<'a> {
    max_depth: u8,
    bytes: &'a [u8],
}

fn json_depth(value: &serde_json::Value) -> usize {
    match value {
        serde_json::Value::Array(items) => 1 + items.iter().map(json_depth).max().unwrap_or(0),
        serde_json::Value::Object(map) => 1 + map.values().map(json_depth).max().unwrap_or(0),
        _ => 0,
    }
}

fuzz_target!(|input: Input<'_>| {
    let max_depth = usize::from(input.max_depth);
    let decoder = Decoder::new(DecoderOptions { max_depth });
    let result = decoder.decode_slice(input.bytes);

    if let Err(err) = &result {
        assert!(err.offset <= input.bytes.len(), "{err:?}");
        assert!(err.line >= 1 && err.column >= 1, "{err:?}");
    }

    // Text and bytes go through the same path.
    if let Ok(text) = std::str::from_utf8(input.bytes) {
        assert_eq!(
            format!("{:?}", decoder.decode_str(text)),
            format!("{result:?}")
        );
    }

    // Every JSON document within the depth limit is a JSON5 document.
    if let Ok(json) = serde_json::from_slice::<serde_json::Value>(input.bytes) {
        if json_depth(&json) <= max_depth {
            assert!(result.is_ok(), "valid JSON rejected: {result:?}");
        }
    }
});
