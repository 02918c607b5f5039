//! Query-string encoding for nested parameters
//!
//! Nested values use bracket notation with array indices:
//! `{"a": [1, 2], "b": {"c": true}}` becomes `a%5B0%5D=1&a%5B1%5D=2&b%5Bc%5D=true`.
//! Keys and values are percent-encoded with the RFC 3986 unreserved set, so
//! spaces become `%20`. `null` encodes as an empty value; empty arrays and
//! objects produce nothing. Pairs follow the map's insertion order.

use serde_json::{Map, Value};

/// Encode a parameter map as a query string, without the leading `?`
pub fn encode(params: &Map<String, Value>) -> String {
    let mut pairs = Vec::new();
    for (key, value) in params {
        push_pairs(&mut pairs, key.clone(), value);
    }
    pairs.join("&")
}

fn push_pairs(pairs: &mut Vec<String>, key: String, value: &Value) {
    match value {
        Value::Array(items) => {
            for (i, item) in items.iter().enumerate() {
                push_pairs(pairs, format!("{}[{}]", key, i), item);
            }
        }
        Value::Object(map) => {
            for (sub, item) in map {
                push_pairs(pairs, format!("{}[{}]", key, sub), item);
            }
        }
        scalar => pairs.push(format!(
            "{}={}",
            urlencoding::encode(&key),
            urlencoding::encode(&scalar_to_string(scalar))
        )),
    }
}

/// Render a scalar the way it should appear on the wire
pub(crate) fn scalar_to_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}
