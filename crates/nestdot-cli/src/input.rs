//! JSON input loading.
//!
//! JSON objects map onto insertion-ordered mappings and arrays onto lists.
//! Tuples, sets, and byte sequences are library-level constructs JSON cannot
//! express; callers building those feed the encoder directly.

use std::fs;
use std::io::Read;

use nestdot_core::Value;
use nestdot_error::{Error, Result};

/// Load a JSON document from a file path, or stdin when `input` is `-`.
pub fn load_value(input: &str) -> Result<Value> {
    let text = if input == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|err| Error::from(err).with_operation("load_value"))?;
        buffer
    } else {
        fs::read_to_string(input).map_err(|err| {
            Error::from(err)
                .with_operation("load_value")
                .with_context("path", input)
        })?
    };
    parse_value(&text)
}

/// Parse a JSON document into the value model.
pub fn parse_value(text: &str) -> Result<Value> {
    let json: serde_json::Value = serde_json::from_str(text).map_err(|err| {
        Error::invalid_format(err.to_string())
            .with_operation("parse_value")
            .set_source(err)
    })?;
    Ok(json_to_value(json))
}

/// Convert a parsed JSON value into the value model, preserving object key
/// order.
pub fn json_to_value(json: serde_json::Value) -> Value {
    match json {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Bool(b),
        serde_json::Value::Number(number) => {
            if let Some(i) = number.as_i64() {
                Value::Int(i)
            } else {
                Value::Float(number.as_f64().unwrap_or(f64::NAN))
            }
        }
        serde_json::Value::String(s) => Value::Str(s),
        serde_json::Value::Array(elements) => {
            Value::List(elements.into_iter().map(json_to_value).collect())
        }
        serde_json::Value::Object(entries) => Value::Map(
            entries
                .into_iter()
                .map(|(key, value)| (key, json_to_value(value)))
                .collect(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use nestdot_core::ErrorKind;

    #[test]
    fn test_parse_preserves_object_key_order() {
        let value = parse_value(r#"{"z": 1, "m": 2, "a": 3}"#).expect("valid json");
        let Value::Map(entries) = &value else {
            panic!("expected a map");
        };
        let keys: Vec<&str> = entries.keys().map(String::as_str).collect();
        assert_eq!(keys, ["z", "m", "a"]);
    }

    #[test]
    fn test_parse_number_kinds() {
        let value = parse_value(r#"{"i": 3, "f": 3.5, "neg": -7}"#).expect("valid json");
        let Value::Map(entries) = &value else {
            panic!("expected a map");
        };
        assert_eq!(entries["i"], Value::Int(3));
        assert_eq!(entries["f"], Value::Float(3.5));
        assert_eq!(entries["neg"], Value::Int(-7));
    }

    #[test]
    fn test_parse_bool_and_null() {
        let value = parse_value(r#"{"t": true, "n": null}"#).expect("valid json");
        let Value::Map(entries) = &value else {
            panic!("expected a map");
        };
        assert_eq!(entries["t"], Value::Bool(true));
        assert_eq!(entries["n"], Value::Null);
    }

    #[test]
    fn test_parse_nested_structures() {
        let value = parse_value(r#"{"a": [1, {"b": 2}], "c": {"d": "e"}}"#).expect("valid json");
        assert_eq!(
            value,
            Value::map([
                (
                    "a",
                    Value::list([Value::Int(1), Value::map([("b", Value::Int(2))])])
                ),
                ("c", Value::map([("d", Value::from("e"))])),
            ])
        );
    }

    #[test]
    fn test_parse_rejects_malformed_json() {
        let err = parse_value("{not json").expect_err("malformed json must fail");
        assert_eq!(err.kind(), ErrorKind::InvalidFormat);
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_value("/no/such/input.json").expect_err("missing file must fail");
        assert_eq!(err.kind(), ErrorKind::FileNotFound);
    }
}
