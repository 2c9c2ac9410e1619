//! Default-on-absent accessors over a raw JSON object.
//!
//! Absent and `null` always mean "use the zero value". Anything else must have
//! the declared shape or the accessor reports the field path.

use crate::error::decode::DecodeError;

use serde_json::{Map, Value};

pub(crate) fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

pub(crate) fn child_path(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{parent}.{key}")
    }
}

pub(crate) fn index_path(parent: &str, index: usize) -> String {
    format!("{parent}[{index}]")
}

#[track_caller]
pub(crate) fn string_field(
    object: &Map<String, Value>,
    key: &str,
    parent: &str,
) -> Result<String, DecodeError> {
    match object.get(key) {
        None | Some(Value::Null) => Ok(String::new()),
        Some(Value::String(text)) => Ok(text.clone()),
        Some(other) => Err(DecodeError::structural(
            child_path(parent, key),
            format!("expected a string, found {}", value_kind(other)),
        )),
    }
}

/// Nested object, or `None` when absent, `null` or `""`.
///
/// Upstream blanks out empty sub-objects as `""` on some answer types.
#[track_caller]
pub(crate) fn object_field<'a>(
    object: &'a Map<String, Value>,
    key: &str,
    parent: &str,
) -> Result<Option<&'a Map<String, Value>>, DecodeError> {
    match object.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) if text.is_empty() => Ok(None),
        Some(Value::Object(nested)) => Ok(Some(nested)),
        Some(other) => Err(DecodeError::structural(
            child_path(parent, key),
            format!("expected an object, found {}", value_kind(other)),
        )),
    }
}

#[track_caller]
pub(crate) fn array_field<'a>(
    object: &'a Map<String, Value>,
    key: &str,
    parent: &str,
) -> Result<&'a [Value], DecodeError> {
    match object.get(key) {
        None | Some(Value::Null) => Ok(&[]),
        Some(Value::Array(items)) => Ok(items),
        Some(other) => Err(DecodeError::structural(
            child_path(parent, key),
            format!("expected an array, found {}", value_kind(other)),
        )),
    }
}

/// Loose boolean: `true`/`false`, `0`/`1` and `""`.
#[track_caller]
pub(crate) fn flag_field(
    object: &Map<String, Value>,
    key: &str,
    parent: &str,
) -> Result<bool, DecodeError> {
    match object.get(key) {
        None | Some(Value::Null) => Ok(false),
        Some(Value::Bool(flag)) => Ok(*flag),
        Some(Value::Number(number)) => Ok(number.as_f64().is_some_and(|n| n != 0.0)),
        Some(Value::String(text)) => match text.trim() {
            "" | "0" | "false" => Ok(false),
            "1" | "true" => Ok(true),
            _ => Err(DecodeError::structural(
                child_path(parent, key),
                format!("expected a flag, found {text:?}"),
            )),
        },
        Some(other) => Err(DecodeError::structural(
            child_path(parent, key),
            format!("expected a flag, found {}", value_kind(other)),
        )),
    }
}
