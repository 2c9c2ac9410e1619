//! Size coercion for `Height`, `Width`, `ImageHeight` and `ImageWidth`.
//!
//! Upstream writes "no size" as `""` instead of omitting the field or sending
//! `0`. Plain integer parsing would reject that, so every falsy value (absent,
//! `null`, `""`, `0`, `false`) collapses to a default before parsing.

use crate::decode::fields::value_kind;
use crate::error::decode::DecodeError;

use serde_json::{Number, Value};

pub const DEFAULT_SIZE: u32 = 0;

/// Coerce a size field, using [`DEFAULT_SIZE`] for falsy values.
#[track_caller]
pub fn normalize_size(value: Option<&Value>, field: &str) -> Result<u32, DecodeError> {
    normalize_size_or(value, DEFAULT_SIZE, field)
}

/// Coerce a size field, using `empty_default` for falsy values.
///
/// Accepts non-negative integers, integral floats (`48.0`) and numeric
/// strings (`"48"`). Anything else is a structural error on `field`.
#[track_caller]
pub fn normalize_size_or(
    value: Option<&Value>,
    empty_default: u32,
    field: &str,
) -> Result<u32, DecodeError> {
    let parsed = match value {
        None | Some(Value::Null) | Some(Value::Bool(false)) => return Ok(empty_default),
        Some(Value::String(text)) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return Ok(empty_default);
            }
            trimmed.parse::<u32>().map_err(|e| {
                DecodeError::structural(field, format!("expected a size, found {text:?}: {e}"))
            })?
        }
        Some(Value::Number(number)) => number_to_size(number, field)?,
        Some(other) => {
            return Err(DecodeError::structural(
                field,
                format!("expected a size, found {}", value_kind(other)),
            ));
        }
    };

    if parsed == 0 {
        Ok(empty_default)
    } else {
        Ok(parsed)
    }
}

#[track_caller]
fn number_to_size(number: &Number, field: &str) -> Result<u32, DecodeError> {
    if let Some(integer) = number.as_u64() {
        return u32::try_from(integer).map_err(|_| {
            DecodeError::structural(field, format!("size {integer} is out of range"))
        });
    }

    match number.as_f64() {
        Some(float) if float >= 0.0 && float.fract() == 0.0 && float <= f64::from(u32::MAX) => {
            Ok(float as u32)
        }
        _ => Err(DecodeError::structural(
            field,
            format!("expected a non-negative integer size, found {number}"),
        )),
    }
}
