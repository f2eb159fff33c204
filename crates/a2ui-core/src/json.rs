//! Loose-typing helpers over `serde_json::Value`.
//!
//! Protocol payloads are produced by generators that do not always respect
//! types, so presence checks follow JSON-truthiness rather than schema types:
//! `null`, `false`, `0`, `NaN` and `""` count as absent, while every object and
//! array (empty or not) counts as present.

use serde_json::{Number, Value};
use std::borrow::Cow;

/// Returns `true` when `value` is considered "set" for presence checks.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Truthiness of an optional lookup; a missing key is never truthy.
pub fn is_set(value: Option<&Value>) -> bool {
    value.is_some_and(is_truthy)
}

/// Scalar identity comparison.
///
/// Numbers compare numerically (`1` equals `1.0`). Arrays and objects are
/// never strictly equal to anything, not even a structurally identical value.
pub fn strict_equals(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::String(x), Value::String(y)) => x == y,
        (Value::Number(x), Value::Number(y)) => match (x.as_f64(), y.as_f64()) {
            (Some(x), Some(y)) => x == y,
            _ => false,
        },
        _ => false,
    }
}

/// Serializes `value` with integral floats written as integers, so `1.0` and
/// `1` produce the same text. Object keys keep document order.
pub fn canonical_json(value: &Value) -> String {
    canonicalize(value).to_string()
}

fn canonicalize(value: &Value) -> Value {
    match value {
        Value::Number(n) => Value::Number(canonical_number(n)),
        Value::Array(items) => Value::Array(items.iter().map(canonicalize).collect()),
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(k, v)| (k.clone(), canonicalize(v)))
                .collect(),
        ),
        other => other.clone(),
    }
}

fn canonical_number(n: &Number) -> Number {
    if n.is_f64() {
        if let Some(f) = n.as_f64() {
            if f.fract() == 0.0 && f.abs() < 9_007_199_254_740_992.0 {
                return Number::from(f as i64);
            }
        }
    }
    n.clone()
}

/// Human-facing rendering used inside diagnostics: strings appear bare,
/// everything else as compact JSON.
pub fn display(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(s) => Cow::Borrowed(s.as_str()),
        other => Cow::Owned(other.to_string()),
    }
}
