//! Format-aware equality between a component property and an expected value.
//!
//! A property "value" may appear as a bare literal, as a literal wrapper
//! (`{"literalString": ..}`), or as a list of option-like objects carrying
//! `value`/`label`. Rules are tried in a fixed order and the first match wins:
//!
//! 1. `null` never matches.
//! 2. Object: `literalString`, `literalNumber`, `literalBoolean` strictly equal.
//! 3. Array: any item whose `value` is strictly equal, whose `label` object has
//!    a strictly equal `literalString`, or (non-object items) that is itself
//!    strictly equal.
//! 4. Canonical JSON text of both sides is identical.

use a2ui_core::json::{canonical_json, strict_equals};
use serde_json::Value;

const LITERAL_FIELDS: [&str; 3] = ["literalString", "literalNumber", "literalBoolean"];

pub fn value_matches(actual: &Value, expected: &Value) -> bool {
    if actual.is_null() {
        return false;
    }

    if let Value::Object(fields) = actual {
        let literal_hit = LITERAL_FIELDS
            .iter()
            .filter_map(|field| fields.get(*field))
            .any(|literal| strict_equals(literal, expected));
        if literal_hit {
            return true;
        }
    }

    if let Value::Array(items) = actual {
        if items.iter().any(|item| item_matches(item, expected)) {
            return true;
        }
    }

    canonical_json(actual) == canonical_json(expected)
}

fn item_matches(item: &Value, expected: &Value) -> bool {
    match item {
        Value::Object(_) | Value::Array(_) => {
            if item.get("value").is_some_and(|v| strict_equals(v, expected)) {
                return true;
            }
            item.get("label")
                .filter(|label| label.is_object())
                .and_then(|label| label.get("literalString"))
                .is_some_and(|s| strict_equals(s, expected))
        }
        scalar => strict_equals(scalar, expected),
    }
}
