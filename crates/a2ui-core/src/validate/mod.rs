//! Structural validation of A2UI protocol messages.
//!
//! The validator never fails: every problem becomes one human-readable line
//! in the returned list, in the order the checks run. An empty list means the
//! message is valid (structurally, and for every supplied matcher).
//!
//! Checks only stop early where nothing further can be attributed:
//! - no recognised kind key (structural checks skipped, matchers still run)
//! - `surfaceUpdate.components` missing or not an array
//! - a component without `id`, or with a malformed `component` object
//! - `dataModelUpdate` without its nested object (nested checks skipped)

mod surface;

use crate::matchers_api::Matcher;
use crate::protocol::{Payload, ProtocolMessage};
use serde_json::Value;

/// Validates structure, then appends the error of every failing matcher in
/// slice order.
pub fn validate<M: Matcher>(message: &Value, matchers: &[M]) -> Vec<String> {
    let mut errors = validate_structure(message);

    for matcher in matchers {
        let result = matcher.validate(message);
        tracing::debug!(
            matcher = matcher.name(),
            success = result.success,
            "matcher evaluated"
        );
        if let Some(error) = result.into_error() {
            errors.push(error);
        }
    }

    errors
}

/// Structural checks only.
pub fn validate_structure(message: &Value) -> Vec<String> {
    let mut errors = Vec::new();

    match ProtocolMessage::decode(message) {
        Ok(decoded) => {
            tracing::debug!(kind = %decoded.kind(), "validating protocol message");
            match decoded {
                ProtocolMessage::SurfaceUpdate(p) => surface::validate_surface_update(p, &mut errors),
                ProtocolMessage::DataModelUpdate(p) => validate_data_model_update(p, &mut errors),
                ProtocolMessage::BeginRendering(p) => validate_begin_rendering(p, &mut errors),
                ProtocolMessage::DeleteSurface(p) => validate_delete_surface(p, &mut errors),
            }
        }
        Err(e) => errors.push(e.to_string()),
    }

    errors
}

fn validate_delete_surface(data: Payload<'_>, errors: &mut Vec<String>) {
    if !data.has("surfaceId") {
        errors.push("DeleteSurface must have a 'surfaceId' property.".to_string());
    }
    for key in data.unexpected_keys(&["surfaceId"]) {
        errors.push(format!("DeleteSurface has unexpected property: {}", key));
    }
}

fn validate_data_model_update(data: Payload<'_>, errors: &mut Vec<String>) {
    if !data.has("surfaceId") {
        errors.push("DataModelUpdate must have a 'surfaceId' property.".to_string());
    }

    let nested = data.get("dataModelUpdate").map(Payload::new);
    match nested {
        Some(nested) => {
            if !nested.has("contents") {
                errors.push("Nested DataModelUpdate must have a 'contents' property.".to_string());
            }
        }
        None => errors.push(
            "DataModelUpdate must have a nested 'dataModelUpdate' property.".to_string(),
        ),
    }

    for key in data.unexpected_keys(&["surfaceId", "dataModelUpdate"]) {
        errors.push(format!(
            "Top-level DataModelUpdate has unexpected property: {}",
            key
        ));
    }

    if let Some(nested) = nested {
        for key in nested.unexpected_keys(&["path", "contents"]) {
            errors.push(format!("Nested DataModelUpdate has unexpected property: {}", key));
        }
    }
}

fn validate_begin_rendering(data: Payload<'_>, errors: &mut Vec<String>) {
    if !data.has("surfaceId") {
        errors.push("BeginRendering message must have a 'surfaceId' property.".to_string());
    }
    if !crate::json::is_set(data.get("root")) {
        errors.push("BeginRendering message must have a 'root' property.".to_string());
    }
}
