use crate::value_eq::value_matches;
use a2ui_core::json::{canonical_json, is_truthy};
use a2ui_core::matchers_api::{Matcher, ValidationResult};
use serde_json::Value;

/// Asserts that a `surfaceUpdate` declares a component of `component_type`,
/// optionally carrying `property_name`, optionally equal to `property_value`.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceUpdateComponentMatcher {
    pub component_type: String,
    pub property_name: Option<String>,
    pub property_value: Option<Value>,
}

impl SurfaceUpdateComponentMatcher {
    pub fn new(component_type: impl Into<String>) -> Self {
        Self {
            component_type: component_type.into(),
            property_name: None,
            property_value: None,
        }
    }

    pub fn with_property(mut self, name: impl Into<String>) -> Self {
        self.property_name = Some(name.into());
        self
    }

    pub fn with_value(mut self, value: Value) -> Self {
        self.property_value = Some(value);
        self
    }

    fn matching_properties<'a>(
        &'a self,
        components: &'a [Value],
    ) -> impl Iterator<Item = &'a Value> + 'a {
        components.iter().filter_map(move |c| {
            c.get("component")
                .filter(|tagged| is_truthy(tagged))
                .and_then(|tagged| tagged.get(&self.component_type))
                .filter(|props| is_truthy(props))
        })
    }
}

impl Matcher for SurfaceUpdateComponentMatcher {
    fn name(&self) -> &'static str {
        "surface_update_component"
    }

    fn validate(&self, message: &Value) -> ValidationResult {
        let Some(surface) = message.get("surfaceUpdate").filter(|v| is_truthy(v)) else {
            return ValidationResult::fail("Expected a 'surfaceUpdate' message but found none.");
        };
        let Some(components) = surface.get("components").and_then(Value::as_array) else {
            return ValidationResult::fail(
                "'surfaceUpdate' message does not contain a 'components' array.",
            );
        };

        let candidates: Vec<&Value> = self.matching_properties(components).collect();
        if candidates.is_empty() {
            return ValidationResult::fail(format!(
                "Failed to find component of type '{}'.",
                self.component_type
            ));
        }

        let Some(property_name) = self.property_name.as_deref().filter(|n| !n.is_empty()) else {
            return ValidationResult::pass();
        };

        for properties in &candidates {
            let Some(actual) = properties.get(property_name) else {
                continue;
            };
            match &self.property_value {
                None => return ValidationResult::pass(),
                Some(expected) if value_matches(actual, expected) => {
                    return ValidationResult::pass()
                }
                Some(_) => {}
            }
        }

        tracing::debug!(
            component_type = %self.component_type,
            property = property_name,
            candidates = candidates.len(),
            "no candidate component satisfied the property expectation"
        );

        match &self.property_value {
            Some(expected) => ValidationResult::fail(format!(
                "Failed to find component of type '{}' with property '{}' containing value '{}'.",
                self.component_type,
                property_name,
                canonical_json(expected)
            )),
            None => ValidationResult::fail(format!(
                "Failed to find component of type '{}' with property '{}'.",
                self.component_type, property_name
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn button_surface(label: Value) -> Value {
        json!({"surfaceUpdate": {"surfaceId": "s1", "components": [
            {"id": "c1", "component": {"Button": {"label": label, "action": {}}}}
        ]}})
    }

    #[test]
    fn requires_surface_update_with_components() {
        let m = SurfaceUpdateComponentMatcher::new("Button");
        assert_eq!(
            m.validate(&json!({"deleteSurface": {"surfaceId": "s"}})),
            ValidationResult::fail("Expected a 'surfaceUpdate' message but found none.")
        );
        assert_eq!(
            m.validate(&json!({"surfaceUpdate": {"surfaceId": "s"}})),
            ValidationResult::fail("'surfaceUpdate' message does not contain a 'components' array.")
        );
    }

    #[test]
    fn type_presence_alone_is_enough_without_property() {
        let msg = button_surface(json!({"literalString": "Go"}));
        assert!(SurfaceUpdateComponentMatcher::new("Button").validate(&msg).success);
        assert_eq!(
            SurfaceUpdateComponentMatcher::new("Text").validate(&msg),
            ValidationResult::fail("Failed to find component of type 'Text'.")
        );
    }

    #[test]
    fn property_presence_without_value() {
        let msg = button_surface(json!(null));
        let present = SurfaceUpdateComponentMatcher::new("Button").with_property("label");
        assert!(present.validate(&msg).success, "null is still a defined property");

        let missing = SurfaceUpdateComponentMatcher::new("Button").with_property("icon");
        assert_eq!(
            missing.validate(&msg),
            ValidationResult::fail("Failed to find component of type 'Button' with property 'icon'.")
        );
    }

    #[test]
    fn property_value_matches_literal_wrapper() {
        let msg = button_surface(json!({"literalString": "Go"}));
        let go = SurfaceUpdateComponentMatcher::new("Button")
            .with_property("label")
            .with_value(json!("Go"));
        assert!(go.validate(&msg).success);

        let stop = SurfaceUpdateComponentMatcher::new("Button")
            .with_property("label")
            .with_value(json!("Stop"));
        assert_eq!(
            stop.validate(&msg).error.as_deref(),
            Some("Failed to find component of type 'Button' with property 'label' containing value '\"Stop\"'.")
        );
    }

    #[test]
    fn any_matching_component_satisfies() {
        let msg = json!({"surfaceUpdate": {"surfaceId": "s1", "components": [
            {"id": "a", "component": {"Text": {"text": {"literalString": "Welcome"}}}},
            {"id": "b", "component": {"Text": {}}},
            {"id": "c", "component": {"Text": {"text": {"literalString": "Menu"}}}}
        ]}});
        let m = SurfaceUpdateComponentMatcher::new("Text")
            .with_property("text")
            .with_value(json!("Menu"));
        assert!(m.validate(&msg).success);
    }

    #[test]
    fn multiple_choice_options_match_by_value_or_label() {
        let msg = json!({"surfaceUpdate": {"surfaceId": "s1", "components": [
            {"id": "cuisine", "component": {"MultipleChoice": {
                "selections": {"path": "/cuisine"},
                "options": [
                    {"label": {"literalString": "Chinese"}, "value": "zh"},
                    {"label": {"literalString": "Mexican"}, "value": "mx"}
                ]
            }}}
        ]}});
        for expected in ["mx", "Chinese"] {
            let m = SurfaceUpdateComponentMatcher::new("MultipleChoice")
                .with_property("options")
                .with_value(json!(expected));
            assert!(m.validate(&msg).success, "{expected} should match");
        }
    }

    #[test]
    fn does_not_require_structural_validity() {
        let msg = json!({"surfaceUpdate": {"components": [
            "garbage",
            {"component": {"Image": {"url": {"literalString": "https://x/y.png"}}, "Text": {}}}
        ]}});
        let m = SurfaceUpdateComponentMatcher::new("Image")
            .with_property("url")
            .with_value(json!("https://x/y.png"));
        assert!(m.validate(&msg).success);
    }

    #[test]
    fn empty_property_name_means_type_only() {
        let msg = button_surface(json!("Go"));
        assert!(SurfaceUpdateComponentMatcher::new("Button")
            .with_property("")
            .validate(&msg)
            .success);
    }
}
