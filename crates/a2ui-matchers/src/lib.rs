use a2ui_core::matchers_api::{Matcher, ValidationResult};
use a2ui_core::model::MatcherSpec;
use serde_json::Value;

mod surface_component;
pub mod value_eq;

pub use surface_component::SurfaceUpdateComponentMatcher;

/// Registry of the built-in matcher variants.
#[derive(Debug, Clone)]
pub enum BuiltinMatcher {
    SurfaceUpdateComponent(SurfaceUpdateComponentMatcher),
}

impl BuiltinMatcher {
    pub fn from_spec(spec: &MatcherSpec) -> Self {
        match spec {
            MatcherSpec::SurfaceUpdateComponent {
                component_type,
                property_name,
                property_value,
            } => BuiltinMatcher::SurfaceUpdateComponent(SurfaceUpdateComponentMatcher {
                component_type: component_type.clone(),
                property_name: property_name.clone(),
                property_value: property_value.clone(),
            }),
        }
    }
}

impl From<SurfaceUpdateComponentMatcher> for BuiltinMatcher {
    fn from(m: SurfaceUpdateComponentMatcher) -> Self {
        BuiltinMatcher::SurfaceUpdateComponent(m)
    }
}

impl Matcher for BuiltinMatcher {
    fn name(&self) -> &'static str {
        match self {
            BuiltinMatcher::SurfaceUpdateComponent(m) => m.name(),
        }
    }

    fn validate(&self, message: &Value) -> ValidationResult {
        match self {
            BuiltinMatcher::SurfaceUpdateComponent(m) => m.validate(message),
        }
    }
}

pub fn build_matchers(specs: &[MatcherSpec]) -> Vec<BuiltinMatcher> {
    specs.iter().map(BuiltinMatcher::from_spec).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn spec_builds_equivalent_matcher() {
        let spec: MatcherSpec = serde_yaml::from_str(
            "{ type: surface_update_component, component_type: Text, property_name: text }",
        )
        .unwrap();
        let built = build_matchers(&[spec]);
        assert_eq!(built.len(), 1);
        assert_eq!(built[0].name(), "surface_update_component");

        let msg = json!({"surfaceUpdate": {"surfaceId": "s", "components": [
            {"id": "t", "component": {"Text": {"text": {"literalString": "hi"}}}}
        ]}});
        assert!(built[0].validate(&msg).success);
    }
}
