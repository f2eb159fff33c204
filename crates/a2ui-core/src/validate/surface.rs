use crate::json::{display, is_set, is_truthy};
use crate::protocol::{ComponentEntry, ComponentIds, ComponentType, Payload};
use serde_json::Value;

pub(super) fn validate_surface_update(data: Payload<'_>, errors: &mut Vec<String>) {
    if !data.has("surfaceId") {
        errors.push("SurfaceUpdate must have a 'surfaceId' property.".to_string());
    }

    let Some(components) = data.get("components").and_then(Value::as_array) else {
        errors.push("SurfaceUpdate must have a 'components' array.".to_string());
        return;
    };

    let mut ids = ComponentIds::default();
    for entry in components {
        if let Some(id) = entry.get("id").filter(|v| is_truthy(v)) {
            if !ids.insert(id) {
                errors.push(format!("Duplicate component ID found: {}", display(id)));
            }
        }
    }
    tracing::debug!(
        components = components.len(),
        unique_ids = ids.len(),
        "collected component ids"
    );

    for entry in components {
        validate_component(entry, &ids, errors);
    }
}

fn validate_component(entry: &Value, ids: &ComponentIds, errors: &mut Vec<String>) {
    let component = match ComponentEntry::decode(entry) {
        Ok(c) => c,
        Err(e) => {
            errors.push(e.to_string());
            return;
        }
    };

    let mut check = ComponentCheck {
        component,
        ids,
        errors,
    };

    check.required(component.component_type.required_properties());

    let props = component.properties;
    match component.component_type {
        ComponentType::Row | ComponentType::Column | ComponentType::List => check.children(),
        ComponentType::Card => check.references([props.get("child")]),
        ComponentType::Tabs => check.tab_items(),
        ComponentType::Modal => {
            check.references([props.get("entryPointChild"), props.get("contentChild")])
        }
        _ => {}
    }
}

/// Per-component checks sharing the id set and error sink.
struct ComponentCheck<'a, 'v> {
    component: ComponentEntry<'v>,
    ids: &'a ComponentIds,
    errors: &'a mut Vec<String>,
}

impl<'v> ComponentCheck<'_, 'v> {
    fn required(&mut self, props: &[&str]) {
        for prop in props {
            if !self.component.properties.has(prop) {
                self.errors.push(format!(
                    "Component '{}' of type '{}' is missing required property '{}'.",
                    self.component.id_display(),
                    self.component.component_type,
                    prop
                ));
            }
        }
    }

    /// Unset entries are skipped; only set references must resolve.
    fn references<I>(&mut self, refs: I)
    where
        I: IntoIterator<Item = Option<&'v Value>>,
    {
        for reference in refs.into_iter().flatten() {
            if is_truthy(reference) && !self.ids.contains(reference) {
                self.errors.push(format!(
                    "Component '{}' references non-existent component ID '{}'.",
                    self.component.id_display(),
                    display(reference)
                ));
            }
        }
    }

    fn children(&mut self) {
        let Some(children) = self.component.properties.get("children") else {
            return;
        };
        if !children.is_object() {
            return;
        }

        let explicit = children.get("explicitList").filter(|v| is_truthy(v));
        let template = children.get("template").filter(|v| is_truthy(v));

        if explicit.is_some() == template.is_some() {
            self.errors.push(format!(
                "Component '{}' must have either 'explicitList' or 'template' in children, but not both or neither.",
                self.component.id_display()
            ));
        }

        if let Some(list) = explicit.and_then(Value::as_array) {
            self.references(list.iter().map(Some));
        }
        if let Some(template) = template {
            self.references([template.get("componentId")]);
        }
    }

    fn tab_items(&mut self) {
        let Some(items) = self
            .component
            .properties
            .get("tabItems")
            .and_then(Value::as_array)
        else {
            return;
        };

        for tab in items {
            if !is_set(tab.get("title")) {
                self.errors.push(format!(
                    "Tab item in component '{}' is missing a 'title'.",
                    self.component.id_display()
                ));
            }
            if !is_set(tab.get("child")) {
                self.errors.push(format!(
                    "Tab item in component '{}' is missing a 'child'.",
                    self.component.id_display()
                ));
            }
            self.references([tab.get("child")]);
        }
    }
}
