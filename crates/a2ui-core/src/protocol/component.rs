//! Component entries of a `surfaceUpdate` message.

use super::Payload;
use crate::json::{display, is_truthy};
use serde_json::Value;
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// The closed set of component kinds a surface may declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentType {
    Heading,
    Text,
    Image,
    Video,
    AudioPlayer,
    TextField,
    DateTimeInput,
    MultipleChoice,
    Slider,
    CheckBox,
    Row,
    Column,
    List,
    Card,
    Tabs,
    Modal,
    Button,
    Divider,
}

impl ComponentType {
    pub const ALL: [ComponentType; 18] = [
        ComponentType::Heading,
        ComponentType::Text,
        ComponentType::Image,
        ComponentType::Video,
        ComponentType::AudioPlayer,
        ComponentType::TextField,
        ComponentType::DateTimeInput,
        ComponentType::MultipleChoice,
        ComponentType::Slider,
        ComponentType::CheckBox,
        ComponentType::Row,
        ComponentType::Column,
        ComponentType::List,
        ComponentType::Card,
        ComponentType::Tabs,
        ComponentType::Modal,
        ComponentType::Button,
        ComponentType::Divider,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ComponentType::Heading => "Heading",
            ComponentType::Text => "Text",
            ComponentType::Image => "Image",
            ComponentType::Video => "Video",
            ComponentType::AudioPlayer => "AudioPlayer",
            ComponentType::TextField => "TextField",
            ComponentType::DateTimeInput => "DateTimeInput",
            ComponentType::MultipleChoice => "MultipleChoice",
            ComponentType::Slider => "Slider",
            ComponentType::CheckBox => "CheckBox",
            ComponentType::Row => "Row",
            ComponentType::Column => "Column",
            ComponentType::List => "List",
            ComponentType::Card => "Card",
            ComponentType::Tabs => "Tabs",
            ComponentType::Modal => "Modal",
            ComponentType::Button => "Button",
            ComponentType::Divider => "Divider",
        }
    }

    /// Properties that must be present (any value, including `null`).
    pub fn required_properties(self) -> &'static [&'static str] {
        match self {
            ComponentType::Heading | ComponentType::Text => &["text"],
            ComponentType::Image | ComponentType::Video | ComponentType::AudioPlayer => &["url"],
            ComponentType::TextField => &["label"],
            ComponentType::DateTimeInput | ComponentType::Slider => &["value"],
            ComponentType::MultipleChoice => &["selections", "options"],
            ComponentType::CheckBox => &["value", "label"],
            ComponentType::Row | ComponentType::Column | ComponentType::List => &["children"],
            ComponentType::Card => &["child"],
            ComponentType::Tabs => &["tabItems"],
            ComponentType::Modal => &["entryPointChild", "contentChild"],
            ComponentType::Button => &["label", "action"],
            ComponentType::Divider => &[],
        }
    }
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ComponentType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter().find(|t| t.name() == s).ok_or(())
    }
}

/// Reasons a component entry cannot be checked any further.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ComponentDecodeError {
    #[error("Component is missing an 'id'.")]
    MissingId,
    #[error("Component '{id}' is missing 'component'.")]
    MissingComponent { id: String },
    #[error("Component '{id}' must have exactly one property in 'component', but found {found}.")]
    TypeKeyCount { id: String, found: usize },
    #[error("Unknown component type '{type_name}' in component '{id}'.")]
    UnknownType { id: String, type_name: String },
}

/// One decoded `{ id, component: { <Type>: properties } }` entry.
#[derive(Debug, Clone, Copy)]
pub struct ComponentEntry<'a> {
    pub id: &'a Value,
    pub component_type: ComponentType,
    pub properties: Payload<'a>,
}

impl<'a> ComponentEntry<'a> {
    pub fn decode(entry: &'a Value) -> Result<Self, ComponentDecodeError> {
        let id = entry
            .get("id")
            .filter(|v| is_truthy(v))
            .ok_or(ComponentDecodeError::MissingId)?;

        let component = entry.get("component").filter(|v| is_truthy(v)).ok_or_else(|| {
            ComponentDecodeError::MissingComponent {
                id: display(id).into_owned(),
            }
        })?;

        let tagged = component.as_object();
        let found = tagged.map_or(0, |m| m.len());
        let (type_name, properties) = match tagged.and_then(|m| m.iter().next()) {
            Some(pair) if found == 1 => pair,
            _ => {
                return Err(ComponentDecodeError::TypeKeyCount {
                    id: display(id).into_owned(),
                    found,
                })
            }
        };

        let component_type = type_name.parse::<ComponentType>().map_err(|()| {
            ComponentDecodeError::UnknownType {
                id: display(id).into_owned(),
                type_name: type_name.clone(),
            }
        })?;

        Ok(Self {
            id,
            component_type,
            properties: Payload::new(properties),
        })
    }

    pub fn id_display(&self) -> std::borrow::Cow<'a, str> {
        display(self.id)
    }
}

/// Ids declared in one `surfaceUpdate`.
///
/// Keys are the JSON text of the id so `5` and `"5"` stay distinct.
#[derive(Debug, Default)]
pub struct ComponentIds {
    keys: HashSet<String>,
}

impl ComponentIds {
    /// Returns `false` when the id was already declared.
    pub fn insert(&mut self, id: &Value) -> bool {
        self.keys.insert(id.to_string())
    }

    pub fn contains(&self, id: &Value) -> bool {
        self.keys.contains(&id.to_string())
    }

    pub(crate) fn len(&self) -> usize {
        self.keys.len()
    }
}
