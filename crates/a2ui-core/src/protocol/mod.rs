//! Typed views over A2UI protocol messages.
//!
//! Messages stay as borrowed `serde_json::Value`s; decoding only classifies
//! them by their single tag key so the validator can dispatch without
//! re-checking key presence everywhere.

pub mod component;

pub use component::{ComponentDecodeError, ComponentEntry, ComponentIds, ComponentType};

use crate::json::is_truthy;
use serde_json::{Map, Value};
use std::fmt;

/// Top-level message kinds, in dispatch priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKind {
    SurfaceUpdate,
    DataModelUpdate,
    BeginRendering,
    DeleteSurface,
}

impl MessageKind {
    pub const ALL: [MessageKind; 4] = [
        MessageKind::SurfaceUpdate,
        MessageKind::DataModelUpdate,
        MessageKind::BeginRendering,
        MessageKind::DeleteSurface,
    ];

    /// The JSON key that tags this kind.
    pub fn key(self) -> &'static str {
        match self {
            MessageKind::SurfaceUpdate => "surfaceUpdate",
            MessageKind::DataModelUpdate => "dataModelUpdate",
            MessageKind::BeginRendering => "beginRendering",
            MessageKind::DeleteSurface => "deleteSurface",
        }
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("A2UI Protocol message must have one of: surfaceUpdate, dataModelUpdate, beginRendering, deleteSurface.")]
    MissingKind,
}

/// Read-only property bag of a message or component.
///
/// Non-object JSON is viewed as an empty bag, so lookups on malformed input
/// report "missing" instead of failing.
#[derive(Debug, Clone, Copy)]
pub struct Payload<'a> {
    fields: Option<&'a Map<String, Value>>,
}

impl<'a> Payload<'a> {
    pub fn new(value: &'a Value) -> Self {
        Self {
            fields: value.as_object(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&'a Value> {
        self.fields.and_then(|m| m.get(key))
    }

    /// Key is defined; an explicit `null` still counts.
    pub fn has(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &'a str> + 'a {
        self.fields
            .into_iter()
            .flat_map(|m| m.keys().map(String::as_str))
    }

    /// Keys not listed in `allowed`, in document order.
    pub fn unexpected_keys(&self, allowed: &[&str]) -> Vec<&'a str> {
        self.keys().filter(|k| !allowed.contains(k)).collect()
    }
}

/// A protocol message classified by its tag key.
#[derive(Debug, Clone, Copy)]
pub enum ProtocolMessage<'a> {
    SurfaceUpdate(Payload<'a>),
    DataModelUpdate(Payload<'a>),
    BeginRendering(Payload<'a>),
    DeleteSurface(Payload<'a>),
}

impl<'a> ProtocolMessage<'a> {
    /// Classifies `message` by the first set kind key in [`MessageKind::ALL`]
    /// order. A message carrying several kind keys resolves to the first one.
    pub fn decode(message: &'a Value) -> Result<Self, DecodeError> {
        let fields = message.as_object().ok_or(DecodeError::MissingKind)?;
        let mut present = MessageKind::ALL
            .into_iter()
            .filter_map(|kind| {
                fields
                    .get(kind.key())
                    .filter(|v| is_truthy(v))
                    .map(|v| (kind, v))
            })
            .peekable();

        let (kind, payload) = present.next().ok_or(DecodeError::MissingKind)?;
        if present.peek().is_some() {
            let ignored: Vec<&str> = present.map(|(k, _)| k.key()).collect();
            tracing::debug!(selected = %kind, ?ignored, "message carries more than one kind key");
        }

        let payload = Payload::new(payload);
        Ok(match kind {
            MessageKind::SurfaceUpdate => ProtocolMessage::SurfaceUpdate(payload),
            MessageKind::DataModelUpdate => ProtocolMessage::DataModelUpdate(payload),
            MessageKind::BeginRendering => ProtocolMessage::BeginRendering(payload),
            MessageKind::DeleteSurface => ProtocolMessage::DeleteSurface(payload),
        })
    }

    pub fn kind(&self) -> MessageKind {
        match self {
            ProtocolMessage::SurfaceUpdate(_) => MessageKind::SurfaceUpdate,
            ProtocolMessage::DataModelUpdate(_) => MessageKind::DataModelUpdate,
            ProtocolMessage::BeginRendering(_) => MessageKind::BeginRendering,
            ProtocolMessage::DeleteSurface(_) => MessageKind::DeleteSurface,
        }
    }
}
