use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Declarative description of a matcher, as written in a suite file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MatcherSpec {
    /// A component of `component_type` exists, optionally with a property
    /// that is present or carries a given value.
    SurfaceUpdateComponent {
        component_type: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        property_name: Option<String>,
        /// `None` only when the key is absent; an explicit `null` is a value.
        #[serde(
            default,
            deserialize_with = "present_value",
            skip_serializing_if = "Option::is_none"
        )]
        property_value: Option<Value>,
    },
}

fn present_value<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvalSuite {
    pub version: u32,
    pub suite: String,
    #[serde(default)]
    pub cases: Vec<EvalCase>,
}

/// One candidate payload plus the expectations it must meet.
///
/// Exactly one of `message`, `file` and `response` must be given.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EvalCase {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Inline protocol message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<Value>,
    /// Path to a message or raw response file, relative to the suite file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// Raw model output that embeds a message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
    #[serde(default)]
    pub expect: Vec<MatcherSpec>,
}

#[derive(Debug, Clone, Copy)]
pub enum PayloadSource<'a> {
    Inline(&'a Value),
    File(&'a Path),
    Response(&'a str),
}

impl EvalCase {
    /// Number of payload sources set on this case.
    pub fn source_count(&self) -> usize {
        [
            self.message.is_some(),
            self.file.is_some(),
            self.response.is_some(),
        ]
        .into_iter()
        .filter(|set| *set)
        .count()
    }

    /// The payload source, when exactly one is set.
    pub fn source(&self) -> Option<PayloadSource<'_>> {
        if self.source_count() != 1 {
            return None;
        }
        if let Some(message) = &self.message {
            return Some(PayloadSource::Inline(message));
        }
        if let Some(file) = &self.file {
            return Some(PayloadSource::File(file));
        }
        self.response.as_deref().map(PayloadSource::Response)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseStatus {
    Pass,
    Fail,
    Error,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseResult {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub status: CaseStatus,
    /// Validation errors for `fail`, or the load/parse error for `error`.
    pub errors: Vec<String>,
    #[serde(default)]
    pub duration_ms: u64,
}

impl CaseResult {
    pub fn message(&self) -> String {
        self.errors.join("\n")
    }
}
