use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

/// Outcome of one matcher invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn pass() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    pub fn fail(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(msg.into()),
        }
    }

    /// The error to report, if this result is a failure.
    pub fn into_error(self) -> Option<String> {
        if self.success {
            None
        } else {
            Some(self.error.unwrap_or_default())
        }
    }
}

/// A semantic assertion over one protocol message.
///
/// Matchers must not assume the message passed structural validation, and
/// must not keep state between calls.
pub trait Matcher: Send + Sync {
    fn name(&self) -> &'static str;
    fn validate(&self, message: &Value) -> ValidationResult;
}

impl<M: Matcher + ?Sized> Matcher for &M {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn validate(&self, message: &Value) -> ValidationResult {
        (**self).validate(message)
    }
}

impl<M: Matcher + ?Sized> Matcher for Box<M> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn validate(&self, message: &Value) -> ValidationResult {
        (**self).validate(message)
    }
}

impl<M: Matcher + ?Sized> Matcher for Arc<M> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn validate(&self, message: &Value) -> ValidationResult {
        (**self).validate(message)
    }
}
