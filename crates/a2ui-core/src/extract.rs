//! Pulling a protocol message out of raw model output.
//!
//! Generators tend to wrap the JSON in a fenced code block or surround it
//! with prose. Candidates are tried in order: the whole text, the first fenced
//! block, then the span from the first `{` to the last `}`.

use serde_json::Value;

#[derive(Debug, thiserror::Error)]
pub enum PayloadError {
    #[error("no JSON object found in response")]
    NoJson,
    #[error("invalid JSON payload: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Parses the first candidate that is valid JSON. When every candidate fails,
/// the error of the first extracted candidate is returned.
pub fn parse_payload(text: &str) -> Result<Value, PayloadError> {
    if let Ok(value) = serde_json::from_str::<Value>(text) {
        return Ok(value);
    }

    let mut first_error = None;
    for candidate in [fenced_block(text), brace_span(text)].into_iter().flatten() {
        match serde_json::from_str(candidate) {
            Ok(value) => return Ok(value),
            Err(e) => {
                tracing::debug!(error = %e, "payload candidate is not JSON");
                first_error.get_or_insert(e);
            }
        }
    }
    Err(first_error.map_or(PayloadError::NoJson, PayloadError::Parse))
}

fn fenced_block(text: &str) -> Option<&str> {
    let open = text.find("```")?;
    let after_fence = &text[open + 3..];
    let line_end = after_fence.find('\n');
    let close_on_line = after_fence.find("```");
    let body = match line_end {
        // Skip the info string (e.g. `json`) up to the end of the fence line.
        Some(i) if !close_on_line.is_some_and(|c| c < i) => &after_fence[i + 1..],
        // Single-line fence: only a leading info word precedes the payload.
        _ => after_fence.trim_start_matches(|c: char| c.is_ascii_alphanumeric()),
    };
    let close = body.find("```")?;
    let block = body[..close].trim();
    (!block.is_empty()).then_some(block)
}

fn brace_span(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (end > start).then(|| &text[start..=end])
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn plain_json_is_parsed_directly() {
        let v = parse_payload(r#"{"deleteSurface": {"surfaceId": "s"}}"#).unwrap();
        assert_eq!(v, json!({"deleteSurface": {"surfaceId": "s"}}));
    }

    #[test]
    fn fenced_block_wins_over_braces_in_prose() {
        let text = "Here is {the} UI:\n```json\n{\"beginRendering\": {\"surfaceId\": \"s\", \"root\": \"r\"}}\n```\nEnjoy {it}.";
        let v = parse_payload(text).unwrap();
        assert_eq!(v["beginRendering"]["root"], "r");
    }

    #[test]
    fn untagged_fence_and_bare_braces() {
        assert_eq!(fenced_block("```\n{\"a\": 1}\n```"), Some("{\"a\": 1}"));
        assert_eq!(brace_span("sure! {\"a\": {\"b\": 2}} done"), Some("{\"a\": {\"b\": 2}}"));
    }

    #[test]
    fn single_line_fence_with_info_word() {
        let text = "Sure: ```json {\"deleteSurface\": {\"surfaceId\": \"s\"}}```";
        assert_eq!(
            fenced_block(text),
            Some("{\"deleteSurface\": {\"surfaceId\": \"s\"}}")
        );
        let v = parse_payload(text).unwrap();
        assert_eq!(v, json!({"deleteSurface": {"surfaceId": "s"}}));
    }

    #[test]
    fn broken_fence_falls_back_to_brace_span() {
        let text = "```ui\n<Button/>\n``` fallback {\"beginRendering\": {\"surfaceId\": \"s\", \"root\": \"r\"}}";
        let v = parse_payload(text).unwrap();
        assert_eq!(v["beginRendering"]["root"], "r");
    }

    #[test]
    fn missing_or_broken_json_is_an_error() {
        assert!(matches!(parse_payload("no ui today"), Err(PayloadError::NoJson)));
        assert!(matches!(parse_payload("{ oops }"), Err(PayloadError::Parse(_))));
    }
}
