//! Runs an evaluation suite: load each candidate payload, validate it with
//! the case's matchers, and classify the outcome.

use crate::extract::parse_payload;
use crate::matchers_api::Matcher;
use crate::model::{CaseResult, CaseStatus, EvalCase, EvalSuite, MatcherSpec, PayloadSource};
use crate::report::SuiteReport;
use crate::validate::validate;
use serde_json::Value;
use std::borrow::Cow;
use std::path::Path;
use std::time::Instant;

/// Runs every case in order. `build` turns each declared expectation into a
/// matcher; `base_dir` anchors relative payload file paths.
pub fn run_suite<M, F>(suite: &EvalSuite, base_dir: &Path, build: F) -> SuiteReport
where
    M: Matcher,
    F: Fn(&MatcherSpec) -> M,
{
    let results = suite
        .cases
        .iter()
        .map(|case| run_case(case, base_dir, &build))
        .collect();

    SuiteReport {
        suite: suite.suite.clone(),
        results,
    }
}

pub fn run_case<M, F>(case: &EvalCase, base_dir: &Path, build: F) -> CaseResult
where
    M: Matcher,
    F: Fn(&MatcherSpec) -> M,
{
    let started = Instant::now();
    let (status, errors) = match load_payload(case, base_dir) {
        Ok(message) => {
            let matchers: Vec<M> = case.expect.iter().map(&build).collect();
            let errors = validate(&message, &matchers);
            let status = if errors.is_empty() {
                CaseStatus::Pass
            } else {
                CaseStatus::Fail
            };
            (status, errors)
        }
        Err(e) => {
            tracing::warn!(case = %case.id, error = %e, "could not load payload");
            (CaseStatus::Error, vec![e.to_string()])
        }
    };
    tracing::debug!(case = %case.id, ?status, errors = errors.len(), "case evaluated");

    CaseResult {
        id: case.id.clone(),
        description: case.description.clone(),
        status,
        errors,
        duration_ms: started.elapsed().as_millis() as u64,
    }
}

fn load_payload(case: &EvalCase, base_dir: &Path) -> anyhow::Result<Value> {
    let source = case.source().ok_or_else(|| {
        anyhow::anyhow!(
            "case '{}' must set exactly one of 'message', 'file' or 'response'",
            case.id
        )
    })?;

    let value = match source {
        PayloadSource::Inline(message) => message.clone(),
        PayloadSource::Response(text) => parse_payload(text)?,
        PayloadSource::File(path) => {
            let path: Cow<'_, Path> = if path.is_absolute() {
                Cow::Borrowed(path)
            } else {
                Cow::Owned(base_dir.join(path))
            };
            let text = std::fs::read_to_string(&path).map_err(|e| {
                anyhow::anyhow!("failed to read payload {}: {}", path.display(), e)
            })?;
            parse_payload(&text)?
        }
    };
    Ok(value)
}
