use crate::model::EvalSuite;
use std::collections::HashSet;
use std::path::Path;

pub const SUPPORTED_SUITE_VERSION: u32 = 1;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read suite {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("unsupported suite version {found} (supported: {supported})")]
    UnsupportedVersion { found: u32, supported: u32 },
    #[error("suite has no cases")]
    NoCases,
    #[error("duplicate case id: {0}")]
    DuplicateCaseId(String),
    #[error("case '{id}' must set exactly one of 'message', 'file' or 'response' (found {found})")]
    PayloadSource { id: String, found: usize },
}

pub fn load_suite(path: &Path) -> Result<EvalSuite, ConfigError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.display().to_string(),
        source,
    })?;
    parse_suite(&raw)
}

pub fn parse_suite(raw: &str) -> Result<EvalSuite, ConfigError> {
    let suite: EvalSuite = serde_yaml::from_str(raw)?;
    if suite.version != SUPPORTED_SUITE_VERSION {
        return Err(ConfigError::UnsupportedVersion {
            found: suite.version,
            supported: SUPPORTED_SUITE_VERSION,
        });
    }
    if suite.cases.is_empty() {
        return Err(ConfigError::NoCases);
    }

    let mut seen = HashSet::new();
    for case in &suite.cases {
        if !seen.insert(case.id.as_str()) {
            return Err(ConfigError::DuplicateCaseId(case.id.clone()));
        }
        let found = case.source_count();
        if found != 1 {
            return Err(ConfigError::PayloadSource {
                id: case.id.clone(),
                found,
            });
        }
        if case.expect.is_empty() {
            tracing::warn!(case = %case.id, "case has no expectations; only structure is checked");
        }
    }

    Ok(suite)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_suite() {
        let suite = parse_suite(
            r#"
version: 1
suite: smoke
cases:
  - id: delete
    message: { deleteSurface: { surfaceId: s1 } }
"#,
        )
        .unwrap();
        assert_eq!(suite.suite, "smoke");
        assert_eq!(suite.cases.len(), 1);
    }

    #[test]
    fn rejects_wrong_version_and_empty_suites() {
        let err = parse_suite("version: 2\nsuite: s\ncases: []").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::UnsupportedVersion {
                found: 2,
                supported: 1
            }
        ));
        let err = parse_suite("version: 1\nsuite: s\ncases: []").unwrap_err();
        assert!(matches!(err, ConfigError::NoCases));
    }

    #[test]
    fn rejects_duplicate_ids_and_ambiguous_sources() {
        let dup = r#"
version: 1
suite: s
cases:
  - { id: a, response: "{}" }
  - { id: a, response: "{}" }
"#;
        assert_eq!(
            parse_suite(dup).unwrap_err().to_string(),
            "duplicate case id: a"
        );

        let none = "version: 1\nsuite: s\ncases:\n  - { id: empty }\n";
        assert_eq!(
            parse_suite(none).unwrap_err().to_string(),
            "case 'empty' must set exactly one of 'message', 'file' or 'response' (found 0)"
        );
    }

    #[test]
    fn missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_suite(&dir.path().join("absent.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
        assert!(err.to_string().contains("absent.yaml"));
    }
}
