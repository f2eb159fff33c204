#![allow(deprecated)]
use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn a2ui_eval() -> Command {
    let mut cmd = Command::cargo_bin("a2ui-eval").unwrap();
    cmd.env_remove("A2UI_EVAL_FORMAT").env_remove("A2UI_EVAL_SUITE");
    cmd
}

fn write_suite(dir: &Path, body: &str) -> std::path::PathBuf {
    let path = dir.join("suite.yaml");
    fs::write(&path, body).unwrap();
    path
}

const PASSING_SUITE: &str = r#"
version: 1
suite: restaurant-finder
cases:
  - id: go-button
    message:
      surfaceUpdate:
        surfaceId: s1
        components:
          - id: c1
            component:
              Button:
                label: { literalString: Go }
                action: {}
    expect:
      - type: surface_update_component
        component_type: Button
        property_name: label
        property_value: Go
  - id: from-file
    file: payloads/begin.json
"#;

#[test]
fn passing_suite_exits_zero_and_writes_reports() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("payloads")).unwrap();
    fs::write(
        dir.path().join("payloads/begin.json"),
        r#"{"beginRendering": {"surfaceId": "s1", "root": "c1"}}"#,
    )
    .unwrap();
    let suite = write_suite(dir.path(), PASSING_SUITE);
    let junit = dir.path().join("junit.xml");
    let output = dir.path().join("report.json");

    a2ui_eval()
        .arg("run")
        .arg("--suite")
        .arg(&suite)
        .arg("--junit")
        .arg(&junit)
        .arg("--output")
        .arg(&output)
        .assert()
        .code(0)
        .stderr(predicate::str::contains("Results: pass=2 fail=0 error=0"));

    let xml = fs::read_to_string(&junit).unwrap();
    assert!(xml.contains(r#"<testsuite name="restaurant-finder" tests="2" failures="0" errors="0">"#));

    let report: Value = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(report["ok"], true);
    assert_eq!(report["summary"]["passed"], 2);
}

#[test]
fn failing_case_exits_one_with_json_on_stdout() {
    let dir = tempdir().unwrap();
    let suite = write_suite(
        dir.path(),
        r#"
version: 1
suite: smoke
cases:
  - id: prose-response
    response: |
      Sure! Here is the UI:
      ```json
      {"surfaceUpdate": {"surfaceId": "s1", "components": [
        {"id": "c1", "component": {"Foo": {}}}
      ]}}
      ```
    expect:
      - { type: surface_update_component, component_type: Button }
"#,
    );

    let out = a2ui_eval()
        .arg("run")
        .arg("--suite")
        .arg(&suite)
        .args(["--format", "json"])
        .assert()
        .code(1)
        .get_output()
        .stdout
        .clone();

    let v: Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(v["results"][0]["status"], "fail");
    assert_eq!(
        v["results"][0]["errors"],
        serde_json::json!([
            "Unknown component type 'Foo' in component 'c1'.",
            "Failed to find component of type 'Button'."
        ])
    );
}

#[test]
fn invalid_suite_is_config_error() {
    let dir = tempdir().unwrap();
    let suite = write_suite(dir.path(), "version: 7\nsuite: s\ncases: []\n");

    a2ui_eval()
        .arg("run")
        .arg("--suite")
        .arg(&suite)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unsupported suite version 7"));
}

#[test]
fn suite_path_from_environment() {
    let dir = tempdir().unwrap();
    let suite = write_suite(
        dir.path(),
        "version: 1\nsuite: env\ncases:\n  - id: del\n    message: { deleteSurface: { surfaceId: s } }\n",
    );

    a2ui_eval()
        .env("A2UI_EVAL_SUITE", &suite)
        .arg("run")
        .assert()
        .code(0)
        .stderr(predicate::str::contains("✔ del"));
}
