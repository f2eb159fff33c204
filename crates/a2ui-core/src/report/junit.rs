use super::SuiteReport;
use crate::model::CaseStatus;
use std::path::Path;

pub fn render_junit(report: &SuiteReport) -> String {
    let summary = report.summary();
    let mut xml = String::new();
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    xml.push('\n');
    xml.push_str(&format!(
        r#"<testsuite name="{}" tests="{}" failures="{}" errors="{}">"#,
        escape(&report.suite),
        summary.total,
        summary.failed,
        summary.errored
    ));
    xml.push('\n');

    for r in &report.results {
        xml.push_str(&format!(
            r#"  <testcase name="{}" time="{:.3}">"#,
            escape(&r.id),
            r.duration_ms as f64 / 1000.0
        ));
        match r.status {
            CaseStatus::Pass => {}
            CaseStatus::Fail => {
                xml.push_str(&format!(r#"<failure message="{}"/>"#, escape(&r.message())))
            }
            CaseStatus::Error => {
                xml.push_str(&format!(r#"<error message="{}"/>"#, escape(&r.message())))
            }
        }
        xml.push_str("</testcase>\n");
    }

    xml.push_str("</testsuite>\n");
    xml
}

pub fn write_junit(report: &SuiteReport, out: &Path) -> anyhow::Result<()> {
    std::fs::write(out, render_junit(report))
        .map_err(|e| anyhow::anyhow!("failed to write {}: {}", out.display(), e))?;
    Ok(())
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\n', "&#10;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CaseResult;

    #[test]
    fn failures_are_escaped() {
        let report = SuiteReport {
            suite: "ui <smoke>".into(),
            results: vec![
                CaseResult {
                    id: "ok".into(),
                    description: None,
                    status: CaseStatus::Pass,
                    errors: vec![],
                    duration_ms: 12,
                },
                CaseResult {
                    id: "bad".into(),
                    description: None,
                    status: CaseStatus::Fail,
                    errors: vec!["value '\"Stop\"'".into(), "second".into()],
                    duration_ms: 0,
                },
            ],
        };
        let xml = render_junit(&report);
        assert!(xml.contains(r#"<testsuite name="ui &lt;smoke&gt;" tests="2" failures="1" errors="0">"#));
        assert!(xml.contains(r#"<testcase name="ok" time="0.012"></testcase>"#));
        assert!(xml.contains(r#"<failure message="value '&quot;Stop&quot;'&#10;second"/>"#));
    }
}
