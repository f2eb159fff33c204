use super::SuiteReport;
use std::path::Path;

pub fn to_json(report: &SuiteReport) -> serde_json::Value {
    serde_json::json!({
        "schema_version": 1,
        "suite": report.suite,
        "ok": report.all_passed(),
        "results": report.results,
        "summary": report.summary(),
    })
}

pub fn write_json(report: &SuiteReport, out: &Path) -> anyhow::Result<()> {
    std::fs::write(out, serde_json::to_string_pretty(&to_json(report))?)
        .map_err(|e| anyhow::anyhow!("failed to write {}: {}", out.display(), e))?;
    Ok(())
}
