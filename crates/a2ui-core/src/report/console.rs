use super::SuiteReport;
use crate::model::CaseStatus;

/// Human-readable report on stderr.
pub fn print_report(report: &SuiteReport) {
    for r in &report.results {
        let icon = match r.status {
            CaseStatus::Pass => "✔",
            CaseStatus::Fail => "✖",
            CaseStatus::Error => "⚠️ ",
        };
        match &r.description {
            Some(d) => eprintln!("{} {} ({})", icon, r.id, d),
            None => eprintln!("{} {}", icon, r.id),
        }
        for e in &r.errors {
            eprintln!("    - {}", e);
        }
    }
    print_summary(report);
}

pub fn print_summary(report: &SuiteReport) {
    let s = report.summary();
    eprintln!(
        "Results: pass={} fail={} error={}",
        s.passed, s.failed, s.errored
    );
}
