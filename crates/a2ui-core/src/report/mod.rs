pub mod console;
pub mod json;
pub mod junit;

use crate::model::{CaseResult, CaseStatus};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuiteReport {
    pub suite: String,
    pub results: Vec<CaseResult>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub errored: usize,
}

impl SuiteReport {
    pub fn summary(&self) -> Summary {
        let mut summary = Summary {
            total: self.results.len(),
            ..Summary::default()
        };
        for r in &self.results {
            match r.status {
                CaseStatus::Pass => summary.passed += 1,
                CaseStatus::Fail => summary.failed += 1,
                CaseStatus::Error => summary.errored += 1,
            }
        }
        summary
    }

    pub fn all_passed(&self) -> bool {
        self.results.iter().all(|r| r.status == CaseStatus::Pass)
    }
}
