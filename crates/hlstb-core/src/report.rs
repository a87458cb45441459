use crate::error::HarnessError;
use crate::vector::TestVector;
use serde::Serialize;
use std::io::Write;

pub const SUCCESS_BANNER: &str = "----- Test is successful -----";
pub const FAILURE_BANNER: &str = "----- Test has failed -----";

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Pass,
    Fail,
}

impl Outcome {
    pub fn from_comparison(actual: i32, expected: i32) -> Self {
        if actual == expected {
            Outcome::Pass
        } else {
            Outcome::Fail
        }
    }

    pub fn is_pass(self) -> bool {
        self == Outcome::Pass
    }

    pub fn banner(self) -> &'static str {
        match self {
            Outcome::Pass => SUCCESS_BANNER,
            Outcome::Fail => FAILURE_BANNER,
        }
    }
}

#[derive(Debug, Serialize, Clone)]
pub struct HarnessReport {
    pub suite: String,
    pub dut: String,
    pub summary: HarnessSummary,
    pub results: Vec<CheckResult>,
}

#[derive(Debug, Serialize, Clone, Default, PartialEq, Eq)]
pub struct HarnessSummary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
}

#[derive(Debug, Serialize, Clone)]
pub struct CheckResult {
    pub name: String,
    pub inputs: TestVector,
    pub expected: i32,
    pub actual: i32,
    pub outcome: Outcome,
    pub duration_us: u64,
}

impl HarnessReport {
    pub fn new(suite: &str, dut: &str) -> Self {
        Self {
            suite: suite.to_string(),
            dut: dut.to_string(),
            summary: HarnessSummary::default(),
            results: Vec::new(),
        }
    }

    pub fn add_result(&mut self, result: CheckResult) {
        self.summary.total += 1;
        match result.outcome {
            Outcome::Pass => self.summary.passed += 1,
            Outcome::Fail => self.summary.failed += 1,
        }
        self.results.push(result);
    }

    /// Pass only when at least one check ran and none failed.
    pub fn outcome(&self) -> Outcome {
        if self.summary.total > 0 && self.summary.failed == 0 {
            Outcome::Pass
        } else {
            Outcome::Fail
        }
    }

    pub fn to_json(&self) -> Result<String, HarnessError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Writes the single verdict line for the whole report.
pub fn write_banner<W: Write>(report: &HarnessReport, out: &mut W) -> Result<(), HarnessError> {
    writeln!(out, "{}", report.outcome().banner())?;
    out.flush()?;
    Ok(())
}
