use crate::config::HarnessConfig;
use crate::dut::FunctionUnderTest;
use crate::error::HarnessError;
use crate::report::{CheckResult, HarnessReport, Outcome};
use crate::vector::VectorCase;
use std::time::Instant;

/// Drives a function under test through a vector table.
///
/// Every case is evaluated in table order and gets its own verdict; a failing
/// case does not stop the remaining ones.
#[derive(Debug)]
pub struct Harness<D> {
    config: HarnessConfig,
    dut: D,
}

impl<D: FunctionUnderTest> Harness<D> {
    pub fn new(config: HarnessConfig, dut: D) -> Self {
        Self { config, dut }
    }

    pub fn run(&self) -> Result<HarnessReport, HarnessError> {
        if self.config.vectors.is_empty() {
            return Err(HarnessError::EmptyVectorTable);
        }

        let mut report = HarnessReport::new(&self.config.suite, self.dut.name());
        for case in &self.config.vectors {
            report.add_result(self.check(case));
        }

        tracing::info!(
            suite = %report.suite,
            dut = %report.dut,
            total = report.summary.total,
            failed = report.summary.failed,
            outcome = ?report.outcome(),
            "verification finished"
        );
        if tracing::enabled!(tracing::Level::DEBUG) {
            let json = report.to_json()?;
            tracing::debug!(report = %json, "verification report");
        }
        Ok(report)
    }

    fn check(&self, case: &VectorCase) -> CheckResult {
        let start = Instant::now();
        let actual = self.dut.call(&case.inputs);
        let duration_us = u64::try_from(start.elapsed().as_micros()).unwrap_or(u64::MAX);
        let outcome = Outcome::from_comparison(actual, case.expected);

        if outcome.is_pass() {
            tracing::debug!(case = %case.name, inputs = %case.inputs, actual, "check passed");
        } else {
            // mismatches must stay below the default `warn` filter
            tracing::info!(
                case = %case.name,
                inputs = %case.inputs,
                expected = case.expected,
                actual,
                "check failed"
            );
        }

        CheckResult {
            name: case.name.clone(),
            inputs: case.inputs,
            expected: case.expected,
            actual,
            outcome,
            duration_us,
        }
    }
}
