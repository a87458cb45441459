//! Pass/fail verification of an HLS top function against a reference model.

pub mod config;
pub mod dut;
pub mod error;
pub mod harness;
pub mod reference;
pub mod report;
pub mod vector;

pub use config::HarnessConfig;
pub use dut::{DesignFn, FunctionUnderTest};
pub use error::HarnessError;
pub use harness::Harness;
pub use report::{write_banner, CheckResult, HarnessReport, HarnessSummary, Outcome};
pub use vector::{TestVector, VectorCase};
