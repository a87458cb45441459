//! Process exit codes. Automation keys off these, so they are part of the public contract.

use hlstb_core::Outcome;

pub const SUCCESS: i32 = 0;
pub const VERIFICATION_FAILED: i32 = 1; // At least one check failed
pub const INTERNAL_ERROR: i32 = 2; // Harness could not produce a verdict

pub fn from_outcome(outcome: Outcome) -> i32 {
    match outcome {
        Outcome::Pass => SUCCESS,
        Outcome::Fail => VERIFICATION_FAILED,
    }
}
