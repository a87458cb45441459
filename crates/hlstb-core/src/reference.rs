//! Golden model for the design's arithmetic contract.
//!
//! Must never call into the design crate. Multiplication binds tighter than
//! addition.

use crate::vector::TestVector;

pub fn expected(v: &TestVector) -> i32 {
    v.a.wrapping_add(v.b.wrapping_mul(v.c))
}
