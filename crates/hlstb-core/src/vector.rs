use crate::reference;
use serde::Serialize;
use std::fmt;

/// Input triple applied to the function under test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TestVector {
    pub a: i32,
    pub b: i32,
    pub c: i32,
}

impl TestVector {
    /// The testbench's fixed stimulus.
    pub const DEFAULT: TestVector = TestVector::new(1, 2, 3);

    pub const fn new(a: i32, b: i32, c: i32) -> Self {
        Self { a, b, c }
    }
}

impl fmt::Display for TestVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.a, self.b, self.c)
    }
}

/// One row of a vector table: a named stimulus and the value it must produce.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VectorCase {
    pub name: String,
    pub inputs: TestVector,
    pub expected: i32,
}

impl VectorCase {
    pub fn new(name: impl Into<String>, inputs: TestVector, expected: i32) -> Self {
        Self {
            name: name.into(),
            inputs,
            expected,
        }
    }

    /// Row whose expected value comes from the reference model.
    pub fn from_reference(name: impl Into<String>, inputs: TestVector) -> Self {
        let expected = reference::expected(&inputs);
        Self::new(name, inputs, expected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_vector_is_one_two_three() {
        assert_eq!(TestVector::DEFAULT, TestVector::new(1, 2, 3));
        assert_eq!(TestVector::DEFAULT.to_string(), "(1, 2, 3)");
    }

    #[test]
    fn test_from_reference_fills_expected() {
        let case = VectorCase::from_reference("mac", TestVector::new(4, 5, 6));
        assert_eq!(case.expected, 34);
        assert_eq!(case.name, "mac");
    }
}
