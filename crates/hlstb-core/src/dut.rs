use crate::vector::TestVector;

/// A design function the harness can drive.
///
/// Implementations must be pure: the same vector always yields the same value.
pub trait FunctionUnderTest {
    fn name(&self) -> &str;

    fn call(&self, inputs: &TestVector) -> i32;
}

/// Adapts a plain `fn(a, b, c) -> i32` top function.
#[derive(Debug, Clone)]
pub struct DesignFn<F> {
    name: String,
    func: F,
}

impl<F> DesignFn<F>
where
    F: Fn(i32, i32, i32) -> i32,
{
    pub fn new(name: impl Into<String>, func: F) -> Self {
        Self {
            name: name.into(),
            func,
        }
    }
}

impl<F> FunctionUnderTest for DesignFn<F>
where
    F: Fn(i32, i32, i32) -> i32,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn call(&self, inputs: &TestVector) -> i32 {
        (self.func)(inputs.a, inputs.b, inputs.c)
    }
}
