use crate::vector::{TestVector, VectorCase};

#[derive(Debug, Clone)]
pub struct HarnessConfig {
    pub suite: String,
    pub vectors: Vec<VectorCase>,
}

impl Default for HarnessConfig {
    /// The testbench's single fixed check: `hls_main(1, 2, 3) == 1 + 2 * 3`.
    fn default() -> Self {
        Self {
            suite: "default".into(),
            vectors: vec![VectorCase::from_reference(
                "hls_main(1, 2, 3)",
                TestVector::DEFAULT,
            )],
        }
    }
}
